//! White noise from a seeded xorshift32 generator.
//!
//! Seeded so that two renderers fed the same clock produce the same
//! samples. Cheap enough to call once per sample: three shifts and xors.

const DEFAULT_SEED: u32 = 0x1234_5678;

#[derive(Debug, Clone)]
pub struct Noise {
    state: u32,
}

impl Default for Noise {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Noise {
    /// A zero seed would lock xorshift at zero, so it is replaced.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    /// Next sample, uniform in `[-1, 1)`.
    #[inline]
    pub fn next_sample(&mut self) -> f64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        (x as f64 / 4_294_967_296.0) * 2.0 - 1.0
    }
}
