//! Saturation
//!
//! Two transfer functions are used in the signal chain:
//!
//! Soft Clip:
//!   f(x) = x / (1 + |x|)
//!   - Odd, monotonic, bounded to (-1, 1)
//!   - Slope 1 at the origin, compresses peaks smoothly
//!   - Used inside the diode ladder input stage and to drive the bass voices
//!
//! Hard Clip:
//!   f(x) = clamp(x, -threshold, threshold)
//!   - Used only at the very end, before samples reach the device, because
//!     the mix is not guaranteed to stay inside [-1, 1]
//!
//! # Drive Values
//!
//!   1.0  = gentle (0.5 in → 0.33 out)
//!   2-4  = warm saturation
//!   10   = nearly square (the main bass voice)

/// Soft clip, `x / (1 + |x|)`.
#[inline]
pub fn clip(x: f64) -> f64 {
    x / (1.0 + x.abs())
}

/// Soft clip after multiplying by `drive`.
#[inline]
pub fn soft_clip(sample: f64, drive: f64) -> f64 {
    clip(sample * drive)
}

/// Clamp to `±threshold`. NaN comes out as silence.
#[inline]
pub fn hard_clip(sample: f32, threshold: f32) -> f32 {
    if sample.is_nan() {
        return 0.0;
    }
    sample.clamp(-threshold, threshold)
}

/// Apply hard clipping to an entire buffer in place.
pub fn hard_clip_buffer(buffer: &mut [f32], threshold: f32) {
    for sample in buffer.iter_mut() {
        *sample = hard_clip(*sample, threshold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_of_zero_is_zero() {
        assert_eq!(clip(0.0), 0.0);
    }

    #[test]
    fn test_clip_is_odd_and_bounded() {
        for &x in &[1e-6, 0.1, 0.5, 1.0, 3.0, 100.0, 1e12] {
            assert_eq!(clip(-x), -clip(x));
            assert!(clip(x) < 1.0 && clip(x) > 0.0, "clip({x}) = {}", clip(x));
        }
    }

    #[test]
    fn test_clip_is_monotonic() {
        let mut prev = clip(-50.0);
        for i in -499..=500 {
            let y = clip(i as f64 * 0.1);
            assert!(y > prev, "clip not increasing at {}", i as f64 * 0.1);
            prev = y;
        }
    }

    #[test]
    fn test_soft_clip_unity_drive() {
        // f(0.1) = 0.1 / 1.1 ≈ 0.0909
        assert!((soft_clip(0.1, 1.0) - 0.0909).abs() < 0.001);
    }

    #[test]
    fn test_soft_clip_high_drive() {
        // f(10) = 10 / 11 ≈ 0.909
        let output = soft_clip(1.0, 10.0);
        assert!(output > 0.9 && output < 1.0);
    }

    #[test]
    fn test_hard_clip_limits_and_scrubs_nan() {
        assert_eq!(hard_clip(0.3, 1.0), 0.3);
        assert_eq!(hard_clip(1.6, 1.0), 1.0);
        assert_eq!(hard_clip(-4.0, 1.0), -1.0);
        assert_eq!(hard_clip(f32::NAN, 1.0), 0.0);

        let mut buffer = [2.0, -0.5, f32::INFINITY];
        hard_clip_buffer(&mut buffer, 1.0);
        assert_eq!(buffer, [1.0, -0.5, 1.0]);
    }
}
