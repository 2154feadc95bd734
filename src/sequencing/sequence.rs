//! Step sequencing driven directly by beat time.
//!
//! A step lasts `2 × measure` beats. Both functions loop over the slice
//! forever; `seq` must not be empty.

/// Fractional step position, wrapped to the sequence length.
#[inline]
fn position(t: f64, measure: f64, len: usize) -> f64 {
    (t / measure / 2.0) % len as f64
}

/// Value of the current step. No interpolation.
#[inline]
pub fn sequence(t: f64, measure: f64, seq: &[f64]) -> f64 {
    debug_assert!(!seq.is_empty(), "sequence over an empty slice");
    let step = (t / measure / 2.0) as usize;
    seq[step % seq.len()]
}

/// Glide from the current step to the next.
///
/// The blend is `alpha^speed`, where `alpha` is how far into the step we
/// are: speed 1 is a straight line, larger values hold the current value
/// and snap to the next one at the end of the step.
#[inline]
pub fn slide(t: f64, measure: f64, seq: &[f64], speed: f64) -> f64 {
    debug_assert!(!seq.is_empty(), "slide over an empty slice");
    let len = seq.len();
    let pos = position(t, measure, len);
    let now = (pos as usize).min(len - 1);
    let next = if now + 1 == len { 0 } else { now + 1 };
    let alpha = pos - now as f64;
    seq[now] + (seq[next] - seq[now]) * alpha.powf(speed)
}
