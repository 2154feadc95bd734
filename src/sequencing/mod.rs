//! Musical timing: the beat clock and stateless functions of beat time.

pub mod arp;
pub mod clock;
pub mod notes;
pub mod sequence;

pub use arp::arp;
pub use clock::{BeatTime, Clock};
pub use notes::{octave, Tuning};
pub use sequence::{sequence, slide};
