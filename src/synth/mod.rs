// Purpose: the piece itself - fixed voices, patterns and arrangement
// This layer sits above the DSP primitives and wires them together

pub mod arrangement;
pub mod patterns;
pub mod renderer;

pub use arrangement::{Arrangement, MixLevels, Section};
pub use renderer::{Frame, Layers, Renderer};
