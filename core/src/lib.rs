//! Pure waveform logic for the wavescope visualiser. This crate knows nothing
//! about windows, canvases or input devices. It evaluates periodic waveforms
//! into point buffers and advances the animation state once per frame; the
//! `wavescope_app` crate handles drawing the result.

mod config;
mod phase;
mod sample;
mod scene;
mod waveform;

pub use config::{InvalidConfig, WaveformConfig};
pub use phase::PhaseState;
pub use sample::sample_line;
pub use scene::{LINE_SPACING, Line, Scene};
pub use waveform::Waveform;
