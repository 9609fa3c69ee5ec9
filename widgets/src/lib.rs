//! A library of graphical control widgets. Unlike a widget toolkit that owns
//! its own windows, these draw into a rectangle of a host window's canvas and
//! are fed SDL2 events by the host's event loop. The `wavescope_app` crate
//! lays them out into a control panel next to the waveform plot.

mod button;
mod slider;
mod toggle;

pub use button::*;
pub use slider::*;
pub use toggle::*;
