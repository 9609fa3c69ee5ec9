pub mod font;
pub mod persistent;
mod window;

pub use window::Window;
