use anyhow::anyhow;
use lazy_static::lazy_static;
pub use sdl2::ttf::Font;
use sdl2::ttf::Sdl2TtfContext;
use std::path::Path;

lazy_static! {
    static ref TTF_CONTEXT: Result<Sdl2TtfContext, String> =
        sdl2::ttf::init().map_err(|e| e.to_string());
}

// Common locations of a monospace font on the platforms we care about. Text
// rendering is decorative (widget labels and values), so callers treat a
// missing font as a warning rather than an error.
const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu-sans-mono-fonts/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/System/Library/Fonts/Monaco.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "C:\\Windows\\Fonts\\consola.ttf",
];

pub fn load_font(pt_size: u16) -> anyhow::Result<Font<'static, 'static>> {
    let ttf_context = TTF_CONTEXT.as_ref().map_err(|e| anyhow!("{e}"))?;
    for path in FONT_PATHS {
        if Path::new(path).exists() {
            return ttf_context
                .load_font(path, pt_size)
                .map_err(|e| anyhow!(e));
        }
    }
    Err(anyhow!("no known monospace font found on this system"))
}
