use crate::{
    font::{Font, load_font},
    persistent::WindowPosition,
};
use anyhow::anyhow;
use sdl2::{
    EventPump,
    event::{Event, WindowEvent},
    pixels::Color,
    rect::Rect,
    render::{Canvas, TextureCreator},
    video::{Window as SdlWindow, WindowContext},
};
use std::{
    thread,
    time::{Duration, Instant},
};

const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / 60);
const FONT_PT_SIZE: u16 = 16;

/// An SDL2 window with a canvas, an event pump, and an optional font for
/// rendering text. Windows with a title have their screen position persisted
/// across sessions.
pub struct Window {
    pub canvas: Canvas<SdlWindow>,
    pub event_pump: EventPump,
    pub font: Option<Font<'static, 'static>>,
    pub texture_creator: TextureCreator<WindowContext>,
    pub title: Option<String>,
    pub prev_tick_complete: Instant,
}

impl Window {
    pub fn new(
        title: Option<&str>,
        width_px: u32,
        height_px: u32,
    ) -> anyhow::Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let mut window_builder = video_subsystem.window(
            title.unwrap_or(""),
            width_px,
            height_px,
        );
        if let Some(title) = title {
            if let Some(WindowPosition { x, y }) = WindowPosition::load_(title)
            {
                window_builder.position(x, y);
            }
        }
        let window = window_builder.build()?;
        let canvas = window
            .into_canvas()
            .target_texture()
            .present_vsync()
            .build()?;
        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        let font = match load_font(FONT_PT_SIZE) {
            Ok(font) => Some(font),
            Err(e) => {
                log::warn!("Text rendering disabled: {}", e);
                None
            }
        };
        Ok(Self {
            canvas,
            event_pump,
            font,
            texture_creator,
            title: title.map(|t| t.to_string()),
            prev_tick_complete: Instant::now(),
        })
    }

    /// Sleeps out the remainder of the frame. Vsync normally paces the loop;
    /// this is the fallback when presenting returns immediately.
    pub fn wait_until_next_frame(&self) {
        if let Some(period_to_sleep) = (self.prev_tick_complete
            + FRAME_DURATION)
            .checked_duration_since(Instant::now())
        {
            thread::sleep(period_to_sleep);
        }
    }

    /// The size of `text` when rendered with this window's font, or `None`
    /// when no font was found.
    pub fn text_size(&self, text: &str) -> Option<(u32, u32)> {
        let font = self.font.as_ref()?;
        font.size_of(text).ok()
    }

    /// Draws `text` with its top-left corner at (x, y). A no-op when no font
    /// was found.
    pub fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        colour: Color,
    ) -> anyhow::Result<()> {
        let Some(font) = self.font.as_ref() else {
            return Ok(());
        };
        let text_surface = font
            .render(text)
            .blended(colour)
            .map_err(|e| anyhow!("{e}"))?;
        let text_texture = text_surface.as_texture(&self.texture_creator)?;
        let text_texture_query = text_texture.query();
        let text_rect = Rect::new(
            x,
            y,
            text_texture_query.width,
            text_texture_query.height,
        );
        self.canvas
            .copy(&text_texture, None, Some(text_rect))
            .map_err(|e| anyhow!("{e}"))?;
        Ok(())
    }

    pub fn handle_event_common(event: &Event, title: Option<&String>) {
        match event {
            Event::Quit { .. } => std::process::exit(0),
            Event::Window {
                win_event: WindowEvent::Moved(x, y),
                ..
            } => {
                if let Some(title) = title {
                    (WindowPosition { x: *x, y: *y }).save_(title);
                }
            }
            _ => (),
        }
    }
}
