use anyhow::anyhow;
use sdl2::{event::Event, mouse::MouseButton, pixels::Color, rect::Rect};
use wavescope_window_utils::Window;

/// A momentary push button. A click is registered when the mouse is released
/// over the button after being pressed over it; `take_clicked` consumes the
/// click so the host acts on it exactly once.
pub struct Button {
    label: String,
    rect: Rect,
    pressed: bool,
    clicked: bool,
}

impl Button {
    pub fn new(label: &str, rect: Rect) -> Self {
        Self {
            label: label.to_string(),
            rect,
            pressed: false,
            clicked: false,
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                if self.rect.contains_point((*x, *y)) {
                    self.pressed = true;
                }
            }
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                if self.pressed && self.rect.contains_point((*x, *y)) {
                    self.clicked = true;
                }
                self.pressed = false;
            }
            _ => (),
        }
    }

    pub fn render(&self, window: &mut Window) -> anyhow::Result<()> {
        if self.pressed {
            window.canvas.set_draw_color(Color::WHITE);
            window
                .canvas
                .fill_rect(self.rect)
                .map_err(|e| anyhow!("{e}"))?;
        }
        window.canvas.set_draw_color(Color::GREY);
        window
            .canvas
            .draw_rect(self.rect)
            .map_err(|e| anyhow!("{e}"))?;
        let label_colour = if self.pressed {
            Color::BLACK
        } else {
            Color::WHITE
        };
        let (text_width, text_height) = window
            .text_size(self.label.as_str())
            .unwrap_or((0, 0));
        window.draw_text(
            self.label.as_str(),
            self.rect.x() + (self.rect.width() as i32 - text_width as i32) / 2,
            self.rect.y()
                + (self.rect.height() as i32 - text_height as i32) / 2,
            label_colour,
        )?;
        Ok(())
    }

    pub fn take_clicked(&mut self) -> bool {
        let clicked = self.clicked;
        self.clicked = false;
        clicked
    }
}
