use anyhow::anyhow;
use sdl2::{event::Event, mouse::MouseButton, pixels::Color, rect::Rect};
use wavescope_window_utils::Window;

/// A labelled checkbox. Clicking the box (or its label row) flips it. The box
/// fills with the widget's colour while on, which the app uses to match each
/// toggle to the line it controls.
pub struct Toggle {
    label: String,
    rect: Rect,
    colour: Color,
    on: bool,
}

impl Toggle {
    pub fn new(label: &str, rect: Rect, colour: Color, on: bool) -> Self {
        Self {
            label: label.to_string(),
            rect,
            colour,
            on,
        }
    }

    /// Updates the toggle from an event, returning whether it flipped.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if let Event::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } = event
        {
            if self.rect.contains_point((*x, *y)) {
                self.on = !self.on;
                return true;
            }
        }
        false
    }

    pub fn render(&self, window: &mut Window) -> anyhow::Result<()> {
        let box_side = self.rect.height();
        let box_rect =
            Rect::new(self.rect.x(), self.rect.y(), box_side, box_side);
        if self.on {
            window.canvas.set_draw_color(self.colour);
            window
                .canvas
                .fill_rect(box_rect)
                .map_err(|e| anyhow!("{e}"))?;
        }
        window.canvas.set_draw_color(Color::GREY);
        window
            .canvas
            .draw_rect(box_rect)
            .map_err(|e| anyhow!("{e}"))?;
        let label_padding = 8;
        window.draw_text(
            self.label.as_str(),
            self.rect.x() + box_side as i32 + label_padding,
            self.rect.y(),
            Color::WHITE,
        )?;
        Ok(())
    }

    pub fn on(&self) -> bool {
        self.on
    }

    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }
}
