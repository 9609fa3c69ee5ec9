use anyhow::anyhow;
use sdl2::{event::Event, mouse::MouseButton, pixels::Color, rect::Rect};
use wavescope_window_utils::Window;

// Fraction of the slider's range covered by one wheel tick.
const WHEEL_STEP: f32 = 0.02;

/// A horizontal slider mapping a pixel position within its track to a value
/// in [min, max]. Click or drag anywhere on the track to set the value;
/// scrolling the wheel over the track nudges it. Values outside the bounds
/// cannot be produced, which is where invalid configurations are prevented.
pub struct Slider {
    label: String,
    rect: Rect,
    min: f32,
    max: f32,
    value: f32,
    decimal_places: usize,
    dragging: bool,
}

impl Slider {
    pub fn new(
        label: &str,
        rect: Rect,
        min: f32,
        max: f32,
        initial_value: f32,
        decimal_places: usize,
    ) -> Self {
        Self {
            label: label.to_string(),
            rect,
            min,
            max,
            value: initial_value.clamp(min, max),
            decimal_places,
            dragging: false,
        }
    }

    fn set_value_from_x(&mut self, x: i32) {
        let fraction = (x - self.rect.x()) as f32 / self.rect.width() as f32;
        self.value = self.min + fraction.clamp(0., 1.) * (self.max - self.min);
    }

    fn nudge(&mut self, wheel_ticks: f32) {
        self.value = (self.value
            + wheel_ticks * WHEEL_STEP * (self.max - self.min))
            .clamp(self.min, self.max);
    }

    /// Updates the slider from an event, returning whether the value changed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                if self.rect.contains_point((*x, *y)) {
                    self.dragging = true;
                    self.set_value_from_x(*x);
                    return true;
                }
            }
            Event::MouseMotion { x, .. } => {
                if self.dragging {
                    self.set_value_from_x(*x);
                    return true;
                }
            }
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                ..
            } => {
                self.dragging = false;
            }
            Event::MouseWheel {
                precise_y,
                mouse_x,
                mouse_y,
                ..
            } => {
                if self.rect.contains_point((*mouse_x, *mouse_y)) {
                    self.nudge(*precise_y);
                    return true;
                }
            }
            _ => (),
        }
        false
    }

    pub fn render(&self, window: &mut Window) -> anyhow::Result<()> {
        // Label above the track, value right-aligned on the same row.
        let text_height = 20;
        window.draw_text(
            self.label.as_str(),
            self.rect.x(),
            self.rect.y() - text_height,
            Color::WHITE,
        )?;
        let value_text =
            format!("{:.*}", self.decimal_places, self.value);
        let value_width = window
            .text_size(value_text.as_str())
            .map_or(0, |(width, _)| width as i32);
        window.draw_text(
            value_text.as_str(),
            self.rect.x() + self.rect.width() as i32 - value_width,
            self.rect.y() - text_height,
            Color::WHITE,
        )?;
        // Filled portion up to the current value, then the track outline.
        let fraction = (self.value - self.min) / (self.max - self.min);
        let filled_width =
            (self.rect.width() as f32 * fraction.clamp(0., 1.)) as u32;
        if filled_width > 0 {
            let filled_rect = Rect::new(
                self.rect.x(),
                self.rect.y(),
                filled_width,
                self.rect.height(),
            );
            window.canvas.set_draw_color(Color::WHITE);
            window
                .canvas
                .fill_rect(filled_rect)
                .map_err(|e| anyhow!("{e}"))?;
        }
        window.canvas.set_draw_color(Color::GREY);
        window
            .canvas
            .draw_rect(self.rect)
            .map_err(|e| anyhow!("{e}"))?;
        Ok(())
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn slider() -> Slider {
        Slider::new("Frequency", Rect::new(10, 0, 100, 16), 1.0, 100.0, 5.0, 2)
    }

    #[test]
    fn initial_value_is_clamped_to_bounds() {
        let rect = Rect::new(0, 0, 100, 16);
        assert_eq!(Slider::new("A", rect, 0.0, 10.0, 99.0, 2).value(), 10.0);
        assert_eq!(Slider::new("A", rect, 0.0, 10.0, -5.0, 2).value(), 0.0);
    }

    #[test]
    fn set_value_clamps_to_bounds() {
        let mut slider = slider();
        slider.set_value(1000.0);
        assert_eq!(slider.value(), 100.0);
        slider.set_value(0.0);
        assert_eq!(slider.value(), 1.0);
    }

    #[test]
    fn dragging_beyond_the_track_pins_the_bounds() {
        let mut slider = slider();
        slider.set_value_from_x(-1000);
        assert_eq!(slider.value(), 1.0);
        slider.set_value_from_x(1000);
        assert_eq!(slider.value(), 100.0);
        // Halfway along the track lands halfway through the range.
        slider.set_value_from_x(60);
        assert!((slider.value() - 50.5).abs() < 1e-3);
    }

    #[test]
    fn wheel_nudges_cannot_escape_the_bounds() {
        let mut slider = slider();
        for _ in 0..1000 {
            slider.nudge(1.0);
        }
        assert_eq!(slider.value(), 100.0);
        for _ in 0..2000 {
            slider.nudge(-1.0);
        }
        assert_eq!(slider.value(), 1.0);
    }
}
