use anyhow::anyhow;
use sdl2::{event::Event, pixels::Color, rect::Rect};
use wavescope_core::{Scene, WaveformConfig};
use wavescope_widgets::{Button, Slider, Toggle};
use wavescope_window_utils::Window;

const PADDING: i32 = 16;
const TEXT_HEIGHT: i32 = 20;
const TRACK_HEIGHT: u32 = 16;
const ROW_STRIDE: i32 = 56;
const TOGGLE_STRIDE: i32 = 28;
const BUTTON_HEIGHT: u32 = 32;

struct Defaults {
    amplitude: f32,
    freq_hz: f32,
    speed: f32,
    resolution: f32,
}

/// The column of controls to the right of the plot: one slider per shared
/// parameter, a visibility toggle per line, and a reset button. The host
/// event loop feeds every event through `handle_event`; the frame update
/// reads the current values back out.
pub struct ControlPanel {
    rect: Rect,
    amplitude: Slider,
    freq_hz: Slider,
    speed: Slider,
    resolution: Slider,
    visibility: Vec<Toggle>,
    reset: Button,
    defaults: Defaults,
}

impl ControlPanel {
    /// Narrowest panel that leaves room for a usable slider track between
    /// the padding. `main` rejects a `--panel-width` below this.
    pub const MIN_WIDTH: u32 = 2 * PADDING as u32 + 32;

    pub fn new(rect: Rect, scene: &Scene) -> Self {
        let template = scene
            .lines()
            .first()
            .map_or(WaveformConfig::new(wavescope_core::Waveform::Sine), |line| {
                line.config
            });
        let x = rect.x() + PADDING;
        let width = rect.width().saturating_sub(2 * PADDING as u32).max(1);
        let mut y = rect.y() + PADDING + TEXT_HEIGHT;
        let slider = |label, min, max, value, decimal_places, y: &mut i32| {
            let slider = Slider::new(
                label,
                Rect::new(x, *y, width, TRACK_HEIGHT),
                min,
                max,
                value,
                decimal_places,
            );
            *y += ROW_STRIDE;
            slider
        };
        let amplitude =
            slider("Amplitude", 0.0, 10.0, template.amplitude, 2, &mut y);
        let freq_hz =
            slider("Frequency", 1.0, 100.0, template.freq_hz, 2, &mut y);
        let speed = slider("Speed", 0.0, 50.0, template.speed, 2, &mut y);
        let resolution = slider(
            "Points",
            128.0,
            200_000.0,
            template.resolution as f32,
            0,
            &mut y,
        );
        let visibility = scene
            .lines()
            .iter()
            .map(|line| {
                let toggle = Toggle::new(
                    line.config.waveform.name(),
                    Rect::new(x, y, width, TRACK_HEIGHT),
                    Color::RGB(line.colour.r, line.colour.g, line.colour.b),
                    line.visible,
                );
                y += TOGGLE_STRIDE;
                toggle
            })
            .collect();
        y += PADDING;
        let reset =
            Button::new("Reset", Rect::new(x, y, width, BUTTON_HEIGHT));
        Self {
            rect,
            amplitude,
            freq_hz,
            speed,
            resolution,
            visibility,
            reset,
            defaults: Defaults {
                amplitude: template.amplitude,
                freq_hz: template.freq_hz,
                speed: template.speed,
                resolution: template.resolution as f32,
            },
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        self.amplitude.handle_event(event);
        self.freq_hz.handle_event(event);
        self.speed.handle_event(event);
        self.resolution.handle_event(event);
        for toggle in &mut self.visibility {
            toggle.handle_event(event);
        }
        self.reset.handle_event(event);
    }

    /// Whether the panel should receive mouse input at this position. True
    /// inside the panel, and anywhere while a slider drag is in progress so
    /// the drag doesn't hand the plot a stray pan.
    pub fn wants_mouse(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point((x, y)) || self.is_dragging()
    }

    pub fn is_dragging(&self) -> bool {
        self.amplitude.is_dragging()
            || self.freq_hz.is_dragging()
            || self.speed.is_dragging()
            || self.resolution.is_dragging()
    }

    pub fn render(
        &self,
        window: &mut Window,
        paused: bool,
    ) -> anyhow::Result<()> {
        window.canvas.set_draw_color(Color::RGB(24, 24, 24));
        window
            .canvas
            .fill_rect(self.rect)
            .map_err(|e| anyhow!("{e}"))?;
        self.amplitude.render(window)?;
        self.freq_hz.render(window)?;
        self.speed.render(window)?;
        self.resolution.render(window)?;
        for toggle in &self.visibility {
            toggle.render(window)?;
        }
        self.reset.render(window)?;
        let hint = if paused {
            "Paused - space resumes"
        } else {
            "Space pauses, drag pans, wheel zooms"
        };
        window.draw_text(
            hint,
            self.rect.x() + PADDING,
            self.rect.bottom() - PADDING - TEXT_HEIGHT,
            Color::GREY,
        )?;
        Ok(())
    }

    pub fn reset_values(&mut self) {
        self.amplitude.set_value(self.defaults.amplitude);
        self.freq_hz.set_value(self.defaults.freq_hz);
        self.speed.set_value(self.defaults.speed);
        self.resolution.set_value(self.defaults.resolution);
        for toggle in &mut self.visibility {
            toggle.set_on(true);
        }
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude.value()
    }

    pub fn freq_hz(&self) -> f32 {
        self.freq_hz.value()
    }

    pub fn speed(&self) -> f32 {
        self.speed.value()
    }

    pub fn resolution(&self) -> usize {
        self.resolution.value().round() as usize
    }

    /// Visibility flags in the same order as the scene's lines.
    pub fn visibility(&self) -> impl Iterator<Item = bool> + '_ {
        self.visibility.iter().map(|toggle| toggle.on())
    }

    pub fn take_reset_clicked(&mut self) -> bool {
        self.reset.take_clicked()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wavescope_core::Waveform;

    fn panel_with_width(width: u32) -> ControlPanel {
        let scene =
            Scene::with_all_waveforms(WaveformConfig::new(Waveform::Sine));
        ControlPanel::new(Rect::new(660, 0, width, 600), &scene)
    }

    #[test]
    fn narrow_panel_layout_does_not_underflow() {
        // Narrower than the padding on both sides; the track degenerates
        // instead of wrapping around to a ~4-billion-pixel width.
        let panel = panel_with_width(20);
        assert_eq!(panel.freq_hz(), WaveformConfig::DEFAULT_FREQ_HZ);
    }

    #[test]
    fn minimum_width_panel_builds_every_widget() {
        let panel = panel_with_width(ControlPanel::MIN_WIDTH);
        assert_eq!(panel.visibility().count(), Waveform::ALL.len());
        assert!(!panel.is_dragging());
    }

    #[test]
    fn reset_restores_the_initial_values() {
        let mut panel = panel_with_width(300);
        panel.amplitude.set_value(9.0);
        panel.visibility[0].set_on(false);
        panel.reset_values();
        assert_eq!(panel.amplitude(), WaveformConfig::DEFAULT_AMPLITUDE);
        assert!(panel.visibility().all(|visible| visible));
    }
}
