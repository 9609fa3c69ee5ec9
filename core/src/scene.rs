use crate::{
    config::WaveformConfig, phase::PhaseState, sample::sample_line,
    waveform::Waveform,
};
use rgb_int::Rgb24;

/// One visualised line: a waveform config, where and in what colour to draw
/// it, and the point buffer produced on the most recent update. The buffer is
/// replaced wholesale every frame rather than mutated in place, so a live
/// resolution change can never leave stale points behind.
pub struct Line {
    pub config: WaveformConfig,
    pub colour: Rgb24,
    /// Vertical offset separating this line from the others in world space.
    pub y_offset: f32,
    pub visible: bool,
    points: Vec<[f32; 2]>,
}

impl Line {
    pub fn new(config: WaveformConfig, colour: Rgb24, y_offset: f32) -> Self {
        Self {
            config,
            colour,
            y_offset,
            visible: true,
            points: Vec::new(),
        }
    }

    fn regenerate(&mut self, phase: f32) {
        self.points = sample_line(&self.config, phase);
        for point in &mut self.points {
            point[1] += self.y_offset;
        }
    }

    pub fn points(&self) -> &[[f32; 2]] {
        &self.points
    }
}

/// Vertical gap between adjacent lines in world space.
pub const LINE_SPACING: f32 = 20.0;

/// The set of visualised lines plus the animation state. `update` is the
/// per-frame entry point: it advances the phase once and regenerates every
/// visible line's point buffer from its current config.
pub struct Scene {
    lines: Vec<Line>,
    phase: PhaseState,
}

impl Scene {
    /// One line per waveform kind, stacked top to bottom with the classic
    /// colours: blue sine, red square, green triangle, orange sawtooth.
    pub fn with_all_waveforms(template: WaveformConfig) -> Self {
        let colours = [
            Rgb24::new(63, 63, 255),
            Rgb24::new(255, 63, 63),
            Rgb24::new(63, 255, 63),
            Rgb24::new(255, 165, 0),
        ];
        let lines = Waveform::ALL
            .into_iter()
            .zip(colours)
            .enumerate()
            .map(|(i, (waveform, colour))| {
                let config = WaveformConfig { waveform, ..template };
                Line::new(config, colour, i as f32 * LINE_SPACING)
            })
            .collect();
        Self {
            lines,
            phase: PhaseState::new(),
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut [Line] {
        &mut self.lines
    }

    pub fn phase(&self) -> PhaseState {
        self.phase
    }

    pub fn phase_mut(&mut self) -> &mut PhaseState {
        &mut self.phase
    }

    /// Writes the shared parameters into every line's config, preserving each
    /// line's waveform kind. The GUI edits one set of values which applies to
    /// all lines, as sliders do in the control panel.
    pub fn set_shared_params(
        &mut self,
        freq_hz: f32,
        amplitude: f32,
        speed: f32,
        resolution: usize,
    ) {
        for line in &mut self.lines {
            line.config.freq_hz = freq_hz;
            line.config.amplitude = amplitude;
            line.config.speed = speed;
            line.config.resolution = resolution;
        }
    }

    /// The frame updater. `dt` is the elapsed wall time since the previous
    /// call in seconds.
    pub fn update(&mut self, dt: f32) {
        let speed =
            self.lines.first().map_or(0.0, |line| line.config.speed);
        self.phase.advance(dt, speed);
        let phase = self.phase.phase();
        for line in &mut self.lines {
            if line.visible {
                line.regenerate(phase);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn scene() -> Scene {
        Scene::with_all_waveforms(WaveformConfig::new(Waveform::Sine))
    }

    #[test]
    fn one_line_per_waveform() {
        let scene = scene();
        let waveforms = scene
            .lines()
            .iter()
            .map(|line| line.config.waveform)
            .collect::<Vec<_>>();
        assert_eq!(waveforms.as_slice(), Waveform::ALL.as_slice());
    }

    #[test]
    fn update_fills_every_visible_line() {
        let mut scene = scene();
        scene.update(0.0);
        for line in scene.lines() {
            assert_eq!(line.points().len(), line.config.resolution);
        }
    }

    #[test]
    fn live_resolution_change_takes_effect_next_frame() {
        let mut scene = scene();
        scene.set_shared_params(5.0, 5.0, 5.0, 100);
        scene.update(0.016);
        for line in scene.lines() {
            assert_eq!(line.points().len(), 100);
        }
        scene.set_shared_params(5.0, 5.0, 5.0, 10);
        scene.update(0.016);
        for line in scene.lines() {
            assert_eq!(line.points().len(), 10);
        }
    }

    #[test]
    fn lines_are_offset_vertically() {
        let mut scene = scene();
        scene.set_shared_params(1.0, 0.0, 0.0, 2);
        scene.update(0.0);
        for (i, line) in scene.lines().iter().enumerate() {
            // With amplitude zero every point sits exactly on the line's
            // offset.
            for point in line.points() {
                assert_eq!(point[1], i as f32 * LINE_SPACING);
            }
        }
    }

    #[test]
    fn pause_freezes_the_animation() {
        let mut scene = scene();
        scene.update(1.0);
        let before = scene.phase().phase();
        scene.phase_mut().toggle_paused();
        scene.update(1.0);
        assert_eq!(scene.phase().phase(), before);
    }

    #[test]
    fn hidden_lines_are_not_regenerated() {
        let mut scene = scene();
        scene.lines_mut()[1].visible = false;
        scene.update(0.016);
        assert!(scene.lines()[1].points().is_empty());
        assert!(!scene.lines()[0].points().is_empty());
    }
}
