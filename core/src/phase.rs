/// The only state carried across frames: the accumulated phase offset fed to
/// the evaluator, plus whether the animation is paused. The caller measures
/// elapsed wall time and passes it in, which keeps this type free of clocks
/// and easy to test.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhaseState {
    phase: f32,
    paused: bool,
}

impl PhaseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the phase by `dt * speed`. A paused frame discards its dt
    /// entirely, so resuming continues from where the animation stopped
    /// rather than jumping ahead.
    pub fn advance(&mut self, dt: f32, speed: f32) {
        if !self.paused {
            self.phase += dt * speed;
        }
    }

    pub fn phase(self) -> f32 {
        self.phase
    }

    pub fn paused(self) -> bool {
        self.paused
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}
