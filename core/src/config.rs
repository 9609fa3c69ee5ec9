use crate::waveform::Waveform;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidConfig {
    #[error("resolution must be at least 2 (got {0})")]
    ResolutionTooLow(usize),
    #[error("frequency must be positive (got {0})")]
    FrequencyNotPositive(f32),
    #[error("amplitude must be non-negative (got {0})")]
    AmplitudeNegative(f32),
}

/// Parameters controlling how one line is evaluated. The GUI mutates these in
/// place; the evaluator only ever reads them. Validation happens at the
/// boundary where values enter (sliders clamp to their bounds, CLI arguments
/// go through `validate`), never in the per-frame sampling path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveformConfig {
    pub waveform: Waveform,
    pub freq_hz: f32,
    pub amplitude: f32,
    /// Phase advance per second of wall time. May be negative to animate in
    /// reverse.
    pub speed: f32,
    /// Number of sample points drawn per line.
    pub resolution: usize,
}

impl WaveformConfig {
    pub const DEFAULT_FREQ_HZ: f32 = 5.0;
    pub const DEFAULT_AMPLITUDE: f32 = 5.0;
    pub const DEFAULT_SPEED: f32 = 5.0;
    pub const DEFAULT_RESOLUTION: usize = 10_000;

    pub fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            freq_hz: Self::DEFAULT_FREQ_HZ,
            amplitude: Self::DEFAULT_AMPLITUDE,
            speed: Self::DEFAULT_SPEED,
            resolution: Self::DEFAULT_RESOLUTION,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.resolution < 2 {
            return Err(InvalidConfig::ResolutionTooLow(self.resolution));
        }
        // Negated comparisons so that NaN is rejected too.
        if !(self.freq_hz > 0.0) {
            return Err(InvalidConfig::FrequencyNotPositive(self.freq_hz));
        }
        if !(self.amplitude >= 0.0) {
            return Err(InvalidConfig::AmplitudeNegative(self.amplitude));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(WaveformConfig::new(Waveform::Sine).validate(), Ok(()));
    }

    #[test]
    fn resolution_below_two_is_rejected() {
        let mut config = WaveformConfig::new(Waveform::Sine);
        config.resolution = 1;
        assert_eq!(
            config.validate(),
            Err(InvalidConfig::ResolutionTooLow(1))
        );
        config.resolution = 2;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn non_positive_frequency_is_rejected() {
        let mut config = WaveformConfig::new(Waveform::Square);
        config.freq_hz = 0.0;
        assert!(config.validate().is_err());
        config.freq_hz = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_amplitude_is_rejected() {
        let mut config = WaveformConfig::new(Waveform::Triangle);
        config.amplitude = -1.0;
        assert!(config.validate().is_err());
        config.amplitude = 0.0;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn negative_speed_is_allowed() {
        let mut config = WaveformConfig::new(Waveform::Sawtooth);
        config.speed = -10.0;
        assert_eq!(config.validate(), Ok(()));
    }
}
