use crate::config::WaveformConfig;
use std::f32::consts::PI;

/// Evaluates one line into a fresh point buffer. The x values are
/// `config.resolution` evenly spaced samples over [0, 1), independent of the
/// phase, so at a frequency of 1Hz the window shows exactly one period. The
/// y value at each sample is
/// `amplitude * shape(2pi * freq_hz * x + phase)`.
///
/// The domain is deliberately half-open: x = 1 is excluded (step `1/n`
/// rather than an inclusive `1/(n - 1)` spacing), so no sample duplicates
/// the start of the next period.
///
/// This is a pure function: identical inputs produce identical output, and
/// the returned buffer always has length exactly `config.resolution`.
pub fn sample_line(config: &WaveformConfig, phase: f32) -> Vec<[f32; 2]> {
    let n = config.resolution;
    let step = 1.0 / n as f32;
    (0..n)
        .map(|i| {
            let x = i as f32 * step;
            let theta = 2.0 * PI * config.freq_hz * x + phase;
            [x, config.amplitude * config.waveform.shape(theta)]
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::waveform::Waveform;

    const EPS: f32 = 1e-4;

    fn config(waveform: Waveform) -> WaveformConfig {
        WaveformConfig {
            waveform,
            freq_hz: 1.0,
            amplitude: 1.0,
            speed: 0.0,
            resolution: 1000,
        }
    }

    #[test]
    fn output_length_equals_resolution() {
        for resolution in [2, 3, 10, 128, 10_000] {
            let mut config = config(Waveform::Sine);
            config.resolution = resolution;
            assert_eq!(sample_line(&config, 0.0).len(), resolution);
            assert_eq!(sample_line(&config, 123.456).len(), resolution);
        }
    }

    #[test]
    fn sine_at_quarter_period_samples() {
        // One period sampled at 4 points lands on the sine's zeroes and
        // extrema: 0, 1, 0, -1.
        let mut config = config(Waveform::Sine);
        config.resolution = 4;
        let points = sample_line(&config, 0.0);
        let expected = [0.0, 1.0, 0.0, -1.0];
        for (i, (point, want)) in points.iter().zip(expected).enumerate() {
            assert!((point[0] - i as f32 * 0.25).abs() < EPS);
            assert!(
                (point[1] - want).abs() < EPS,
                "sample {}: got {}, want {}",
                i,
                point[1],
                want
            );
        }
    }

    #[test]
    fn peak_magnitude_tracks_amplitude() {
        for waveform in [Waveform::Sine, Waveform::Triangle, Waveform::Sawtooth]
        {
            let mut config = config(waveform);
            config.amplitude = 7.5;
            let points = sample_line(&config, 0.0);
            let max = points.iter().map(|p| p[1].abs()).fold(0.0, f32::max);
            assert!(
                (max - 7.5).abs() < 0.1,
                "{}: peak {} should be close to amplitude",
                waveform.name(),
                max
            );
            assert!(max <= 7.5 + EPS);
        }
    }

    #[test]
    fn square_magnitude_equals_amplitude_everywhere() {
        let mut config = config(Waveform::Square);
        config.amplitude = 3.0;
        for point in sample_line(&config, 0.5) {
            assert_eq!(point[1].abs(), 3.0);
        }
    }

    #[test]
    fn evaluation_is_pure() {
        let config = config(Waveform::Sawtooth);
        assert_eq!(sample_line(&config, 2.5), sample_line(&config, 2.5));
    }

    #[test]
    fn phase_shifts_the_waveform() {
        let config = config(Waveform::Sine);
        let unshifted = sample_line(&config, 0.0);
        let shifted = sample_line(&config, std::f32::consts::PI);
        for (a, b) in unshifted.iter().zip(shifted.iter()) {
            assert!((a[1] + b[1]).abs() < EPS);
        }
    }

    #[test]
    fn x_domain_is_independent_of_phase() {
        let config = config(Waveform::Triangle);
        let a = sample_line(&config, 0.0);
        let b = sample_line(&config, 99.0);
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(pa[0], pb[0]);
        }
    }
}
