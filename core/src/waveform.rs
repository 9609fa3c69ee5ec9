use std::f32::consts::PI;

/// The periodic shapes that can be visualised. Each shape has period 2pi over
/// its angle argument and range [-1, 1].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl Waveform {
    pub const ALL: [Self; 4] =
        [Self::Sine, Self::Square, Self::Triangle, Self::Sawtooth];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sine => "Sine",
            Self::Square => "Square",
            Self::Triangle => "Triangle",
            Self::Sawtooth => "Sawtooth",
        }
    }

    /// Evaluates the canonical shape at an angle in radians. The square wave
    /// treats sign(0) as positive, so it takes the value 1.0 at exact zero
    /// crossings of the underlying sine.
    pub fn shape(self, theta: f32) -> f32 {
        match self {
            Self::Sine => theta.sin(),
            Self::Square => {
                if theta.sin() < 0.0 {
                    -1.0
                } else {
                    1.0
                }
            }
            Self::Triangle => (theta.sin().asin() * 2.0) / PI,
            Self::Sawtooth => {
                let cycles = theta / (2.0 * PI);
                2.0 * (cycles - (cycles + 0.5).floor())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn shapes_are_normalized() {
        for waveform in Waveform::ALL {
            for i in 0..1000 {
                let theta = (i as f32 / 1000.0) * 2.0 * PI;
                let y = waveform.shape(theta);
                assert!(
                    y.abs() <= 1.0 + EPS,
                    "{} out of range at theta={}: {}",
                    waveform.name(),
                    theta,
                    y
                );
            }
        }
    }

    #[test]
    fn shapes_are_periodic() {
        for waveform in Waveform::ALL {
            for i in 0..100 {
                let theta = (i as f32 / 100.0) * 2.0 * PI;
                let y0 = waveform.shape(theta);
                let y1 = waveform.shape(theta + 2.0 * PI);
                assert!(
                    (y0 - y1).abs() < EPS,
                    "{} not 2pi-periodic at theta={}: {} vs {}",
                    waveform.name(),
                    theta,
                    y0,
                    y1
                );
            }
        }
    }

    #[test]
    fn square_is_positive_at_zero_crossings() {
        assert_eq!(Waveform::Square.shape(0.0), 1.0);
        // sin(pi) is not exactly zero in f32 but the convention holds at the
        // representable angle closest to 0.
        assert_eq!(Waveform::Square.shape(2.0 * PI).abs(), 1.0);
    }

    #[test]
    fn square_has_no_intermediate_values() {
        for i in 0..1000 {
            let theta = (i as f32 / 1000.0) * 4.0 * PI;
            assert_eq!(Waveform::Square.shape(theta).abs(), 1.0);
        }
    }

    #[test]
    fn triangle_peaks_at_quarter_period() {
        assert!((Waveform::Triangle.shape(PI / 2.0) - 1.0).abs() < EPS);
        assert!((Waveform::Triangle.shape(3.0 * PI / 2.0) + 1.0).abs() < EPS);
    }

    #[test]
    fn sawtooth_ramps_through_zero() {
        assert!(Waveform::Sawtooth.shape(0.0).abs() < EPS);
        // Just below the discontinuity at pi the ramp approaches 1.
        assert!(Waveform::Sawtooth.shape(PI - 1e-3) > 0.99);
        // Just above it the ramp restarts near -1.
        assert!(Waveform::Sawtooth.shape(PI + 1e-3) < -0.99);
    }
}
