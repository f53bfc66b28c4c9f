use std::f64::consts::TAU;

use crate::fourier::{Amplitude, Complex, Sample};

/// Number of samples on an axis covering `[start, end)` at `resolution`
/// samples per unit. Fractional tails are dropped rather than rounded up.
fn axis_len(start: f64, end: f64, resolution: f64) -> usize {
    let n = ((end - start) * resolution).floor();
    if n > 0.0 { n as usize } else { 0 }
}

/// Samples `amplitude * sin(t * tau * frequency)` over `[start, end)`.
///
/// Returns bare samples rather than a series so several waves can be fed
/// into one `TimeSeries` through `append_all`.
pub fn build_sine_wave(
    start: f64,
    end: f64,
    resolution: f64,
    frequency: f64,
    amplitude: f64,
) -> Vec<Sample> {
    (0..axis_len(start, end, resolution))
        .map(|i| {
            let t = start + i as f64 / resolution;
            Sample::new(t, Amplitude::Real((t * TAU * frequency).sin() * amplitude))
        })
        .collect()
}

/// Samples a square wave over `[start, end)` with complex-valued levels.
///
/// The first half of each period holds `amplitude` on both components, the
/// second half is zero. Phase wraps with `rem_euclid`, so axes that start
/// below zero keep the same on/off pattern.
pub fn build_square_wave(
    start: f64,
    end: f64,
    resolution: f64,
    frequency: f64,
    amplitude: f64,
) -> Vec<Sample> {
    (0..axis_len(start, end, resolution))
        .map(|i| {
            let t = start + i as f64 / resolution;
            let level = if (t * frequency).rem_euclid(1.0) < 0.5 {
                Complex::new(amplitude, amplitude)
            } else {
                Complex::ZERO
            };
            Sample::new(t, Amplitude::Complex(level))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fourier::TimeSeries;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_axis_len_floors_fractional_spans() {
        assert_eq!(axis_len(0.0, 1.0, 8.0), 8);
        assert_eq!(axis_len(0.0, 0.9, 2.0), 1);
        assert_eq!(axis_len(2.0, 2.0, 10.0), 0);
        assert_eq!(axis_len(5.0, 1.0, 10.0), 0);
    }

    #[test]
    fn test_sine_wave_sample_count_and_spacing() {
        let wave = build_sine_wave(0.0, 50.0, 50.0, 1.0, 1.0);
        assert_eq!(wave.len(), 2500);

        let mut series = TimeSeries::new();
        series.append_all(&wave);
        assert!((series.step_size().unwrap() - 0.02).abs() < TOL);
    }

    #[test]
    fn test_sine_wave_known_points() {
        let wave = build_sine_wave(0.0, 1.0, 4.0, 1.0, 2.0);
        assert_eq!(wave.len(), 4);
        // t = 0: sin(0) = 0; t = 0.25: sin(tau/4) = 1.
        assert!(wave[0].amplitude().magnitude() < TOL);
        assert!((wave[1].amplitude().magnitude() - 2.0).abs() < TOL);
        assert!((wave[1].coordinate() - 0.25).abs() < TOL);
    }

    #[test]
    fn test_sine_wave_axis_starts_at_start() {
        let wave = build_sine_wave(-1.0, 1.0, 2.0, 1.0, 1.0);
        let coordinates: Vec<f64> = wave.iter().map(Sample::coordinate).collect();
        assert_eq!(coordinates, vec![-1.0, -0.5, 0.0, 0.5]);
    }

    #[test]
    fn test_square_wave_alternates_half_periods() {
        let wave = build_square_wave(0.0, 1.0, 4.0, 1.0, 3.0);
        let on = Amplitude::Complex(Complex::new(3.0, 3.0));
        let off = Amplitude::Complex(Complex::ZERO);
        let levels: Vec<Amplitude> = wave.iter().map(Sample::amplitude).collect();
        assert_eq!(levels, vec![on, on, off, off]);
    }

    #[test]
    fn test_square_wave_wraps_negative_phase() {
        // t = -0.75 sits in the first half of its period once wrapped.
        let wave = build_square_wave(-0.75, -0.25, 4.0, 1.0, 1.0);
        assert_eq!(
            wave[0].amplitude(),
            Amplitude::Complex(Complex::new(1.0, 1.0))
        );
        // t = -0.5 wraps to 0.5, the off half.
        assert_eq!(wave[1].amplitude(), Amplitude::Complex(Complex::ZERO));
    }

    #[test]
    fn test_square_wave_respects_frequency() {
        let wave = build_square_wave(0.0, 1.0, 8.0, 2.0, 1.0);
        let magnitudes: Vec<bool> = wave
            .iter()
            .map(|s| s.amplitude().magnitude() > TOL)
            .collect();
        assert_eq!(
            magnitudes,
            vec![true, true, false, false, true, true, false, false]
        );
    }
}
