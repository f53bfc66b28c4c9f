use std::f64::consts::TAU;

use slog::debug;

use crate::fourier::{Amplitude, Complex, Sample, TimeSeries};
use crate::utils;

/// Which way the transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    /// Sign of the kernel angle.
    fn kernel_sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }

    /// Normalization folded into both components of the bin multiplier.
    fn scale(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Inverse => 1.0 / TAU.sqrt(),
        }
    }
}

/// The half-open frequency band `[start, end)` scanned at `resolution` bins
/// per unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyWindow {
    pub start: f64,
    pub end: f64,
    pub resolution: f64,
}

impl FrequencyWindow {
    pub fn new(start: f64, end: f64, resolution: f64) -> Self {
        FrequencyWindow {
            start,
            end,
            resolution,
        }
    }

    /// Number of bins the window covers. Fractional tails are dropped and
    /// degenerate windows yield zero.
    pub fn bins(&self) -> usize {
        let n = ((self.end - self.start) * self.resolution).floor();
        if n > 0.0 { n as usize } else { 0 }
    }

    /// Frequency probed by `bin`.
    pub fn frequency(&self, bin: usize) -> f64 {
        self.start + bin as f64 / self.resolution
    }
}

impl Default for FrequencyWindow {
    fn default() -> Self {
        FrequencyWindow::new(0.0, 10.0, 10.0)
    }
}

/// Correlates `input` against every frequency in `window` and returns one
/// output sample per bin, placed at the probed frequency.
///
/// Each bin accumulates `e^(sign * tau * t * f)` weighted by the sample
/// amplitudes, then picks up the direction's normalization on both complex
/// components. A forward pass keeps the full complex value so phase
/// survives; an inverse pass collapses each bin to its magnitude.
pub fn transform(
    input: &TimeSeries,
    window: &FrequencyWindow,
    direction: Direction,
) -> TimeSeries {
    let logger = utils::get_logger();
    let sign = direction.kernel_sign();
    let scale = direction.scale();
    let multiplier = Complex::new(scale, scale);
    let bins = window.bins();
    let progress_stride = (bins / 10).max(1);

    let mut output = TimeSeries::new();
    for bin in 0..bins {
        if bins >= 100 && bin % progress_stride == 0 {
            debug!(logger, "transform progress: {} of {} bins", bin, bins);
        }
        let frequency = window.frequency(bin);
        let mut accumulated = Complex::ZERO;
        for sample in input {
            let angle = sign * TAU * sample.coordinate() * frequency;
            accumulated = accumulated + Complex::from_polar(angle, sample.amplitude());
        }
        let scaled = accumulated * multiplier;
        let amplitude = match direction {
            Direction::Forward => Amplitude::Complex(scaled),
            Direction::Inverse => Amplitude::Real(scaled.magnitude()),
        };
        output.append(Sample::new(frequency, amplitude));
    }
    output
}
