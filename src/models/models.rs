use serde::{Deserialize, Serialize};

use crate::fourier::{Amplitude, Sample};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub coordinate: f64,
    pub real: f64,
    pub imaginary: f64,
    pub magnitude: f64,
}

impl From<&Sample> for SeriesPoint {
    fn from(sample: &Sample) -> Self {
        let (real, imaginary) = match sample.amplitude() {
            Amplitude::Real(r) => (r, 0.0),
            Amplitude::Complex(c) => (c.real, c.imaginary),
        };
        SeriesPoint {
            coordinate: sample.coordinate(),
            real,
            imaginary,
            magnitude: sample.amplitude().magnitude(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundtripReport {
    pub input_samples: usize,
    pub spectrum_bins: usize,
    pub reconstructed_bins: usize,
    pub fitted_gain: f64,
    pub compared_points: usize,
    pub max_abs_error: f64,
    pub mean_abs_error: f64,
}
