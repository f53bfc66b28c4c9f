use std::fmt;
use std::ops::Add;

use crate::fourier::{Complex, SignalError};

/// The value a sample carries: a plain real scalar or a [`Complex`] point.
///
/// Input signals usually hold `Real` amplitudes; forward-transform output
/// holds `Complex` ones, which is what allows a spectrum to be fed back
/// through the inverse transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amplitude {
    Real(f64),
    Complex(Complex),
}

impl Amplitude {
    /// The size of the amplitude: `|r|` for reals, `sqrt(re² + im²)` for
    /// complex values.
    pub fn magnitude(&self) -> f64 {
        match self {
            Amplitude::Real(r) => r.abs(),
            Amplitude::Complex(c) => c.magnitude(),
        }
    }

    /// Multiplies the amplitude by a real factor. Complex values scale on
    /// both components.
    pub fn scale(&self, k: f64) -> Amplitude {
        match *self {
            Amplitude::Real(r) => Amplitude::Real(r * k),
            Amplitude::Complex(c) => {
                Amplitude::Complex(Complex::new(c.real * k, c.imaginary * k))
            }
        }
    }
}

impl Add for Amplitude {
    type Output = Amplitude;

    // Matching representations add componentwise; a mixed pair promotes the
    // real side to a complex value with zero imaginary part.
    fn add(self, other: Amplitude) -> Amplitude {
        match (self, other) {
            (Amplitude::Real(a), Amplitude::Real(b)) => Amplitude::Real(a + b),
            (Amplitude::Complex(a), Amplitude::Complex(b)) => Amplitude::Complex(a + b),
            (Amplitude::Real(a), Amplitude::Complex(b)) => {
                Amplitude::Complex(Complex::new(a, 0.0) + b)
            }
            (Amplitude::Complex(a), Amplitude::Real(b)) => {
                Amplitude::Complex(a + Complex::new(b, 0.0))
            }
        }
    }
}

impl fmt::Display for Amplitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amplitude::Real(r) => write!(f, "{r}"),
            Amplitude::Complex(c) => write!(f, "{c}"),
        }
    }
}

/// One measurement: a coordinate on the active axis (time for input signals,
/// frequency for transform output) and the amplitude observed there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    coordinate: f64,
    amplitude: Amplitude,
}

impl Sample {
    pub fn new(coordinate: f64, amplitude: Amplitude) -> Self {
        Sample {
            coordinate,
            amplitude,
        }
    }

    pub fn coordinate(&self) -> f64 {
        self.coordinate
    }

    pub fn amplitude(&self) -> Amplitude {
        self.amplitude
    }

    /// Combines two samples taken at the same coordinate.
    ///
    /// Samples at different points on the axis have no meaningful sum, so a
    /// coordinate mismatch fails with [`SignalError::MismatchedCoordinate`].
    pub fn try_add(&self, other: &Sample) -> Result<Sample, SignalError> {
        if self.coordinate != other.coordinate {
            return Err(SignalError::MismatchedCoordinate {
                left: self.coordinate,
                right: other.coordinate,
            });
        }
        Ok(Sample::new(self.coordinate, self.amplitude + other.amplitude))
    }

    /// A copy of the sample with its amplitude multiplied by `k`; the
    /// coordinate is unchanged.
    pub fn scale_amplitude(&self, k: f64) -> Sample {
        Sample::new(self.coordinate, self.amplitude.scale(k))
    }
}
