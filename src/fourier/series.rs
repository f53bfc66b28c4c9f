use crate::fourier::{Amplitude, Sample, SignalError};

/// An insertion-ordered collection of samples over one axis.
///
/// Order is meaningful: the first two samples define the step size and
/// transform output is ordered by bin. Coordinates are stored as given, with
/// no sorting, deduplication, or monotonicity checks; lookups resolve to the
/// first match in insertion order, so a series with duplicate coordinates
/// behaves in an order-dependent way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    samples: Vec<Sample>,
}

impl TimeSeries {
    pub fn new() -> Self {
        TimeSeries {
            samples: Vec::new(),
        }
    }

    /// Appends one sample, preserving insertion order.
    pub fn append(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Appends a batch of samples in the given order.
    pub fn append_all(&mut self, samples: &[Sample]) {
        self.samples.extend_from_slice(samples);
    }

    /// Linear scan in insertion order using exact f64 equality; the first
    /// match wins.
    fn sample_at(&self, coordinate: f64) -> Result<&Sample, SignalError> {
        self.samples
            .iter()
            .find(|s| s.coordinate() == coordinate)
            .ok_or(SignalError::CoordinateNotFound { coordinate })
    }

    /// Looks up the amplitude recorded at `coordinate`.
    ///
    /// Fails with [`SignalError::CoordinateNotFound`] when no sample
    /// matches.
    pub fn amplitude_at(&self, coordinate: f64) -> Result<Amplitude, SignalError> {
        self.sample_at(coordinate).map(Sample::amplitude)
    }

    /// Elementwise sum of two series.
    ///
    /// Every coordinate of `self` is looked up in `other`, so the result
    /// keeps `self`'s order and length and unmatched extra samples in
    /// `other` are ignored. Fails with [`SignalError::CoordinateNotFound`]
    /// when `other` lacks a coordinate present in `self`.
    pub fn try_add(&self, other: &TimeSeries) -> Result<TimeSeries, SignalError> {
        let mut samples = Vec::with_capacity(self.samples.len());
        for sample in &self.samples {
            samples.push(sample.try_add(other.sample_at(sample.coordinate())?)?);
        }
        Ok(TimeSeries { samples })
    }

    /// The spacing between the first two samples, in insertion order.
    ///
    /// Fails with [`SignalError::InsufficientSamples`] on series shorter
    /// than 2.
    pub fn step_size(&self) -> Result<f64, SignalError> {
        if self.samples.len() < 2 {
            return Err(SignalError::InsufficientSamples {
                len: self.samples.len(),
            });
        }
        Ok(self.samples[1].coordinate() - self.samples[0].coordinate())
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }
}

impl FromIterator<Sample> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        TimeSeries {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
