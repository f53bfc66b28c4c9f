mod complex;
pub use complex::*;
mod error;
pub use error::*;
mod sample;
pub use sample::*;
mod series;
pub use series::*;
mod transform;
pub use transform::*;
mod waveform;
pub use waveform::*;
