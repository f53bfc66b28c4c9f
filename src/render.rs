use crate::fourier::{Amplitude, Sample, TimeSeries};

const FRAME: &str = "--------------------------";

// Rows are clipped so a hot bin cannot wrap the terminal.
const MAX_WIDTH: usize = 160;

/// Renders a series as ASCII art, one row per sample.
///
/// Each row pushes a closing bar right by the sample's plotted value, so the
/// bars trace the waveform down the screen. Real amplitudes plot their raw
/// value and vanish below zero; complex amplitudes plot their magnitude.
pub fn render_series(series: &TimeSeries, scale: f64, offset: f64) -> String {
    let mut out = String::new();
    out.push_str(FRAME);
    out.push('\n');
    for sample in series {
        out.push_str(&render_sample(sample, scale, offset));
        out.push('\n');
    }
    out.push_str(FRAME);
    out
}

fn render_sample(sample: &Sample, scale: f64, offset: f64) -> String {
    let width = (plot_value(sample) * scale + offset).floor();
    let width = if width > 0.0 { width as usize } else { 0 };
    format!(
        "{:>10.3} | {}|",
        sample.coordinate(),
        " ".repeat(width.min(MAX_WIDTH))
    )
}

fn plot_value(sample: &Sample) -> f64 {
    match sample.amplitude() {
        Amplitude::Real(r) => r,
        Amplitude::Complex(c) => c.magnitude(),
    }
}
