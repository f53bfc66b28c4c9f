use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use crate::fourier::{
    self, Direction, FrequencyWindow, Sample, SignalError, TimeSeries, build_sine_wave,
    build_square_wave,
};
use crate::models::{RoundtripReport, SeriesPoint};
use crate::render;
use crate::utils;

const TOP_BINS: usize = 20;

/// Waveform families the generators can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    /// Pure tone with real-valued samples
    Sine,
    /// On/off wave holding a complex level through each half period
    Square,
}

impl Shape {
    fn label(self) -> &'static str {
        match self {
            Shape::Sine => "sine",
            Shape::Square => "square",
        }
    }
}

/// Describes the synthetic signal the generators should produce.
#[derive(Debug, Args)]
pub struct SignalArgs {
    /// Waveform shape
    #[arg(long, value_enum, default_value_t = Shape::Sine)]
    pub shape: Shape,

    /// Start of the time axis in seconds
    #[arg(long, default_value_t = 0.0)]
    pub start: f64,

    /// End of the time axis in seconds, exclusive
    #[arg(long, default_value_t = 1.0)]
    pub end: f64,

    /// Samples per second
    #[arg(long, default_value_t = 50.0)]
    pub resolution: f64,

    /// Tone frequency in hertz; repeat the flag to mix tones
    #[arg(long = "frequency", default_values_t = [1.0])]
    pub frequencies: Vec<f64>,

    /// Peak amplitude of each tone
    #[arg(long, default_value_t = 1.0)]
    pub amplitude: f64,
}

/// Controls how a computed series is presented.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Draw the result as an ASCII graph
    #[arg(long)]
    pub plot: bool,

    /// Bar-length multiplier for --plot
    #[arg(long, default_value_t = 10.0)]
    pub scale: f64,

    /// Bar-length offset for --plot
    #[arg(long, default_value_t = 10.0)]
    pub offset: f64,

    /// Emit the result as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct WaveArgs {
    #[command(flatten)]
    pub signal: SignalArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct TransformArgs {
    #[command(flatten)]
    pub signal: SignalArgs,

    /// Start of the analysed frequency band in hertz
    #[arg(long, default_value_t = 0.0)]
    pub start_frequency: f64,

    /// End of the analysed frequency band in hertz, exclusive
    #[arg(long, default_value_t = 10.0)]
    pub end_frequency: f64,

    /// Bins evaluated per hertz
    #[arg(long, default_value_t = 10.0)]
    pub frequency_resolution: f64,

    /// Run the inverse transform instead of the forward one
    #[arg(long)]
    pub inverse: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct RoundtripArgs {
    /// Start of the analysed frequency band in hertz
    #[arg(long, default_value_t = 0.0)]
    pub start_frequency: f64,

    /// End of the analysed frequency band in hertz, exclusive
    #[arg(long, default_value_t = 50.0)]
    pub end_frequency: f64,

    /// Bins evaluated per hertz; also spaces the reconstruction grid
    #[arg(long, default_value_t = 10.0)]
    pub frequency_resolution: f64,

    /// Emit only the JSON report
    #[arg(long)]
    pub json: bool,
}

/// Builds a waveform from the command line description and summarizes it.
pub fn wave(args: &WaveArgs) {
    let series = match compose_wave(&args.signal) {
        Ok(series) => series,
        Err(e) => {
            println!("{}", format!("Error building waveform: {}", e).yellow());
            return;
        }
    };

    if args.output.json {
        print_series_json(&series);
        return;
    }

    println!(
        "Built a {} wave over [{}, {}) s with tones at {:?} Hz.",
        args.signal.shape.label(),
        args.signal.start,
        args.signal.end,
        args.signal.frequencies
    );
    println!("Samples: {}", series.len());
    match series.step_size() {
        Ok(dx) => println!("Step size: {} s", dx),
        Err(e) => println!("{}", format!("Step size unavailable: {}", e).yellow()),
    }

    if args.output.plot {
        println!(
            "{}",
            render::render_series(&series, args.output.scale, args.output.offset)
        );
    }
}

/// Runs the transform over a generated waveform and lists the strongest
/// bins first.
pub fn transform(args: &TransformArgs) {
    let input = match compose_wave(&args.signal) {
        Ok(series) => series,
        Err(e) => {
            println!("{}", format!("Error building waveform: {}", e).yellow());
            return;
        }
    };

    let window = FrequencyWindow::new(
        args.start_frequency,
        args.end_frequency,
        args.frequency_resolution,
    );
    let direction = if args.inverse {
        Direction::Inverse
    } else {
        Direction::Forward
    };
    let spectrum = fourier::transform(&input, &window, direction);

    if args.output.json {
        print_series_json(&spectrum);
        return;
    }

    // The coordinate axis switches domains on the way through the engine.
    let unit = if args.inverse { "s" } else { "Hz" };
    println!(
        "{:?} transform of {} {} samples produced {} bins.",
        direction,
        input.len(),
        args.signal.shape.label(),
        spectrum.len()
    );
    if spectrum.is_empty() {
        println!("{}", "The frequency window covers no bins.".yellow());
        return;
    }

    let ranked = rank_by_magnitude(&spectrum);
    let (msg, top_bins) = if ranked.len() >= TOP_BINS {
        ("Top 20 bins:", &ranked[..TOP_BINS])
    } else {
        ("Bins:", &ranked[..])
    };
    println!("{}", msg);
    for sample in top_bins {
        println!(
            "\t- {:.3} {}, magnitude: {:.4}",
            sample.coordinate(),
            unit,
            sample.amplitude().magnitude()
        );
    }

    let peak = ranked[0];
    println!(
        "\nPeak: {:.3} {}, magnitude: {:.4}",
        peak.coordinate(),
        unit,
        peak.amplitude().magnitude()
    );

    if args.output.plot {
        println!(
            "{}",
            render::render_series(&spectrum, args.output.scale, args.output.offset)
        );
    }
}

/// Transforms a fixed square wave forward and back, then compares the
/// reconstruction against the input.
pub fn roundtrip(args: &RoundtripArgs) {
    let narrate = !args.json;
    if narrate {
        println!("Creating input.");
    }
    let mut input = TimeSeries::new();
    input.append_all(&build_square_wave(0.0, 50.0, 50.0, 1.0, 1.0));
    if narrate {
        println!("Square wave created.");
    }

    let window = FrequencyWindow::new(
        args.start_frequency,
        args.end_frequency,
        args.frequency_resolution,
    );
    let spectrum = fourier::transform(&input, &window, Direction::Forward);
    if narrate {
        println!("Forward transform done.");
    }
    let rebuilt = fourier::transform(&spectrum, &window, Direction::Inverse);
    if narrate {
        println!("Inverse transform done.");
    }

    let report = match roundtrip_report(&input, &spectrum, &rebuilt) {
        Ok(report) => report,
        Err(e) => {
            let logger = utils::get_logger();
            utils::error_context(&logger, "reconstruction comparison failed", e.clone());
            println!("{}", format!("Error comparing reconstruction: {}", e).yellow());
            return;
        }
    };

    if args.json {
        print_json(&report);
        return;
    }

    println!("\nInput samples: {}", report.input_samples);
    println!("Spectrum bins: {}", report.spectrum_bins);
    println!(
        "Compared points: {} of {} reconstructed",
        report.compared_points, report.reconstructed_bins
    );
    println!("Fitted gain: {:.4}", report.fitted_gain);
    println!("Max abs error: {:e}", report.max_abs_error);
    println!("Mean abs error: {:e}", report.mean_abs_error);
}

/// Builds one series per requested tone and folds them together with
/// coordinate-matched addition.
fn compose_wave(args: &SignalArgs) -> Result<TimeSeries, SignalError> {
    let mut combined: Option<TimeSeries> = None;
    for &frequency in &args.frequencies {
        let samples = match args.shape {
            Shape::Sine => {
                build_sine_wave(args.start, args.end, args.resolution, frequency, args.amplitude)
            }
            Shape::Square => {
                build_square_wave(args.start, args.end, args.resolution, frequency, args.amplitude)
            }
        };
        let mut tone = TimeSeries::new();
        tone.append_all(&samples);
        combined = Some(match combined {
            Some(sum) => sum.try_add(&tone)?,
            None => tone,
        });
    }
    Ok(combined.unwrap_or_default())
}

/// Sorts the samples of a series by descending amplitude magnitude.
fn rank_by_magnitude(series: &TimeSeries) -> Vec<&Sample> {
    let mut ranked: Vec<&Sample> = series.iter().collect();
    ranked.sort_by(|a, b| {
        b.amplitude()
            .magnitude()
            .partial_cmp(&a.amplitude().magnitude())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

/// Compares a reconstructed series against the original input.
///
/// The engine's unnormalized sums leave the reconstruction a constant factor
/// above the input, so a gain is fitted by least squares over the compared
/// points before the errors are measured. Fails with
/// [`SignalError::CoordinateNotFound`] when a reconstructed coordinate does
/// not sit on the input grid.
fn roundtrip_report(
    input: &TimeSeries,
    spectrum: &TimeSeries,
    rebuilt: &TimeSeries,
) -> Result<RoundtripReport, SignalError> {
    let mut dot = 0.0;
    let mut norm = 0.0;
    for sample in rebuilt {
        let expected = input.amplitude_at(sample.coordinate())?.magnitude();
        dot += sample.amplitude().magnitude() * expected;
        norm += expected * expected;
    }
    let fitted = dot / norm;
    let gain = if fitted.is_finite() && fitted > 0.0 {
        fitted
    } else {
        1.0
    };

    let normalized: TimeSeries = rebuilt
        .iter()
        .map(|s| s.scale_amplitude(1.0 / gain))
        .collect();
    let mut max_abs_error = 0.0_f64;
    let mut total_abs_error = 0.0;
    for sample in &normalized {
        let expected = input.amplitude_at(sample.coordinate())?.magnitude();
        let error = (sample.amplitude().magnitude() - expected).abs();
        max_abs_error = max_abs_error.max(error);
        total_abs_error += error;
    }

    let compared = normalized.len();
    Ok(RoundtripReport {
        input_samples: input.len(),
        spectrum_bins: spectrum.len(),
        reconstructed_bins: rebuilt.len(),
        fitted_gain: gain,
        compared_points: compared,
        max_abs_error,
        mean_abs_error: if compared > 0 {
            total_abs_error / compared as f64
        } else {
            0.0
        },
    })
}

fn print_series_json(series: &TimeSeries) {
    let points: Vec<SeriesPoint> = series.iter().map(SeriesPoint::from).collect();
    print_json(&points);
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => println!("{}", format!("Error serializing output: {}", e).yellow()),
    }
}
