use clap::{Parser, Subcommand};

pub mod command_handlers;
pub mod fourier;
pub mod models;
pub mod render;
pub mod utils;

use command_handlers::{RoundtripArgs, TransformArgs, WaveArgs};

/// Naive discrete Fourier analysis of synthetic waveforms.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a waveform and print its summary
    Wave(WaveArgs),
    /// Transform a waveform into the conjugate domain
    Transform(TransformArgs),
    /// Forward-then-inverse transform of a square wave, with an error report
    Roundtrip(RoundtripArgs),
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Wave(args) => command_handlers::wave(&args),
        Commands::Transform(args) => command_handlers::transform(&args),
        Commands::Roundtrip(args) => command_handlers::roundtrip(&args),
    }
}
