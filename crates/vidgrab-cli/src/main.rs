//! vidgrab CLI - simulated media downloads
//!
//! This binary validates video URLs, fabricates placeholder media for them,
//! and renders and inspects the 16-bit PCM WAV files it produces.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use vidgrab_cli::commands;
use vidgrab_cli::commands::download::DownloadOptions;
use vidgrab_cli::commands::tone::ToneOptions;
use vidgrab_cli::Config;

/// vidgrab - Simulated video and audio downloader
#[derive(Parser)]
#[command(name = "vidgrab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (default: ./vidgrab.json if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print extra detail
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download media from a supported platform URL
    Download {
        /// Video URL
        url: String,

        /// Output format (mp3 or mp4)
        #[arg(short, long)]
        format: Option<String>,

        /// Quality label (e.g. 720p, 320kbps)
        #[arg(short, long)]
        quality: Option<String>,

        /// Directory to save into
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a test tone to a WAV file
    Tone {
        /// Tone preset (steady or warble)
        #[arg(short, long)]
        preset: Option<String>,

        /// Sample rate in Hz
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Number of channels
        #[arg(long)]
        channels: Option<usize>,

        /// Duration in seconds
        #[arg(long)]
        seconds: Option<f64>,

        /// Frequency in Hz
        #[arg(long)]
        frequency: Option<f64>,

        /// Peak amplitude
        #[arg(long, allow_negative_numbers = true)]
        amplitude: Option<f64>,

        /// Output WAV file
        #[arg(short, long)]
        out: PathBuf,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Inspect a WAV file, or every WAV file under a directory
    Inspect {
        /// File or directory
        path: PathBuf,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List supported platforms
    Platforms {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn load_config(explicit: Option<&std::path::Path>) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    Config::load(explicit, &cwd)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Download {
            url,
            format,
            quality,
            out_dir,
            force,
            json,
        } => {
            let options = DownloadOptions {
                url: &url,
                format: format.as_deref(),
                quality: quality.as_deref(),
                out_dir: out_dir.as_deref(),
                force,
            };
            commands::download::run(&options, &config, verbose, json)
        }
        Commands::Tone {
            preset,
            sample_rate,
            channels,
            seconds,
            frequency,
            amplitude,
            out,
            json,
        } => {
            let options = ToneOptions {
                preset: preset.as_deref(),
                sample_rate,
                channels,
                seconds,
                frequency,
                amplitude,
            };
            commands::tone::run(&options, &out, &config, verbose, json)
        }
        Commands::Inspect { path, json } => commands::inspect::run(&path, verbose, json),
        Commands::Platforms { json } => commands::platforms::run(json),
    });

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
