use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "formatforge")]
#[command(author, version, about = "File type detection and conversion tool")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect a file's type and display its category and format
    Inspect {
        /// File to inspect
        #[arg(required = true)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List viable conversion targets for a file
    Options {
        /// File to list targets for
        #[arg(required = true)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a video file to an animated GIF
    Convert {
        /// Input video file
        #[arg(required = true)]
        input: PathBuf,

        /// Destination path (defaults to the system temp directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target format; only "gif" is backed by a real encoder
        #[arg(short = 't', long, default_value = "gif")]
        to: String,

        /// Quality level 0-100 (overrides the configured default)
        #[arg(short, long)]
        quality: Option<u8>,
    },

    /// Check that the external converter is available
    CheckTools,

    /// Display version information
    Version,
}
