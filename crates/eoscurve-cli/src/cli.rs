use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "eoscurve CLI - Renders comparative energy-volume equation-of-state figures for interatomic-potential models against DFT reference data.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the energy-volume comparison figure.
    Render(RenderArgs),
    /// Validate the dataset layout without rendering anything.
    Check(CheckArgs),
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Directory containing the per-potential data directories and `dft_ref/`.
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    pub data_dir: PathBuf,

    /// Path for the output image (default: SiO_energy_volume.png).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a TOML configuration file overriding the built-in dataset
    /// description (potentials, structures, reference structure, geometry).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the output resolution in dots per inch.
    #[arg(long, value_name = "INT")]
    pub dpi: Option<u32>,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directory containing the per-potential data directories and `dft_ref/`.
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    pub data_dir: PathBuf,

    /// Path to a TOML configuration file overriding the built-in dataset
    /// description.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
