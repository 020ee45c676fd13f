use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Meal-prep date window calculator.
#[derive(Parser)]
#[command(
    name = "mealprep",
    version,
    about = "Program start and delivery date windows for meal-prep signups"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Holiday table (TOML, or JSON with a `.json` extension). Defaults to
    /// the built-in Singapore 2026 table.
    #[arg(long, global = true)]
    pub holidays: Option<PathBuf>,

    /// Rule constants (TOML). Defaults to the production values.
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Calculate windows from command-line fields.
    Calculate(CalculateArgs),
    /// Calculate windows from a JSON request body.
    Request(RequestArgs),
    /// List the active holiday table.
    Holidays,
}

/// Arguments for the `calculate` subcommand.
#[derive(clap::Args)]
pub struct CalculateArgs {
    /// Signup date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub signup: Option<String>,

    /// Program start date (YYYY-MM-DD).
    #[arg(long)]
    pub psd: Option<String>,

    /// Delivery 1 date (YYYY-MM-DD).
    #[arg(long)]
    pub d1: Option<String>,

    /// Cheat days extending Day 6 (0-30).
    #[arg(long, allow_negative_numbers = true)]
    pub cheat_days: Option<i64>,

    /// Stages to compute: all, psd, d1 or d2.
    #[arg(long)]
    pub calculation: Option<String>,

    /// Pretty-print the JSON result.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `request` subcommand.
#[derive(clap::Args)]
pub struct RequestArgs {
    /// Path to a JSON request body, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Pretty-print the JSON result.
    #[arg(long)]
    pub pretty: bool,
}
