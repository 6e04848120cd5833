use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "cb")]
#[command(about = "Case board CLI for the order workflow")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (overrides the config file)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Path to the config file (defaults to the user config dir)
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true)]
    pub(crate) log_level: Option<String>,
}
