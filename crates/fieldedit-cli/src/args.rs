use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fieldedit")]
#[command(about = "Drive the multimedia field editor headlessly", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a scripted editing session from a TOML scenario file.
    Replay {
        scenario: PathBuf,

        #[arg(long, help = "Print the rendered view after every step")]
        show_views: bool,
    },

    /// Run a small built-in editing session.
    Demo,
}
