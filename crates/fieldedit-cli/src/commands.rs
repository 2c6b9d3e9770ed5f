use super::args::{Cli, Commands};
use super::handlers;
use crate::types::LogLevel;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    match cli.command {
        Commands::Replay {
            scenario,
            show_views,
        } => handlers::replay::handle(&scenario, show_views),
        Commands::Demo => handlers::demo::handle(),
    }
}

/// Logs go to stderr so replay output on stdout stays pipeable.
fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
