mod args;
mod commands;
mod handlers;
pub mod scenario;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
