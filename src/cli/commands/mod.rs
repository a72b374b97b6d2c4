//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::cli::{Commands, OutputMode};
use crate::error::Result;

pub mod render;
pub mod templates;

/// Environment variable naming the default template directory.
pub const TEMPLATES_ENV: &str = "RESUMETEX_TEMPLATES";

pub fn run(mode: OutputMode, command: &Commands) -> Result<()> {
    match command {
        Commands::Render(args) => render::run(mode, args),
        Commands::Templates(args) => templates::run(mode, args),
    }
}
