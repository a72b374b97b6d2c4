//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use clap::{Parser, Subcommand};

pub use output::OutputMode;

pub mod commands;
pub mod output;

/// Render a JSON resume to LaTeX through a Tera template
#[derive(Parser, Debug)]
#[command(name = "resumetex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit JSON on stdout and JSON log lines on stderr
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    #[must_use]
    pub const fn output_mode(&self) -> OutputMode {
        OutputMode::from_robot(self.robot)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the resume to a LaTeX document
    Render(commands::render::RenderArgs),

    /// List the templates in the template directory
    Templates(commands::templates::TemplatesArgs),
}
