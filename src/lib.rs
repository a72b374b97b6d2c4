pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod resume;
pub mod utils;

pub use error::{Result, ResumeError};
