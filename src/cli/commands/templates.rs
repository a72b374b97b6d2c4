//! resumetex templates - List available templates

use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use super::TEMPLATES_ENV;
use crate::cli::output::{HumanLayout, OutputMode, emit_human, emit_json};
use crate::error::Result;
use crate::render::TemplateSet;

#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Directory containing `<name>.tera` templates
    #[arg(long, env = TEMPLATES_ENV, default_value = "templates")]
    pub templates: PathBuf,
}

pub fn run(mode: OutputMode, args: &TemplatesArgs) -> Result<()> {
    let set = TemplateSet::new(&args.templates);
    let names = set.list()?;

    if mode.is_robot() {
        emit_json(&json!({
            "status": "ok",
            "directory": set.dir(),
            "templates": names,
        }));
        return Ok(());
    }

    let mut layout = HumanLayout::new();
    layout.title(&format!("Templates in {}", set.dir().display()));
    if names.is_empty() {
        layout.bullet("(none)");
    }
    for name in &names {
        layout.bullet(name);
    }
    emit_human(&layout);
    Ok(())
}
