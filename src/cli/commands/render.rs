//! resumetex render - Render the resume to a LaTeX document

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use super::TEMPLATES_ENV;
use crate::cli::output::{HumanLayout, OutputMode, emit_human, emit_json};
use crate::error::{Result, ResumeError};
use crate::pipeline::{self, Destination, RenderOptions, RenderSummary};
use crate::resume::ContactOverrides;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Resume JSON file
    #[arg(long, short, default_value = "resume.json")]
    pub resume: PathBuf,

    /// Render configuration (YAML)
    #[arg(long, short, default_value = "config.yml")]
    pub config: PathBuf,

    /// Directory containing `<name>.tera` templates
    #[arg(long, env = TEMPLATES_ENV, default_value = "templates")]
    pub templates: PathBuf,

    /// Output file, replaced on success
    #[arg(long, short, default_value = "resume.tex", conflicts_with = "stdout")]
    pub output: PathBuf,

    /// Template name, overriding `template_name` from the config
    #[arg(long, short)]
    pub template: Option<String>,

    /// Ignore EMAIL and PHONE_NUMBER
    #[arg(long)]
    pub no_env: bool,

    /// Print the document instead of writing the output file
    #[arg(long)]
    pub stdout: bool,
}

impl RenderArgs {
    fn options(&self) -> RenderOptions {
        RenderOptions {
            resume: self.resume.clone(),
            config: self.config.clone(),
            templates: self.templates.clone(),
            destination: if self.stdout {
                Destination::Stdout
            } else {
                Destination::File(self.output.clone())
            },
            template: self.template.clone(),
            overrides: if self.no_env {
                ContactOverrides::default()
            } else {
                ContactOverrides::from_env()
            },
        }
    }
}

pub fn run(mode: OutputMode, args: &RenderArgs) -> Result<()> {
    let summary = pipeline::run(&args.options())?;

    if let Some(document) = &summary.document {
        return print_document(document);
    }

    if mode.is_robot() {
        emit_json(&json!({
            "status": "ok",
            "output": summary.output,
            "template": summary.template,
            "bytes": summary.bytes,
            "sections": summary.sections,
        }));
    } else {
        emit_human(&human_summary(&summary));
    }
    Ok(())
}

fn print_document(document: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(document.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|source| ResumeError::OutputWrite {
            path: PathBuf::from("<stdout>"),
            source,
        })
}

fn human_summary(summary: &RenderSummary) -> HumanLayout {
    let mut layout = HumanLayout::new();
    let output = summary
        .output
        .as_ref()
        .map_or_else(|| "<stdout>".to_string(), |p| p.display().to_string());
    layout
        .title(&format!("Rendered {output}"))
        .kv("template", &summary.template)
        .kv("bytes", &summary.bytes.to_string());
    if summary.sections.is_empty() {
        layout.kv("sections", "none enabled");
    } else {
        layout.kv("sections", &summary.sections.join(", "));
    }
    layout
}
