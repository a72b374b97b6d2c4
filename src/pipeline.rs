//! The render pipeline: load, normalize, render, write.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::error::Result;
use crate::render::{Renderer, TemplateSet};
use crate::resume::{ContactOverrides, load_resume};
use crate::utils::fs::write_atomic;

/// Where a rendered document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    File(PathBuf),
    /// Return the text to the caller instead of writing it.
    Stdout,
}

/// Inputs of one render run.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub resume: PathBuf,
    pub config: PathBuf,
    pub templates: PathBuf,
    pub destination: Destination,
    /// Replaces `template_name` from the config file.
    pub template: Option<String>,
    pub overrides: ContactOverrides,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            resume: PathBuf::from("resume.json"),
            config: PathBuf::from("config.yml"),
            templates: PathBuf::from("templates"),
            destination: Destination::File(PathBuf::from("resume.tex")),
            template: None,
            overrides: ContactOverrides::default(),
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RenderSummary {
    /// Output path, or `None` when the document went to stdout.
    pub output: Option<PathBuf>,
    pub template: String,
    pub bytes: usize,
    pub sections: Vec<&'static str>,
    #[serde(skip)]
    pub document: Option<String>,
}

/// Run the whole pipeline.
///
/// Nothing is written unless every earlier stage succeeded, and the write
/// itself replaces the destination atomically.
pub fn run(options: &RenderOptions) -> Result<RenderSummary> {
    let resume = load_resume(&options.resume, &options.overrides)?;

    let mut config = RenderConfig::load(&options.config)?;
    if let Some(template) = &options.template {
        debug!(template = %template, "template overridden on command line");
        config = config.with_template_name(template.clone());
    }

    let renderer = Renderer::new(TemplateSet::new(&options.templates));
    let document = renderer.render(&resume, &config)?;

    let sections = config.enabled_sections();
    let bytes = document.len();
    match &options.destination {
        Destination::File(path) => {
            write_atomic(path, &document)?;
            info!(path = %path.display(), bytes, "wrote document");
            Ok(RenderSummary {
                output: Some(path.clone()),
                template: config.template_name,
                bytes,
                sections,
                document: None,
            })
        }
        Destination::Stdout => Ok(RenderSummary {
            output: None,
            template: config.template_name,
            bytes,
            sections,
            document: Some(document),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumeError;
    use std::path::Path;
    use tempfile::TempDir;

    const RESUME: &str = r#"{
        "name": "Ada",
        "contact": {"phone": "000"},
        "skills": [{"name": "Go", "category": "Languages"}, "SQL"]
    }"#;
    const CONFIG: &str = "template_name: mini\nskills:\n  enabled: true\ncontact:\n  enabled: true\n";
    const TEMPLATE: &str = "{{ resume.contact.phone }}|\
{% for g in resume.skills | group_by_category %}{{ g.name }}={{ g.members | join(sep=\",\") }};{% endfor %}";

    fn workspace() -> (TempDir, RenderOptions) {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        std::fs::write(root.join("resume.json"), RESUME).unwrap();
        std::fs::write(root.join("config.yml"), CONFIG).unwrap();
        std::fs::create_dir(root.join("templates")).unwrap();
        std::fs::write(root.join("templates/mini.tera"), TEMPLATE).unwrap();

        let options = RenderOptions {
            resume: root.join("resume.json"),
            config: root.join("config.yml"),
            templates: root.join("templates"),
            destination: Destination::File(root.join("resume.tex")),
            ..RenderOptions::default()
        };
        (temp, options)
    }

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn run_writes_document() {
        let (temp, options) = workspace();
        let summary = run(&options).unwrap();

        let out = temp.path().join("resume.tex");
        assert_eq!(read(&out), "000|Languages=Go;Other=SQL;");
        assert_eq!(summary.output.as_deref(), Some(out.as_path()));
        assert_eq!(summary.template, "mini");
        assert_eq!(summary.bytes, read(&out).len());
        assert_eq!(summary.sections, vec!["contact", "skills"]);
    }

    #[test]
    fn run_to_stdout_writes_nothing() {
        let (temp, mut options) = workspace();
        options.destination = Destination::Stdout;

        let summary = run(&options).unwrap();
        assert_eq!(summary.document.as_deref(), Some("000|Languages=Go;Other=SQL;"));
        assert!(summary.output.is_none());
        assert!(!temp.path().join("resume.tex").exists());
    }

    #[test]
    fn run_applies_overrides() {
        let (temp, mut options) = workspace();
        options.overrides = ContactOverrides {
            email: None,
            phone: Some("555".to_string()),
        };

        run(&options).unwrap();
        assert!(read(&temp.path().join("resume.tex")).starts_with("555|"));
    }

    #[test]
    fn missing_template_keeps_previous_output() {
        let (temp, mut options) = workspace();
        let out = temp.path().join("resume.tex");
        std::fs::write(&out, "previous").unwrap();
        options.template = Some("absent".to_string());

        let err = run(&options).unwrap_err();
        assert!(matches!(err, ResumeError::TemplateNotFound { .. }));
        assert_eq!(read(&out), "previous");
    }

    #[test]
    fn missing_resume_writes_nothing() {
        let (temp, mut options) = workspace();
        options.resume = temp.path().join("nope.json");

        let err = run(&options).unwrap_err();
        assert!(matches!(err, ResumeError::ResourceNotFound { .. }));
        assert!(!temp.path().join("resume.tex").exists());
    }
}
