//! Template rendering.
//!
//! Templates are Tera files named `<template_name>.tera` in a template
//! directory. Each render builds its own Tera instance, registers the
//! renderer's [`TemplateHelpers`] on it and evaluates the template with two
//! variables:
//!
//! - `resume`: the [`ResumeRecord`]
//! - `config`: the [`RenderConfig`]
//!
//! ```text
//! {% if config.skills.enabled %}
//! {% for group in resume.skills | group_by_category %}
//! \textbf{ {{- group.name | latex_escape -}} }: {{ group.members | join(sep=", ") | latex_escape }}
//! {% endfor %}
//! {% endif %}
//! ```

pub mod escape;
pub mod grouping;
pub mod helpers;

use std::error::Error as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tera::{Context, Tera};
use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::error::{ResourceKind, ResumeError, Result};
use crate::resume::ResumeRecord;
use crate::utils::fs::read_resource;

pub use escape::latex_escape;
pub use grouping::{
    CategoryGroup, CategoryMap, OTHER_CATEGORY, group_by_category, skills_by_category,
};
pub use helpers::{LatexHelpers, TemplateHelpers};

/// File extension of template files.
pub const TEMPLATE_EXTENSION: &str = "tera";

/// Template source resolved from a [`TemplateSet`].
#[derive(Debug, Clone)]
pub struct TemplateSource {
    pub name: String,
    pub path: PathBuf,
    pub body: String,
}

/// A directory of named templates.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    dir: PathBuf,
}

impl TemplateSet {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a template name maps to.
    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{TEMPLATE_EXTENSION}"))
    }

    /// Read the template called `name`.
    ///
    /// Names that are empty or would leave the directory are treated as not
    /// found.
    pub fn resolve(&self, name: &str) -> Result<TemplateSource> {
        let path = self.path_for(name);
        if !is_plain_name(name) {
            return Err(ResumeError::TemplateNotFound {
                name: name.to_string(),
                path,
            });
        }
        match read_resource(ResourceKind::Template, &path) {
            Ok(body) => {
                debug!(template = name, path = %path.display(), "resolved template");
                Ok(TemplateSource {
                    name: name.to_string(),
                    path,
                    body,
                })
            }
            Err(ResumeError::ResourceNotFound { .. }) => Err(ResumeError::TemplateNotFound {
                name: name.to_string(),
                path,
            }),
            Err(err) => Err(err),
        }
    }

    /// Names of all templates in the directory, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.dir).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ResumeError::ResourceNotFound {
                    kind: ResourceKind::Template,
                    path: self.dir.clone(),
                }
            } else {
                ResumeError::ResourceUnreadable {
                    kind: ResourceKind::Template,
                    path: self.dir.clone(),
                    source,
                }
            }
        })?;

        let mut names: Vec<String> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|ext| ext == TEMPLATE_EXTENSION))
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_owned)
            })
            .collect();
        names.sort();
        Ok(names)
    }
}

fn is_plain_name(name: &str) -> bool {
    !name.trim().is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
}

/// Renders a resume through a named template.
#[derive(Clone)]
pub struct Renderer {
    templates: TemplateSet,
    helpers: Arc<dyn TemplateHelpers>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("templates", &self.templates)
            .finish_non_exhaustive()
    }
}

impl Renderer {
    /// A renderer over `templates` with the LaTeX helper set.
    #[must_use]
    pub fn new(templates: TemplateSet) -> Self {
        Self {
            templates,
            helpers: Arc::new(LatexHelpers),
        }
    }

    /// Replace the helper set exposed to templates.
    #[must_use]
    pub fn with_helpers(mut self, helpers: Arc<dyn TemplateHelpers>) -> Self {
        self.helpers = helpers;
        self
    }

    #[must_use]
    pub const fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Render `resume` through the template named by `config.template_name`.
    pub fn render(&self, resume: &ResumeRecord, config: &RenderConfig) -> Result<String> {
        let source = self.templates.resolve(&config.template_name)?;
        debug!(
            template = %source.name,
            skills = resume.skills.len(),
            "rendering resume"
        );
        self.render_source(&source.name, &source.body, resume, config)
    }

    /// Render `resume` through an in-memory template body.
    pub fn render_source(
        &self,
        name: &str,
        body: &str,
        resume: &ResumeRecord,
        config: &RenderConfig,
    ) -> Result<String> {
        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());
        helpers::register(&mut tera, &self.helpers);
        tera.add_raw_template(name, body)
            .map_err(|err| ResumeError::TemplateSyntax {
                name: name.to_string(),
                message: error_chain(&err),
            })?;

        let mut context = Context::new();
        context.insert("resume", resume);
        context.insert("config", config);

        let output = tera
            .render(name, &context)
            .map_err(|err| ResumeError::TemplateEvaluation {
                name: name.to_string(),
                message: error_chain(&err),
            })?;
        info!(template = name, bytes = output.len(), "rendered resume");
        Ok(output)
    }
}

/// Tera keeps the useful detail in the source chain; flatten it.
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
