//! Render configuration: template selection, accent colour and section
//! toggles, read from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ResourceKind, ResumeError, Result};
use crate::utils::fs::read_resource;

/// Default accent colour when the config does not name one.
pub const DEFAULT_ACCENT_COLOR: &str = "000000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Name of the template file (without extension) in the template directory.
    #[serde(default)]
    pub template_name: String,
    /// Hex RGB colour, without `#`.
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    #[serde(default)]
    pub contact: SectionConfig,
    #[serde(default)]
    pub summary: SectionConfig,
    #[serde(default)]
    pub skills: SectionConfig,
    #[serde(default)]
    pub experience: SectionConfig,
    #[serde(default)]
    pub education: SectionConfig,
    #[serde(default)]
    pub projects: SectionConfig,
    #[serde(default)]
    pub awards: SectionConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template_name: String::new(),
            accent_color: default_accent_color(),
            contact: SectionConfig::default(),
            summary: SectionConfig::default(),
            skills: SectionConfig::default(),
            experience: SectionConfig::default(),
            education: SectionConfig::default(),
            projects: SectionConfig::default(),
            awards: SectionConfig::default(),
        }
    }
}

/// Per-section toggle. A section missing from the file is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    #[serde(default)]
    pub enabled: bool,
}

impl SectionConfig {
    #[must_use]
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }
}

fn default_accent_color() -> String {
    DEFAULT_ACCENT_COLOR.to_string()
}

impl RenderConfig {
    /// Load the configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "loading render config");
        let raw = read_resource(ResourceKind::Config, path)?;
        let config = Self::parse(&raw, path)?;
        debug!(
            template = %config.template_name,
            sections = ?config.enabled_sections(),
            "render config loaded"
        );
        Ok(config)
    }

    /// Parse YAML. `path` is only used in error messages.
    pub fn parse(raw: &str, path: &Path) -> Result<Self> {
        // An empty document decodes as YAML null; treat it as all defaults.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).map_err(|err| ResumeError::Schema {
            kind: ResourceKind::Config,
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Replace the template name, e.g. from a command-line flag.
    #[must_use]
    pub fn with_template_name(mut self, name: impl Into<String>) -> Self {
        self.template_name = name.into();
        self
    }

    /// Turn every section on.
    #[must_use]
    pub const fn with_all_sections(mut self) -> Self {
        let on = SectionConfig::enabled();
        self.contact = on;
        self.summary = on;
        self.skills = on;
        self.experience = on;
        self.education = on;
        self.projects = on;
        self.awards = on;
        self
    }

    /// Names of the enabled sections, in document order.
    #[must_use]
    pub fn enabled_sections(&self) -> Vec<&'static str> {
        [
            ("contact", self.contact),
            ("summary", self.summary),
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
            ("projects", self.projects),
            ("awards", self.awards),
        ]
        .into_iter()
        .filter(|(_, section)| section.enabled)
        .map(|(name, _)| name)
        .collect()
    }
}
