//! Error handling for resumetex.
//!
//! This module provides:
//! - [`ResumeError`]: The main error enum for every pipeline stage
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Serializable error shape for robot output

mod codes;

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::resume::MalformedSkill;

pub use codes::ErrorCode;

/// Which input a load error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Resume,
    Config,
    Template,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Resume => "resume",
            Self::Config => "config",
            Self::Template => "template",
        };
        f.write_str(label)
    }
}

/// Pipeline stage an error surfaced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Load,
    Normalize,
    Render,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Load => "load",
            Self::Normalize => "normalize",
            Self::Render => "render",
            Self::Write => "write",
        };
        f.write_str(label)
    }
}

/// Main error type for resumetex operations.
#[derive(Error, Debug)]
pub enum ResumeError {
    #[error("{kind} not found: {}", .path.display())]
    ResourceNotFound { kind: ResourceKind, path: PathBuf },

    #[error("failed to read {kind} {}: {source}", .path.display())]
    ResourceUnreadable {
        kind: ResourceKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid {kind} {}: {message}", .path.display())]
    Schema {
        kind: ResourceKind,
        path: PathBuf,
        message: String,
    },

    #[error("invalid resume {}: {source}", .path.display())]
    MalformedSkill {
        path: PathBuf,
        #[source]
        source: MalformedSkill,
    },

    #[error("template '{name}' not found at {}", .path.display())]
    TemplateNotFound { name: String, path: PathBuf },

    #[error("template '{name}' failed to parse: {message}")]
    TemplateSyntax { name: String, message: String },

    #[error("template '{name}' failed to render: {message}")]
    TemplateEvaluation { name: String, message: String },

    #[error("failed to write output {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ResumeError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::ResourceNotFound { .. } => ErrorCode::ResourceNotFound,
            Self::ResourceUnreadable { .. } => ErrorCode::ResourceUnreadable,
            Self::Schema { .. } => ErrorCode::SchemaInvalid,
            Self::MalformedSkill { .. } => ErrorCode::SkillMalformed,
            Self::TemplateNotFound { .. } => ErrorCode::TemplateNotFound,
            Self::TemplateSyntax { .. } => ErrorCode::TemplateSyntax,
            Self::TemplateEvaluation { .. } => ErrorCode::TemplateEvaluation,
            Self::OutputWrite { .. } => ErrorCode::OutputWrite,
        }
    }

    /// Get the pipeline stage this error belongs to.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::ResourceNotFound {
                kind: ResourceKind::Template,
                ..
            }
            | Self::ResourceUnreadable {
                kind: ResourceKind::Template,
                ..
            }
            | Self::TemplateNotFound { .. }
            | Self::TemplateSyntax { .. }
            | Self::TemplateEvaluation { .. } => Stage::Render,
            Self::ResourceNotFound { .. }
            | Self::ResourceUnreadable { .. }
            | Self::Schema { .. } => Stage::Load,
            Self::MalformedSkill { .. } => Stage::Normalize,
            Self::OutputWrite { .. } => Stage::Write,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::ResourceNotFound { kind, path }
            | Self::ResourceUnreadable { kind, path, .. }
            | Self::Schema { kind, path, .. } => {
                Some(serde_json::json!({ "resource": kind, "path": path }))
            }
            Self::MalformedSkill { path, source } => Some(serde_json::json!({
                "path": path,
                "skill_index": source.index,
                "raw": source.raw,
            })),
            Self::TemplateNotFound { name, path } => {
                Some(serde_json::json!({ "template": name, "path": path }))
            }
            Self::TemplateSyntax { name, .. } | Self::TemplateEvaluation { name, .. } => {
                Some(serde_json::json!({ "template": name }))
            }
            Self::OutputWrite { path, .. } => Some(serde_json::json!({ "path": path })),
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_resume_error(self)
    }
}

/// A structured error with machine-readable code, stage, and context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "TEMPLATE_NOT_FOUND")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 301)
    pub numeric_code: u16,

    /// Pipeline stage that failed
    pub stage: Stage,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Error category (e.g., "input", "template")
    pub category: String,
}

impl StructuredError {
    #[must_use]
    pub fn from_resume_error(err: &ResumeError) -> Self {
        let code = err.code();
        Self {
            code,
            numeric_code: code.numeric(),
            stage: err.stage(),
            message: err.to_string(),
            suggestion: code.suggestion().to_string(),
            context: err.context(),
            category: code.category().to_string(),
        }
    }
}

impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} failed: {}", self.code, self.stage, self.message)
    }
}

impl From<&ResumeError> for StructuredError {
    fn from(err: &ResumeError) -> Self {
        Self::from_resume_error(err)
    }
}

/// Result type alias using `ResumeError`.
pub type Result<T> = std::result::Result<T, ResumeError>;
