//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Input resource errors
//! - 2xx: Schema errors
//! - 3xx: Template errors
//! - 4xx: Output errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for robot mode output.
///
/// Each variant maps to a numeric code (e.g., `ResourceNotFound` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Input resource errors (1xx)
    // ========================================
    /// E101: Input file does not exist
    ResourceNotFound,
    /// E102: Input file exists but could not be read
    ResourceUnreadable,

    // ========================================
    // Schema errors (2xx)
    // ========================================
    /// E201: Document parsed but a value has the wrong shape
    SchemaInvalid,
    /// E202: Skill entry matched none of the accepted shapes
    SkillMalformed,

    // ========================================
    // Template errors (3xx)
    // ========================================
    /// E301: Named template does not exist in the template directory
    TemplateNotFound,
    /// E302: Template source failed to parse
    TemplateSyntax,
    /// E303: Template failed while being evaluated
    TemplateEvaluation,

    // ========================================
    // Output errors (4xx)
    // ========================================
    /// E401: Rendered document could not be written
    OutputWrite,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `ResourceNotFound` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::ResourceNotFound => 101,
            Self::ResourceUnreadable => 102,

            Self::SchemaInvalid => 201,
            Self::SkillMalformed => 202,

            Self::TemplateNotFound => 301,
            Self::TemplateSyntax => 302,
            Self::TemplateEvaluation => 303,

            Self::OutputWrite => 401,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::ResourceNotFound => "Check the path, or pass --resume / --config explicitly",
            Self::ResourceUnreadable => "Check file permissions and that the path is a regular file",
            Self::SchemaInvalid => "Fix the reported field; line and column point at the offending value",
            Self::SkillMalformed => {
                "Write skills as {\"name\": ...}, [\"name\", \"years\"], or a plain \"name\""
            }
            Self::TemplateNotFound => "Run `resumetex templates` to list the available template names",
            Self::TemplateSyntax => "Fix the template source at the reported location",
            Self::TemplateEvaluation => {
                "Guard optional fields with `{% if ... %}` or check helper arguments"
            }
            Self::OutputWrite => "Check that the output directory exists and is writable",
        }
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "input",
            2 => "schema",
            3 => "template",
            4 => "output",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::ResourceNotFound,
            Self::ResourceUnreadable,
            Self::SchemaInvalid,
            Self::SkillMalformed,
            Self::TemplateNotFound,
            Self::TemplateSyntax,
            Self::TemplateEvaluation,
            Self::OutputWrite,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
