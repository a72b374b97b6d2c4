//! Resume data model and loading.
//!
//! The resume is read from JSON into a [`ResumeDocument`], where skills are
//! still in whatever shape the author wrote them, and then normalized into a
//! [`ResumeRecord`].

mod contact;
mod skill;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ResourceKind, ResumeError, Result};
use crate::utils::fs::read_resource;

pub use contact::{ContactInfo, ContactOverrides, EMAIL_ENV, PHONE_ENV};
pub use skill::{MalformedSkill, RawSkill, SkillEntry, SkillRecord, normalize_all};

/// A fully loaded resume with canonical skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResumeRecord {
    pub name: String,
    pub contact: ContactInfo,
    pub summary: String,
    pub skills: Vec<SkillEntry>,
    pub experience: Vec<JobEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub awards: Vec<String>,
}

/// A resume as decoded from JSON, before skills are normalized.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<RawSkill>,
    #[serde(default)]
    pub experience: Vec<JobEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub awards: Vec<String>,
}

impl ResumeDocument {
    /// Normalize every skill and produce the final record.
    pub fn into_record(self) -> std::result::Result<ResumeRecord, MalformedSkill> {
        Ok(ResumeRecord {
            name: self.name,
            contact: self.contact,
            summary: self.summary,
            skills: normalize_all(self.skills)?,
            experience: self.experience,
            education: self.education,
            projects: self.projects,
            awards: self.awards,
        })
    }
}

/// An employer. Either `responsibilities` or `positions` is normally used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub positions: Vec<PositionEntry>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

/// A role held at one employer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionEntry {
    #[serde(default)]
    pub title: String,
    /// Employment type, e.g. "Full-time" or "Internship".
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Parse resume JSON. `path` is only used in error messages.
pub fn parse_resume(source: &str, path: &Path) -> Result<ResumeRecord> {
    let document: ResumeDocument =
        serde_json::from_str(source).map_err(|err| ResumeError::Schema {
            kind: ResourceKind::Resume,
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
    document
        .into_record()
        .map_err(|source| ResumeError::MalformedSkill {
            path: path.to_path_buf(),
            source,
        })
}

/// Load a resume and apply contact overrides.
pub fn load_resume(path: &Path, overrides: &ContactOverrides) -> Result<ResumeRecord> {
    info!(path = %path.display(), "loading resume");
    let source = read_resource(ResourceKind::Resume, path)?;
    let mut resume = parse_resume(&source, path)?;
    overrides.apply(&mut resume.contact);
    debug!(
        skills = resume.skills.len(),
        jobs = resume.experience.len(),
        projects = resume.projects.len(),
        "resume loaded"
    );
    Ok(resume)
}
