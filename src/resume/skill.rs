//! Skill entries and the shapes they may be written in.
//!
//! A resume may list a skill as a full record, as a `[name, years]` list, or
//! as a bare name. [`RawSkill`] captures which shape was seen and
//! [`RawSkill::normalize`] reduces it to a [`SkillEntry`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Canonical skill record.
///
/// Deserializing accepts any of the shapes [`RawSkill`] does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSkill")]
pub struct SkillEntry {
    pub name: String,
    pub level: Option<String>,
    pub years: Option<String>,
    /// Left unset when absent; grouping substitutes its own fallback label.
    pub category: Option<String>,
    pub keywords: Vec<String>,
}

impl TryFrom<RawSkill> for SkillEntry {
    type Error = MalformedSkill;

    fn try_from(raw: RawSkill) -> Result<Self, Self::Error> {
        raw.normalize(0)
    }
}

impl SkillEntry {
    /// Build an entry carrying only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
            years: None,
            category: None,
            keywords: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// The structured-record shape of a skill. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub years: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

/// A skill value as it appeared in the source document.
#[derive(Debug, Clone, PartialEq)]
pub enum RawSkill {
    /// A mapping whose fields are all well-typed, with the value as written.
    Record { record: SkillRecord, value: Value },
    /// A list of strings: `[name]` or `[name, years]`.
    Pair(Vec<String>),
    /// A bare name.
    Scalar(String),
    /// Anything else, kept with the reason it was rejected.
    Unparseable { value: Value, reason: String },
}

impl From<Value> for RawSkill {
    fn from(value: Value) -> Self {
        match &value {
            Value::Object(_) => match SkillRecord::deserialize(&value) {
                Ok(record) => Self::Record { record, value },
                Err(err) => Self::Unparseable {
                    reason: format!("record has an invalid field: {err}"),
                    value,
                },
            },
            Value::Array(items) => {
                let names: Option<Vec<String>> = items
                    .iter()
                    .map(|item| item.as_str().map(str::to_owned))
                    .collect();
                match names {
                    Some(names) => Self::Pair(names),
                    None => Self::Unparseable {
                        reason: "list entries must all be strings".to_string(),
                        value,
                    },
                }
            }
            Value::String(name) => Self::Scalar(name.clone()),
            _ => Self::Unparseable {
                reason: "expected a record, a list of strings, or a string".to_string(),
                value,
            },
        }
    }
}

impl<'de> Deserialize<'de> for RawSkill {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// A skill value that matched none of the accepted shapes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("skill #{index} is malformed ({reason}): {raw}")]
pub struct MalformedSkill {
    /// Zero-based position in the skills list.
    pub index: usize,
    /// The offending value, re-encoded as JSON.
    pub raw: String,
    pub reason: String,
}

impl RawSkill {
    /// Reduce this value to a [`SkillEntry`].
    ///
    /// `index` is the position of the value in its list and is only used for
    /// error reporting.
    pub fn normalize(self, index: usize) -> Result<SkillEntry, MalformedSkill> {
        match self {
            Self::Record { record, value } => {
                let Some(name) = non_empty(record.name) else {
                    return Err(MalformedSkill {
                        index,
                        raw: value.to_string(),
                        reason: "record has no name".to_string(),
                    });
                };
                Ok(SkillEntry {
                    name,
                    level: non_empty(record.level),
                    years: non_empty(record.years),
                    category: non_empty(record.category),
                    keywords: record.keywords.unwrap_or_default(),
                })
            }
            Self::Pair(items) => {
                let raw = serde_json::to_string(&items).unwrap_or_default();
                let mut items = items.into_iter();
                let Some(name) = non_empty(items.next()) else {
                    return Err(MalformedSkill {
                        index,
                        raw,
                        reason: "list has no name".to_string(),
                    });
                };
                let years = non_empty(items.next());
                let extra = items.count();
                if extra > 0 {
                    debug!(index, extra, skill = %name, "ignoring trailing skill list elements");
                }
                Ok(SkillEntry {
                    years,
                    ..SkillEntry::named(name)
                })
            }
            Self::Scalar(name) if name.trim().is_empty() => Err(MalformedSkill {
                index,
                raw: Value::String(name).to_string(),
                reason: "name is empty".to_string(),
            }),
            Self::Scalar(name) => Ok(SkillEntry::named(name)),
            Self::Unparseable { value, reason } => Err(MalformedSkill {
                index,
                raw: value.to_string(),
                reason,
            }),
        }
    }
}

/// Normalize every value in order, failing on the first malformed one.
pub fn normalize_all(raw: Vec<RawSkill>) -> Result<Vec<SkillEntry>, MalformedSkill> {
    raw.into_iter()
        .enumerate()
        .map(|(index, skill)| skill.normalize(index))
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
