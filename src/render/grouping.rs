//! Grouping skills by category label.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::resume::SkillEntry;

/// Label used for skills without a category.
pub const OTHER_CATEGORY: &str = "Other";

/// A category and the names of its skills, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub name: String,
    pub members: Vec<String>,
}

/// Category label for `skill`, falling back to [`OTHER_CATEGORY`].
#[must_use]
pub fn category_of(skill: &SkillEntry) -> &str {
    skill
        .category
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(OTHER_CATEGORY)
}

/// Group skill names by category.
///
/// Groups appear in the order their label is first seen and members keep
/// their input order. Duplicate names are kept.
#[must_use]
pub fn group_by_category(skills: &[SkillEntry]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for skill in skills {
        let label = category_of(skill);
        match groups.iter_mut().find(|group| group.name == label) {
            Some(group) => group.members.push(skill.name.clone()),
            None => groups.push(CategoryGroup {
                name: label.to_string(),
                members: vec![skill.name.clone()],
            }),
        }
    }
    groups
}

/// Skills keyed by category, for lookup by label.
///
/// Iteration order of the map is unspecified; use [`CategoryMap::sorted_keys`]
/// for a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMap(HashMap<String, Vec<SkillEntry>>);

impl CategoryMap {
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[SkillEntry]> {
        self.0.get(category).map(Vec::as_slice)
    }

    /// Category labels in lexicographic order.
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.0.keys().cloned().collect();
        keys.sort();
        keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Group whole skill entries by category into a [`CategoryMap`].
#[must_use]
pub fn skills_by_category(skills: &[SkillEntry]) -> CategoryMap {
    let mut map: HashMap<String, Vec<SkillEntry>> = HashMap::new();
    for skill in skills {
        map.entry(category_of(skill).to_string())
            .or_default()
            .push(skill.clone());
    }
    CategoryMap(map)
}
