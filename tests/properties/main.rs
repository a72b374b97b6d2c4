//! Property-based tests for escaping and grouping.

use proptest::prelude::*;

use resumetex::render::escape::LINE_BREAK;
use resumetex::render::{OTHER_CATEGORY, group_by_category, latex_escape, skills_by_category};
use resumetex::resume::SkillEntry;

const SPECIAL: [char; 9] = ['{', '}', '$', '&', '%', '#', '^', '_', '~'];

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => "[a-zA-Z0-9 .,]",
            2 => prop::sample::select(SPECIAL.to_vec()).prop_map(String::from),
            1 => Just("\n".to_string()),
            1 => Just("\\".to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn arb_skills() -> impl Strategy<Value = Vec<SkillEntry>> {
    prop::collection::vec(
        ("[a-z]{1,8}", prop::option::of("[A-D]")),
        0..24,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(name, category)| {
                let entry = SkillEntry::named(name);
                match category {
                    Some(category) => entry.with_category(category),
                    None => entry,
                }
            })
            .collect()
    })
}

/// Strip every escape sequence the escaper emits; whatever remains was raw.
fn strip_escapes(escaped: &str) -> String {
    let mut rest = escaped.replace(LINE_BREAK, "");
    for sequence in ["\\textasciicircum{}", "\\textasciitilde{}"] {
        rest = rest.replace(sequence, "");
    }
    for ch in SPECIAL {
        rest = rest.replace(&format!("\\{ch}"), "");
    }
    rest
}

proptest! {
    #[test]
    fn escaped_text_has_no_raw_markup(text in arb_text()) {
        let escaped = latex_escape(&text);
        let rest = strip_escapes(&escaped);
        for ch in SPECIAL {
            prop_assert!(!rest.contains(ch), "raw {ch:?} in {escaped:?}");
        }
    }

    #[test]
    fn escaped_text_has_no_line_feeds(text in arb_text()) {
        let escaped = latex_escape(&text);
        prop_assert!(!escaped.contains('\n'));
        prop_assert_eq!(
            escaped.matches(LINE_BREAK).count(),
            text.matches('\n').count()
        );
    }

    #[test]
    fn backslashes_pass_through(text in arb_text()) {
        prop_assert_eq!(
            latex_escape(&text).matches('\\').count()
                - text.matches(|c: char| SPECIAL.contains(&c) && c != '^' && c != '~').count()
                - text.matches(['^', '~']).count()
                - 2 * text.matches('\n').count(),
            text.matches('\\').count()
        );
    }

    #[test]
    fn plain_text_is_unchanged(text in "[a-zA-Z0-9 .,;:()-]{0,60}") {
        prop_assert_eq!(latex_escape(&text), text);
    }

    #[test]
    fn grouping_preserves_every_skill_in_order(skills in arb_skills()) {
        let groups = group_by_category(&skills);

        let total: usize = groups.iter().map(|g| g.members.len()).sum();
        prop_assert_eq!(total, skills.len());

        for group in &groups {
            let expected: Vec<&str> = skills
                .iter()
                .filter(|s| s.category.as_deref().unwrap_or(OTHER_CATEGORY) == group.name)
                .map(|s| s.name.as_str())
                .collect();
            prop_assert_eq!(group.members.iter().map(String::as_str).collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn group_order_is_first_seen(skills in arb_skills()) {
        let mut first_seen: Vec<String> = Vec::new();
        for skill in &skills {
            let label = skill.category.clone().unwrap_or_else(|| OTHER_CATEGORY.to_string());
            if !first_seen.contains(&label) {
                first_seen.push(label);
            }
        }
        let names: Vec<String> = group_by_category(&skills).into_iter().map(|g| g.name).collect();
        prop_assert_eq!(names, first_seen);
    }

    #[test]
    fn sorted_keys_match_group_labels(skills in arb_skills()) {
        let mut labels: Vec<String> = group_by_category(&skills).into_iter().map(|g| g.name).collect();
        labels.sort();
        let keys = skills_by_category(&skills).sorted_keys();
        prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(keys, labels);
    }
}
