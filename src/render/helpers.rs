//! Helpers exposed to templates.
//!
//! A [`TemplateHelpers`] implementation is handed to each
//! [`Renderer`](super::Renderer) and registered on that renderer's own Tera
//! instance as filters:
//!
//! | filter              | input            | output                     |
//! |---------------------|------------------|----------------------------|
//! | `group_by_category` | list of skills   | list of `{name, members}`  |
//! | `ordered_skills`    | list of skills   | alias of the above         |
//! | `skills_by_category`| list of skills   | map of label → skills      |
//! | `sorted_keys`       | category map     | sorted list of labels      |
//! | `join(sep=", ")`    | list of strings  | string                     |
//! | `latex_escape`      | string           | escaped string             |

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tera::{Tera, Value};

use super::escape::latex_escape;
use super::grouping::{self, CategoryGroup, CategoryMap};
use crate::resume::SkillEntry;

pub trait TemplateHelpers: Send + Sync {
    fn group_by_category(&self, skills: &[SkillEntry]) -> Vec<CategoryGroup> {
        grouping::group_by_category(skills)
    }

    fn skills_by_category(&self, skills: &[SkillEntry]) -> CategoryMap {
        grouping::skills_by_category(skills)
    }

    fn sorted_keys(&self, map: &CategoryMap) -> Vec<String> {
        map.sorted_keys()
    }

    fn join(&self, items: &[String], separator: &str) -> String {
        items.join(separator)
    }

    fn escape(&self, text: &str) -> String {
        latex_escape(text)
    }
}

/// The stock helper set for LaTeX output.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexHelpers;

impl TemplateHelpers for LatexHelpers {}

type Args = HashMap<String, Value>;

/// Register every helper of `helpers` as a filter on `tera`.
pub fn register(tera: &mut Tera, helpers: &Arc<dyn TemplateHelpers>) {
    for name in ["group_by_category", "ordered_skills"] {
        let h = Arc::clone(helpers);
        tera.register_filter(name, move |value: &Value, _: &Args| -> tera::Result<Value> {
            let skills: Vec<SkillEntry> = decode(name, value)?;
            Ok(serde_json::to_value(h.group_by_category(&skills))?)
        });
    }

    let h = Arc::clone(helpers);
    tera.register_filter("skills_by_category", move |value: &Value, _: &Args| -> tera::Result<Value> {
        let skills: Vec<SkillEntry> = decode("skills_by_category", value)?;
        Ok(serde_json::to_value(h.skills_by_category(&skills))?)
    });

    let h = Arc::clone(helpers);
    tera.register_filter("sorted_keys", move |value: &Value, _: &Args| -> tera::Result<Value> {
        let map: CategoryMap = decode("sorted_keys", value)?;
        Ok(serde_json::to_value(h.sorted_keys(&map))?)
    });

    let h = Arc::clone(helpers);
    tera.register_filter("join", move |value: &Value, args: &Args| -> tera::Result<Value> {
        let items = value
            .as_array()
            .ok_or_else(|| tera::Error::msg("filter `join` expects a list"))?
            .iter()
            .map(text_of)
            .collect::<tera::Result<Vec<_>>>()?;
        let separator = match args.get("sep") {
            Some(Value::String(sep)) => sep.as_str(),
            Some(other) => {
                return Err(tera::Error::msg(format!(
                    "filter `join` expects `sep` to be a string, got {other}"
                )));
            }
            None => "",
        };
        Ok(Value::String(h.join(&items, separator)))
    });

    let h = Arc::clone(helpers);
    tera.register_filter("latex_escape", move |value: &Value, _: &Args| -> tera::Result<Value> {
        Ok(Value::String(h.escape(&text_of(value)?)))
    });
}

fn decode<T: DeserializeOwned>(filter: &str, value: &Value) -> tera::Result<T> {
    serde_json::from_value(value.clone())
        .map_err(|err| tera::Error::msg(format!("filter `{filter}` got invalid input: {err}")))
}

/// Scalars are rendered as text; null is the empty string.
fn text_of(value: &Value) -> tera::Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok(String::new()),
        Value::Bool(_) | Value::Number(_) => Ok(value.to_string()),
        Value::Array(_) | Value::Object(_) => Err(tera::Error::msg(format!(
            "expected text, got {value}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tera::Context;

    fn render(template: &str, context: &Context) -> tera::Result<String> {
        let mut tera = Tera::default();
        let helpers: Arc<dyn TemplateHelpers> = Arc::new(LatexHelpers);
        register(&mut tera, &helpers);
        tera.add_raw_template("t", template)?;
        tera.render("t", context)
    }

    fn skills_context() -> Context {
        let mut context = Context::new();
        context.insert(
            "skills",
            &json!([
                {"name": "Go", "category": "Languages"},
                {"name": "Postgres", "category": "Databases"},
                {"name": "Rust", "category": "Languages"},
                {"name": "SQL"}
            ]),
        );
        context
    }

    #[test]
    fn group_by_category_filter() {
        let out = render(
            "{% for g in skills | group_by_category %}{{ g.name }}={{ g.members | join(sep=\",\") }};{% endfor %}",
            &skills_context(),
        )
        .unwrap();
        assert_eq!(out, "Languages=Go,Rust;Databases=Postgres;Other=SQL;");
    }

    #[test]
    fn ordered_skills_is_alias() {
        let out = render(
            "{% for g in skills | ordered_skills %}{{ g.name }} {% endfor %}",
            &skills_context(),
        )
        .unwrap();
        assert_eq!(out, "Languages Databases Other ");
    }

    #[test]
    fn sorted_keys_filter() {
        let out = render(
            "{% set map = skills | skills_by_category %}{% for k in map | sorted_keys %}{{ k }}:{{ map[k] | length }} {% endfor %}",
            &skills_context(),
        )
        .unwrap();
        assert_eq!(out, "Databases:1 Languages:2 Other:1 ");
    }

    #[test]
    fn latex_escape_filter() {
        let mut context = Context::new();
        context.insert("text", "R&D at 100%\nnext");
        let out = render("{{ text | latex_escape }}", &context).unwrap();
        assert_eq!(out, "R\\&D at 100\\% \\\\ next");
    }

    #[test]
    fn latex_escape_of_null_is_empty() {
        let mut context = Context::new();
        context.insert("text", &Value::Null);
        assert_eq!(render("[{{ text | latex_escape }}]", &context).unwrap(), "[]");
    }

    #[test]
    fn join_rejects_non_list() {
        let mut context = Context::new();
        context.insert("text", "abc");
        assert!(render("{{ text | join(sep=\",\") }}", &context).is_err());
    }

    #[test]
    fn grouping_rejects_malformed_skills() {
        let mut context = Context::new();
        context.insert("skills", &json!([42]));
        assert!(render("{{ skills | group_by_category | length }}", &context).is_err());
    }

    struct UpperHelpers;

    impl TemplateHelpers for UpperHelpers {
        fn escape(&self, text: &str) -> String {
            text.to_uppercase()
        }
    }

    #[test]
    fn injected_helpers_replace_defaults() {
        let mut tera = Tera::default();
        let helpers: Arc<dyn TemplateHelpers> = Arc::new(UpperHelpers);
        register(&mut tera, &helpers);
        tera.add_raw_template("t", "{{ text | latex_escape }}").unwrap();
        let mut context = Context::new();
        context.insert("text", "a_b");
        assert_eq!(tera.render("t", &context).unwrap(), "A_B");
    }
}
