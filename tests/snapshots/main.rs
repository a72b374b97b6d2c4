use std::path::{Path, PathBuf};

use insta::{assert_json_snapshot, assert_snapshot};

use resumetex::config::{RenderConfig, SectionConfig};
use resumetex::error::{ResourceKind, ResumeError};
use resumetex::render::{Renderer, TemplateSet};
use resumetex::resume::parse_resume;

#[test]
fn test_error_resource_not_found() {
    let err = ResumeError::ResourceNotFound {
        kind: ResourceKind::Resume,
        path: PathBuf::from("resume.json"),
    };
    assert_snapshot!(err.to_string(), @"resume not found: resume.json");
}

#[test]
fn test_error_template_not_found() {
    let err = ResumeError::TemplateNotFound {
        name: "fancy".to_string(),
        path: PathBuf::from("templates/fancy.tera"),
    };
    assert_snapshot!(err.to_string(), @"template 'fancy' not found at templates/fancy.tera");
    assert_snapshot!(
        err.to_structured().to_string(),
        @"[E301] render failed: template 'fancy' not found at templates/fancy.tera"
    );
}

#[test]
fn test_error_malformed_skill() {
    let err = parse_resume(r#"{"skills": ["Go", 7]}"#, Path::new("resume.json")).unwrap_err();
    assert_snapshot!(
        err.to_string(),
        @"invalid resume resume.json: skill #1 is malformed (expected a record, a list of strings, or a string): 7"
    );
}

#[test]
fn test_error_structured_json() {
    let err = ResumeError::TemplateEvaluation {
        name: "classic".to_string(),
        message: "Variable `resume.nickname` not found".to_string(),
    };
    assert_json_snapshot!(err.to_structured(), @r#"
    {
      "code": "TEMPLATE_EVALUATION",
      "numeric_code": 303,
      "stage": "render",
      "message": "template 'classic' failed to render: Variable `resume.nickname` not found",
      "suggestion": "Guard optional fields with `{% if ... %}` or check helper arguments",
      "context": {
        "template": "classic"
      },
      "category": "template"
    }
    "#);
}

#[test]
fn test_rendered_skills_fragment() {
    let resume = parse_resume(
        r#"{
            "name": "Ada",
            "skills": [
                {"name": "Go", "category": "Languages"},
                ["C#", "3"],
                {"name": "Rust", "category": "Languages"},
                "R&D"
            ]
        }"#,
        Path::new("resume.json"),
    )
    .unwrap();
    let config = RenderConfig {
        skills: SectionConfig::enabled(),
        ..RenderConfig::default()
    };
    let template = "\
{% for group in resume.skills | group_by_category %}\
\\textbf{ {{- group.name | latex_escape -}} }: {{ group.members | join(sep=\", \") | latex_escape }}\\\\
{% endfor %}";

    let out = Renderer::new(TemplateSet::new("templates"))
        .render_source("fragment", template, &resume, &config)
        .unwrap();
    assert_snapshot!(out, @r"
    \textbf{Languages}: Go, Rust\\
    \textbf{Other}: C\#, R\&D\\
    ");
}
