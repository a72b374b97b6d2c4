use console::style;
use serde_json::{Value, json};

use crate::error::ResumeError;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Human,
    Robot,
}

impl OutputMode {
    #[must_use]
    pub const fn from_robot(robot: bool) -> Self {
        if robot { Self::Robot } else { Self::Human }
    }

    #[must_use]
    pub const fn is_robot(self) -> bool {
        matches!(self, Self::Robot)
    }
}

/// Print a JSON value on stdout.
pub fn emit_json(value: &Value) {
    println!("{value:#}");
}

/// Robot-mode error object.
#[must_use]
pub fn robot_error(err: &ResumeError) -> Value {
    let structured = err.to_structured();
    let mut value = json!({
        "error": true,
        "code": structured.code,
        "numeric_code": structured.numeric_code,
        "stage": structured.stage,
        "message": structured.message,
        "suggestion": structured.suggestion,
    });
    if let (Some(context), Some(object)) = (structured.context, value.as_object_mut()) {
        object.insert("context".to_string(), context);
    }
    value
}

/// Human-mode error line naming the failing stage.
#[must_use]
pub fn human_error(err: &ResumeError) -> String {
    let structured = err.to_structured();
    format!(
        "{} {} failed: {}\n  {} {}",
        style(format!("error[{}]:", structured.code.code_string()))
            .red()
            .bold(),
        structured.stage,
        structured.message,
        style("hint:").dim(),
        structured.suggestion,
    )
}

pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 10,
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines.push(style(text).green().bold().to_string());
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        // Pad before styling; escape codes would count toward the width.
        let key = format!("{key:width$}", width = self.key_width);
        self.lines.push(format!("  {} {value}", style(key).dim()));
        self
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("  - {text}"));
        self
    }

    #[must_use]
    pub fn build(&self) -> String {
        self.lines.join("\n")
    }
}

pub fn emit_human(layout: &HumanLayout) {
    println!("{}", layout.build());
}
