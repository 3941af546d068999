//! Validation - the add-to-cart guard
//!
//! Rules produce structured violations.
//! The validator collects them; any error blocks the add.

use serde::{Deserialize, Serialize};

use crate::selection::Selection;

pub const DEFAULT_MAX_TEXT_LEN: usize = 9;
pub const MISSING_NAME_MESSAGE: &str = "Por favor escribe el nombre de tu mascota.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationViolation {
    pub rule: String,
    pub severity: ViolationSeverity,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<ValidationViolation>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.severity == ViolationSeverity::Error)
    }

    /// Messages of the blocking violations, joined for display.
    pub fn error_message(&self) -> String {
        self.violations
            .iter()
            .filter(|v| v.severity == ViolationSeverity::Error)
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

pub trait SelectionRule {
    fn name(&self) -> &'static str;
    fn validate(&self, selection: &Selection) -> Vec<ValidationViolation>;
}

/// The engraved name must contain something besides whitespace.
pub struct RequiredTextRule;

impl SelectionRule for RequiredTextRule {
    fn name(&self) -> &'static str { "required_text" }

    fn validate(&self, selection: &Selection) -> Vec<ValidationViolation> {
        if !selection.text.trim().is_empty() {
            return vec![];
        }
        vec![ValidationViolation {
            rule: self.name().to_string(),
            severity: ViolationSeverity::Error,
            message: MISSING_NAME_MESSAGE.to_string(),
            expected: Some("non-blank name".to_string()),
            actual: Some(format!("{:?}", selection.text)),
        }]
    }
}

/// Engraving fits at most `max` characters.
pub struct TextLengthRule {
    pub max: usize,
}

impl SelectionRule for TextLengthRule {
    fn name(&self) -> &'static str { "text_length" }

    fn validate(&self, selection: &Selection) -> Vec<ValidationViolation> {
        let len = selection.text.chars().count();
        if len <= self.max {
            return vec![];
        }
        vec![ValidationViolation {
            rule: self.name().to_string(),
            severity: ViolationSeverity::Error,
            message: format!("El nombre admite hasta {} caracteres.", self.max),
            expected: Some(format!("{} characters max", self.max)),
            actual: Some(format!("{} characters", len)),
        }]
    }
}

pub struct Validator {
    rules: Vec<Box<dyn SelectionRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self::with_max_text_len(DEFAULT_MAX_TEXT_LEN)
    }

    pub fn with_max_text_len(max: usize) -> Self {
        Self {
            rules: vec![
                Box::new(RequiredTextRule),
                Box::new(TextLengthRule { max }),
            ],
        }
    }

    pub fn validate(&self, selection: &Selection) -> ValidationResult {
        let violations: Vec<_> = self.rules
            .iter()
            .flat_map(|rule| rule.validate(selection))
            .collect();
        let valid = !violations.iter().any(|v| v.severity == ViolationSeverity::Error);
        ValidationResult { valid, violations }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
