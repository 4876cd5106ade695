//! Validation schema for the onboarding form

use super::field::{FieldName, OnboardValues};
use std::collections::BTreeMap;

/// Message shown for every missing required field
pub const REQUIRED_MESSAGE: &str = "this is an error message. YOU ARE IN ERROR";

/// Validation errors keyed by field; only failing fields are present
pub type FieldErrors = BTreeMap<FieldName, &'static str>;

/// Kinds of check a rule can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// A text value with at least one character
    Required,
}

impl Check {
    pub fn passes(&self, values: &OnboardValues, field: FieldName) -> bool {
        match self {
            Check::Required => values.text(field).is_some_and(|s| !s.is_empty()),
        }
    }
}

/// A single rule: the field it guards, the check, and the message on failure
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub field: FieldName,
    pub check: Check,
    pub message: &'static str,
}

/// Static set of per-field rules
#[derive(Debug, Clone)]
pub struct ValidationSchema {
    rules: Vec<Rule>,
}

impl ValidationSchema {
    /// Schema for the onboarding form: name, email and password are required.
    /// TOS has no rule.
    pub fn onboarding() -> Self {
        let rules = [FieldName::Name, FieldName::Email, FieldName::Password]
            .into_iter()
            .map(|field| Rule {
                field,
                check: Check::Required,
                message: REQUIRED_MESSAGE,
            })
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluate every rule independently against `values`
    pub fn validate(&self, values: &OnboardValues) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for rule in &self.rules {
            if !rule.check.passes(values, rule.field) {
                errors.entry(rule.field).or_insert(rule.message);
            }
        }
        errors
    }
}

impl Default for ValidationSchema {
    fn default() -> Self {
        Self::onboarding()
    }
}
