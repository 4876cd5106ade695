//! Form field identifiers and values

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fields of the onboarding form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Email,
    Password,
    Tos,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Password,
        FieldName::Tos,
    ];

    /// Key used for the field in the submitted JSON body
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::Tos => "TOS",
        }
    }

    /// Whether the field is edited as text (as opposed to a checkbox)
    pub fn is_text(&self) -> bool {
        !matches!(self, FieldName::Tos)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Current values of the onboarding form
///
/// Serializes to `{ "name", "email", "password", "TOS" }`, which is the body
/// posted on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardValues {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(rename = "TOS", default)]
    pub tos: bool,
}

impl OnboardValues {
    /// Get a text field's value (`None` for the checkbox)
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Name => Some(&self.name),
            FieldName::Email => Some(&self.email),
            FieldName::Password => Some(&self.password),
            FieldName::Tos => None,
        }
    }

    /// Mutable access to a text field (`None` for the checkbox)
    pub fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::Name => Some(&mut self.name),
            FieldName::Email => Some(&mut self.email),
            FieldName::Password => Some(&mut self.password),
            FieldName::Tos => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_values_are_empty() {
        let values = OnboardValues::default();
        assert_eq!(values.name, "");
        assert_eq!(values.email, "");
        assert_eq!(values.password, "");
        assert!(!values.tos);
    }

    #[test]
    fn test_serializes_tos_with_original_key() {
        let values = OnboardValues {
            name: "Jo".to_string(),
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            tos: false,
        };
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jo",
                "email": "a@b.com",
                "password": "x",
                "TOS": false
            })
        );
    }

    #[test]
    fn test_deserialize_missing_fields_default() {
        let values: OnboardValues = serde_json::from_str(r#"{"name": "Jo"}"#).unwrap();
        assert_eq!(values.name, "Jo");
        assert_eq!(values.email, "");
        assert!(!values.tos);
    }

    #[test]
    fn test_text_accessors() {
        let mut values = OnboardValues::default();
        values.text_mut(FieldName::Email).unwrap().push_str("a@b.com");
        assert_eq!(values.text(FieldName::Email), Some("a@b.com"));
        assert!(values.text(FieldName::Tos).is_none());
        assert!(values.text_mut(FieldName::Tos).is_none());
    }

    #[test]
    fn test_field_keys() {
        let keys: Vec<_> = FieldName::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys, vec!["name", "email", "password", "TOS"]);
        assert!(FieldName::Name.is_text());
        assert!(!FieldName::Tos.is_text());
        assert_eq!(FieldName::Tos.to_string(), "TOS");
    }
}
