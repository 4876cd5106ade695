//! Pure description of what the onboarding form shows
//!
//! `present` turns a [`FormSnapshot`] into a [`FormView`]. Rendering only
//! reads the view, so everything visible can be checked without a terminal.

use crate::state::{FieldName, FormSnapshot, SUBMIT_BUTTON_INDEX};

pub const HEADING: &str = "I am a FORM";
pub const TOS_CAPTION: &str = "DO YOU AGREE?";
pub const SUBMIT_LABEL: &str = "Submit. Or don't. Do you.";

/// A text input and the error line beneath it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputView<'a> {
    pub field: FieldName,
    pub placeholder: &'static str,
    pub value: &'a str,
    pub is_active: bool,
    /// Shown only when the field is touched and currently invalid
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxView {
    pub field: FieldName,
    pub checked: bool,
    pub caption: &'static str,
    pub is_active: bool,
}

/// Everything the form screen displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView<'a> {
    pub heading: &'static str,
    pub inputs: Vec<TextInputView<'a>>,
    pub tos: CheckboxView,
    pub submit_label: &'static str,
    pub submit_active: bool,
}

impl FormView<'_> {
    /// The input for a text field
    pub fn input(&self, field: FieldName) -> Option<&TextInputView<'_>> {
        self.inputs.iter().find(|i| i.field == field)
    }

    /// Error lines currently displayed, in field order
    pub fn visible_errors(&self) -> Vec<(FieldName, &'static str)> {
        self.inputs
            .iter()
            .filter_map(|i| i.error.map(|e| (i.field, e)))
            .collect()
    }
}

pub fn placeholder(field: FieldName) -> &'static str {
    match field {
        FieldName::Name => "What is your name?",
        FieldName::Email => "What is your email?",
        FieldName::Password => "What is your password?",
        FieldName::Tos => TOS_CAPTION,
    }
}

/// Describe the form for the given snapshot
pub fn present(snapshot: &FormSnapshot) -> FormView<'_> {
    let active = FieldName::ALL.get(snapshot.active_field_index).copied();

    let inputs = FieldName::ALL
        .iter()
        .filter(|f| f.is_text())
        .map(|&field| TextInputView {
            field,
            placeholder: placeholder(field),
            value: snapshot.values.text(field).unwrap_or_default(),
            is_active: active == Some(field),
            error: if snapshot.touched.contains(&field) {
                snapshot.errors.get(&field).copied().filter(|e| !e.is_empty())
            } else {
                None
            },
        })
        .collect();

    FormView {
        heading: HEADING,
        inputs,
        tos: CheckboxView {
            field: FieldName::Tos,
            checked: snapshot.values.tos,
            caption: TOS_CAPTION,
            is_active: active == Some(FieldName::Tos),
        },
        submit_label: SUBMIT_LABEL,
        submit_active: snapshot.active_field_index == SUBMIT_BUTTON_INDEX,
    }
}
