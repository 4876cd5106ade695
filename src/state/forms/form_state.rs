//! Onboarding form state: values, touched set and derived errors

use super::field::{FieldName, OnboardValues};
use super::schema::{FieldErrors, ValidationSchema};
use std::collections::BTreeSet;

/// Index of the submit button row in the focus order
pub const SUBMIT_BUTTON_INDEX: usize = FieldName::ALL.len();

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Immutable view of the form handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub values: OnboardValues,
    pub touched: BTreeSet<FieldName>,
    pub errors: FieldErrors,
    pub active_field_index: usize,
}

/// Onboarding form state
///
/// `errors` is recomputed from `values` after every change, so it always
/// matches the schema. `touched` is only ever added to.
#[derive(Debug, Clone)]
pub struct OnboardForm {
    values: OnboardValues,
    touched: BTreeSet<FieldName>,
    errors: FieldErrors,
    schema: ValidationSchema,
    pub active_field_index: usize,
}

impl OnboardForm {
    pub fn new() -> Self {
        Self::with_values(OnboardValues::default())
    }

    /// Start the form from pre-filled values
    pub fn with_values(values: OnboardValues) -> Self {
        let schema = ValidationSchema::onboarding();
        let errors = schema.validate(&values);
        Self {
            values,
            touched: BTreeSet::new(),
            errors,
            schema,
            active_field_index: 0,
        }
    }

    pub fn values(&self) -> &OnboardValues {
        &self.values
    }

    pub fn touched(&self) -> &BTreeSet<FieldName> {
        &self.touched
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The field under keyboard focus, or `None` on the submit button
    pub fn active(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    /// Focus a specific field
    pub fn focus(&mut self, field: FieldName) {
        let index = FieldName::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap_or(0);
        self.set_active_field(index);
    }

    /// Replace a text field's value; ignored for the checkbox
    pub fn set_text(&mut self, field: FieldName, value: impl Into<String>) {
        if let Some(slot) = self.values.text_mut(field) {
            *slot = value.into();
            self.revalidate();
        }
    }

    /// Push a character to the focused text field
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.active() {
            if let Some(slot) = self.values.text_mut(field) {
                slot.push(c);
                self.revalidate();
            }
        }
    }

    /// Remove the last character from the focused text field
    pub fn pop_char(&mut self) {
        if let Some(field) = self.active() {
            if let Some(slot) = self.values.text_mut(field) {
                slot.pop();
                self.revalidate();
            }
        }
    }

    pub fn toggle_tos(&mut self) {
        self.values.tos = !self.values.tos;
        self.revalidate();
    }

    /// Mark a field as touched (the user left it)
    pub fn blur(&mut self, field: FieldName) {
        self.touched.insert(field);
        self.revalidate();
    }

    /// Mark every field as touched, as happens on submit
    pub fn touch_all(&mut self) {
        self.touched.extend(FieldName::ALL);
        self.revalidate();
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            values: self.values.clone(),
            touched: self.touched.clone(),
            errors: self.errors.clone(),
            active_field_index: self.active_field_index,
        }
    }

    fn revalidate(&mut self) {
        self.errors = self.schema.validate(&self.values);
    }
}

impl Default for OnboardForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for OnboardForm {
    fn field_count(&self) -> usize {
        SUBMIT_BUTTON_INDEX + 1 // four fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    /// Moving focus away from a field blurs it
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(SUBMIT_BUTTON_INDEX);
        if index != self.active_field_index {
            if let Some(left) = self.active() {
                self.blur(left);
            }
        }
        self.active_field_index = index;
    }
}
