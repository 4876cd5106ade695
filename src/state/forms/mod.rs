//! Form domain layer
//!
//! Type-safe state for the onboarding form: field values, the touched set,
//! and errors derived from the validation schema.

mod field;
mod form_state;
mod schema;

pub use field::{FieldName, OnboardValues};
pub use form_state::{Form, FormSnapshot, OnboardForm, SUBMIT_BUTTON_INDEX};
pub use schema::REQUIRED_MESSAGE;
