//! Trait abstraction for form submission to enable mocking in tests

use crate::state::OnboardValues;
use async_trait::async_trait;

use super::client::{SubmitError, SubmitResponse};

/// Trait for sending the onboarding form somewhere, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Send the form values and return whatever the remote answered
    async fn submit(&self, values: &OnboardValues) -> Result<SubmitResponse, SubmitError>;
}
