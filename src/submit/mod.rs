//! Form submission module
//!
//! The submit handler posts the form values and logs the answer. It runs
//! detached from the UI loop: nothing waits for it, nothing cancels it, and
//! a failure is only reported to the log.

mod client;
mod traits;

pub use client::{HttpSubmitter, SubmitResponse, DEFAULT_ENDPOINT};

pub use client::SubmitError;
pub use traits::Submitter;

#[cfg(test)]
pub use traits::MockSubmitter;

use crate::state::OnboardValues;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Background submission; resolves to the response that was logged, if any
pub type SubmitTask = JoinHandle<Option<SubmitResponse>>;

/// Spawn one submission of `values` and log the response
///
/// Only a successful response is logged as such. A failure is reported the
/// way the runtime reports an error nobody handled.
pub fn dispatch(submitter: Arc<dyn Submitter>, values: OnboardValues) -> SubmitTask {
    tokio::spawn(async move {
        match submitter.submit(&values).await {
            Ok(response) => {
                tracing::info!(status = response.status, body = %response.body, "Form submitted");
                Some(response)
            }
            Err(err) => {
                tracing::error!("Uncaught error in detached task: {err}");
                None
            }
        }
    })
}
