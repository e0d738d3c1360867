//! Trait abstraction for the action host to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A form submission handed to the host
#[derive(Debug, Clone, Serialize)]
pub struct FormSubmission {
    /// Unique id of this submission attempt
    pub id: Uuid,
    /// Page the form lives on
    pub page: String,
    /// Form element id, when the page gave it one
    pub form: Option<String>,
    /// The form's `action` attribute
    pub action: Option<String>,
    /// Named field values in document order
    pub fields: Vec<(String, String)>,
    pub submitted_at: DateTime<Utc>,
}

/// Host reply to a submission
#[derive(Debug, Clone, Default)]
pub struct SubmitOutcome {
    /// Status-bar message to show the user
    pub message: Option<String>,
}

/// Trait for host operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActionHost: Send + Sync {
    /// Handle a form submission
    async fn submit_form(&mut self, submission: FormSubmission) -> Result<SubmitOutcome>;

    /// Run a named page action (non-submit buttons). Returns an optional
    /// status-bar message.
    async fn run_action(&mut self, page: &str, action: &str) -> Result<Option<String>>;
}
