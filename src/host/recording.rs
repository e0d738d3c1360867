//! Default in-process host: records submissions and actions in memory

use super::traits::{ActionHost, FormSubmission, SubmitOutcome};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Host that retains every submission and action it receives. This is
/// the stand-in for the server-side service layer the pages belong to.
#[derive(Debug, Default)]
pub struct RecordingHost {
    submissions: Vec<FormSubmission>,
    actions: Vec<(String, String)>,
}

#[allow(dead_code)]
impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// All submissions received so far
    pub fn submissions(&self) -> &[FormSubmission] {
        &self.submissions
    }

    /// All (page, action) pairs received so far
    pub fn actions(&self) -> &[(String, String)] {
        &self.actions
    }
}

#[async_trait]
impl ActionHost for RecordingHost {
    async fn submit_form(&mut self, submission: FormSubmission) -> Result<SubmitOutcome> {
        info!(
            id = %submission.id,
            page = %submission.page,
            action = submission.action.as_deref().unwrap_or("-"),
            fields = submission.fields.len(),
            "form submitted"
        );
        let label = submission
            .action
            .clone()
            .or_else(|| submission.form.clone())
            .unwrap_or_else(|| "form".to_string());
        self.submissions.push(submission);
        Ok(SubmitOutcome {
            message: Some(format!("Submitted {label}")),
        })
    }

    async fn run_action(&mut self, page: &str, action: &str) -> Result<Option<String>> {
        info!(page, action, "action triggered");
        self.actions.push((page.to_string(), action.to_string()));
        Ok(Some(format!("Ran {action}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn submission(action: Option<&str>) -> FormSubmission {
        FormSubmission {
            id: Uuid::new_v4(),
            page: "demo".to_string(),
            form: Some("user-form".to_string()),
            action: action.map(str::to_string),
            fields: vec![("name".to_string(), "alice".to_string())],
            submitted_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_submit_form_records_and_acknowledges() {
        let mut host = RecordingHost::new();
        let outcome = host.submit_form(submission(Some("save-user"))).await.unwrap();

        assert_eq!(outcome.message.as_deref(), Some("Submitted save-user"));
        assert_eq!(host.submissions().len(), 1);
        assert_eq!(host.submissions()[0].fields[0].1, "alice");
    }

    #[tokio::test]
    async fn test_submit_form_falls_back_to_form_id() {
        let mut host = RecordingHost::new();
        let outcome = host.submit_form(submission(None)).await.unwrap();
        assert_eq!(outcome.message.as_deref(), Some("Submitted user-form"));
    }

    #[test]
    fn test_run_action_records() {
        let mut host = RecordingHost::new();
        let message =
            tokio_test::block_on(host.run_action("demo", "remove-users")).unwrap();

        assert_eq!(message.as_deref(), Some("Ran remove-users"));
        assert_eq!(host.actions(), &[("demo".to_string(), "remove-users".to_string())]);
    }
}
