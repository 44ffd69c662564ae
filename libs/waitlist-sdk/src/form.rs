//! Signup form state.

use waitlist_types::NETWORK_ERROR;

use crate::client::{SubmitOutcome, Submitter};

/// Classification of the message currently shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageKind {
    #[default]
    Success,
    Error,
}

/// State behind a single-field signup form.
///
/// Holds only the field value, the in-flight flag, and the last message.
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    email: String,
    loading: bool,
    message: String,
    message_kind: MessageKind,
}

/// Clears the loading flag when dropped, so it is reset on every exit path
/// including a cancelled submission.
struct LoadingGuard<'a>(&'a mut bool);

impl<'a> LoadingGuard<'a> {
    fn enter(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn message_kind(&self) -> MessageKind {
        self.message_kind
    }

    /// Submit the current field value.
    ///
    /// Returns the success message or the error message that is now displayed.
    /// The field is cleared on success and kept on failure.
    pub async fn submit<S>(&mut self, submitter: &S) -> Result<String, String>
    where
        S: Submitter + ?Sized,
    {
        self.message.clear();

        let result = {
            let _loading = LoadingGuard::enter(&mut self.loading);
            submitter.submit(&self.email).await
        };

        let (kind, outcome) = match result {
            Ok(SubmitOutcome::Joined { message }) => {
                self.email.clear();
                (MessageKind::Success, Ok(message))
            }
            Ok(SubmitOutcome::Rejected { message, .. }) => (MessageKind::Error, Err(message)),
            Err(err) => {
                tracing::warn!(error = %err, "Waitlist submission failed in transport");
                (MessageKind::Error, Err(NETWORK_ERROR.to_string()))
            }
        };

        self.message_kind = kind;
        self.message = match &outcome {
            Ok(message) | Err(message) => message.clone(),
        };

        outcome
    }
}
