//! Contact form submission state.
//!
//! `UseContactForm` is triggered by the user rather than by mounting. A
//! submission runs `begin_submit`, the request, then `finish_submit`;
//! `submitting` is true exactly in between.

use crate::error::{resolve_message, ApiError};
use crate::http::ApiResponse;
use crate::types::ContactMessage;

/// Message used when a failed submission carries no usable text.
pub const SUBMIT_ERROR_FALLBACK: &str = "Failed to submit form";

type Submit = Box<dyn Fn(&ContactMessage) -> Result<ApiResponse<ContactMessage>, ApiError> + Send + Sync>;

pub struct UseContactForm {
    submit: Submit,
    submitting: bool,
    submitted: bool,
    error: Option<String>,
}

impl UseContactForm {
    pub fn new(
        submit: impl Fn(&ContactMessage) -> Result<ApiResponse<ContactMessage>, ApiError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            submit: Box::new(submit),
            submitting: false,
            submitted: false,
            error: None,
        }
    }

    /// Send `message` once. Returns `true` on success so the caller can
    /// clear its fields.
    pub fn submit_form(&mut self, message: &ContactMessage) -> bool {
        self.begin_submit();
        let result = (self.submit)(message);
        self.finish_submit(result)
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    pub fn finish_submit(&mut self, result: Result<ApiResponse<ContactMessage>, ApiError>) -> bool {
        let ok = match result {
            Ok(_) => {
                self.submitted = true;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact form submission failed");
                self.error = Some(resolve_message(&err, SUBMIT_ERROR_FALLBACK));
                false
            }
        };
        self.submitting = false;
        ok
    }

    /// Clear the outcome of the previous submission.
    pub fn reset_form(&mut self) {
        self.submitted = false;
        self.error = None;
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Field buffer behind the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Payload for submission; a blank subject is sent as absent.
    pub fn to_message(&self) -> ContactMessage {
        let subject = self.subject.trim();
        ContactMessage {
            id: None,
            name: self.name.clone(),
            email: self.email.clone(),
            subject: (!subject.is_empty()).then(|| subject.to_string()),
            message: self.message.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::use_contact_form;
    use crate::testing::{api, StubTransport};

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: " ".to_string(),
            message: "Hello".to_string(),
        }
    }

    fn echo() -> Result<ApiResponse<ContactMessage>, ApiError> {
        let mut saved = form().to_message();
        saved.id = Some("m1".to_string());
        Ok(ApiResponse { status: 200, data: saved })
    }

    #[test]
    fn submitting_only_while_in_flight() {
        let mut hook = UseContactForm::new(|_| echo());
        assert!(!hook.submitting());
        hook.begin_submit();
        assert!(hook.submitting());
        assert!(hook.finish_submit(echo()));
        assert!(!hook.submitting());
        assert!(hook.submitted());
    }

    #[test]
    fn failure_clears_submitting_and_sets_error() {
        let mut hook = UseContactForm::new(|_| Err(ApiError::from_status(400, r#"{"detail":"Failed to submit contact message"}"#)));
        assert!(!hook.submit_form(&form().to_message()));
        assert!(!hook.submitting());
        assert!(!hook.submitted());
        assert_eq!(hook.error(), Some("Failed to submit contact message"));
    }

    #[test]
    fn failure_without_message_uses_form_fallback() {
        let mut hook = UseContactForm::new(|_| Err(ApiError::Client(String::new())));
        hook.submit_form(&form().to_message());
        assert_eq!(hook.error(), Some("Failed to submit form"));
    }

    #[test]
    fn reset_permits_another_submission() {
        let transport = StubTransport::json(
            200,
            r#"{"id":"m1","name":"Ada","email":"ada@example.com","message":"Hello"}"#,
        );
        let mut hook = use_contact_form(&api(transport.clone()));
        let mut fields = form();

        assert!(hook.submit_form(&fields.to_message()));
        fields.clear();
        assert!(fields.is_empty());
        assert!(hook.submitted());

        hook.reset_form();
        assert!(!hook.submitted());
        assert!(hook.error().is_none());

        assert!(hook.submit_form(&form().to_message()));
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn blank_subject_is_omitted() {
        let msg = form().to_message();
        assert!(msg.subject.is_none());
        let body = serde_json::to_value(&msg).unwrap();
        assert!(body.get("subject").is_none());
    }
}
