//! Contact Submission Client: the form side of the contact flow.
//!
//! Holds the four form fields, presence-checks them, and sends one request per
//! submit through a `ContactTransport`. A submit that arrives while another is
//! in flight is refused without touching the transport.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::contact::validation::{missing_required_fields, ContactField};
use crate::models::contact::{ContactRequest, MessageResponse};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn missing_fields(&self) -> Vec<ContactField> {
        missing_required_fields(
            Some(self.name.as_str()),
            Some(self.email.as_str()),
            Some(self.message.as_str()),
        )
    }

    /// Wire form of the fields; an empty subject is sent as absent.
    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            subject: (!self.subject.is_empty()).then(|| self.subject.clone()),
            message: Some(self.message.clone()),
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Contact endpoint rejected the message (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Carries one contact request to the backend.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn send(&self, request: &ContactRequest) -> Result<(), TransportError>;
}

/// Posts to `{base_url}/api/contact`.
#[derive(Clone)]
pub struct HttpContactTransport {
    client: Client,
    endpoint: String,
}

impl HttpContactTransport {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn send(&self, request: &ContactRequest) -> Result<(), TransportError> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<MessageResponse>(&body)
            .map(|r| r.message)
            .unwrap_or(body);
        Err(TransportError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// Transient notification shown after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: ToastVariant,
}

const MISSING_INFORMATION: Toast = Toast {
    title: "Missing Information",
    description: "Please fill in all required fields.",
    variant: ToastVariant::Destructive,
};

const MESSAGE_SENT: Toast = Toast {
    title: "Message Sent!",
    description: "Thank you for your message! I'll get back to you soon.",
    variant: ToastVariant::Default,
};

const SEND_FAILED: Toast = Toast {
    title: "Error",
    description: "Failed to send message. Please try again later.",
    variant: ToastVariant::Destructive,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Required fields missing; nothing was sent.
    Invalid {
        missing: Vec<ContactField>,
        toast: Toast,
    },
    /// Another submit is in flight; nothing was sent.
    Busy,
    /// Delivered; the form has been cleared.
    Sent(Toast),
    /// Delivery failed; the form is unchanged.
    Failed(Toast),
}

impl SubmitOutcome {
    pub fn toast(&self) -> Option<&Toast> {
        match self {
            SubmitOutcome::Invalid { toast, .. }
            | SubmitOutcome::Sent(toast)
            | SubmitOutcome::Failed(toast) => Some(toast),
            SubmitOutcome::Busy => None,
        }
    }
}

/// Clears the in-flight flag however the submit ends.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct ContactClient<T> {
    transport: T,
    form: Mutex<ContactForm>,
    in_flight: AtomicBool,
}

impl<T: ContactTransport> ContactClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            form: Mutex::new(ContactForm::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub async fn update(&self, field: ContactField, value: impl Into<String>) {
        self.form.lock().await.set(field, value);
    }

    pub async fn form(&self) -> ContactForm {
        self.form.lock().await.clone()
    }

    /// True while a submit is waiting on the transport; the submit control
    /// should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validates, then issues exactly one request. No retry.
    pub async fn submit(&self) -> SubmitOutcome {
        let request = {
            let form = self.form.lock().await;
            let missing = form.missing_fields();
            if !missing.is_empty() {
                debug!("Contact submit blocked, missing: {missing:?}");
                return SubmitOutcome::Invalid {
                    missing,
                    toast: MISSING_INFORMATION,
                };
            }
            form.to_request()
        };

        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            return SubmitOutcome::Busy;
        };

        match self.transport.send(&request).await {
            Ok(()) => {
                *self.form.lock().await = ContactForm::default();
                SubmitOutcome::Sent(MESSAGE_SENT)
            }
            Err(e) => {
                warn!("Contact submit failed: {e}");
                SubmitOutcome::Failed(SEND_FAILED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    use tokio::sync::Notify;

    use super::*;

    #[derive(Default)]
    struct RecordingTransport {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl ContactTransport for RecordingTransport {
        async fn send(&self, _request: &ContactRequest) -> Result<(), TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(TransportError::Rejected {
                    status: 500,
                    message: "Failed to send message".to_string(),
                });
            }
            Ok(())
        }
    }

    /// Holds every send until released.
    #[derive(Default)]
    struct GatedTransport {
        calls: AtomicUsize,
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl ContactTransport for GatedTransport {
        async fn send(&self, _request: &ContactRequest) -> Result<(), TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.entered.notify_one();
            self.release.notified().await;
            Ok(())
        }
    }

    async fn fill(client: &ContactClient<impl ContactTransport>) {
        client.update(ContactField::Name, "A").await;
        client.update(ContactField::Email, "a@x.com").await;
        client.update(ContactField::Subject, "Hello").await;
        client.update(ContactField::Message, "hi").await;
    }

    #[tokio::test]
    async fn test_missing_required_field_never_calls_transport() {
        for blank in [ContactField::Name, ContactField::Email, ContactField::Message] {
            let client = ContactClient::new(RecordingTransport::default());
            fill(&client).await;
            client.update(blank, "").await;

            let outcome = client.submit().await;
            assert_eq!(
                outcome,
                SubmitOutcome::Invalid {
                    missing: vec![blank],
                    toast: MISSING_INFORMATION,
                }
            );
            assert_eq!(client.transport.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_whitespace_only_name_is_sent() {
        let client = ContactClient::new(RecordingTransport::default());
        fill(&client).await;
        client.update(ContactField::Name, "   ").await;

        assert!(matches!(client.submit().await, SubmitOutcome::Sent(_)));
        assert_eq!(client.transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_subject_is_allowed() {
        let client = ContactClient::new(RecordingTransport::default());
        fill(&client).await;
        client.update(ContactField::Subject, "").await;
        assert!(matches!(client.submit().await, SubmitOutcome::Sent(_)));
    }

    #[tokio::test]
    async fn test_success_sends_once_and_clears_form() {
        let client = ContactClient::new(RecordingTransport::default());
        fill(&client).await;

        let outcome = client.submit().await;
        assert_eq!(outcome.toast().unwrap().title, "Message Sent!");
        assert_eq!(client.transport.calls.load(Ordering::SeqCst), 1);

        let form = client.form().await;
        assert_eq!(form, ContactForm::default());
        assert!(!client.is_submitting());
    }

    #[tokio::test]
    async fn test_failure_sends_once_and_keeps_form() {
        let client = ContactClient::new(RecordingTransport {
            fail: true,
            ..Default::default()
        });
        fill(&client).await;
        let before = client.form().await;

        let outcome = client.submit().await;
        assert_eq!(outcome, SubmitOutcome::Failed(SEND_FAILED));
        assert_eq!(client.transport.calls.load(Ordering::SeqCst), 1);
        assert_eq!(client.form().await, before);
        assert!(!client.is_submitting());
    }

    #[tokio::test]
    async fn test_submit_while_in_flight_is_refused() {
        let client = Arc::new(ContactClient::new(GatedTransport::default()));
        fill(client.as_ref()).await;

        let first = tokio::spawn({
            let client = client.clone();
            async move { client.submit().await }
        });
        client.transport.entered.notified().await;
        assert!(client.is_submitting());

        assert_eq!(client.submit().await, SubmitOutcome::Busy);
        assert_eq!(client.transport.calls.load(Ordering::SeqCst), 1);

        client.transport.release.notify_one();
        assert!(matches!(first.await.unwrap(), SubmitOutcome::Sent(_)));
        assert!(!client.is_submitting());
    }

    #[test]
    fn test_to_request_omits_empty_subject() {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "A");
        let request = form.to_request();
        assert_eq!(request.name.as_deref(), Some("A"));
        assert!(request.subject.is_none());
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let transport = HttpContactTransport::new("http://localhost:8080/").unwrap();
        assert_eq!(transport.endpoint, "http://localhost:8080/api/contact");
    }
}
