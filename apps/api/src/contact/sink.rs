//! Contact delivery: where accepted contact messages go.
//!
//! Default: `LogSink` (structured log event, nothing stored or forwarded).
//! Optional: `WebhookSink`, enabled by `CONTACT_WEBHOOK_URL`.
//!
//! `AppState` holds an `Arc<dyn ContactSink>`, chosen at startup via config.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::config::Config;
use crate::models::contact::ContactSubmission;

/// Delivery backend for accepted contact messages. Returning `Ok` means the
/// backend took the message; it is not a guarantee the owner reads it.
#[async_trait]
pub trait ContactSink: Send + Sync {
    fn backend(&self) -> &'static str;

    async fn deliver(&self, submission: &ContactSubmission) -> Result<()>;
}

/// Logs each submission and drops it.
pub struct LogSink;

#[async_trait]
impl ContactSink for LogSink {
    fn backend(&self) -> &'static str {
        "log"
    }

    async fn deliver(&self, submission: &ContactSubmission) -> Result<()> {
        info!(
            id = %submission.id,
            name = %submission.name,
            email = %submission.email,
            subject = submission.subject.as_deref().unwrap_or(""),
            message_len = submission.message.len(),
            "Contact form submission"
        );
        Ok(())
    }
}

/// POSTs each submission as JSON to a fixed URL.
pub struct WebhookSink {
    client: Client,
    url: String,
}

impl WebhookSink {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build webhook HTTP client")?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl ContactSink for WebhookSink {
    fn backend(&self) -> &'static str {
        "webhook"
    }

    async fn deliver(&self, submission: &ContactSubmission) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(submission)
            .send()
            .await
            .with_context(|| format!("Webhook request to {} failed", self.url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Webhook returned {status}: {body}");
        }

        debug!(id = %submission.id, "Contact submission forwarded to webhook");
        Ok(())
    }
}

/// Picks the sink described by `config`.
pub fn sink_from_config(config: &Config) -> Result<Box<dyn ContactSink>> {
    match &config.contact_webhook_url {
        Some(url) => Ok(Box::new(WebhookSink::new(
            url.clone(),
            Duration::from_secs(config.contact_webhook_timeout_secs),
        )?)),
        None => Ok(Box::new(LogSink)),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{http::StatusCode, routing::post, Json, Router};
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            subject: None,
            message: "hi".to_string(),
        }
    }

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/hook")
    }

    #[test]
    fn test_sink_from_config_defaults_to_log() {
        let sink = sink_from_config(&Config::default()).unwrap();
        assert_eq!(sink.backend(), "log");
    }

    #[test]
    fn test_sink_from_config_uses_webhook_when_configured() {
        let config = Config {
            contact_webhook_url: Some("http://127.0.0.1:9/hook".to_string()),
            ..Config::default()
        };
        assert_eq!(sink_from_config(&config).unwrap().backend(), "webhook");
    }

    #[tokio::test]
    async fn test_log_sink_accepts() {
        LogSink.deliver(&submission()).await.unwrap();
    }

    #[tokio::test]
    async fn test_webhook_sink_posts_submission() {
        let received: Arc<Mutex<Vec<ContactSubmission>>> = Arc::default();
        let store = received.clone();
        let app = Router::new().route(
            "/hook",
            post(move |Json(body): Json<ContactSubmission>| async move {
                store.lock().unwrap().push(body);
                StatusCode::NO_CONTENT
            }),
        );
        let url = spawn(app).await;

        let sink = WebhookSink::new(url, Duration::from_secs(5)).unwrap();
        let sent = submission();
        sink.deliver(&sent).await.unwrap();

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].id, sent.id);
    }

    #[tokio::test]
    async fn test_webhook_sink_reports_non_success() {
        let app = Router::new().route("/hook", post(|| async { StatusCode::BAD_GATEWAY }));
        let url = spawn(app).await;

        let sink = WebhookSink::new(url, Duration::from_secs(5)).unwrap();
        let err = sink.deliver(&submission()).await.unwrap_err();
        assert!(err.to_string().contains("502"));
    }
}
