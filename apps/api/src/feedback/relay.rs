//! Feedback delivery sinks.
//!
//! `FormRelaySink` forwards submissions to a formsubmit.co-style endpoint as
//! HTML form fields. `LogSink` stands in when no relay URL is configured, so
//! local development never posts to a third party. `AppState` holds the
//! chosen sink as `Arc<dyn FeedbackSink>`, picked at startup.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::feedback::models::Feedback;

const MAX_RETRIES: u32 = 3;

#[async_trait]
pub trait FeedbackSink: Send + Sync {
    async fn deliver(&self, feedback: &Feedback) -> Result<(), AppError>;
}

/// Relays submissions to the configured endpoint with reqwest.
/// Retries on 429 and 5xx with exponential backoff.
pub struct FormRelaySink {
    client: Client,
    endpoint: String,
}

impl FormRelaySink {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
        }
    }
}

/// The relay endpoint expects plain HTML form fields; `_captcha=false`
/// disables the relay's interstitial captcha page.
fn form_fields(feedback: &Feedback) -> Vec<(&'static str, &str)> {
    vec![
        ("name", feedback.name.as_str()),
        ("email", feedback.email.as_str()),
        ("message", feedback.message.as_str()),
        ("_captcha", "false"),
    ]
}

#[async_trait]
impl FeedbackSink for FormRelaySink {
    async fn deliver(&self, feedback: &Feedback) -> Result<(), AppError> {
        let mut last_error: Option<String> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Feedback relay attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.endpoint)
                .form(&form_fields(feedback))
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(e.to_string());
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Feedback relay returned {}: {}", status, body);
                last_error = Some(format!("status {status}: {body}"));
                continue;
            }

            if !status.is_success() {
                return Err(AppError::Relay(format!(
                    "Relay rejected submission (status {})",
                    status.as_u16()
                )));
            }

            info!("Feedback relayed to {}", self.endpoint);
            return Ok(());
        }

        Err(AppError::Relay(format!(
            "Relay unreachable after {MAX_RETRIES} attempts: {}",
            last_error.unwrap_or_default()
        )))
    }
}

/// Logs submissions instead of forwarding them.
pub struct LogSink;

#[async_trait]
impl FeedbackSink for LogSink {
    async fn deliver(&self, feedback: &Feedback) -> Result<(), AppError> {
        info!(
            name = %feedback.name,
            email = %feedback.email,
            "Feedback received (relay disabled)"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_feedback() -> Feedback {
        Feedback {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Great dashboard".to_string(),
        }
    }

    #[test]
    fn test_form_fields_carry_captcha_opt_out() {
        let feedback = make_feedback();
        let fields = form_fields(&feedback);
        assert!(fields.contains(&("_captcha", "false")));
        assert!(fields.contains(&("name", "Ada")));
        assert!(fields.contains(&("email", "ada@example.com")));
        assert!(fields.contains(&("message", "Great dashboard")));
    }

    #[tokio::test]
    async fn test_log_sink_always_accepts() {
        assert!(LogSink.deliver(&make_feedback()).await.is_ok());
    }

    #[tokio::test]
    async fn test_relay_sink_fails_fast_on_unroutable_endpoint() {
        // .invalid never resolves, so every attempt errors at the client.
        let sink = FormRelaySink::new("http://relay.invalid/submit".to_string());
        let result = sink.deliver(&make_feedback()).await;
        assert!(matches!(result, Err(AppError::Relay(_))));
    }
}
