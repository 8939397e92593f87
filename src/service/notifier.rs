//! Telegram delivery for new postings.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::domain::models::JobPosting;
use crate::error::{AppError, Result};

pub const STARTUP_MESSAGE: &str = "✅ Bot started successfully";

/// Render a posting as a Telegram Markdown message.
pub fn format_job_message(job: &JobPosting) -> String {
    format!(
        "*{}*\nLocation: `{}`\nPay: `{}`\nPosted: `{}`\n[Apply here]({})",
        job.title,
        job.location.as_deref().unwrap_or_default(),
        job.pay.as_deref().unwrap_or_default(),
        job.date_posted.as_deref().unwrap_or_default(),
        job.link
    )
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a message to the configured chat.
    async fn send(&self, text: &str) -> Result<()>;

    /// Best-effort alert for one posting. Failures are logged and reported
    /// as `false`; they never propagate.
    async fn notify(&self, job: &JobPosting) -> bool {
        match self.send(&format_job_message(job)).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("[NOTIFY] Failed to deliver {} ({}): {}", job.title, job.link, e);
                false
            }
        }
    }
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

/// Bot API `sendMessage` client.
pub struct TelegramNotifier {
    client: Client,
    endpoint: Url,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(client: Client, api_base: &str, bot_token: &str, chat_id: impl Into<String>) -> Result<Self> {
        let endpoint = Url::parse(api_base)
            .and_then(|mut base| {
                // Keep any path prefix on the base (e.g. a proxy mount point)
                if !base.path().ends_with('/') {
                    let path = format!("{}/", base.path());
                    base.set_path(&path);
                }
                // `./` stops the token's colon from reading as a URL scheme
                base.join(&format!("./bot{}/sendMessage", bot_token))
            })
            .map_err(|e| AppError::InvalidUrl(format!("{}: {}", api_base, e)))?;
        Ok(Self {
            client,
            endpoint,
            chat_id: chat_id.into(),
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        let payload = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
            parse_mode: "Markdown",
        };

        let response = self
            .client
            .post(self.endpoint.as_str())
            .json(&payload)
            .send()
            .await
            // The endpoint URL carries the bot token
            .map_err(|e| AppError::from(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::service(
                "telegram",
                format!("HTTP {}: {}", status, body),
            ));
        }

        tracing::debug!("[NOTIFY] Message delivered");
        Ok(())
    }
}
