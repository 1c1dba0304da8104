// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Contact notification email through the Resend HTTP API.
//!
//! Delivery is best-effort: a failed send is reported to the caller as an
//! error and logged, but the submission it describes is already stored.

use std::time::Duration;

use async_trait::async_trait;
use maud::html;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::config::EmailConfig;
use crate::storage::ContactSubmission;

const RESEND_API_URL: &str = "https://api.resend.com/emails";
const MISSING_FIELD: &str = "Non fourni";

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("email notifications are not configured")]
    NotConfigured,

    #[error("email request failed: {0}")]
    Request(String),

    #[error("email provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Sends a notification about a stored contact submission.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_contact(&self, contact: &ContactSubmission) -> Result<(), NotifyError>;
}

/// Notifier used when no provider key is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn notify_contact(&self, contact: &ContactSubmission) -> Result<(), NotifyError> {
        info!(
            contact_id = %contact.id,
            "Email notifications disabled; contact stored without notification"
        );
        Err(NotifyError::NotConfigured)
    }
}

#[derive(Debug, Deserialize)]
struct ResendResponse {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ResendNotifier {
    api_key: String,
    contact_email: String,
    sender_email: String,
    http: Client,
}

impl ResendNotifier {
    pub fn new(
        api_key: impl Into<String>,
        contact_email: impl Into<String>,
        sender_email: impl Into<String>,
    ) -> Result<Self, NotifyError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| NotifyError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_key: api_key.into(),
            contact_email: contact_email.into(),
            sender_email: sender_email.into(),
            http,
        })
    }

    /// Build a notifier from configuration, `None` when no key is set.
    pub fn from_config(config: &EmailConfig) -> Result<Option<Self>, NotifyError> {
        match config.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
            Some(key) => Self::new(key, &config.contact_email, &config.sender_email).map(Some),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn notify_contact(&self, contact: &ContactSubmission) -> Result<(), NotifyError> {
        let payload = json!({
            "from": self.sender_email,
            "to": [self.contact_email],
            "subject": contact_subject(contact),
            "html": render_contact_email(contact),
            "reply_to": contact.email,
        });

        let response = self
            .http
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifyError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(status, contact_id = %contact.id, "Resend rejected contact notification");
            return Err(NotifyError::Rejected { status, body });
        }

        let sent: ResendResponse = response
            .json()
            .await
            .unwrap_or(ResendResponse { id: None });
        info!(
            contact_id = %contact.id,
            email_id = sent.id.as_deref().unwrap_or("unknown"),
            to = %self.contact_email,
            "Contact notification sent"
        );
        Ok(())
    }
}

pub fn contact_subject(contact: &ContactSubmission) -> String {
    format!("Nouveau contact - {}", contact.subject)
}

/// Render the notification body. Submitted values are escaped by `maud`.
pub fn render_contact_email(contact: &ContactSubmission) -> String {
    let optional = |value: &Option<String>| -> String {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(MISSING_FIELD)
            .to_string()
    };

    let markup = html! {
        html {
            body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;" {
                div style="max-width: 600px; margin: 0 auto; padding: 20px;" {
                    h1 style="color: #1e3a8a; font-size: 24px;" { "Nouveau Message de Contact" }
                    table style="width: 100%; border-collapse: collapse;" {
                        tr {
                            td style="font-weight: bold; width: 140px;" { "Nom:" }
                            td { (contact.name) }
                        }
                        tr {
                            td style="font-weight: bold;" { "Email:" }
                            td { a href={ "mailto:" (contact.email) } { (contact.email) } }
                        }
                        tr {
                            td style="font-weight: bold;" { "Téléphone:" }
                            td { (optional(&contact.phone)) }
                        }
                        tr {
                            td style="font-weight: bold;" { "Code postal:" }
                            td { (optional(&contact.postal_code)) }
                        }
                        tr {
                            td style="font-weight: bold;" { "Sujet:" }
                            td { (contact.subject) }
                        }
                    }
                    h3 style="color: #06b6d4;" { "Message:" }
                    p style="white-space: pre-wrap;" { (contact.message) }
                }
            }
        }
    };
    markup.into_string()
}
