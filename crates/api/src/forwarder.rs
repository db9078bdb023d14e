//! Client side of the third-party form service that receives leads.

use std::time::Duration;

use thiserror::Error;

use biosite_web::LeadSubmission;

const FORWARD_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("biosite-api/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("form service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("form service rejected the lead with status {0}")]
    Rejected(reqwest::StatusCode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Forwarded,
    /// No endpoint configured (dev); the lead was only logged.
    LoggedOnly,
}

#[derive(Debug, Clone)]
pub struct LeadForwarder {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl LeadForwarder {
    pub fn new(endpoint: Option<String>) -> Result<Self, ForwardError> {
        let client = reqwest::Client::builder()
            .timeout(FORWARD_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// POST the lead as JSON. Not retried: the visitor sees the failure and can resubmit.
    pub async fn forward(&self, lead: &LeadSubmission) -> Result<Delivery, ForwardError> {
        let Some(endpoint) = &self.endpoint else {
            tracing::info!(lead_id = %lead.id, "lead received (no form service configured)");
            return Ok(Delivery::LoggedOnly);
        };

        let res = self.client.post(endpoint).json(lead).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(ForwardError::Rejected(status));
        }

        tracing::info!(lead_id = %lead.id, "lead forwarded");
        Ok(Delivery::Forwarded)
    }
}
