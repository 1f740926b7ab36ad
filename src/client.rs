//! Client for the `/calculate` endpoint
//!
//! [`EstimateClient`] posts the bed count form. [`EstimateForm`] adds what
//! the estimate form does around it: validate before sending, allow one
//! submission at a time, and turn every outcome into a [`DisplayModel`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::{
    config::ClientConfig,
    models::EstimateResponse,
    renderer::{DisplayModel, Renderer},
    validation::{validate_bed_count, ValidationError},
};

/// Shown for any transport or decoding failure
pub const TRANSPORT_ERROR_MESSAGE: &str =
    "An error occurred while communicating with the server. Please try again.";
/// Shown when a second submission arrives while one is outstanding
pub const BUSY_MESSAGE: &str = "A calculation is already in progress";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("server returned HTTP {status}")]
    Status { status: reqwest::StatusCode },
}

impl ClientError {
    /// Message shown to the user in place of the results
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Transport { .. } | Self::Status { .. } => TRANSPORT_ERROR_MESSAGE.to_string(),
        }
    }
}

/// HTTP client for the calculate service
#[derive(Debug, Clone)]
pub struct EstimateClient {
    http: reqwest::Client,
    endpoint: String,
}

impl EstimateClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|source| ClientError::Transport {
                url: config.base_url.clone(),
                source,
            })?;

        Ok(Self::with_http_client(http, &config.base_url))
    }

    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}/calculate", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the bed count form and decode the estimate
    ///
    /// A structured `{"error": ...}` body is a successful call; it comes back
    /// as a response with `error` set.
    pub async fn calculate(&self, bed_count: u32) -> Result<EstimateResponse, ClientError> {
        debug!(endpoint = %self.endpoint, bed_count, "Submitting bed count");

        let transport = |source| ClientError::Transport {
            url: self.endpoint.clone(),
            source,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .form(&[("bed_count", bed_count.to_string())])
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status });
        }

        response.json::<EstimateResponse>().await.map_err(transport)
    }
}

/// Estimate form: validation, single in-flight submission, rendering
pub struct EstimateForm {
    client: EstimateClient,
    renderer: Renderer,
    submitting: AtomicBool,
}

/// Clears the submitting flag when dropped, whatever the outcome
struct SubmitGuard<'a>(&'a AtomicBool);

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl EstimateForm {
    pub fn new(client: EstimateClient, renderer: Renderer) -> Self {
        Self {
            client,
            renderer,
            submitting: AtomicBool::new(false),
        }
    }

    /// True while a submission is outstanding
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Submit raw form input and produce what should be displayed
    ///
    /// Invalid input is reported without contacting the server.
    pub async fn submit(&self, raw_bed_count: &str) -> DisplayModel {
        let bed_count = match validate_bed_count(raw_bed_count) {
            Ok(count) => count,
            Err(e) => return DisplayModel::error(e.to_string()),
        };

        if self
            .submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Submission ignored, another calculation is in progress");
            return DisplayModel::error(BUSY_MESSAGE);
        }
        let _guard = SubmitGuard(&self.submitting);

        match self.client.calculate(bed_count).await {
            Ok(response) => {
                if let Some(message) = &response.error {
                    info!("Server rejected bed count {}: {}", bed_count, message);
                }
                self.renderer.render(&response)
            }
            Err(e) => {
                warn!("Calculation request failed: {}", e);
                DisplayModel::error(e.user_message())
            }
        }
    }
}
