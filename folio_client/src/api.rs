use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// The mutable in-progress form values, before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Mirrors the required-field check a form control performs before the
    /// submit handler even runs.
    pub fn has_empty_field(&self) -> bool {
        self.name.is_empty() || self.email.is_empty() || self.message.is_empty()
    }
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ContactApi: Send + Sync + 'static {
    /// Submit the draft. Exactly one request per call.
    fn submit(
        &self,
        draft: &ContactDraft,
    ) -> impl Future<Output = Result<(), ContactApiError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactApiError {
    /// The server answered with an error payload.
    #[error("{0}")]
    Rejected(String),
    /// The request never produced a response.
    #[error("Failed to send message.")]
    Network(#[source] anyhow::Error),
}

#[cfg(any(test, feature = "mock"))]
impl MockContactApi {
    pub fn with_submit(mut self, draft: ContactDraft, result: Result<(), ContactApiError>) -> Self {
        self.expect_submit()
            .once()
            .withf(move |d| *d == draft)
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}

/// `ContactApi` implementation against the portfolio REST backend.
#[derive(Debug, Clone)]
pub struct RestContactApi {
    client: reqwest::Client,
    base_url: Url,
}

impl RestContactApi {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: String,
}

impl ContactApi for RestContactApi {
    async fn submit(&self, draft: &ContactDraft) -> Result<(), ContactApiError> {
        let url = self
            .base_url
            .join("api/contact")
            .map_err(|err| ContactApiError::Network(err.into()))?;

        let response = self
            .client
            .post(url)
            .json(draft)
            .send()
            .await
            .map_err(|err| ContactApiError::Network(err.into()))?;

        if response.status().is_success() {
            return Ok(());
        }

        let detail = response
            .json::<ApiError>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| "Failed to send message".into());
        Err(ContactApiError::Rejected(detail))
    }
}
