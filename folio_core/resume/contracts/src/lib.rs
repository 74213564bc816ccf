use std::future::Future;

use nutype::nutype;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ResumeService: Send + Sync + 'static {
    /// Store the uploaded resume PDF under the configured fixed filename,
    /// replacing any previous upload. Returns the public URL path of the
    /// stored file.
    fn upload(
        &self,
        api_key: &str,
        content: Vec<u8>,
    ) -> impl Future<Output = Result<ResumeUrl, ResumeUploadError>> + Send;
}

/// Public URL path the stored resume is served from.
#[nutype(derive(Debug, Clone, PartialEq, Eq, Display, From, Deref, Serialize))]
pub struct ResumeUrl(String);

#[derive(Debug, Error)]
pub enum ResumeUploadError {
    #[error("Invalid API key.")]
    Unauthorized,
    #[error("File size exceeds the configured limit.")]
    TooLarge,
    #[error("Only PDF files are allowed.")]
    InvalidType,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockResumeService {
    pub fn with_upload(
        mut self,
        api_key: String,
        content: Vec<u8>,
        result: Result<ResumeUrl, ResumeUploadError>,
    ) -> Self {
        self.expect_upload()
            .once()
            .withf(move |key, c| key == api_key && *c == content)
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}
