use std::future::Future;

use folio_models::{
    contact::{ContactMessageContent, ContactName},
    email_address::EmailAddress,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Handle one contact form submission: persist it, then send the
    /// notification email.
    ///
    /// The submission is persisted before the notification is dispatched. A
    /// dispatch failure does not roll the persisted row back.
    fn submit(
        &self,
        request: ContactSubmitRequest,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

/// The validated snapshot of the contact form at the moment of submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmitRequest {
    pub name: ContactName,
    pub email: EmailAddress,
    pub message: ContactMessageContent,
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_submit(
        mut self,
        request: ContactSubmitRequest,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Failed to persist the submission.")]
    Persist(#[source] anyhow::Error),
    #[error("Failed to send the notification email.")]
    Dispatch,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
