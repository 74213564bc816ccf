use std::future::Future;

use folio_models::contact::ContactSubmission;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Persist a new contact submission.
    ///
    /// Submissions are insert-only; there is no update or delete operation.
    fn create(
        &self,
        txn: &mut Txn,
        submission: &ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockContactRepository<Txn> {
    pub fn with_create(mut self, submission: ContactSubmission, result: anyhow::Result<()>) -> Self {
        self.expect_create()
            .once()
            .withf(move |_, s| *s == submission)
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}
