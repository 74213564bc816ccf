use folio_models::contact::ContactSubmission;
use folio_persistence_contracts::contact::ContactRepository;

use crate::PostgresTransaction;

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresContactRepository;

const CONTACT_COLS: &str = "id, name, email, message, created_at";

impl ContactRepository<PostgresTransaction> for PostgresContactRepository {
    async fn create(
        &self,
        txn: &mut PostgresTransaction,
        submission: &ContactSubmission,
    ) -> anyhow::Result<()> {
        txn.txn()
            .execute(
                &format!("insert into contacts ({CONTACT_COLS}) values ($1, $2, $3, $4, $5)"),
                &[
                    &*submission.id,
                    &*submission.name,
                    &submission.email.as_str(),
                    &*submission.message,
                    &submission.created_at,
                ],
            )
            .await
            .map(|_| ())
            .map_err(Into::into)
    }
}
