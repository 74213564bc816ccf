use chrono::{DateTime, Utc};
use nutype::nutype;
use uuid::Uuid;

use crate::email_address::EmailAddress;

/// A contact form submission after it has been accepted by the server.
///
/// Submissions are insert-only: once persisted they are never updated or
/// deleted. `id` and `created_at` are assigned by the server, not the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: ContactSubmissionId,
    pub name: ContactName,
    pub email: EmailAddress,
    pub message: ContactMessageContent,
    pub created_at: DateTime<Utc>,
}

#[nutype(derive(
    Debug, Clone, Copy, PartialEq, Eq, From, Deref, Serialize, Deserialize
))]
pub struct ContactSubmissionId(Uuid);

#[nutype(
    validate(len_char_min = 1, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactName(String);

#[nutype(
    validate(len_char_min = 1, len_char_max = 4096),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rejects_empty() {
        assert!(ContactName::try_new("").is_err());
        assert!(ContactName::try_new("Ada").is_ok());
    }

    #[test]
    fn message_rejects_empty() {
        assert!(ContactMessageContent::try_new("").is_err());
        assert!(ContactMessageContent::try_new("Hello").is_ok());
    }

    #[test]
    fn message_rejects_oversize() {
        assert!(ContactMessageContent::try_new("x".repeat(4097)).is_err());
    }
}
