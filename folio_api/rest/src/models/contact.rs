use folio_core_contact_contracts::ContactSubmitRequest;
use folio_models::contact::{
    ContactMessageContent, ContactMessageContentError, ContactName, ContactNameError,
};
use serde::Deserialize;

/// The raw contact form payload. Fields arrive as plain strings and are
/// re-validated here regardless of what the client already checked.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiContactRequestError {
    MissingField,
    FieldTooLong,
    InvalidEmail,
}

impl TryFrom<ApiContactRequest> for ContactSubmitRequest {
    type Error = ApiContactRequestError;

    fn try_from(value: ApiContactRequest) -> Result<Self, Self::Error> {
        let name = ContactName::try_new(value.name).map_err(|err| match err {
            ContactNameError::LenCharMinViolated => ApiContactRequestError::MissingField,
            ContactNameError::LenCharMaxViolated => ApiContactRequestError::FieldTooLong,
        })?;
        let message = ContactMessageContent::try_new(value.message).map_err(|err| match err {
            ContactMessageContentError::LenCharMinViolated => ApiContactRequestError::MissingField,
            ContactMessageContentError::LenCharMaxViolated => ApiContactRequestError::FieldTooLong,
        })?;
        if value.email.is_empty() {
            return Err(ApiContactRequestError::MissingField);
        }
        let email = value
            .email
            .parse()
            .map_err(|_| ApiContactRequestError::InvalidEmail)?;

        Ok(Self {
            name,
            email,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn request() -> ApiContactRequest {
        ApiContactRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn valid() {
        let result = ContactSubmitRequest::try_from(request()).unwrap();
        assert_eq!(&*result.name, "Ada");
        assert_eq!(result.email.as_str(), "ada@example.com");
        assert_eq!(&*result.message, "Hello");
    }

    #[test]
    fn empty_name() {
        let result = ContactSubmitRequest::try_from(ApiContactRequest {
            name: "".into(),
            ..request()
        });
        assert_eq!(result.unwrap_err(), ApiContactRequestError::MissingField);
    }

    #[test]
    fn empty_email() {
        let result = ContactSubmitRequest::try_from(ApiContactRequest {
            email: "".into(),
            ..request()
        });
        assert_eq!(result.unwrap_err(), ApiContactRequestError::MissingField);
    }

    #[test]
    fn empty_message() {
        let result = ContactSubmitRequest::try_from(ApiContactRequest {
            message: "".into(),
            ..request()
        });
        assert_eq!(result.unwrap_err(), ApiContactRequestError::MissingField);
    }

    #[test]
    fn malformed_email() {
        let result = ContactSubmitRequest::try_from(ApiContactRequest {
            email: "not an address".into(),
            ..request()
        });
        assert_eq!(result.unwrap_err(), ApiContactRequestError::InvalidEmail);
    }

    #[test]
    fn oversize_message() {
        let result = ContactSubmitRequest::try_from(ApiContactRequest {
            message: "x".repeat(5000),
            ..request()
        });
        assert_eq!(result.unwrap_err(), ApiContactRequestError::FieldTooLong);
    }
}
