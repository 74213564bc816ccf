use serde::Serialize;

pub mod contact;

/// Error payload: `{"error": "..."}`, matching what the form client expects.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
}
