//! Headless contact form client.
//!
//! Holds the draft the user is editing and drives the submission state
//! machine: `Idle -> Submitting -> Submitted` on success, or
//! `Idle -> Submitting -> Failed` on error, from where the user may retry.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use crate::api::{ContactApi, ContactDraft};

pub mod api;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed,
}

#[derive(Debug, Default)]
struct FormState {
    draft: ContactDraft,
    status: FormStatus,
    error: Option<String>,
}

#[derive(Debug)]
pub struct ContactForm<Api> {
    api: Api,
    state: Mutex<FormState>,
    // At most one submission may be in flight per form instance. The flag is
    // checked-and-set before the request starts, so a second submit during
    // the round trip is a no-op even if the UI failed to disable the button.
    in_flight: AtomicBool,
}

impl<Api: ContactApi> ContactForm<Api> {
    pub fn new(api: Api) -> Self {
        Self {
            api,
            state: Mutex::new(FormState::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn status(&self) -> FormStatus {
        self.lock().status
    }

    pub fn draft(&self) -> ContactDraft {
        self.lock().draft.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    pub fn set_name(&self, value: impl Into<String>) {
        self.lock().draft.name = value.into();
    }

    pub fn set_email(&self, value: impl Into<String>) {
        self.lock().draft.email = value.into();
    }

    pub fn set_message(&self, value: impl Into<String>) {
        self.lock().draft.message = value.into();
    }

    /// Submit the current draft.
    ///
    /// Performs at most one request. Returns without a request if a
    /// submission is already in flight or a required field is empty. On
    /// success the draft is cleared; on failure it is retained so the user
    /// can retry immediately.
    pub async fn submit(&self) -> FormStatus {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return FormStatus::Submitting;
        }

        let draft = {
            let mut state = self.lock();
            if state.draft.has_empty_field() {
                self.in_flight.store(false, Ordering::SeqCst);
                return state.status;
            }
            state.status = FormStatus::Submitting;
            state.error = None;
            state.draft.clone()
        };

        let result = self.api.submit(&draft).await;

        let mut state = self.lock();
        let status = match result {
            Ok(()) => {
                state.draft = ContactDraft::default();
                FormStatus::Submitted
            }
            Err(err) => {
                state.error = Some(err.to_string());
                FormStatus::Failed
            }
        };
        state.status = status;
        self.in_flight.store(false, Ordering::SeqCst);
        status
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
