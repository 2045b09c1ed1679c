//! Outcome of a submission flow and the user-facing alert texts.

pub const MSG_RATING_SUBMITTED: &str = "Order rating submitted successfully";
pub const MSG_RATING_FAILED: &str = "Failed to submit order rating";
pub const MSG_RATING_ERROR: &str = "Error submitting order rating";
pub const MSG_REVIEWS_SUBMITTED: &str = "Reviews submitted successfully!";
pub const MSG_REVIEWS_FAILED: &str = "Failed to submit reviews";
pub const MSG_REVIEWS_ERROR: &str = "Error submitting reviews";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Nothing selected or unparseable input; no request was sent.
    Validation,
    /// The backend answered but did not accept the submission.
    Server,
    /// The request failed or the reply could not be decoded.
    Transport,
    /// The form control was already disabled.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub ok: bool,
    pub message: String,
    pub failure: Option<FailureKind>,
}

impl SubmitResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
            failure: None,
        }
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            failure: Some(kind),
        }
    }

    pub fn ignored() -> Self {
        Self::failure(FailureKind::Ignored, String::new())
    }

    pub fn is_ignored(&self) -> bool {
        self.failure == Some(FailureKind::Ignored)
    }
}
