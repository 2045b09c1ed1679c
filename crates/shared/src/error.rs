use thiserror::Error;

/// Client-side checks that fail before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a rating")]
    MissingRating,
    #[error("Please provide at least one rating")]
    EmptyReviewBatch,
    #[error("Invalid rating")]
    InvalidRating(String),
}
