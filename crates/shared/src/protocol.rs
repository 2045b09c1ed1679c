use serde::{Deserialize, Serialize};

use crate::{
    domain::{FoodItemId, Rating},
    error::ValidationError,
};

/// Overall order rating, sent as multipart form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRatingSubmission {
    pub rating: Rating,
    pub review: String,
}

impl OrderRatingSubmission {
    pub fn new(rating: Rating, review: &str) -> Self {
        Self {
            rating,
            review: review.trim().to_string(),
        }
    }

    /// Field name/value pairs in the order the backend reads them.
    pub fn form_fields(&self) -> [(&'static str, String); 2] {
        [
            ("rating", self.rating.to_string()),
            ("review", self.review.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItemReview {
    pub food_item_id: FoodItemId,
    pub rating: Rating,
    pub comment: String,
}

impl FoodItemReview {
    pub fn new(food_item_id: FoodItemId, rating: Rating, comment: &str) -> Self {
        Self {
            food_item_id,
            rating,
            comment: comment.trim().to_string(),
        }
    }
}

/// Non-empty, ordered per-item reviews. Serializes as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReviewBatch(Vec<FoodItemReview>);

impl ReviewBatch {
    pub fn try_new(reviews: Vec<FoodItemReview>) -> Result<Self, ValidationError> {
        if reviews.is_empty() {
            return Err(ValidationError::EmptyReviewBatch);
        }
        Ok(Self(reviews))
    }

    pub fn reviews(&self) -> &[FoodItemReview] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Body returned by both the rating and the review endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmissionResponse {
    /// Server message, ignoring empty strings.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|message| !message.is_empty())
    }
}
