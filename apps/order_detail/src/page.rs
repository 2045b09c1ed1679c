//! Order-detail page contents the controller reads: order number, rating
//! modal flag, the overall rating form and the per-item review rows.

use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shared::{
    domain::{FoodItemId, OrderNumber, Rating},
    error::ValidationError,
    protocol::{FoodItemReview, OrderRatingSubmission, ReviewBatch},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderDetailPage {
    pub order_number: Option<String>,
    pub modal: Option<ModalElement>,
    pub rating_form: Option<RatingForm>,
    pub review_form: Option<ReviewForm>,
}

impl OrderDetailPage {
    pub fn order_number(&self) -> Option<OrderNumber> {
        self.order_number
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(OrderNumber::new)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalElement {
    pub rated: bool,
}

/// Checked `rating` radio value and `review` textarea.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingForm {
    pub rating: Option<String>,
    pub review: Option<String>,
}

impl RatingForm {
    pub fn collect(&self) -> Result<OrderRatingSubmission, ValidationError> {
        let raw = self.rating.as_deref().ok_or(ValidationError::MissingRating)?;
        let rating = raw.parse::<Rating>()?;
        Ok(OrderRatingSubmission::new(
            rating,
            self.review.as_deref().unwrap_or_default(),
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewForm {
    pub rows: Vec<ReviewRow>,
}

/// One `food-review-item` row with its `rating-{id}` radio group and
/// `comment-{id}` textarea.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewRow {
    pub food_item_id: String,
    pub rating: Option<String>,
    pub comment: Option<String>,
}

impl ReviewForm {
    /// Rows without a checked rating are skipped; row order is kept.
    pub fn collect(&self) -> Result<ReviewBatch, ValidationError> {
        let reviews = self
            .rows
            .iter()
            .filter_map(|row| row.rating.as_deref().map(|raw| (row, raw)))
            .map(|(row, raw)| -> Result<FoodItemReview, ValidationError> {
                Ok(FoodItemReview::new(
                    FoodItemId::new(row.food_item_id.as_str()),
                    raw.parse()?,
                    row.comment.as_deref().unwrap_or_default(),
                ))
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;
        ReviewBatch::try_new(reviews)
    }
}

pub fn parse_page(raw: &str) -> anyhow::Result<OrderDetailPage> {
    toml::from_str(raw).context("malformed order detail page")
}

pub fn load_page(path: &Path) -> anyhow::Result<OrderDetailPage> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read page file {}", path.display()))?;
    parse_page(&raw).with_context(|| format!("failed to parse page file {}", path.display()))
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
