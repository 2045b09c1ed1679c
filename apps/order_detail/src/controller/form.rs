//! Rating modal and the two submission flows of the order-detail page.

use std::sync::Arc;

use client_core::OrderSubmissionApi;
use shared::{domain::OrderNumber, error::ValidationError};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::{
    controller::{
        events::{
            FailureKind, SubmitResult, MSG_RATING_ERROR, MSG_RATING_FAILED, MSG_RATING_SUBMITTED,
            MSG_REVIEWS_ERROR, MSG_REVIEWS_FAILED, MSG_REVIEWS_SUBMITTED,
        },
        state::{ControllerState, FormPhase, ModalState},
    },
    page::{OrderDetailPage, RatingForm, ReviewForm},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalOptions {
    pub static_backdrop: bool,
    pub keyboard: bool,
}

impl ModalOptions {
    /// Cannot be dismissed by clicking the backdrop or pressing Escape.
    pub fn blocking() -> Self {
        Self {
            static_backdrop: true,
            keyboard: false,
        }
    }
}

/// What the controller needs from whatever renders the page.
pub trait PageView: Send + Sync {
    /// Blocking, user-facing notice.
    fn alert(&self, message: &str);
    fn show_modal(&self, options: ModalOptions);
    fn hide_modal(&self);
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("order detail page has no order number")]
    MissingOrderNumber,
}

pub struct FormController {
    order: OrderNumber,
    api: Arc<dyn OrderSubmissionApi>,
    view: Arc<dyn PageView>,
    state: Mutex<ControllerState>,
}

impl FormController {
    pub fn initialize(
        page: &OrderDetailPage,
        api: Arc<dyn OrderSubmissionApi>,
        view: Arc<dyn PageView>,
    ) -> Result<Self, ControllerError> {
        let order = page
            .order_number()
            .ok_or(ControllerError::MissingOrderNumber)?;

        let mut modal = ModalState::from_element(page.modal.as_ref());
        if modal.present && !modal.rated {
            view.show_modal(ModalOptions::blocking());
            modal.shown = true;
            debug!(order = %order, "rating modal shown");
        }

        Ok(Self {
            order,
            api,
            view,
            state: Mutex::new(ControllerState {
                modal,
                ..ControllerState::default()
            }),
        })
    }

    pub fn order(&self) -> &OrderNumber {
        &self.order
    }

    pub async fn snapshot(&self) -> ControllerState {
        *self.state.lock().await
    }

    pub async fn submit_rating(&self, form: &RatingForm) -> SubmitResult {
        {
            let mut state = self.state.lock().await;
            if state.rating_form.disabled {
                debug!(order = %self.order, "rating form disabled; ignoring submit");
                return SubmitResult::ignored();
            }
            state.rating_form.phase = FormPhase::Submitting;
        }

        let submission = match form.collect() {
            Ok(submission) => submission,
            Err(err) => {
                self.state.lock().await.rating_form.phase = FormPhase::Failed;
                return self.reject(err);
            }
        };

        match self.api.submit_rating(&self.order, &submission).await {
            Ok(reply) if reply.status_ok() || reply.body.success => {
                info!(order = %self.order, status = reply.status, "order rating accepted");
                self.view.alert(MSG_RATING_SUBMITTED);
                let mut state = self.state.lock().await;
                state.rating_form.disabled = true;
                state.rating_form.phase = FormPhase::Succeeded;
                self.mark_rated(&mut state);
                SubmitResult::success(MSG_RATING_SUBMITTED)
            }
            Ok(reply) => {
                let message = reply.body.message().unwrap_or(MSG_RATING_FAILED).to_string();
                warn!(order = %self.order, status = reply.status, message = %message, "order rating rejected");
                self.view.alert(&message);
                self.state.lock().await.rating_form.phase = FormPhase::Failed;
                SubmitResult::failure(FailureKind::Server, message)
            }
            Err(err) => {
                error!(order = %self.order, error = %err, "error submitting order rating");
                self.view.alert(MSG_RATING_ERROR);
                self.state.lock().await.rating_form.phase = FormPhase::Failed;
                SubmitResult::failure(FailureKind::Transport, MSG_RATING_ERROR)
            }
        }
    }

    pub async fn submit_reviews(&self, form: &ReviewForm) -> SubmitResult {
        // The submit control is disabled before the first await so an
        // overlapping submit sees it and backs off.
        {
            let mut state = self.state.lock().await;
            if state.review_form.submit_disabled {
                debug!(order = %self.order, "review submit disabled; ignoring submit");
                return SubmitResult::ignored();
            }
            state.review_form.submit_disabled = true;
            state.review_form.phase = FormPhase::Submitting;
        }

        let batch = match form.collect() {
            Ok(batch) => batch,
            Err(err) => {
                self.reopen_reviews().await;
                return self.reject(err);
            }
        };

        match self.api.submit_reviews(&self.order, &batch).await {
            Ok(reply) if reply.body.success => {
                info!(order = %self.order, reviews = batch.len(), "food reviews accepted");
                self.view.alert(MSG_REVIEWS_SUBMITTED);
                let mut state = self.state.lock().await;
                state.review_form.rows_disabled = true;
                state.review_form.phase = FormPhase::Succeeded;
                self.mark_rated(&mut state);
                SubmitResult::success(MSG_REVIEWS_SUBMITTED)
            }
            Ok(reply) => {
                let message = reply.body.message().unwrap_or(MSG_REVIEWS_FAILED).to_string();
                warn!(order = %self.order, status = reply.status, message = %message, "food reviews rejected");
                self.view.alert(&message);
                self.reopen_reviews().await;
                SubmitResult::failure(FailureKind::Server, message)
            }
            Err(err) => {
                error!(order = %self.order, error = %err, "error submitting reviews");
                self.view.alert(MSG_REVIEWS_ERROR);
                self.reopen_reviews().await;
                SubmitResult::failure(FailureKind::Transport, MSG_REVIEWS_ERROR)
            }
        }
    }

    fn reject(&self, err: ValidationError) -> SubmitResult {
        let message = err.to_string();
        debug!(order = %self.order, message = %message, "submission failed validation");
        self.view.alert(&message);
        SubmitResult::failure(FailureKind::Validation, message)
    }

    async fn reopen_reviews(&self) {
        let mut state = self.state.lock().await;
        state.review_form.submit_disabled = false;
        state.review_form.phase = FormPhase::Failed;
    }

    fn mark_rated(&self, state: &mut ControllerState) {
        if state.modal.present {
            state.modal.rated = true;
        }
        if state.modal.shown {
            self.view.hide_modal();
            state.modal.shown = false;
            debug!(order = %self.order, "rating modal hidden");
        }
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
