use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{multipart::Form, Client, RequestBuilder, Response};
use shared::{
    domain::OrderNumber,
    protocol::{OrderRatingSubmission, ReviewBatch, SubmissionResponse},
};
use tracing::{debug, info, warn};
use url::Url;

pub mod csrf;
pub mod error;

pub use csrf::{CookieTokenProvider, CsrfTokenProvider, StaticTokenProvider};
pub use error::SubmitError;

const RATE_ACTION: &str = "rate";
const REVIEW_ACTION: &str = "submit_review";

/// HTTP status plus decoded body of a submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointReply {
    pub status: u16,
    pub body: SubmissionResponse,
}

impl EndpointReply {
    pub fn status_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait OrderSubmissionApi: Send + Sync {
    async fn submit_rating(
        &self,
        order: &OrderNumber,
        submission: &OrderRatingSubmission,
    ) -> Result<EndpointReply, SubmitError>;

    async fn submit_reviews(
        &self,
        order: &OrderNumber,
        batch: &ReviewBatch,
    ) -> Result<EndpointReply, SubmitError>;
}

pub struct OrderReviewClient {
    http: Client,
    base_url: Url,
    csrf: Arc<dyn CsrfTokenProvider>,
}

impl OrderReviewClient {
    pub fn new(base_url: &str, csrf: Arc<dyn CsrfTokenProvider>) -> Result<Self, SubmitError> {
        Self::with_http_client(Client::new(), base_url, csrf)
    }

    pub fn with_http_client(
        http: Client,
        base_url: &str,
        csrf: Arc<dyn CsrfTokenProvider>,
    ) -> Result<Self, SubmitError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(SubmitError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            http,
            base_url,
            csrf,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/orders/{order}/{action}/`, with the order number kept as one segment.
    pub fn endpoint_url(&self, order: &OrderNumber, action: &str) -> Result<Url, SubmitError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SubmitError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["orders", order.as_str(), action, ""]);
        Ok(url)
    }

    fn with_csrf(&self, request: RequestBuilder) -> RequestBuilder {
        match self.csrf.csrf_token() {
            Some(token) => request.header(csrf::CSRF_HEADER, token),
            None => {
                warn!("no csrf token available; sending request without {}", csrf::CSRF_HEADER);
                request
            }
        }
    }
}

async fn read_reply(response: Response) -> Result<EndpointReply, SubmitError> {
    let status = response.status().as_u16();
    let bytes = response.bytes().await?;
    let body = serde_json::from_slice::<SubmissionResponse>(&bytes)
        .map_err(|source| SubmitError::Decode { status, source })?;
    Ok(EndpointReply { status, body })
}

#[async_trait]
impl OrderSubmissionApi for OrderReviewClient {
    async fn submit_rating(
        &self,
        order: &OrderNumber,
        submission: &OrderRatingSubmission,
    ) -> Result<EndpointReply, SubmitError> {
        let url = self.endpoint_url(order, RATE_ACTION)?;
        let form = submission
            .form_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        info!(order = %order, rating = %submission.rating, "submitting order rating");
        let response = self
            .with_csrf(self.http.post(url).multipart(form))
            .send()
            .await?;
        let reply = read_reply(response).await?;
        debug!(order = %order, status = reply.status, success = reply.body.success, "order rating reply");
        Ok(reply)
    }

    async fn submit_reviews(
        &self,
        order: &OrderNumber,
        batch: &ReviewBatch,
    ) -> Result<EndpointReply, SubmitError> {
        let url = self.endpoint_url(order, REVIEW_ACTION)?;

        info!(order = %order, reviews = batch.len(), "submitting food reviews");
        let response = self
            .with_csrf(self.http.post(url).json(batch))
            .send()
            .await?;
        let reply = read_reply(response).await?;
        debug!(order = %order, status = reply.status, success = reply.body.success, "food review reply");
        Ok(reply)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
