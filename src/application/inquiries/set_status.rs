use crate::application::parse_id;
use crate::domain::inquiries::{Inquiry, InquiryRepository, InquiryStatus, UnknownStatus};
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SetStatusQuery {
    /// One of `new`, `contacted`, `completed`
    #[serde(default)]
    #[param(example = "contacted")]
    pub status: String,
}

/// Moves an inquiry to any of the three statuses; transitions are not restricted.
pub struct SetInquiryStatusUseCase {
    repo: Arc<dyn InquiryRepository>,
}

impl SetInquiryStatusUseCase {
    pub fn new(repo: Arc<dyn InquiryRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, id: &str, status: &str) -> Result<Inquiry, AppError> {
        // Reject the value before touching the store so the record stays as it was
        let status: InquiryStatus = status
            .parse()
            .map_err(|e: UnknownStatus| AppError::InvalidStatus(e.to_string()))?;
        let id = parse_id(id, "Inquiry")?;

        let inquiry = self
            .repo
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Inquiry not found".to_string()))?;

        tracing::info!(inquiry_id = %inquiry.id, status = %inquiry.status, "Inquiry status updated");
        Ok(inquiry)
    }
}
