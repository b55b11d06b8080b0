use crate::application::parse_id;
use crate::domain::inquiries::{Inquiry, InquiryRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct GetInquiryUseCase {
    repo: Arc<dyn InquiryRepository>,
}

impl GetInquiryUseCase {
    pub fn new(repo: Arc<dyn InquiryRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> Result<Inquiry, AppError> {
        let id = parse_id(id, "Inquiry")?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Inquiry not found".to_string()))
    }
}
