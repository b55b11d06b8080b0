use crate::domain::inquiries::{Inquiry, InquiryRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct ListInquiriesUseCase {
    repo: Arc<dyn InquiryRepository>,
}

impl ListInquiriesUseCase {
    pub fn new(repo: Arc<dyn InquiryRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<Vec<Inquiry>, AppError> {
        Ok(self.repo.find_all().await?)
    }
}
