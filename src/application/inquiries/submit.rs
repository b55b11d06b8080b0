use crate::domain::inquiries::{Inquiry, InquiryRepository, NewInquiry};
use crate::shared::error::AppError;
use crate::shared::validation::{blank_as_none, not_blank};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitInquiryRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    #[schema(example = "Asha")]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Phone is required"))]
    #[schema(example = "9990001111")]
    pub phone: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "asha@example.com")]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Course of interest is required"))]
    #[schema(example = "Civil Engineering - Degree")]
    pub course_interested: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "Looking for weekend batches")]
    pub message: Option<String>,
}

/// Public contact-form submission. Every inquiry starts out as `new`.
pub struct SubmitInquiryUseCase {
    repo: Arc<dyn InquiryRepository>,
}

impl SubmitInquiryUseCase {
    pub fn new(repo: Arc<dyn InquiryRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn execute(&self, req: SubmitInquiryRequest) -> Result<Inquiry, AppError> {
        req.validate()?;

        let new_inquiry = NewInquiry {
            name: req.name.trim().to_string(),
            phone: req.phone.trim().to_string(),
            email: req.email,
            course_interested: req.course_interested.trim().to_string(),
            message: req.message,
        };

        let inquiry = self.repo.create(new_inquiry).await?;
        tracing::info!(
            inquiry_id = %inquiry.id,
            course = %inquiry.course_interested,
            "New inquiry received"
        );

        Ok(inquiry)
    }
}
