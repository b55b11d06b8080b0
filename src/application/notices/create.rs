use crate::domain::notices::{NewNotice, Notice, NoticeRepository};
use crate::shared::error::AppError;
use crate::shared::validation::not_blank;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNoticeRequest {
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    #[schema(example = "New batch starting")]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "Content is required"))]
    #[schema(example = "Diploma Civil batch starts on 1st July")]
    pub content: String,
    #[serde(default = "default_priority")]
    #[schema(example = "high")]
    pub priority: String,
    /// Inactive notices are kept but hidden from the default listing
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_priority() -> String {
    "normal".to_string()
}

fn default_active() -> bool {
    true
}

pub struct CreateNoticeUseCase {
    repo: Arc<dyn NoticeRepository>,
}

impl CreateNoticeUseCase {
    pub fn new(repo: Arc<dyn NoticeRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, req), fields(title = %req.title))]
    pub async fn execute(&self, req: CreateNoticeRequest) -> Result<Notice, AppError> {
        let priority = match req.priority.trim() {
            "" => default_priority(),
            p => p.to_string(),
        };

        let new_notice = NewNotice {
            title: req.title.trim().to_string(),
            content: req.content,
            priority,
            active: req.active,
        };

        Ok(self.repo.create(new_notice).await?)
    }
}
