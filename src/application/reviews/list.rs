use crate::domain::reviews::{Review, ReviewRepository};
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListReviewsQuery {
    /// Include reviews that are not approved
    #[serde(default)]
    pub all: bool,
}

pub struct ListReviewsUseCase {
    repo: Arc<dyn ReviewRepository>,
}

impl ListReviewsUseCase {
    pub fn new(repo: Arc<dyn ReviewRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, query: ListReviewsQuery) -> Result<Vec<Review>, AppError> {
        let approved = if query.all { None } else { Some(true) };
        Ok(self.repo.find_all(approved).await?)
    }
}
