use crate::domain::reviews::{MAX_RATING, MIN_RATING, NewReview, Review, ReviewRepository};
use crate::shared::error::AppError;
use crate::shared::validation::not_blank;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReviewRequest {
    #[validate(custom(function = "not_blank", message = "Reviewer name is required"))]
    #[schema(example = "Ravi Patel")]
    pub name: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: i32,
    #[validate(custom(function = "not_blank", message = "Comment is required"))]
    #[schema(example = "Cleared every backlog in one semester")]
    pub comment: String,
    #[serde(default)]
    #[schema(example = "Mechanical Engineering - Degree")]
    pub course: String,
    #[serde(default = "default_approved")]
    pub approved: bool,
}

fn default_approved() -> bool {
    true
}

pub struct CreateReviewUseCase {
    repo: Arc<dyn ReviewRepository>,
}

impl CreateReviewUseCase {
    pub fn new(repo: Arc<dyn ReviewRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, req), fields(rating = req.rating))]
    pub async fn execute(&self, req: CreateReviewRequest) -> Result<Review, AppError> {
        // The route validates too; this keeps the bound when called directly
        if !(MIN_RATING..=MAX_RATING).contains(&req.rating) {
            return Err(AppError::ValidationError(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }

        let new_review = NewReview {
            name: req.name.trim().to_string(),
            rating: req.rating,
            comment: req.comment,
            course: req.course,
            approved: req.approved,
        };

        Ok(self.repo.create(new_review).await?)
    }
}
