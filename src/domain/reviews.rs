use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: Uuid,
    pub name: String,
    /// 1 to 5 inclusive
    pub rating: i32,
    pub comment: String,
    /// Free-text label of the course the reviewer attended
    pub course: String,
    pub approved: bool,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub name: String,
    pub rating: i32,
    pub comment: String,
    pub course: String,
    pub approved: bool,
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, new_review: NewReview) -> Result<Review, anyhow::Error>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, anyhow::Error>;
    /// Newest first. `approved = None` returns every review.
    async fn find_all(&self, approved: Option<bool>) -> Result<Vec<Review>, anyhow::Error>;
    async fn delete(&self, id: Uuid) -> Result<bool, anyhow::Error>;
}
