use crate::domain::reviews::Review;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct ReviewDbModel {
    pub id: Uuid,
    pub name: String,
    pub rating: i32,
    pub comment: String,
    pub course: String,
    pub approved: bool,
    pub created_at: OffsetDateTime,
}

impl From<ReviewDbModel> for Review {
    fn from(model: ReviewDbModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            rating: model.rating,
            comment: model.comment,
            course: model.course,
            approved: model.approved,
            created_at: model.created_at,
        }
    }
}
