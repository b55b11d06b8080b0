use crate::domain::reviews::{NewReview, Review, ReviewRepository};
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::models::reviews::ReviewDbModel;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresReviewRepository {
    pool: DbPool,
}

impl PostgresReviewRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    #[tracing::instrument(skip(self, new_review))]
    async fn create(&self, new_review: NewReview) -> Result<Review, anyhow::Error> {
        let model = sqlx::query_as::<_, ReviewDbModel>(
            r#"
            INSERT INTO reviews (name, rating, comment, course, approved)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, rating, comment, course, approved, created_at
            "#,
        )
        .bind(new_review.name)
        .bind(new_review.rating)
        .bind(new_review.comment)
        .bind(new_review.course)
        .bind(new_review.approved)
        .fetch_one(&self.pool)
        .await?;

        Ok(model.into())
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, anyhow::Error> {
        let model = sqlx::query_as::<_, ReviewDbModel>(
            r#"
            SELECT id, name, rating, comment, course, approved, created_at
            FROM reviews
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(model.map(Into::into))
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self, approved: Option<bool>) -> Result<Vec<Review>, anyhow::Error> {
        let models = sqlx::query_as::<_, ReviewDbModel>(
            r#"
            SELECT id, name, rating, comment, course, approved, created_at
            FROM reviews
            WHERE $1::BOOLEAN IS NULL OR approved = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(approved)
        .fetch_all(&self.pool)
        .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<bool, anyhow::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
