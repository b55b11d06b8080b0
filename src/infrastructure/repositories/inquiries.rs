use crate::domain::inquiries::{Inquiry, InquiryRepository, InquiryStatus, NewInquiry};
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::models::inquiries::InquiryDbModel;
use async_trait::async_trait;
use uuid::Uuid;

const COLUMNS: &str = "id, name, phone, email, course_interested, message, status, created_at";

#[derive(Clone)]
pub struct PostgresInquiryRepository {
    pool: DbPool,
}

impl PostgresInquiryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InquiryRepository for PostgresInquiryRepository {
    #[tracing::instrument(skip(self, new_inquiry))]
    async fn create(&self, new_inquiry: NewInquiry) -> Result<Inquiry, anyhow::Error> {
        let model = sqlx::query_as::<_, InquiryDbModel>(&format!(
            r#"
            INSERT INTO inquiries (name, phone, email, course_interested, message, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(new_inquiry.name)
        .bind(new_inquiry.phone)
        .bind(new_inquiry.email)
        .bind(new_inquiry.course_interested)
        .bind(new_inquiry.message)
        .bind(InquiryStatus::New.as_str())
        .fetch_one(&self.pool)
        .await?;

        model.try_into()
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Inquiry>, anyhow::Error> {
        let model = sqlx::query_as::<_, InquiryDbModel>(&format!(
            "SELECT {COLUMNS} FROM inquiries WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        model.map(Inquiry::try_from).transpose()
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Inquiry>, anyhow::Error> {
        let models = sqlx::query_as::<_, InquiryDbModel>(&format!(
            "SELECT {COLUMNS} FROM inquiries ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        models.into_iter().map(Inquiry::try_from).collect()
    }

    #[tracing::instrument(skip(self))]
    async fn update_status(
        &self,
        id: Uuid,
        status: InquiryStatus,
    ) -> Result<Option<Inquiry>, anyhow::Error> {
        let model = sqlx::query_as::<_, InquiryDbModel>(&format!(
            r#"
            UPDATE inquiries SET status = $2
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;

        model.map(Inquiry::try_from).transpose()
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<bool, anyhow::Error> {
        let result = sqlx::query("DELETE FROM inquiries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
