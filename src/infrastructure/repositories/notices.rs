use crate::domain::notices::{NewNotice, Notice, NoticeRepository};
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::models::notices::NoticeDbModel;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresNoticeRepository {
    pool: DbPool,
}

impl PostgresNoticeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoticeRepository for PostgresNoticeRepository {
    #[tracing::instrument(skip(self, new_notice))]
    async fn create(&self, new_notice: NewNotice) -> Result<Notice, anyhow::Error> {
        let model = sqlx::query_as::<_, NoticeDbModel>(
            r#"
            INSERT INTO notices (title, content, priority, active)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, priority, active, created_at
            "#,
        )
        .bind(new_notice.title)
        .bind(new_notice.content)
        .bind(new_notice.priority)
        .bind(new_notice.active)
        .fetch_one(&self.pool)
        .await?;

        Ok(model.into())
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notice>, anyhow::Error> {
        let model = sqlx::query_as::<_, NoticeDbModel>(
            r#"
            SELECT id, title, content, priority, active, created_at
            FROM notices
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(model.map(Into::into))
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self, active: Option<bool>) -> Result<Vec<Notice>, anyhow::Error> {
        let models = sqlx::query_as::<_, NoticeDbModel>(
            r#"
            SELECT id, title, content, priority, active, created_at
            FROM notices
            WHERE $1::BOOLEAN IS NULL OR active = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(active)
        .fetch_all(&self.pool)
        .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<bool, anyhow::Error> {
        let result = sqlx::query("DELETE FROM notices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
