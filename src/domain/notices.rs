use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Notice {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub priority: String,
    pub active: bool,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewNotice {
    pub title: String,
    pub content: String,
    pub priority: String,
    /// Inactive notices only show up when listing with `all=true`
    pub active: bool,
}

#[async_trait]
pub trait NoticeRepository: Send + Sync {
    async fn create(&self, new_notice: NewNotice) -> Result<Notice, anyhow::Error>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notice>, anyhow::Error>;
    /// Newest first. `active = None` returns every notice.
    async fn find_all(&self, active: Option<bool>) -> Result<Vec<Notice>, anyhow::Error>;
    async fn delete(&self, id: Uuid) -> Result<bool, anyhow::Error>;
}
