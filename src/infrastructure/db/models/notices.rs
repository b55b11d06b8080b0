use crate::domain::notices::Notice;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct NoticeDbModel {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub priority: String,
    pub active: bool,
    pub created_at: OffsetDateTime,
}

impl From<NoticeDbModel> for Notice {
    fn from(model: NoticeDbModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            priority: model.priority,
            active: model.active,
            created_at: model.created_at,
        }
    }
}
