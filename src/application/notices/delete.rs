use crate::application::parse_id;
use crate::domain::notices::NoticeRepository;
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct DeleteNoticeUseCase {
    repo: Arc<dyn NoticeRepository>,
}

impl DeleteNoticeUseCase {
    pub fn new(repo: Arc<dyn NoticeRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, id: &str) -> Result<(), AppError> {
        let id = parse_id(id, "Notice")?;
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound("Notice not found".to_string()));
        }
        tracing::info!(notice_id = %id, "Notice deleted");
        Ok(())
    }
}
