use crate::domain::notices::{Notice, NoticeRepository};
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListNoticesQuery {
    /// Include inactive notices
    #[serde(default)]
    pub all: bool,
}

pub struct ListNoticesUseCase {
    repo: Arc<dyn NoticeRepository>,
}

impl ListNoticesUseCase {
    pub fn new(repo: Arc<dyn NoticeRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, query: ListNoticesQuery) -> Result<Vec<Notice>, AppError> {
        let active = if query.all { None } else { Some(true) };
        Ok(self.repo.find_all(active).await?)
    }
}
