use crate::domain::courses::{Course, CourseRepository};
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListCoursesQuery {
    /// Only courses of this stream, e.g. `Civil`
    pub stream: Option<String>,
}

pub struct ListCoursesUseCase {
    repo: Arc<dyn CourseRepository>,
}

impl ListCoursesUseCase {
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, query: ListCoursesQuery) -> Result<Vec<Course>, AppError> {
        let stream = query
            .stream
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        Ok(self.repo.find_all(stream).await?)
    }
}
