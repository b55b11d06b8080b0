use crate::application::parse_id;
use crate::domain::courses::{Course, CourseRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct GetCourseUseCase {
    repo: Arc<dyn CourseRepository>,
}

impl GetCourseUseCase {
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> Result<Course, AppError> {
        let id = parse_id(id, "Course")?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }
}
