use crate::application::parse_id;
use crate::domain::courses::CourseRepository;
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct DeleteCourseUseCase {
    repo: Arc<dyn CourseRepository>,
}

impl DeleteCourseUseCase {
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, id: &str) -> Result<(), AppError> {
        let id = parse_id(id, "Course")?;
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound("Course not found".to_string()));
        }
        tracing::info!(course_id = %id, "Course deleted");
        Ok(())
    }
}
