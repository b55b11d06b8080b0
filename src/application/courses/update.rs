use crate::application::parse_id;
use crate::domain::courses::{Course, CourseRepository, UpdateCourse};
use crate::shared::error::AppError;
use crate::shared::validation::not_blank;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseRequest {
    #[validate(custom(function = "not_blank", message = "Course name cannot be blank"))]
    #[schema(example = "Civil Engineering - Degree")]
    pub name: Option<String>,
    #[validate(custom(function = "not_blank", message = "Stream cannot be blank"))]
    #[schema(example = "Civil")]
    pub stream: Option<String>,
    #[serde(rename = "type")]
    #[validate(custom(function = "not_blank", message = "Course type cannot be blank"))]
    #[schema(example = "Degree")]
    pub course_type: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub features: Option<Vec<String>>,
}

pub struct UpdateCourseUseCase {
    repo: Arc<dyn CourseRepository>,
}

impl UpdateCourseUseCase {
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn execute(&self, id: &str, req: UpdateCourseRequest) -> Result<Course, AppError> {
        let id = parse_id(id, "Course")?;

        let update = UpdateCourse {
            name: req.name,
            stream: req.stream,
            course_type: req.course_type,
            description: req.description,
            duration: req.duration,
            features: req.features,
        };

        if update.is_empty() {
            return Err(AppError::ValidationError("No fields to update".to_string()));
        }

        self.repo
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
    }
}
