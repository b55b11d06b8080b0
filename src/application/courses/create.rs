use crate::domain::courses::{Course, CourseRepository, NewCourse};
use crate::shared::error::AppError;
use crate::shared::validation::not_blank;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseRequest {
    #[validate(custom(function = "not_blank", message = "Course name is required"))]
    #[schema(example = "Civil Engineering - Degree")]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Stream is required"))]
    #[schema(example = "Civil")]
    pub stream: String,
    #[serde(rename = "type")]
    #[validate(custom(function = "not_blank", message = "Course type is required"))]
    #[schema(example = "Degree")]
    pub course_type: String,
    #[serde(default)]
    #[schema(example = "Complete coaching for all semesters")]
    pub description: String,
    #[serde(default)]
    #[schema(example = "Semester-wise")]
    pub duration: String,
    #[serde(default)]
    #[schema(example = json!(["Structural Analysis", "Surveying"]))]
    pub features: Vec<String>,
}

pub struct CreateCourseUseCase {
    repo: Arc<dyn CourseRepository>,
}

impl CreateCourseUseCase {
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, req), fields(name = %req.name))]
    pub async fn execute(&self, req: CreateCourseRequest) -> Result<Course, AppError> {
        let new_course = NewCourse {
            name: req.name.trim().to_string(),
            stream: req.stream.trim().to_string(),
            course_type: req.course_type.trim().to_string(),
            description: req.description,
            duration: req.duration,
            features: req.features,
        };

        Ok(self.repo.create(new_course).await?)
    }
}
