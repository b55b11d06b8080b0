use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    /// Engineering discipline, e.g. "Civil"
    pub stream: String,
    /// "Degree", "Diploma", ...
    #[serde(rename = "type")]
    pub course_type: String,
    pub description: String,
    pub duration: String,
    pub features: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub stream: String,
    pub course_type: String,
    pub description: String,
    pub duration: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCourse {
    pub name: Option<String>,
    pub stream: Option<String>,
    pub course_type: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub features: Option<Vec<String>>,
}

impl UpdateCourse {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.stream.is_none()
            && self.course_type.is_none()
            && self.description.is_none()
            && self.duration.is_none()
            && self.features.is_none()
    }

    /// Overwrites the fields that are set in this patch.
    pub fn apply(self, course: &mut Course) {
        if let Some(name) = self.name {
            course.name = name;
        }
        if let Some(stream) = self.stream {
            course.stream = stream;
        }
        if let Some(course_type) = self.course_type {
            course.course_type = course_type;
        }
        if let Some(description) = self.description {
            course.description = description;
        }
        if let Some(duration) = self.duration {
            course.duration = duration;
        }
        if let Some(features) = self.features {
            course.features = features;
        }
    }
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, new_course: NewCourse) -> Result<Course, anyhow::Error>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, anyhow::Error>;
    /// Insertion order; `stream` narrows to one discipline.
    async fn find_all(&self, stream: Option<&str>) -> Result<Vec<Course>, anyhow::Error>;
    async fn update(&self, id: Uuid, update: UpdateCourse)
    -> Result<Option<Course>, anyhow::Error>;
    async fn delete(&self, id: Uuid) -> Result<bool, anyhow::Error>;
}
