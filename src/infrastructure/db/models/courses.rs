use crate::domain::courses::Course;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct CourseDbModel {
    pub id: Uuid,
    pub name: String,
    pub stream: String,
    pub course_type: String,
    pub description: String,
    pub duration: String,
    pub features: Vec<String>,
    pub created_at: OffsetDateTime,
}

impl From<CourseDbModel> for Course {
    fn from(model: CourseDbModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            stream: model.stream,
            course_type: model.course_type,
            description: model.description,
            duration: model.duration,
            features: model.features,
            created_at: model.created_at,
        }
    }
}
