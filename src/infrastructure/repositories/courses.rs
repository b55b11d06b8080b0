use crate::domain::courses::{Course, CourseRepository, NewCourse, UpdateCourse};
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::models::courses::CourseDbModel;
use async_trait::async_trait;
use uuid::Uuid;

const COLUMNS: &str = "id, name, stream, course_type, description, duration, features, created_at";

#[derive(Clone)]
pub struct PostgresCourseRepository {
    pool: DbPool,
}

impl PostgresCourseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    #[tracing::instrument(skip(self, new_course))]
    async fn create(&self, new_course: NewCourse) -> Result<Course, anyhow::Error> {
        let model = sqlx::query_as::<_, CourseDbModel>(&format!(
            r#"
            INSERT INTO courses (name, stream, course_type, description, duration, features)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(new_course.name)
        .bind(new_course.stream)
        .bind(new_course.course_type)
        .bind(new_course.description)
        .bind(new_course.duration)
        .bind(new_course.features)
        .fetch_one(&self.pool)
        .await?;

        Ok(model.into())
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, anyhow::Error> {
        let model = sqlx::query_as::<_, CourseDbModel>(&format!(
            "SELECT {COLUMNS} FROM courses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(model.map(Into::into))
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self, stream: Option<&str>) -> Result<Vec<Course>, anyhow::Error> {
        let models = sqlx::query_as::<_, CourseDbModel>(&format!(
            r#"
            SELECT {COLUMNS} FROM courses
            WHERE $1::TEXT IS NULL OR stream = $1
            ORDER BY seq
            "#
        ))
        .bind(stream)
        .fetch_all(&self.pool)
        .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self, update))]
    async fn update(
        &self,
        id: Uuid,
        update: UpdateCourse,
    ) -> Result<Option<Course>, anyhow::Error> {
        // COALESCE keeps the stored value for fields the patch leaves out
        let model = sqlx::query_as::<_, CourseDbModel>(&format!(
            r#"
            UPDATE courses SET
                name = COALESCE($2, name),
                stream = COALESCE($3, stream),
                course_type = COALESCE($4, course_type),
                description = COALESCE($5, description),
                duration = COALESCE($6, duration),
                features = COALESCE($7, features)
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(update.name)
        .bind(update.stream)
        .bind(update.course_type)
        .bind(update.description)
        .bind(update.duration)
        .bind(update.features)
        .fetch_optional(&self.pool)
        .await?;

        Ok(model.map(Into::into))
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<bool, anyhow::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
