use crate::application::auth::authorize::AdminSession;
use crate::application::courses::create::{CreateCourseRequest, CreateCourseUseCase};
use crate::application::courses::delete::DeleteCourseUseCase;
use crate::application::courses::get::GetCourseUseCase;
use crate::application::courses::list::{ListCoursesQuery, ListCoursesUseCase};
use crate::application::courses::update::{UpdateCourseRequest, UpdateCourseUseCase};
use crate::domain::courses::Course;
use crate::infrastructure::state::AppState;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::query::Qs;
use crate::shared::validation::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// List the course catalog, optionally for one stream
#[utoipa::path(
    get,
    path = "/api/courses",
    params(ListCoursesQuery),
    responses(
        (status = 200, description = "Courses in catalog order", body = Vec<Course>)
    ),
    tag = "courses"
)]
pub async fn list_courses(
    State(state): State<AppState>,
    Qs(query): Qs<ListCoursesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = ListCoursesUseCase::new(state.repositories.courses.clone());
    let courses = use_case.execute(query).await?;

    Ok(Json(courses))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(("id" = String, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course found", body = Course),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = GetCourseUseCase::new(state.repositories.courses.clone());
    let course = use_case.execute(&id).await?;

    Ok(Json(course))
}

#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "courses",
    security(("bearer_auth" = []))
)]
pub async fn create_course(
    _session: AdminSession,
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateCourseRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = CreateCourseUseCase::new(state.repositories.courses.clone());
    let course = use_case.execute(req).await?;

    Ok((StatusCode::CREATED, Json(course)))
}

/// Partially update a course; omitted fields keep their values
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(("id" = String, Path, description = "Course ID")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = Course),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "courses",
    security(("bearer_auth" = []))
)]
pub async fn update_course(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateCourseRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = UpdateCourseUseCase::new(state.repositories.courses.clone());
    let course = use_case.execute(&id, req).await?;

    Ok(Json(course))
}

#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(("id" = String, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    tag = "courses",
    security(("bearer_auth" = []))
)]
pub async fn delete_course(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = DeleteCourseUseCase::new(state.repositories.courses.clone());
    use_case.execute(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
