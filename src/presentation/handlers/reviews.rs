use crate::application::auth::authorize::AdminSession;
use crate::application::reviews::create::{CreateReviewRequest, CreateReviewUseCase};
use crate::application::reviews::list::{ListReviewsQuery, ListReviewsUseCase};
use crate::domain::reviews::Review;
use crate::infrastructure::state::AppState;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::query::Qs;
use crate::shared::validation::ValidatedJson;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

/// Approved reviews, newest first; `all=true` includes unapproved ones
#[utoipa::path(
    get,
    path = "/api/reviews",
    params(ListReviewsQuery),
    responses(
        (status = 200, description = "Reviews", body = Vec<Review>)
    ),
    tag = "reviews"
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Qs(query): Qs<ListReviewsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = ListReviewsUseCase::new(state.repositories.reviews.clone());
    let reviews = use_case.execute(query).await?;

    Ok(Json(reviews))
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = Review),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "reviews",
    security(("bearer_auth" = []))
)]
pub async fn create_review(
    _session: AdminSession,
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let use_case = CreateReviewUseCase::new(state.repositories.reviews.clone());
    let review = use_case.execute(req).await?;

    Ok((StatusCode::CREATED, Json(review)))
}
