use crate::infrastructure::state::AppState;
use crate::presentation::handlers::inquiries;
use axum::{Router, routing::get};

/// Submission is public; reading and status changes need an admin session
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(inquiries::list_inquiries).post(inquiries::submit_inquiry),
        )
        .route(
            "/{id}",
            get(inquiries::get_inquiry).patch(inquiries::set_inquiry_status),
        )
}
