use crate::infrastructure::state::AppState;
use crate::presentation::handlers::reviews;
use axum::{Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(reviews::list_reviews).post(reviews::create_review))
}
