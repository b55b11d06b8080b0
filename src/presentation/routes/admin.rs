use crate::infrastructure::state::AppState;
use crate::presentation::handlers::auth;
use axum::{Router, routing::post};

/// Admin session routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::admin_login))
        .route("/logout", post(auth::admin_logout))
}
