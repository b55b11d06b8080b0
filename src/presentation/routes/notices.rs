use crate::infrastructure::state::AppState;
use crate::presentation::handlers::notices;
use axum::{
    Router,
    routing::{delete, get},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(notices::list_notices).post(notices::create_notice))
        .route("/{id}", delete(notices::delete_notice))
}
