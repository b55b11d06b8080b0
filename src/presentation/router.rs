use crate::infrastructure::config::HttpConfig;
use crate::infrastructure::state::AppState;
use crate::presentation::handlers;
use crate::presentation::middleware::cors::cors_layer;
use crate::presentation::middleware::rate_limit::rate_limit_layer;
use crate::presentation::openapi::ApiDoc;
use crate::presentation::routes;
use axum::{Router, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn app(state: AppState, http: &HttpConfig) -> anyhow::Result<Router> {
    let api = Router::new()
        .route("/", get(handlers::health::root))
        .nest("/inquiries", routes::inquiries::routes())
        .nest("/courses", routes::courses::routes())
        .nest("/reviews", routes::reviews::routes())
        .nest("/notices", routes::notices::routes())
        .nest("/admin", routes::admin::routes());

    Ok(Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(handlers::health::health_check))
        .nest("/api", api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&http.cors_allowed_origins)?)
        .layer(rate_limit_layer(http.rate_limit_per_minute)?)
        .with_state(state))
}
