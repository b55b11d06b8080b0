use classdesk::infrastructure;
use classdesk::infrastructure::config::AppConfig;
use classdesk::infrastructure::state::AppState;
use classdesk::presentation;

use dotenvy::dotenv;
use std::env;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run(async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run<F>(shutdown_signal: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    dotenv().ok();

    // try_init: tests may call this more than once
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "classdesk=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    let config = AppConfig::from_env();
    let (listener, app) = bootstrap(&config).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal)
    .await?;

    Ok(())
}

async fn bootstrap(config: &AppConfig) -> anyhow::Result<(tokio::net::TcpListener, axum::Router)> {
    let password_service = infrastructure::password::PasswordService::new();
    let admin = infrastructure::auth::load_admin_account(&config.admin, &password_service)?;
    let auth_service = Arc::new(infrastructure::auth::JwtAuthService::from_config(&config.jwt)?);

    let state = match &config.database {
        Some(database) => {
            let pool = infrastructure::db::create_pool(database).await?;
            sqlx::migrate!().run(&pool).await?;
            tracing::info!("Using Postgres storage");
            AppState::postgres(pool, auth_service, admin)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; records are kept in memory and lost on restart");
            AppState::in_memory(auth_service, admin)
        }
    };

    let app = presentation::router::app(state, &config.http)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::debug!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    Ok((listener, app))
}
