use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing::info;

use bookmarks_service::{
    app,
    config::{Config, StoreKind},
    services::{BookmarkService, BookmarkStore, InMemoryStore, PostgresStore},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting bookmarks service in {} mode...", config.environment);

    let store = build_store(&config).await?;
    let bookmark_service = BookmarkService::new(store);
    let app_state = Arc::new(AppState::new(config.clone(), bookmark_service));

    let app = app::router(app_state);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_store(config: &Config) -> anyhow::Result<Arc<dyn BookmarkStore>> {
    match config.store {
        StoreKind::Memory => {
            info!("Using in-memory bookmark store");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StoreKind::Postgres => {
            let store = PostgresStore::new(config).await?;
            store.verify_connection().await?;
            info!("Database connection established successfully");
            Ok(Arc::new(store))
        }
    }
}
