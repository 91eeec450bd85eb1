use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use articles::{AppState, fixtures, routes};
use common::database::{DatabaseConfig, health_check, init_pool};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting articles service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Bootstrap schema and seed fixtures
    fixtures::init_schema(&pool).await?;

    let app_state = AppState::new(pool);

    fixtures::ensure_seed(&app_state.user_repository, &app_state.article_repository).await?;

    info!("Articles service initialized successfully");

    // Start the web server
    let app = routes::create_router(app_state);

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Articles service listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
