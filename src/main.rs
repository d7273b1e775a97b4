use anyhow::Result;
use tubelens::{app_state::AppState, config::Config, web};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(&config);
    let app = web::build_router(state, web::cors_layer(config.cors_origin())?);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), cache = %config.cache_path(), "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
