use crate::config::ServerConfig;
use crate::io::HttpChangelogSource;
use crate::services::FeedService;
use axum::Router;
use std::sync::Arc;

pub mod config;
mod domain;
mod features;
mod feed;
mod io;
mod parser;
mod services;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService>,
    pub config: Arc<ServerConfig>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    // load centralized config
    let config = ServerConfig::from_env();
    let shared_config = Arc::new(config);

    let source = HttpChangelogSource::new(config::CHANGELOG_URL.to_string());
    let feed_service = Arc::new(FeedService::new(Box::new(source)));

    let app_state = AppState {
        feed_service,
        config: shared_config.clone(),
    };

    println!("Starting server...");

    let app = Router::new()
        .merge(features::feed::feed_router())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&shared_config.bind_addr).await?;
    println!("Server listening on http://{}", shared_config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
