#![recursion_limit = "256"]

mod config;
mod routes;

use leptos::prelude::get_configuration;

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env()?;
    let leptos_options = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?.leptos_options;

    let app = routes::app(&config, leptos_options);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(
        port = config.port,
        api_url = %config.api_url,
        public_dir = %config.public_dir.display(),
        "tollgate dashboard listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
