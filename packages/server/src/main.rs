// Main entry point for the SEO server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::{app::build_app, config::Config, state::AppState};
use seo_pipeline::{FragmentStore, JsonFileStore, MemoryStore, OpenAiBackend, SeoPipeline};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,seo_pipeline=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SEO metadata server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Select the fragment store
    let store: Arc<dyn FragmentStore> = match &config.content_path {
        Some(path) => {
            tracing::info!(path = %path, "Loading content file");
            Arc::new(JsonFileStore::load(path).context("Failed to load content file")?)
        }
        None => {
            tracing::warn!("CONTENT_PATH not set, starting with an empty in-memory store");
            Arc::new(MemoryStore::new())
        }
    };

    // Build the pipeline around the OpenAI backend
    let backend =
        OpenAiBackend::new(config.openai_api_key.clone()).with_model(config.seo_model.clone());
    let pipeline =
        SeoPipeline::new(Arc::new(backend)).with_property_names(config.text_properties.clone());

    let app = build_app(AppState { store, pipeline });

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
