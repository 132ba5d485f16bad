use std::env;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use carepath_api::config::{ApiConfig, StoreBackend};
use carepath_api::routes::facilities::seed_directory;
use carepath_api::state::AppState;
use carepath_core::models::facility::Facility;
use carepath_storage::memory::MemoryStore;
use carepath_storage::store::{DocumentStore, S3Store};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ApiConfig::from_env()?;

    let store: Arc<dyn DocumentStore> = match &config.store {
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store, history is lost on restart");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::S3 { bucket } => {
            let client = carepath_storage::client::build_client().await;
            tracing::info!(bucket = %bucket, "using S3 store");
            Arc::new(S3Store::new(client, bucket.clone()))
        }
    };

    if let Some(path) = &config.facilities_seed {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("cannot read facilities seed {}: {e}", path.display()))?;
        let facilities: Vec<Facility> = serde_json::from_str(&raw)
            .map_err(|e| eyre::eyre!("invalid facilities seed {}: {e}", path.display()))?;
        let written = seed_directory(store.as_ref(), &facilities).await?;
        tracing::info!(seeded = written, available = facilities.len(), "facility directory seed");
    }

    let verifier = config.token_verifier()?.map(Arc::new);
    if verifier.is_none() {
        tracing::warn!("no JWT key configured, history routes will reject all requests");
    }

    let state = AppState { store, verifier };
    let app = carepath_api::router(state).layer(config.cors_layer());

    if env::var_os("AWS_LAMBDA_RUNTIME_API").is_some() {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
