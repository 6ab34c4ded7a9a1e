use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use freightdesk::CarrierRegistry;
use freightdesk_server::adapters::{FmcsaRegistry, InMemoryStore};
use freightdesk_server::config::ServerConfig;
use freightdesk_server::routes::system::ENDPOINTS;
use freightdesk_server::{build_router, seed, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("freightdesk_server=info,tower_http=info")),
        )
        .init();

    tracing::info!("🚚 Freightdesk API initializing...");

    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    let open_routes = config.tokens.open_routes();
    if open_routes.is_empty() {
        tracing::info!("🔐 API token authentication enabled on every route");
    } else {
        tracing::warn!(
            "⚠️  No API token configured for: {} - authentication disabled there",
            open_routes.join(", ")
        );
    }

    let loads = match &config.loads_file {
        Some(path) => {
            let loads = seed::loads_from_file(path)?;
            tracing::info!("📦 Loaded {} loads from {:?}", loads.len(), path);
            loads
        }
        None => seed::demo_loads(),
    };
    let carriers = seed::demo_carriers();
    tracing::info!(
        "✅ Seeded {} carriers and {} loads",
        carriers.len(),
        loads.len()
    );
    let store = InMemoryStore::seeded(carriers, loads);

    let registry = match &config.registry {
        Some(registry_config) => {
            let client = FmcsaRegistry::new(registry_config)
                .context("Failed to initialize FMCSA registry client")?;
            tracing::info!(
                "🛰️  FMCSA registry enabled ({}, timeout {:?})",
                registry_config.base_url,
                registry_config.timeout
            );
            Some((
                Arc::new(client) as Arc<dyn CarrierRegistry>,
                registry_config.timeout,
            ))
        }
        None => {
            tracing::warn!(
                "⚠️  No FMCSA_WEB_KEY set - carrier verification uses local data only"
            );
            None
        }
    };

    let state = AppState::new(&store, registry);
    let router = build_router(state, &config.tokens);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    for endpoint in ENDPOINTS {
        tracing::info!("   {}", endpoint);
    }
    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Freightdesk API listening on {}", addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
