use std::sync::Arc;

use anyhow::Context;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use ocshuttle_pricing::config::{self, AppConfig};
use ocshuttle_pricing::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ocshuttle_pricing=debug,tower_http=info")),
        )
        .init();

    let app_config = AppConfig::from_env();
    let pricing = config::load_pricing_config(app_config.schedule_path.as_deref())
        .context("loading pricing schedule")?;
    tracing::info!(
        destinations = pricing.rates.len(),
        holidays = pricing.surcharges.holidays.len(),
        "pricing schedule ready"
    );

    let state = AppState {
        pricing: Arc::new(pricing),
    };
    let app = ocshuttle_pricing::app(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = app_config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
