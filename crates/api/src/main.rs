use std::sync::Arc;

use anyhow::Context;

use lustre_api::{
    app::{self, services},
    config::AppConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    lustre_observability::tracing::init(config.log_format);

    let services = Arc::new(services::AppServices::from_config(&config));

    // The listing answers "loading" until this settles; a failure is terminal.
    let source = services::product_source(&config);
    let loader = services.clone();
    tokio::spawn(async move {
        if let Err(e) = loader.load(source.as_ref()).await {
            tracing::error!(error = %e, "catalogue load rejected");
        }
    });

    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
