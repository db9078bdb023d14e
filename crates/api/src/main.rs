use anyhow::Context;

use biosite_api::{app, config::SiteConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    biosite_observability::init();

    let config = SiteConfig::from_env().context("invalid configuration")?;
    let app = app::build_app(&config).context("failed to initialise services")?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
