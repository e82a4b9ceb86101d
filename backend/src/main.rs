use dotenvy::dotenv;
use spllit_host::{app, HostConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,spllit_host=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = HostConfig::from_env()?;
    config.validate()?;

    tracing::info!("Serving {} on port {}", config.dist_dir.display(), config.port);
    let listener = TcpListener::bind(config.addr()).await?;
    axum::serve(listener, app(&config).into_make_service()).await?;
    Ok(())
}
