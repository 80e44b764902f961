use clap::Parser;
use completions_proxy::{build_router, AppState, ProxyConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "completions-proxy",
    about = "Serve the legacy Completions API on top of a Chat Completions upstream",
    version
)]
struct Cli {
    /// Path to config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address (overrides config)
    #[arg(long)]
    listen: Option<String>,

    /// Upstream API endpoint base URL (overrides config)
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "completions_proxy=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = ProxyConfig::find_and_load(cli.config.as_deref())?;

    if let Some(listen) = cli.listen {
        config.listen = listen;
    }
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }

    info!("completions-proxy v{}", env!("CARGO_PKG_VERSION"));
    info!("  Upstream: {}", config.chat_completions_url());
    info!("  Listen:   {}", config.listen);

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(300))
        .build()?;

    let state = Arc::new(AppState {
        config: config.clone(),
        client,
    });

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.listen).await?;

    info!("Listening on http://{}", config.listen);

    axum::serve(listener, app).await?;

    Ok(())
}
