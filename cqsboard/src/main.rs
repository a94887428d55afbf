use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cqsboard::api::{create_router, AppState};
use cqsboard::config::{Config, SourceLocation};
use cqsboard::source;

#[derive(Parser)]
#[command(name = "cqsboard")]
#[command(about = "Comment-quality marketing dashboard server")]
struct Args {
    /// Serve the built-in demo data instead of DASHBOARD_SOURCE
    #[arg(long, conflicts_with = "source")]
    mock: bool,

    /// Dashboard source: `mock`, `file:<path>`, a path or an http(s) URL
    #[arg(long, value_name = "LOCATION")]
    source: Option<SourceLocation>,

    /// Load the dashboard document once, log a summary and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cqsboard=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if args.mock {
        config.source.location = SourceLocation::Mock;
    } else if let Some(location) = args.source {
        config.source.location = location;
    }

    if args.check {
        return check_source(&config).await;
    }

    tracing::info!("Dashboard source: {}", config.source.location);

    let cancel_token = CancellationToken::new();
    let state = AppState::from_config(config.clone(), cancel_token.child_token());
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("cqsboard starting on http://{}", addr);
    tracing::info!("  Dashboard:    http://{}/", addr);
    tracing::info!("  Upload page:  http://{}/upload", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI document: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token))
        .await?;

    Ok(())
}

async fn check_source(config: &Config) -> anyhow::Result<()> {
    let source = source::from_config(&config.source);
    let snapshot = source.load().await?;

    tracing::info!(
        source = %config.source.location,
        videos = snapshot.videos.len(),
        histories = snapshot.history.len(),
        product_categories = snapshot.product_discussion.len(),
        video_types = snapshot.video_types.len(),
        "Dashboard document is valid"
    );
    Ok(())
}

async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, cancelling uploads...");
    cancel_token.cancel();
}
