//! browserless exporter
//!
//! Every scrape of the metrics path fetches browserless' `/metrics/total`
//! once and republishes it as Prometheus metrics.

use std::process::ExitCode;

use clap::Parser;
use tokio::net::TcpListener;

use browserless_exporter::{app_state::AppState, config, obs, router};
use browserless_exporter_core::error::Result;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = config::Cli::parse();
    let cfg = match config::resolve(cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            obs::logging::init(false);
            tracing::error!(error = %e, "failed to load config");
            return ExitCode::FAILURE;
        }
    };
    obs::logging::init(cfg.debug);

    match run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "exporter stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: config::ExporterConfig) -> Result<()> {
    tracing::info!(
        endpoint = %cfg.browserless_endpoint,
        timeout_secs = cfg.timeout_secs,
        metrics_path = %cfg.metrics_path,
        "starting browserless-exporter"
    );

    let listener = TcpListener::bind(cfg.listen_addr.as_str()).await?;
    let state = AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
