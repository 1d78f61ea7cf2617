use crate::app;
use crate::commands::ConfigArgs;
use eyre::WrapErr;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

pub async fn execute(bind: Option<SocketAddr>, args: ConfigArgs) -> eyre::Result<()> {
    let config = Arc::new(app::load_config(&args, bind)?);
    let router = app::build_router(&config)?;

    let listener = TcpListener::bind(config.server.bind_addr)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.server.bind_addr))?;
    info!(addr = %listener.local_addr()?, "listo API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("server terminated unexpectedly")?;

    info!("listo API stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested, draining connections"),
        Err(e) => {
            warn!("cannot listen for Ctrl-C, serving until killed: {e}");
            std::future::pending::<()>().await;
        }
    }
}
