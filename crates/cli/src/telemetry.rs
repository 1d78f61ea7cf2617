use listo_core::constants::LISTO_LOG_VAR;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing system
///
/// The filter comes from `LISTO_LOG`, then `RUST_LOG`, then `info`. Output
/// goes to stderr in the compact format, colored only on a terminal.
pub fn init() -> eyre::Result<()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter())
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LISTO_LOG_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn is_tty() -> bool {
    std::io::stderr().is_terminal()
}
