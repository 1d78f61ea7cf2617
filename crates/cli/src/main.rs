use clap::Parser;
use listo::{telemetry, Cli};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    telemetry::init()?;

    let cli = Cli::parse();
    cli.command.execute().await
}
