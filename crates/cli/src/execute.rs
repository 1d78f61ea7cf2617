use crate::commands::{check_config, serve, Commands};

impl Commands {
    pub async fn execute(self) -> eyre::Result<()> {
        match self {
            Commands::Serve { bind, config } => serve::execute(bind, config).await,
            Commands::CheckConfig { config } => check_config::execute(config),
        }
    }
}
