use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

pub mod check_config;
pub mod serve;

#[derive(Parser)]
#[command(name = "listo")]
#[command(about = "Checklist API with link-based sharing", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the HTTP API until interrupted
    Serve {
        /// Address to listen on (overrides LISTO_BIND_ADDR)
        #[arg(long, value_name = "ADDR")]
        bind: Option<SocketAddr>,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Load and validate configuration, then print the non-secret settings
    CheckConfig {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Load variables from this file before reading the environment
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}
