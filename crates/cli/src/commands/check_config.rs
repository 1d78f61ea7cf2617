use crate::app;
use crate::commands::ConfigArgs;
use listo_config::Config;
use std::fmt::Write;

pub fn execute(args: ConfigArgs) -> eyre::Result<()> {
    let config = app::load_config(&args, None)?;
    print!("{}", summary(&config));
    Ok(())
}

/// Human-readable settings with the signing secret reduced to its length
pub fn summary(config: &Config) -> String {
    let mut out = String::new();
    let origins = if config.server.cors_origins.is_empty() {
        "any".to_string()
    } else {
        config.server.cors_origins.join(", ")
    };

    let _ = writeln!(out, "bind address:       {}", config.server.bind_addr);
    let _ = writeln!(out, "cors origins:       {origins}");
    let _ = writeln!(
        out,
        "signing secret:     set ({} bytes)",
        config.sharing.signing_secret.len()
    );
    let _ = writeln!(out, "share token ttl:    {:?}", config.sharing.token_validity);
    let _ = writeln!(out, "share code ttl:     {:?}", config.sharing.code_retention);
    match &config.identity {
        Some(identity) => {
            let _ = writeln!(out, "identity jwks:      {}", identity.jwks_url());
            let _ = writeln!(out, "identity audience:  {}", identity.audience);
        }
        None => {
            let _ = writeln!(out, "identity:           not configured (required by serve)");
        }
    }
    let _ = writeln!(out, "store timeout:      {:?}", config.timeouts.store);
    let _ = writeln!(out, "cache timeout:      {:?}", config.timeouts.cache);
    out
}
