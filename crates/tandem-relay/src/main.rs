//! tandem-relay binary: load config, set up logging, serve until ctrl-c.

mod cli;

use tandem_common::{ConfigError, TandemError};
use tandem_config::{LoggingConfig, TandemConfig};
use tandem_relay::Relay;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = cli::parse();

    if let Some(path) = &args.init_config {
        match tandem_config::create_default_config(path) {
            Ok(()) => println!("wrote default config to {}", path.display()),
            Err(e) => {
                eprintln!("failed to write config: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    // Config is read before logging is initialized so its level applies.
    let loaded = tandem_config::load_config(args.config.as_deref());
    let logging = loaded
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(args.log_level.as_deref(), &logging))
        .with_ansi(logging.ansi)
        .init();

    let result = match resolve_config(loaded, args.config.is_some()) {
        Ok(mut config) => {
            if let Some(host) = args.host {
                config.server.host = host;
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }
            run(config).await
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "tandem-relay exited with error");
        std::process::exit(1);
    }
}

/// `--log-level` wins, then `RUST_LOG`, then the configured level.
fn env_filter(cli_directive: Option<&str>, logging: &LoggingConfig) -> EnvFilter {
    match cli_directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(logging.directive())),
    }
}

/// A config file named on the command line must load; the default
/// location may fail, in which case the built-in defaults are used.
fn resolve_config(
    loaded: Result<TandemConfig, ConfigError>,
    explicit: bool,
) -> tandem_common::Result<TandemConfig> {
    match loaded {
        Ok(config) => Ok(config),
        Err(e) if explicit => Err(TandemError::Config(e)),
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            Ok(TandemConfig::default())
        }
    }
}

async fn run(config: TandemConfig) -> tandem_common::Result<()> {
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        path = %config.server.path,
        "tandem-relay v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let relay = Relay::from_config(&config);
    relay
        .serve(listener, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
        })
        .await;

    Ok(())
}
