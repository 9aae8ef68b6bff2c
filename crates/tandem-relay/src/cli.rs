use std::path::PathBuf;

use clap::Parser;

/// Room-scoped WebSocket relay for paired speaking practice.
#[derive(Parser, Debug)]
#[command(name = "tandem-relay", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Interface to bind (overrides config).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config).
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log filter override, e.g. "tandem_relay=debug".
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write a commented default config to this path and exit.
    #[arg(long, value_name = "PATH")]
    pub init_config: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}
