use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone, PartialEq, Eq)]
#[command(name = "stellina")]
#[command(
    about = "Bedtime sky stories for the celestial object over your head tonight",
    long_about = "Bedtime sky stories for the celestial object over your head tonight\n\nConfig file loading:\n  - --config <path> (explicit file, overrides default path discovery)\n  - Default probe path when --config is not provided:\n    1. $XDG_CONFIG_HOME/stellina/config.toml\n    2. ~/.config/stellina/config.toml"
)]
pub struct CliArgs {
    /// Load config from this file path instead of the default discovery path.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Address the web app listens on.
    #[arg(
        short,
        long,
        env = "STELLINA_BIND",
        default_value = "127.0.0.1:7860",
        value_name = "ADDR"
    )]
    pub bind: SocketAddr,

    /// Log at debug level (RUST_LOG still wins when set).
    #[arg(long)]
    pub debug: bool,
}
