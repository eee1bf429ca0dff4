use anyhow::Result;
use clap::Parser;
use stellina::cli::CliArgs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let default_filter = if args.debug {
        "stellina=debug,tower_http=debug"
    } else {
        "stellina=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    stellina::run(args).await
}
