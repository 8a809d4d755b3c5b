use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use watchlog_config::ConfigLoader;
use watchlogctl::{
    cli::{Cli, Command},
    commands::{run_filter, run_schedule},
};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_path(path);
    }
    let loaded = loader.load()?;

    let output = match &cli.command {
        Command::Filter(args) => run_filter(args, &loaded.config)?,
        Command::Schedule(args) => run_schedule(args, &loaded.config)?,
    };
    println!("{output}");

    Ok(())
}
