use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use services::config::*;
pub use services::output::*;
pub use services::source::*;

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "orgcheck=warn",
        1 => "orgcheck=info",
        _ => "orgcheck=debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let file = load_config(cli.config.as_deref())?;
    let config = resolve_scan_config(file, &cli)?;

    let outcome = handle_validate(&cli, &config)?;
    if config.fail_on_violations && outcome.has_violations() {
        std::process::exit(1);
    }

    Ok(())
}
