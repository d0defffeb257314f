mod input;
mod menu;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use electra_catalog::Catalog;
use electra_store::app_config::Config;
use electra_store::FileSnapshotRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Console inventory manager for electronic retail items
#[derive(Debug, Parser)]
#[command(name = "electra", version, about)]
struct Cli {
    /// Override the snapshot file path from the configuration
    #[arg(long, value_name = "PATH")]
    data_file: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "electra_cli=info,electra_store=info,electra_catalog=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load config")?;
    let data_path = cli.data_file.unwrap_or(config.store.data_path);
    let repository = FileSnapshotRepository::new(data_path);

    // Any load failure means "no prior data": first run, or an unreadable
    // snapshot; either way the session starts empty
    let catalog = match repository.load_snapshot() {
        Ok(catalog) => {
            println!("{}", "Previous data loaded.".green());
            catalog
        }
        Err(err) => {
            tracing::debug!(%err, path = %repository.path().display(), "starting empty");
            println!("No previous data found.");
            Catalog::new()
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    menu::run(catalog, &repository, &mut stdin.lock(), &mut stdout.lock())
}
