mod host;
mod search;
mod update;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "locfetch-cli")]
#[command(about = "Location search and Sitecore field-update command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the search widget headlessly against a console host
    Search(search::SearchArgs),
    /// Exchange credentials and update one Sitecore item field directly
    UpdateField(update::UpdateFieldArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(std::env::var("LOCFETCH_LOG_LEVEL").unwrap_or_else(|_| "info".into()))
    })?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search(args)) => search::run_search(args).await?,
        Some(Commands::UpdateField(args)) => update::run_update_field(args).await?,
        None => println!("locfetch-cli: run with --help to list commands"),
    }

    Ok(())
}
