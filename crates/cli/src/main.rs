//! Command-line view of the finals dataset.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cupdash_client::{load_dataset, source_from_config};
use cupdash_core::dashboard::{country_wins_text, final_result_text};
use cupdash_core::{AppConfig, Dataset, Error};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read the finals page from a saved HTML file instead of fetching it
    #[arg(short, long, env = "CUPDASH_SOURCE_FILE")]
    source_file: Option<PathBuf>,

    /// Print JSON instead of plain text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every final as year, winner, runner-up
    Records,
    /// Wins per country
    Wins,
    /// How often one country has won
    Country { name: String },
    /// Result of the final in one year
    Year { year: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if cli.source_file.is_some() {
        config.source_file = cli.source_file.clone();
    }

    let source = source_from_config(&config)?;
    let dataset = match load_dataset(source.as_ref(), &config.caption).await {
        Ok(dataset) => dataset,
        Err(err @ Error::TableNotFound(_)) => {
            tracing::error!("{err}");
            eprintln!("Could not find the correct table.");
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    println!("{}", render(&cli.command, &dataset, cli.json)?);
    Ok(())
}

fn render(command: &Commands, dataset: &Dataset, json: bool) -> Result<String> {
    let out = match command {
        Commands::Records if json => serde_json::to_string_pretty(&dataset.records)?,
        Commands::Records => dataset
            .records
            .iter()
            .map(|r| format!("{}\t{}\t{}", r.year, r.winner, r.runner_up))
            .collect::<Vec<_>>()
            .join("\n"),
        Commands::Wins if json => serde_json::to_string_pretty(&dataset.win_counts)?,
        Commands::Wins => dataset
            .win_counts
            .iter()
            .map(|c| format!("{}\t{}", c.country, c.wins))
            .collect::<Vec<_>>()
            .join("\n"),
        Commands::Country { name } => text_or_json(country_wins_text(dataset, Some(name)), json)?,
        Commands::Year { year } => text_or_json(final_result_text(dataset, Some(year)), json)?,
    };
    Ok(out)
}

fn text_or_json(text: String, json: bool) -> Result<String> {
    if json { Ok(serde_json::to_string(&serde_json::json!({ "text": text }))?) } else { Ok(text) }
}
