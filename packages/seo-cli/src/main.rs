//! Batch back-fill CLI for SEO metadata.
//!
//! Walks content fragments and fills in missing `metaKeywords` /
//! `metaDescription` properties through the generation pipeline.

use anyhow::Result;
use clap::{Parser, Subcommand};
use uuid::Uuid;

mod backfill;

#[derive(Parser)]
#[command(name = "seo")]
#[command(about = "SEO metadata batch tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in missing SEO properties for matching fragments
    Backfill {
        /// Identifier of a single fragment to update
        #[arg(long, conflicts_with = "fragment_type")]
        fragment: Option<Uuid>,

        /// Update every fragment of this type instead
        #[arg(long)]
        fragment_type: Option<String>,

        /// Path to the JSON content file
        #[arg(long)]
        content: String,

        /// Text property harvested from each fragment (repeatable)
        #[arg(long = "property")]
        properties: Vec<String>,

        /// Generate but do not write anything back
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Backfill {
            fragment,
            fragment_type,
            content,
            properties,
            dry_run,
        } => {
            backfill::run(backfill::BackfillArgs {
                fragment,
                fragment_type,
                content,
                properties,
                dry_run,
            })
            .await
        }
    }
}
