//! The `seo backfill` command.
//!
//! Loads a JSON content file, finds fragments missing SEO metadata, runs
//! the pipeline for each, and writes the generated values back. Existing
//! values are never overwritten.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use uuid::Uuid;

use seo_pipeline::{
    Fragment, FragmentStore, JsonFileStore, OpenAiBackend, SeoFields, SeoPipeline,
};

pub struct BackfillArgs {
    pub fragment: Option<Uuid>,
    pub fragment_type: Option<String>,
    pub content: String,
    pub properties: Vec<String>,
    pub dry_run: bool,
}

pub async fn run(args: BackfillArgs) -> Result<()> {
    let store = JsonFileStore::load(&args.content)
        .with_context(|| format!("Failed to load content file: {}", args.content))?;

    let backend = OpenAiBackend::from_env().context("Failed to create OpenAI backend")?;
    let mut pipeline = SeoPipeline::new(Arc::new(backend));
    if !args.properties.is_empty() {
        pipeline = pipeline.with_property_names(args.properties.clone());
    }

    let targets: Vec<Fragment> = match (&args.fragment, &args.fragment_type) {
        (Some(id), None) => match store.get(*id).await? {
            Some(fragment) => vec![fragment],
            None => {
                println!("{}", format!("No fragment found with identifier {}.", id).yellow());
                return Ok(());
            }
        },
        (None, Some(fragment_type)) => {
            let found = store.find_by_type(fragment_type).await?;
            if found.is_empty() {
                println!(
                    "{}",
                    format!("There are no fragments with the type: {}.", fragment_type).yellow()
                );
                return Ok(());
            }
            found
        }
        _ => bail!("Specify either --fragment or --fragment-type."),
    };

    let mut updated = 0usize;
    let mut skipped = 0usize;

    for fragment in &targets {
        let title = fragment.property("title").unwrap_or("untitled").to_string();

        if !fragment.property_is_empty("metaKeywords")
            && !fragment.property_is_empty("metaDescription")
        {
            println!("{}", format!("The fragment \"{}\" has SEO data set.", title).green());
            skipped += 1;
            continue;
        }

        let fields = pipeline
            .generate(fragment)
            .await
            .with_context(|| format!("Generation failed for fragment \"{}\"", title))?;

        if fields.is_empty() {
            println!(
                "{}",
                format!("The backend returned nothing usable for \"{}\".", title).yellow()
            );
            continue;
        }

        let writes = missing_property_writes(fragment, &fields);

        if args.dry_run {
            println!("{}", format!("Would update \"{}\":", title).green());
            for (name, value) in &writes {
                println!("  {} = {}", name, value);
            }
        } else {
            store.update_properties(fragment.id, &writes).await?;
            println!("{}", format!("Updated SEO data for: \"{}\"", title).green());
        }
        updated += 1;
    }

    println!();
    println!("{}", format!("{} updated, {} skipped.", updated, skipped).bold());

    Ok(())
}

/// Writes for the SEO properties the fragment is missing.
///
/// Existing values stay untouched; the generated text only fills the
/// blanks. Both values come from the generated fields, not from any
/// other fragment property.
fn missing_property_writes(fragment: &Fragment, fields: &SeoFields) -> Vec<(String, String)> {
    let mut writes = Vec::new();
    if fragment.property_is_empty("metaKeywords") {
        writes.push(("metaKeywords".to_string(), fields.meta_keywords.clone()));
    }
    if fragment.property_is_empty("metaDescription") {
        writes.push(("metaDescription".to_string(), fields.meta_description.clone()));
    }
    writes
}
