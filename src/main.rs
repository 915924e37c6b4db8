use anyhow::{Context, bail};
use inventory_lookup::config::load_settings;
use inventory_lookup::inventory::{FileSource, InventoryObject};
use inventory_lookup::logging::init_tracing;
use inventory_lookup::lookup::IdLookup;
use std::sync::Arc;

const USAGE: &str = "usage: inventory-lookup <objects.json> | --dump";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("inventory_lookup=info");

    let arg = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => bail!(USAGE),
    };

    // Load configuration
    let settings = load_settings()?;
    let source = Arc::new(FileSource::new(settings.source.snapshot_path.clone()));
    tracing::debug!(
        snapshot = %source.path().display(),
        ttl_secs = ?settings.cache.policy.as_secs(),
        "Configuration loaded"
    );

    let mut lookup = IdLookup::with_policy(source, settings.cache.policy);

    let output = if arg == "--dump" {
        lookup.ensure_fresh().await?;
        serde_json::to_string_pretty(&lookup.dump())?
    } else {
        let content = tokio::fs::read_to_string(&arg)
            .await
            .with_context(|| format!("reading objects from {}", arg))?;
        let mut objects: Vec<InventoryObject> =
            serde_json::from_str(&content).with_context(|| format!("parsing {}", arg))?;

        lookup
            .enrich_objects_with_separator(&mut objects, &settings.cache.path_separator)
            .await?;
        tracing::info!(objects = objects.len(), "Objects enriched");
        serde_json::to_string_pretty(&objects)?
    };

    println!("{}", output);
    lookup.close();
    Ok(())
}
