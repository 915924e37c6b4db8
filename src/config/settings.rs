use crate::error::{InventoryError, Result};
use crate::lookup::{DEFAULT_PATH_SEPARATOR, RefreshPolicy};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Settings {
    pub source: SourceConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub snapshot_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub policy: RefreshPolicy,
    pub path_separator: String,
}

pub fn load_settings() -> Result<Settings> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    settings_from(|key| std::env::var(key).ok())
}

/// Build settings from any key lookup (the process environment in production)
pub fn settings_from(var: impl Fn(&str) -> Option<String>) -> Result<Settings> {
    let source = SourceConfig {
        snapshot_path: var("INVENTORY_SNAPSHOT_PATH")
            .ok_or_else(|| InventoryError::Config("INVENTORY_SNAPSHOT_PATH not set".to_string()))?
            .into(),
    };

    let ttl_secs: i64 = var("INVENTORY_CACHE_TTL_SECS")
        .unwrap_or_else(|| "120".to_string())
        .trim()
        .parse()
        .map_err(|_| InventoryError::Config("Invalid INVENTORY_CACHE_TTL_SECS".to_string()))?;

    let cache = CacheConfig {
        policy: RefreshPolicy::from_secs(ttl_secs),
        path_separator: var("INVENTORY_PATH_SEPARATOR")
            .unwrap_or_else(|| DEFAULT_PATH_SEPARATOR.to_string()),
    };

    Ok(Settings { source, cache })
}
