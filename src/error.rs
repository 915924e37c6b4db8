use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Inventory login failed: {0}")]
    Login(String),

    #[error("Inventory traversal failed: {0}")]
    Fetch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
