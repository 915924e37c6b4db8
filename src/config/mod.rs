mod settings;

pub use settings::{CacheConfig, Settings, SourceConfig, load_settings, settings_from};
