mod config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use config::{get_config_manager, ClientConfig, MAX_BOT_DELAY_MS};
