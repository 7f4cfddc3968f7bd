mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, ResolveOptions, ResolvedConfig,
    TranslatorConfig, resolve_config,
};
