use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::paths;
use crate::translation::{
    ApiKey, ClientConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT,
    Language, LanguageError, parse_source_language, parse_target_language,
};

/// Environment variable read for the API key when none is configured.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Settings in the `[translator]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Base URL of the generative language API.
    pub endpoint: Option<String>,
    /// Model name, e.g. `gemini-3-flash-preview`.
    pub model: Option<String>,
    /// API key stored directly in config (not recommended).
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Default source language (code or name).
    pub from: Option<String>,
    /// Default target language (code or name).
    pub to: Option<String>,
    /// Dictation command used for voice input.
    pub speech_command: Option<String>,
}

impl TranslatorConfig {
    /// Name of the environment variable holding the API key.
    pub fn api_key_env(&self) -> &str {
        self.api_key_env
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_API_KEY_ENV)
    }

    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(self.api_key_env())
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone().filter(|key| !key.is_empty())
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/quick-translator/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub translator: TranslatorConfig,
}

impl ConfigFile {
    /// A starter file with every default spelled out.
    pub fn starter() -> Self {
        Self {
            translator: TranslatorConfig {
                endpoint: Some(DEFAULT_ENDPOINT.to_string()),
                model: Some(DEFAULT_MODEL.to_string()),
                api_key: None,
                api_key_env: Some(DEFAULT_API_KEY_ENV.to_string()),
                temperature: Some(DEFAULT_TEMPERATURE),
                timeout_secs: Some(DEFAULT_TIMEOUT.as_secs()),
                from: Some(Language::DEFAULT_SOURCE.label().to_string()),
                to: Some(Language::DEFAULT_TARGET.label().to_string()),
                speech_command: None,
            },
        }
    }
}

/// Resolved configuration after merging CLI arguments, config file and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub model: String,
    /// The API key, if one was found.
    pub api_key: Option<ApiKey>,
    /// Where the key was looked up, for messages.
    pub api_key_env: String,
    pub temperature: f32,
    pub timeout: Duration,
    pub source: Language,
    pub target: Language,
    pub speech_command: Option<String>,
}

impl ResolvedConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
            api_key: self.api_key.clone(),
            temperature: self.temperature,
            timeout: self.timeout,
        }
    }
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Source language override.
    pub from: Option<String>,
    /// Target language override.
    pub to: Option<String>,
    /// Model name override.
    pub model: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then config file, then built-in default. A missing
/// API key is not an error here; the client reports it when used.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let file = &config_file.translator;

    let source = resolve_language(
        options.from.as_deref(),
        file.from.as_deref(),
        "from",
        Language::DEFAULT_SOURCE,
        parse_source_language,
    )?;
    let target = resolve_language(
        options.to.as_deref(),
        file.to.as_deref(),
        "to",
        Language::DEFAULT_TARGET,
        parse_target_language,
    )?;

    let model = options
        .model
        .as_ref()
        .or(file.model.as_ref())
        .filter(|m| !m.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let endpoint = file
        .endpoint
        .clone()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let temperature = file.temperature.unwrap_or(DEFAULT_TEMPERATURE);
    if !(0.0..=2.0).contains(&temperature) {
        bail!(
            "Invalid configuration: 'temperature' must be between 0.0 and 2.0 (got {temperature})"
        );
    }

    let timeout = match file.timeout_secs {
        Some(0) => bail!("Invalid configuration: 'timeout_secs' must be greater than 0"),
        Some(secs) => Duration::from_secs(secs),
        None => DEFAULT_TIMEOUT,
    };

    Ok(ResolvedConfig {
        endpoint,
        model,
        api_key: file.get_api_key().map(ApiKey::new),
        api_key_env: file.api_key_env().to_string(),
        temperature,
        timeout,
        source,
        target,
        speech_command: file.speech_command.clone().filter(|c| !c.trim().is_empty()),
    })
}

fn resolve_language(
    cli: Option<&str>,
    file: Option<&str>,
    key: &str,
    default: Language,
    parse: fn(&str) -> Result<Language, LanguageError>,
) -> Result<Language> {
    if let Some(value) = cli {
        return parse(value).map_err(Into::into);
    }
    match file {
        Some(value) => parse(value)
            .with_context(|| format!("Invalid '{key}' language in config file: '{value}'")),
        None => Ok(default),
    }
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/quick-translator/config.toml`
    /// or `~/.config/quick-translator/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a manager for an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the file, treating a missing file as an empty configuration.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_optional(&self) -> Result<ConfigFile> {
        match fs::metadata(&self.config_path) {
            Ok(_) => self.load(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ConfigFile::default()),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to access config file: {}", self.config_path.display())
            }),
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }
}
