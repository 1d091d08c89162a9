use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".lingotrc.json";

/// Locale identifiers recognized out of the box.
pub const DEFAULT_SUPPORTED_LOCALES: &[&str] = &[
    "ja", "en-US", "en-GB", "fr", "fr-CA", "de", "it", "es", "zh-CN", "zh-Hans", "zh-Hant",
    "zh-TW", "ko", "nl", "pt", "pt-BR", "ru", "es-419",
];

pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Folder names accepted as locales; anything else is reported as
    /// unknown and skipped.
    #[serde(default = "default_supported_locales")]
    pub supported_locales: Vec<String>,
    /// The locale both cross-locale checks are anchored to.
    #[serde(default = "default_default_locale")]
    pub default_locale: String,
}

fn default_supported_locales() -> Vec<String> {
    DEFAULT_SUPPORTED_LOCALES.iter().map(|s| s.to_string()).collect()
}

fn default_default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            supported_locales: default_supported_locales(),
            default_locale: default_default_locale(),
        }
    }
}

impl Config {
    pub fn is_supported_locale(&self, name: &str) -> bool {
        self.supported_locales.iter().any(|locale| locale == name)
    }

    /// Validate configuration values.
    ///
    /// Returns an error if the supported set is empty or does not contain
    /// the default locale.
    pub fn validate(&self) -> Result<()> {
        if self.supported_locales.is_empty() {
            bail!("'supportedLocales' must not be empty");
        }
        if !self.is_supported_locale(&self.default_locale) {
            bail!(
                "Default locale \"{}\" is not in 'supportedLocales'",
                self.default_locale
            );
        }
        Ok(())
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
