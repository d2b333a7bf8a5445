use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".transpatchrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// File holding the embedded locale table; CLI `--file` overrides.
    #[serde(default)]
    pub source_file: Option<String>,
    /// Section whose entries are translated.
    #[serde(default = "default_base_section")]
    pub base_section: String,
    /// Section after which generated sections are inserted.
    #[serde(default = "default_reference_section")]
    pub reference_section: String,
    /// Target languages, in injection order.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    /// Optional JSON terms file merged over the built-in dictionaries.
    #[serde(default)]
    pub terms_file: Option<String>,
}

fn default_base_section() -> String {
    "en".to_string()
}

fn default_reference_section() -> String {
    "pl".to_string()
}

fn default_languages() -> Vec<String> {
    ["de", "fr", "it", "es", "pt", "cs", "sk", "ro", "nl"]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_file: None,
            base_section: default_base_section(),
            reference_section: default_reference_section(),
            languages: default_languages(),
            terms_file: None,
        }
    }
}

fn is_language_code(code: &str) -> bool {
    let mut chars = code.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    code.len() <= 8
        && first.is_ascii_lowercase()
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

impl Config {
    /// Validate configuration values.
    ///
    /// Section names and language codes share the marker-line grammar, so
    /// anything that would not round-trip as `"<name>: {"` is rejected
    /// before it can touch a document.
    pub fn validate(&self) -> Result<()> {
        for name in [&self.base_section, &self.reference_section] {
            if !is_language_code(name) {
                bail!("Invalid section name: \"{}\"", name);
            }
        }
        if self.base_section == self.reference_section {
            bail!("baseSection and referenceSection must differ");
        }
        for code in &self.languages {
            if !is_language_code(code) {
                bail!("Invalid language code in 'languages': \"{}\"", code);
            }
            if code == &self.base_section || code == &self.reference_section {
                bail!(
                    "Language \"{}\" is already a source section and cannot be generated",
                    code
                );
            }
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
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
