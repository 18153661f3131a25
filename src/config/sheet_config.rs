use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_path, validate_sheet_id, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_SHEET_ID: &str = "1pM8fMy2IVe_Sj1mBieFpMxO_to0Z6GDcirbUUZwCT9E";
pub const DEFAULT_BASE_URL: &str = "https://docs.google.com";
pub const DEFAULT_OUTPUT_FILE: &str = "data/giveaways.json";

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    pub sheet_id: String,
    pub base_url: String,
    pub output_file: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            sheet_id: DEFAULT_SHEET_ID.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

/// On-disk TOML layout. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceSection,
    #[serde(default)]
    pub load: LoadSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceSection {
    pub sheet_id: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadSection {
    pub output_file: Option<String>,
}

impl TomlConfig {
    /// Loads a config file; see [`TomlConfig::from_toml_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
fn substitute_env_vars(content: &str) -> String {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex"));

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

impl SheetConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::default().merge(TomlConfig::from_file(path)?))
    }

    /// Values present in `file` replace the current ones.
    pub fn merge(mut self, file: TomlConfig) -> Self {
        if let Some(sheet_id) = file.source.sheet_id {
            self.sheet_id = sheet_id;
        }
        if let Some(base_url) = file.source.base_url {
            self.base_url = base_url;
        }
        if let Some(output_file) = file.load.output_file {
            self.output_file = output_file;
        }
        self
    }
}

impl ConfigProvider for SheetConfig {
    fn sheet_id(&self) -> &str {
        &self.sheet_id
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}

impl Validate for SheetConfig {
    fn validate(&self) -> Result<()> {
        validate_sheet_id("source.sheet_id", &self.sheet_id)?;
        validate_url("source.base_url", &self.base_url)?;
        validate_path("load.output_file", &self.output_file)?;
        Ok(())
    }
}
