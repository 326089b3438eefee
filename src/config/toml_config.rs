use crate::core::ConfigProvider;
use crate::utils::error::{Result, SyncError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULTS_FILENAME: &str = "config.defaults.toml";
pub const LOCAL_FILENAME: &str = "config.local.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    pub basecamp: BasecampConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BasecampConfig {
    pub url: String,
    pub token: Option<String>,
    pub project_id: Option<String>,
    pub default_assignee_id: Option<String>,
    #[serde(default = "default_true")]
    pub use_only_first_name: bool,
}

fn default_true() -> bool {
    true
}

impl TomlConfig {
    /// 從設定目錄載入 `config.defaults.toml`，再以 `config.local.toml` 覆寫
    pub fn load_layered<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let defaults_path = dir.join(DEFAULTS_FILENAME);
        let defaults = std::fs::read_to_string(&defaults_path).map_err(|e| SyncError::Config {
            message: format!("cannot read {}: {}", defaults_path.display(), e),
        })?;

        let local_path = dir.join(LOCAL_FILENAME);
        let local = if local_path.exists() {
            tracing::debug!("Applying local overrides from {}", local_path.display());
            Some(std::fs::read_to_string(&local_path)?)
        } else {
            None
        };

        let mut layers = vec![defaults.as_str()];
        if let Some(local) = &local {
            layers.push(local.as_str());
        }
        Self::from_layers(&layers)
    }

    /// 依序合併多層 TOML 內容，後面的層覆寫前面的層
    pub fn from_layers(layers: &[&str]) -> Result<Self> {
        let mut merged = toml::Table::new();
        for layer in layers {
            let table = Self::parse_table(layer)?;
            merge_tables(&mut merged, table);
        }

        merged.try_into().map_err(|e| SyncError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 從單一 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_layers(&[content])
    }

    fn parse_table(content: &str) -> Result<toml::Table> {
        let processed_content = Self::substitute_env_vars(content)?;
        toml::from_str(&processed_content).map_err(|e| SyncError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BASECAMP_TOKEN})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SyncError::Config {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let section = &self.basecamp;
        validation::validate_url("basecamp.url", &section.url)?;

        let token = validation::validate_required_field("basecamp.token", &section.token)?;
        validation::validate_non_empty_string("basecamp.token", token)?;
        validation::validate_expanded("basecamp.token", token)?;

        let project_id =
            validation::validate_required_field("basecamp.project_id", &section.project_id)?;
        validation::validate_non_empty_string("basecamp.project_id", project_id)?;

        let default_id = validation::validate_required_field(
            "basecamp.default_assignee_id",
            &section.default_assignee_id,
        )?;
        validation::validate_non_empty_string("basecamp.default_assignee_id", default_id)?;

        Ok(())
    }
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.basecamp.url
    }

    fn token(&self) -> &str {
        self.basecamp.token.as_deref().unwrap_or_default()
    }

    fn project_id(&self) -> &str {
        self.basecamp.project_id.as_deref().unwrap_or_default()
    }

    fn default_assignee_id(&self) -> &str {
        self.basecamp.default_assignee_id.as_deref().unwrap_or_default()
    }

    fn use_only_first_name(&self) -> bool {
        self.basecamp.use_only_first_name
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
