//! Configuration management

use std::collections::HashMap;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub update: UpdateSettings,
    pub host: HostSettings,
    #[serde(default)]
    pub permissions: Vec<PermissionRuleSettings>,
    #[serde(default)]
    pub seed: SeedSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Version of the running platform, compared against the remote version.
    pub running_version: String,
    /// Browser origins allowed to call the admin API; empty allows none.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl AppSettings {
    pub fn is_development(&self) -> bool {
        self.env == "development" || self.env == "dev"
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpdateSettings {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

/// Local paths and flags inspected by the security snapshot.
#[derive(Debug, Deserialize, Clone)]
pub struct HostSettings {
    pub document_root: String,
    /// Web-exposed temp/app directory; `None` means the operator customized it.
    pub app_dir: Option<String>,
    pub install_dir: String,
    pub config_file: String,
    pub recovery_console_file: String,
    /// Legacy runtime directives that are switched on.
    #[serde(default)]
    pub legacy_directives: Vec<String>,
    /// Modules installed and active on the host.
    #[serde(default)]
    pub available_modules: Vec<String>,
}

/// One row of the host permission table.
#[derive(Debug, Deserialize, Clone)]
pub struct PermissionRuleSettings {
    pub principal: String,
    pub component: String,
    pub instance: String,
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedSettings {
    #[serde(default)]
    pub categories: Vec<SeedCategory>,
    #[serde(default)]
    pub modules: Vec<SeedModule>,
    /// Initial key/value pairs per config namespace.
    #[serde(default)]
    pub vars: HashMap<String, HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedCategory {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedModule {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon_path: String,
    #[serde(default = "default_module_kind")]
    pub kind: String,
    /// Name of the category the module starts in.
    pub category: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_module_kind() -> String {
    "user".into()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    pub directory: Option<String>,
    pub file_prefix: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::builder(&env)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Load from an explicit file on top of the defaults (no environment).
    pub fn load_from(path: &str) -> Result<Self, AppError> {
        let config = Self::builder("development")?
            .add_source(File::with_name(path).required(true))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    fn builder(env: &str) -> Result<config::builder::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", env)?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "admin-server")?
            .set_default("app.running_version", "1.3.6")?
            .set_default("update.endpoint", "https://update.example.org/checkcoreversion")?
            .set_default("update.timeout_seconds", crate::constants::DEFAULT_UPDATE_TIMEOUT_SECS)?
            .set_default("host.document_root", "/var/www")?
            .set_default("host.install_dir", "/var/www")?
            .set_default("host.config_file", "config/config.php")?
            .set_default("host.recovery_console_file", "zrc.php")?
            .set_default("log.level", "info")?
            .set_default("log.file_prefix", "admin-server.log")
    }
}
