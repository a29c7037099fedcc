//! Security posture snapshot and developer notices

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityReport {
    pub magic_quotes_gpc: bool,
    pub register_globals: bool,
    /// Main config file is writable by the server process.
    pub config_writable: bool,
    /// App/temp directory is not web-exposed, or carries a protective `.htaccess`.
    pub app_htaccess: bool,
    pub security_center_active: bool,
    pub ids_enabled: bool,
    pub ids_soft_block: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeveloperFlag {
    pub key: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeveloperNotices {
    pub dev_mode: bool,
    pub css_js_combine: bool,
    pub render: Vec<DeveloperFlag>,
    pub theme: Vec<DeveloperFlag>,
}
