//! Application-wide constants

/// Config namespace holding the admin module variables.
pub const ADMIN_NAMESPACE: &str = "AdminModule";
/// Config namespace holding system-wide variables (update check, IDS).
pub const SYSTEM_NAMESPACE: &str = "System";
/// Config namespace of the theme module (developer notices).
pub const THEME_NAMESPACE: &str = "ThemeModule";

/// Companion module providing the security center / IDS.
pub const SECURITY_CENTER_MODULE: &str = "SecurityCenterModule";

pub const DEFAULT_ITEMS_PER_PAGE: u32 = 5;
pub const DEFAULT_MODULES_PER_ROW: u32 = 5;
pub const DEFAULT_START_CATEGORY: i64 = 1;
pub const DEFAULT_DEFAULT_CATEGORY: i64 = 1;

pub const DEFAULT_UPDATE_FREQUENCY_DAYS: i64 = 7;
pub const DEFAULT_UPDATE_TIMEOUT_SECS: u64 = 5;
pub const SECONDS_PER_DAY: i64 = 86_400;

pub const CSRF_COOKIE_NAME: &str = "admin_csrf";
pub const CSRF_HEADER_NAME: &str = "x-csrf-token";
pub const PRINCIPAL_HEADER_NAME: &str = "x-principal";
