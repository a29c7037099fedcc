// ============================================================================
// Admin Core - Security Service
// File: crates/admin-core/src/services/security_service.rs
// ============================================================================
//! Read-only security posture snapshot and developer notices

use std::path::Path;
use std::sync::Arc;

use admin_shared::constants::{SECURITY_CENTER_MODULE, SYSTEM_NAMESPACE, THEME_NAMESPACE};

use crate::domain::vars;
use crate::domain::{DeveloperFlag, DeveloperNotices, SecurityReport};
use crate::error::DomainError;
use crate::repositories::{ConfigStore, HostEnvironment};

const RENDER_FLAGS: [(&str, &str, &str); 3] = [
    ("render_compile_check", "compile_check", "Compile check"),
    ("render_force_compile", "force_compile", "Force compile"),
    ("render_cache", "cache", "Caching"),
];

const THEME_FLAGS: [(&str, &str, &str); 3] = [
    ("compile_check", "compile_check", "Compile check"),
    ("force_compile", "force_compile", "Force compile"),
    ("enablecache", "cache", "Caching"),
];

pub struct SecurityService {
    host: Arc<dyn HostEnvironment>,
    config: Arc<dyn ConfigStore>,
}

impl SecurityService {
    pub fn new(host: Arc<dyn HostEnvironment>, config: Arc<dyn ConfigStore>) -> Self {
        Self { host, config }
    }

    pub async fn report(&self) -> Result<SecurityReport, DomainError> {
        let system = self.config.get_all(SYSTEM_NAMESPACE).await?;
        let security_center_active = self.host.module_available(SECURITY_CENTER_MODULE);

        Ok(SecurityReport {
            magic_quotes_gpc: self.host.legacy_directive_enabled("magic_quotes_gpc"),
            register_globals: self.host.legacy_directive_enabled("register_globals"),
            config_writable: self.host.is_writable(&self.host.config_file()),
            app_htaccess: app_dir_protected(
                self.host.app_dir().as_deref(),
                &self.host.document_root(),
                &self.host.install_dir(),
                |path| self.host.file_exists(path),
            ),
            security_center_active,
            ids_enabled: security_center_active && vars::get_i64(&system, "useids") == Some(1),
            ids_soft_block: vars::get_bool(&system, "idssoftblock").unwrap_or(false),
        })
    }

    /// Render and theme caching flags worth flagging in development mode
    pub async fn developer_notices(&self) -> Result<DeveloperNotices, DomainError> {
        if !self.host.is_development_mode() {
            return Ok(DeveloperNotices::default());
        }

        let theme = self.config.get_all(THEME_NAMESPACE).await?;
        let enabled = |flags: &[(&str, &str, &str)]| -> Vec<DeveloperFlag> {
            flags
                .iter()
                .filter(|(var, _, _)| vars::get_bool(&theme, var).unwrap_or(false))
                .map(|(_, key, title)| DeveloperFlag { key: key.to_string(), title: title.to_string() })
                .collect()
        };

        Ok(DeveloperNotices {
            dev_mode: true,
            css_js_combine: vars::get_bool(&theme, "cssjscombine").unwrap_or(false),
            render: enabled(&RENDER_FLAGS[..]),
            theme: enabled(&THEME_FLAGS[..]),
        })
    }
}

/// Whether the app/temp directory is safe from direct web access.
///
/// No configured directory, or an absolute one outside the document root, is
/// safe. A relative directory resolves against the install directory; any
/// directory that may be web-exposed must carry a `.htaccess` file.
pub fn app_dir_protected(
    app_dir: Option<&str>,
    document_root: &str,
    install_dir: &Path,
    exists: impl Fn(&Path) -> bool,
) -> bool {
    let Some(app_dir) = app_dir.filter(|d| !d.is_empty()) else {
        return true;
    };

    let inside_docroot = !document_root.is_empty() && app_dir.contains(document_root);
    if Path::new(app_dir).is_absolute() && !inside_docroot {
        return true;
    }

    let htaccess = if inside_docroot {
        Path::new(app_dir).join(".htaccess")
    } else {
        install_dir.join(app_dir).join(".htaccess")
    };
    exists(&htaccess)
}
