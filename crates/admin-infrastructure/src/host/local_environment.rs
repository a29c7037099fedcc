// ============================================================================
// Admin Infrastructure - Local Host Environment
// File: crates/admin-infrastructure/src/host/local_environment.rs
// ============================================================================

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use admin_core::repositories::HostEnvironment;
use admin_shared::config::HostSettings;

/// Host facts read from settings plus live filesystem checks.
///
/// Relative config and recovery console paths resolve against the
/// install directory.
pub struct LocalHostEnvironment {
    settings: HostSettings,
    legacy_directives: HashSet<String>,
    available_modules: HashSet<String>,
    development_mode: bool,
}

impl LocalHostEnvironment {
    pub fn new(settings: HostSettings, development_mode: bool) -> Self {
        let legacy_directives = settings
            .legacy_directives
            .iter()
            .map(|d| d.to_ascii_lowercase())
            .collect();
        let available_modules = settings.available_modules.iter().cloned().collect();

        Self { settings, legacy_directives, available_modules, development_mode }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.install_dir().join(path)
        }
    }
}

impl HostEnvironment for LocalHostEnvironment {
    fn legacy_directive_enabled(&self, name: &str) -> bool {
        self.legacy_directives.contains(&name.to_ascii_lowercase())
    }

    fn is_writable(&self, path: &Path) -> bool {
        // Opening for append never truncates and fails on read-only files.
        OpenOptions::new().append(true).open(path).is_ok()
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn document_root(&self) -> String {
        self.settings.document_root.clone()
    }

    fn app_dir(&self) -> Option<String> {
        self.settings.app_dir.clone()
    }

    fn install_dir(&self) -> PathBuf {
        PathBuf::from(&self.settings.install_dir)
    }

    fn config_file(&self) -> PathBuf {
        self.resolve(&self.settings.config_file)
    }

    fn recovery_console_file(&self) -> PathBuf {
        self.resolve(&self.settings.recovery_console_file)
    }

    fn module_available(&self, name: &str) -> bool {
        self.available_modules.contains(name)
    }

    fn is_development_mode(&self) -> bool {
        self.development_mode
    }
}
