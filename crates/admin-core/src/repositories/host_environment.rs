//! Local host checks used by the security snapshot and installer check

use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait HostEnvironment: Send + Sync {
    fn legacy_directive_enabled(&self, name: &str) -> bool;
    fn is_writable(&self, path: &std::path::Path) -> bool;
    fn file_exists(&self, path: &std::path::Path) -> bool;
    fn document_root(&self) -> String;
    fn app_dir(&self) -> Option<String>;
    fn install_dir(&self) -> PathBuf;
    fn config_file(&self) -> PathBuf;
    fn recovery_console_file(&self) -> PathBuf;
    fn module_available(&self, name: &str) -> bool;
    fn is_development_mode(&self) -> bool;
}
