// ============================================================================
// Admin Core - Update Check Cache
// File: crates/admin-core/src/domain/update_check.rs
// Description: Persisted TTL cache for the remote version check
// ============================================================================

use admin_shared::constants::{DEFAULT_UPDATE_FREQUENCY_DAYS, SECONDS_PER_DAY};
use serde::Serialize;
use serde_json::json;

use super::vars::{self, Vars};

const KEY_ENABLED: &str = "updatecheck";
const KEY_LAST_CHECKED: &str = "updatelastchecked";
const KEY_FREQUENCY: &str = "updatefrequency";
const KEY_VERSION: &str = "updateversion";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCheckCache {
    pub enabled: bool,
    pub last_checked: i64,
    pub cached_version: String,
    pub check_interval_days: i64,
}

impl UpdateCheckCache {
    pub fn from_vars(vars: &Vars) -> Self {
        Self {
            enabled: vars::get_bool(vars, KEY_ENABLED).unwrap_or(false),
            last_checked: vars::get_i64(vars, KEY_LAST_CHECKED).unwrap_or(0),
            cached_version: vars::get_string(vars, KEY_VERSION).unwrap_or_default(),
            check_interval_days: vars::get_i64(vars, KEY_FREQUENCY)
                .unwrap_or(DEFAULT_UPDATE_FREQUENCY_DAYS),
        }
    }

    /// True while the cached version is younger than the check interval.
    pub fn is_fresh(&self, now: i64) -> bool {
        now.saturating_sub(self.last_checked) < self.check_interval_days.saturating_mul(SECONDS_PER_DAY)
    }

    /// Variables written after a successful fetch. Enabled flag and
    /// frequency are operator settings and are never touched here.
    pub fn record(&mut self, version: String, now: i64) -> Vars {
        self.cached_version = version;
        self.last_checked = now;

        let mut vars = Vars::new();
        vars.insert(KEY_VERSION.into(), json!(self.cached_version));
        vars.insert(KEY_LAST_CHECKED.into(), json!(self.last_checked));
        vars
    }
}

/// Update notice returned to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateNotice {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl UpdateNotice {
    pub fn hidden() -> Self {
        Self { show: false, version: None }
    }

    pub fn available(version: String) -> Self {
        Self { show: true, version: Some(version) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freshness_window() {
        let now = 1_700_000_000;
        let cache = UpdateCheckCache {
            enabled: true,
            last_checked: now - SECONDS_PER_DAY,
            cached_version: "1.0.0".into(),
            check_interval_days: 7,
        };
        assert!(cache.is_fresh(now));
        assert!(!cache.is_fresh(now + 6 * SECONDS_PER_DAY));
    }

    #[test]
    fn test_huge_frequency_saturates() {
        let mut vars = Vars::new();
        vars.insert("updatefrequency".into(), json!(200_000_000_000_000_i64));
        vars.insert("updatelastchecked".into(), json!(1_600_000_000));
        let cache = UpdateCheckCache::from_vars(&vars);

        assert!(cache.is_fresh(1_700_000_000));
        assert!(cache.is_fresh(i64::MAX));
    }

    #[test]
    fn test_missing_vars_mean_disabled_and_stale() {
        let cache = UpdateCheckCache::from_vars(&Vars::new());
        assert!(!cache.enabled);
        assert_eq!(cache.check_interval_days, 7);
        assert!(!cache.is_fresh(1_700_000_000));
    }
}
