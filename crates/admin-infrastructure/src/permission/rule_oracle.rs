// ============================================================================
// Admin Infrastructure - Rule Table Permission Oracle
// File: crates/admin-infrastructure/src/permission/rule_oracle.rs
// Description: Stand-in for the host permission database
// ============================================================================
//! Ordered permission rules evaluated first-match-wins.
//!
//! Each rule carries anchored regular expressions for the principal name, the
//! component scope and the instance scope, plus the highest level it grants.
//! The first rule whose three patterns match decides the outcome; when no
//! rule matches, access is denied.

use async_trait::async_trait;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use admin_core::domain::{AccessLevel, Principal};
use admin_core::repositories::PermissionOracle;
use admin_shared::config::PermissionRuleSettings;

#[derive(Error, Debug)]
pub enum RuleTableError {
    #[error("Invalid pattern in rule {index}: {source}")]
    InvalidPattern {
        index: usize,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown access level in rule {index}: {level}")]
    UnknownLevel { index: usize, level: String },
}

#[derive(Debug, Clone)]
pub struct PermissionRule {
    principal: Regex,
    component: Regex,
    instance: Regex,
    level: AccessLevel,
}

impl PermissionRule {
    pub fn new(principal: &str, component: &str, instance: &str, level: AccessLevel) -> Result<Self, regex::Error> {
        Ok(Self {
            principal: anchored(principal)?,
            component: anchored(component)?,
            instance: anchored(instance)?,
            level,
        })
    }

    fn matches(&self, principal: &Principal, component: &str, instance: &str) -> bool {
        self.principal.is_match(&principal.name)
            && self.component.is_match(component)
            && self.instance.is_match(instance)
    }
}

fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})$", pattern))
}

pub struct RuleTableOracle {
    rules: Vec<PermissionRule>,
}

impl RuleTableOracle {
    pub fn new(rules: Vec<PermissionRule>) -> Self {
        Self { rules }
    }

    pub fn from_settings(settings: &[PermissionRuleSettings]) -> Result<Self, RuleTableError> {
        let rules = settings
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                let level = AccessLevel::from_str(&rule.level).ok_or_else(|| {
                    RuleTableError::UnknownLevel { index, level: rule.level.clone() }
                })?;
                PermissionRule::new(&rule.principal, &rule.component, &rule.instance, level)
                    .map_err(|source| RuleTableError::InvalidPattern { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(rules))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[async_trait]
impl PermissionOracle for RuleTableOracle {
    async fn check(
        &self,
        principal: &Principal,
        component: &str,
        instance: &str,
        level: AccessLevel,
    ) -> bool {
        match self.rules.iter().find(|r| r.matches(principal, component, instance)) {
            Some(rule) => rule.level >= level,
            None => {
                debug!("No permission rule for {} on {} {}", principal.name, component, instance);
                false
            }
        }
    }
}
