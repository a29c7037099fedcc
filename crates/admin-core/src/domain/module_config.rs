// ============================================================================
// Admin Core - Module Configuration
// File: crates/admin-core/src/domain/module_config.rs
// Description: Module-wide admin settings and their form parsing
// ============================================================================

use std::borrow::Cow;

use admin_shared::constants::{
    DEFAULT_DEFAULT_CATEGORY, DEFAULT_ITEMS_PER_PAGE, DEFAULT_MODULES_PER_ROW,
    DEFAULT_START_CATEGORY,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::{Validate, ValidationError, ValidationErrors};

use super::vars::{self, Vars};

const KEY_ITEMS_PER_PAGE: &str = "itemsperpage";
const KEY_MODULES_PER_ROW: &str = "modulesperrow";
const KEY_DISPLAY_NAME_TYPE: &str = "displaynametype";
const KEY_START_CATEGORY: &str = "startcategory";
const KEY_DEFAULT_CATEGORY: &str = "defaultcategory";
const KEY_ADMIN_THEME: &str = "admintheme";
const KEY_IGNORE_INSTALLER_CHECK: &str = "ignoreinstallercheck";
const KEY_ADMIN_GRAPHIC: &str = "admingraphic";

/// How module links are labeled on the admin panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayNameStyle {
    #[default]
    Name,
    TechnicalName,
    Both,
}

impl DisplayNameStyle {
    /// Stored numeric code (1 = display name, 2 = technical name, 3 = both).
    pub fn code(&self) -> i64 {
        match self {
            DisplayNameStyle::Name => 1,
            DisplayNameStyle::TechnicalName => 2,
            DisplayNameStyle::Both => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(DisplayNameStyle::Name),
            2 => Some(DisplayNameStyle::TechnicalName),
            3 => Some(DisplayNameStyle::Both),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i64>() {
            return Self::from_code(code);
        }
        match s.to_ascii_lowercase().as_str() {
            "name" => Some(DisplayNameStyle::Name),
            "technical_name" => Some(DisplayNameStyle::TechnicalName),
            "both" => Some(DisplayNameStyle::Both),
            _ => None,
        }
    }

    pub fn label(&self, display_name: &str, name: &str) -> String {
        match self {
            DisplayNameStyle::Name => display_name.to_string(),
            DisplayNameStyle::TechnicalName => name.to_string(),
            DisplayNameStyle::Both => format!("{} ({})", display_name, name),
        }
    }
}

/// Admin module settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ModuleConfig {
    #[validate(range(min = 1, message = "Items per page must be a positive integer"))]
    pub items_per_page: u32,

    #[validate(range(min = 1, message = "Modules per row must be a positive integer"))]
    pub modules_per_row: u32,

    pub display_name_style: DisplayNameStyle,
    pub start_category_id: i64,
    pub default_category_id: i64,
    pub admin_theme: Option<String>,
    pub ignore_installer_check: bool,
    pub admin_graphic: bool,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            modules_per_row: DEFAULT_MODULES_PER_ROW,
            display_name_style: DisplayNameStyle::Name,
            start_category_id: DEFAULT_START_CATEGORY,
            default_category_id: DEFAULT_DEFAULT_CATEGORY,
            admin_theme: None,
            ignore_installer_check: false,
            admin_graphic: false,
        }
    }
}

impl ModuleConfig {
    /// Read from stored variables; anything missing or unreadable takes its default.
    pub fn from_vars(vars: &Vars) -> Self {
        let defaults = Self::default();
        let positive = |key| {
            vars::get_i64(vars, key)
                .filter(|v| *v >= 1)
                .and_then(|v| u32::try_from(v).ok())
        };

        Self {
            items_per_page: positive(KEY_ITEMS_PER_PAGE).unwrap_or(defaults.items_per_page),
            modules_per_row: positive(KEY_MODULES_PER_ROW).unwrap_or(defaults.modules_per_row),
            display_name_style: vars::get_i64(vars, KEY_DISPLAY_NAME_TYPE)
                .and_then(DisplayNameStyle::from_code)
                .unwrap_or_default(),
            start_category_id: vars::get_i64(vars, KEY_START_CATEGORY)
                .unwrap_or(defaults.start_category_id),
            default_category_id: vars::get_i64(vars, KEY_DEFAULT_CATEGORY)
                .unwrap_or(defaults.default_category_id),
            admin_theme: vars::get_string(vars, KEY_ADMIN_THEME).filter(|t| !t.is_empty()),
            ignore_installer_check: vars::get_bool(vars, KEY_IGNORE_INSTALLER_CHECK)
                .unwrap_or(defaults.ignore_installer_check),
            admin_graphic: vars::get_bool(vars, KEY_ADMIN_GRAPHIC).unwrap_or(defaults.admin_graphic),
        }
    }

    pub fn to_vars(&self) -> Vars {
        let mut vars = Vars::new();
        vars.insert(KEY_ITEMS_PER_PAGE.into(), json!(self.items_per_page));
        vars.insert(KEY_MODULES_PER_ROW.into(), json!(self.modules_per_row));
        vars.insert(KEY_DISPLAY_NAME_TYPE.into(), json!(self.display_name_style.code()));
        vars.insert(KEY_START_CATEGORY.into(), json!(self.start_category_id));
        vars.insert(KEY_DEFAULT_CATEGORY.into(), json!(self.default_category_id));
        vars.insert(
            KEY_ADMIN_THEME.into(),
            self.admin_theme.clone().map(Value::String).unwrap_or(Value::Null),
        );
        vars.insert(KEY_IGNORE_INSTALLER_CHECK.into(), json!(self.ignore_installer_check));
        vars.insert(KEY_ADMIN_GRAPHIC.into(), json!(self.admin_graphic));
        vars
    }
}

/// Raw config form fields as posted by the presentation layer
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFields {
    pub items_per_page: Option<String>,
    pub modules_per_row: Option<String>,
    pub display_name_style: Option<String>,
    pub start_category_id: Option<String>,
    pub default_category_id: Option<String>,
    pub admin_theme: Option<String>,
    pub ignore_installer_check: Option<String>,
    pub admin_graphic: Option<String>,
}

impl ConfigFields {
    /// Parse every field, collecting one error per offending field.
    pub fn into_config(self) -> Result<ModuleConfig, ValidationErrors> {
        let defaults = ModuleConfig::default();
        let mut errors = ValidationErrors::new();

        let items_per_page = parse_or(
            &mut errors,
            "items_per_page",
            self.items_per_page,
            defaults.items_per_page,
            "You must enter a number for the 'Modules per page' setting",
        );
        let modules_per_row = parse_or(
            &mut errors,
            "modules_per_row",
            self.modules_per_row,
            defaults.modules_per_row,
            "You must enter a number for the 'Modules per row' setting",
        );
        let start_category_id = parse_or(
            &mut errors,
            "start_category_id",
            self.start_category_id,
            defaults.start_category_id,
            "Start category must be a category id",
        );
        let default_category_id = parse_or(
            &mut errors,
            "default_category_id",
            self.default_category_id,
            defaults.default_category_id,
            "Default category must be a category id",
        );

        let display_name_style = match present(self.display_name_style) {
            None => defaults.display_name_style,
            Some(raw) => DisplayNameStyle::parse(&raw).unwrap_or_else(|| {
                errors.add(
                    "display_name_style",
                    field_error("invalid_choice", "Unknown display name style"),
                );
                defaults.display_name_style
            }),
        };

        if !errors.errors().is_empty() {
            return Err(errors);
        }

        let config = ModuleConfig {
            items_per_page,
            modules_per_row,
            display_name_style,
            start_category_id,
            default_category_id,
            admin_theme: present(self.admin_theme),
            ignore_installer_check: present(self.ignore_installer_check)
                .map(|v| vars::parse_flag(&v))
                .unwrap_or(defaults.ignore_installer_check),
            admin_graphic: present(self.admin_graphic)
                .map(|v| vars::parse_flag(&v))
                .unwrap_or(defaults.admin_graphic),
        };

        config.validate()?;
        Ok(config)
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn parse_or<T: std::str::FromStr>(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: Option<String>,
    default: T,
    message: &'static str,
) -> T {
    match present(raw) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            errors.add(field, field_error("not_a_number", message));
            default
        }),
    }
}
