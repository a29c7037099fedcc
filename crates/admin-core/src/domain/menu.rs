// ============================================================================
// Admin Core - Menu Entities
// File: crates/admin-core/src/domain/menu.rs
// Description: Derived (never persisted) category menu and panel structures
// ============================================================================

use std::cmp::Ordering;

use serde::Serialize;

use super::category::Category;
use super::module::ModuleDescriptor;

/// A module link inside a menu option or panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub url: String,
    pub label: String,
    pub tooltip: String,
    pub module_name: String,
    pub icon_path: String,
    pub sort_order: i32,
    pub id: i64,
}

impl MenuItem {
    pub fn for_module(module: &ModuleDescriptor, label: String, sort_order: i32) -> Self {
        Self {
            url: module.admin_url(),
            label,
            tooltip: module.description.clone(),
            module_name: module.name.clone(),
            icon_path: module.icon_path.clone(),
            sort_order,
            id: module.id,
        }
    }

    /// Menu ordering: sort order ascending, ties broken by module name.
    pub fn menu_order(a: &MenuItem, b: &MenuItem) -> Ordering {
        a.sort_order
            .cmp(&b.sort_order)
            .then_with(|| a.module_name.cmp(&b.module_name))
    }
}

/// A category entry in the admin menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuOption {
    pub category_id: i64,
    pub url: String,
    pub title: String,
    pub description: String,
    pub items: Vec<MenuItem>,
}

impl MenuOption {
    pub fn new(category: Category, items: Vec<MenuItem>) -> Self {
        Self {
            category_id: category.id,
            url: format!("/admin/panel?acid={}", category.id),
            title: category.name,
            description: category.description,
            items,
        }
    }
}

/// Result of menu assembly
///
/// `current_category_id` is `None` when no category is visible at all; the
/// presentation layer renders an empty shell in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMenu {
    pub current_category_id: Option<i64>,
    pub options: Vec<MenuOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminPanel {
    pub category: Category,
    pub links: Vec<MenuItem>,
    pub modules_per_row: u32,
    pub show_icons: bool,
    pub menu: CategoryMenu,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum PanelView {
    /// Development install still carries the recovery console.
    InstallerWarning { recovery_console: String },
    Panel(AdminPanel),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, order: i32) -> MenuItem {
        MenuItem {
            url: String::new(),
            label: name.to_string(),
            tooltip: String::new(),
            module_name: name.to_string(),
            icon_path: String::new(),
            sort_order: order,
            id: 0,
        }
    }

    #[test]
    fn test_menu_order_breaks_ties_by_name() {
        let mut items = vec![item("Users", 0), item("Blocks", 1), item("Admin", 0), item("Theme", -1)];
        items.sort_by(MenuItem::menu_order);
        let names: Vec<_> = items.iter().map(|i| i.module_name.as_str()).collect();
        assert_eq!(names, vec!["Theme", "Admin", "Users", "Blocks"]);
    }

    #[test]
    fn test_menu_option_links_to_panel() {
        let category = Category { id: 7, name: "Content".into(), description: "Stuff".into() };
        let option = MenuOption::new(category, vec![]);
        assert_eq!(option.url, "/admin/panel?acid=7");
        assert_eq!(option.title, "Content");
    }
}
