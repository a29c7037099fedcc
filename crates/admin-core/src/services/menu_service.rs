// ============================================================================
// Admin Core - Menu Service
// File: crates/admin-core/src/services/menu_service.rs
// ============================================================================
//! Category menu assembly and admin panel resolution

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use admin_shared::constants::ADMIN_NAMESPACE;
use tracing::{debug, warn};

use crate::domain::permission::{
    category_id_instance, ADMIN_COMPONENT, ANY_INSTANCE, MODULE_INSTANCE, WILDCARD,
};
use crate::domain::{
    AccessLevel, AdminPanel, Category, CategoryMenu, DisplayNameStyle, MenuItem, MenuOption,
    ModuleConfig, PanelView, Principal,
};
use crate::error::DomainError;
use crate::repositories::{
    CategoryRepository, ConfigStore, HostEnvironment, ModuleRegistry, PermissionOracle,
};
use crate::services::access;

/// Builds the permission-filtered admin menu and panel
pub struct MenuService {
    categories: Arc<dyn CategoryRepository>,
    modules: Arc<dyn ModuleRegistry>,
    config: Arc<dyn ConfigStore>,
    oracle: Arc<dyn PermissionOracle>,
    host: Arc<dyn HostEnvironment>,
}

impl MenuService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        modules: Arc<dyn ModuleRegistry>,
        config: Arc<dyn ConfigStore>,
        oracle: Arc<dyn PermissionOracle>,
        host: Arc<dyn HostEnvironment>,
    ) -> Self {
        Self { categories, modules, config, oracle, host }
    }

    /// Build the category menu for `principal`.
    ///
    /// Categories and modules the principal may not see are dropped silently.
    /// The current category is the requested one (start category when none
    /// is requested) if it made it into the menu, otherwise the first option.
    pub async fn build_menu(
        &self,
        principal: &Principal,
        requested: Option<i64>,
    ) -> Result<CategoryMenu, DomainError> {
        let config = self.load_config().await?;
        self.assemble(principal, &config, requested).await
    }

    /// Resolve the category shown on the admin panel.
    ///
    /// Requires ADMIN on the requested category; otherwise falls back to the
    /// configured start category. Denial on the start category is fatal.
    pub async fn resolve_panel_category(
        &self,
        principal: &Principal,
        requested: Option<i64>,
    ) -> Result<Category, DomainError> {
        let config = self.load_config().await?;
        self.resolve_with(principal, &config, requested).await
    }

    /// Full admin panel: installer warning, resolved category, its links and the menu.
    pub async fn build_panel(
        &self,
        principal: &Principal,
        requested: Option<i64>,
    ) -> Result<PanelView, DomainError> {
        let may_edit_site = self
            .oracle
            .check(principal, ANY_INSTANCE, ANY_INSTANCE, AccessLevel::Edit)
            .await;
        if !may_edit_site {
            access::require(
                self.oracle.as_ref(),
                principal,
                ADMIN_COMPONENT,
                ANY_INSTANCE,
                AccessLevel::Edit,
            )
            .await?;
        }

        let config = self.load_config().await?;

        if !config.ignore_installer_check && self.host.is_development_mode() {
            let console = self.host.recovery_console_file();
            if self.host.file_exists(&console) {
                warn!("Recovery console still present at {}", console.display());
                return Ok(PanelView::InstallerWarning {
                    recovery_console: console.display().to_string(),
                });
            }
        }

        let category = self.resolve_with(principal, &config, requested).await?;
        let known = self.known_category_ids().await?;
        let mut grouped = self
            .group_modules(principal, &config, &known, config.display_name_style)
            .await?;
        let links = grouped.remove(&category.id).unwrap_or_default();
        let menu = self.assemble(principal, &config, Some(category.id)).await?;

        Ok(PanelView::Panel(AdminPanel {
            category,
            links,
            modules_per_row: config.modules_per_row,
            show_icons: config.admin_graphic,
            menu,
        }))
    }

    async fn assemble(
        &self,
        principal: &Principal,
        config: &ModuleConfig,
        requested: Option<i64>,
    ) -> Result<CategoryMenu, DomainError> {
        let all = self.categories.find_all().await?;
        let known: HashSet<i64> = all.iter().map(|c| c.id).collect();
        let visible = access::readable_categories(self.oracle.as_ref(), principal, all).await;

        let mut grouped = self
            .group_modules(principal, config, &known, DisplayNameStyle::Name)
            .await?;

        let show_empty = self
            .oracle
            .check(principal, WILDCARD, WILDCARD, AccessLevel::Admin)
            .await;

        let options: Vec<MenuOption> = visible
            .into_iter()
            .filter_map(|category| {
                let items = grouped.remove(&category.id).unwrap_or_default();
                if items.is_empty() && !show_empty {
                    return None;
                }
                Some(MenuOption::new(category, items))
            })
            .collect();

        let requested = requested.unwrap_or(config.start_category_id);
        let current_category_id = if options.iter().any(|o| o.category_id == requested) {
            Some(requested)
        } else {
            debug!("Category {} not in menu, falling back to first option", requested);
            options.first().map(|o| o.category_id)
        };

        Ok(CategoryMenu { current_category_id, options })
    }

    /// Editable modules grouped by effective category, each group in menu order.
    ///
    /// Unassigned modules, and modules whose category no longer exists, land
    /// in the default category.
    async fn group_modules(
        &self,
        principal: &Principal,
        config: &ModuleConfig,
        known: &HashSet<i64>,
        style: DisplayNameStyle,
    ) -> Result<BTreeMap<i64, Vec<MenuItem>>, DomainError> {
        let mut grouped: BTreeMap<i64, Vec<MenuItem>> = BTreeMap::new();

        for module in self.modules.list_admin_capable().await? {
            let may_edit = self
                .oracle
                .check(principal, &module.component_scope(), MODULE_INSTANCE, AccessLevel::Edit)
                .await;
            if !may_edit {
                continue;
            }

            let category_id = self
                .modules
                .assigned_category(module.id)
                .await?
                .filter(|id| known.contains(id))
                .unwrap_or(config.default_category_id);
            let order = self.modules.sort_order(module.id).await?.unwrap_or(0);
            let label = style.label(&module.display_name, &module.name);

            grouped
                .entry(category_id)
                .or_default()
                .push(MenuItem::for_module(&module, label, order));
        }

        for items in grouped.values_mut() {
            items.sort_by(MenuItem::menu_order);
        }
        Ok(grouped)
    }

    async fn resolve_with(
        &self,
        principal: &Principal,
        config: &ModuleConfig,
        requested: Option<i64>,
    ) -> Result<Category, DomainError> {
        let requested = requested.unwrap_or(config.start_category_id);

        if requested > 0
            && self
                .oracle
                .check(principal, ADMIN_COMPONENT, &category_id_instance(requested), AccessLevel::Admin)
                .await
        {
            if let Some(category) = self.categories.find_by_id(requested).await? {
                return Ok(category);
            }
        }

        let start = config.start_category_id;
        debug!("Panel category {} unavailable, using start category {}", requested, start);
        access::require(
            self.oracle.as_ref(),
            principal,
            ADMIN_COMPONENT,
            &category_id_instance(start),
            AccessLevel::Admin,
        )
        .await?;

        self.categories
            .find_by_id(start)
            .await?
            .ok_or(DomainError::CategoryNotFound(start))
    }

    async fn known_category_ids(&self) -> Result<HashSet<i64>, DomainError> {
        Ok(self.categories.find_all().await?.into_iter().map(|c| c.id).collect())
    }

    async fn load_config(&self) -> Result<ModuleConfig, DomainError> {
        Ok(ModuleConfig::from_vars(&self.config.get_all(ADMIN_NAMESPACE).await?))
    }
}
