use std::sync::Arc;

use admin_core::services::{CategoryService, ConfigService, MenuService, SecurityService, UpdateService};

#[derive(Clone)]
pub struct AppState {
    pub menu: Arc<MenuService>,
    pub categories: Arc<CategoryService>,
    pub config: Arc<ConfigService>,
    pub updates: Arc<UpdateService>,
    pub security: Arc<SecurityService>,
}
