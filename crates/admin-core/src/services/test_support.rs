//! In-process fakes for service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{
    AccessLevel, Category, ModuleDescriptor, ModuleKind, NewCategory, Principal, Vars,
};
use crate::error::DomainError;
use crate::repositories::{
    CategoryRepository, ConfigStore, MockHostEnvironment, ModuleRegistry, PermissionOracle,
};

pub fn category(id: i64, name: &str) -> Category {
    Category { id, name: name.to_string(), description: format!("{} modules", name) }
}

pub fn module(id: i64, name: &str) -> ModuleDescriptor {
    ModuleDescriptor {
        name: name.to_string(),
        id,
        display_name: format!("{} Display", name),
        description: format!("{} description", name),
        icon_path: format!("/icons/{}.png", name),
        kind: ModuleKind::System,
    }
}

#[derive(Default)]
pub struct FakeCategories {
    rows: Mutex<Vec<Category>>,
    pub deletes: AtomicUsize,
}

impl FakeCategories {
    pub fn with(rows: Vec<Category>) -> Arc<Self> {
        Arc::new(Self { rows: Mutex::new(rows), deletes: AtomicUsize::new(0) })
    }

    pub fn snapshot(&self) -> Vec<Category> {
        self.rows.lock().clone()
    }

    /// Mutate behind the service's back, as another principal would.
    pub fn remove(&self, id: i64) {
        self.rows.lock().retain(|c| c.id != id);
    }

    pub fn rename(&self, id: i64, name: &str) {
        if let Some(row) = self.rows.lock().iter_mut().find(|c| c.id == id) {
            row.name = name.to_string();
        }
    }
}

#[async_trait]
impl CategoryRepository for FakeCategories {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        Ok(self.snapshot())
    }

    async fn find_page(&self, offset: u32, limit: u32) -> Result<Vec<Category>, DomainError> {
        Ok(self.snapshot().into_iter().skip(offset as usize).take(limit as usize).collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.rows.lock().len() as u64)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, DomainError> {
        Ok(self.rows.lock().iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        Ok(self.rows.lock().iter().find(|c| c.name == name).cloned())
    }

    async fn create(&self, new: &NewCategory) -> Result<Category, DomainError> {
        let mut rows = self.rows.lock();
        if rows.iter().any(|c| c.name == new.name) {
            return Err(DomainError::CategoryNameAlreadyExists(new.name.clone()));
        }
        let id = rows.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let created = Category { id, name: new.name.clone(), description: new.description.clone() };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, category: &Category) -> Result<Category, DomainError> {
        let mut rows = self.rows.lock();
        let row = rows
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or(DomainError::CategoryNotFound(category.id))?;
        *row = category.clone();
        Ok(category.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.remove(id);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeModules {
    modules: Vec<ModuleDescriptor>,
    assignments: Mutex<HashMap<i64, i64>>,
    orders: HashMap<i64, i32>,
}

impl FakeModules {
    /// `(module, assigned category, sort order)`
    pub fn with(rows: Vec<(ModuleDescriptor, Option<i64>, Option<i32>)>) -> Arc<Self> {
        let mut modules = Vec::new();
        let mut assignments = HashMap::new();
        let mut orders = HashMap::new();
        for (module, category, order) in rows {
            if let Some(category) = category {
                assignments.insert(module.id, category);
            }
            if let Some(order) = order {
                orders.insert(module.id, order);
            }
            modules.push(module);
        }
        Arc::new(Self { modules, assignments: Mutex::new(assignments), orders })
    }

    pub fn assignment(&self, module_id: i64) -> Option<i64> {
        self.assignments.lock().get(&module_id).copied()
    }
}

#[async_trait]
impl ModuleRegistry for FakeModules {
    async fn list_admin_capable(&self) -> Result<Vec<ModuleDescriptor>, DomainError> {
        Ok(self.modules.clone())
    }

    async fn resolve_module_id(&self, name: &str) -> Result<Option<i64>, DomainError> {
        Ok(self.modules.iter().find(|m| m.name == name).map(|m| m.id))
    }

    async fn assigned_category(&self, module_id: i64) -> Result<Option<i64>, DomainError> {
        Ok(self.assignment(module_id))
    }

    async fn sort_order(&self, module_id: i64) -> Result<Option<i32>, DomainError> {
        Ok(self.orders.get(&module_id).copied())
    }

    async fn assign_category(&self, module_id: i64, category_id: i64) -> Result<(), DomainError> {
        self.assignments.lock().insert(module_id, category_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeConfig {
    namespaces: Mutex<HashMap<String, Vars>>,
    pub writes: AtomicUsize,
}

impl FakeConfig {
    pub fn with(namespace: &str, vars: Vars) -> Arc<Self> {
        let store = Self::default();
        store.namespaces.lock().insert(namespace.to_string(), vars);
        Arc::new(store)
    }

    pub fn vars(&self, namespace: &str) -> Vars {
        self.namespaces.lock().get(namespace).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl ConfigStore for FakeConfig {
    async fn get_all(&self, namespace: &str) -> Result<Vars, DomainError> {
        Ok(self.vars(namespace))
    }

    async fn set_many(&self, namespace: &str, vars: Vars) -> Result<(), DomainError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.namespaces
            .lock()
            .entry(namespace.to_string())
            .or_default()
            .extend(vars);
        Ok(())
    }
}

/// Grants `(component, instance, level)`; `*` in a grant matches anything.
#[derive(Default)]
pub struct GrantOracle {
    grants: Vec<(String, String, AccessLevel)>,
}

impl GrantOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(mut self, component: &str, instance: &str, level: AccessLevel) -> Self {
        self.grants.push((component.to_string(), instance.to_string(), level));
        self
    }

    /// ADMIN on everything, including the wildcard super-admin capability.
    pub fn root() -> Self {
        Self::new().grant("*", "*", AccessLevel::Admin)
    }
}

#[async_trait]
impl PermissionOracle for GrantOracle {
    async fn check(
        &self,
        _principal: &Principal,
        component: &str,
        instance: &str,
        level: AccessLevel,
    ) -> bool {
        self.grants.iter().any(|(c, i, l)| {
            (c == "*" || c == component) && (i == "*" || i == instance) && level <= *l
        })
    }
}

/// Production-like host with no recovery console and no dev mode.
pub fn quiet_host() -> Arc<MockHostEnvironment> {
    let mut host = MockHostEnvironment::new();
    host.expect_is_development_mode().return_const(false);
    host.expect_file_exists().return_const(false);
    host.expect_recovery_console_file().returning(|| "zrc.php".into());
    Arc::new(host)
}
