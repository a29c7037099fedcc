// ============================================================================
// Admin Infrastructure - In-Memory Category Store
// File: crates/admin-infrastructure/src/memory/category_store.rs
// ============================================================================

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use admin_core::domain::{Category, NewCategory};
use admin_core::error::DomainError;
use admin_core::repositories::CategoryRepository;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Category>,
    next_id: i64,
}

/// Category table kept in process memory, ordered by id
#[derive(Default)]
pub struct InMemoryCategoryStore {
    table: RwLock<Table>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryStore {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn find_page(&self, offset: u32, limit: u32) -> Result<Vec<Category>, DomainError> {
        Ok(self
            .table
            .read()
            .rows
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.table.read().rows.len() as u64)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, DomainError> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        Ok(self
            .table
            .read()
            .rows
            .values()
            .find(|c| same_name(&c.name, name))
            .cloned())
    }

    async fn create(&self, category: &NewCategory) -> Result<Category, DomainError> {
        let mut table = self.table.write();
        if table.rows.values().any(|c| same_name(&c.name, &category.name)) {
            return Err(DomainError::CategoryNameAlreadyExists(category.name.clone()));
        }

        table.next_id += 1;
        let created = Category {
            id: table.next_id,
            name: category.name.clone(),
            description: category.description.clone(),
        };
        table.rows.insert(created.id, created.clone());
        debug!("Inserted category {} ({})", created.name, created.id);
        Ok(created)
    }

    async fn update(&self, category: &Category) -> Result<Category, DomainError> {
        let mut table = self.table.write();
        if table
            .rows
            .values()
            .any(|c| c.id != category.id && same_name(&c.name, &category.name))
        {
            return Err(DomainError::CategoryNameAlreadyExists(category.name.clone()));
        }

        let row = table
            .rows
            .get_mut(&category.id)
            .ok_or(DomainError::CategoryNotFound(category.id))?;
        *row = category.clone();
        Ok(category.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.table
            .write()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::CategoryNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let store = InMemoryCategoryStore::new();
        let first = store.create(&NewCategory::new("System", "").unwrap()).await.unwrap();
        store.delete(first.id).await.unwrap();
        let second = store.create(&NewCategory::new("Content", "").unwrap()).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_names_are_unique_ignoring_case() {
        let store = InMemoryCategoryStore::new();
        store.create(&NewCategory::new("System", "").unwrap()).await.unwrap();
        let clash = store.create(&NewCategory::new("SYSTEM", "").unwrap()).await;
        assert!(matches!(clash, Err(DomainError::CategoryNameAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_paging_follows_id_order() {
        let store = InMemoryCategoryStore::new();
        for name in ["A", "B", "C", "D"] {
            store.create(&NewCategory::new(name, "").unwrap()).await.unwrap();
        }
        let page = store.find_page(1, 2).await.unwrap();
        let names: Vec<_> = page.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }
}
