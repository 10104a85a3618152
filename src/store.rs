//! Persistence seam for permissible entities.
//!
//! Storage is owned by the caller. The crate only needs to enumerate rows,
//! read one, and write one back.

use std::collections::BTreeMap;
use std::fmt;

use crate::entity::PermissibleEntity;
use crate::error::StoreError;

/// Primary key of a stored entity row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A table of permissible entities.
pub trait EntityStore {
    /// Every row id, in the order a backfill should visit them.
    fn ids(&self) -> Result<Vec<EntityId>, StoreError>;

    /// Read one row. `Ok(None)` if it was deleted since `ids()`.
    fn get(&self, id: EntityId) -> Result<Option<PermissibleEntity>, StoreError>;

    /// Write one row back.
    fn put(&mut self, id: EntityId, entity: &PermissibleEntity) -> Result<(), StoreError>;
}

/// In-memory table keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: BTreeMap<EntityId, PermissibleEntity>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row under a fresh id.
    pub fn insert(&mut self, entity: PermissibleEntity) -> EntityId {
        self.next_id += 1;
        let id = EntityId(self.next_id);
        self.rows.insert(id, entity);
        id
    }

    pub fn remove(&mut self, id: EntityId) -> Option<PermissibleEntity> {
        self.rows.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &PermissibleEntity)> {
        self.rows.iter().map(|(id, e)| (*id, e))
    }
}

impl FromIterator<PermissibleEntity> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = PermissibleEntity>>(iter: I) -> Self {
        let mut store = MemoryStore::new();
        for entity in iter {
            store.insert(entity);
        }
        store
    }
}

impl EntityStore for MemoryStore {
    fn ids(&self) -> Result<Vec<EntityId>, StoreError> {
        Ok(self.rows.keys().copied().collect())
    }

    fn get(&self, id: EntityId) -> Result<Option<PermissibleEntity>, StoreError> {
        Ok(self.rows.get(&id).cloned())
    }

    fn put(&mut self, id: EntityId, entity: &PermissibleEntity) -> Result<(), StoreError> {
        self.rows.insert(id, entity.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let mut store = MemoryStore::new();
        let a = store.insert(PermissibleEntity::allow_everyone());
        let b = store.insert(PermissibleEntity::deny_everyone());
        assert!(a < b);
        assert_eq!(store.ids().unwrap(), vec![a, b]);
    }

    #[test]
    fn test_get_put_remove() {
        let mut store: MemoryStore = [PermissibleEntity::allow_user(1u64)].into_iter().collect();
        let id = EntityId(1);
        assert_eq!(store.get(id).unwrap(), Some(PermissibleEntity::allow_user(1u64)));

        store.put(id, &PermissibleEntity::deny_user(1u64)).unwrap();
        assert_eq!(store.get(id).unwrap().map(|e| e.order()), Some(11));

        assert!(store.remove(id).is_some());
        assert_eq!(store.get(id).unwrap(), None);
        assert!(store.is_empty());
    }
}
