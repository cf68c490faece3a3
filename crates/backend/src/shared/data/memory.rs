use std::collections::BTreeMap;

/// Failure of a keyed store operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("record {0} not found")]
    NotFound(i64),
}

/// In-memory collection keyed by server-assigned ids.
///
/// Ids grow monotonically and are never reused, even after a removal.
#[derive(Debug, Clone)]
pub struct MemoryCollection<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Clone> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> MemoryCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection holding `rows` as-is; new ids continue after the highest seeded one
    pub fn seeded(rows: Vec<T>, id_of: impl Fn(&T) -> i64) -> Self {
        let mut collection = Self::new();
        for row in rows {
            let id = id_of(&row);
            collection.next_id = collection.next_id.max(id + 1);
            collection.rows.insert(id, row);
        }
        collection
    }

    /// All rows in id order
    pub fn list(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Assign the next id and store the row `build` makes for it
    pub fn insert(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn update(&mut self, id: i64, apply: impl FnOnce(&mut T)) -> Result<T, StoreError> {
        let row = self.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        apply(row);
        Ok(row.clone())
    }

    pub fn remove(&mut self, id: i64) -> Result<T, StoreError> {
        self.rows.remove(&id).ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: &'static str,
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut c = MemoryCollection::new();
        let a = c.insert(|id| Row { id, name: "a" });
        let b = c.insert(|id| Row { id, name: "b" });
        assert_eq!((a.id, b.id), (1, 2));

        c.remove(2).unwrap();
        let d = c.insert(|id| Row { id, name: "d" });
        assert_eq!(d.id, 3);
        assert_eq!(c.list().iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_seeded_continues_after_highest_id() {
        let rows = vec![Row { id: 7, name: "x" }, Row { id: 3, name: "y" }];
        let mut c = MemoryCollection::seeded(rows, |r| r.id);
        assert_eq!(c.len(), 2);
        assert_eq!(c.list()[0].id, 3);
        assert_eq!(c.insert(|id| Row { id, name: "z" }).id, 8);
    }

    #[test]
    fn test_update_and_remove_unknown_id() {
        let mut c = MemoryCollection::new();
        c.insert(|id| Row { id, name: "a" });

        let updated = c.update(1, |r| r.name = "b").unwrap();
        assert_eq!(updated.name, "b");
        assert_eq!(c.get(1).unwrap().name, "b");

        assert_eq!(c.update(9, |r| r.name = "c"), Err(StoreError::NotFound(9)));
        assert_eq!(c.remove(9), Err(StoreError::NotFound(9)));
        assert!(!c.is_empty());
    }
}
