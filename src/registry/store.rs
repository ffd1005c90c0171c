use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, PoisonError, RwLock};

use crate::FieldTable;

/// Backing storage for a [`crate::FieldRegistry`].
///
/// Implementations hold finished tables only; the registry never publishes a
/// table before construction completes.
pub trait TableStore: Send + Sync + Debug {
    /// Cached table for `width`, if any.
    fn get(&self, width: u8) -> Option<Arc<FieldTable>>;

    /// Publish a finished table under its own width.
    fn insert(&self, table: Arc<FieldTable>);

    /// Widths currently cached, ascending.
    fn widths(&self) -> Vec<u8>;
}

/// In-memory store keyed by width.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<u8, Arc<FieldTable>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
        }
    }
}

// Tables are inserted whole, so a poisoned lock still guards a consistent map.
impl TableStore for MemoryStore {
    fn get(&self, width: u8) -> Option<Arc<FieldTable>> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables.get(&width).map(Arc::clone)
    }

    fn insert(&self, table: Arc<FieldTable>) {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        tables.insert(table.width(), table);
    }

    fn widths(&self) -> Vec<u8> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        let mut widths: Vec<u8> = tables.keys().copied().collect();
        widths.sort_unstable();
        widths
    }
}
