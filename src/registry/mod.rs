//! Shared per-width field tables
//!
//! Building GF(2^w) costs O(2^w), so tables are built on first request and
//! handed out as `Arc`s afterwards. Each width has its own build lock:
//! concurrent first requests for a width produce exactly one build and all
//! callers observe the same table, while other widths proceed independently.

mod config;
mod store;

pub use config::RegistryConfig;
pub use store::{MemoryStore, TableStore};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::{debug, trace, warn};

use crate::field::check_width;
use crate::{FieldError, FieldTable};

/// Lazily populated cache of field tables
#[derive(Debug)]
pub struct FieldRegistry<S: TableStore = MemoryStore> {
    config: RegistryConfig,
    store: S,
    build_slots: Mutex<HashMap<u8, Arc<Mutex<()>>>>,
}

impl FieldRegistry<MemoryStore> {
    /// Create an empty in-memory registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty in-memory registry.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self::with_store(config, MemoryStore::new())
    }

    /// Process-wide registry, created with the default configuration.
    pub fn global() -> &'static FieldRegistry {
        static GLOBAL: OnceLock<FieldRegistry> = OnceLock::new();
        GLOBAL.get_or_init(FieldRegistry::new)
    }
}

impl Default for FieldRegistry<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TableStore> FieldRegistry<S> {
    /// Create a registry over a caller-supplied store.
    pub fn with_store(config: RegistryConfig, store: S) -> Self {
        Self {
            config,
            store,
            build_slots: Mutex::new(HashMap::new()),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Return the table for `width`, building it on first request.
    pub fn get_field(&self, width: u8) -> Result<Arc<FieldTable>, FieldError> {
        check_width(width, self.config.max_width)?;

        if let Some(table) = self.store.get(width) {
            trace!(width, "field table cache hit");
            return Ok(table);
        }

        let slot = self.build_slot(width);
        // Guard holds no data, so a poisoned lock is still usable
        let _guard = slot.lock().unwrap_or_else(PoisonError::into_inner);

        // Another caller may have finished the build while we waited
        if let Some(table) = self.store.get(width) {
            trace!(width, "field table built by concurrent caller");
            return Ok(table);
        }

        debug!(width, "field table cache miss, building");
        let table = FieldTable::build(width, self.config.max_width)?;
        if self.config.verify_tables {
            check_built(&table)?;
        }

        let table = Arc::new(table);
        self.store.insert(Arc::clone(&table));
        Ok(table)
    }

    /// Build lock for one width, created on first use.
    fn build_slot(&self, width: u8) -> Arc<Mutex<()>> {
        let mut slots = self.build_slots.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(width).or_default())
    }

    /// Widths with a cached table, ascending.
    pub fn cached_widths(&self) -> Vec<u8> {
        self.store.widths()
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.store.widths().len()
    }

    /// Whether no table has been built yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Verify a freshly built table, logging any failure.
fn check_built(table: &FieldTable) -> Result<(), FieldError> {
    table.verify().map_err(|err| {
        warn!(width = table.width(), error = %err, "built field table failed verification");
        err
    })
}
