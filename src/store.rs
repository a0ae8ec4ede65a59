// src/store.rs
//
// Memoizing table store. Owned by whichever layer composes the app (GUI App,
// CLI run) and passed by reference to consumers; deliberately not a hidden
// module-level singleton so tests can run several stores over distinct
// sources side by side.
//
// A store wraps exactly one source, so the cache key is the table name; the
// (source, table) pair of the contract is (store instance, table name).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::catalogue::Table;
use crate::source::{SourceError, TableSource};

pub struct CatalogueStore {
    source: Box<dyn TableSource>,
    cache: Mutex<HashMap<String, Arc<Table>>>,
}

impl CatalogueStore {
    pub fn new(source: Box<dyn TableSource>) -> Self {
        Self {
            source,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn source_label(&self) -> String {
        self.source.label()
    }

    /// Load a named table, reading the source at most once per table for the
    /// life of the store. Identical calls return the same Arc.
    pub fn load(&self, table: &str) -> Result<Arc<Table>, SourceError> {
        if let Some(hit) = self.cache.lock().unwrap().get(table) {
            return Ok(Arc::clone(hit));
        }

        // Read outside the lock; a racing duplicate read is harmless since
        // the source is a pure function of (path, table).
        let loaded = Arc::new(self.source.read_table(table)?);

        let mut cache = self.cache.lock().unwrap();
        let entry = cache
            .entry(s!(table))
            .or_insert_with(|| Arc::clone(&loaded));
        Ok(Arc::clone(entry))
    }

    /// Degrading load: on failure, cache an empty table so the category keeps
    /// operating with no data, and hand the condition back exactly once for
    /// operator visibility. Later calls return the empty table silently.
    pub fn load_or_empty(&self, table: &str) -> (Arc<Table>, Option<SourceError>) {
        match self.load(table) {
            Ok(t) => (t, None),
            Err(e) => {
                let empty = Table::empty_shared();
                self.cache
                    .lock()
                    .unwrap()
                    .insert(s!(table), Arc::clone(&empty));
                (empty, Some(e))
            }
        }
    }
}
