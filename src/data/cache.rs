use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::loader::{load_file, LoadError};
use super::model::ChartOfAccounts;
use crate::config::ColumnNames;

// ---------------------------------------------------------------------------
// TableCache – one loaded table, keyed by its load parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    path: PathBuf,
    separator: u8,
}

/// Holds the most recently loaded table. A call with the same
/// `(path, separator)` reuses it; any other key reloads and replaces it.
/// Failed loads are never cached.
#[derive(Debug)]
pub struct TableCache {
    columns: ColumnNames,
    entry: Option<(CacheKey, Arc<ChartOfAccounts>)>,
}

impl TableCache {
    pub fn new(columns: ColumnNames) -> Self {
        Self {
            columns,
            entry: None,
        }
    }

    pub fn get_or_load(
        &mut self,
        path: &Path,
        separator: u8,
    ) -> Result<Arc<ChartOfAccounts>, LoadError> {
        let key = CacheKey {
            path: path.to_path_buf(),
            separator,
        };
        if let Some((cached_key, table)) = &self.entry {
            if *cached_key == key {
                log::debug!("cache hit for {}", path.display());
                return Ok(Arc::clone(table));
            }
        }

        self.invalidate();
        let table = Arc::new(load_file(path, separator, &self.columns)?);
        log::info!(
            "Loaded {} accounts from {} with columns {:?}",
            table.len(),
            path.display(),
            table.headers
        );
        if table.is_empty() {
            log::warn!("{} contains no account", path.display());
        }
        self.entry = Some((key, Arc::clone(&table)));
        Ok(table)
    }

    /// Drop the cached table; the next call reloads from disk.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
