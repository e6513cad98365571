use std::path::Path;
use std::sync::Arc;

use crate::color::ClassColors;
use crate::config::AppConfig;
use crate::data::cache::TableCache;
use crate::data::export;
use crate::data::filter::{self, FilterParams, TableView, ALL_CLASSES};
use crate::data::model::ChartOfAccounts;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Startup configuration, fixed for the process lifetime.
    pub config: AppConfig,

    cache: TableCache,

    /// Table currently shown (None until a load succeeds).
    pub table: Option<Arc<ChartOfAccounts>>,

    /// Current control values.
    pub filters: FilterParams,

    /// Indices of accounts passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    pub class_colors: ClassColors,

    /// Load or filter error shown inline in place of the table.
    pub error_message: Option<String>,

    /// Outcome of the last export.
    pub export_message: Option<Result<String, String>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let cache = TableCache::new(config.columns.clone());
        Self {
            config,
            cache,
            table: None,
            filters: FilterParams::default(),
            visible_indices: Vec::new(),
            class_colors: ClassColors::default(),
            error_message: None,
            export_message: None,
        }
    }

    /// Load (or fetch from cache) the configured file.
    pub fn load(&mut self) {
        let result = self
            .config
            .separator_byte()
            .map_err(|e| e.to_string())
            .and_then(|sep| {
                self.cache
                    .get_or_load(&self.config.file_path, sep)
                    .map_err(|e| e.to_string())
            });

        match result {
            Ok(table) => self.set_table(table),
            Err(msg) => {
                log::error!("Failed to load {}: {msg}", self.config.file_path.display());
                self.table = None;
                self.visible_indices.clear();
                self.error_message = Some(msg);
            }
        }
    }

    /// Ingest a newly loaded table and reset the filters.
    pub fn set_table(&mut self, table: Arc<ChartOfAccounts>) {
        self.filters = FilterParams::default();
        self.class_colors = ClassColors::new(&table.classes);
        self.visible_indices = (0..table.len()).collect();
        self.table = Some(table);
        self.error_message = None;
    }

    /// Class selector entries: [`ALL_CLASSES`] then the sorted classes.
    /// Empty when the table has no class column.
    pub fn class_options(&self) -> Vec<String> {
        match &self.table {
            Some(table) if table.has_class_column() => std::iter::once(ALL_CLASSES.to_string())
                .chain(table.classes.iter().map(u8::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Recompute `visible_indices` after a control change.
    pub fn refilter(&mut self) {
        let Some(table) = &self.table else {
            return;
        };
        match filter::apply(table, &self.filters) {
            Ok(view) => {
                self.visible_indices = view.indices;
                self.error_message = None;
            }
            Err(e) => {
                self.visible_indices.clear();
                self.error_message = Some(e.to_string());
            }
        }
    }

    pub fn reset_filters(&mut self) {
        self.filters = FilterParams::default();
        self.refilter();
    }

    /// The currently filtered rows.
    pub fn view(&self) -> Option<TableView<'_>> {
        self.table
            .as_deref()
            .map(|table| TableView::from_indices(table, self.visible_indices.clone()))
    }

    /// Write the filtered rows to `path` with the input separator.
    pub fn export_to(&mut self, path: &Path) {
        let result = match (self.view(), self.config.separator_byte()) {
            (Some(view), Ok(sep)) => export::save_csv(&view, sep, path)
                .map(|()| format!("{} lignes exportées vers {}", view.len(), path.display()))
                .map_err(|e| e.to_string()),
            (None, _) => Err("Aucune donnée chargée.".to_string()),
            (_, Err(e)) => Err(e.to_string()),
        };
        if let Err(msg) = &result {
            log::error!("Export failed: {msg}");
        }
        self.export_message = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn state_for(file: &NamedTempFile) -> AppState {
        let config = AppConfig {
            file_path: file.path().to_path_buf(),
            ..AppConfig::default()
        };
        let mut state = AppState::new(config);
        state.load();
        state
    }

    fn chart_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Numéro de compte;Intitulé du compte").unwrap();
        writeln!(file, "601000;Achats de matières").unwrap();
        writeln!(file, "701000;Ventes de produits").unwrap();
        writeln!(file, "706000;Services vendus").unwrap();
        file
    }

    #[test]
    fn load_populates_table_and_options() {
        let file = chart_file();
        let state = state_for(&file);

        assert!(state.error_message.is_none());
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert_eq!(state.class_options(), vec!["Toutes", "6", "7"]);
    }

    #[test]
    fn refilter_applies_all_controls() {
        let file = chart_file();
        let mut state = state_for(&file);

        state.filters.class = "7".into();
        state.refilter();
        assert_eq!(state.visible_indices, vec![1, 2]);

        state.filters.keywords = "vente".into();
        state.refilter();
        assert_eq!(state.visible_indices, vec![1]);

        state.reset_filters();
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn invalid_class_is_reported_inline() {
        let file = chart_file();
        let mut state = state_for(&file);

        state.filters.class = "abc".into();
        state.refilter();
        assert!(state.visible_indices.is_empty());
        assert!(state.error_message.is_some());
    }

    #[test]
    fn unloaded_state_reports_no_error() {
        let state = AppState::new(AppConfig::default());

        assert!(state.table.is_none());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn missing_file_sets_error_and_no_table() {
        let config = AppConfig {
            file_path: "/nonexistent/planco.csv".into(),
            ..AppConfig::default()
        };
        let mut state = AppState::new(config);
        state.load();

        assert!(state.table.is_none());
        assert!(state.error_message.as_deref().unwrap().contains("/nonexistent/planco.csv"));
        assert!(state.class_options().is_empty());
    }

    #[test]
    fn no_class_options_without_class_column() {
        let file = chart_file();
        let mut config = AppConfig {
            file_path: file.path().to_path_buf(),
            ..AppConfig::default()
        };
        config.columns.class = None;
        let mut state = AppState::new(config);
        state.load();

        assert!(state.table.is_some());
        assert!(state.class_options().is_empty());
    }

    #[test]
    fn export_writes_filtered_rows() {
        let file = chart_file();
        let mut state = state_for(&file);
        state.filters.prefix = "60".into();
        state.refilter();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("plan_comptable_filtre.csv");
        state.export_to(&out);

        assert!(matches!(state.export_message, Some(Ok(_))));
        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text, "Numéro de compte;Intitulé du compte;Classe\n601000;Achats de matières;6\n");
    }
}
