use thiserror::Error;

use super::model::{AccountRecord, ChartOfAccounts};

/// Class selector value meaning "no class filter".
pub const ALL_CLASSES: &str = "Toutes";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid class filter value: {0:?}")]
    InvalidFilterValue(String),
}

// ---------------------------------------------------------------------------
// Filter parameters: the current control values
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParams {
    /// [`ALL_CLASSES`] or a class digit.
    pub class: String,
    /// Leading digits of the account number.
    pub prefix: String,
    /// Whitespace-separated keywords searched in the account title.
    pub keywords: String,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            class: ALL_CLASSES.to_string(),
            prefix: String::new(),
            keywords: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// TableView – a derived, read-only selection of rows
// ---------------------------------------------------------------------------

/// Rows of a [`ChartOfAccounts`] selected by index. Never mutates the table.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    pub table: &'a ChartOfAccounts,
    pub indices: Vec<usize>,
}

impl<'a> TableView<'a> {
    /// Every row of the table.
    pub fn full(table: &'a ChartOfAccounts) -> Self {
        Self {
            table,
            indices: (0..table.len()).collect(),
        }
    }

    pub fn from_indices(table: &'a ChartOfAccounts, indices: Vec<usize>) -> Self {
        Self { table, indices }
    }

    pub fn records(&self) -> impl Iterator<Item = &'a AccountRecord> + '_ {
        let table = self.table;
        self.indices.iter().map(move |&i| &table.records[i])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    fn retain(mut self, mut keep: impl FnMut(&AccountRecord) -> bool) -> Self {
        let records = &self.table.records;
        self.indices.retain(|&i| keep(&records[i]));
        self
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Keep rows of the selected class. [`ALL_CLASSES`] keeps everything.
pub fn filter_by_class<'a>(
    view: TableView<'a>,
    selected_class: &str,
) -> Result<TableView<'a>, FilterError> {
    if selected_class == ALL_CLASSES {
        return Ok(view);
    }
    let class: i64 = selected_class
        .trim()
        .parse()
        .map_err(|_| FilterError::InvalidFilterValue(selected_class.to_string()))?;
    Ok(view.retain(|rec| rec.account_class.map(i64::from) == Some(class)))
}

/// Keep rows whose normalized account number starts with `prefix`.
pub fn filter_by_prefix<'a>(view: TableView<'a>, prefix: &str) -> TableView<'a> {
    if prefix.is_empty() {
        return view;
    }
    view.retain(|rec| rec.account_number.starts_with(prefix))
}

/// Keep rows whose title contains every whitespace-separated keyword,
/// case-insensitively, as a substring.
pub fn filter_by_keywords<'a>(view: TableView<'a>, query: &str) -> TableView<'a> {
    let keywords: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    if keywords.is_empty() {
        return view;
    }
    view.retain(|rec| {
        let title = rec.account_title.to_lowercase();
        keywords.iter().all(|k| title.contains(k.as_str()))
    })
}

/// Run the full pipeline (class → prefix → keywords) for one set of
/// control values. The class step is skipped when the table has no class
/// column.
pub fn apply<'a>(
    table: &'a ChartOfAccounts,
    params: &FilterParams,
) -> Result<TableView<'a>, FilterError> {
    let mut view = TableView::full(table);
    if table.has_class_column() {
        view = filter_by_class(view, &params.class)?;
    }
    let view = filter_by_prefix(view, &params.prefix);
    let view = filter_by_keywords(view, &params.keywords);
    log::debug!(
        "filter {:?} → {} / {} rows",
        params,
        view.len(),
        table.len()
    );
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::class_of;

    fn chart(rows: &[(&str, &str)]) -> ChartOfAccounts {
        let records = rows
            .iter()
            .map(|&(n, t)| {
                let class = class_of(n);
                AccountRecord {
                    account_number: n.to_string(),
                    account_title: t.to_string(),
                    account_class: Some(class),
                    fields: vec![n.to_string(), t.to_string(), class.to_string()],
                }
            })
            .collect();
        ChartOfAccounts::new(
            vec!["Numéro de compte".into(), "Intitulé du compte".into(), "Classe".into()],
            records,
            Some(2),
        )
    }

    fn sample() -> ChartOfAccounts {
        chart(&[("601000", "Achats de matières"), ("701000", "Ventes de produits")])
    }

    fn larger() -> ChartOfAccounts {
        chart(&[
            ("101000", "Capital social"),
            ("401100", "Fournisseurs dettes en compte"),
            ("411100", "Clients"),
            ("601000", "Achats de marchandises"),
            ("602000", "Achats de matières premières"),
            ("701000", "Ventes de marchandises"),
            ("706000", "Services vendus"),
            ("", "Comptes hors classe"),
        ])
    }

    fn params(class: &str, prefix: &str, keywords: &str) -> FilterParams {
        FilterParams {
            class: class.into(),
            prefix: prefix.into(),
            keywords: keywords.into(),
        }
    }

    #[test]
    fn class_filter_keeps_selected_class() {
        let table = sample();
        let view = filter_by_class(TableView::full(&table), "6").unwrap();
        assert_eq!(view.indices, vec![0]);
    }

    #[test]
    fn class_filter_rejects_garbage() {
        let table = sample();
        let err = filter_by_class(TableView::full(&table), "six").unwrap_err();
        assert_eq!(err, FilterError::InvalidFilterValue("six".into()));
    }

    #[test]
    fn class_zero_selects_unclassified_rows() {
        let table = larger();
        let view = filter_by_class(TableView::full(&table), "0").unwrap();
        assert_eq!(view.indices, vec![7]);
    }

    #[test]
    fn prefix_filter() {
        let table = sample();
        let view = filter_by_prefix(TableView::full(&table), "70");
        assert_eq!(view.indices, vec![1]);
    }

    #[test]
    fn keyword_filter_single_token() {
        let table = sample();
        let view = filter_by_keywords(TableView::full(&table), "vente");
        assert_eq!(view.indices, vec![1]);
    }

    #[test]
    fn keyword_filter_requires_every_token() {
        let table = sample();
        let view = filter_by_keywords(TableView::full(&table), "achats matières");
        assert_eq!(view.indices, vec![0]);

        let view = filter_by_keywords(TableView::full(&table), "MATIÈRES achats");
        assert_eq!(view.indices, vec![0]);

        let view = filter_by_keywords(TableView::full(&table), "achats produits");
        assert!(view.is_empty());
    }

    #[test]
    fn keyword_filter_matches_substrings() {
        let table = larger();
        let view = filter_by_keywords(TableView::full(&table), "march");
        assert_eq!(view.indices, vec![3, 5]);
    }

    #[test]
    fn empty_parameters_are_identity() {
        let table = larger();
        let all: Vec<usize> = (0..table.len()).collect();

        assert_eq!(filter_by_class(TableView::full(&table), ALL_CLASSES).unwrap().indices, all);
        assert_eq!(filter_by_prefix(TableView::full(&table), "").indices, all);
        assert_eq!(filter_by_keywords(TableView::full(&table), "").indices, all);
        assert_eq!(filter_by_keywords(TableView::full(&table), "  \t ").indices, all);
        assert_eq!(apply(&table, &FilterParams::default()).unwrap().indices, all);
    }

    #[test]
    fn both_rows_returned_without_filters() {
        let table = sample();
        let view = apply(&table, &params(ALL_CLASSES, "", "")).unwrap();
        let titles: Vec<&str> = view.records().map(|r| r.account_title.as_str()).collect();
        assert_eq!(titles, vec!["Achats de matières", "Ventes de produits"]);
    }

    #[test]
    fn composition_order_does_not_matter() {
        let table = larger();
        let cases = [("6", "60", "achats"), ("7", "", "march"), ("4", "41", ""), ("1", "2", "x")];

        for (class, prefix, keywords) in cases {
            let full = || TableView::full(&table);
            let a = filter_by_keywords(
                filter_by_prefix(filter_by_class(full(), class).unwrap(), prefix),
                keywords,
            );
            let b = filter_by_class(
                filter_by_prefix(filter_by_keywords(full(), keywords), prefix),
                class,
            )
            .unwrap();
            let c = filter_by_prefix(
                filter_by_class(filter_by_keywords(full(), keywords), class).unwrap(),
                prefix,
            );
            assert_eq!(a.indices, b.indices);
            assert_eq!(a.indices, c.indices);
            assert_eq!(apply(&table, &params(class, prefix, keywords)).unwrap().indices, a.indices);
        }
    }

    #[test]
    fn filters_do_not_mutate_table() {
        let table = larger();
        let before = table.records.clone();
        let _ = apply(&table, &params("6", "60", "achats")).unwrap();
        assert_eq!(table.records, before);
    }

    #[test]
    fn class_step_skipped_without_class_column() {
        let mut table = sample();
        table.class_column = None;
        let view = apply(&table, &params("not-a-class", "", "")).unwrap();
        assert_eq!(view.len(), 2);
    }
}
