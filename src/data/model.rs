use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Class assigned to rows whose account number has no digits at all.
pub const UNCLASSIFIED: u8 = 0;

/// Strip every character that is not an ASCII decimal digit.
///
/// `"6 01 000"` → `"601000"`. Idempotent.
pub fn normalize_account_number(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Class of a normalized account number: its first digit, or
/// [`UNCLASSIFIED`] when the number is empty.
pub fn class_of(account_number: &str) -> u8 {
    account_number
        .bytes()
        .next()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .unwrap_or(UNCLASSIFIED)
}

// ---------------------------------------------------------------------------
// AccountRecord – one row of the chart
// ---------------------------------------------------------------------------

/// A single ledger account (one row of the source file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    /// Normalized account number (digits only).
    pub account_number: String,
    pub account_title: String,
    /// `None` when class derivation is disabled.
    pub account_class: Option<u8>,
    /// All cells in header order, including the normalized number and, when
    /// derived, the class.
    pub fields: Vec<String>,
}

// ---------------------------------------------------------------------------
// ChartOfAccounts – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded, immutable chart of accounts.
#[derive(Debug, Clone)]
pub struct ChartOfAccounts {
    pub headers: Vec<String>,
    pub records: Vec<AccountRecord>,
    /// Position of the derived class column, if any.
    pub class_column: Option<usize>,
    /// Sorted distinct classes present in the table.
    pub classes: BTreeSet<u8>,
}

impl ChartOfAccounts {
    /// Build the class index from the loaded records.
    pub fn new(
        headers: Vec<String>,
        records: Vec<AccountRecord>,
        class_column: Option<usize>,
    ) -> Self {
        let classes = records.iter().filter_map(|r| r.account_class).collect();
        ChartOfAccounts {
            headers,
            records,
            class_column,
            classes,
        }
    }

    pub fn has_class_column(&self) -> bool {
        self.class_column.is_some()
    }

    /// Number of accounts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
