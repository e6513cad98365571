use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{class_of, normalize_account_number, AccountRecord, ChartOfAccounts, UNCLASSIFIED};
use crate::config::ColumnNames;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Le fichier CSV spécifié ('{}') n'a pas été trouvé.", .0.display())]
    NotFound(PathBuf),

    #[error("Erreur lors de la lecture du fichier CSV: {0}")]
    Parse(csv::Error),

    #[error("Colonne introuvable: aucune en-tête ne correspond à {aliases:?}")]
    MissingColumn { aliases: Vec<String> },

    #[error("Erreur d'accès au fichier '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a chart of accounts from a delimited text file.
///
/// The account-number column is normalized to digits only and the class
/// column is derived from its first digit. Rows with no digits at all get
/// class [`UNCLASSIFIED`].
pub fn load_file(
    path: &Path,
    separator: u8,
    columns: &ColumnNames,
) -> Result<ChartOfAccounts, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_chart(file, separator, columns, path)
}

/// Parse a chart of accounts from any reader. See [`load_file`].
pub fn load_reader<R: std::io::Read>(
    reader: R,
    separator: u8,
    columns: &ColumnNames,
) -> Result<ChartOfAccounts, LoadError> {
    parse_chart(reader, separator, columns, Path::new("<reader>"))
}

/// Split CSV failures: I/O errors while reading are `Io`, everything else
/// (field counts, UTF-8) is `Parse`.
fn read_error(err: csv::Error, path: &Path) -> LoadError {
    if let csv::ErrorKind::Io(source) = err.kind() {
        return LoadError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(source.kind(), source.to_string()),
        };
    }
    LoadError::Parse(err)
}

fn parse_chart<R: std::io::Read>(
    reader: R,
    separator: u8,
    columns: &ColumnNames,
    path: &Path,
) -> Result<ChartOfAccounts, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(separator)
        .has_headers(true)
        .from_reader(reader);

    let mut headers: Vec<String> = reader
        .headers()
        .map_err(|e| read_error(e, path))?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let number_column = find_column(&headers, &columns.account_number)?;
    let title_column = find_column(&headers, &columns.account_title)?;

    // Overwrite an existing class column, append one otherwise.
    let class_column = columns.class.as_ref().map(|name| {
        let name = name.trim();
        headers.iter().position(|h| h.trim() == name).unwrap_or_else(|| {
            headers.push(name.to_string());
            headers.len() - 1
        })
    });

    let mut records = Vec::new();
    let mut unclassified = 0usize;

    for result in reader.records() {
        let row = result.map_err(|e| read_error(e, path))?;
        let mut fields: Vec<String> = row.iter().map(str::to_string).collect();

        let account_number = normalize_account_number(&fields[number_column]);
        fields[number_column] = account_number.clone();

        let account_class = class_column.map(|idx| {
            let class = class_of(&account_number);
            if class == UNCLASSIFIED {
                unclassified += 1;
            }
            if idx == fields.len() {
                fields.push(class.to_string());
            } else {
                fields[idx] = class.to_string();
            }
            class
        });

        records.push(AccountRecord {
            account_number,
            account_title: fields[title_column].clone(),
            account_class,
            fields,
        });
    }

    if unclassified > 0 {
        log::warn!("{unclassified} row(s) without any digit in the account number, assigned class {UNCLASSIFIED}");
    }

    Ok(ChartOfAccounts::new(headers, records, class_column))
}

fn find_column(headers: &[String], aliases: &[String]) -> Result<usize, LoadError> {
    aliases
        .iter()
        .find_map(|alias| headers.iter().position(|h| h.trim() == alias.trim()))
        .ok_or_else(|| LoadError::MissingColumn {
            aliases: aliases.to_vec(),
        })
}
