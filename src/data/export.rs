use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::filter::TableView;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Erreur lors de l'écriture du CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Erreur lors de l'écriture de '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// CSV export of a filtered view
// ---------------------------------------------------------------------------

/// Write the header row and the view's rows, without any row index.
pub fn write_csv<W: Write>(view: &TableView<'_>, separator: u8, writer: W) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(separator)
        .from_writer(writer);
    writer.write_record(&view.table.headers)?;
    for rec in view.records() {
        writer.write_record(&rec.fields)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// UTF-8 bytes of the exported view.
pub fn to_csv_bytes(view: &TableView<'_>, separator: u8) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    write_csv(view, separator, &mut buf)?;
    Ok(buf)
}

pub fn save_csv(view: &TableView<'_>, separator: u8, path: &Path) -> Result<(), ExportError> {
    let bytes = to_csv_bytes(view, separator)?;
    std::fs::write(path, bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Exported {} accounts to {}", view.len(), path.display());
    Ok(())
}
