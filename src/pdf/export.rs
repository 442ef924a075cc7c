use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::core::{Invoice, SeikyuError};

use super::layout::render;

/// File name an exported invoice is saved under:
/// `invoice_<invoice number>.pdf`, with path-hostile characters replaced.
pub fn suggested_filename(invoice: &Invoice) -> String {
    let number: String = invoice
        .invoice_number
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("invoice_{number}.pdf")
}

/// Render `invoice` and write it into `dir`, atomically.
///
/// The document is rendered into a named temporary file inside `dir` and
/// persisted to its final name only once the write has fully succeeded.
/// The temporary is removed on every failure path, so a failed export
/// leaves no partial file behind.
pub fn export_to_file(invoice: &Invoice, dir: impl AsRef<Path>) -> Result<PathBuf, SeikyuError> {
    let dir = dir.as_ref();
    let bytes = render(invoice)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.flush()?;

    let target = dir.join(suggested_filename(invoice));
    tmp.persist(&target).map_err(|e| SeikyuError::Io(e.error))?;
    Ok(target)
}
