//! Finalizer: shuffle the combined rows and write the CSV table.

use crate::{
    error::GenResult,
    rng::StageRng,
    transaction::TransactionRecord,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Uniformly permute the rows, destroying the fraud-then-legitimate
/// block order.
pub fn shuffle_rows(rows: &mut [TransactionRecord], rng: &mut StageRng) {
    rng.shuffle(rows);
    log::debug!("finalizer: shuffled {} rows", rows.len());
}

/// Write rows, header first, to any sink.
pub fn write_csv<W: Write>(sink: W, rows: &[TransactionRecord]) -> GenResult<()> {
    let mut writer = csv::Writer::from_writer(sink);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write rows to `path`. The file handle is closed on return, error or not.
pub fn write_csv_file(path: &Path, rows: &[TransactionRecord]) -> GenResult<()> {
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), rows)?;
    log::info!("finalizer: wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Render rows to an in-memory CSV string.
pub fn to_csv_string(rows: &[TransactionRecord]) -> GenResult<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, rows)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
