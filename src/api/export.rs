use serde::Serialize;

use crate::core::{Ledger, ProjectionPoint};

pub fn ledger_to_csv(ledger: &Ledger) -> Result<String, String> {
    write_rows(ledger.entries())
}

pub fn projection_to_csv(points: &[ProjectionPoint]) -> Result<String, String> {
    write_rows(points)
}

// Header comes from the first serialized record, so an empty slice yields an
// empty document.
fn write_rows<T: Serialize>(rows: &[T]) -> Result<String, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| format!("csv encode: {e}"))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| format!("csv flush: {e}"))?;
    String::from_utf8(bytes).map_err(|e| format!("csv utf-8: {e}"))
}
