//! CSV Export
//!
//! One header row from the column labels, then the filtered+sorted records
//! as raw cell text (custom renderers are a display concern, not data).

use std::path::Path;

use crate::domain::table::DataTable;

use super::ExportError;

pub fn write_csv(path: &Path, table: &DataTable) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(table.columns().iter().map(|col| col.header.as_str()))?;

    let records = table.records();
    let indices = table.sorted_indices();
    for idx in &indices {
        let row = &records[*idx];
        wtr.write_record(
            table
                .columns()
                .iter()
                .map(|col| row.get(&col.accessor).display()),
        )?;
    }

    wtr.flush()?;
    Ok(indices.len())
}
