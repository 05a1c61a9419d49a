//! JSON Export
//!
//! Writes the filtered+sorted records as an array of accessor-keyed objects.
//! Numbers stay numbers, text stays text, missing fields become null.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::table::{CellValue, DataTable};

use super::ExportError;

fn cell_to_value(cell: &CellValue) -> Value {
    match cell {
        CellValue::Text(s) => Value::String(s.clone()),
        CellValue::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        CellValue::Missing => Value::Null,
    }
}

pub fn write_json(path: &Path, table: &DataTable) -> Result<usize, ExportError> {
    let records = table.records();
    let indices = table.sorted_indices();

    let rows: Vec<Value> = indices
        .iter()
        .map(|idx| {
            let row = &records[*idx];
            let mut object = Map::new();
            for col in table.columns() {
                object.insert(col.accessor.clone(), cell_to_value(row.get(&col.accessor)));
            }
            Value::Object(object)
        })
        .collect();

    let mut file = File::create(path)?;
    let json = serde_json::to_string_pretty(&Value::Array(rows))?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(indices.len())
}
