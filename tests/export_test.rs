//! Export round-trips the filtered+sorted view to disk.

use std::fs;
use std::path::PathBuf;

use quarterdeck::domain::table::{Column, DataTable, Record};
use quarterdeck::modules::export::{write_csv, write_json};

fn fixture_table() -> DataTable {
    let records = vec![
        Record::new().with("id", 2u64).with("name", "Bob"),
        Record::new()
            .with("id", 1u64)
            .with("name", "Alice")
            .with("score", 7.5),
        Record::new().with("id", 3u64).with("name", "Carol"),
    ];
    let columns = vec![
        Column::new("ID", "id"),
        Column::new("Name", "name"),
        Column::new("Score", "score"),
    ];
    DataTable::new(records, columns, 10)
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("quarterdeck-test-{}-{name}", std::process::id()))
}

#[test]
fn csv_export_writes_header_and_sorted_rows() {
    let mut table = fixture_table();
    table.toggle_sort("id");
    let path = temp_path("sorted.csv");

    let written = write_csv(&path, &table).expect("csv export");
    assert_eq!(written, 3);

    let content = fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "ID,Name,Score");
    assert_eq!(lines[1], "1,Alice,7.5");
    assert_eq!(lines[2], "2,Bob,");
    assert_eq!(lines[3], "3,Carol,");

    let _ = fs::remove_file(&path);
}

#[test]
fn csv_export_honors_the_active_filter() {
    let mut table = fixture_table();
    table.set_search("bob");
    let path = temp_path("filtered.csv");

    let written = write_csv(&path, &table).expect("csv export");
    assert_eq!(written, 1);

    let content = fs::read_to_string(&path).expect("read back");
    assert!(content.contains("Bob"));
    assert!(!content.contains("Alice"));

    let _ = fs::remove_file(&path);
}

#[test]
fn json_export_keeps_types_and_nulls_missing_fields() {
    let mut table = fixture_table();
    table.toggle_sort("id");
    let path = temp_path("rows.json");

    let written = write_json(&path, &table).expect("json export");
    assert_eq!(written, 3);

    let content = fs::read_to_string(&path).expect("read back");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0]["name"], "Alice");
    assert_eq!(rows[0]["id"], 1.0);
    assert_eq!(rows[0]["score"], 7.5);
    assert!(rows[1]["score"].is_null());

    let _ = fs::remove_file(&path);
}
