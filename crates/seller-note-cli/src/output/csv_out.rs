use serde_json::Value;
use std::io;

use super::display_value;

/// Write the primary row set as CSV: the first array of objects found in
/// the result (schedule lines, payment streams, note-sale analyses),
/// falling back to the scalar fields.
pub fn print_csv(value: &Value) {
    let result = value
        .as_object()
        .and_then(|map| map.get("result"))
        .unwrap_or(value);

    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Some(rows) = find_rows(result) {
        write_rows(&mut wtr, rows);
    } else if let Value::Object(map) = result {
        let _ = wtr.write_record(["field", "value"]);
        for (key, val) in map.iter().filter(|(_, v)| !v.is_object() && !v.is_array()) {
            let _ = wtr.write_record([key.as_str(), &display_value(key, val)]);
        }
    }

    let _ = wtr.flush();
}

/// Depth-first search for the first array of objects.
fn find_rows(value: &Value) -> Option<&[Value]> {
    match value {
        Value::Array(rows) if matches!(rows.first(), Some(Value::Object(_))) => Some(rows),
        Value::Object(map) => map.values().find_map(find_rows),
        _ => None,
    }
}

fn write_rows(wtr: &mut csv::Writer<io::StdoutLock<'_>>, rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let _ = wtr.write_record(&headers);

    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|header| {
                    map.get(header.as_str())
                        .map(|v| display_value(header, v))
                        .unwrap_or_default()
                })
                .collect();
            let _ = wtr.write_record(&record);
        }
    }
}
