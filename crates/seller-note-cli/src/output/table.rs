use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::display_value;

/// Render the output as tables: scalar fields as a Field/Value table,
/// then each nested object or row set (schedule lines, payment streams,
/// note-sale analyses) as its own titled table.
pub fn print_table(value: &Value) {
    let envelope = value.as_object();
    let result = envelope
        .and_then(|map| map.get("result"))
        .unwrap_or(value);

    print_node("", result);

    if let Some(map) = envelope {
        if let Some(Value::Array(warnings)) = map.get("warnings") {
            if !warnings.is_empty() {
                println!("\nWarnings:");
                for warning in warnings {
                    if let Value::String(s) = warning {
                        println!("  - {}", s);
                    }
                }
            }
        }
        if let Some(Value::String(methodology)) = map.get("methodology") {
            println!("\nMethodology: {}", methodology);
        }
    }
}

fn print_node(title: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            let scalars: Vec<(&String, &Value)> = map
                .iter()
                .filter(|(_, v)| !v.is_object() && !v.is_array())
                .collect();

            if !scalars.is_empty() {
                if !title.is_empty() {
                    println!("\n{title}");
                }
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                for (key, val) in &scalars {
                    builder.push_record([key.as_str(), &display_value(key, val)]);
                }
                println!("{}", Table::from(builder));
            }

            for (key, val) in map.iter().filter(|(_, v)| v.is_object() || v.is_array()) {
                let nested = if title.is_empty() {
                    key.clone()
                } else {
                    format!("{title}.{key}")
                };
                print_node(&nested, val);
            }
        }
        Value::Array(rows) => print_rows(title, rows),
        _ => println!("{}", display_value("", value)),
    }
}

fn print_rows(title: &str, rows: &[Value]) {
    if rows.is_empty() {
        return;
    }
    if !title.is_empty() {
        println!("\n{title}");
    }

    if let Some(Value::Object(first)) = rows.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(headers.clone());

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
                builder.push_record(record);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for row in rows {
            println!("{}", display_value("", row));
        }
    }
}
