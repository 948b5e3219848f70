use serde_json::Value;

use super::display_value;

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in priority order, one
/// level of nesting deep, then fall back to the first scalar field.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|map| map.get("result"))
        .unwrap_or(value);

    let priority_keys = [
        "monthly_payment",
        "first_payment_amount",
        "sale_price",
        "apr",
        "finance_charge",
        "total_of_payments",
    ];

    if let Value::Object(map) = result {
        for key in &priority_keys {
            if let Some(found) = lookup(map, key) {
                if !found.is_null() {
                    println!("{}", display_value(key, found));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().find(|(_, v)| !v.is_object() && !v.is_array()) {
            println!("{}: {}", key, display_value(key, val));
            return;
        }
    }

    println!("{}", display_value("", result));
}

/// Find `key` at the top level, inside a nested object, or inside the
/// first element of a nested array of objects.
fn lookup<'a>(map: &'a serde_json::Map<String, Value>, key: &str) -> Option<&'a Value> {
    if let Some(found) = map.get(key) {
        return Some(found);
    }

    if let Some(found) = map
        .values()
        .filter_map(|v| v.as_object())
        .find_map(|nested| nested.get(key))
    {
        return Some(found);
    }

    map.values()
        .filter_map(|v| v.as_array())
        .filter_map(|rows| rows.first())
        .filter_map(|first| first.as_object())
        .find_map(|nested| nested.get(key))
}
