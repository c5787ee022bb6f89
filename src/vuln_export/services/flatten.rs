use serde_json::{Map, Value};

/// Flattens JSON records one nesting level deep for CSV export.
///
/// Nested object fields become `parent.child` columns. The column list is
/// the union of keys across all records, in first-seen order; cells for
/// columns a record lacks stay empty. Values still nested after one level
/// render as compact JSON text.
pub fn flatten_records(records: &[Value]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut columns: Vec<String> = Vec::new();
    let mut flats: Vec<Map<String, Value>> = Vec::with_capacity(records.len());

    for record in records {
        let flat = flatten_one(record);
        for key in flat.keys() {
            if !columns.iter().any(|column| column == key) {
                columns.push(key.clone());
            }
        }
        flats.push(flat);
    }

    let rows = flats
        .iter()
        .map(|flat| {
            columns
                .iter()
                .map(|column| flat.get(column).map(cell_text).unwrap_or_default())
                .collect()
        })
        .collect();

    (columns, rows)
}

/// Records are JSON objects; anything else contributes an all-empty row.
fn flatten_one(record: &Value) -> Map<String, Value> {
    let mut out = Map::new();
    let Value::Object(fields) = record else {
        return out;
    };

    for (key, value) in fields {
        match value {
            Value::Object(nested) => {
                for (child_key, child) in nested {
                    out.insert(format!("{key}.{child_key}"), child.clone());
                }
            }
            other => {
                out.insert(key.clone(), other.clone());
            }
        }
    }
    out
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}
