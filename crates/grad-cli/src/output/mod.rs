use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{Table, TableOptions};

/// Columns shown first, in this order; the rest follow alphabetically.
const LEADING_COLUMNS: &[&str] = &[
    "id",
    "name",
    "title",
    "university_name",
    "program_name",
    "date",
    "deadline",
    "days_left",
    "status",
    "priority",
];

/// Bookkeeping columns left out of tables (still present in JSON).
const HIDDEN_COLUMNS: &[&str] = &["user_id", "created_at"];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print pre-rendered text in table mode, or the value otherwise.
///
/// Used by views with a natural text layout (the calendar month grid).
pub fn output_text<T: Serialize>(
    value: &T,
    text: impl FnOnce() -> String,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format == OutputFormat::Table {
        println!("{}", text());
        Ok(())
    } else {
        output(value, format)
    }
}

fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();
    Ok(match serde_json::to_value(value)? {
        Value::Array(items) => render_rows(&items, options),
        Value::Object(map) => render_record(map, options),
        scalar => value_to_cell(&scalar),
    })
}

/// One record as key/value pairs.
fn render_record(map: Map<String, Value>, options: TableOptions) -> String {
    let mut table = Table::new(["field", "value"]);
    let keys = ordered_columns(map.keys());
    for key in keys {
        let cell = map.get(&key).map_or_else(String::new, value_to_cell);
        table.push_row(vec![key, cell]);
    }
    table.render(options)
}

fn render_rows(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let mut table = Table::new(["value"]);
        for item in items {
            table.push_row(vec![value_to_cell(item)]);
        }
        return table.render(options);
    }

    let columns = ordered_columns(items.iter().filter_map(Value::as_object).flat_map(Map::keys));
    let mut table = Table::new(columns.iter().map(String::as_str));
    for map in items.iter().filter_map(Value::as_object) {
        table.push_row(
            columns
                .iter()
                .map(|column| map.get(column).map_or_else(|| String::from("-"), value_to_cell))
                .collect(),
        );
    }
    table.render(options)
}

/// Distinct, visible column names: leading columns first, then alphabetical.
fn ordered_columns<'a>(keys: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for key in keys {
        if !HIDDEN_COLUMNS.contains(&key.as_str()) && !columns.contains(key) {
            columns.push(key.clone());
        }
    }
    columns.sort_by_key(|column| {
        let rank = LEADING_COLUMNS
            .iter()
            .position(|lead| lead == column)
            .unwrap_or(LEADING_COLUMNS.len());
        (rank, column.clone())
    });
    columns
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
