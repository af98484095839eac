use chrono::NaiveDate;
use serde::de::DeserializeOwned;

/// Parse a `snake_case` enum value using serde deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}

/// Parse a `YYYY-MM` month into `(year, month)`. Years are limited to four digits.
pub fn parse_month(raw: &str) -> anyhow::Result<(i32, u32)> {
    let parsed = raw
        .trim()
        .split_once('-')
        .and_then(|(y, m)| Some((y.parse::<i32>().ok()?, m.parse::<u32>().ok()?)))
        .filter(|(y, m)| (1..=9999).contains(y) && (1..=12).contains(m));
    parsed.ok_or_else(|| anyhow::anyhow!("invalid month '{raw}' (expected YYYY-MM)"))
}

/// Optional text flag where an empty value clears the field.
pub fn non_blank(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}
