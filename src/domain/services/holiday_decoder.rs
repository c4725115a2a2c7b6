use crate::domain::entities::{HolidayRecord, REGION_CODES};
use crate::domain::errors::{GatewayError, GatewayResult};
use chrono::NaiveDate;
use serde_json::{Map, Value};

const DESCRIPTION_KEYS: [&str; 3] = ["hinweis", "description", "comment"];

/// Turn an upstream JSON payload into holiday records, keeping document order.
///
/// Accepted shapes:
/// - `[{"name": "Neujahr", "date": "2025-01-01"}, ...]`
/// - `{"Neujahr": {"datum": "2025-01-01", "hinweis": ""}, ...}`
/// - `{"Neujahr": "2025-01-01", ...}` (`nur_daten=1`)
/// - `{"BW": {<one of the object shapes>}, ...}` (no state filter)
///
/// Only state codes are treated as groups; any other object entry must carry
/// a `datum`. A wrong overall shape is an upstream error, a missing or bad
/// date an encoding error.
pub fn decode_holidays(payload: &Value) -> GatewayResult<Vec<HolidayRecord>> {
    match payload {
        Value::Array(items) => items.iter().map(decode_array_item).collect(),
        Value::Object(entries) => {
            let mut records = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                match value {
                    Value::Object(inner) if REGION_CODES.contains(&key.as_str()) => {
                        decode_region_group(key, inner, &mut records)?;
                    }
                    _ => records.push(decode_named_entry(key, value)?),
                }
            }
            Ok(records)
        }
        _ => Err(unexpected_format("expected a JSON array or object")),
    }
}

fn decode_region_group(
    region: &str,
    entries: &Map<String, Value>,
    records: &mut Vec<HolidayRecord>,
) -> GatewayResult<()> {
    for (name, value) in entries {
        records.push(decode_named_entry(name, value)?.with_region(region));
    }
    Ok(())
}

/// `"Neujahr": "2025-01-01"` or `"Neujahr": {"datum": ..., "hinweis": ...}`
fn decode_named_entry(name: &str, value: &Value) -> GatewayResult<HolidayRecord> {
    match value {
        Value::String(date) => Ok(HolidayRecord::new(name, parse_date(name, date)?)),
        Value::Object(fields) => {
            let date = fields.get("datum").and_then(Value::as_str).ok_or_else(|| {
                GatewayError::EncodingError(format!("Holiday '{}' has no date", name))
            })?;
            let record = HolidayRecord::new(name, parse_date(name, date)?);
            Ok(match description(fields) {
                Some(text) => record.with_description(text),
                None => record,
            })
        }
        _ => Err(GatewayError::EncodingError(format!(
            "Holiday '{}' has no date",
            name
        ))),
    }
}

fn decode_array_item(item: &Value) -> GatewayResult<HolidayRecord> {
    let fields = item
        .as_object()
        .ok_or_else(|| unexpected_format("array entries must be objects"))?;

    let name = fields
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| unexpected_format("array entry without a 'name'"))?;

    let date = fields
        .get("date")
        .or_else(|| fields.get("datum"))
        .and_then(Value::as_str)
        .ok_or_else(|| GatewayError::EncodingError(format!("Holiday '{}' has no date", name)))?;

    let mut record = HolidayRecord::new(name, parse_date(name, date)?);
    if let Some(text) = description(fields) {
        record = record.with_description(text);
    }
    if let Some(region) = fields.get("region").and_then(Value::as_str) {
        record = record.with_region(region);
    }
    Ok(record)
}

fn description(fields: &Map<String, Value>) -> Option<&str> {
    DESCRIPTION_KEYS
        .iter()
        .find_map(|key| fields.get(*key).and_then(Value::as_str))
}

fn parse_date(name: &str, raw: &str) -> GatewayResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        GatewayError::EncodingError(format!(
            "Holiday '{}' has an invalid date '{}'",
            name, raw
        ))
    })?;
    ensure_has_end(name, date)
}

/// All-day events end on the following day, which must be representable.
fn ensure_has_end(name: &str, date: NaiveDate) -> GatewayResult<NaiveDate> {
    match date.succ_opt() {
        Some(_) => Ok(date),
        None => Err(GatewayError::EncodingError(format!(
            "Holiday '{}' on {} has no following day",
            name, date
        ))),
    }
}

fn unexpected_format(detail: &str) -> GatewayError {
    GatewayError::UpstreamError {
        status: None,
        message: format!("Unexpected data format from upstream: {}", detail),
    }
}
