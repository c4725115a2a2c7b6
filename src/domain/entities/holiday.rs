use chrono::NaiveDate;

/// A single public holiday as reported by the upstream API.
///
/// Holidays are all-day events, so only the calendar date is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRecord {
    pub name: String,
    pub date: NaiveDate,
    /// Upstream note ("hinweis"), absent when `nur_daten=1` was requested
    pub description: Option<String>,
    /// State code when upstream grouped the result by federal state
    pub region: Option<String>,
}

impl HolidayRecord {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
            description: None,
            region: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Exclusive end date of the all-day event, `None` on the last date
    /// chrono can represent.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.date.succ_opt()
    }
}

/// Raw upstream response, already verified to be well-formed JSON.
#[derive(Debug, Clone)]
pub struct UpstreamPayload {
    /// Body exactly as received, relayed unchanged for JSON passthrough
    pub body: String,
    pub json: serde_json::Value,
}

impl UpstreamPayload {
    pub fn new(body: String, json: serde_json::Value) -> Self {
        Self { body, json }
    }
}
