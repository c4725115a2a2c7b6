use crate::domain::errors::{GatewayError, GatewayResult};
use serde::Deserialize;
use std::fmt;

pub const MIN_YEAR: i32 = 1970;
pub const MAX_YEAR: i32 = 2100;

/// Scope codes accepted by the upstream API: the national scope plus the
/// sixteen federal states.
pub const REGION_CODES: [&str; 17] = [
    "NATIONAL", "BW", "BY", "BE", "BB", "HB", "HH", "HE", "MV", "NI", "NW", "RP", "SL", "SN",
    "ST", "SH", "TH",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region(String);

impl Region {
    pub fn parse(code: &str) -> GatewayResult<Self> {
        let normalized = code.trim().to_ascii_uppercase();
        if REGION_CODES.contains(&normalized.as_str()) {
            Ok(Self(normalized))
        } else {
            Err(GatewayError::InvalidRequest(format!(
                "Unknown federal state code '{}'",
                code
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
    Ical,
}

impl ResponseFormat {
    pub fn parse(value: &str) -> GatewayResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ResponseFormat::Json),
            "ical" => Ok(ResponseFormat::Ical),
            other => Err(GatewayError::InvalidRequest(format!(
                "Unsupported format '{}', expected 'json' or 'ical'",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Ical => "ical",
        }
    }
}

/// Normalized input of a single request. `format` only shapes the response,
/// it is never forwarded upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayQuery {
    pub year: i32,
    pub region: Option<Region>,
    pub dates_only: Option<bool>,
    pub format: ResponseFormat,
}

impl HolidayQuery {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            region: None,
            dates_only: None,
            format: ResponseFormat::Json,
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    /// Scope label used for calendar names and filenames.
    pub fn scope(&self) -> &str {
        self.region.as_ref().map(Region::as_str).unwrap_or("NATIONAL")
    }

    /// Query parameters in the upstream API's naming.
    pub fn upstream_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("jahr", self.year.to_string())];
        if let Some(region) = &self.region {
            params.push(("nur_land", region.as_str().to_string()));
        }
        if let Some(dates_only) = self.dates_only {
            params.push(("nur_daten", if dates_only { "1" } else { "0" }.to_string()));
        }
        params
    }
}

/// Query string as it arrives on the wire. Every field is kept as text so
/// that malformed values surface as `InvalidRequest` instead of a framework
/// rejection.
#[derive(Debug, Default, Deserialize)]
pub struct RawHolidayParams {
    pub jahr: Option<String>,
    pub nur_land: Option<String>,
    pub nur_daten: Option<String>,
    pub format: Option<String>,
}

impl RawHolidayParams {
    pub fn into_query(self) -> GatewayResult<HolidayQuery> {
        let year = match self.jahr.as_deref().map(str::trim) {
            None | Some("") => {
                return Err(GatewayError::InvalidRequest(
                    "Query parameter 'jahr' is required".to_string(),
                ))
            }
            Some(raw) => raw.parse::<i32>().map_err(|_| {
                GatewayError::InvalidRequest(format!("'jahr' must be an integer, got '{}'", raw))
            })?,
        };

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(GatewayError::InvalidRequest(format!(
                "'jahr' must be between {} and {}",
                MIN_YEAR, MAX_YEAR
            )));
        }

        let region = match self.nur_land.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(code) => Some(Region::parse(code)?),
        };

        let dates_only = match self.nur_daten.as_deref().map(str::trim) {
            None | Some("") => None,
            Some("0") => Some(false),
            Some("1") => Some(true),
            Some(other) => {
                return Err(GatewayError::InvalidRequest(format!(
                    "'nur_daten' must be 0 or 1, got '{}'",
                    other
                )))
            }
        };

        let format = match self.format.as_deref().map(str::trim) {
            None | Some("") => ResponseFormat::default(),
            Some(value) => ResponseFormat::parse(value)?,
        };

        Ok(HolidayQuery {
            year,
            region,
            dates_only,
            format,
        })
    }
}
