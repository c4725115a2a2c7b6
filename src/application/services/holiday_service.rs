use crate::domain::entities::{HolidayQuery, ResponseFormat};
use crate::domain::errors::GatewayResult;
use crate::domain::ports::HolidaySource;
use crate::domain::services::{calendar_name, decode_holidays, IcalEncoder};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Result of a holiday lookup, already shaped for the requested format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HolidayExport {
    /// Upstream body, unchanged
    Json(String),
    Ical { filename: String, body: String },
}

#[derive(Clone)]
pub struct HolidayService {
    source: Arc<dyn HolidaySource>,
    encoder: IcalEncoder,
}

impl HolidayService {
    pub fn new(source: Arc<dyn HolidaySource>, encoder: IcalEncoder) -> Self {
        Self { source, encoder }
    }

    /// Fetch holidays and shape them according to `query.format`.
    pub async fn export(&self, query: &HolidayQuery) -> GatewayResult<HolidayExport> {
        metrics::counter!("holiday_requests_total", "format" => query.format.as_str())
            .increment(1);

        let result = match query.format {
            ResponseFormat::Json => self.export_json(query).await.map(HolidayExport::Json),
            ResponseFormat::Ical => self.export_ical(query, Utc::now()).await,
        };

        if let Err(e) = &result {
            metrics::counter!("gateway_failures_total", "kind" => e.kind()).increment(1);
        }
        result
    }

    pub async fn export_json(&self, query: &HolidayQuery) -> GatewayResult<String> {
        let payload = self.source.fetch(query).await?;
        Ok(payload.body)
    }

    pub async fn export_ical(
        &self,
        query: &HolidayQuery,
        generated_at: DateTime<Utc>,
    ) -> GatewayResult<HolidayExport> {
        let payload = self.source.fetch(query).await?;
        let records = decode_holidays(&payload.json)?;

        tracing::debug!(
            "Encoding {} holidays for {} ({})",
            records.len(),
            query.year,
            query.scope()
        );

        let body = self.encoder.encode(
            &calendar_name(query.year, query.scope()),
            &records,
            generated_at,
        );

        Ok(HolidayExport::Ical {
            filename: ical_filename(query),
            body,
        })
    }
}

pub fn ical_filename(query: &HolidayQuery) -> String {
    format!("feiertage-{}-{}.ics", query.year, query.scope())
}
