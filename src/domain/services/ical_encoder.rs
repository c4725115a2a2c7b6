use crate::domain::entities::HolidayRecord;
use crate::domain::services::ical_text::{fold_line, normalize_line_breaks, CRLF};
use chrono::{DateTime, NaiveDate, Utc};
use icalendar::parser::unfold;
use icalendar::{Calendar, Component, EventLike, Property, ValueType};
use sha2::{Digest, Sha256};

pub const ICAL_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";

/// Renders holiday lists as iCalendar documents.
///
/// Every record becomes one all-day VEVENT, in input order. The only
/// non-deterministic value is DTSTAMP, which is supplied by the caller.
#[derive(Debug, Clone)]
pub struct IcalEncoder {
    product_id: String,
    uid_domain: String,
}

impl IcalEncoder {
    pub fn new(product_id: impl Into<String>, uid_domain: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            uid_domain: uid_domain.into(),
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn encode(
        &self,
        calendar_name: &str,
        records: &[HolidayRecord],
        generated_at: DateTime<Utc>,
    ) -> String {
        let dtstamp = generated_at.format("%Y%m%dT%H%M%SZ").to_string();

        let mut cal = Calendar::new();
        cal.name(&normalize_line_breaks(calendar_name));

        for record in records {
            cal.push(self.event(record, &dtstamp));
        }

        self.finish(&cal.done().to_string())
    }

    fn event(&self, record: &HolidayRecord, dtstamp: &str) -> icalendar::Event {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&self.event_uid(record));
        ics_event.add_property("DTSTAMP", dtstamp);
        ics_event.summary(&normalize_line_breaks(&record.name));

        add_date_property(&mut ics_event, "DTSTART", record.date);
        // A record without a following day keeps DTSTART only, which still
        // reads as a one-day event.
        if let Some(end) = record.end_date() {
            add_date_property(&mut ics_event, "DTEND", end);
        }

        if let Some(description) = &record.description {
            ics_event.description(&normalize_line_breaks(description));
        }
        ics_event.add_property("TRANSP", "TRANSPARENT");

        ics_event.done()
    }

    /// Rewrite PRODID, add METHOD and refold every line at 75 octets.
    fn finish(&self, ics: &str) -> String {
        let unfolded = unfold(ics);
        let mut doc = String::with_capacity(unfolded.len() + unfolded.len() / 25);

        for line in unfolded.lines() {
            if line.is_empty() {
                continue;
            }

            if line.starts_with("PRODID:") {
                push_line(&mut doc, &format!("PRODID:{}", self.product_id));
                push_line(&mut doc, "METHOD:PUBLISH");
                continue;
            }

            push_line(&mut doc, line);
        }

        doc
    }

    /// Stable identifier: the same holiday always maps to the same UID, so
    /// subscribed clients update entries instead of duplicating them.
    pub fn event_uid(&self, record: &HolidayRecord) -> String {
        let mut hasher = Sha256::new();
        if let Some(region) = &record.region {
            hasher.update(region.as_bytes());
            hasher.update(b"|");
        }
        hasher.update(record.name.as_bytes());
        let digest = hex::encode(hasher.finalize());

        format!(
            "{}-{}@{}",
            record.date.format("%Y%m%d"),
            &digest[..16],
            self.uid_domain
        )
    }
}

/// Human-readable calendar title, e.g. `Feiertage 2025 (BY)`.
pub fn calendar_name(year: i32, scope: &str) -> String {
    format!("Feiertage {} ({})", year, scope)
}

fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

fn push_line(doc: &mut String, line: &str) {
    doc.push_str(&fold_line(line));
    doc.push_str(CRLF);
}
