use icalendar::parser::{read_calendar, unfold};

/// One VEVENT as seen by the `icalendar` parser, with TEXT values unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEvent {
    pub uid: String,
    pub summary: String,
    pub description: Option<String>,
    pub dtstart: String,
}

/// Parse a served document with the `icalendar` parser.
///
/// Panics when the document is rejected, so a non-conforming body fails the
/// calling test.
pub fn parse_events(doc: &str) -> Vec<ParsedEvent> {
    let unfolded = unfold(doc);
    let calendar = read_calendar(&unfolded).expect("document should parse as iCalendar");

    calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .map(|vevent| ParsedEvent {
            uid: vevent.find_prop("UID").expect("UID").val.to_string(),
            summary: unescape_value(&vevent.find_prop("SUMMARY").expect("SUMMARY").val.to_string()),
            description: vevent
                .find_prop("DESCRIPTION")
                .map(|p| unescape_value(&p.val.to_string())),
            dtstart: vevent.find_prop("DTSTART").expect("DTSTART").val.to_string(),
        })
        .collect()
}

/// Reverse TEXT escaping: `\,` `\;` `\\` and `\n`/`\N`. Any other backslash
/// is kept as is.
pub fn unescape_value(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.peek() {
            Some(&next @ (',' | ';' | '\\')) => {
                result.push(next);
                chars.next();
            }
            Some('n') | Some('N') => {
                result.push('\n');
                chars.next();
            }
            _ => result.push(c),
        }
    }

    result
}
