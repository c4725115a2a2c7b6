//! Line-level rules the `icalendar` crate leaves to the caller (RFC 5545, section 3.1).

/// Maximum length of a physical content line in octets, excluding the CRLF.
pub const MAX_LINE_OCTETS: usize = 75;

pub const CRLF: &str = "\r\n";

/// Turn CRLF and lone CR into LF so text values only carry one kind of
/// line break before they are escaped.
pub fn normalize_line_breaks(value: &str) -> String {
    value.replace("\r\n", "\n").replace('\r', "\n")
}

/// Fold a single content line so that no physical line exceeds
/// [`MAX_LINE_OCTETS`]. Continuation lines start with one space, which
/// counts towards the limit. Multi-byte characters are never split.
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + (line.len() / MAX_LINE_OCTETS + 1) * 3);
    let mut width = 0;

    for ch in line.chars() {
        let len = ch.len_utf8();
        if width + len > MAX_LINE_OCTETS {
            folded.push_str(CRLF);
            folded.push(' ');
            width = 1;
        }
        folded.push(ch);
        width += len;
    }

    folded
}
