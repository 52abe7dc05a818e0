//! Date literal recognition
//!
//! Finds date-like substrings and rewrites them into Tana's typed reference
//! syntax, e.g. `14th March 2016` becomes `[[date:2016-03-14]]`. Recognition
//! runs over a fixed, statically-initialized pattern table; matches are
//! normalized into the `YYYY-MM-DD` family (`YYYY`, `YYYY-MM`, `YYYY-Www`,
//! `start/end` durations, `YYYY-MM-DD HH:MM` times) before wrapping.
//!
//! Existing typed references, URLs and Markdown links are shielded before
//! scanning so they are never re-matched; an input that is already a typed
//! reference passes through byte-for-byte.
//!
//! Ambiguous numeric dates (`3/4/2016`) are read day-first. This is a
//! documented assumption, not a configuration knob.

use crate::common::protect::{Protector, PROTECTED_SPANS};
use crate::common::tuning::{YEAR_MAX, YEAR_MIN};
use chrono::{Datelike, Local};
use once_cell::sync::Lazy;
use regex::Regex;

const MONTH_PAT: &str = "(?:January|February|March|April|May|June|July|August|September|October|\
November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sep|Oct|Nov|Dec)";
pub(crate) const WEEKDAY_PAT: &str =
    "(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday|Mon|Tue|Wed|Thu|Fri|Sat|Sun)";
const ORDINAL_PAT: &str = "(?:st|nd|rd|th)?";

/// What shape of date was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateKind {
    Simple,
    Time,
    Week,
    Duration,
}

/// A recognized date-like substring with its normalized value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDate {
    pub kind: DateKind,
    /// Canonical `YYYY-MM-DD`-family form.
    pub value: String,
    /// True when the input was already a typed reference; such input passes
    /// through unchanged.
    pub already_typed: bool,
}

impl ParsedDate {
    fn new(kind: DateKind, value: String) -> Self {
        ParsedDate {
            kind,
            value,
            already_typed: false,
        }
    }
}

macro_rules! anchored {
    ($name:ident, $pattern:expr) => {
        static $name: Lazy<Regex> = Lazy::new(|| Regex::new(&format!("^{}$", $pattern)).unwrap());
    };
}

anchored!(WEEK_RE, r"Week (\d{1,2}),\s*(\d{4})");
anchored!(WEEK_RANGE_RE, r"Weeks (\d{1,2})\s*-\s*(\d{1,2}),\s*(\d{4})");
anchored!(ISO_TIME_RE, r"(\d{4}-\d{2}-\d{2})[ T](\d{2}:\d{2})");
anchored!(ISO_DURATION_RE, r"(\d{4}-\d{2}-\d{2})/(\d{4}-\d{2}-\d{2})");
anchored!(ISO_DATE_RE, r"(\d{4}-\d{2}-\d{2})");
anchored!(NUMERIC_RE, r"(\d{1,2})/(\d{1,2})/(\d{4})");
anchored!(
    DAY_OF_MONTH_RE,
    format!(r"(\d{{1,2}}){ORDINAL_PAT}\s+of\s+({MONTH_PAT}),?\s+(\d{{4}})")
);
anchored!(
    DAY_MONTH_YEAR_RE,
    format!(r"(\d{{1,2}}){ORDINAL_PAT}\s+({MONTH_PAT})\s+(\d{{4}})")
);
anchored!(
    MONTH_RANGE_RE,
    format!(
        r"(?:{WEEKDAY_PAT},\s+)?({MONTH_PAT})\s+(\d{{1,2}}){ORDINAL_PAT}\s*[-–]\s*({MONTH_PAT})\s+(\d{{1,2}}){ORDINAL_PAT},\s*(\d{{4}})"
    )
);
anchored!(
    MONTH_DAY_YEAR_RE,
    format!(
        r"(?:{WEEKDAY_PAT},\s+)?({MONTH_PAT})\s+(\d{{1,2}}){ORDINAL_PAT},\s*(\d{{4}})(?:,\s*(\d{{1,2}}):(\d{{2}})\s*(AM|PM))?"
    )
);
anchored!(
    MONTH_YEAR_RE,
    format!(r"(?:{WEEKDAY_PAT},\s+)?({MONTH_PAT})\s+(\d{{4}})")
);
anchored!(
    MONTH_DAY_RE,
    format!(r"({MONTH_PAT})\s+(\d{{1,2}}){ORDINAL_PAT}")
);
anchored!(YEAR_RE, r"(\d{4})");

/// Unanchored scan pattern: the union of every recognized form, most
/// specific first (the engine prefers earlier alternatives at the same
/// start position).
static DATE_SCAN: Lazy<Regex> = Lazy::new(|| {
    let m = MONTH_PAT;
    let w = WEEKDAY_PAT;
    let o = ORDINAL_PAT;
    let alternatives = [
        r"\bWeeks \d{1,2}\s*-\s*\d{1,2},\s*\d{4}\b".to_string(),
        r"\bWeek \d{1,2},\s*\d{4}\b".to_string(),
        r"\b\d{4}-\d{2}-\d{2}[ T]\d{2}:\d{2}\b".to_string(),
        r"\b\d{4}-\d{2}-\d{2}/\d{4}-\d{2}-\d{2}\b".to_string(),
        r"\b\d{4}-\d{2}-\d{2}\b".to_string(),
        r"\b\d{1,2}/\d{1,2}/\d{4}\b".to_string(),
        format!(r"\b\d{{1,2}}{o}\s+of\s+{m},?\s+\d{{4}}\b"),
        format!(r"\b\d{{1,2}}{o}\s+{m}\s+\d{{4}}\b"),
        format!(r"\b(?:{w},\s+)?{m}\s+\d{{1,2}}{o}\s*[-–]\s*{m}\s+\d{{1,2}}{o},\s*\d{{4}}\b"),
        format!(r"\b(?:{w},\s+)?{m}\s+\d{{1,2}}{o},\s*\d{{4}}(?:,\s*\d{{1,2}}:\d{{2}}\s*(?:AM|PM))?\b"),
        format!(r"\b(?:{w},\s+)?{m}\s+\d{{4}}\b"),
        format!(r"\b{m}\s+\d{{1,2}}{o}\b"),
        r"\b\d{4}\b".to_string(),
    ];
    Regex::new(&alternatives.join("|")).unwrap()
});

/// Parse a complete date string into its normalized components.
///
/// Returns `None` when the text is not a recognized date form; recognition
/// attempts run in priority order, typed references first.
pub fn parse_date(text: &str) -> Option<ParsedDate> {
    let text = text.trim();

    if text.starts_with("[[date:") && text.ends_with("]]") {
        return Some(ParsedDate {
            kind: DateKind::Simple,
            value: text.to_string(),
            already_typed: true,
        });
    }

    if let Some(c) = WEEK_RE.captures(text) {
        return Some(ParsedDate::new(
            DateKind::Week,
            format!("{}-W{:0>2}", &c[2], &c[1]),
        ));
    }

    if let Some(c) = WEEK_RANGE_RE.captures(text) {
        return Some(ParsedDate::new(
            DateKind::Duration,
            format!("{}-W{:0>2}/W{:0>2}", &c[3], &c[1], &c[2]),
        ));
    }

    if let Some(c) = ISO_TIME_RE.captures(text) {
        return Some(ParsedDate::new(
            DateKind::Time,
            format!("{} {}", &c[1], &c[2]),
        ));
    }

    if let Some(c) = ISO_DURATION_RE.captures(text) {
        return Some(ParsedDate::new(
            DateKind::Duration,
            format!("{}/{}", &c[1], &c[2]),
        ));
    }

    if let Some(c) = ISO_DATE_RE.captures(text) {
        return Some(ParsedDate::new(DateKind::Simple, c[1].to_string()));
    }

    // Ambiguous numeric dates are day-first.
    if let Some(c) = NUMERIC_RE.captures(text) {
        let day: u32 = c[1].parse().ok()?;
        let month: u32 = c[2].parse().ok()?;
        if day == 0 || day > 31 || month == 0 || month > 12 {
            return None;
        }
        return Some(ParsedDate::new(
            DateKind::Simple,
            format!("{}-{month:02}-{day:02}", &c[3]),
        ));
    }

    if let Some(c) = DAY_OF_MONTH_RE.captures(text) {
        let month = month_number(&c[2])?;
        return Some(ParsedDate::new(
            DateKind::Simple,
            format!("{}-{month:02}-{:0>2}", &c[3], &c[1]),
        ));
    }

    if let Some(c) = DAY_MONTH_YEAR_RE.captures(text) {
        let month = month_number(&c[2])?;
        return Some(ParsedDate::new(
            DateKind::Simple,
            format!("{}-{month:02}-{:0>2}", &c[3], &c[1]),
        ));
    }

    if let Some(c) = MONTH_RANGE_RE.captures(text) {
        let start_month = month_number(&c[1])?;
        let end_month = month_number(&c[3])?;
        let year = &c[5];
        return Some(ParsedDate::new(
            DateKind::Duration,
            format!(
                "{year}-{start_month:02}-{:0>2}/{year}-{end_month:02}-{:0>2}",
                &c[2], &c[4]
            ),
        ));
    }

    if let Some(c) = MONTH_DAY_YEAR_RE.captures(text) {
        let month = month_number(&c[1])?;
        let date = format!("{}-{month:02}-{:0>2}", &c[3], &c[2]);
        if let (Some(hour), Some(minute), Some(ampm)) = (c.get(4), c.get(5), c.get(6)) {
            let hour: u32 = hour.as_str().parse().ok()?;
            let hour = to_24_hour(hour, ampm.as_str());
            return Some(ParsedDate::new(
                DateKind::Time,
                format!("{date} {hour:02}:{}", minute.as_str()),
            ));
        }
        return Some(ParsedDate::new(DateKind::Simple, date));
    }

    if let Some(c) = MONTH_YEAR_RE.captures(text) {
        let month = month_number(&c[1])?;
        return Some(ParsedDate::new(
            DateKind::Simple,
            format!("{}-{month:02}", &c[2]),
        ));
    }

    // Year-less dates assume the current year.
    if let Some(c) = MONTH_DAY_RE.captures(text) {
        let month = month_number(&c[1])?;
        let year = Local::now().year();
        return Some(ParsedDate::new(
            DateKind::Simple,
            format!("{year}-{month:02}-{:0>2}", &c[2]),
        ));
    }

    if let Some(c) = YEAR_RE.captures(text) {
        let year: i32 = c[1].parse().ok()?;
        if (YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Some(ParsedDate::new(DateKind::Simple, c[1].to_string()));
        }
    }

    None
}

/// Wraps a parsed date in the typed reference syntax. Already-typed input
/// comes back unchanged.
pub fn format_tana_date(date: &ParsedDate) -> String {
    if date.already_typed {
        date.value.clone()
    } else {
        format!("[[date:{}]]", date.value)
    }
}

/// Rewrites every recognized date substring in `text` into a typed
/// reference. References, URLs and links are shielded; unrecognized or
/// identifier-looking matches are left as written.
pub fn convert_dates(text: &str) -> String {
    let mut protector = Protector::new();
    let shielded = protector.shield(text, &PROTECTED_SPANS);
    let replaced = DATE_SCAN.replace_all(&shielded, |caps: &regex::Captures<'_>| {
        let m = caps.get(0).expect("match group 0 always present");
        let token = m.as_str();
        let all_digits = token.chars().all(|c| c.is_ascii_digit());
        if all_digits && in_identifier_context(&shielded, m.start(), m.end()) {
            return token.to_string();
        }
        match parse_date(token) {
            Some(date) => format_tana_date(&date),
            None => token.to_string(),
        }
    });
    protector.restore(&replaced)
}

/// A bare digit run adjacent to identifier punctuation (`#1234`, `3.2016`,
/// `2016-17`) is a numeric identifier, not a year.
fn in_identifier_context(text: &str, start: usize, end: usize) -> bool {
    if let Some(prev) = text[..start].chars().next_back() {
        if matches!(prev, '#' | '-' | '/' | '_' | '.' | ':') {
            return true;
        }
    }
    let mut after = text[end..].chars();
    match after.next() {
        Some('-') | Some('/') | Some('_') | Some(':') => true,
        Some('.') => after.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

fn to_24_hour(hour: u32, ampm: &str) -> u32 {
    match (ampm, hour) {
        ("PM", h) if h < 12 => h + 12,
        ("AM", 12) => 0,
        (_, h) => h,
    }
}

fn month_number(name: &str) -> Option<u32> {
    let number = match name {
        "January" | "Jan" => 1,
        "February" | "Feb" => 2,
        "March" | "Mar" => 3,
        "April" | "Apr" => 4,
        "May" => 5,
        "June" | "Jun" => 6,
        "July" | "Jul" => 7,
        "August" | "Aug" => 8,
        "September" | "Sep" => 9,
        "October" | "Oct" => 10,
        "November" | "Nov" => 11,
        "December" | "Dec" => 12,
        _ => return None,
    };
    Some(number)
}
