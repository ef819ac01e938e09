use super::ast::{DatePart, DatePartMap};
use crate::error::{FilterError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DELIMITERS: [char; 3] = ['/', ' ', '-'];

const DATE_SEPARATORS: [char; 3] = ['/', '-', '.'];

const TIME_FORMATS: [&str; 4] = ["%H:%M:%S", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

const SORTABLE: &str = "%Y%m%d %H:%M:%S";

// Two-digit years up to this value land in the 2000s, the rest in the 1900s.
const TWO_DIGIT_YEAR_PIVOT: i32 = 29;

const YEAR_FIRST: [DatePart; 3] = [DatePart::Year, DatePart::Month, DatePart::Day];

pub const DEFAULT_PATTERN: &str = "M/d/yyyy";

/// Short-date token ordering, e.g. `M/d/yyyy` or `dd-MM-yyyy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    pattern: String,
    tokens: Vec<String>,
    order: [DatePart; 3],
}

impl DatePattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let tokens = split_parts(&pattern).map(str::to_string).collect();
        let order = field_order(&pattern).unwrap_or(DatePart::EMIT_ORDER);
        Self {
            pattern,
            tokens,
            order,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_decomposable(&self) -> bool {
        self.tokens.len() >= 3
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}

fn split_parts(s: &str) -> impl Iterator<Item = &str> {
    s.split(DELIMITERS)
}

fn field_order(pattern: &str) -> Option<[DatePart; 3]> {
    let mut order = Vec::with_capacity(3);
    for c in pattern.chars() {
        let Some(part) = DatePart::classify(c.encode_utf8(&mut [0; 4])) else {
            continue;
        };
        if !order.contains(&part) {
            order.push(part);
        }
    }
    order.try_into().ok()
}

/// Splits a wildcarded date into year/month/day literals following `pattern`.
///
/// Only the first three tokens on each side are paired. When either side has fewer than
/// three, the map comes back empty.
pub fn decompose(value: &str, pattern: &DatePattern) -> DatePartMap {
    let mut parts = DatePartMap::default();

    let values: Vec<&str> = split_parts(value).collect();
    if !pattern.is_decomposable() || values.len() < 3 {
        return parts;
    }

    for (token, literal) in pattern.tokens().iter().zip(values).take(3) {
        if let Some(part) = DatePart::classify(token) {
            parts.insert(part, literal);
        }
    }

    parts
}

/// Fields follow the pattern's order unless the value leads with a four-digit year.
pub fn parse_date_literal(value: &str, pattern: &DatePattern) -> Option<NaiveDateTime> {
    let value = value.trim();

    let (date_text, time_text) = match value.split_once(char::is_whitespace) {
        Some((date, time)) => (date, Some(time.trim())),
        None => match value.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (value, None),
        },
    };

    let date = parse_calendar_date(date_text, &pattern.order)?;
    let time = match time_text {
        Some(text) => parse_time(text)?,
        None => NaiveTime::MIN,
    };

    Some(date.and_time(time))
}

fn parse_calendar_date(text: &str, order: &[DatePart; 3]) -> Option<NaiveDate> {
    let fields: Vec<&str> = text.split(DATE_SEPARATORS).collect();
    if fields.len() != 3
        || fields
            .iter()
            .any(|f| f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let order = if fields[0].len() == 4 { &YEAR_FIRST } else { order };

    let (mut year, mut month, mut day) = (None, None, None);
    for (part, field) in order.iter().zip(&fields) {
        match part {
            DatePart::Year => year = parse_year(field),
            DatePart::Month => month = field.parse().ok(),
            DatePart::Day => day = field.parse().ok(),
        }
    }

    NaiveDate::from_ymd_opt(year?, month?, day?)
}

fn parse_year(field: &str) -> Option<i32> {
    let year: i32 = field.parse().ok()?;
    match field.len() {
        4 => Some(year),
        1 | 2 if year <= TWO_DIGIT_YEAR_PIVOT => Some(2000 + year),
        1 | 2 => Some(1900 + year),
        _ => None,
    }
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(text, format).ok())
        .or_else(|| {
            // hour-only with meridiem, e.g. `2 PM`
            let (hour, meridiem) = text.split_once(char::is_whitespace)?;
            let padded = format!("{}:00 {}", hour, meridiem.trim());
            NaiveTime::parse_from_str(&padded, "%I:%M %p").ok()
        })
}

pub fn normalize_date(field: &str, value: &str, pattern: &DatePattern) -> Result<String> {
    parse_date_literal(value, pattern)
        .map(|dt| dt.format(SORTABLE).to_string())
        .ok_or_else(|| FilterError::validation(field, value))
}
