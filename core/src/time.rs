use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{Result, TodoError};

const ISO_DATE: &str = "%Y-%m-%d";
const SLASH_DATE: &str = "%d/%m/%Y";
const USER_TIME: &str = "%H%M";

const DISPLAY_DATE: &str = "%b %-d %Y";
const DISPLAY_DATE_TIME: &str = "%b %-d %Y %H%M";

const STORAGE_MINUTES: &str = "%Y-%m-%dT%H:%M";
const STORAGE_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const STORAGE_FRACTION: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses a date/time typed by the user.
///
/// Accepted forms, first match wins:
/// `yyyy-MM-dd HHmm`, `d/M/yyyy HHmm`, `yyyy-MM-dd`, `d/M/yyyy`.
/// Date-only input resolves to midnight. The ISO `T` form is reserved for the
/// save file and rejected here.
pub fn parse_user_date_time(raw: &str) -> Result<NaiveDateTime> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(TodoError::EmptyDateTime);
    }
    if text.contains('T') {
        return Err(TodoError::InvalidDateTime(text.to_string()));
    }

    if let Some(date_time) = try_parse_date_time(text) {
        return Ok(date_time);
    }
    if let Some(date) = try_parse_date(text) {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(TodoError::InvalidDateTime(text.to_string()))
}

/// Parses a calendar date typed by the user.
///
/// A full user date/time is also accepted; only its date part is kept.
pub fn parse_user_date(raw: &str) -> Result<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(TodoError::EmptyDate);
    }

    if let Some(date) = try_parse_date(text) {
        return Ok(date);
    }

    parse_user_date_time(text)
        .map(|date_time| date_time.date())
        .map_err(|_| TodoError::InvalidDate(text.to_string()))
}

/// Parses the ISO local date-time written to the save file.
pub fn parse_storage_date_time(raw: &str) -> Result<NaiveDateTime> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(TodoError::EmptyStoredDateTime);
    }

    NaiveDateTime::parse_from_str(text, STORAGE_FRACTION)
        .or_else(|_| NaiveDateTime::parse_from_str(text, STORAGE_MINUTES))
        .map_err(|_| TodoError::InvalidStoredDateTime(text.to_string()))
}

/// `Dec 2 2019` at midnight, `Dec 2 2019 1800` otherwise.
pub fn format_for_display(date_time: NaiveDateTime) -> String {
    if is_midnight(date_time) {
        date_time.format(DISPLAY_DATE).to_string()
    } else {
        date_time.format(DISPLAY_DATE_TIME).to_string()
    }
}

pub fn format_date_for_display(date: NaiveDate) -> String {
    format_for_display(date.and_time(NaiveTime::MIN))
}

/// Seconds and fractions are only written when present, so minute-precision
/// values stay `2019-12-02T18:00`.
pub fn format_for_storage(date_time: NaiveDateTime) -> String {
    let pattern = if date_time.nanosecond() != 0 {
        STORAGE_FRACTION
    } else if date_time.second() != 0 {
        STORAGE_SECONDS
    } else {
        STORAGE_MINUTES
    };
    date_time.format(pattern).to_string()
}

pub fn is_midnight(date_time: NaiveDateTime) -> bool {
    date_time.time() == NaiveTime::MIN
}

fn try_parse_date_time(text: &str) -> Option<NaiveDateTime> {
    let (date, time) = text.split_once(' ')?;
    let date = try_parse_date(date)?;
    if !is_digits(time, 4, 4) {
        return None;
    }
    let time = NaiveTime::parse_from_str(time, USER_TIME).ok()?;
    Some(date.and_time(time))
}

fn try_parse_date(text: &str) -> Option<NaiveDate> {
    if is_iso_date_shape(text) {
        return NaiveDate::parse_from_str(text, ISO_DATE).ok();
    }
    if is_slash_date_shape(text) {
        return NaiveDate::parse_from_str(text, SLASH_DATE).ok();
    }
    None
}

// chrono accepts short numeric fields, so widths are checked up front.
fn is_iso_date_shape(text: &str) -> bool {
    let mut parts = text.split('-');
    matches!(
        (parts.next(), parts.next(), parts.next(), parts.next()),
        (Some(y), Some(m), Some(d), None)
            if is_digits(y, 4, 4) && is_digits(m, 2, 2) && is_digits(d, 2, 2)
    )
}

fn is_slash_date_shape(text: &str) -> bool {
    let mut parts = text.split('/');
    matches!(
        (parts.next(), parts.next(), parts.next(), parts.next()),
        (Some(d), Some(m), Some(y), None)
            if is_digits(d, 1, 2) && is_digits(m, 1, 2) && is_digits(y, 4, 4)
    )
}

fn is_digits(text: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&text.len()) && text.bytes().all(|b| b.is_ascii_digit())
}
