// Stay parsing: one customer tier plus the ordered list of reserved dates,
// read from the compact "CustomerType: 16Mar2009(mon), 17Mar2009(tues)" form.
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::QuoteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum CustomerType {
    Regular,
    Rewards,
}

impl FromStr for CustomerType {
    type Err = QuoteError;

    // Case-sensitive: "regular" is not a known tier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Regular" => Ok(CustomerType::Regular),
            "Rewards" => Ok(CustomerType::Rewards),
            other => Err(QuoteError::InvalidCustomerType(other.to_string())),
        }
    }
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerType::Regular => f.write_str("Regular"),
            CustomerType::Rewards => f.write_str("Rewards"),
        }
    }
}

// One night per date; the same date may appear more than once if the caller
// books multiple nights on it. Order is kept for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stay {
    pub customer: CustomerType,
    pub dates: Vec<NaiveDate>,
}

impl Stay {
    pub fn parse(input: &str) -> Result<Self, QuoteError> {
        let (customer_str, dates_str) = input
            .split_once(':')
            .ok_or(QuoteError::MissingSeparator)?;

        let customer = customer_str.trim().parse::<CustomerType>()?;

        let dates_str = dates_str.trim();
        if dates_str.is_empty() {
            return Err(QuoteError::EmptyStay);
        }

        let mut dates = Vec::new();
        for token in dates_str.split(',') {
            dates.push(parse_date_token(token.trim())?);
        }

        debug!(%customer, nights = dates.len(), "parsed stay");
        Ok(Stay { customer, dates })
    }
}

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// Renders a date back into the DDMmmYYYY shape the parser accepts.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{:02}{}{:04}",
        date.day(),
        MONTH_ABBREVIATIONS[date.month0() as usize],
        date.year()
    )
}

fn month_number(abbr: &str) -> Option<u32> {
    MONTH_ABBREVIATIONS
        .iter()
        .position(|m| *m == abbr)
        .map(|i| i as u32 + 1)
}

// A single date token: DDMmmYYYY with an optional parenthesized day-of-week
// label. A recognized label that disagrees with the computed weekday is a
// hard failure; an unrecognized label is a malformed token.
fn parse_date_token(token: &str) -> Result<NaiveDate, QuoteError> {
    let invalid = || QuoteError::InvalidDateFormat(token.to_string());

    let (core, label) = match token.split_once('(') {
        Some((core, rest)) => {
            let label = rest.strip_suffix(')').ok_or_else(invalid)?;
            (core.trim_end(), Some(label.trim()))
        }
        None => (token, None),
    };

    let date = parse_compact_date(core).ok_or_else(invalid)?;

    if let Some(label) = label {
        let expected = weekday_for_label(label).ok_or_else(invalid)?;
        if date.weekday() != expected {
            return Err(QuoteError::DayOfWeekMismatch {
                date: format_date(date),
                label: label.to_string(),
                actual: date.weekday(),
            });
        }
    }

    Ok(date)
}

// Strict DDMmmYYYY: two digits, exact Mmm month capitalization, four digits.
// Month-length and leap-year validity come from NaiveDate construction.
fn parse_compact_date(core: &str) -> Option<NaiveDate> {
    let bytes = core.as_bytes();
    if bytes.len() != 9 {
        return None;
    }
    if !bytes[..2].iter().all(u8::is_ascii_digit)
        || !bytes[2..5].iter().all(u8::is_ascii_alphabetic)
        || !bytes[5..].iter().all(u8::is_ascii_digit)
    {
        return None;
    }

    let day: u32 = core[..2].parse().ok()?;
    let month = month_number(&core[2..5])?;
    let year: i32 = core[5..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn weekday_for_label(label: &str) -> Option<Weekday> {
    match label.to_ascii_lowercase().as_str() {
        "mon" => Some(Weekday::Mon),
        "tue" | "tues" => Some(Weekday::Tue),
        "wed" => Some(Weekday::Wed),
        "thu" | "thur" | "thurs" => Some(Weekday::Thu),
        "fri" => Some(Weekday::Fri),
        "sat" => Some(Weekday::Sat),
        "sun" => Some(Weekday::Sun),
        _ => None,
    }
}
