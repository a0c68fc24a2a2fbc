use thiserror::Error;

// Error types for stay parsing and hotel selection.
// Every variant is an input-validation or configuration failure; nothing
// here is transient, so callers should correct the input rather than retry.
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("input must contain ':' separator between customer type and dates")]
    MissingSeparator,

    #[error("invalid customer type: {0}. Must be 'Regular' or 'Rewards'")]
    InvalidCustomerType(String),

    #[error("invalid date format: {0}. Expected format: DDMmmYYYY")]
    InvalidDateFormat(String),

    #[error("at least one date must be provided")]
    EmptyStay,

    #[error("day-of-week label '{label}' does not match {date}, which falls on {actual}")]
    DayOfWeekMismatch {
        date: String,
        label: String,
        actual: chrono::Weekday,
    },

    #[error("rate table has no hotels configured")]
    EmptyRateTable,

    #[error("JSON parse error: {0}")]
    JsonParseError(String),
}
