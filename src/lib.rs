// Main library file for the hotel quote engine

// Export modules for each stage of the quoting pipeline
pub mod calendar;
pub mod error;
pub mod pricing;
pub mod rates;
pub mod selector;
pub mod stay;

// Re-export key types for convenience
pub use calendar::DayType;
pub use error::QuoteError;
pub use pricing::{nightly_charges, total_cost, NightlyCharge};
pub use rates::{Cents, Hotel, RateCard, RateTable, SAMPLE_RATE_TABLE_JSON};
pub use selector::{detailed_analysis, select_cheapest, HotelQuote, HotelSelector, StayAnalysis};
pub use stay::{format_date, CustomerType, Stay};
