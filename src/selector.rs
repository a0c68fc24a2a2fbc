// Hotel selection: quote every hotel in the table and pick the cheapest,
// breaking ties by quality rating.
use std::cmp::Reverse;

use serde::Serialize;
use tracing::debug;

use crate::error::QuoteError;
use crate::pricing::{nightly_charges, total_cost, NightlyCharge};
use crate::rates::{Cents, Hotel, RateTable};
use crate::stay::{format_date, CustomerType, Stay};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotelQuote {
    pub name: String,
    pub rating: u8,
    pub total_cost: Cents,
    pub nightly_charges: Vec<NightlyCharge>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StayAnalysis {
    pub cheapest_hotel: String,
    pub customer_type: CustomerType,
    pub dates: Vec<String>,
    pub hotels: Vec<HotelQuote>,
}

// Minimum total cost wins; equal costs go to the higher rating. A full tie
// on cost and rating resolves to the earliest hotel in configured order
// (min_by_key keeps the first of equal keys).
pub fn select_cheapest<'a>(stay: &Stay, table: &'a RateTable) -> Result<&'a Hotel, QuoteError> {
    let winner = table
        .hotels()
        .iter()
        .min_by_key(|hotel| (total_cost(stay, &hotel.rates), Reverse(hotel.rating)))
        .ok_or(QuoteError::EmptyRateTable)?;

    debug!(hotel = %winner.name, rating = winner.rating, "selected cheapest hotel");
    Ok(winner)
}

// Full per-hotel breakdown, sorted by ascending total cost then descending
// rating, for diagnostics and UI.
pub fn detailed_analysis(stay: &Stay, table: &RateTable) -> Result<StayAnalysis, QuoteError> {
    if table.hotels().is_empty() {
        return Err(QuoteError::EmptyRateTable);
    }

    let mut quotes: Vec<HotelQuote> = table
        .hotels()
        .iter()
        .map(|hotel| HotelQuote {
            name: hotel.name.clone(),
            rating: hotel.rating,
            total_cost: total_cost(stay, &hotel.rates),
            nightly_charges: nightly_charges(stay, &hotel.rates),
        })
        .collect();
    quotes.sort_by_key(|quote| (quote.total_cost, Reverse(quote.rating)));

    Ok(StayAnalysis {
        cheapest_hotel: quotes[0].name.clone(),
        customer_type: stay.customer,
        dates: stay.dates.iter().map(|&d| format_date(d)).collect(),
        hotels: quotes,
    })
}

// The string-in, result-out surface: owns the rate table and runs
// parse -> price -> select as one request.
pub struct HotelSelector {
    table: RateTable,
}

impl HotelSelector {
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }

    pub fn find_cheapest(&self, input: &str) -> Result<String, QuoteError> {
        let stay = Stay::parse(input)?;
        let hotel = select_cheapest(&stay, &self.table)?;
        Ok(hotel.name.clone())
    }

    pub fn analyze(&self, input: &str) -> Result<StayAnalysis, QuoteError> {
        let stay = Stay::parse(input)?;
        detailed_analysis(&stay, &self.table)
    }
}

impl Default for HotelSelector {
    fn default() -> Self {
        Self::new(RateTable::default())
    }
}
