// Rate table: the fixed set of hotels, each with a quality rating and one
// nightly rate per (customer type, day type) cell. Loaded once at startup,
// read-only afterwards.
use serde::{Deserialize, Serialize};

use crate::calendar::DayType;
use crate::error::QuoteError;
use crate::stay::CustomerType;

// All amounts are exact fixed-point minor units (cents), never floats.
pub type Cents = u64;

// The closed 2x2 rate grid; an invalid (customer, day) combination cannot
// be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RateCard {
    pub regular_weekday: Cents,
    pub regular_weekend: Cents,
    pub rewards_weekday: Cents,
    pub rewards_weekend: Cents,
}

impl RateCard {
    pub fn rate(&self, customer: CustomerType, day: DayType) -> Cents {
        match (customer, day) {
            (CustomerType::Regular, DayType::Weekday) => self.regular_weekday,
            (CustomerType::Regular, DayType::Weekend) => self.regular_weekend,
            (CustomerType::Rewards, DayType::Weekday) => self.rewards_weekday,
            (CustomerType::Rewards, DayType::Weekend) => self.rewards_weekend,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Hotel {
    pub name: String,
    pub rating: u8,
    pub rates: RateCard,
}

// Hotels keep their configured order; that order is the final tie-break
// when both cost and rating are equal.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateTable {
    hotels: Vec<Hotel>,
}

impl RateTable {
    pub fn new(hotels: Vec<Hotel>) -> Self {
        Self { hotels }
    }

    // Startup configuration loader. An empty hotel list is a configuration
    // error and fails here rather than on the first request.
    pub fn from_json(json: &str) -> Result<Self, QuoteError> {
        let table: RateTable =
            serde_json::from_str(json).map_err(|e| QuoteError::JsonParseError(e.to_string()))?;
        if table.hotels.is_empty() {
            return Err(QuoteError::EmptyRateTable);
        }
        Ok(table)
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new(vec![
            Hotel {
                name: "Lakewood".to_string(),
                rating: 3,
                rates: RateCard {
                    regular_weekday: 110_00,
                    regular_weekend: 90_00,
                    rewards_weekday: 80_00,
                    rewards_weekend: 80_00,
                },
            },
            Hotel {
                name: "Bridgewood".to_string(),
                rating: 4,
                rates: RateCard {
                    regular_weekday: 160_00,
                    regular_weekend: 60_00,
                    rewards_weekday: 110_00,
                    rewards_weekend: 50_00,
                },
            },
            Hotel {
                name: "Ridgewood".to_string(),
                rating: 5,
                rates: RateCard {
                    regular_weekday: 220_00,
                    regular_weekend: 150_00,
                    rewards_weekday: 100_00,
                    rewards_weekend: 40_00,
                },
            },
        ])
    }
}

// A small sample document for inline testing; rates are in minor units.
pub const SAMPLE_RATE_TABLE_JSON: &str = r#"{
  "hotels": [
    {
      "name": "Lakewood",
      "rating": 3,
      "rates": {
        "regular_weekday": 11000,
        "regular_weekend": 9000,
        "rewards_weekday": 8000,
        "rewards_weekend": 8000
      }
    },
    {
      "name": "Bridgewood",
      "rating": 4,
      "rates": {
        "regular_weekday": 16000,
        "regular_weekend": 6000,
        "rewards_weekday": 11000,
        "rewards_weekend": 5000
      }
    }
  ]
}"#;
