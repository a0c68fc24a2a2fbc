// Pricing: total cost of a stay against one hotel's rate card, with the
// per-night breakdown used by the detailed analysis.
use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::DayType;
use crate::rates::{Cents, RateCard};
use crate::stay::Stay;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NightlyCharge {
    pub date: NaiveDate,
    pub day_type: DayType,
    pub rate: Cents,
}

// Classify each night, look up the matching rate, sum. Exact integer
// arithmetic; order of dates does not affect the total.
pub fn total_cost(stay: &Stay, rates: &RateCard) -> Cents {
    stay.dates
        .iter()
        .map(|&date| rates.rate(stay.customer, DayType::of(date)))
        .sum()
}

pub fn nightly_charges(stay: &Stay, rates: &RateCard) -> Vec<NightlyCharge> {
    stay.dates
        .iter()
        .map(|&date| {
            let day_type = DayType::of(date);
            NightlyCharge {
                date,
                day_type,
                rate: rates.rate(stay.customer, day_type),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stay::CustomerType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn card() -> RateCard {
        RateCard {
            regular_weekday: 110_00,
            regular_weekend: 90_00,
            rewards_weekday: 80_00,
            rewards_weekend: 80_00,
        }
    }

    #[test]
    fn test_single_night_costs_exactly_one_rate() {
        let stay = Stay {
            customer: CustomerType::Regular,
            dates: vec![date(2009, 3, 16)], // Monday
        };
        assert_eq!(total_cost(&stay, &card()), 110_00);
    }

    #[test]
    fn test_total_over_weekdays() {
        let stay = Stay {
            customer: CustomerType::Regular,
            dates: vec![date(2009, 3, 16), date(2009, 3, 17), date(2009, 3, 18)],
        };
        assert_eq!(total_cost(&stay, &card()), 3 * 110_00);
    }

    #[test]
    fn test_total_over_mixed_days() {
        // Fri + Sat + Sun
        let stay = Stay {
            customer: CustomerType::Regular,
            dates: vec![date(2009, 3, 20), date(2009, 3, 21), date(2009, 3, 22)],
        };
        assert_eq!(total_cost(&stay, &card()), 110_00 + 90_00 + 90_00);
    }

    #[test]
    fn test_rewards_tier_uses_rewards_rates() {
        let stay = Stay {
            customer: CustomerType::Rewards,
            dates: vec![date(2009, 3, 20), date(2009, 3, 21)], // Fri + Sat
        };
        assert_eq!(total_cost(&stay, &card()), 80_00 + 80_00);
    }

    #[test]
    fn test_repeated_date_is_billed_per_night() {
        let stay = Stay {
            customer: CustomerType::Regular,
            dates: vec![date(2009, 3, 16), date(2009, 3, 16)],
        };
        assert_eq!(total_cost(&stay, &card()), 2 * 110_00);
    }

    #[test]
    fn test_total_equals_sum_of_nightly_charges() {
        let stay = Stay {
            customer: CustomerType::Regular,
            dates: vec![date(2009, 3, 19), date(2009, 3, 20), date(2009, 3, 21)],
        };
        let charges = nightly_charges(&stay, &card());
        assert_eq!(charges.len(), 3);
        assert_eq!(charges[2].day_type, DayType::Weekend);
        assert_eq!(
            charges.iter().map(|c| c.rate).sum::<Cents>(),
            total_cost(&stay, &card())
        );
    }
}
