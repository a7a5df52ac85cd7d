//! Distance-based fares.
//!
//! Fares come from fixed distance tiers with a cheaper column on holidays.
//! A travel card takes a percentage off the tier fare afterwards, rounding
//! up to a whole unit.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Which fare column applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum FareDay {
    #[default]
    Regular,
    /// Sundays and public holidays
    Holiday,
}

impl FareDay {
    /// Fare column for a calendar date.
    ///
    /// Only Sundays are known here; public holidays must be flagged by the
    /// caller.
    pub fn for_date(date: NaiveDate) -> Self {
        if date.weekday() == Weekday::Sun {
            FareDay::Holiday
        } else {
            FareDay::Regular
        }
    }

    pub fn is_holiday(self) -> bool {
        self == FareDay::Holiday
    }
}

impl From<bool> for FareDay {
    fn from(is_holiday: bool) -> Self {
        if is_holiday {
            FareDay::Holiday
        } else {
            FareDay::Regular
        }
    }
}

/// (upper distance bound in km, regular fare, holiday fare), ascending.
const TIERS: [(f64, u32, u32); 5] = [
    (2.0, 10, 10),
    (5.0, 20, 10),
    (12.0, 30, 20),
    (21.0, 40, 30),
    (32.0, 50, 40),
];

/// Fares beyond the last tier: (regular, holiday).
const LONGEST: (u32, u32) = (60, 50);

/// Tier fare for a journey of `km` kilometres.
///
/// Tier bounds are inclusive. A distance that is not a number falls into
/// the longest tier.
///
/// # Examples
///
/// ```
/// use metro_planner::planner::{FareDay, fare};
///
/// assert_eq!(fare(2.0, FareDay::Regular), 10);
/// assert_eq!(fare(2.01, FareDay::Regular), 20);
/// assert_eq!(fare(32.01, FareDay::Holiday), 50);
/// ```
pub fn fare(km: f64, day: FareDay) -> u32 {
    let (regular, holiday) = TIERS
        .iter()
        .find(|(bound, _, _)| km <= *bound)
        .map(|&(_, regular, holiday)| (regular, holiday))
        .unwrap_or(LONGEST);

    match day {
        FareDay::Regular => regular,
        FareDay::Holiday => holiday,
    }
}

/// Apply a travel card discount to a tier fare.
///
/// The card holder pays `ceil(fare * (100 - percent) / 100)`, computed in
/// integers so that a 10% discount is exactly `ceil(fare * 0.9)`.
pub fn apply_card_discount(fare: u32, discount_percent: u32) -> u32 {
    let payable = u64::from(100 - discount_percent.min(100));
    let discounted = (u64::from(fare) * payable).div_ceil(100);
    // payable <= 100, so the result never exceeds `fare`
    u32::try_from(discounted).unwrap_or(fare)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_day() -> impl Strategy<Value = FareDay> {
        prop_oneof![Just(FareDay::Regular), Just(FareDay::Holiday)]
    }

    proptest! {
        /// Longer journeys never cost less
        #[test]
        fn monotonic(a in 0.0f64..60.0, b in 0.0f64..60.0, day in any_day()) {
            let (short, long) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(fare(short, day) <= fare(long, day));
        }

        /// Holiday fares never exceed regular fares
        #[test]
        fn holiday_not_dearer(km in 0.0f64..60.0) {
            prop_assert!(fare(km, FareDay::Holiday) <= fare(km, FareDay::Regular));
        }

        /// A 10% card fare is exactly ceil(fare * 0.9)
        #[test]
        fn ten_percent_card(km in 0.0f64..60.0, day in any_day()) {
            let base = fare(km, day);
            let expected = (f64::from(base) * 0.9).ceil() as u32;
            prop_assert_eq!(apply_card_discount(base, 10), expected);
        }

        /// Discounts never raise the fare
        #[test]
        fn discount_not_dearer(base in any::<u32>(), percent in 0u32..=100) {
            prop_assert!(apply_card_discount(base, percent) <= base);
        }
    }
}
