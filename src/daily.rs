//! Picking the same card for every player on a given day.
//!
//! The day's index is drawn from a linear congruential generator seeded with
//! the number of days since the Unix epoch, mixed with a fixed constant. The
//! generator and constant must never change: doing so would give players on
//! different deployments different answers.

use chrono::{DateTime, NaiveDate, Utc};
use log::debug;

use crate::{card::Card, Catalog};

/// Mixed into the day number to seed the generator.
pub const SEED: u32 = 0xC0FFEE;

const MULTIPLIER: u32 = 1664525;
const INCREMENT: u32 = 1013904223;
const MODULUS: f64 = 4294967296.0; // 2^32

/// Whole days from 1970-01-01 to `date`. Negative for earlier dates.
///
/// ```rust
/// use chrono::NaiveDate;
/// use cardle::daily::day_number;
///
/// assert_eq!(day_number(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()), 0);
/// assert_eq!(day_number(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()), 19723);
/// ```
pub fn day_number(date: NaiveDate) -> i64 {
    date.signed_duration_since(DateTime::<Utc>::UNIX_EPOCH.date_naive())
        .num_days()
}

/// A 32-bit linear congruential generator.
///
/// Each step computes `s = (1664525 * s + 1013904223) mod 2^32` and yields
/// `s / 2^32`, a float in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Lcg { state: seed }
    }

    /// Seeds a generator for `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        // truncating to 32 bits is intended; the seed is defined on 32-bit integers
        Lcg::new((day_number(date) as i32 as u32) ^ SEED)
    }

    /// Advances the generator and returns the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        f64::from(self.state) / MODULUS
    }
}

/// Returns the index in `[0, len)` of the target for `date`.
///
/// The same date always gives the same index for the same `len`.
///
/// # Panics
///
/// Panics if `len` is zero. A [`Catalog`] is never empty, so prefer
/// [`Catalog::daily()`].
///
/// ```rust
/// use chrono::NaiveDate;
/// use cardle::daily::daily_index;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(daily_index(day, 100), 52);
/// assert_eq!(daily_index(day, 100), daily_index(day, 100));
/// ```
pub fn daily_index(date: NaiveDate, len: usize) -> usize {
    assert!(len > 0, "cannot select a daily target from zero cards");
    let value = Lcg::for_date(date).next_f64();
    // value < 1, so this stays below len
    (value * len as f64).floor() as usize
}

impl Catalog {
    /// The card everyone plays on `date`.
    pub fn daily(&self, date: NaiveDate) -> &Card {
        let index = daily_index(date, self.len());
        debug!("daily target for {date} is card {index} of {}", self.len());
        &self[index]
    }

    /// The card everyone plays today, by the UTC calendar.
    #[cfg(feature = "clock")]
    pub fn today(&self) -> &Card {
        self.daily(Utc::now().date_naive())
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_numbers_ignore_time_of_day() {
        let morning = DateTime::<Utc>::from_timestamp(1_704_067_200, 0).unwrap(); // 2024-01-01T00:00:00Z
        let night = DateTime::<Utc>::from_timestamp(1_704_153_599, 0).unwrap(); // 2024-01-01T23:59:59Z
        assert_eq!(day_number(morning.date_naive()), 19723);
        assert_eq!(day_number(night.date_naive()), 19723);
        assert_eq!(day_number(date(1969, 12, 31)), -1);
    }

    #[test]
    fn generator_matches_known_sequence() {
        let mut lcg = Lcg::new(SEED);
        // (1664525 * 0xC0FFEE + 1013904223) mod 2^32
        assert_eq!(lcg.next_f64(), 712164981.0 / MODULUS);

        let mut lcg = Lcg::new(u32::MAX);
        let value = lcg.next_f64();
        assert!((0.0..1.0).contains(&value));
    }

    #[test]
    fn known_daily_indices() {
        assert_eq!(daily_index(date(1970, 1, 1), 100), 16);
        assert_eq!(daily_index(date(2024, 1, 1), 100), 52);
        assert_eq!(daily_index(date(2024, 1, 2), 100), 52);
        assert_eq!(daily_index(date(2026, 10, 18), 100), 12);
        assert_eq!(daily_index(date(1969, 12, 31), 100), 30);

        assert_eq!(daily_index(date(2024, 1, 1), 7), 3);
        assert_eq!(daily_index(date(2026, 10, 18), 7), 0);
    }

    #[test]
    fn seed_wraps_like_a_32_bit_integer() {
        // -1 ^ 0xC0FFEE, read back as unsigned
        assert_eq!(Lcg::for_date(date(1969, 12, 31)), Lcg::new(4282318865));
        assert_eq!(Lcg::for_date(date(2024, 1, 1)), Lcg::new(12628709));
    }

    #[test]
    fn catalog_daily_picks_the_indexed_card() -> crate::Result<()> {
        let names: Vec<String> = (0..100).map(|i| format!("Card {i}")).collect();
        let catalog = Catalog::new(names)?;
        assert_eq!(catalog.daily(date(2024, 1, 1)).name(), "Card 52");
        Ok(())
    }

    #[test]
    #[should_panic]
    fn zero_length_panics() {
        daily_index(date(2024, 1, 1), 0);
    }

    proptest! {
        #[test]
        fn daily_index_is_deterministic_and_in_range(days in -100_000_i64..100_000, len in 1_usize..5000) {
            let day = DateTime::<Utc>::UNIX_EPOCH.date_naive() + chrono::Duration::days(days);
            let first = daily_index(day, len);
            prop_assert!(first < len);
            prop_assert_eq!(first, daily_index(day, len));
            prop_assert_eq!(day_number(day), days);
        }
    }
}
