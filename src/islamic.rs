// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Tabular Islamic (Hijri) calendar.
//!
//! The arithmetic calendar of Meeus ch. 9: year 1 starts on Julian 622-07-16
//! (JD 1948439.5). Odd months have 30 days and even months 29, except that
//! the twelfth month gains a day in the 11 leap years of every 30-year cycle
//! (years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29).
//!
//! Conversions go through the Julian Day, so the Christian side is read in
//! the Julian calendar before 1582-10-15 and in the Gregorian one after.
//!
//! ```
//! use meeus_core::islamic::{from_christian, to_christian};
//!
//! let date = to_christian(1421, 1, 1).unwrap();
//! assert_eq!((date.year(), date.month(), date.day()), (2000, 4, 6.0));
//!
//! let hijri = from_christian(1991, 8, 13).unwrap();
//! assert_eq!((hijri.year(), hijri.month(), hijri.day()), (1412, 2, 2));
//! ```

use super::calendar::CalendarDate;
use super::error::{MeeusError, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// JD of 1 Muharram 1 AH, 0h (Julian 622-07-16).
pub const ISLAMIC_EPOCH_JD: f64 = 1_948_439.5;

const CYCLE_YEARS: i64 = 30;
const CYCLE_DAYS: i64 = 10_631;

/// A date of the tabular Islamic calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawIslamicDate"))]
pub struct IslamicDate {
    year: i32,
    month: u32,
    day: u32,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawIslamicDate {
    year: i32,
    month: u32,
    day: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawIslamicDate> for IslamicDate {
    type Error = MeeusError;

    fn try_from(raw: RawIslamicDate) -> Result<Self> {
        IslamicDate::new(raw.year, raw.month, raw.day)
    }
}

impl IslamicDate {
    /// Validate an Islamic date.
    ///
    /// Requires year ≥ 1, month in 1..=12 and day in 1..=30. A thirtieth day
    /// in a 29-day month is accepted and denotes the first of the next month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        let reason = if year < 1 {
            Some("Islamic year must be 1 or later")
        } else if !(1..=12).contains(&month) {
            Some("month out of range")
        } else if !(1..=30).contains(&day) {
            Some("day out of range")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(MeeusError::invalid_date(year, month, f64::from(day), reason)),
            None => Ok(Self { year, month, day }),
        }
    }

    /// Islamic date containing a Julian Day.
    ///
    /// Returns [`MeeusError::DomainRange`] before the Islamic epoch.
    pub fn from_julian_day(jd: f64) -> Result<Self> {
        if !jd.is_finite() || jd < ISLAMIC_EPOCH_JD {
            return Err(MeeusError::DomainRange(format!(
                "JD {jd} precedes the Islamic epoch (JD {ISLAMIC_EPOCH_JD})"
            )));
        }
        let days = (jd - ISLAMIC_EPOCH_JD).floor() as i64;

        let year = (CYCLE_YEARS * days + 10_646).div_euclid(CYCLE_DAYS);
        let day_of_year = days - days_before_year(year) + 1;

        let mut month = 12;
        while month > 1 && days_before_month(month) >= day_of_year {
            month -= 1;
        }
        let day = day_of_year - days_before_month(month);

        Ok(Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
        })
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// JD at 0h of this date.
    pub fn julian_day(&self) -> f64 {
        let days = days_before_year(i64::from(self.year))
            + days_before_month(i64::from(self.month))
            + i64::from(self.day)
            - 1;
        ISLAMIC_EPOCH_JD + days as f64
    }

    /// The same day in the Julian or Gregorian calendar.
    pub fn to_christian(&self) -> CalendarDate {
        CalendarDate::from_julian_day(self.julian_day())
    }

    /// Whether this date's year has 355 days.
    #[inline]
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }
}

impl fmt::Display for IslamicDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02} AH", self.year, self.month, self.day)
    }
}

/// Leap years of the 30-year cycle add a thirtieth day to the twelfth month.
pub fn is_leap_year(year: i32) -> bool {
    (14 + 11 * i64::from(year)).rem_euclid(CYCLE_YEARS) < 11
}

/// Days from the epoch to the first day of `year`.
fn days_before_year(year: i64) -> i64 {
    (year - 1) * 354 + (3 + 11 * year).div_euclid(CYCLE_YEARS)
}

/// Days from the first of the year to the first of `month`.
fn days_before_month(month: i64) -> i64 {
    29 * (month - 1) + month / 2
}

/// Christian date of an Islamic date.
pub fn to_christian(year: i32, month: u32, day: u32) -> Result<CalendarDate> {
    Ok(IslamicDate::new(year, month, day)?.to_christian())
}

/// Islamic date of a Christian date (Julian before 1582-10-15, Gregorian after).
///
/// Fails with [`MeeusError::InvalidDate`] on a malformed date and with
/// [`MeeusError::DomainRange`] before 622-07-16.
pub fn from_christian(year: i32, month: u32, day: u32) -> Result<IslamicDate> {
    let date = CalendarDate::new(year, month, f64::from(day))?;
    IslamicDate::from_julian_day(date.julian_day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Calendar;
    use rstest::rstest;

    #[rstest]
    #[case((1421, 1, 1), (2000, 4, 6))]
    #[case((1439, 9, 1), (2018, 5, 16))]
    #[case((1412, 2, 2), (1991, 8, 13))]
    #[case((1, 1, 1), (622, 7, 16))]
    fn islamic_to_christian(#[case] hijri: (i32, u32, u32), #[case] expected: (i32, u32, u32)) {
        let date = to_christian(hijri.0, hijri.1, hijri.2).unwrap();
        assert_eq!(
            (date.year(), date.month(), date.day()),
            (expected.0, expected.1, f64::from(expected.2))
        );
    }

    #[rstest]
    #[case((1991, 8, 13), (1412, 2, 2))]
    #[case((2000, 4, 6), (1421, 1, 1))]
    #[case((2018, 5, 16), (1439, 9, 1))]
    #[case((2000, 1, 1), (1420, 9, 24))]
    fn christian_to_islamic(#[case] date: (i32, u32, u32), #[case] expected: (i32, u32, u32)) {
        let hijri = from_christian(date.0, date.1, date.2).unwrap();
        assert_eq!((hijri.year(), hijri.month(), hijri.day()), expected);
    }

    #[test]
    fn epoch_is_a_julian_date() {
        let date = to_christian(1, 1, 1).unwrap();
        assert_eq!(date.calendar(), Calendar::Julian);
        assert_eq!(date.julian_day(), ISLAMIC_EPOCH_JD);
    }

    #[test]
    fn before_the_epoch_is_out_of_range() {
        assert!(matches!(
            from_christian(622, 7, 15),
            Err(MeeusError::DomainRange(_))
        ));
        assert!(from_christian(622, 7, 16).is_ok());
    }

    #[rstest]
    #[case(0, 1, 1)]
    #[case(1400, 0, 1)]
    #[case(1400, 13, 1)]
    #[case(1400, 1, 0)]
    #[case(1400, 1, 31)]
    fn malformed_fields(#[case] year: i32, #[case] month: u32, #[case] day: u32) {
        assert!(matches!(
            to_christian(year, month, day),
            Err(MeeusError::InvalidDate { .. })
        ));
    }

    #[test]
    fn cycle_has_eleven_leap_years() {
        let leaps: Vec<i32> = (1..=30).filter(|&y| is_leap_year(y)).collect();
        assert_eq!(leaps, vec![2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29]);
        let first = IslamicDate::new(1, 1, 1).unwrap().julian_day();
        let next = IslamicDate::new(31, 1, 1).unwrap().julian_day();
        assert_eq!(next - first, CYCLE_DAYS as f64);
    }

    #[test]
    fn julian_day_roundtrip() {
        let mut jd = ISLAMIC_EPOCH_JD;
        while jd < 2_600_000.0 {
            let hijri = IslamicDate::from_julian_day(jd + 0.3).unwrap();
            assert_eq!(hijri.julian_day(), jd, "{hijri}");
            jd += 97.0;
        }
    }

    #[test]
    fn last_day_of_a_leap_year() {
        let end = IslamicDate::new(2, 12, 30).unwrap();
        let next = IslamicDate::from_julian_day(end.julian_day() + 1.0).unwrap();
        assert_eq!(IslamicDate::from_julian_day(end.julian_day()).unwrap(), end);
        assert_eq!(next, IslamicDate::new(3, 1, 1).unwrap());
    }

    #[test]
    fn display() {
        let hijri = IslamicDate::new(1439, 9, 1).unwrap();
        assert_eq!(hijri.to_string(), "1439-09-01 AH");
    }
}
