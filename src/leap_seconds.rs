// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Leap seconds and the TT − UTC offset.
//!
//! The table lists, for each month in which a new leap-second count took
//! effect, the cumulative number of leap seconds inserted since UTC was
//! pinned to TAI − 10 s on 1972-01-01. Lookups take the last entry at or
//! before the queried `(year, month)`: dates before the first insertion
//! return 0 and dates after the last one keep the final count.

use super::calendar::{julian_day_of, Calendar, CalendarDate};
use super::delta_t::{delta_t, delta_t_from_ut};
use qtty::{Days, Seconds};

/// `(year, month, count)`: `count` leap seconds are in effect from the first day of `month`.
#[rustfmt::skip]
static LEAP_SECONDS: [(i32, u32, u32); 27] = [
    (1972, 7,  1), (1973, 1,  2), (1974, 1,  3), (1975, 1,  4), (1976, 1,  5),
    (1977, 1,  6), (1978, 1,  7), (1979, 1,  8), (1980, 1,  9), (1981, 7, 10),
    (1982, 7, 11), (1983, 7, 12), (1985, 7, 13), (1988, 1, 14), (1990, 1, 15),
    (1991, 1, 16), (1992, 7, 17), (1993, 7, 18), (1994, 7, 19), (1996, 1, 20),
    (1997, 7, 21), (1999, 1, 22), (2006, 1, 23), (2009, 1, 24), (2012, 7, 25),
    (2015, 7, 26), (2017, 1, 27),
];

/// TAI − UTC when UTC started ticking in SI seconds (1972-01-01).
const TAI_MINUS_UTC_1972: f64 = 10.0;

/// TT − TAI.
const TT_MINUS_TAI: f64 = 32.184;

/// First month of the leap-second era.
const UTC_ERA_START: (i32, u32) = (1972, 1);

/// JD of 1972-01-01 0h UTC.
const UTC_ERA_START_JD: Days = Days::new(2_441_317.5);

/// Cumulative leap seconds in effect during `(year, month)`.
///
/// ```
/// use meeus_core::leap_seconds;
///
/// assert_eq!(leap_seconds(1983, 6), 11);
/// assert_eq!(leap_seconds(1983, 7), 12);
/// assert_eq!(leap_seconds(1950, 1), 0);
/// ```
pub fn leap_seconds(year: i32, month: u32) -> u32 {
    // Binary search for the last entry <= (year, month)
    let key = (year, month);
    let mut lo = 0usize;
    let mut hi = LEAP_SECONDS.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let (y, m, _) = LEAP_SECONDS[mid];
        if (y, m) <= key {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    if lo == 0 {
        0
    } else {
        LEAP_SECONDS[lo - 1].2
    }
}

/// Date of the most recent leap second in the table and the count it brought.
///
/// Leap seconds are inserted at the end of the day returned here
/// (the last day of June or December).
pub fn last_leap_second() -> (CalendarDate, u32) {
    let (year, month, count) = LEAP_SECONDS[LEAP_SECONDS.len() - 1];
    let first_day = julian_day_of(year, month, 1.0, Calendar::Gregorian);
    (CalendarDate::from_julian_day(first_day - 1.0), count)
}

/// TT − UTC during `(year, month)`.
///
/// From 1972 on this is `32.184 s + 10 s + leap_seconds(year, month)`.
/// Earlier months have no leap-second definition, and the offset falls back
/// to ΔT.
pub fn tt_minus_utc(year: i32, month: u32) -> Seconds {
    if (year, month) < UTC_ERA_START {
        return delta_t(year, month);
    }
    Seconds::new(TT_MINUS_TAI + TAI_MINUS_UTC_1972 + f64::from(leap_seconds(year, month)))
}

/// TT − UTC at a Julian Day on the UTC axis.
pub(crate) fn tt_minus_utc_at(jd_utc: Days) -> Seconds {
    if jd_utc < UTC_ERA_START_JD {
        return delta_t_from_ut(jd_utc);
    }
    let date = CalendarDate::from_julian_day(jd_utc.value());
    tt_minus_utc(date.year(), date.month())
}
