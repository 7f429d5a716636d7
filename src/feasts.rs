// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Movable feasts: Christian Easter and Jewish Pesach (Meeus ch. 8 and 9).
//!
//! Both are closed-form integer algorithms. Years from 1583 on are computed
//! and reported in the Gregorian calendar, earlier years in the Julian one.

use super::calendar::{Calendar, CalendarDate};
use super::error::Result;

/// First year for which the Gregorian rules apply.
const FIRST_GREGORIAN_YEAR: i32 = 1583;

/// Date of Easter Sunday in `year`.
///
/// ```
/// use meeus_core::feasts::easter;
///
/// let sunday = easter(2000).unwrap();
/// assert_eq!((sunday.month(), sunday.day()), (4, 23.0));
/// ```
pub fn easter(year: i32) -> Result<CalendarDate> {
    let (month, day) = if year >= FIRST_GREGORIAN_YEAR {
        gregorian_easter(year)
    } else {
        julian_easter(year)
    };
    CalendarDate::with_calendar(year, month, f64::from(day), Calendar::for_year(year))
}

/// Gauss/Butcher rule for the Gregorian calendar.
fn gregorian_easter(year: i32) -> (u32, u32) {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * (e + i) - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u32, (n % 31 + 1) as u32)
}

/// Julian calendar rule, valid for any year.
fn julian_easter(year: i32) -> (u32, u32) {
    let a = year.rem_euclid(4);
    let b = year.rem_euclid(7);
    let c = year.rem_euclid(19);
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34).rem_euclid(7);
    let n = d + e + 114;
    ((n / 31) as u32, (n % 31 + 1) as u32)
}

/// Date of Pesach (15 Nisan) falling in `year`.
///
/// Uses Meeus' closed form, in which the Gregorian shift `S` enters the
/// weekday test with a negative sign.
///
/// ```
/// use meeus_core::feasts::pesach;
///
/// let first_day = pesach(1990).unwrap();
/// assert_eq!((first_day.month(), first_day.day()), (4, 10.0));
/// ```
pub fn pesach(year: i32) -> Result<CalendarDate> {
    let c = year.div_euclid(100);
    let s = if year < FIRST_GREGORIAN_YEAR {
        0
    } else {
        (3 * c - 5).div_euclid(4)
    };
    let a = (12 * (year + 1)).rem_euclid(19);
    let b = year.rem_euclid(4);

    let q = -1.904_412_361_576 + 1.554_241_796_621 * f64::from(a) + 0.25 * f64::from(b)
        - 0.003_177_794_022 * f64::from(year)
        + f64::from(s);
    let q_int = q.floor();
    let r = q - q_int;
    let q_int = q_int as i32;

    let j = (q_int + 3 * year + 5 * b + 2 - s).rem_euclid(7);
    let day = match j {
        2 | 4 | 6 => q_int + 23,
        1 if a > 6 && r > 0.632_870_370 => q_int + 24,
        0 if a > 11 && r > 0.897_723_765 => q_int + 23,
        _ => q_int + 22,
    };

    let (month, day) = if day > 31 { (4, day - 31) } else { (3, day) };
    CalendarDate::with_calendar(year, month, f64::from(day), Calendar::for_year(year))
}
