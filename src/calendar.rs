// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian and Gregorian calendar arithmetic.
//!
//! Dates on or after **1582-10-15** are read in the Gregorian calendar and
//! earlier dates in the Julian calendar, unless a calendar is forced with
//! [`CalendarDate::with_calendar`]. Years use astronomical numbering: year
//! `0` is 1 BCE and year `-584` is 585 BCE.
//!
//! The conversions follow Meeus (1998), chapter 7:
//!
//! ```text
//! JD = INT(365.25 (Y + 4716)) + INT(30.6001 (M + 1)) + D + B − 1524.5
//! ```
//!
//! where January and February count as months 13 and 14 of the previous
//! year and `B` is the Gregorian correction (zero in the Julian calendar).
//!
//! # Calendar views on [`Time`]
//!
//! Every scale whose day count is a Julian Day on its own clock
//! (`JD`, `JDE`, `TT`, `UT`, `UTC`) gains `from_calendar`, `to_calendar`,
//! `weekday`, `day_of_year` and friends. Values on other scales convert
//! first, e.g. `mjd.to::<JD>().to_calendar()`.

use super::error::{MeeusError, Result};
use super::instant::Time;
use super::scales::{JD, JDE, TT, UT, UTC};
use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Julian Day of 1582-10-15 0h, the first day of the Gregorian calendar.
pub const GREGORIAN_CUTOVER_JD: f64 = 2_299_160.5;

/// Earliest year accepted by the Julian Day formula (start of the Julian Period).
const FIRST_YEAR: i32 = -4712;

// ═══════════════════════════════════════════════════════════════════════════
// Calendar
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar system used to read a year/month/day tuple.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Calendar {
    Julian,
    Gregorian,
}

impl Calendar {
    /// Calendar in force at the given date under the 1582-10-15 cutover.
    pub fn for_date(year: i32, month: u32, day: f64) -> Self {
        if (year, month, day) >= (1582, 10, 15.0) {
            Calendar::Gregorian
        } else {
            Calendar::Julian
        }
    }

    /// Calendar in force for most of `year`.
    ///
    /// 1582 itself is reported as Julian; both rules agree it is a common year.
    #[inline]
    pub fn for_year(year: i32) -> Self {
        if year > 1582 {
            Calendar::Gregorian
        } else {
            Calendar::Julian
        }
    }

    /// Calendar in force at a Julian Day.
    #[inline]
    pub fn for_julian_day(jd: f64) -> Self {
        if jd < GREGORIAN_CUTOVER_JD {
            Calendar::Julian
        } else {
            Calendar::Gregorian
        }
    }

    /// Leap-year rule of this calendar.
    #[inline]
    pub fn is_leap_year(self, year: i32) -> bool {
        is_leap_year(year, self)
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calendar::Julian => f.write_str("Julian"),
            Calendar::Gregorian => f.write_str("Gregorian"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Month
// ═══════════════════════════════════════════════════════════════════════════

/// Month of the year, parseable from English names.
///
/// ```
/// use meeus_core::Month;
///
/// let month: Month = "Jan".parse().unwrap();
/// assert_eq!(month.number(), 1);
/// assert_eq!("october".parse::<Month>().unwrap(), Month::October);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// Month number, 1 for January.
    #[inline]
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// English name of the month.
    pub const fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl TryFrom<u32> for Month {
    type Error = MeeusError;

    fn try_from(number: u32) -> Result<Self> {
        number
            .checked_sub(1)
            .and_then(|i| MONTHS.get(i as usize))
            .copied()
            .ok_or_else(|| MeeusError::UnknownMonth(number.to_string()))
    }
}

impl FromStr for Month {
    type Err = MeeusError;

    /// Accepts full English names and their three-letter abbreviations, in any case.
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_ascii_lowercase();
        MONTHS
            .iter()
            .copied()
            .find(|m| {
                let name = m.name().to_ascii_lowercase();
                needle == name || (needle.len() == 3 && name.starts_with(&needle))
            })
            .ok_or_else(|| MeeusError::UnknownMonth(s.to_owned()))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Free functions
// ═══════════════════════════════════════════════════════════════════════════

/// Whether `year` is a leap year in `calendar`.
///
/// Julian rule: divisible by 4. Gregorian rule: divisible by 4 and not by
/// 100 unless also by 400. Negative years follow the same arithmetic.
pub fn is_leap_year(year: i32, calendar: Calendar) -> bool {
    match calendar {
        Calendar::Julian => year.rem_euclid(4) == 0,
        Calendar::Gregorian => {
            year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
        }
    }
}

/// Number of days in `month` of `year`. `month` must already be in 1..=12.
fn month_length(year: i32, month: u32, calendar: Calendar) -> u32 {
    match month {
        2 if is_leap_year(year, calendar) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[inline]
fn year_length(year: i32, calendar: Calendar) -> f64 {
    if is_leap_year(year, calendar) {
        366.0
    } else {
        365.0
    }
}

/// Ordinal day of the year, 1-based and carrying the day fraction.
///
/// The leap rule is the one in force at the given date.
///
/// ```
/// use meeus_core::day_of_year;
///
/// assert_eq!(day_of_year(1978, 11, 14.0).unwrap(), 318.0);
/// ```
pub fn day_of_year(year: i32, month: u32, day: f64) -> Result<f64> {
    Ok(CalendarDate::new(year, month, day)?.day_of_year())
}

fn ordinal(year: i32, month: u32, day: f64, calendar: Calendar) -> f64 {
    let k = if is_leap_year(year, calendar) { 1.0 } else { 2.0 };
    let m = f64::from(month);
    (275.0 * m / 9.0).floor() - k * ((m + 9.0) / 12.0).floor() + day - 30.0
}

/// Month and day (with fraction) for an ordinal day of `year`.
///
/// Inverse of [`day_of_year`]. The leap rule is Julian up to 1582 and
/// Gregorian afterwards.
///
/// ```
/// use meeus_core::date_from_day_of_year;
///
/// assert_eq!(date_from_day_of_year(-4, 60.0).unwrap(), (2, 29.0));
/// assert_eq!(date_from_day_of_year(-3, 60.0).unwrap(), (3, 1.0));
/// ```
pub fn date_from_day_of_year(year: i32, doy: f64) -> Result<(u32, f64)> {
    date_from_day_of_year_in(year, doy, Calendar::for_year(year))
}

/// [`date_from_day_of_year`] with an explicit leap-year rule.
pub fn date_from_day_of_year_in(year: i32, doy: f64, calendar: Calendar) -> Result<(u32, f64)> {
    let length = year_length(year, calendar);
    if !doy.is_finite() || doy < 1.0 || doy >= length + 1.0 {
        return Err(MeeusError::invalid_date(
            year,
            0,
            doy,
            "day of year out of range",
        ));
    }
    // The month formula only holds for whole days; the fraction rides along.
    let whole = doy.floor();
    let fraction = doy - whole;
    let k = if length > 365.0 { 1.0 } else { 2.0 };
    let month = if whole < 32.0 {
        1.0
    } else {
        (9.0 * (k + whole) / 275.0 + 0.98).floor()
    };
    let day = whole - (275.0 * month / 9.0).floor() + k * ((month + 9.0) / 12.0).floor() + 30.0;
    Ok((month as u32, day + fraction))
}

/// Julian Day of a calendar tuple (Meeus 7.1). Fields are assumed valid.
pub(crate) fn julian_day_of(year: i32, month: u32, day: f64, calendar: Calendar) -> f64 {
    let (y, m) = if month <= 2 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };
    let b = match calendar {
        Calendar::Julian => 0.0,
        Calendar::Gregorian => {
            let a = (y / 100.0).floor();
            2.0 - a + (a / 4.0).floor()
        }
    };
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

// ═══════════════════════════════════════════════════════════════════════════
// CalendarDate
// ═══════════════════════════════════════════════════════════════════════════

/// A validated year/month/day tuple tagged with its calendar.
///
/// The day carries the time of day as a fraction: `27.5` is noon of the 27th.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCalendarDate"))]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: f64,
    calendar: Calendar,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCalendarDate {
    year: i32,
    month: u32,
    day: f64,
    calendar: Calendar,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCalendarDate> for CalendarDate {
    type Error = MeeusError;

    fn try_from(raw: RawCalendarDate) -> Result<Self> {
        CalendarDate::with_calendar(raw.year, raw.month, raw.day, raw.calendar)
    }
}

impl CalendarDate {
    /// Validate a date, picking the calendar from the 1582-10-15 cutover.
    ///
    /// Dates between 1582-10-05 and 1582-10-14 do not exist under the
    /// cutover and are rejected.
    pub fn new(year: i32, month: u32, day: f64) -> Result<Self> {
        let calendar = Calendar::for_date(year, month, day);
        if year == 1582 && month == 10 && (5.0..15.0).contains(&day) {
            return Err(MeeusError::invalid_date(
                year,
                month,
                day,
                "falls in the 1582 calendar reform gap",
            ));
        }
        Self::with_calendar(year, month, day, calendar)
    }

    /// Validate a date in an explicit calendar (proleptic on either side of the cutover).
    pub fn with_calendar(year: i32, month: u32, day: f64, calendar: Calendar) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(MeeusError::invalid_date(year, month, day, "month out of range"));
        }
        if !day.is_finite() {
            return Err(MeeusError::invalid_date(year, month, day, "day is not finite"));
        }
        if year < FIRST_YEAR {
            return Err(MeeusError::invalid_date(
                year,
                month,
                day,
                "before the start of the Julian Period",
            ));
        }
        let length = f64::from(month_length(year, month, calendar));
        if day < 1.0 || day >= length + 1.0 {
            return Err(MeeusError::invalid_date(year, month, day, "day out of range"));
        }
        Ok(Self {
            year,
            month,
            day,
            calendar,
        })
    }

    /// Build a date from wall-clock fields.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        let fday = f64::from(day);
        if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(MeeusError::invalid_date(
                year,
                month,
                fday,
                "time of day out of range",
            ));
        }
        let fraction = (f64::from(hour) * 3_600.0 + f64::from(minute) * 60.0 + second) / 86_400.0;
        Self::new(year, month, fday + fraction)
    }

    /// Calendar date of a Julian Day, Julian before the cutover and Gregorian after.
    pub fn from_julian_day(jd: f64) -> Self {
        Self::from_julian_day_in(jd, Calendar::for_julian_day(jd))
    }

    /// Calendar date of a Julian Day in a forced calendar (Meeus ch. 7 inverse).
    pub fn from_julian_day_in(jd: f64, calendar: Calendar) -> Self {
        let shifted = jd + 0.5;
        let z = shifted.floor();
        let f = shifted - z;
        let a = match calendar {
            Calendar::Julian => z,
            Calendar::Gregorian => {
                let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
                z + 1.0 + alpha - (alpha / 4.0).floor()
            }
        };
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day = b - d - (30.6001 * e).floor() + f;
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        Self {
            year: year as i32,
            month: month as u32,
            day,
            calendar,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day of the month, with the time of day as fraction.
    #[inline]
    pub const fn day(&self) -> f64 {
        self.day
    }

    #[inline]
    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// Month as a [`Month`] value.
    ///
    /// Dates decoded from a non-finite Julian Day carry no real month and
    /// give [`MeeusError::UnknownMonth`].
    pub fn month_name(&self) -> Result<Month> {
        Month::try_from(self.month)
    }

    // ── derived views ─────────────────────────────────────────────────

    /// Julian Day of this date.
    #[inline]
    pub fn julian_day(&self) -> f64 {
        julian_day_of(self.year, self.month, self.day, self.calendar)
    }

    /// Same instant expressed in another calendar.
    pub fn to_calendar(&self, calendar: Calendar) -> Self {
        if calendar == self.calendar {
            *self
        } else {
            Self::from_julian_day_in(self.julian_day(), calendar)
        }
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year, self.calendar)
    }

    pub fn days_in_month(&self) -> u32 {
        month_length(self.year, self.month, self.calendar)
    }

    /// Ordinal day of the year, carrying the day fraction.
    pub fn day_of_year(&self) -> f64 {
        ordinal(self.year, self.month, self.day, self.calendar)
    }

    /// Year with decimals: `year + (day_of_year − 1) / days_in_year`.
    pub fn decimal_year(&self) -> f64 {
        f64::from(self.year) + (self.day_of_year() - 1.0) / year_length(self.year, self.calendar)
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        weekday_of(self.julian_day())
    }

    /// Hour, minute and second carried by the day fraction.
    pub fn time_of_day(&self) -> (u32, u32, f64) {
        let seconds = self.day.fract() * 86_400.0;
        let hour = (seconds / 3_600.0).floor();
        let minute = ((seconds - hour * 3_600.0) / 60.0).floor();
        let second = seconds - hour * 3_600.0 - minute * 60.0;
        (hour as u32, minute as u32, second)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}-{:02} ({})",
            self.year, self.month, self.day, self.calendar
        )
    }
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// `INT(JD + 1.5) mod 7`, where 0 is Sunday.
fn weekday_of(jd: f64) -> Weekday {
    WEEKDAYS[(jd + 1.5).floor().rem_euclid(7.0) as usize]
}

// ═══════════════════════════════════════════════════════════════════════════
// Calendar views on Time<S>
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! impl_calendar_views {
    ($($scale:ty),+ $(,)?) => {
        $(
            impl Time<$scale> {
                /// Instant at a calendar date, calendar picked by the 1582-10-15 cutover.
                pub fn from_calendar(year: i32, month: u32, day: f64) -> Result<Self> {
                    Ok(Self::from_date(CalendarDate::new(year, month, day)?))
                }

                /// Instant at an already validated calendar date.
                #[inline]
                pub fn from_date(date: CalendarDate) -> Self {
                    Self::new(date.julian_day())
                }

                /// Instant at a wall-clock date and time.
                pub fn from_ymd_hms(
                    year: i32,
                    month: u32,
                    day: u32,
                    hour: u32,
                    minute: u32,
                    second: f64,
                ) -> Result<Self> {
                    Ok(Self::from_date(CalendarDate::from_ymd_hms(
                        year, month, day, hour, minute, second,
                    )?))
                }

                /// New instant at another calendar date; `self` is left untouched.
                #[inline]
                pub fn redefine(self, year: i32, month: u32, day: f64) -> Result<Self> {
                    Self::from_calendar(year, month, day)
                }

                /// Calendar date of this instant.
                #[inline]
                pub fn to_calendar(&self) -> CalendarDate {
                    CalendarDate::from_julian_day(self.value())
                }

                /// Calendar date of this instant in a forced calendar.
                #[inline]
                pub fn to_calendar_in(&self, calendar: Calendar) -> CalendarDate {
                    CalendarDate::from_julian_day_in(self.value(), calendar)
                }

                #[inline]
                pub fn weekday(&self) -> Weekday {
                    weekday_of(self.value())
                }

                #[inline]
                pub fn day_of_year(&self) -> f64 {
                    self.to_calendar().day_of_year()
                }

                #[inline]
                pub fn is_leap_year(&self) -> bool {
                    self.to_calendar().is_leap_year()
                }

                /// Year with decimals (`1993.7479` for 1993-10-01).
                #[inline]
                pub fn decimal_year(&self) -> f64 {
                    self.to_calendar().decimal_year()
                }

                /// Cumulative leap seconds in effect during this instant's month.
                pub fn leap_seconds(&self) -> u32 {
                    let date = self.to_calendar();
                    crate::leap_seconds(date.year(), date.month())
                }
            }
        )+
    };
}

impl_calendar_views!(JD, JDE, TT, UT, UTC);
