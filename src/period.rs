// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time intervals.
//!
//! This module provides:
//! - [`Interval<T>`]: generic interval over any [`TimeInstant`]
//! - [`Period<S>`]: scale-based alias for `Interval<Time<S>>`, the search
//!   window of [`EventSearch::find_roots_within`](crate::EventSearch::find_roots_within)

use super::{Time, TimeInstant, TimeScale};
use qtty::Days;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents an interval between two instants.
///
/// An `Interval` is defined by a start and end time instant of type `T`,
/// where `T` implements the `TimeInstant` trait.
///
/// # Examples
///
/// ```
/// use meeus_core::{Interval, ModifiedJulianDate};
///
/// let start = ModifiedJulianDate::new(59000.0);
/// let end = ModifiedJulianDate::new(59001.0);
/// let period = Interval::new(start, end);
///
/// // Duration in days
/// let duration = period.duration();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

/// Time-scale period alias: `Period<JDE>`, `Period<UT>`, etc.
pub type Period<S> = Interval<Time<S>>;

impl<T: TimeInstant> Interval<T> {
    /// Creates a new period between two time instants.
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// Returns the duration of the period as the difference between end and start.
    ///
    /// # Examples
    ///
    /// ```
    /// use meeus_core::{Interval, JulianEphemerisDay};
    /// use qtty::Days;
    ///
    /// let start = JulianEphemerisDay::new(2451545.0);
    /// let end = JulianEphemerisDay::new(2451546.5);
    /// let period = Interval::new(start, end);
    ///
    /// assert_eq!(period.duration(), Days::new(1.5));
    /// ```
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// Whether `instant` lies in the closed range `[start, end]`.
    #[inline]
    pub fn contains(&self, instant: &T) -> bool {
        self.start <= *instant && *instant <= self.end
    }
}

impl<T: TimeInstant + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl<S: TimeScale> Interval<Time<S>> {
    /// Convert this period to another time scale, endpoint by endpoint.
    ///
    /// ```
    /// use meeus_core::{Period, Time, JD, MJD};
    ///
    /// let period_jd = Period::new(Time::<JD>::new(2451545.0), Time::<JD>::new(2451546.0));
    /// let period_mjd = period_jd.to::<MJD>();
    ///
    /// assert!((period_mjd.start.value() - 51544.5).abs() < 1e-12);
    /// assert!((period_mjd.end.value() - 51545.5).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Period<T> {
        Interval::new(self.start.to::<T>(), self.end.to::<T>())
    }

    /// Instants from `start` to `end` spaced by `step`, always ending on `end`.
    ///
    /// The final gap may be shorter than `step`. A non-positive step or an
    /// empty period yields just the endpoints.
    pub fn steps(&self, step: Days) -> Vec<Time<S>> {
        let mut instants = vec![self.start];
        if step > Days::new(0.0) {
            let mut cursor = self.start + step;
            while cursor < self.end {
                instants.push(cursor);
                cursor += step;
            }
        }
        if self.end > self.start {
            instants.push(self.end);
        }
        instants
    }
}
