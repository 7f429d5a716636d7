// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Numerical core of Meeus' *Astronomical Algorithms*.
//!
//! This crate provides the time axis and the small numerical engines that
//! every ephemeris computation of the book is built on.
//!
//! # Core types
//!
//! - [`Time<S>`] — generic instant parameterised by a [`TimeScale`] marker.
//! - [`TimeScale`] — trait that defines a time scale (epoch offset + conversions).
//! - [`JulianEphemerisDay`] — type alias for `Time<JDE>`, the canonical instant.
//! - [`CalendarDate`] — a Julian or Gregorian calendar date with fractional day.
//! - [`Period<S>`] / [`Interval<T>`] — time intervals.
//! - [`Interpolator`] — evaluation, derivative, root and extremum over tabulated values.
//! - [`CurveFitting`] — least-squares line, parabola and function-combination fits.
//! - [`KeplerSolver`] — eccentric and true anomaly from the mean anomaly.
//! - [`EventSearch`] — epoch of a zero crossing or extremum of a function of time.
//! - [`MeeusError`] — the error type of every fallible operation.
//!
//! # Time scales
//!
//! The following markers implement [`TimeScale`]:
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Date |
//! | [`JDE`] | Julian Ephemeris Day |
//! | [`MJD`] | Modified Julian Date |
//! | [`TT`] | Terrestrial Time |
//! | [`TAI`] | International Atomic Time |
//! | [`UTC`] | Coordinated Universal Time (leap seconds) |
//! | [`UT`] | Universal Time (Earth rotation) |
//!
//! # ΔT (Delta T)
//!
//! The difference **ΔT = TT − UT** is applied automatically by the [`UT`]
//! time scale. Use `Time::<UT>::new(jd_ut)` for UT-based values; the raw ΔT
//! in seconds is available through [`delta_t`], [`delta_t_at`] and
//! [`Time::<UT>::delta_t()`](Time::delta_t). From 1972 on, [`UTC`] follows the
//! leap-second table instead.
//!
//! ```
//! use meeus_core::{Time, JDE, UT};
//!
//! let date = Time::<JDE>::from_ymd_hms(1987, 6, 19, 12, 0, 0.0).unwrap();
//! assert_eq!(date.value(), 2_446_966.0);
//!
//! let civil = Time::<UT>::from_calendar(1987, 6, 19.5).unwrap().to::<JDE>();
//! assert!((civil.value() - 2_446_966.000_64).abs() < 1e-5);
//! ```
//!
//! # Calendars
//!
//! [`feasts`] computes the dates of Easter and Pesach and [`islamic`]
//! converts to and from the tabular Islamic calendar.

mod calendar;
mod delta_t;
mod error;
mod events;
pub mod feasts;
mod fitting;
pub(crate) mod instant;
mod interpolation;
pub mod islamic;
mod julian_date_ext;
mod kepler;
mod leap_seconds;
mod period;
pub(crate) mod scales;
mod sidereal;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{
    date_from_day_of_year, date_from_day_of_year_in, day_of_year, is_leap_year, Calendar,
    CalendarDate, Month, GREGORIAN_CUTOVER_JD,
};
pub use delta_t::{delta_t, delta_t_at};
pub use error::{MeeusError, Result};
pub use events::EventSearch;
pub use feasts::{easter, pesach};
pub use fitting::CurveFitting;
pub use instant::{Time, TimeInstant, TimeScale};
pub use interpolation::Interpolator;
pub use islamic::IslamicDate;
pub use kepler::{KeplerSolution, KeplerSolver};
pub use leap_seconds::{last_leap_second, leap_seconds, tt_minus_utc};
pub use period::{Interval, Period};
pub use scales::{JD, JDE, MJD, TAI, TT, UT, UTC};
pub use sidereal::{apparent_sidereal_time, mean_sidereal_time};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Date — continuous count of days since the Julian Period.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Julian Ephemeris Day — dynamical Julian day used by the ephemeris formulas.
///
/// This is a type alias for [`Time<JDE>`].
pub type JulianEphemerisDay = Time<JDE>;

/// Modified Julian Date — `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;

/// Universal Time — Earth-rotation civil time scale.
///
/// This is a type alias for [`Time<UT>`].
pub type UniversalTime = Time<UT>;
