// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T) — UT↔TT Correction Layer
//!
//! **ΔT = TT − UT** is modelled with the piecewise polynomials of Espenak &
//! Meeus (NASA *Five Millennium Canon of Solar Eclipses*, 2006), which
//! refine the expressions of chapter 10 of Meeus' *Astronomical Algorithms*.
//!
//! The model is an ordered table of eras. Each era owns one formula and is
//! selected by the decimal year
//!
//! ```text
//! y = year + (month − 0.5) / 12
//! ```
//!
//! The first era whose upper bound exceeds `y` is used. Every era, the
//! long-term parabola included, is evaluated at that same `y`, so ΔT moves
//! month by month even before 1600. Formulas are
//! continuous inside their era. The published expressions do not join
//! exactly at era boundaries (jumps stay below 0.3 s) and are reproduced as
//! they are.
//!
//! ## Integration with Time Scales
//!
//! The correction is applied **automatically** by the [`UT`](super::UT) time
//! scale marker: `Time::<UT>::to::<JDE>()` adds ΔT, and the inverse uses a
//! fixed-point solver. [`UTC`](super::UTC) falls back to the same model
//! before 1972.
//!
//! ## Quick Example
//! ```rust
//! use meeus_core::{delta_t, Time, JDE, UT};
//!
//! let dt = delta_t(2015, 7);
//! assert!((dt.value() - 69.28).abs() < 0.01);
//!
//! // UT-based Julian Day -> JDE with ΔT applied
//! let ut = Time::<UT>::new(2_451_545.0);
//! let jde = ut.to::<JDE>();
//! println!("{jde}, ΔT = {}", ut.delta_t());
//! ```
//!
//! ## Valid Time Range
//! The polynomials were fitted between −1999 and +3000. Outside that span
//! the long-term parabola keeps extrapolating and a `warn!` is logged.

use super::instant::Time;
use super::scales::UT;
use log::warn;
use qtty::{Days, Seconds};

/// Span the era table was fitted for.
const FITTED_RANGE: std::ops::Range<f64> = -1999.0..3000.0;

/// Decimal year of 2000-01-01 0h, used to place a Julian Day on the year axis.
const JD_2000_JAN_0H: f64 = 2_451_544.5;

/// Mean Julian year used to place a Julian Day on the year axis.
const DAYS_PER_YEAR: f64 = 365.25;

// ------------------------------------------------------------------------------------
// Era table
// ------------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Formula {
    /// `−20 + 32·u²` with `u = (y − 1820) / 100` (Morrison & Stephenson 2004).
    LongTerm,
    /// `Σ cᵢ·tⁱ` with `t = (y − origin) / scale`; coefficients in ascending powers.
    Polynomial {
        origin: f64,
        scale: f64,
        coefficients: &'static [f64],
    },
    /// Long-term parabola lowered so that it meets the 2005–2050 fit at 2050.
    LongTermJoined,
}

impl Formula {
    fn evaluate(self, y: f64) -> f64 {
        match self {
            Formula::LongTerm => long_term(y),
            Formula::Polynomial {
                origin,
                scale,
                coefficients,
            } => {
                let t = (y - origin) / scale;
                coefficients.iter().rev().fold(0.0, |acc, c| acc * t + c)
            }
            Formula::LongTermJoined => long_term(y) - 0.5628 * (2150.0 - y),
        }
    }
}

#[inline]
fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// One segment of the model, valid for decimal years below `until`.
#[derive(Debug, Clone, Copy)]
struct Era {
    until: f64,
    formula: Formula,
}

const fn poly(until: f64, origin: f64, scale: f64, coefficients: &'static [f64]) -> Era {
    Era {
        until,
        formula: Formula::Polynomial {
            origin,
            scale,
            coefficients,
        },
    }
}

#[rustfmt::skip]
const ERAS: [Era; 15] = [
    Era { until: -500.0, formula: Formula::LongTerm },
    poly(500.0,  0.0,    100.0, &[10_583.6, -1_014.41, 33.783_11, -5.952_053, -0.179_845_2, 0.022_174_192, 0.009_031_652_1]),
    poly(1600.0, 1000.0, 100.0, &[1_574.2, -556.01, 71.234_72, 0.319_781, -0.850_346_3, -0.005_050_998, 0.008_357_207_3]),
    poly(1700.0, 1600.0, 1.0,   &[120.0, -0.9808, -0.015_32, 1.0 / 7_129.0]),
    poly(1800.0, 1700.0, 1.0,   &[8.83, 0.1603, -0.005_928_5, 0.000_133_36, -1.0 / 1_174_000.0]),
    poly(1860.0, 1800.0, 1.0,   &[13.72, -0.332_447, 0.006_861_2, 0.004_111_6, -0.000_374_36, 0.000_012_127_2, -0.000_000_169_9, 0.000_000_000_875]),
    poly(1900.0, 1860.0, 1.0,   &[7.62, 0.5737, -0.251_754, 0.016_806_68, -0.000_447_362_4, 1.0 / 233_174.0]),
    poly(1920.0, 1900.0, 1.0,   &[-2.79, 1.494_119, -0.059_893_9, 0.006_196_6, -0.000_197]),
    poly(1941.0, 1920.0, 1.0,   &[21.20, 0.844_93, -0.076_100, 0.002_093_6]),
    poly(1961.0, 1950.0, 1.0,   &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2_547.0]),
    poly(1986.0, 1975.0, 1.0,   &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0]),
    poly(2005.0, 2000.0, 1.0,   &[63.86, 0.3345, -0.060_374, 0.001_727_5, 0.000_651_814, 0.000_023_735_99]),
    poly(2050.0, 2000.0, 1.0,   &[62.92, 0.322_17, 0.005_589]),
    Era { until: 2150.0, formula: Formula::LongTermJoined },
    Era { until: f64::INFINITY, formula: Formula::LongTerm },
];

/// ΔT in seconds at a decimal year, without range diagnostics.
fn evaluate(y: f64) -> f64 {
    ERAS.iter()
        .find(|era| y < era.until)
        .map_or(Formula::LongTerm, |era| era.formula)
        .evaluate(y)
}

fn check_range(y: f64) {
    if !FITTED_RANGE.contains(&y) {
        warn!("ΔT requested for year {y:.1}, outside the fitted range; extrapolating");
    }
}

/// **ΔT = TT − UT** for the middle of `month` in `year`.
///
/// Never fails: months outside 1..=12 simply shift the decimal year.
pub fn delta_t(year: i32, month: u32) -> Seconds {
    delta_t_at(f64::from(year) + (f64::from(month) - 0.5) / 12.0)
}

/// **ΔT = TT − UT** at a decimal year (`2000.0` is the start of 2000).
pub fn delta_t_at(decimal_year: f64) -> Seconds {
    check_range(decimal_year);
    Seconds::new(evaluate(decimal_year))
}

/// Returns **ΔT** for a Julian Day on the **UT** axis.
#[inline]
pub(crate) fn delta_t_from_ut(jd_ut: Days) -> Seconds {
    let y = 2000.0 + (jd_ut.value() - JD_2000_JAN_0H) / DAYS_PER_YEAR;
    Seconds::new(evaluate(y))
}

// ── Time<UT> convenience method ───────────────────────────────────────────

impl Time<UT> {
    /// Returns **ΔT = TT − UT** in seconds for this UT epoch.
    ///
    /// This is a convenience accessor; the same correction is applied
    /// automatically when converting to any TT-based scale (`.to::<JDE>()`).
    #[inline]
    pub fn delta_t(&self) -> Seconds {
        delta_t_from_ut(self.quantity())
    }
}
