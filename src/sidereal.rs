// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Greenwich sidereal time.
//!
//! Mean sidereal time follows Meeus eq. 12.3: the IAU 1982 polynomial is
//! evaluated at the preceding 0h UT and the elapsed fraction of the day is
//! scaled by the ratio of sidereal to solar day. Apparent sidereal time adds
//! the equation of the equinoxes, `Δψ·cos ε`.
//!
//! All functions read their argument as a Julian Day on the **UT** axis and
//! return degrees in `[0, 360)`.
//!
//! ```
//! use meeus_core::{Time, JD};
//!
//! let t = Time::<JD>::from_calendar(1987, 4, 10.0).unwrap();
//! assert!((t.mean_sidereal_time() - 197.693_195).abs() < 1e-6);
//! ```

use super::instant::Time;
use super::scales::{JD, JDE, TT, UT, UTC};

const J2000: f64 = 2_451_545.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Sidereal days per solar day.
const SIDEREAL_RATE: f64 = 1.002_737_909_35;

/// Mean Greenwich sidereal time in degrees for a UT Julian Day.
pub fn mean_sidereal_time(jd_ut: f64) -> f64 {
    let jd0 = (jd_ut - 0.5).floor() + 0.5;
    let t = (jd0 - J2000) / DAYS_PER_CENTURY;

    // Seconds of sidereal time at 0h UT, reduced early to keep precision.
    let drift = (t * (8_640_184.812_866 + t * (0.093_104 - 0.000_006_2 * t)))
        .rem_euclid(SECONDS_PER_DAY);
    let theta0 = (24_110.548_41 + drift) / SECONDS_PER_DAY;

    (theta0 + (jd_ut - jd0) * SIDEREAL_RATE).rem_euclid(1.0) * 360.0
}

/// Apparent Greenwich sidereal time in degrees.
///
/// `true_obliquity_deg` is ε and `nutation_longitude_deg` is Δψ, both in
/// degrees, typically supplied by a nutation model.
pub fn apparent_sidereal_time(
    jd_ut: f64,
    true_obliquity_deg: f64,
    nutation_longitude_deg: f64,
) -> f64 {
    let correction = nutation_longitude_deg * true_obliquity_deg.to_radians().cos();
    (mean_sidereal_time(jd_ut) + correction).rem_euclid(360.0)
}

macro_rules! impl_sidereal_views {
    ($($scale:ty),+ $(,)?) => {
        $(
            impl Time<$scale> {
                /// Mean Greenwich sidereal time in degrees, reading the day count as UT.
                #[inline]
                pub fn mean_sidereal_time(&self) -> f64 {
                    $crate::sidereal::mean_sidereal_time(self.value())
                }

                /// Apparent Greenwich sidereal time in degrees, reading the day count as UT.
                #[inline]
                pub fn apparent_sidereal_time(
                    &self,
                    true_obliquity_deg: f64,
                    nutation_longitude_deg: f64,
                ) -> f64 {
                    $crate::sidereal::apparent_sidereal_time(
                        self.value(),
                        true_obliquity_deg,
                        nutation_longitude_deg,
                    )
                }
            }
        )+
    };
}

impl_sidereal_views!(JD, JDE, TT, UT, UTC);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // Meeus examples 12.a and 12.b: 1987 April 10.
    const APRIL_10_1987: f64 = 2_446_895.5;

    #[test]
    fn mean_at_midnight() {
        assert_abs_diff_eq!(mean_sidereal_time(APRIL_10_1987), 197.693_195_1, epsilon = 1e-6);
    }

    #[test]
    fn mean_during_the_day() {
        let jd = APRIL_10_1987 + (19.0 + 21.0 / 60.0) / 24.0;
        assert_abs_diff_eq!(mean_sidereal_time(jd), 128.737_873_3, epsilon = 1e-6);
    }

    #[test]
    fn apparent_adds_equation_of_the_equinoxes() {
        let dpsi = -3.788 / 3600.0;
        let gast = apparent_sidereal_time(APRIL_10_1987, 23.443_57, dpsi);
        assert_abs_diff_eq!(gast, 197.692_229_7, epsilon = 1e-6);
    }

    #[test]
    fn always_within_one_turn() {
        let mut jd = 2_400_000.0;
        while jd < 2_500_000.0 {
            let theta = mean_sidereal_time(jd);
            assert!((0.0..360.0).contains(&theta), "{theta} at {jd}");
            let apparent = apparent_sidereal_time(jd, 23.44, 0.01);
            assert!((0.0..360.0).contains(&apparent));
            jd += 1_234.567;
        }
    }

    #[test]
    fn one_solar_day_advances_by_the_sidereal_excess() {
        let a = mean_sidereal_time(APRIL_10_1987 + 0.25);
        let b = mean_sidereal_time(APRIL_10_1987 + 1.25);
        let excess = (b - a).rem_euclid(360.0);
        assert_abs_diff_eq!(excess, 0.985_647, epsilon = 1e-4);
    }

    #[test]
    fn time_views_match_free_functions() {
        let t = Time::<UT>::from_ymd_hms(1987, 4, 10, 19, 21, 0.0).unwrap();
        assert_abs_diff_eq!(t.mean_sidereal_time(), 128.737_873_3, epsilon = 1e-6);
        let jde = Time::<JDE>::new(APRIL_10_1987);
        assert_eq!(
            jde.apparent_sidereal_time(23.443_57, 0.0),
            mean_sidereal_time(APRIL_10_1987)
        );
    }
}
