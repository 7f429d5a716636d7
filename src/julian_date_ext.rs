// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! J2000-relative views on Julian Days (`Time<JD>` and `Time<JDE>`).
//!
//! Ephemeris series take their argument in Julian centuries (nutation,
//! sidereal time) or millennia (VSOP87) since J2000.0; these helpers keep
//! that arithmetic in one place.

use qtty::*;

use super::instant::Time;
use super::scales::{JD, JDE, MJD};

macro_rules! impl_julian_date_ext {
    ($($scale:ty),+ $(,)?) => {
        $(
            impl Time<$scale> {
                /// J2000.0 epoch: 2000-01-01T12:00:00 TT (JD 2 451 545.0).
                pub const J2000: Self = Self::new(2_451_545.0);

                /// One Julian year expressed in days.
                pub const JULIAN_YEAR: Days = Days::new(365.25);

                /// One Julian century expressed in days.
                pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

                /// One Julian millennium expressed in days.
                pub const JULIAN_MILLENNIUM: Days = Days::new(365_250.0);

                /// Julian millennia since J2000.0.
                #[inline]
                pub fn julian_millennias(&self) -> Millennia {
                    Millennia::new(
                        ((*self - Self::J2000) / Self::JULIAN_MILLENNIUM)
                            .simplify()
                            .value(),
                    )
                }

                /// Julian centuries since J2000.0 (`T` in most Meeus series).
                #[inline]
                pub fn julian_centuries(&self) -> Centuries {
                    Centuries::new(
                        ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                            .simplify()
                            .value(),
                    )
                }

                /// Julian years since J2000.0.
                #[inline]
                pub fn julian_years(&self) -> JulianYears {
                    JulianYears::new(
                        ((*self - Self::J2000) / Self::JULIAN_YEAR)
                            .simplify()
                            .value(),
                    )
                }

                /// The same instant as a Modified Julian Date.
                #[inline]
                pub fn to_mjd(&self) -> Time<MJD> {
                    self.to::<MJD>()
                }

                /// `JD − 2 400 000.5` as a raw number.
                #[inline]
                pub fn modified_julian_day(&self) -> f64 {
                    self.to_mjd().value()
                }
            }

            impl From<Centuries> for Time<$scale> {
                /// Reads `Centuries` as Julian centuries since J2000.0.
                fn from(centuries: Centuries) -> Self {
                    Self::J2000 + Days::new(centuries.value() * Self::JULIAN_CENTURY.value())
                }
            }

            impl From<Time<$scale>> for Centuries {
                fn from(time: Time<$scale>) -> Self {
                    time.julian_centuries()
                }
            }
        )+
    };
}

impl_julian_date_ext!(JD, JDE);
