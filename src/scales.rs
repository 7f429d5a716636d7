// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a specific time scale and encodes how
//! values in that scale relate to the canonical **Julian Date in TT**
//! (Terrestrial Time).
//!
//! # Dynamical counters
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Date on the TT axis | 0.0 |
//! | [`JDE`] | Julian Ephemeris Day | 0.0 |
//! | [`TT`] | Terrestrial Time | 0.0 |
//! | [`MJD`] | Modified Julian Date | 2 400 000.5 |
//! | [`TAI`] | International Atomic Time | 0.0, shifted by 32.184 s |
//!
//! # Civil scales
//!
//! | Marker | Offset to TT |
//! |--------|--------------|
//! | [`UTC`] | 32.184 s + 10 s + leap seconds (ΔT before 1972) |
//! | [`UT`]  | ΔT |

use super::delta_t::delta_t_from_ut;
use super::instant::{Time, TimeScale};
use super::leap_seconds::tt_minus_utc_at;
use qtty::{Day, Days};

// ---------------------------------------------------------------------------
// Dynamical counters
// ---------------------------------------------------------------------------

/// Julian Date — the identity scale.
///
/// `to_jd_tt(v) = v`, i.e. the quantity *is* a Julian Day number.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "JD";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// Julian Ephemeris Day — the uniform axis every ephemeris formula is written in.
///
/// Numerically a Julian day on the TT axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JDE;

impl TimeScale for JDE {
    const LABEL: &'static str = "JDE";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// Terrestrial Time.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TT;

impl TimeScale for TT {
    const LABEL: &'static str = "TT";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// Modified Julian Date — JD minus 2 400 000.5.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJD;

/// The constant offset between JD and MJD: `JD = MJD + MJD_EPOCH`.
pub(crate) const MJD_EPOCH: Days = Days::new(2_400_000.5);

impl TimeScale for MJD {
    const LABEL: &'static str = "MJD";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value + MJD_EPOCH
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt - MJD_EPOCH
    }
}

/// International Atomic Time.
///
/// `TT = TAI + 32.184 s`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TAI;

/// `TT = TAI + 32.184 s` expressed in days.
const TT_MINUS_TAI: Days = Days::new(32.184 / 86_400.0);

impl TimeScale for TAI {
    const LABEL: &'static str = "TAI";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value + TT_MINUS_TAI
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt - TT_MINUS_TAI
    }
}

// ---------------------------------------------------------------------------
// Civil scales
// ---------------------------------------------------------------------------

/// Coordinated Universal Time, as a Julian Day on the UTC axis.
///
/// From 1972-01-01 the offset to TT is `32.184 s + 10 s + leap seconds`,
/// read from the embedded leap-second table. Earlier instants have no leap
/// seconds and fall back to ΔT, treating UTC as UT.
///
/// The inverse solves `utc + offset(utc) = tt` by fixed-point iteration.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UTC;

impl TimeScale for UTC {
    const LABEL: &'static str = "UTC";

    #[inline]
    fn to_jd_tt(utc_value: Days) -> Days {
        utc_value + tt_minus_utc_at(utc_value).to::<Day>()
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        let mut utc = jd_tt;
        for _ in 0..3 {
            utc = jd_tt - tt_minus_utc_at(utc).to::<Day>();
        }
        utc
    }
}

/// Universal Time — the civil time scale tied to Earth's rotation.
///
/// Unlike [`JD`], [`JDE`], and [`TT`] (which all live on the uniform TT
/// axis), `UT` encodes a Julian Day on the **UT** axis. The conversion
/// to JD(TT) adds the epoch-dependent **ΔT** from the era table in
/// [`delta_t`](crate::delta_t), and the inverse uses a three-iteration
/// fixed-point solver with sub-microsecond accuracy.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UT;

impl TimeScale for UT {
    const LABEL: &'static str = "UT";

    #[inline]
    fn to_jd_tt(ut_value: Days) -> Days {
        ut_value + delta_t_from_ut(ut_value).to::<Day>()
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        // dΔT/dJD is tiny, so the fixed point settles immediately.
        let mut ut = jd_tt;
        for _ in 0..3 {
            ut = jd_tt - delta_t_from_ut(ut).to::<Day>();
        }
        ut
    }
}

// ---------------------------------------------------------------------------
// Cross-scale From/Into (generated by macro)
// ---------------------------------------------------------------------------

/// Generate pairwise `From<Time<A>> for Time<B>` implementations.
macro_rules! impl_time_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<Time<$first>> for Time<$rest> {
                #[inline]
                fn from(t: Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<Time<$rest>> for Time<$first> {
                #[inline]
                fn from(t: Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(JD, JDE, TT, MJD, TAI, UTC, UT);
