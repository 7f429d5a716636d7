// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Kepler's equation `M = E − e·sin E` for elliptic orbits (Meeus ch. 30).

use super::error::{MeeusError, Result};
use log::debug;
use std::f64::consts::{PI, TAU};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Newton–Raphson solver settings.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeplerSolver {
    /// Convergence threshold on the Newton step, in radians.
    pub tolerance: f64,
    /// Newton iterations allowed before giving up.
    pub max_iterations: usize,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            tolerance: 1e-9,
            max_iterations: 50,
        }
    }
}

/// Eccentric and true anomaly for one mean anomaly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct KeplerSolution {
    /// E in radians, in `(−π, π]`.
    pub eccentric_anomaly: f64,
    /// ν in radians, in `(−π, π]`.
    pub true_anomaly: f64,
    /// Newton iterations spent.
    pub iterations: usize,
}

impl KeplerSolution {
    #[inline]
    pub fn eccentric_anomaly_deg(&self) -> f64 {
        self.eccentric_anomaly.to_degrees()
    }

    #[inline]
    pub fn true_anomaly_deg(&self) -> f64 {
        self.true_anomaly.to_degrees()
    }
}

impl KeplerSolver {
    /// Solve for eccentricity `e` in `[0, 1)` and mean anomaly `M` in radians.
    ///
    /// Starts from Danby's guess `E₀ = M + 0.85·e·sign(sin M)`, which keeps
    /// Newton's method convergent up to `e → 1`.
    pub fn solve(&self, e: f64, mean_anomaly: f64) -> Result<KeplerSolution> {
        if !e.is_finite() || !(0.0..1.0).contains(&e) {
            return Err(MeeusError::InvalidEccentricity(e));
        }
        if !mean_anomaly.is_finite() {
            return Err(MeeusError::DomainRange(format!(
                "mean anomaly {mean_anomaly} is not finite"
            )));
        }

        let m = normalize(mean_anomaly);
        let mut ea = m + 0.85 * e * m.sin().signum();
        for iteration in 1..=self.max_iterations {
            let delta = (ea - e * ea.sin() - m) / (1.0 - e * ea.cos());
            ea -= delta;
            if delta.abs() < self.tolerance {
                debug!("Kepler e = {e}, M = {m}: converged in {iteration} iterations");
                let ea = normalize(ea);
                return Ok(KeplerSolution {
                    eccentric_anomaly: ea,
                    true_anomaly: true_anomaly(e, ea),
                    iterations: iteration,
                });
            }
        }
        debug!(
            "Kepler e = {e}, M = {m}: no convergence after {} iterations",
            self.max_iterations
        );
        Err(MeeusError::NoConvergence {
            iterations: self.max_iterations,
        })
    }

    /// Same as [`solve`](Self::solve) with the mean anomaly in degrees.
    pub fn solve_degrees(&self, e: f64, mean_anomaly_deg: f64) -> Result<KeplerSolution> {
        self.solve(e, mean_anomaly_deg.to_radians())
    }
}

/// `ν = 2·atan2(√(1+e)·sin(E/2), √(1−e)·cos(E/2))`
fn true_anomaly(e: f64, ea: f64) -> f64 {
    let half = ea / 2.0;
    normalize(2.0 * ((1.0 + e).sqrt() * half.sin()).atan2((1.0 - e).sqrt() * half.cos()))
}

/// Reduce an angle to `(−π, π]`.
fn normalize(angle: f64) -> f64 {
    let reduced = angle.rem_euclid(TAU);
    if reduced > PI {
        reduced - TAU
    } else {
        reduced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.1, 5.0, 5.554_589, 6.139_762)]
    #[case(0.99, 1.0, 24.725_822, 144.155_952)]
    #[case(0.5, 200.0, -166.626_297, -172.255_254)]
    fn meeus_examples(
        #[case] e: f64,
        #[case] m_deg: f64,
        #[case] ea_deg: f64,
        #[case] nu_deg: f64,
    ) {
        let solution = KeplerSolver::default().solve_degrees(e, m_deg).unwrap();
        assert_abs_diff_eq!(solution.eccentric_anomaly_deg(), ea_deg, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.true_anomaly_deg(), nu_deg, epsilon = 1e-6);
    }

    #[test]
    fn high_eccentricity_in_radians() {
        let solution = KeplerSolver::default().solve(0.99, 0.2).unwrap();
        assert_abs_diff_eq!(solution.eccentric_anomaly_deg(), 61.134_445_78, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.true_anomaly_deg(), 166.311_977, epsilon = 1e-6);
        assert!(solution.iterations <= 10);
    }

    #[test]
    fn satisfies_keplers_equation() {
        let solver = KeplerSolver::default();
        for e in [0.0, 0.2, 0.6, 0.9, 0.999] {
            for step in -20..=20 {
                let m = f64::from(step) * 0.157;
                let s = solver.solve(e, m).unwrap();
                let residual = s.eccentric_anomaly - e * s.eccentric_anomaly.sin() - normalize(m);
                assert!(residual.abs() < 1e-8, "e = {e}, M = {m}: {residual}");
                assert!(s.eccentric_anomaly > -PI && s.eccentric_anomaly <= PI);
                assert!(s.true_anomaly > -PI && s.true_anomaly <= PI);
            }
        }
    }

    #[test]
    fn circular_orbit_is_the_identity() {
        let s = KeplerSolver::default().solve(0.0, 1.234).unwrap();
        assert_abs_diff_eq!(s.eccentric_anomaly, 1.234, epsilon = 1e-12);
        assert_abs_diff_eq!(s.true_anomaly, 1.234, epsilon = 1e-12);
    }

    #[test]
    fn apsides_are_fixed_points() {
        let solver = KeplerSolver::default();
        let perihelion = solver.solve(0.7, 0.0).unwrap();
        assert_eq!(perihelion.eccentric_anomaly, 0.0);
        assert_eq!(perihelion.true_anomaly, 0.0);
        let aphelion = solver.solve(0.7, PI).unwrap();
        assert_abs_diff_eq!(aphelion.eccentric_anomaly.abs(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(aphelion.true_anomaly.abs(), PI, epsilon = 1e-9);
    }

    #[rstest]
    #[case(1.0)]
    #[case(1.5)]
    #[case(-0.1)]
    #[case(f64::NAN)]
    fn rejects_non_elliptic_eccentricity(#[case] e: f64) {
        assert!(matches!(
            KeplerSolver::default().solve(e, 1.0),
            Err(MeeusError::InvalidEccentricity(_))
        ));
    }

    #[test]
    fn reports_an_exhausted_budget() {
        let solver = KeplerSolver {
            max_iterations: 1,
            ..KeplerSolver::default()
        };
        assert_eq!(
            solver.solve(0.99, 0.2),
            Err(MeeusError::NoConvergence { iterations: 1 })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn settings_roundtrip_through_json() {
        let solver = KeplerSolver {
            tolerance: 1e-12,
            max_iterations: 80,
        };
        let json = serde_json::to_string(&solver).unwrap();
        let back: KeplerSolver = serde_json::from_str(&json).unwrap();
        assert_eq!(back, solver);
    }
}
