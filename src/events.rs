// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Locating the epoch of an event.
//!
//! Conjunctions, oppositions, stations, equinoxes and lunar phases all reduce
//! to the same problem: find when a scalar function of time crosses zero or
//! peaks. [`EventSearch`] samples the function at three epochs spaced by a
//! fixed step, fits a parabola through them with an [`Interpolator`] and moves
//! the centre to the parabola's root or vertex, repeating until the move is
//! smaller than the tolerance.
//!
//! ```
//! use meeus_core::{EventSearch, Time, JDE};
//! use qtty::Days;
//!
//! // A quantity that vanishes 0.25 d after the starting epoch.
//! let start = Time::<JDE>::new(2_451_545.0);
//! let event = EventSearch::default()
//!     .find_root(start, |t| ((t - start).value() - 0.25).sin())
//!     .unwrap();
//! assert!((event - start - Days::new(0.25)).abs() < Days::new(1e-6));
//! ```

use super::error::{MeeusError, Result};
use super::interpolation::Interpolator;
use super::period::Period;
use super::{Time, TimeScale};
use log::debug;
use qtty::Days;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings of the three-point bracket-and-refine search.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventSearch {
    /// Spacing of the three samples.
    #[cfg_attr(feature = "serde", serde(with = "days_as_f64"))]
    pub step: Days,
    /// The search stops once the centre moves less than this.
    #[cfg_attr(feature = "serde", serde(with = "days_as_f64"))]
    pub tolerance: Days,
    /// Refinement rounds allowed before giving up.
    pub max_iterations: usize,
}

impl Default for EventSearch {
    fn default() -> Self {
        Self {
            step: Days::new(1.0),
            tolerance: Days::new(1e-6),
            max_iterations: 50,
        }
    }
}

/// Durations travel as a bare number of days.
#[cfg(feature = "serde")]
mod days_as_f64 {
    use qtty::Days;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(days: &Days, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(days.value())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Days, D::Error> {
        f64::deserialize(deserializer).map(Days::new)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Target {
    Root,
    Extremum,
}

impl EventSearch {
    pub fn with_step(mut self, step: Days) -> Self {
        self.step = step;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Days) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Epoch near `center` where `f` crosses zero.
    ///
    /// Each round picks the root of the local parabola nearest the current
    /// centre. Fails with [`MeeusError::NoConvergence`] when the parabola has
    /// no real root or the round budget runs out.
    pub fn find_root<S, F>(&self, center: Time<S>, mut f: F) -> Result<Time<S>>
    where
        S: TimeScale,
        F: FnMut(Time<S>) -> f64,
    {
        self.refine(center, &mut f, Target::Root)
    }

    /// Epoch near `center` where `f` reaches a maximum or minimum.
    pub fn find_extremum<S, F>(&self, center: Time<S>, mut f: F) -> Result<Time<S>>
    where
        S: TimeScale,
        F: FnMut(Time<S>) -> f64,
    {
        self.refine(center, &mut f, Target::Extremum)
    }

    /// Every zero crossing of `f` inside `period`, in chronological order.
    ///
    /// The period is scanned at `step`; each interval whose endpoints differ
    /// in sign is refined with [`find_root`](Self::find_root) from its
    /// midpoint. Crossings closer together than one step may be missed.
    pub fn find_roots_within<S, F>(&self, period: Period<S>, mut f: F) -> Result<Vec<Time<S>>>
    where
        S: TimeScale,
        F: FnMut(Time<S>) -> f64,
    {
        self.validate()?;
        let samples: Vec<(Time<S>, f64)> = period
            .steps(self.step)
            .into_iter()
            .map(|t| (t, f(t)))
            .collect();

        let mut roots = Vec::new();
        for pair in samples.windows(2) {
            let ((t0, v0), (t1, v1)) = (pair[0], pair[1]);
            if v0 == 0.0 {
                roots.push(t0);
            } else if v0 * v1 < 0.0 {
                let root = self.refine(t0.mean(t1), &mut f, Target::Root)?;
                if period.contains(&root) {
                    roots.push(root);
                }
            }
        }
        if let Some(&(t, v)) = samples.last() {
            if v == 0.0 {
                roots.push(t);
            }
        }

        roots.sort_by(|a, b| a.value().total_cmp(&b.value()));
        roots.dedup_by(|a, b| (*a - *b).abs() < self.tolerance);
        debug!("event scan over {period}: {} crossings", roots.len());
        Ok(roots)
    }

    fn validate(&self) -> Result<()> {
        let positive = |d: Days| d.value().is_finite() && d.value() > 0.0;
        if !positive(self.step) || !positive(self.tolerance) {
            return Err(MeeusError::DomainRange(format!(
                "event search needs a positive step and tolerance, got {} and {}",
                self.step, self.tolerance
            )));
        }
        Ok(())
    }

    fn refine<S, F>(&self, start: Time<S>, f: &mut F, target: Target) -> Result<Time<S>>
    where
        S: TimeScale,
        F: FnMut(Time<S>) -> f64,
    {
        self.validate()?;
        let h = self.step.value();
        let mut center = start;

        for round in 1..=self.max_iterations {
            let values = [f(center - self.step), f(center), f(center + self.step)];
            let local = Interpolator::new([-h, 0.0, h], values)?;
            let offset = match target {
                Target::Root => local.root_near(0.0)?,
                Target::Extremum => local.extremum()?,
            };
            if !offset.is_finite() {
                return Err(MeeusError::NoConvergence { iterations: round });
            }

            debug!("event search round {round}: centre {center}, offset {offset} d");
            if offset.abs() < self.tolerance.value() {
                return Ok(center);
            }
            center += Days::new(offset);
        }

        debug!(
            "event search from {start}: no convergence after {} rounds",
            self.max_iterations
        );
        Err(MeeusError::NoConvergence {
            iterations: self.max_iterations,
        })
    }
}
