// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types shared by every fallible operation of the crate.

use thiserror::Error;

/// Errors raised by calendar construction, interpolation and the iterative solvers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeeusError {
    /// A calendar tuple that does not name a real date.
    #[error("Invalid date {year}-{month}-{day}: {reason}")]
    InvalidDate {
        /// Year as given by the caller (astronomical numbering)
        year: i32,
        /// Month as given by the caller
        month: u32,
        /// Day (possibly fractional) as given by the caller
        day: f64,
        /// Which check failed
        reason: &'static str,
    },

    /// A month name that is neither an English month nor its abbreviation.
    #[error("Unknown month name: {0:?}")]
    UnknownMonth(String),

    /// Interpolation samples violating the count, ordering or uniqueness rules.
    #[error("Invalid interpolation sample: {0}")]
    InvalidSample(String),

    /// An iterative solver exhausted its budget, or the problem has no solution in range.
    #[error("No convergence after {iterations} iterations")]
    NoConvergence {
        /// Iterations spent before giving up
        iterations: usize,
    },

    /// Eccentricity outside the elliptic range `[0, 1)`.
    #[error("Eccentricity {0} is outside [0, 1)")]
    InvalidEccentricity(f64),

    /// Input outside the range a table or epoch-based algorithm is defined for.
    #[error("Outside the supported range: {0}")]
    DomainRange(String),
}

impl MeeusError {
    pub(crate) fn invalid_date(year: i32, month: u32, day: f64, reason: &'static str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            reason,
        }
    }
}

/// Result alias for operations of this crate.
pub type Result<T> = std::result::Result<T, MeeusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_input() {
        let err = MeeusError::invalid_date(2024, 13, 1.0, "month out of range");
        assert_eq!(
            err.to_string(),
            "Invalid date 2024-13-1: month out of range"
        );
        assert_eq!(
            MeeusError::InvalidEccentricity(1.2).to_string(),
            "Eccentricity 1.2 is outside [0, 1)"
        );
        assert_eq!(
            MeeusError::NoConvergence { iterations: 50 }.to_string(),
            "No convergence after 50 iterations"
        );
    }
}
