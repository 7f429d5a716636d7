// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Least-squares curve fitting (Meeus ch. 4).
//!
//! Where an [`Interpolator`](crate::Interpolator) passes exactly through a
//! few accurate samples, a [`CurveFitting`] takes many noisy observations
//! and finds the curve of a given family closest to them:
//!
//! | Query | Curve |
//! |-------|-------|
//! | [`linear_fitting`](CurveFitting::linear_fitting) | `y = a·x + b` |
//! | [`quadratic_fitting`](CurveFitting::quadratic_fitting) | `y = a·x² + b·x + c` |
//! | [`general_fitting`](CurveFitting::general_fitting) | `y = a·f₀(x) + b·f₁(x) + c·f₂(x)` |
//!
//! Observations keep their input order and may repeat an abscissa.
//!
//! ```
//! use meeus_core::CurveFitting;
//!
//! let data = CurveFitting::new([0.0, 1.0, 2.0, 3.0], [-1.0, 1.5, 4.0, 6.5]).unwrap();
//! let (a, b) = data.linear_fitting().unwrap();
//! assert!((a - 2.5).abs() < 1e-12 && (b + 1.0).abs() < 1e-12);
//! assert!((data.correlation_coeff().unwrap() - 1.0).abs() < 1e-12);
//! ```

use super::error::{MeeusError, Result};
use log::debug;

/// Determinants or pivots this small, relative to the size of their terms,
/// mark a system the observations cannot determine.
const SINGULAR: f64 = 1e-12;

/// Power sums of the observations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Sums {
    n: f64,
    x: f64,
    x2: f64,
    x3: f64,
    x4: f64,
    y: f64,
    xy: f64,
    x2y: f64,
    y2: f64,
}

impl Sums {
    fn add(&mut self, x: f64, y: f64) {
        let x2 = x * x;
        self.n += 1.0;
        self.x += x;
        self.x2 += x2;
        self.x3 += x2 * x;
        self.x4 += x2 * x2;
        self.y += y;
        self.xy += x * y;
        self.x2y += x2 * y;
        self.y2 += y * y;
    }
}

/// A set of `(x, y)` observations to fit curves through.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveFitting {
    points: Vec<(f64, f64)>,
    sums: Sums,
}

impl CurveFitting {
    /// Build from parallel abscissa and ordinate sequences.
    ///
    /// Fails with [`MeeusError::InvalidSample`] on fewer than two
    /// observations, mismatched lengths or non-finite values.
    pub fn new<X, Y>(xs: X, ys: Y) -> Result<Self>
    where
        X: IntoIterator<Item = f64>,
        Y: IntoIterator,
        Y::Item: Into<f64>,
    {
        let xs: Vec<f64> = xs.into_iter().collect();
        let ys: Vec<f64> = ys.into_iter().map(Into::into).collect();
        if xs.len() != ys.len() {
            return Err(MeeusError::InvalidSample(format!(
                "{} abscissas for {} ordinates",
                xs.len(),
                ys.len()
            )));
        }
        Self::from_pairs(xs.into_iter().zip(ys))
    }

    /// Build from ordinates alone, observed at `x = 0, 1, 2, …`.
    pub fn from_ordinates<Y>(ys: Y) -> Result<Self>
    where
        Y: IntoIterator,
        Y::Item: Into<f64>,
    {
        Self::from_pairs(ys.into_iter().enumerate().map(|(i, y)| (i as f64, y)))
    }

    /// Build from `(x, y)` pairs.
    pub fn from_pairs<I, Y>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, Y)>,
        Y: Into<f64>,
    {
        let mut fitting = Self {
            points: Vec::new(),
            sums: Sums::default(),
        };
        for (x, y) in pairs {
            fitting.insert(x, y)?;
        }
        if fitting.len() < 2 {
            return Err(MeeusError::InvalidSample(format!(
                "at least 2 observations are needed, got {}",
                fitting.len()
            )));
        }
        Ok(fitting)
    }

    /// Add one observation.
    ///
    /// On error the set is left unchanged.
    pub fn insert<Y: Into<f64>>(&mut self, x: f64, y: Y) -> Result<()> {
        let y = y.into();
        if !x.is_finite() || !y.is_finite() {
            return Err(MeeusError::InvalidSample(format!(
                "non-finite observation ({x}, {y})"
            )));
        }
        self.points.push((x, y));
        self.sums.add(x, y);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: construction requires two observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Observations in input order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().copied()
    }

    /// Pearson correlation coefficient `r` of the observations (Meeus 4.3).
    ///
    /// Undefined when every abscissa or every ordinate is the same.
    pub fn correlation_coeff(&self) -> Result<f64> {
        let Sums { n, x, x2, y, xy, y2, .. } = self.sums;
        let spread_x = n * x2 - x * x;
        let spread_y = n * y2 - y * y;
        if spread_x <= SINGULAR * n * x2 || spread_y <= SINGULAR * n * y2 {
            return Err(MeeusError::InvalidSample(
                "correlation needs abscissas and ordinates that vary".to_string(),
            ));
        }
        let r = (n * xy - x * y) / (spread_x.sqrt() * spread_y.sqrt());
        Ok(r.clamp(-1.0, 1.0))
    }

    /// Slope `a` and intercept `b` of the line `y = a·x + b` (Meeus 4.2).
    pub fn linear_fitting(&self) -> Result<(f64, f64)> {
        let Sums { n, x, x2, y, xy, .. } = self.sums;
        let d = n * x2 - x * x;
        if d <= SINGULAR * n * x2 {
            return Err(MeeusError::InvalidSample(
                "a line needs at least 2 distinct abscissas".to_string(),
            ));
        }
        let a = (n * xy - x * y) / d;
        let b = (y * x2 - x * xy) / d;
        debug!("linear fit over {} observations: a = {a}, b = {b}", self.len());
        Ok((a, b))
    }

    /// Coefficients `(a, b, c)` of the parabola `y = a·x² + b·x + c` (Meeus 4.5).
    pub fn quadratic_fitting(&self) -> Result<(f64, f64, f64)> {
        let Sums {
            n,
            x: p,
            x2: q,
            x3: r,
            x4: s,
            y: t,
            xy: u,
            x2y: v,
            ..
        } = self.sums;
        let terms = [n * q * s, 2.0 * p * q * r, -q * q * q, -p * p * s, -n * r * r];
        let d: f64 = terms.iter().sum();
        let scale: f64 = terms.iter().map(|term| term.abs()).sum();
        if d.abs() <= SINGULAR * scale {
            return Err(MeeusError::InvalidSample(
                "a parabola needs at least 3 distinct abscissas".to_string(),
            ));
        }
        let a = (n * q * v + p * r * t + p * q * u - q * q * t - p * p * v - n * r * u) / d;
        let b = (n * s * u + p * q * v + q * r * t - q * q * u - p * s * t - n * r * v) / d;
        let c = (q * s * t + q * r * u + p * r * v - q * q * v - p * s * u - r * r * t) / d;
        debug!(
            "quadratic fit over {} observations: a = {a}, b = {b}, c = {c}",
            self.len()
        );
        Ok((a, b, c))
    }

    /// Coefficients `(a, b, c)` of `y = a·f₀(x) + b·f₁(x) + c·f₂(x)` (Meeus 4.6).
    ///
    /// A function that vanishes on every abscissa drops out of the fit and
    /// gets a zero coefficient, so `|_| 0.0` fits fewer than three terms.
    /// Fails with [`MeeusError::InvalidSample`] when every function vanishes,
    /// when one yields a non-finite value, or when the remaining functions
    /// are linearly dependent on the observed abscissas.
    pub fn general_fitting<F0, F1, F2>(&self, f0: F0, f1: F1, f2: F2) -> Result<(f64, f64, f64)>
    where
        F0: Fn(f64) -> f64,
        F1: Fn(f64) -> f64,
        F2: Fn(f64) -> f64,
    {
        let mut gram = [[0.0; 3]; 3];
        let mut rhs = [0.0; 3];
        for &(x, y) in &self.points {
            let f = [f0(x), f1(x), f2(x)];
            if f.iter().any(|v| !v.is_finite()) {
                return Err(MeeusError::InvalidSample(format!(
                    "fitting function is not finite at x = {x}"
                )));
            }
            for i in 0..3 {
                rhs[i] += y * f[i];
                for j in 0..3 {
                    gram[i][j] += f[i] * f[j];
                }
            }
        }

        let largest = (0..3).map(|i| gram[i][i]).fold(0.0, f64::max);
        let active: Vec<usize> = (0..3)
            .filter(|&i| gram[i][i] > SINGULAR * largest)
            .collect();
        if active.is_empty() {
            return Err(MeeusError::InvalidSample(
                "every fitting function vanishes on the observations".to_string(),
            ));
        }

        let mut system = [[0.0; 3]; 3];
        let mut b = [0.0; 3];
        for (row, &i) in active.iter().enumerate() {
            b[row] = rhs[i];
            for (col, &j) in active.iter().enumerate() {
                system[row][col] = gram[i][j];
            }
        }
        let Some(solution) = solve_normal(system, b, active.len(), largest) else {
            return Err(MeeusError::InvalidSample(
                "fitting functions are linearly dependent on the observations".to_string(),
            ));
        };

        let mut coefficients = [0.0; 3];
        for (row, &i) in active.iter().enumerate() {
            coefficients[i] = solution[row];
        }
        debug!(
            "general fit over {} observations with {} terms: {coefficients:?}",
            self.len(),
            active.len()
        );
        Ok((coefficients[0], coefficients[1], coefficients[2]))
    }
}

/// Gaussian elimination with partial pivoting on the leading `size × size`
/// block. `None` when a pivot falls below `SINGULAR · scale`.
fn solve_normal(
    mut a: [[f64; 3]; 3],
    mut b: [f64; 3],
    size: usize,
    scale: f64,
) -> Option<[f64; 3]> {
    for col in 0..size {
        let pivot = (col..size).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        if a[pivot][col].abs() <= SINGULAR * scale {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);
        let lead = a[col];
        for row in col + 1..size {
            let factor = a[row][col] / lead[col];
            for k in col..size {
                a[row][k] -= factor * lead[k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = [0.0; 3];
    for row in (0..size).rev() {
        let tail: f64 = (row + 1..size).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Some(x)
}
