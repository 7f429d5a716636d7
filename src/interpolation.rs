// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Polynomial interpolation through tabulated samples (Meeus ch. 3).
//!
//! An [`Interpolator`] fits the unique polynomial through its samples and
//! answers value, derivative, root and extremum queries on it. The model is
//! chosen once, from the number of samples:
//!
//! | Samples | Model |
//! |---------|-------|
//! | 2 | straight line |
//! | 3 | parabola in a frame centred on the middle sample, closed-form root and extremum |
//! | 4+ | Newton divided-difference table, Horner evaluation, safeguarded Newton search |
//!
//! Samples are sorted by abscissa on construction. Repeated abscissas are
//! rejected. Evaluation outside the sampled range extrapolates the same
//! polynomial.
//!
//! ```
//! use meeus_core::Interpolator;
//!
//! let table = Interpolator::new([-1.0, 0.0, 1.0], [-2.0, 3.0, 2.0]).unwrap();
//! assert!((table.root().unwrap() + 0.720_759_22).abs() < 1e-8);
//! assert!((table.extremum().unwrap() - 1.0 / 3.0).abs() < 1e-12);
//! ```

use super::error::{MeeusError, Result};
use log::debug;
use std::cmp::Ordering;

/// Iteration budget of the bracketed Newton search.
const MAX_ITERATIONS: usize = 50;

/// Relative step below which the Newton search is considered converged.
const TOLERANCE: f64 = 1e-12;

/// Leading coefficients this small, relative to the others, make a parabola a line.
const DEGENERATE: f64 = 1e-12;

/// Polynomial through the samples, picked by arity.
#[derive(Debug, Clone)]
enum Model {
    /// `y₀ + slope·(x − x₀)`
    Linear { slope: f64 },
    /// `a·u² + b·u + c` with `u = x − x₁`
    Quadratic { a: f64, b: f64, c: f64 },
    /// Newton divided differences `f[x₀], f[x₀,x₁], …`
    General { table: Vec<f64> },
}

/// Interpolating polynomial through a set of `(x, y)` samples.
#[derive(Debug, Clone)]
pub struct Interpolator {
    x: Vec<f64>,
    y: Vec<f64>,
    model: Model,
}

impl Interpolator {
    /// Build from parallel abscissa and ordinate sequences.
    ///
    /// Ordinates may be any type convertible to `f64`. Fails with
    /// [`MeeusError::InvalidSample`] on fewer than two samples, mismatched
    /// lengths, non-finite values or a repeated abscissa.
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

    /// Build from `(x, y)` pairs.
    pub fn from_pairs<I, Y>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, Y)>,
        Y: Into<f64>,
    {
        let mut pairs: Vec<(f64, f64)> = pairs.into_iter().map(|(x, y)| (x, y.into())).collect();
        if pairs.len() < 2 {
            return Err(MeeusError::InvalidSample(format!(
                "at least 2 samples are needed, got {}",
                pairs.len()
            )));
        }
        if let Some((x, y)) = pairs.iter().find(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(MeeusError::InvalidSample(format!(
                "non-finite sample ({x}, {y})"
            )));
        }

        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        if let Some(pair) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(MeeusError::InvalidSample(format!(
                "duplicate abscissa {}",
                pair[0].0
            )));
        }

        let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let model = fit(&x, &y);
        Ok(Self { x, y, model })
    }

    /// Add one sample and refit.
    ///
    /// On error the interpolator is left unchanged.
    pub fn insert<Y: Into<f64>>(&mut self, x: f64, y: Y) -> Result<()> {
        let pairs = self.points().chain(std::iter::once((x, y.into())));
        *self = Self::from_pairs(pairs.collect::<Vec<_>>())?;
        Ok(())
    }

    // ── introspection ─────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false`: construction requires two samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Sorted abscissas.
    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.x
    }

    /// Ordinates, in abscissa order.
    #[inline]
    pub fn ys(&self) -> &[f64] {
        &self.y
    }

    /// Samples in abscissa order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    // ── queries ───────────────────────────────────────────────────────

    /// Value of the polynomial at `x`; the stored ordinate when `x` is a sample.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self
            .x
            .binary_search_by(|node| node.partial_cmp(&x).unwrap_or(Ordering::Less))
        {
            Ok(index) => self.y[index],
            Err(_) => self.eval(x).0,
        }
    }

    /// First derivative of the polynomial at `x`.
    pub fn derivative(&self, x: f64) -> Result<f64> {
        self.require_curve("derivative")?;
        Ok(self.eval(x).1)
    }

    /// Zero of the polynomial associated with the sampled range.
    ///
    /// With three samples both roots of the parabola are computed in closed
    /// form and the one nearest the sampled range is returned. With more
    /// samples a bracketed Newton search runs over the whole range, which
    /// must show a sign change.
    pub fn root(&self) -> Result<f64> {
        self.require_curve("root")?;
        match self.model {
            Model::Quadratic { a, b, c } => {
                let (first, last) = (self.first(), self.last());
                let distance = |x: f64| (first - x).max(x - last).max(0.0);
                let centre = self.x[1];
                quadratic_roots(a, b, c)
                    .map(|root| root.map(|u| u + centre))
                    .into_iter()
                    .flatten()
                    .min_by(|p, q| {
                        distance(*p)
                            .total_cmp(&distance(*q))
                            .then((p - centre).abs().total_cmp(&(q - centre).abs()))
                    })
                    .ok_or(MeeusError::NoConvergence { iterations: 0 })
            }
            _ => {
                let (lo, hi) = (self.first(), self.last());
                self.search(lo, hi, 0.5 * (lo + hi), |s, x| {
                    let (p, dp, _) = s.eval(x);
                    (p, dp)
                })
            }
        }
    }

    /// Zero of the polynomial nearest `guess`.
    ///
    /// With more than three samples the search still runs inside the sampled
    /// range, starting from `guess`.
    pub fn root_near(&self, guess: f64) -> Result<f64> {
        self.require_curve("root")?;
        match self.model {
            Model::Quadratic { a, b, c } => {
                let centre = self.x[1];
                quadratic_roots(a, b, c)
                    .map(|root| root.map(|u| u + centre))
                    .into_iter()
                    .flatten()
                    .min_by(|p, q| (p - guess).abs().total_cmp(&(q - guess).abs()))
                    .ok_or(MeeusError::NoConvergence { iterations: 0 })
            }
            _ => {
                let (lo, hi) = (self.first(), self.last());
                self.search(lo, hi, guess.clamp(lo, hi), |s, x| {
                    let (p, dp, _) = s.eval(x);
                    (p, dp)
                })
            }
        }
    }

    /// Zero of the polynomial inside `[lo, hi]`, which must show a sign change.
    pub fn root_within(&self, lo: f64, hi: f64) -> Result<f64> {
        self.require_curve("root")?;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(MeeusError::InvalidSample(format!(
                "invalid search bracket [{lo}, {hi}]"
            )));
        }
        self.search(lo, hi, 0.5 * (lo + hi), |s, x| {
            let (p, dp, _) = s.eval(x);
            (p, dp)
        })
    }

    /// Abscissa where the polynomial's derivative vanishes.
    ///
    /// Closed form `−b / 2a` for three samples; otherwise a bracketed Newton
    /// search on the derivative over the sampled range.
    pub fn extremum(&self) -> Result<f64> {
        self.require_curve("extremum")?;
        match self.model {
            Model::Quadratic { a, b, c } => {
                if is_flat(a, b, c) {
                    return Err(MeeusError::NoConvergence { iterations: 0 });
                }
                Ok(self.x[1] - b / (2.0 * a))
            }
            _ => {
                let (lo, hi) = (self.first(), self.last());
                self.search(lo, hi, 0.5 * (lo + hi), |s, x| {
                    let (_, dp, ddp) = s.eval(x);
                    (dp, ddp)
                })
            }
        }
    }

    // ── internals ─────────────────────────────────────────────────────

    #[inline]
    fn first(&self) -> f64 {
        self.x[0]
    }

    #[inline]
    fn last(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    fn require_curve(&self, query: &str) -> Result<()> {
        if self.len() < 3 {
            return Err(MeeusError::InvalidSample(format!(
                "{query} needs at least 3 samples, got {}",
                self.len()
            )));
        }
        Ok(())
    }

    /// Value, first and second derivative of the model at `x`.
    fn eval(&self, x: f64) -> (f64, f64, f64) {
        match &self.model {
            Model::Linear { slope } => (self.y[0] + slope * (x - self.x[0]), *slope, 0.0),
            Model::Quadratic { a, b, c } => {
                let u = x - self.x[1];
                ((a * u + b) * u + c, 2.0 * a * u + b, 2.0 * a)
            }
            Model::General { table } => {
                let n = table.len();
                let (mut p, mut dp, mut ddp) = (table[n - 1], 0.0, 0.0);
                for i in (0..n - 1).rev() {
                    let dx = x - self.x[i];
                    ddp = ddp * dx + 2.0 * dp;
                    dp = dp * dx + p;
                    p = p * dx + table[i];
                }
                (p, dp, ddp)
            }
        }
    }

    /// Newton iteration kept inside a shrinking sign-change bracket.
    ///
    /// `f` returns the function value and its derivative. Steps that leave
    /// the bracket fall back to the secant through its ends, then to bisection.
    fn search<F>(&self, mut lo: f64, mut hi: f64, start: f64, f: F) -> Result<f64>
    where
        F: Fn(&Self, f64) -> (f64, f64),
    {
        let mut f_lo = f(self, lo).0;
        let mut f_hi = f(self, hi).0;
        if f_lo == 0.0 {
            return Ok(lo);
        }
        if f_hi == 0.0 {
            return Ok(hi);
        }
        if f_lo.signum() == f_hi.signum() {
            debug!("interpolator search: no sign change over [{lo}, {hi}]");
            return Err(MeeusError::NoConvergence { iterations: 0 });
        }

        let mut x = start;
        for iteration in 1..=MAX_ITERATIONS {
            let (fx, dfx) = f(self, x);
            if fx == 0.0 {
                return Ok(x);
            }
            if fx.signum() == f_lo.signum() {
                lo = x;
                f_lo = fx;
            } else {
                hi = x;
                f_hi = fx;
            }

            let inside = |candidate: f64| lo < candidate && candidate < hi;
            let newton = x - fx / dfx;
            let next = if dfx != 0.0 && inside(newton) {
                newton
            } else {
                let secant = (lo * f_hi - hi * f_lo) / (f_hi - f_lo);
                if inside(secant) {
                    secant
                } else {
                    0.5 * (lo + hi)
                }
            };
            debug!("interpolator search step {iteration}: x = {next}, f = {fx}");

            if (next - x).abs() <= TOLERANCE * x.abs().max(1.0) {
                return Ok(next);
            }
            x = next;
        }
        Err(MeeusError::NoConvergence {
            iterations: MAX_ITERATIONS,
        })
    }
}

impl PartialEq for Interpolator {
    /// Two interpolators are equal when they hold the same samples.
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// Pick and fit the model for sorted, validated samples.
fn fit(x: &[f64], y: &[f64]) -> Model {
    match x.len() {
        2 => Model::Linear {
            slope: (y[1] - y[0]) / (x[1] - x[0]),
        },
        3 => {
            let d1 = (y[1] - y[0]) / (x[1] - x[0]);
            let d2 = (y[2] - y[1]) / (x[2] - x[1]);
            let a = (d2 - d1) / (x[2] - x[0]);
            Model::Quadratic {
                a,
                b: d1 + a * (x[1] - x[0]),
                c: y[1],
            }
        }
        _ => {
            let mut table = y.to_vec();
            for order in 1..x.len() {
                for i in (order..x.len()).rev() {
                    table[i] = (table[i] - table[i - 1]) / (x[i] - x[i - order]);
                }
            }
            Model::General { table }
        }
    }
}

/// Curvature lost in the rounding of the other coefficients.
#[inline]
fn is_flat(a: f64, b: f64, c: f64) -> bool {
    a.abs() <= DEGENERATE * (b.abs() + c.abs())
}

/// Real roots of `a·u² + b·u + c`, using the cancellation-free form.
///
/// A negligible `a` degrades to the linear root. Missing roots are `None`.
fn quadratic_roots(a: f64, b: f64, c: f64) -> [Option<f64>; 2] {
    if is_flat(a, b, c) {
        return if b == 0.0 { [None, None] } else { [Some(-c / b), None] };
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return [None, None];
    }
    let q = -0.5 * (b + b.signum() * discriminant.sqrt());
    if q == 0.0 {
        return [Some(0.0), None];
    }
    [Some(q / a), Some(c / q)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    /// Degrees from a sexagesimal triple, negative when any field is.
    fn dms(d: f64, m: f64, s: f64) -> f64 {
        let sign = if d < 0.0 || m < 0.0 || s < 0.0 { -1.0 } else { 1.0 };
        sign * (d.abs() + m.abs() / 60.0 + s.abs() / 3600.0)
    }

    fn parabola() -> Interpolator {
        Interpolator::new([-1.0, 0.0, 1.0], [-2.0, 3.0, 2.0]).unwrap()
    }

    fn sine_table() -> Interpolator {
        Interpolator::new(
            [29.43, 30.97, 27.69, 28.11, 31.58, 33.05],
            [0.491_359_852_8, 0.514_589_192_6, 0.464_687_508_3, 0.471_165_834_2, 0.523_688_565_3, 0.545_370_705_7],
        )
        .unwrap()
    }

    #[test]
    fn construction_sorts_samples() {
        let table = Interpolator::new([3.0, 1.0, 2.0], [30.0, 10.0, 20.0]).unwrap();
        assert_eq!(table.xs(), &[1.0, 2.0, 3.0]);
        assert_eq!(table.ys(), &[10.0, 20.0, 30.0]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[rstest]
    #[case(vec![1.0], vec![1.0])]
    #[case(vec![1.0, 2.0], vec![1.0])]
    #[case(vec![1.0, 1.0, 2.0], vec![1.0, 2.0, 3.0])]
    #[case(vec![1.0, f64::NAN], vec![1.0, 2.0])]
    #[case(vec![1.0, 2.0], vec![1.0, f64::INFINITY])]
    fn rejects_bad_samples(#[case] xs: Vec<f64>, #[case] ys: Vec<f64>) {
        assert!(matches!(
            Interpolator::new(xs, ys),
            Err(MeeusError::InvalidSample(_))
        ));
    }

    #[test]
    fn accepts_ordinates_convertible_to_f64() {
        let table = Interpolator::from_pairs([(0.0, 1_i32), (1.0, 3), (2.0, 5)]).unwrap();
        assert_abs_diff_eq!(table.evaluate(0.5), 2.0, epsilon = 1e-12);
        let table = Interpolator::new([0.0, 1.0], [1.0_f32, 2.0_f32]).unwrap();
        assert_abs_diff_eq!(table.evaluate(0.25), 1.25, epsilon = 1e-12);
    }

    #[rstest]
    #[case(-0.8, -0.52)]
    #[case(0.7, 2.93)]
    #[case(-1.0, -2.0)]
    fn parabola_values(#[case] x: f64, #[case] expected: f64) {
        assert_abs_diff_eq!(parabola().evaluate(x), expected, epsilon = 1e-12);
    }

    #[test]
    fn value_at_a_sample_is_exact() {
        let table = Interpolator::new([0.0, 1.0, 3.0], [-1.0, -2.0, 2.0]).unwrap();
        assert_eq!(table.evaluate(1.0), -2.0);
        assert_eq!(sine_table().evaluate(28.11), 0.471_165_834_2);
    }

    #[test]
    fn meeus_example_3a() {
        let table = Interpolator::new([7.0, 8.0, 9.0], [0.884_226, 0.877_366, 0.870_531]).unwrap();
        assert_abs_diff_eq!(table.evaluate(8.181_25), 0.876_125, epsilon = 1e-6);
    }

    #[test]
    fn extrapolates_the_same_polynomial() {
        let table = Interpolator::new([-3.0, 0.0, 2.5], [12.0, -3.0, -1.75]).unwrap();
        // y = x² − 2x − 3
        assert_abs_diff_eq!(table.evaluate(5.0), 12.0, epsilon = 1e-10);
        assert_abs_diff_eq!(table.evaluate(-2.0), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn general_table_values() {
        assert_abs_diff_eq!(sine_table().evaluate(30.0), 0.5, epsilon = 1e-9);
    }

    #[rstest]
    #[case(-1.0, 8.0)]
    #[case(0.0, 2.0)]
    #[case(0.5, -1.0)]
    fn parabola_derivative(#[case] x: f64, #[case] expected: f64) {
        assert_abs_diff_eq!(parabola().derivative(x).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let h = 1e-5;
        for table in [parabola(), sine_table()] {
            for x in [table.xs()[0], 0.5 * (table.xs()[0] + table.xs()[1]), table.xs()[2]] {
                let numeric = (table.eval(x + h).0 - table.eval(x - h).0) / (2.0 * h);
                assert_abs_diff_eq!(table.derivative(x).unwrap(), numeric, epsilon = 1e-7);
            }
        }
    }

    #[test]
    fn general_table_derivative() {
        // The table samples sin(x°), so d/dx = cos(x°)·π/180.
        let slope = sine_table().derivative(30.0).unwrap().to_degrees();
        assert_abs_diff_eq!(slope, 3.0_f64.sqrt() / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn parabola_root() {
        assert_abs_diff_eq!(parabola().root().unwrap(), -0.720_759_220_056_126_5, epsilon = 1e-12);
    }

    #[test]
    fn root_nearest_the_table_or_the_guess() {
        let table = Interpolator::new([-3.0, 0.0, 2.5], [12.0, -3.0, -1.75]).unwrap();
        assert_abs_diff_eq!(table.root().unwrap(), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(table.root_near(2.9).unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn collinear_samples_give_the_exact_linear_root() {
        let table = Interpolator::new([1.0, 2.0, 3.0], [-1.0, 1.0, 3.0]).unwrap();
        assert_eq!(table.root().unwrap(), 1.5);
    }

    #[test]
    fn parabola_without_real_root() {
        let table = Interpolator::new([-1.0, 0.0, 1.0], [2.0, 1.0, 2.0]).unwrap();
        assert!(matches!(table.root(), Err(MeeusError::NoConvergence { .. })));
    }

    #[test]
    fn meeus_example_3c_root() {
        let table = Interpolator::new(
            [26.0, 27.0, 28.0],
            [dms(0.0, -28.0, 13.4), dms(0.0, 6.0, 46.3), dms(0.0, 38.0, 23.2)],
        )
        .unwrap();
        assert_abs_diff_eq!(table.root().unwrap(), 26.798_732_705, epsilon = 1e-9);
    }

    #[test]
    fn meeus_example_3d_root() {
        let table = Interpolator::new(
            [25.0, 26.0, 27.0, 28.0, 29.0],
            [
                dms(-1.0, 11.0, 21.23),
                dms(0.0, -28.0, 12.31),
                dms(0.0, 16.0, 7.02),
                dms(1.0, 1.0, 0.13),
                dms(1.0, 45.0, 46.33),
            ],
        )
        .unwrap();
        assert_abs_diff_eq!(table.root().unwrap(), 26.638_586_946_9, epsilon = 1e-9);
        assert_abs_diff_eq!(table.root_near(25.2).unwrap(), 26.638_586_946_9, epsilon = 1e-9);
    }

    #[test]
    fn root_within_a_bracket() {
        let table =
            Interpolator::new([-3.0, 0.0, 2.5, 3.5], [12.0, -3.0, -1.75, 2.25]).unwrap();
        assert!(matches!(table.root(), Err(MeeusError::NoConvergence { .. })));
        assert_abs_diff_eq!(table.root_within(0.0, 3.5).unwrap(), 3.0, epsilon = 1e-10);
        assert!(table.root_within(1.0, 1.0).is_err());
    }

    #[test]
    fn parabola_extremum() {
        assert_abs_diff_eq!(parabola().extremum().unwrap(), 1.0 / 3.0, epsilon = 1e-12);
        let table = Interpolator::new([-3.0, 0.0, 2.5], [12.0, -3.0, -1.75]).unwrap();
        assert_abs_diff_eq!(table.extremum().unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn meeus_example_3b_extremum() {
        let table =
            Interpolator::new([12.0, 16.0, 20.0], [1.381_429_4, 1.381_221_3, 1.381_245_3]).unwrap();
        let x = table.extremum().unwrap();
        assert_abs_diff_eq!(x, 17.586_385_178_8, epsilon = 1e-9);
        assert_abs_diff_eq!(table.evaluate(x), 1.381_203_046_66, epsilon = 1e-11);
    }

    #[test]
    fn general_table_extremum() {
        let xs = [80.0, 85.0, 90.0, 95.0, 100.0];
        let ys = xs.map(|x: f64| x.to_radians().sin());
        let table = Interpolator::new(xs, ys).unwrap();
        assert_abs_diff_eq!(table.extremum().unwrap(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn flat_parabola_has_no_extremum() {
        let table = Interpolator::new([1.0, 2.0, 3.0], [1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(table.extremum(), Err(MeeusError::NoConvergence { .. })));
    }

    #[test]
    fn rounding_curvature_has_no_extremum() {
        // 0.1, 0.2, 0.3 leave a curvature of about 1e-17 after rounding.
        let table = Interpolator::new([1.0, 2.0, 3.0], [0.1, 0.2, 0.3]).unwrap();
        assert!(matches!(table.extremum(), Err(MeeusError::NoConvergence { .. })));
        let table = Interpolator::new([1.0, 2.0, 3.0], [0.3, 0.6, 0.9]).unwrap();
        assert!(matches!(table.extremum(), Err(MeeusError::NoConvergence { .. })));
        assert_abs_diff_eq!(table.root().unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn two_samples_support_values_only() {
        let line = Interpolator::new([0.0, 2.0], [1.0, 5.0]).unwrap();
        assert_abs_diff_eq!(line.evaluate(1.0), 3.0, epsilon = 1e-12);
        assert!(matches!(line.derivative(1.0), Err(MeeusError::InvalidSample(_))));
        assert!(matches!(line.root(), Err(MeeusError::InvalidSample(_))));
        assert!(matches!(line.extremum(), Err(MeeusError::InvalidSample(_))));
    }

    #[test]
    fn insert_refits() {
        let mut table = Interpolator::new([0.0, 2.0], [0.0, 4.0]).unwrap();
        table.insert(1.0, 1.0).unwrap();
        assert_eq!(table.xs(), &[0.0, 1.0, 2.0]);
        assert_abs_diff_eq!(table.evaluate(3.0), 9.0, epsilon = 1e-12);

        table.insert(-1.0, 1.0).unwrap();
        assert_eq!(table.len(), 4);
        assert_abs_diff_eq!(table.evaluate(1.5), 2.25, epsilon = 1e-12);

        let before = table.clone();
        assert!(table.insert(1.0, 7.0).is_err());
        assert_eq!(table, before);
    }

    #[test]
    fn equality_compares_samples() {
        let a = Interpolator::new([1.0, 2.0, 3.0], [1.0, 4.0, 9.0]).unwrap();
        let b = Interpolator::from_pairs([(3.0, 9.0), (1.0, 1.0), (2.0, 4.0)]).unwrap();
        let c = Interpolator::new([1.0, 2.0, 3.0], [1.0, 4.0, 9.5]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
