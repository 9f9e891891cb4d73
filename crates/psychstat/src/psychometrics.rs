//! Psychometric measures built on the descriptive statistics
//!
//! - **Reliability**: how much of the observed score spread reflects true
//!   spread rather than measurement error
//! - **Rasch probability**: logistic (Bradley-Terry-Luce) choice probability
//!   from a difference of latent parameters
//! - **Fisher information**: the Bernoulli variance `p(1 - p)` of the Rasch
//!   probability, a per-item information measure

use crate::descriptive::{rms_by, square, standard_deviation_by};

/// Overall consistency of a measure.
///
/// With `g = (sd / rmse)²`, the reliability is `(g - 1) / g`, where `sd` is
/// the standard deviation of the scores and `rmse` the root mean square of
/// their standard errors.
///
/// Boundary values follow float arithmetic: `sd = 0` yields `-∞`, and
/// `rmse = 0` yields `NaN` (the `∞/∞` case).
pub fn reliability(sd: f64, rmse: f64) -> f64 {
    let g = square(sd / rmse);
    (g - 1.0) / g
}

/// Builds a reliability statistic bound to a pair of accessors.
///
/// Captures a projection to the ability value and one to its standard error,
/// and returns a function computing the reliability of any record slice from
/// the standard deviation of the abilities and the RMS of the errors. Call
/// sites that evaluate many lists against the same projections avoid
/// restating both accessors each time.
pub fn reliability_functor<T, A, S>(get_ability: A, get_se: S) -> impl Fn(&[T]) -> f64
where
    A: Fn(&T) -> f64,
    S: Fn(&T) -> f64,
{
    move |items| {
        reliability(
            standard_deviation_by(items, &get_ability),
            rms_by(items, &get_se),
        )
    }
}

/// Rasch (Bradley-Terry-Luce) probability `e^(a-b) / (1 + e^(a-b))`.
///
/// Lies in `(0, 1)` for finite inputs, approaching 0 as `a - b → -∞` and 1
/// as `a - b → +∞`.
pub fn rasch(a: f64, b: f64) -> f64 {
    let odds = (a - b).exp();
    odds / (1.0 + odds)
}

/// Fisher information of a Rasch item: `p(1 - p)` with `p = rasch(a, b)`.
pub fn fisher(a: f64, b: f64) -> f64 {
    let p = rasch(a, b);
    p * (1.0 - p)
}

/// [`fisher`], rounded to `digits` decimal places.
pub fn fisher_rounded(a: f64, b: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (fisher(a, b) * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reliability_basic() {
        assert_eq!(reliability(4.0, 2.0), 0.75);
    }

    #[test]
    fn reliability_zero_sd_is_negative_infinity() {
        assert_eq!(reliability(0.0, 1.0), f64::NEG_INFINITY);
    }

    #[test]
    fn reliability_zero_rmse_is_nan() {
        assert!(reliability(1.0, 0.0).is_nan());
    }

    #[test]
    fn rasch_basic() {
        assert!((rasch(0.3, 0.7) - 0.401312339887548).abs() < 1e-12);
    }

    #[test]
    fn rasch_is_within_unit_interval() {
        for (a, b) in [(0.0, 0.0), (2.0, -1.0), (-5.0, 5.0), (10.0, 0.0)] {
            let p = rasch(a, b);
            assert!(p > 0.0 && p < 1.0, "rasch({a}, {b}) = {p}");
        }
    }

    #[test]
    fn rasch_tends_to_bounds() {
        assert!(rasch(-30.0, 30.0) < 1e-20);
        assert!(rasch(30.0, -30.0) > 1.0 - 1e-20);
    }

    #[test]
    fn fisher_basic() {
        assert!((fisher(0.3, 0.7) - 0.24026074574152914).abs() < 1e-12);
    }

    #[test]
    fn fisher_rounded_basic() {
        assert_eq!(fisher_rounded(0.3, 0.7, 4), 0.2403);
    }

    #[test]
    fn reliability_functor_binds_accessors() {
        struct Measure {
            v: f64,
            se: f64,
        }

        let list = vec![
            Measure { v: 1.0, se: 4.0 },
            Measure { v: 2.0, se: 2.0 },
            Measure { v: 3.0, se: 0.0 },
            Measure { v: 5.0, se: 0.45 },
            Measure { v: 8.0, se: 3.0 },
        ];

        let f = reliability_functor(|m: &Measure| m.v, |m: &Measure| m.se);
        assert!((f(&list) - 0.05186688311688284).abs() < 1e-12);
    }
}
