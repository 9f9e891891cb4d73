//! Descriptive statistics over collections
//!
//! Leaf-level pure functions:
//! - Sum, arithmetic mean
//! - Variance, standard deviation, root mean square
//! - Median
//! - Z-score standardization
//!
//! # Accessor Variants
//!
//! Each statistic comes in two forms: `f(values)` over a plain `&[f64]`, and
//! `f_by(items, accessor)` over any record slice with an accessor projecting
//! a record to an `f64`. `f(xs)` is always equivalent to `f_by(xs, |x| *x)`,
//! and `f_by(items, acc)` is equivalent to first mapping `acc` over the
//! collection and then calling `f`.
//!
//! # Edge Cases
//!
//! No function here returns an error. An empty collection sums to 0 and
//! yields `NaN` for every other statistic; a zero-variance collection yields
//! `NaN` z-scores. Non-finite intermediates propagate per IEEE-754.

/// Squares a number.
pub fn square(value: f64) -> f64 {
    value * value
}

/// Sum of a sequence of numbers. An empty slice sums to 0.
pub fn sum(values: &[f64]) -> f64 {
    sum_by(values, |v| *v)
}

/// Sum of `accessor(item)` over all elements, accumulated in collection order.
pub fn sum_by<T>(items: &[T], accessor: impl Fn(&T) -> f64) -> f64 {
    items.iter().fold(0.0, |acc, item| acc + accessor(item))
}

/// Arithmetic mean. An empty slice yields `NaN`.
pub fn mean(values: &[f64]) -> f64 {
    mean_by(values, |v| *v)
}

/// Arithmetic mean of the accessor values.
pub fn mean_by<T>(items: &[T], accessor: impl Fn(&T) -> f64) -> f64 {
    sum_by(items, accessor) / items.len() as f64
}

/// Population variance: the mean of squared deviations from the mean.
pub fn variance(values: &[f64]) -> f64 {
    variance_by(values, |v| *v)
}

/// Population variance of the accessor values.
pub fn variance_by<T>(items: &[T], accessor: impl Fn(&T) -> f64) -> f64 {
    let m = mean_by(items, &accessor);
    mean_by(items, |item| square(accessor(item) - m))
}

/// Standard deviation, the square root of the variance.
///
/// The variance is a mean of squares, so the radicand is never negative for
/// finite input; an empty slice yields `NaN`.
pub fn standard_deviation(values: &[f64]) -> f64 {
    standard_deviation_by(values, |v| *v)
}

/// Standard deviation of the accessor values.
pub fn standard_deviation_by<T>(items: &[T], accessor: impl Fn(&T) -> f64) -> f64 {
    variance_by(items, accessor).sqrt()
}

pub use self::standard_deviation as sd;
pub use self::standard_deviation_by as sd_by;

/// Root mean square (quadratic mean).
pub fn rms(values: &[f64]) -> f64 {
    rms_by(values, |v| *v)
}

/// Root mean square of the accessor values.
pub fn rms_by<T>(items: &[T], accessor: impl Fn(&T) -> f64) -> f64 {
    mean_by(items, |item| square(accessor(item))).sqrt()
}

/// Median of a sequence of numbers. An empty slice yields `NaN`.
pub fn median(values: &[f64]) -> f64 {
    median_by(values, |v| *v)
}

/// Median of the accessor values.
///
/// Sorts a copy of the projected values; the caller's collection is never
/// reordered. For an even count the result is the average of the two middle
/// values.
pub fn median_by<T>(items: &[T], accessor: impl Fn(&T) -> f64) -> f64 {
    if items.is_empty() {
        return f64::NAN;
    }

    let mut keys: Vec<f64> = items.iter().map(|item| accessor(item)).collect();
    keys.sort_by(f64::total_cmp);

    let mid = keys.len() / 2;
    if keys.len() % 2 == 1 {
        keys[mid]
    } else {
        (keys[mid - 1] + keys[mid]) / 2.0
    }
}

/// Standard (z) scores: `(x - mean) / sd` for each value, in input order.
///
/// A constant or too-short slice has zero or undefined standard deviation,
/// so every entry of the result is `NaN`.
pub fn standardize(values: &[f64]) -> Vec<f64> {
    standardize_by(values, |v| *v)
}

/// Standard scores of the accessor values, in input order.
pub fn standardize_by<T>(items: &[T], getter: impl Fn(&T) -> f64) -> Vec<f64> {
    let m = mean_by(items, &getter);
    let s = standard_deviation_by(items, &getter);
    items.iter().map(|item| (getter(item) - m) / s).collect()
}

/// Standard scores with a write-back hook.
///
/// Identical to [`standardize_by`], but additionally invokes `setter` exactly
/// once per element, in input order, with the element and its z-score. This
/// is a caller-visible mutation hook for annotating records in place; it is
/// not required for the computation itself.
pub fn standardize_with<T>(
    items: &mut [T],
    getter: impl Fn(&T) -> f64,
    mut setter: impl FnMut(&mut T, f64),
) -> Vec<f64> {
    let m = mean_by(items, &getter);
    let s = standard_deviation_by(items, &getter);
    items
        .iter_mut()
        .map(|item| {
            let z = (getter(item) - m) / s;
            setter(item, z);
            z
        })
        .collect()
}
