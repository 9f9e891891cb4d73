//! psychstat - descriptive statistics and Rasch-model psychometrics
//!
//! This crate provides closed-form statistics over collections:
//!
//! - **descriptive**: sum, mean, variance, standard deviation, RMS, median,
//!   and z-score standardization
//! - **psychometrics**: measurement reliability, Rasch choice probability,
//!   and Fisher information
//! - **summary**: a serializable aggregate of the descriptive statistics
//!
//! # Design Philosophy
//!
//! Every statistic is a pure function of its inputs. Each one accepts either
//! a plain `&[f64]` or, via its `_by` variant, any slice of records together
//! with an accessor projecting a record to an `f64` — so callers never have
//! to copy their data into a numeric buffer first.
//!
//! Degenerate input is never an error: empty or zero-variance collections
//! produce `NaN`/`±∞` following IEEE-754 arithmetic, and callers that need
//! validation check the result themselves.

pub mod descriptive;
pub mod psychometrics;
pub mod summary;

pub use descriptive::*;
pub use psychometrics::*;
pub use summary::*;
