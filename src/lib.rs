#![warn(missing_docs)]

//!
//! A crate that provides the information gain splitting criterion
//! for decision tree learners.
//!
//! Given the class labels that fall into a node
//! (optionally weighted per example),
//! the criterion returns
//!
//! ```txt
//! gain = Σ_c f_c * log2(f_c),
//! ```
//!
//! where `f_c` is the fraction of class `c` by count or by weight.
//! The gain is `0` for a pure node and `-log2(n_classes)`
//! for the uniform distribution,
//! so [`information_gain::range`] gives `log2(n_classes)`
//! for normalizing gains across different numbers of classes.
//!
//! - [`information_gain`] holds the free functions
//!     `evaluate`, `evaluate_weighted`, `evaluate_with`, and `range`.
//! - [`SplitCriterion`] is the interface a tree learner programs against.
//!     [`InformationGain`] implements it.
//! - [`ClassCounts`] is the per-class accumulator,
//!     reusable across evaluations.
//! - [`GainReport`] prints or serializes a single evaluation.
//!
//! Every label must be less than `n_classes`;
//! a violation panics instead of reading out of bounds.
//! An empty label slice, or weights summing to zero,
//! yield a gain of `0.0`.

pub mod constants;
pub mod checkers;
pub mod class_counts;
pub mod criterion;
pub mod information_gain;
pub mod report;


pub use class_counts::ClassCounts;
pub use criterion::{SplitCriterion, Gain, Partition};
pub use information_gain::InformationGain;
pub use report::GainReport;


/// Convenient re-exports.
pub mod prelude {
    pub use crate::{
        ClassCounts,
        SplitCriterion,
        Gain,
        Partition,
        InformationGain,
        GainReport,
    };
    pub use crate::information_gain::{
        evaluate,
        evaluate_weighted,
        evaluate_with,
        range,
    };
}
