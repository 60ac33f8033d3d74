//! The information gain criterion.
//!
//! For a label distribution with class fractions `f_c`,
//! the information gain is
//!
//! ```txt
//! gain = Σ_c f_c * log2(f_c),
//! ```
//!
//! where the sum runs over the classes with `f_c > 0`.
//! This is the negative of the Shannon entropy in bits,
//! so a pure node has gain `0` and the uniform distribution over
//! `n_classes` classes has gain `-log2(n_classes)`.
//! The fractions are taken by count (unweighted)
//! or by weight (weighted).
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::checkers;
use crate::class_counts::ClassCounts;
use crate::criterion::SplitCriterion;


/// Returns the unweighted information gain of `labels`.
///
/// Returns `0.0` for an empty slice.
///
/// # Panics
/// Panics if some label is `>= n_classes`.
///
/// # Example
/// ```
/// use tree_criterion::information_gain;
///
/// let gain = information_gain::evaluate(&[0, 0, 1, 1], 2);
/// assert_eq!(gain, -1.0);
/// ```
pub fn evaluate(labels: &[usize], n_classes: usize) -> f64 {
    if labels.is_empty() { return 0.0; }

    let mut counts = ClassCounts::new(n_classes);
    gain_of(&mut counts, labels, None)
}


/// Returns the weighted information gain of `labels`,
/// where `weights[i]` is the weight of `labels[i]`.
///
/// Returns `0.0` for an empty slice
/// or if the weights sum to exactly `0.0`.
///
/// # Panics
/// Panics if some label is `>= n_classes`
/// or if `weights.len() != labels.len()`.
pub fn evaluate_weighted(
    labels: &[usize],
    n_classes: usize,
    weights: &[f64],
) -> f64
{
    if labels.is_empty() { return 0.0; }

    let mut counts = ClassCounts::new(n_classes);
    gain_of(&mut counts, labels, Some(weights))
}


/// Returns the information gain of `labels`,
/// weighted by `weights` if `use_weights` is `true`.
/// `weights` is ignored otherwise.
pub fn evaluate_with(
    labels: &[usize],
    n_classes: usize,
    weights: &[f64],
    use_weights: bool,
) -> f64
{
    if use_weights {
        evaluate_weighted(labels, n_classes, weights)
    } else {
        evaluate(labels, n_classes)
    }
}


/// Returns the difference between the best and the worst gain
/// for `n_classes` classes, that is, `log2(n_classes)`.
///
/// # Panics
/// Panics if `n_classes == 0`.
#[inline]
pub fn range(n_classes: usize) -> f64 {
    checkers::n_classes(n_classes);
    (n_classes as f64).log2()
}


/// Fills `counts` from scratch and returns the resulting gain.
/// The number of classes is the length of `counts`.
fn gain_of(
    counts: &mut ClassCounts,
    labels: &[usize],
    weights: Option<&[f64]>,
) -> f64
{
    counts.reset();
    if labels.is_empty() { return 0.0; }

    checkers::labels(labels, counts.n_classes());
    match weights {
        Some(weights) => {
            checkers::weights(labels, weights);
            counts.accumulate_weighted(labels, weights);
        },
        None => {
            counts.accumulate(labels);
        },
    }

    counts.gain()
}


/// The information gain split criterion.
///
/// This is a stateless handle that implements [`SplitCriterion`]
/// with the free functions of this module.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InformationGain;


impl InformationGain {
    /// Construct a new instance of [`InformationGain`].
    pub fn new() -> Self {
        Self
    }


    /// Same as [`SplitCriterion::evaluate`],
    /// but accumulates into a caller-owned buffer.
    /// The number of classes is `counts.n_classes()`.
    ///
    /// `counts` is reset first, so on return it holds
    /// the distribution of `labels` (all zeros if `labels` is empty).
    pub fn evaluate_into(
        &self,
        counts: &mut ClassCounts,
        labels: &[usize],
        weights: Option<&[f64]>,
    ) -> f64
    {
        gain_of(counts, labels, weights)
    }
}


impl SplitCriterion for InformationGain {
    fn evaluate(
        &self,
        labels: &[usize],
        n_classes: usize,
        weights: Option<&[f64]>,
    ) -> f64
    {
        match weights {
            Some(weights) => evaluate_weighted(labels, n_classes, weights),
            None => evaluate(labels, n_classes),
        }
    }


    fn range(&self, n_classes: usize) -> f64 {
        range(n_classes)
    }
}


impl fmt::Display for InformationGain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Information gain")
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NUMERIC_TOLERANCE;

    #[test]
    fn empty_labels() {
        assert_eq!(evaluate(&[], 3), 0.0);
        assert_eq!(evaluate_weighted(&[], 3, &[]), 0.0);
        assert_eq!(evaluate_with(&[], 3, &[], true), 0.0);
        assert_eq!(evaluate_with(&[], 3, &[], false), 0.0);
    }

    #[test]
    fn two_even_classes() {
        let gain = evaluate(&[0, 0, 1, 1], 2);
        assert!((gain + 1.0).abs() < NUMERIC_TOLERANCE);
    }

    #[test]
    fn three_to_one() {
        let gain = evaluate(&[0, 0, 0, 1], 2);
        let expected = 0.75 * 0.75_f64.log2() + 0.25 * 0.25_f64.log2();
        assert!((gain - expected).abs() < NUMERIC_TOLERANCE);
        assert!((gain + 0.8113).abs() < 1e-4);
    }

    #[test]
    fn equal_weights_match_unweighted() {
        let weighted = evaluate_weighted(&[0, 1], 2, &[2.0, 2.0]);
        let unweighted = evaluate(&[0, 1], 2);
        assert!((weighted - unweighted).abs() < NUMERIC_TOLERANCE);
        assert!((weighted + 1.0).abs() < NUMERIC_TOLERANCE);
    }

    #[test]
    fn zero_total_weight() {
        assert_eq!(evaluate_weighted(&[0, 1, 2], 3, &[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn weights_shift_the_distribution() {
        // Fractions 0.25 and 0.75.
        let gain = evaluate_weighted(&[0, 1], 2, &[1.0, 3.0]);
        let expected = evaluate(&[0, 1, 1, 1], 2);
        assert!((gain - expected).abs() < NUMERIC_TOLERANCE);
    }

    #[test]
    fn unused_classes_are_skipped() {
        let gain = evaluate(&[3, 3, 7, 7], 10);
        assert!((gain + 1.0).abs() < NUMERIC_TOLERANCE);
    }

    #[test]
    fn flag_selects_mode() {
        let labels = [0, 1, 1];
        let weights = [1.0, 0.5, 0.5];
        let on = evaluate_with(&labels, 2, &weights, true);
        let off = evaluate_with(&labels, 2, &weights, false);
        assert!((on + 1.0).abs() < NUMERIC_TOLERANCE);
        assert!((off - evaluate(&labels, 2)).abs() < NUMERIC_TOLERANCE);
    }

    #[test]
    fn unweighted_ignores_mismatched_weights() {
        let gain = evaluate_with(&[0, 1], 2, &[], false);
        assert!((gain + 1.0).abs() < NUMERIC_TOLERANCE);
    }

    #[test]
    fn range_of_powers_of_two() {
        assert_eq!(range(1), 0.0);
        assert_eq!(range(2), 1.0);
        assert_eq!(range(4), 2.0);
        assert_eq!(range(8), 3.0);
    }

    #[test]
    #[should_panic]
    fn range_of_no_class() {
        range(0);
    }

    #[test]
    #[should_panic(expected = "label out of range")]
    fn label_out_of_range() {
        evaluate(&[0, 1, 2], 2);
    }

    #[test]
    #[should_panic]
    fn weights_too_short() {
        evaluate_weighted(&[0, 1, 1], 2, &[1.0, 1.0]);
    }

    #[test]
    fn evaluate_into_reuses_buffer() {
        let criterion = InformationGain::new();
        let mut counts = ClassCounts::new(3);

        let first = criterion.evaluate_into(&mut counts, &[0, 1, 2], None);
        assert!((first + 3_f64.log2()).abs() < NUMERIC_TOLERANCE);

        let second = criterion.evaluate_into(&mut counts, &[2, 2], None);
        assert_eq!(second, 0.0);
        assert_eq!(counts.counts(), &[0.0, 0.0, 2.0]);

        let weights = [1.0, 3.0];
        let third = criterion.evaluate_into(
            &mut counts, &[0, 1], Some(&weights[..])
        );
        assert_eq!(third, evaluate_weighted(&[0, 1], 3, &weights));

        let fourth = criterion.evaluate_into(&mut counts, &[], None);
        assert_eq!(fourth, 0.0);
        assert_eq!(counts.total(), 0.0);
        assert_eq!(counts.counts(), &[0.0; 3]);
        assert_eq!(counts.fractions(), vec![0.0; 3]);
    }

    #[test]
    fn trait_delegates() {
        let criterion = InformationGain;
        let labels = [0, 2, 2, 1, 0];
        let weights = [0.1, 0.2, 0.3, 0.4, 0.5];
        assert_eq!(
            SplitCriterion::evaluate(&criterion, &labels, 3, None),
            evaluate(&labels, 3),
        );
        assert_eq!(
            SplitCriterion::evaluate(&criterion, &labels, 3, Some(&weights[..])),
            evaluate_weighted(&labels, 3, &weights),
        );
        assert_eq!(SplitCriterion::range(&criterion, 8), 3.0);
    }
}
