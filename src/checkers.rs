//! This file defines some functions that checks some pre-conditions
//! E.g., label indices and the shape of the weights.
//!
//! Every check panics on violation.
//! Degenerate inputs such as an empty label slice are not violations.

/// Check whether every label lies in `[0, n_classes)`.
#[inline(always)]
pub fn labels(labels: &[usize], n_classes: usize) {
    if let Some((i, y)) = labels.iter()
        .copied()
        .enumerate()
        .find(|&(_, y)| y >= n_classes)
    {
        panic!(
            "label out of range: labels[{i}] = {y}, \
            but the number of classes is {n_classes}"
        );
    }
}

/// Check whether `weights` is aligned with `labels`.
#[inline(always)]
pub fn weights(labels: &[usize], weights: &[f64]) {
    assert_eq!(
        labels.len(), weights.len(),
        "the number of weights must equal the number of labels"
    );

    debug_assert!(
        weights.iter().all(|w| *w >= 0.0),
        "weights must be non-negative. got {weights:?}"
    );
}

/// Check whether the number of classes is positive.
#[inline(always)]
pub fn n_classes(n_classes: usize) {
    assert!(
        n_classes > 0,
        "the number of classes must be positive. got {n_classes}."
    );
}
