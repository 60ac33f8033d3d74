//! Defines the per-class accumulator used to evaluate a label distribution.
use serde::{Serialize, Deserialize};


/// Accumulated count (or weight) of each class.
///
/// `ClassCounts` is what a single gain evaluation builds internally.
/// A caller that scores many candidate partitions with the same number of
/// classes can keep one instance around and [`reset`](ClassCounts::reset)
/// it between evaluations instead of allocating a fresh buffer each time.
///
/// Indexing is not checked beyond the usual slice bounds check,
/// so accumulating a label `>= n_classes` panics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassCounts {
    counts: Vec<f64>,
    total: f64,
}


impl ClassCounts {
    /// Construct a zero-initialised accumulator with `n_classes` slots.
    pub fn new(n_classes: usize) -> Self {
        Self { counts: vec![0.0; n_classes], total: 0.0, }
    }


    /// Set every slot and the total back to zero.
    #[inline]
    pub fn reset(&mut self) {
        self.counts.iter_mut()
            .for_each(|c| { *c = 0.0; });
        self.total = 0.0;
    }


    /// Count each label once.
    /// The total grows by `labels.len()`.
    #[inline]
    pub fn accumulate(&mut self, labels: &[usize]) {
        for &y in labels {
            self.counts[y] += 1.0;
        }
        self.total += labels.len() as f64;
    }


    /// Add `weights[i]` to the slot of `labels[i]`.
    /// The total grows by the sum of the weights,
    /// accumulated in label order.
    #[inline]
    pub fn accumulate_weighted(&mut self, labels: &[usize], weights: &[f64]) {
        for (&y, &w) in labels.iter().zip(weights) {
            self.counts[y] += w;
            self.total += w;
        }
    }


    /// Returns the number of slots.
    #[inline]
    pub fn n_classes(&self) -> usize {
        self.counts.len()
    }


    /// Returns the normalizing denominator:
    /// the number of labels or the sum of their weights.
    #[inline]
    pub fn total(&self) -> f64 {
        self.total
    }


    /// Returns the accumulated value of each class.
    #[inline]
    pub fn counts(&self) -> &[f64] {
        &self.counts[..]
    }


    /// Returns the fraction of each class.
    /// All fractions are `0.0` if nothing has been accumulated.
    pub fn fractions(&self) -> Vec<f64> {
        if self.total == 0.0 {
            return vec![0.0; self.counts.len()];
        }
        self.counts.iter()
            .map(|c| c / self.total)
            .collect()
    }


    /// Returns `Σ f log2(f)` over the classes with a positive fraction `f`.
    /// Returns `0.0` if the total is zero.
    pub fn gain(&self) -> f64 {
        if self.total == 0.0 { return 0.0; }

        let mut gain = 0.0;
        for &c in self.counts.iter() {
            let f = c / self.total;
            if f > 0.0 {
                gain += f * f.log2();
            }
        }
        gain
    }
}
