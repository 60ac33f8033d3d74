//! Defines the interface of a splitting criterion
//! and the score it produces.
use rayon::prelude::*;

use serde::{Serialize, Deserialize};

use std::fmt;
use std::cmp::Ordering;
use std::ops::{Mul, Add};


/// Gain of a label distribution.
/// This is just a wrapper for `f64`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Gain(f64);


impl Gain {
    /// Returns the inner value.
    #[inline(always)]
    pub fn value(&self) -> f64 {
        self.0
    }
}


impl From<f64> for Gain {
    #[inline(always)]
    fn from(gain: f64) -> Self {
        Self(gain)
    }
}


impl From<Gain> for f64 {
    #[inline(always)]
    fn from(gain: Gain) -> Self {
        gain.0
    }
}


impl PartialEq for Gain {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}


impl PartialOrd for Gain {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}


impl Mul for Gain {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self::Output {
        Self(self.0 * other.0)
    }
}


impl Add for Gain {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self::Output {
        Self(self.0 + other.0)
    }
}


impl fmt::Display for Gain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


/// A borrowed view of the labels (and optionally weights)
/// that fall into one node.
#[derive(Debug, Clone, Copy)]
pub struct Partition<'a> {
    /// Class index of each example.
    pub labels: &'a [usize],
    /// Weight of each example.
    /// `None` means every example counts once.
    pub weights: Option<&'a [f64]>,
}


impl<'a> Partition<'a> {
    /// Construct an unweighted partition.
    pub fn new(labels: &'a [usize]) -> Self {
        Self { labels, weights: None, }
    }


    /// Construct a weighted partition.
    pub fn weighted(labels: &'a [usize], weights: &'a [f64]) -> Self {
        Self { labels, weights: Some(weights), }
    }


    /// Returns the number of examples,
    /// or the sum of their weights for a weighted partition.
    pub fn mass(&self) -> f64 {
        match self.weights {
            Some(weights) => weights.iter().sum::<f64>(),
            None => self.labels.len() as f64,
        }
    }
}


/// The contract of a splitting criterion.
///
/// A decision tree learner scores the class distribution of each
/// candidate node with [`SplitCriterion::evaluate`] and
/// rescales scores for different numbers of classes
/// with [`SplitCriterion::range`].
/// Implementors hold no mutable state,
/// so one instance can be shared across threads.
pub trait SplitCriterion: Send + Sync {
    /// Returns the score of `labels`.
    /// `weights`, if given, must be aligned with `labels`.
    fn evaluate(
        &self,
        labels: &[usize],
        n_classes: usize,
        weights: Option<&[f64]>,
    ) -> f64;


    /// Returns the difference between the maximum and the minimum score
    /// attainable with `n_classes` classes.
    fn range(&self, n_classes: usize) -> f64;


    /// Divides `gain` by the range for `n_classes`.
    /// Returns `0.0` if the range is zero.
    fn normalized(&self, gain: f64, n_classes: usize) -> f64 {
        let range = self.range(n_classes);
        if range == 0.0 { 0.0 } else { gain / range }
    }


    /// Returns the score of a split into `children`:
    /// the mean of the children's scores, each weighted by its mass.
    /// Returns `0.0` if all children are empty.
    fn split_gain(&self, children: &[Partition<'_>], n_classes: usize)
        -> f64
    {
        let total = children.iter()
            .map(|child| child.mass())
            .sum::<f64>();

        if total == 0.0 { return 0.0; }

        children.iter()
            .map(|child| {
                let gain = self.evaluate(
                    child.labels, n_classes, child.weights
                );
                child.mass() / total * gain
            })
            .sum::<f64>()
    }


    /// Evaluates every partition in parallel.
    /// The `i`-th output corresponds to `partitions[i]`.
    fn par_evaluate(&self, partitions: &[Partition<'_>], n_classes: usize)
        -> Vec<Gain>
    {
        partitions.par_iter()
            .map(|p| Gain::from(self.evaluate(p.labels, n_classes, p.weights)))
            .collect()
    }
}
