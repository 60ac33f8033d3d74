//! A human-readable summary of a single evaluation.
use colored::Colorize;

use serde::{Serialize, Deserialize};

use std::fmt;

use crate::checkers;
use crate::class_counts::ClassCounts;
use crate::criterion::SplitCriterion;
use crate::constants::{
    WIDTH,
    PREC_WIDTH,
    FULL_WIDTH,
};


/// Struct `GainReport` records the class distribution of a node
/// together with its gain, the range for the number of classes,
/// and the normalized gain.
///
/// `Display` prints a colored table;
/// [`GainReport::to_json`] gives the same content as JSON.
///
/// # Example
/// ```
/// use tree_criterion::{GainReport, InformationGain};
///
/// let report = GainReport::new(&InformationGain, &[0, 0, 1, 1], 2, None);
/// assert_eq!(report.gain, -1.0);
/// println!("{report}");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainReport {
    /// Number of classes.
    pub n_classes: usize,
    /// Number of examples, or the sum of their weights.
    pub total: f64,
    /// Fraction of each class.
    pub fractions: Vec<f64>,
    /// Gain of the distribution.
    pub gain: f64,
    /// Range of the gain for `n_classes` classes.
    pub range: f64,
    /// `gain / range`, or `0.0` if the range is zero.
    pub normalized: f64,
    /// `true` if the fractions are taken by weight.
    pub weighted: bool,
}


impl GainReport {
    /// Evaluate `labels` with `criterion` and record the result.
    ///
    /// The criterion validates the input, then one more pass over
    /// `labels` collects the class fractions.
    /// If the distribution is already in a [`ClassCounts`]
    /// (e.g., filled by [`InformationGain::evaluate_into`]),
    /// use [`GainReport::from_counts`] instead.
    ///
    /// # Panics
    /// Panics under the same conditions as the criterion itself,
    /// and if `n_classes == 0`.
    ///
    /// [`InformationGain::evaluate_into`]: crate::InformationGain::evaluate_into
    pub fn new<C>(
        criterion: &C,
        labels: &[usize],
        n_classes: usize,
        weights: Option<&[f64]>,
    ) -> Self
        where C: SplitCriterion + ?Sized,
    {
        let gain = criterion.evaluate(labels, n_classes, weights);

        let mut counts = ClassCounts::new(n_classes);
        match weights {
            Some(weights) => counts.accumulate_weighted(labels, weights),
            None => counts.accumulate(labels),
        }

        Self::from_counts(criterion, &counts, gain, weights.is_some())
    }


    /// Record a distribution that has already been accumulated
    /// together with its `gain`.
    /// The number of classes is `counts.n_classes()`.
    ///
    /// # Panics
    /// Panics if `counts.n_classes() == 0`.
    pub fn from_counts<C>(
        criterion: &C,
        counts: &ClassCounts,
        gain: f64,
        weighted: bool,
    ) -> Self
        where C: SplitCriterion + ?Sized,
    {
        let n_classes = counts.n_classes();
        checkers::n_classes(n_classes);

        let range = criterion.range(n_classes);
        let normalized = criterion.normalized(gain, n_classes);

        Self {
            n_classes,
            total: counts.total(),
            fractions: counts.fractions(),
            gain,
            range,
            normalized,
            weighted,
        }
    }


    /// Serialize this report as a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}


impl fmt::Display for GainReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.weighted { "weighted" } else { "unweighted" };
        writeln!(
            f,
            "{:>WIDTH$}\t{:>WIDTH$}\t({mode}, total = {:.PREC_WIDTH$})",
            "CLASS".bold().red(),
            "FRACTION".bold().blue(),
            self.total,
        )?;

        for (k, p) in self.fractions.iter().enumerate() {
            writeln!(f, "{k:>WIDTH$}\t{p:>WIDTH$.PREC_WIDTH$}")?;
        }

        writeln!(f, "{:-<FULL_WIDTH$}", "")?;
        writeln!(
            f,
            "{:>WIDTH$}\t{:>WIDTH$.PREC_WIDTH$}",
            "GAIN".bold().green(),
            self.gain,
        )?;
        writeln!(
            f,
            "{:>WIDTH$}\t{:>WIDTH$.PREC_WIDTH$}",
            "RANGE".bold().yellow(),
            self.range,
        )?;
        write!(
            f,
            "{:>WIDTH$}\t{:>WIDTH$.PREC_WIDTH$}",
            "NORM.".bold().cyan(),
            self.normalized,
        )
    }
}
