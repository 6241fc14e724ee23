// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Template Match Depths
//!
//! The matcher records, for every pair of window start positions, how many
//! samples the two windows agree on before first diverging. All estimators
//! in this family reduce to queries on that one structure.
//!
//! ## Construction
//!
//! The depth matrix is built dimension by dimension:
//!
//! 1. **Seed:** every pair within the threshold at a single sample gets
//!    depth 1.
//! 2. **Extend and filter:** for each additional sample at offset k·tau,
//!    only the pairs that survived all previous offsets are rechecked; the
//!    survivors' depths increment, the rest drop out of the working set for
//!    good.
//!
//! Because a window matches at dimension k+1 only if it matched at
//! dimension k, checking just the newly added sample is equivalent to the
//! full Chebyshev comparison of the windows. Each row keeps an explicit
//! `Vec<usize>` working set of surviving column candidates and stops as soon
//! as the set empties or the series ends.
//!
//! ## Pair Modes
//!
//! - [`PairMode::SelfPairs`]: one series against itself; only i < j is
//!   populated, the diagonal self-match is excluded.
//! - [`PairMode::CrossPairs`]: template series against a target series; the
//!   full rectangle is populated, including equal indices.

use ndarray::{Array1, Array2, ArrayView1};

/// Which pairs of start positions a depth matrix covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairMode {
    /// Distinct pairs of one series, i < j.
    SelfPairs,
    /// All pairs between a template series and a target series.
    CrossPairs,
}

/// Per-pair consecutive match depths for delay-embedded windows.
///
/// Entry (i, j) is the number of samples, spaced `delay` apart, over which
/// the windows starting at i (template side) and j (target side) stay within
/// the match threshold: 0 if the very first samples already differ by more
/// than the threshold, and at most `dim + 1`.
pub struct MatchDepthMatrix {
    /// Consecutive match depth per pair of start positions.
    pub depths: Array2<u32>,
    /// Largest embedding dimension the construction extended to (m).
    pub dim: usize,
    /// Spacing between samples within a window (tau).
    pub delay: usize,
    /// Pair coverage of this matrix.
    pub mode: PairMode,
}

impl MatchDepthMatrix {
    /// Build the self-pair depth matrix of a single series.
    ///
    /// Only the upper triangle i < j is populated; each unordered pair of
    /// start positions is counted once.
    pub fn from_series(data: ArrayView1<f64>, dim: usize, delay: usize, radius: f64) -> Self {
        assert!(dim > 0, "embedding dimension must be at least 1");
        assert!(delay > 0, "time delay must be at least 1");
        let n = data.len();
        let mut depths = Array2::<u32>::zeros((n, n));

        for i in 0..n {
            // Seed: single-sample matches against the later start positions.
            let mut candidates: Vec<usize> = (i + 1..n)
                .filter(|&j| (data[i] - data[j]).abs() <= radius)
                .collect();
            for &j in &candidates {
                depths[[i, j]] = 1;
            }

            // Row i can extend at most until its own window runs off the end.
            let row_cap = dim.min((n - 1 - i) / delay);
            for k in 1..=row_cap {
                let offset = k * delay;
                candidates.retain(|&j| {
                    j + offset < n && (data[i + offset] - data[j + offset]).abs() <= radius
                });
                if candidates.is_empty() {
                    break;
                }
                for &j in &candidates {
                    depths[[i, j]] += 1;
                }
            }
        }

        Self {
            depths,
            dim,
            delay,
            mode: PairMode::SelfPairs,
        }
    }

    /// Build the cross-pair depth matrix of a template series against a
    /// target series. Rows index template start positions, columns target
    /// start positions; the full rectangle is populated.
    pub fn from_series_pair(
        template: ArrayView1<f64>,
        target: ArrayView1<f64>,
        dim: usize,
        delay: usize,
        radius: f64,
    ) -> Self {
        assert!(dim > 0, "embedding dimension must be at least 1");
        assert!(delay > 0, "time delay must be at least 1");
        let n_template = template.len();
        let n_target = target.len();
        let mut depths = Array2::<u32>::zeros((n_template, n_target));

        for i in 0..n_template {
            let mut candidates: Vec<usize> = (0..n_target)
                .filter(|&j| (template[i] - target[j]).abs() <= radius)
                .collect();
            for &j in &candidates {
                depths[[i, j]] = 1;
            }

            let row_cap = dim.min((n_template - 1 - i) / delay);
            for k in 1..=row_cap {
                let offset = k * delay;
                candidates.retain(|&j| {
                    j + offset < n_target
                        && (template[i + offset] - target[j + offset]).abs() <= radius
                });
                if candidates.is_empty() {
                    break;
                }
                for &j in &candidates {
                    depths[[i, j]] += 1;
                }
            }
        }

        Self {
            depths,
            dim,
            delay,
            mode: PairMode::CrossPairs,
        }
    }

    /// Number of pairs matched over more than `k` samples.
    ///
    /// This is the numerator family of the sample-style scorers: the pairs
    /// whose dimension-(k+1) windows lie within the threshold.
    pub fn pairs_deeper_than(&self, k: usize) -> u64 {
        let threshold = k as u32;
        // Unpopulated self-mode entries hold 0 and can never exceed k >= 0.
        self.depths.iter().filter(|&&d| d > threshold).count() as u64
    }

    /// Number of pairs matched over at least `k` samples whose windows both
    /// still have a sample at offset k·tau to extend into.
    ///
    /// The extendability restriction keeps the denominator of a count ratio
    /// drawn from the same pair population as its numerator. At k = 0 the
    /// restriction is vacuous and this is the total pair count: N(N-1)/2 in
    /// self mode, N_template · N_target in cross mode.
    pub fn extendable_pairs_at_least(&self, k: usize) -> u64 {
        let offset = k * self.delay;
        let (nrows, ncols) = self.depths.dim();
        let threshold = k as u32;
        let mut count = 0u64;
        for ((i, j), &depth) in self.depths.indexed_iter() {
            if self.mode == PairMode::SelfPairs && j <= i {
                continue;
            }
            if depth >= threshold && i + offset < nrows && j + offset < ncols {
                count += 1;
            }
        }
        count
    }

    /// The full count families for k = 0..=dim, as consumed by the
    /// sample-style scorers: ([`Self::pairs_deeper_than`],
    /// [`Self::extendable_pairs_at_least`]).
    pub fn count_profiles(&self) -> (Array1<u64>, Array1<u64>) {
        let mut above = Array1::<u64>::zeros(self.dim + 1);
        let mut at_least = Array1::<u64>::zeros(self.dim + 1);
        for k in 0..=self.dim {
            above[k] = self.pairs_deeper_than(k);
            at_least[k] = self.extendable_pairs_at_least(k);
        }
        (above, at_least)
    }

    /// Per-row fractions of target windows matched over at least `window`
    /// samples, for the rows whose own window fits in the template series.
    ///
    /// Feeds the Phi statistic of the approximate-style scorers. Each
    /// fraction divides by the number of target windows of that length; a
    /// window length the target cannot hold makes the division degenerate
    /// and the NaN/infinity flows through to the caller.
    pub fn row_match_fractions(&self, window: usize) -> Array1<f64> {
        assert!(
            self.mode == PairMode::CrossPairs,
            "row match fractions are defined on cross-pair matrices"
        );
        assert!(window > 0, "window must span at least one sample");
        assert!(
            window <= self.dim + 1,
            "window exceeds the constructed depth range"
        );
        let (nrows, ncols) = self.depths.dim();
        let span = (window - 1) * self.delay;
        let threshold = window as u32;
        let n_valid = (nrows as i64 - span as i64).max(0) as usize;
        let denom = (ncols as i64 - span as i64) as f64;

        let mut fractions = Array1::<f64>::zeros(n_valid);
        for i in 0..n_valid {
            let matched = self
                .depths
                .row(i)
                .iter()
                .filter(|&&d| d >= threshold)
                .count();
            fractions[i] = matched as f64 / denom;
        }
        fractions
    }
}
