// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Embedding Configuration for Template Matching
//!
//! Template-matching estimators compare delay-embedded windows of a series:
//! the window starting at index i with dimension m and delay tau is
//!
//! x_i = (x[i], x[i + tau], ..., x[i + (m-1) tau])
//!
//! Two windows match when their Chebyshev (L-infinity) distance stays within
//! the threshold r. This module holds the shared configuration for that
//! comparison:
//!
//! - `dim` (m): the largest window length, in samples, that gets scored
//! - `delay` (tau): the spacing between samples inside a window
//! - `radius` (r): the per-sample tolerance; when unset it is derived from
//!   the data as 0.2 times the population standard deviation, the
//!   conventional choice in the regularity literature
//! - `log_base`: the base the resulting entropies are reported in (default e)
//!
//! ## Threshold Derivation
//!
//! The default radius scales with the data so that series differing only in
//! amplitude produce comparable counts. For a single series the scale is its
//! own population standard deviation; for a pair of series the variances are
//! pooled, `sqrt((var_a + var_b) / 2)`, which is symmetric in the two inputs
//! and reduces to the single-series rule when they coincide.
//!
//! Parameter validation happens here, up front, so the matcher and scorers
//! can assume well-formed inputs throughout.

use ndarray::ArrayView1;

use crate::estimators::errors::{ParamResult, ParameterError};

/// Smallest accepted series length. Shorter series leave too few window
/// pairs for the count ratios to carry meaning.
pub const MIN_SERIES_LEN: usize = 11;

/// Scale applied to the (pooled) standard deviation when no explicit
/// radius is given.
pub const DEFAULT_RADIUS_SCALE: f64 = 0.2;

/// Shared configuration for the template-matching estimators.
///
/// # Examples
///
/// ```
/// use regumeasure::estimators::approaches::template::embedding::EmbeddingParams;
///
/// // Defaults: m = 2, tau = 1, derived radius, natural log
/// let params = EmbeddingParams::default();
/// assert_eq!(params.dim, 2);
///
/// // Explicit configuration via the builder methods
/// let params = EmbeddingParams::new(3).with_delay(2).with_radius(0.15);
/// assert_eq!(params.delay, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingParams {
    /// Largest embedding dimension to score (m).
    pub dim: usize,
    /// Spacing between samples within a window (tau).
    pub delay: usize,
    /// Chebyshev match threshold (r); `None` derives it from the data.
    pub radius: Option<f64>,
    /// Base of the reported logarithms.
    pub log_base: f64,
}

impl Default for EmbeddingParams {
    fn default() -> Self {
        Self {
            dim: 2,
            delay: 1,
            radius: None,
            log_base: std::f64::consts::E,
        }
    }
}

impl EmbeddingParams {
    /// Parameters with the given embedding dimension and defaults elsewhere.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            ..Self::default()
        }
    }

    /// Set the delay between samples within a window.
    pub fn with_delay(mut self, delay: usize) -> Self {
        self.delay = delay;
        self
    }

    /// Set an explicit match threshold instead of deriving one.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Set logarithm base (default e).
    pub fn with_log_base(mut self, log_base: f64) -> Self {
        self.log_base = log_base;
        self
    }

    /// Check the parameter ranges, before any data is touched.
    ///
    /// The comparisons are written in the accepting direction so that a NaN
    /// radius or log base fails them as well.
    pub fn validate(&self) -> ParamResult<()> {
        if self.dim == 0 {
            return Err(ParameterError::EmbeddingDimension(self.dim));
        }
        if self.delay == 0 {
            return Err(ParameterError::TimeDelay(self.delay));
        }
        if let Some(r) = self.radius {
            if !(r >= 0.0) {
                return Err(ParameterError::Radius(r));
            }
        }
        if !(self.log_base > 0.0) {
            return Err(ParameterError::LogBase(self.log_base));
        }
        Ok(())
    }

    /// The threshold to use for a single series: the explicit radius if set,
    /// otherwise scaled population standard deviation.
    pub fn resolve_radius(&self, data: ArrayView1<f64>) -> f64 {
        match self.radius {
            Some(r) => r,
            None => DEFAULT_RADIUS_SCALE * population_variance(data).sqrt(),
        }
    }

    /// The threshold to use for a pair of series: the explicit radius if set,
    /// otherwise scaled pooled standard deviation of the two.
    pub fn resolve_radius_pair(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
        match self.radius {
            Some(r) => r,
            None => {
                let pooled = 0.5 * (population_variance(a) + population_variance(b));
                DEFAULT_RADIUS_SCALE * pooled.sqrt()
            }
        }
    }
}

/// Reject series with fewer than [`MIN_SERIES_LEN`] samples.
pub fn check_series_length(len: usize) -> ParamResult<()> {
    if len < MIN_SERIES_LEN {
        return Err(ParameterError::SeriesTooShort(len));
    }
    Ok(())
}

/// Population variance (denominator N) via Welford's recurrence.
///
/// The population convention matters for the derived radius: the reference
/// tooling in this field normalizes thresholds with N, not N-1. An empty
/// view yields NaN through the 0/0 it produces.
pub fn population_variance(data: ArrayView1<f64>) -> f64 {
    let mut mean = 0.0;
    let mut m2 = 0.0;
    let mut count = 0.0;
    for &x in data.iter() {
        count += 1.0;
        let delta = x - mean;
        mean += delta / count;
        let delta2 = x - mean;
        m2 += delta * delta2;
    }
    m2 / count
}

/// Population standard deviation, see [`population_variance`].
pub fn population_std(data: ArrayView1<f64>) -> f64 {
    population_variance(data).sqrt()
}
