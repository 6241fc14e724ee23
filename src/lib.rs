// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # regumeasure
//!
//! Rust library for template-matching regularity measures of numeric time
//! series: sample entropy, approximate entropy and their cross-series
//! variants, computed over delay-embedded windows under the Chebyshev
//! metric.
//!
//! ## Quick Start
//!
//! ```rust
//! use regumeasure::estimators::regularity::Regularity;
//! use regumeasure::estimators::traits::{GlobalValue, ProfileValues};
//! use ndarray::Array1;
//!
//! // Sample entropy of an alternating series, default embedding
//! // (m = 2, tau = 1, radius = 0.2 * population std, natural log)
//! let data = Array1::from_iter((0..32).map(|i| (i % 2) as f64));
//! let sampen = Regularity::sample(data.clone(), Default::default()).unwrap();
//! let profile = sampen.profile_values();
//! assert_eq!(profile.len(), 3);
//! assert!(sampen.global_value().is_finite());
//!
//! // Cross-approximate entropy of a series pair
//! let xapen = Regularity::cross_approx(data.clone(), data, Default::default()).unwrap();
//! assert_eq!(xapen.phi.len(), 3);
//! ```
//!
//! ## Estimators
//!
//! | Measure | Single series | Series pair |
//! |---------|---------------|-------------|
//! | Sample entropy (count ratios) | ✅ `Regularity::sample` | ✅ `Regularity::cross_sample` |
//! | Approximate entropy (Phi differences) | ✅ `Regularity::approx` | ✅ `Regularity::cross_approx` |
//!
//! The sample-style estimators exclude self-comparisons and count each
//! unordered window pair once; the approximate-style estimators count all
//! ordered pairs, self-matches included, and difference the log-averaged
//! match fractions.
//!
//! ## Degenerate inputs
//!
//! Constructors reject invalid configurations (zero dimension or delay,
//! negative radius, non-positive log base, series of 10 samples or fewer)
//! with a typed `ParameterError`. Everything past construction is
//! infallible: empty counts and impossible window lengths propagate
//! through the arithmetic as NaN or infinity instead of raising, so
//! callers can score degenerate regimes and filter afterwards.
//!
//! ## Architecture
//!
//! The library follows a three-layer architecture:
//!
//! 1. **Public API Layer**: the `Regularity` factory and the
//!    `GlobalValue`/`ProfileValues` traits
//! 2. **Entropy Scorers**: four estimators turning match counts into
//!    per-dimension entropy profiles
//! 3. **Core Infrastructure**: the embedding configuration and the shared
//!    match-depth matrix both scorer families query

pub mod estimators;
