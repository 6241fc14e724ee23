// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::{Array1, Array2};

use crate::test_helpers::generate_uniform_series;
use regumeasure::estimators::ParameterError;
use regumeasure::estimators::approaches::template::embedding::EmbeddingParams;
use regumeasure::estimators::approaches::template::sample::SampleEntropy;
use regumeasure::estimators::regularity::Regularity;
use regumeasure::estimators::{GlobalValue, ProfileValues};

#[test]
fn strictly_increasing_ramp_with_zero_radius() {
    // No pair of distinct samples lies within a zero radius, so the
    // dimension-0 ratio is 0/55 and the entropy diverges.
    let data = Array1::from_iter((1..=11).map(|v| v as f64));
    let params = EmbeddingParams::new(2).with_radius(0.0);
    let est = Regularity::sample(data, params).unwrap();

    assert_eq!(est.matches_above.to_vec(), vec![0, 0, 0]);
    assert_eq!(est.matches_at_least.to_vec(), vec![55, 0, 0]);

    let profile = est.profile_values();
    assert_eq!(profile[0], f64::INFINITY);
    // Deeper dimensions divide zero by zero.
    assert!(profile[1].is_nan());
    assert!(profile[2].is_nan());
}

#[test]
fn constant_series_is_perfectly_regular() {
    let data = Array1::from_elem(20, 5.0);
    let params = EmbeddingParams::new(2).with_radius(1.0);
    let est = Regularity::sample(data, params).unwrap();

    assert_eq!(est.matches_above.to_vec(), vec![190, 171, 153]);
    assert_eq!(est.matches_at_least.to_vec(), vec![190, 171, 153]);

    let profile = est.profile_values();
    for k in 0..3 {
        assert_eq!(profile[k], 0.0);
    }
    assert_eq!(est.global_value(), 0.0);
}

#[test]
fn alternating_series_known_counts() {
    // 1, 2, 1, 2, ... over 12 samples with r = 0.5: only same-parity
    // positions match. 15 + 15 seed pairs, minus the pairs that cannot
    // extend past the end of the series at each deeper dimension.
    let data = Array1::from_iter((0..12).map(|i| if i % 2 == 0 { 1.0 } else { 2.0 }));
    let params = EmbeddingParams::new(2).with_radius(0.5);
    let est = Regularity::sample(data, params).unwrap();

    assert_eq!(est.matches_above.to_vec(), vec![30, 25, 20]);
    assert_eq!(est.matches_at_least.to_vec(), vec![66, 25, 20]);

    let profile = est.profile_values();
    assert_abs_diff_eq!(profile[0], (66.0f64 / 30.0).ln(), epsilon = 1e-12);
    assert_eq!(profile[1], 0.0);
    assert_eq!(profile[2], 0.0);
    assert_eq!(est.global_value(), 0.0);
}

#[test]
fn derived_radius_scores_irregular_data_finitely() {
    let data = generate_uniform_series(500, 42);
    let est = Regularity::sample(data, EmbeddingParams::default()).unwrap();

    assert!(est.radius > 0.0);
    let profile = est.profile_values();
    assert_eq!(profile.len(), 3);
    // Uniform noise leaves plenty of matches at every dimension, and far
    // fewer matched pairs than total pairs.
    assert!(est.global_value().is_finite());
    assert!(profile[0] > 0.0);
}

#[test]
fn constructor_rejects_bad_configurations() {
    let data = Array1::from_elem(16, 0.5);
    assert!(matches!(
        Regularity::sample(data.clone(), EmbeddingParams::new(0)),
        Err(ParameterError::EmbeddingDimension(0))
    ));
    assert!(matches!(
        Regularity::sample(data.clone(), EmbeddingParams::new(2).with_delay(0)),
        Err(ParameterError::TimeDelay(0))
    ));
    assert!(matches!(
        Regularity::sample(data.clone(), EmbeddingParams::new(2).with_radius(-1.0)),
        Err(ParameterError::Radius(r)) if r < 0.0
    ));
    assert!(matches!(
        Regularity::sample(data, EmbeddingParams::new(2).with_log_base(0.0)),
        Err(ParameterError::LogBase(b)) if b == 0.0
    ));
}

#[test]
fn constructor_rejects_short_series() {
    let data = Array1::from_elem(5, 0.5);
    assert!(matches!(
        Regularity::sample(data, EmbeddingParams::default()),
        Err(ParameterError::SeriesTooShort(5))
    ));
}

#[test]
fn from_rows_builds_one_estimator_per_row() {
    let mut data = Array2::zeros((2, 16));
    for j in 0..16 {
        data[[0, j]] = if j % 2 == 0 { 1.0 } else { 2.0 };
        data[[1, j]] = 3.0;
    }
    let params = EmbeddingParams::new(2).with_radius(0.5);
    let batch = SampleEntropy::from_rows(data.clone(), params.clone()).unwrap();
    assert_eq!(batch.len(), 2);

    for (row, est) in batch.iter().enumerate() {
        let direct = Regularity::sample(data.row(row).to_owned(), params.clone()).unwrap();
        assert_eq!(est.matches_above, direct.matches_above);
        assert_eq!(est.matches_at_least, direct.matches_at_least);
    }

    // The first rejected row aborts the whole batch.
    let narrow = Array2::zeros((3, 5));
    assert!(matches!(
        SampleEntropy::from_rows(narrow, params),
        Err(ParameterError::SeriesTooShort(5))
    ));
}
