// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::test_helpers::generate_uniform_series;
use regumeasure::estimators::approaches::template::matching::{MatchDepthMatrix, PairMode};

#[test]
fn constant_series_depths_are_bounded_by_the_series_end() {
    // Everything matches, so depth is limited only by the later window
    // running off the end: depth(i, j) = min(m + 1, n - j) for i < j.
    let data = Array1::from_elem(12, 5.0);
    let matrix = MatchDepthMatrix::from_series(data.view(), 2, 1, 1.0);
    assert_eq!(matrix.mode, PairMode::SelfPairs);

    assert_eq!(matrix.depths[[0, 1]], 3);
    assert_eq!(matrix.depths[[5, 9]], 3);
    assert_eq!(matrix.depths[[9, 10]], 2);
    assert_eq!(matrix.depths[[9, 11]], 1);
    assert_eq!(matrix.depths[[10, 11]], 1);
    assert_eq!(matrix.depths[[0, 11]], 1);

    // Only i < j is populated
    assert_eq!(matrix.depths[[1, 0]], 0);
    assert_eq!(matrix.depths[[4, 4]], 0);
}

#[test]
fn constant_series_count_families() {
    let data = Array1::from_elem(20, 5.0);
    let matrix = MatchDepthMatrix::from_series(data.view(), 2, 1, 1.0);

    // 190 pairs in total; each deeper level loses one column of pairs
    // to the end of the series.
    assert_eq!(matrix.pairs_deeper_than(0), 190);
    assert_eq!(matrix.pairs_deeper_than(1), 171);
    assert_eq!(matrix.pairs_deeper_than(2), 153);

    assert_eq!(matrix.extendable_pairs_at_least(0), 190);
    assert_eq!(matrix.extendable_pairs_at_least(1), 171);
    assert_eq!(matrix.extendable_pairs_at_least(2), 153);

    let (above, at_least) = matrix.count_profiles();
    assert_eq!(above.to_vec(), vec![190, 171, 153]);
    assert_eq!(at_least.to_vec(), vec![190, 171, 153]);
}

#[test]
fn strictly_increasing_series_has_no_matches_at_zero_radius() {
    let data = Array1::from_iter((1..=11).map(|v| v as f64));
    let matrix = MatchDepthMatrix::from_series(data.view(), 2, 1, 0.0);

    assert_eq!(matrix.pairs_deeper_than(0), 0);
    // The total pair count does not depend on the radius.
    assert_eq!(matrix.extendable_pairs_at_least(0), 55);
}

#[test]
fn delay_spaces_the_compared_samples() {
    // Two interleaved strands: a slow ramp on even indices, a constant 9
    // on odd ones. With tau = 2 each window stays within one strand.
    let data = Array1::from(vec![
        0.0, 9.0, 0.1, 9.0, 0.2, 9.0, 0.3, 9.0, 0.4, 9.0, 0.5, 9.0,
    ]);
    let matrix = MatchDepthMatrix::from_series(data.view(), 2, 2, 0.25);

    assert_eq!(matrix.depths[[0, 2]], 3);
    assert_eq!(matrix.depths[[0, 4]], 3);
    // 0.0 vs 0.3 already misses at the first sample
    assert_eq!(matrix.depths[[0, 6]], 0);
    assert_eq!(matrix.depths[[1, 3]], 3);
    // Across strands nothing matches
    assert_eq!(matrix.depths[[0, 1]], 0);
    // The pair (8, 10) cannot extend: 10 + 2 runs off the end
    assert_eq!(matrix.depths[[8, 10]], 1);
}

#[test]
fn cross_matrix_of_a_series_with_itself_is_symmetric() {
    let data = generate_uniform_series(16, 71);
    let bare = MatchDepthMatrix::from_series(data.view(), 2, 1, 0.3);
    let cross = MatchDepthMatrix::from_series_pair(data.view(), data.view(), 2, 1, 0.3);
    assert_eq!(cross.mode, PairMode::CrossPairs);

    for i in 0..16 {
        for j in 0..16 {
            assert_eq!(cross.depths[[i, j]], cross.depths[[j, i]]);
        }
    }

    // Diagonal self-matches extend as far as the series allows.
    for i in 0..14 {
        assert_eq!(cross.depths[[i, i]], 3);
    }
    assert_eq!(cross.depths[[14, 14]], 2);
    assert_eq!(cross.depths[[15, 15]], 1);

    // Ordered pairs + diagonal versus unordered off-diagonal pairs.
    assert_eq!(
        cross.pairs_deeper_than(0),
        2 * bare.pairs_deeper_than(0) + 16
    );
}

#[test]
fn cross_count_family_covers_the_full_rectangle() {
    let template = Array1::from_elem(12, 1.0);
    let target = Array1::from_elem(14, 1.0);
    let matrix = MatchDepthMatrix::from_series_pair(template.view(), target.view(), 2, 1, 0.5);

    assert_eq!(matrix.extendable_pairs_at_least(0), 12 * 14);

    // All windows match, so every valid row sees every valid column.
    for (window, expected_rows) in [(1usize, 12usize), (2, 11), (3, 10)] {
        let fractions = matrix.row_match_fractions(window);
        assert_eq!(fractions.len(), expected_rows);
        for &f in fractions.iter() {
            assert_eq!(f, 1.0);
        }
    }
}

#[test]
#[should_panic(expected = "cross-pair matrices")]
fn row_match_fractions_reject_self_pair_matrices() {
    let data = Array1::from_elem(12, 1.0);
    let matrix = MatchDepthMatrix::from_series(data.view(), 2, 1, 0.5);
    let _ = matrix.row_match_fractions(1);
}
