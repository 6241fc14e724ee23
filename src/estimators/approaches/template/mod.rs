// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Template-matching (regularity) estimators module
// This module contains the embedding configuration, the match-depth matcher
// and the entropy scorers built on top of it.

pub mod embedding;
pub mod matching;

pub mod approx;
pub mod cross_approx;
pub mod cross_sample;
pub mod sample;
