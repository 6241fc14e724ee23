// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

pub trait ProfileValues: GlobalValue {
    /// Compute and return the per-dimension values of the measure,
    /// lowest dimension first. To be overridden by specific measures.
    fn profile_values(&self) -> Array1<f64>;

    /// Derive global_value as the profile entry at the highest dimension.
    fn global_from_profile(&self) -> f64 {
        let profile = self.profile_values();
        *profile
            .last()
            .expect("Profile values should not be empty.")
    }
}
