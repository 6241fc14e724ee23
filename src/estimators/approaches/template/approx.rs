use ndarray::Array1;

use crate::estimators::approaches::template::cross_approx::CrossApproxEntropy;
use crate::estimators::approaches::template::embedding::EmbeddingParams;
use crate::estimators::errors::ParamResult;
use crate::estimators::traits::{GlobalValue, ProfileValues};

/// Approximate entropy estimator for a single series.
///
/// The classic Phi-difference statistic: the series is matched against
/// itself over all ordered window pairs, self-matches included, so every
/// match fraction stays positive and the profile stays finite. Built as
/// the cross-approximate estimator applied to the pair (data, data).
pub struct ApproxEntropy {
    pub data: Array1<f64>,
    pub params: EmbeddingParams,
    /// Match threshold actually used, explicit or derived from the data.
    pub radius: f64,
    /// Phi(w) for window lengths w = 1..=m+1.
    pub phi: Array1<f64>,
}

impl ApproxEntropy {
    pub fn new(data: Array1<f64>, params: EmbeddingParams) -> ParamResult<Self> {
        // The pooled pair threshold of (data, data) equals the single-series
        // derivation, so delegation preserves the default radius too.
        let inner = CrossApproxEntropy::new(data.clone(), data, params)?;
        Ok(Self {
            data: inner.template,
            params: inner.params,
            radius: inner.radius,
            phi: inner.phi,
        })
    }
}

impl GlobalValue for ApproxEntropy {
    /// Approximate entropy at the highest requested dimension,
    /// Phi(m) - Phi(m+1).
    fn global_value(&self) -> f64 {
        self.global_from_profile()
    }
}

impl ProfileValues for ApproxEntropy {
    /// Per-dimension entropies Phi(k) - Phi(k+1), k = 1..=m.
    fn profile_values(&self) -> Array1<f64> {
        let m = self.params.dim;
        let mut profile = Array1::<f64>::zeros(m);
        for k in 1..=m {
            profile[k - 1] = self.phi[k - 1] - self.phi[k];
        }
        profile
    }
}
