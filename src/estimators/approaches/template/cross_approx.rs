use ndarray::Array1;

use crate::estimators::approaches::template::embedding::{EmbeddingParams, check_series_length};
use crate::estimators::approaches::template::matching::MatchDepthMatrix;
use crate::estimators::errors::ParamResult;
use crate::estimators::traits::{GlobalValue, ProfileValues};

/// Cross-approximate entropy estimator for a pair of series.
///
/// For every window length w = 1..=m+1 it computes the Phi statistic: the
/// mean, over template windows, of the log fraction of target windows
/// within the threshold. The entropy at dimension k is then
/// Phi(k) - Phi(k+1), so the profile has m entries while [`Self::phi`]
/// keeps all m+1 underlying values.
///
/// Unlike the sample-style scorers this counts every ordered pair,
/// template row against target column, and normalizes per row. A template
/// window with no match at all sends its log fraction, and with it the
/// whole Phi value, to negative infinity; the differenced profile then
/// carries NaN. Callers filter non-finite entries themselves.
pub struct CrossApproxEntropy {
    pub template: Array1<f64>,
    pub target: Array1<f64>,
    pub params: EmbeddingParams,
    /// Match threshold actually used, explicit or pooled from the pair.
    pub radius: f64,
    /// Phi(w) for window lengths w = 1..=m+1.
    pub phi: Array1<f64>,
}

impl CrossApproxEntropy {
    pub fn new(
        template: Array1<f64>,
        target: Array1<f64>,
        params: EmbeddingParams,
    ) -> ParamResult<Self> {
        params.validate()?;
        check_series_length(template.len())?;
        check_series_length(target.len())?;
        let radius = params.resolve_radius_pair(template.view(), target.view());

        let matrix = MatchDepthMatrix::from_series_pair(
            template.view(),
            target.view(),
            params.dim,
            params.delay,
            radius,
        );

        let ln_base = params.log_base.ln();
        let log_b = |x: f64| -> f64 { x.ln() / ln_base };
        let mut phi = Array1::<f64>::zeros(params.dim + 1);
        for w in 1..=(params.dim + 1) {
            let fractions = matrix.row_match_fractions(w);
            // Mean over valid rows; an empty row set yields 0/0 = NaN.
            let log_sum: f64 = fractions.iter().map(|&f| log_b(f)).sum();
            phi[w - 1] = log_sum / fractions.len() as f64;
        }

        Ok(Self {
            template,
            target,
            params,
            radius,
            phi,
        })
    }
}

impl GlobalValue for CrossApproxEntropy {
    /// Cross-approximate entropy at the highest requested dimension,
    /// Phi(m) - Phi(m+1).
    fn global_value(&self) -> f64 {
        self.global_from_profile()
    }
}

impl ProfileValues for CrossApproxEntropy {
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
