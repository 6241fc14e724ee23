use ndarray::Array1;

use crate::estimators::approaches::template::embedding::{EmbeddingParams, check_series_length};
use crate::estimators::approaches::template::matching::MatchDepthMatrix;
use crate::estimators::errors::ParamResult;
use crate::estimators::traits::{GlobalValue, ProfileValues};

/// Cross-sample entropy estimator for a pair of series.
///
/// Scores how regularly windows of the template series recur in the target
/// series, with the same -log(A_k / B_k) count ratios as [`SampleEntropy`]
/// taken over all template/target start pairs. Swapping the two series
/// leaves every count unchanged. The series may differ in length.
///
/// When no explicit radius is set, the threshold pools the two series:
/// 0.2 sqrt((var_a + var_b) / 2).
///
/// [`SampleEntropy`]: crate::estimators::approaches::template::sample::SampleEntropy
pub struct CrossSampleEntropy {
    pub template: Array1<f64>,
    pub target: Array1<f64>,
    pub params: EmbeddingParams,
    /// Match threshold actually used, explicit or pooled from the pair.
    pub radius: f64,
    /// A_k: pairs matched over more than k samples, k = 0..=m.
    pub matches_above: Array1<u64>,
    /// B_k: extendable pairs matched over at least k samples, k = 0..=m.
    pub matches_at_least: Array1<u64>,
}

impl CrossSampleEntropy {
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
        let (matches_above, matches_at_least) = matrix.count_profiles();

        Ok(Self {
            template,
            target,
            params,
            radius,
            matches_above,
            matches_at_least,
        })
    }
}

impl GlobalValue for CrossSampleEntropy {
    /// Cross-sample entropy at the highest requested dimension.
    fn global_value(&self) -> f64 {
        self.global_from_profile()
    }
}

impl ProfileValues for CrossSampleEntropy {
    /// Per-dimension cross-sample entropies -log(A_k / B_k), k = 0..=m.
    fn profile_values(&self) -> Array1<f64> {
        let ln_base = self.params.log_base.ln();
        let log_b = |x: f64| -> f64 { x.ln() / ln_base };
        let mut profile = Array1::<f64>::zeros(self.params.dim + 1);
        for k in 0..=self.params.dim {
            let ratio = self.matches_above[k] as f64 / self.matches_at_least[k] as f64;
            profile[k] = -log_b(ratio);
        }
        profile
    }
}
