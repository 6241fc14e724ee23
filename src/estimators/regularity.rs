use ndarray::Array1;

use crate::estimators::approaches::template::approx::ApproxEntropy;
use crate::estimators::approaches::template::cross_approx::CrossApproxEntropy;
use crate::estimators::approaches::template::cross_sample::CrossSampleEntropy;
use crate::estimators::approaches::template::embedding::EmbeddingParams;
use crate::estimators::approaches::template::sample::SampleEntropy;
use crate::estimators::errors::ParamResult;
pub use crate::estimators::traits::ProfileValues;

/// Regularity estimation methods for numeric time series
///
/// This struct provides static methods for creating template-matching
/// regularity estimators for single series and series pairs. Every
/// constructor validates the embedding configuration and the series
/// lengths before any matching work starts.
pub struct Regularity;

impl Regularity {
    /// Creates a new sample entropy estimator for a single 1D series
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional series of more than 10 samples
    /// * `params` - Embedding configuration (dimension, delay, radius, log base)
    ///
    /// # Returns
    ///
    /// A sample entropy estimator with its match counts already derived,
    /// or a `ParameterError` when the configuration or series is rejected
    pub fn sample(data: Array1<f64>, params: EmbeddingParams) -> ParamResult<SampleEntropy> {
        SampleEntropy::new(data, params)
    }

    /// Creates a new cross-sample entropy estimator for a pair of 1D series
    ///
    /// # Arguments
    ///
    /// * `template` - Series providing the template windows
    /// * `target` - Series the templates are matched against
    /// * `params` - Embedding configuration (dimension, delay, radius, log base)
    ///
    /// # Returns
    ///
    /// A cross-sample entropy estimator, or a `ParameterError` when the
    /// configuration or either series is rejected
    ///
    /// # Threshold
    ///
    /// Without an explicit radius the threshold pools the two series,
    /// 0.2 sqrt((var_a + var_b) / 2), so the estimate is symmetric in the
    /// inputs. The series may differ in length.
    pub fn cross_sample(
        template: Array1<f64>,
        target: Array1<f64>,
        params: EmbeddingParams,
    ) -> ParamResult<CrossSampleEntropy> {
        CrossSampleEntropy::new(template, target, params)
    }

    /// Creates a new approximate entropy estimator for a single 1D series
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional series of more than 10 samples
    /// * `params` - Embedding configuration (dimension, delay, radius, log base)
    ///
    /// # Returns
    ///
    /// An approximate entropy estimator carrying the Phi statistics for
    /// window lengths 1..=m+1, or a `ParameterError` when rejected
    pub fn approx(data: Array1<f64>, params: EmbeddingParams) -> ParamResult<ApproxEntropy> {
        ApproxEntropy::new(data, params)
    }

    /// Creates a new cross-approximate entropy estimator for a pair of 1D series
    ///
    /// # Arguments
    ///
    /// * `template` - Series providing the template windows
    /// * `target` - Series the templates are matched against
    /// * `params` - Embedding configuration (dimension, delay, radius, log base)
    ///
    /// # Returns
    ///
    /// A cross-approximate entropy estimator carrying the Phi statistics
    /// for window lengths 1..=m+1, or a `ParameterError` when rejected
    ///
    /// # Threshold
    ///
    /// Without an explicit radius the threshold pools the two series as in
    /// [`Regularity::cross_sample`]. Unlike the sample variant the Phi
    /// normalization is per template row, so swapping the series changes
    /// the estimate.
    pub fn cross_approx(
        template: Array1<f64>,
        target: Array1<f64>,
        params: EmbeddingParams,
    ) -> ParamResult<CrossApproxEntropy> {
        CrossApproxEntropy::new(template, target, params)
    }
}
