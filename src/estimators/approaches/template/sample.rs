use ndarray::{Array1, Array2};

use crate::estimators::approaches::template::embedding::{EmbeddingParams, check_series_length};
use crate::estimators::approaches::template::matching::MatchDepthMatrix;
use crate::estimators::errors::ParamResult;
use crate::estimators::traits::{GlobalValue, ProfileValues};

/// Sample entropy estimator for a single series (template matching, Chebyshev metric).
///
/// For each dimension k up to m, A_k counts the window pairs matched over
/// more than k samples and B_k the extendable pairs matched over at least k;
/// the entropy at dimension k is -log(A_k / B_k). Self-comparisons are
/// excluded and each unordered pair is counted once, which removes the
/// self-match bias of the approximate-entropy family.
///
/// The match counts are derived once at construction; the quadratic depth
/// matrix is freed afterwards. Zero counts flow into the profile as infinity
/// (no matched pairs at all) or NaN (empty numerator and denominator) rather
/// than raising an error.
///
/// # Examples
///
/// ```
/// use regumeasure::estimators::approaches::template::embedding::EmbeddingParams;
/// use regumeasure::estimators::regularity::Regularity;
/// use regumeasure::estimators::traits::GlobalValue;
/// use ndarray::Array1;
///
/// // A constant series is perfectly regular
/// let data = Array1::from_elem(20, 5.0);
/// let params = EmbeddingParams::new(2).with_radius(1.0);
/// let sampen = Regularity::sample(data, params).unwrap();
///
/// assert_eq!(sampen.matches_at_least[0], 190);
/// assert_eq!(sampen.global_value(), 0.0);
/// ```
pub struct SampleEntropy {
    pub data: Array1<f64>,
    pub params: EmbeddingParams,
    /// Match threshold actually used, explicit or derived from the data.
    pub radius: f64,
    /// A_k: pairs matched over more than k samples, k = 0..=m.
    pub matches_above: Array1<u64>,
    /// B_k: extendable pairs matched over at least k samples, k = 0..=m.
    pub matches_at_least: Array1<u64>,
}

impl SampleEntropy {
    pub fn new(data: Array1<f64>, params: EmbeddingParams) -> ParamResult<Self> {
        params.validate()?;
        check_series_length(data.len())?;
        let radius = params.resolve_radius(data.view());

        let matrix = MatchDepthMatrix::from_series(data.view(), params.dim, params.delay, radius);
        let (matches_above, matches_at_least) = matrix.count_profiles();

        Ok(Self {
            data,
            params,
            radius,
            matches_above,
            matches_at_least,
        })
    }

    /// Build a vector of SampleEntropy estimators, one per row of a 2D array.
    ///
    /// The rows are scored independently with the same parameters; the first
    /// rejected row aborts the batch.
    pub fn from_rows(data: Array2<f64>, params: EmbeddingParams) -> ParamResult<Vec<Self>> {
        data.rows()
            .into_iter()
            .map(|row| Self::new(row.to_owned(), params.clone()))
            .collect()
    }
}

impl GlobalValue for SampleEntropy {
    /// Sample entropy at the highest requested dimension.
    fn global_value(&self) -> f64 {
        self.global_from_profile()
    }
}

impl ProfileValues for SampleEntropy {
    /// Per-dimension sample entropies -log(A_k / B_k), k = 0..=m.
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
