pub mod template;

// Unified re-exports for the estimators so tests and users can import
// regumeasure::estimators::approaches::* ergonomically.
pub use template::approx::ApproxEntropy;
pub use template::cross_approx::CrossApproxEntropy;
pub use template::cross_sample::CrossSampleEntropy;
pub use template::sample::SampleEntropy;
