pub mod regularity;
pub mod errors;
pub mod traits;
pub mod approaches;

pub use errors::{ParamResult, ParameterError};
pub use traits::{GlobalValue, ProfileValues};
