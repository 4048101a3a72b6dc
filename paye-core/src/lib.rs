pub mod calculations;
pub mod models;
pub mod policy;

pub use calculations::{PayeCalculator, PayeError};
pub use models::{ParseRequestError, RequestError, TaxBand, TaxRequest, TaxResponse};
pub use policy::{NoTax, ProgressiveTax, TaxPolicy, TaxPolicyKind};
