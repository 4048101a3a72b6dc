use crate::calculations::{PayeCalculator, PayeError};
use crate::models::{TaxBand, TaxRequest, TaxResponse};

use super::TaxPolicy;

/// The progressive policy: marginal tax over a band table.
///
/// Defaults to the statutory table; [`ProgressiveTax::with_bands`] accepts
/// a custom one.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use paye_core::{ProgressiveTax, TaxPolicy, TaxRequest};
///
/// let policy = ProgressiveTax::default();
/// let request = TaxRequest::with_salary(dec!(800000.00)).unwrap();
///
/// let response = policy.calculate(&request).unwrap();
///
/// // 500,000 × 10% + 100,000 × 15% = 65,000
/// assert_eq!(response.tax_amount, dec!(65000.00));
/// assert_eq!(response.net_pay, dec!(735000.00));
/// ```
#[derive(Debug, Clone)]
pub struct ProgressiveTax {
    bands: Vec<TaxBand>,
}

impl ProgressiveTax {
    /// Creates the policy over the statutory band table.
    pub fn new() -> Self {
        Self {
            bands: TaxBand::statutory().to_vec(),
        }
    }

    /// Creates the policy over a custom band table.
    ///
    /// The table is validated on each [`calculate`](TaxPolicy::calculate)
    /// call, not here.
    pub fn with_bands(bands: Vec<TaxBand>) -> Self {
        Self { bands }
    }

    /// The band table this policy applies.
    pub fn bands(&self) -> &[TaxBand] {
        &self.bands
    }
}

impl Default for ProgressiveTax {
    fn default() -> Self {
        Self::new()
    }
}

impl TaxPolicy for ProgressiveTax {
    fn calculate(&self, request: &TaxRequest) -> Result<TaxResponse, PayeError> {
        PayeCalculator::new(&self.bands).calculate(request)
    }
}
