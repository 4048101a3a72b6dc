use rust_decimal::Decimal;

use crate::calculations::PayeError;
use crate::calculations::common::round_half_up;
use crate::models::{TaxRequest, TaxResponse};

use super::TaxPolicy;

/// Policy that levies no tax at all: net pay equals gross pay.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTax;

impl TaxPolicy for NoTax {
    fn calculate(&self, request: &TaxRequest) -> Result<TaxResponse, PayeError> {
        let gross = round_half_up(request.salary() + request.bonus());
        Ok(TaxResponse {
            tax_amount: Decimal::ZERO,
            gross_pay: gross,
            net_pay: gross,
        })
    }
}
