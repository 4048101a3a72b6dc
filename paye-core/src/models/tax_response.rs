use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of one payslip calculation. All three amounts are quantized to
/// two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResponse {
    pub tax_amount: Decimal,
    pub gross_pay: Decimal,
    pub net_pay: Decimal,
}
