use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a progressive band table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBand {
    /// Salary this band can absorb. `None` marks the final unbounded band.
    pub width: Option<Decimal>,
    /// Marginal rate applied to the portion of salary within this band.
    pub rate: Decimal,
}

impl TaxBand {
    /// The statutory band table.
    ///
    /// The first 200,000 of salary is tax-free, the next 500,000 is taxed
    /// at 10%, the next 300,000 at 15%, and everything above 1,000,000 at
    /// 20%. Band bounds apply to salary only; bonuses are never taxed.
    pub fn statutory() -> [TaxBand; 4] {
        [
            TaxBand {
                width: Some(Decimal::new(200_000, 0)),
                rate: Decimal::ZERO,
            },
            TaxBand {
                width: Some(Decimal::new(500_000, 0)),
                rate: Decimal::new(10, 2),
            },
            TaxBand {
                width: Some(Decimal::new(300_000, 0)),
                rate: Decimal::new(15, 2),
            },
            TaxBand {
                width: None,
                rate: Decimal::new(20, 2),
            },
        ]
    }
}
