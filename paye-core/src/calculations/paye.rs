//! Progressive PAYE calculation over a marginal band table.
//!
//! This module implements the payslip computation: salary is walked through
//! a table of marginal bands, each band taxing only the portion of salary
//! that falls inside it, and the bonus is added to gross pay untaxed.
//!
//! # Band Structure
//!
//! With the statutory table ([`TaxBand::statutory`]) the bands are:
//!
//! | Band | Salary range | Width | Marginal rate |
//! |------|----------------------|-----------|---------------|
//! | 1 | 0 – 200,000 | 200,000 | 0% (tax-free) |
//! | 2 | 200,000 – 700,000 | 500,000 | 10% |
//! | 3 | 700,000 – 1,000,000 | 300,000 | 15% |
//! | 4 | above 1,000,000 | unbounded | 20% |
//!
//! Band thresholds are inclusive-lower/exclusive-upper: a salary of exactly
//! 700,000 consumes all of bands 1–2 and nothing of band 3.
//!
//! # Rounding
//!
//! All intermediate arithmetic runs at full [`Decimal`] precision; nothing
//! is rounded per band. The three output amounts are each quantized to two
//! decimal places (half-up) independently as the final step. Because
//! `net_pay` is quantized from the full-precision `gross − tax` rather than
//! recomputed from the rounded siblings, `net_pay` can differ from
//! `gross_pay − tax_amount` by one cent for inputs with sub-cent precision.
//! Callers relying on exact reconciliation should compare against the
//! full-precision identity instead.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paye_core::{PayeCalculator, TaxBand, TaxRequest};
//!
//! let bands = TaxBand::statutory();
//! let calculator = PayeCalculator::new(&bands);
//!
//! let request = TaxRequest::new(dec!(900000.00), dec!(100000.00)).unwrap();
//! let response = calculator.calculate(&request).unwrap();
//!
//! // 500,000 × 10% + 200,000 × 15% = 80,000; the bonus stays untaxed.
//! assert_eq!(response.tax_amount, dec!(80000.00));
//! assert_eq!(response.gross_pay, dec!(1000000.00));
//! assert_eq!(response.net_pay, dec!(920000.00));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::{min, round_half_up};
use crate::models::{TaxBand, TaxRequest, TaxResponse};

/// Errors that can occur during a PAYE calculation.
///
/// All variants describe a defective band table. With a valid table —
/// [`TaxBand::statutory`] always is — `calculate` cannot fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayeError {
    /// No tax bands were provided.
    #[error("no tax bands provided")]
    EmptyBandTable,

    /// A band rate lies outside [0, 1].
    #[error("band rate must be between 0 and 1, got {0}")]
    InvalidBandRate(Decimal),

    /// A finite band width is zero or negative.
    #[error("band width must be positive, got {0}")]
    NonPositiveBandWidth(Decimal),

    /// An unbounded band was followed by further bands.
    #[error("only the last band may be unbounded")]
    BandAfterUnbounded,
}

/// Calculator for progressive PAYE over a band table.
///
/// Borrows the band table for the duration of the calculation; the bands
/// should be ordered from the lowest salary range upward, with at most one
/// unbounded band in the last position.
#[derive(Debug, Clone)]
pub struct PayeCalculator<'a> {
    bands: &'a [TaxBand],
}

impl<'a> PayeCalculator<'a> {
    /// Creates a new calculator over the given band table.
    pub fn new(bands: &'a [TaxBand]) -> Self {
        Self { bands }
    }

    /// Computes tax, gross pay, and net pay for one request.
    ///
    /// The request guarantees non-negative amounts, so with a well-formed
    /// band table this always produces a fully-populated response; a zero
    /// salary is valid and yields zero tax with net pay equal to gross pay.
    ///
    /// # Errors
    ///
    /// Returns [`PayeError`] if the band table is malformed (empty, a rate
    /// outside [0, 1], a non-positive width, or an unbounded band that is
    /// not last).
    pub fn calculate(
        &self,
        request: &TaxRequest,
    ) -> Result<TaxResponse, PayeError> {
        self.validate_bands()?;

        let salary = request.salary();
        let tax = self.band_tax(salary);

        if tax.is_zero() && !salary.is_zero() {
            debug!(
                salary = %salary,
                "salary fully within the zero-rate band; no income tax due"
            );
        }

        let gross = salary + request.bonus();
        let net = gross - tax;

        Ok(TaxResponse {
            tax_amount: round_half_up(tax),
            gross_pay: round_half_up(gross),
            net_pay: round_half_up(net),
        })
    }

    /// Checks the band table invariants before any arithmetic runs.
    fn validate_bands(&self) -> Result<(), PayeError> {
        if self.bands.is_empty() {
            return Err(PayeError::EmptyBandTable);
        }
        for (index, band) in self.bands.iter().enumerate() {
            if band.rate < Decimal::ZERO || band.rate > Decimal::ONE {
                return Err(PayeError::InvalidBandRate(band.rate));
            }
            match band.width {
                Some(width) if width <= Decimal::ZERO => {
                    return Err(PayeError::NonPositiveBandWidth(width));
                }
                None if index != self.bands.len() - 1 => {
                    return Err(PayeError::BandAfterUnbounded);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Walks the band table, consuming salary against each band's width and
    /// accumulating the marginal tax at full precision.
    ///
    /// The walk stops as soon as the salary is exhausted; unconsumed bands
    /// would contribute zero anyway. Salary past the last finite band is
    /// taxed entirely at the final band's rate.
    fn band_tax(&self, salary: Decimal) -> Decimal {
        let mut remaining = salary;
        let mut tax = Decimal::ZERO;

        for band in self.bands {
            if remaining.is_zero() {
                break;
            }
            let consumed = match band.width {
                Some(width) => min(remaining, width),
                None => remaining,
            };
            tax += consumed * band.rate;
            remaining -= consumed;
        }

        tax
    }
}
