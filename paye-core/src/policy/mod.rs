//! Swappable tax policies.
//!
//! A [`TaxPolicy`] turns a validated [`TaxRequest`] into a [`TaxResponse`].
//! Two implementations exist: the statutory [`ProgressiveTax`] and the
//! trivial [`NoTax`]. Which one applies is a plain value-level choice made
//! by the caller through [`TaxPolicyKind`], never by the calculator.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paye_core::{TaxPolicy, TaxPolicyKind, TaxRequest};
//!
//! let policy = TaxPolicyKind::parse("no-tax").unwrap().policy();
//! let request = TaxRequest::with_salary(dec!(900000.00)).unwrap();
//!
//! let response = policy.calculate(&request).unwrap();
//!
//! assert_eq!(response.tax_amount, dec!(0.00));
//! assert_eq!(response.net_pay, response.gross_pay);
//! ```

mod no_tax;
mod progressive;

pub use no_tax::NoTax;
pub use progressive::ProgressiveTax;

use serde::{Deserialize, Serialize};

use crate::calculations::PayeError;
use crate::models::{TaxRequest, TaxResponse};

/// Capability interface for payslip tax computation.
pub trait TaxPolicy: Send + Sync {
    /// Computes tax, gross pay, and net pay for the request.
    fn calculate(&self, request: &TaxRequest) -> Result<TaxResponse, PayeError>;
}

/// Selector for the available tax policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxPolicyKind {
    Progressive,
    NoTax,
}

impl TaxPolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Progressive => "progressive",
            Self::NoTax => "no-tax",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "progressive" => Some(Self::Progressive),
            "no-tax" => Some(Self::NoTax),
            _ => None,
        }
    }

    /// Builds the policy implementation this kind selects.
    pub fn policy(&self) -> Box<dyn TaxPolicy> {
        match self {
            Self::Progressive => Box::new(ProgressiveTax::default()),
            Self::NoTax => Box::new(NoTax),
        }
    }
}
