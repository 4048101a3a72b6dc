use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when constructing a [`TaxRequest`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The salary amount was negative.
    #[error("salary cannot be negative, got {0}")]
    NegativeSalary(Decimal),

    /// The bonus amount was negative.
    #[error("bonus cannot be negative, got {0}")]
    NegativeBonus(Decimal),
}

/// Errors that can occur when parsing textual amounts into a [`TaxRequest`].
///
/// A string that does not form a decimal amount at all is a different failure
/// kind than a well-formed amount with an invalid (negative) value, and the
/// two are kept distinct here.
#[derive(Debug, Error)]
pub enum ParseRequestError {
    /// The text is not a well-formed decimal amount.
    #[error("{field} is not a valid decimal amount: {value:?}")]
    MalformedAmount {
        /// Which request field the text was supplied for.
        field: &'static str,
        /// The offending input text.
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    /// The text parsed cleanly but carries an invalid value.
    #[error(transparent)]
    Invalid(#[from] RequestError),
}

/// A validated request for one payslip calculation.
///
/// Both amounts are guaranteed non-negative once the value exists, so the
/// calculators never re-check them. The value is immutable; construct a new
/// request to change an amount.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use paye_core::{RequestError, TaxRequest};
///
/// let request = TaxRequest::new(dec!(750000.00), dec!(50000.00)).unwrap();
/// assert_eq!(request.salary(), dec!(750000.00));
/// assert_eq!(request.bonus(), dec!(50000.00));
///
/// let rejected = TaxRequest::new(dec!(-1.00), dec!(0.00));
/// assert_eq!(rejected, Err(RequestError::NegativeSalary(dec!(-1.00))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedTaxRequest")]
pub struct TaxRequest {
    salary: Decimal,
    bonus: Decimal,
}

/// Wire shape of a request before validation. Deserialization funnels
/// through [`TaxRequest::new`] so the non-negative invariant holds for
/// deserialized values too.
#[derive(Debug, Deserialize)]
struct UncheckedTaxRequest {
    salary: Decimal,
    #[serde(default)]
    bonus: Decimal,
}

impl TryFrom<UncheckedTaxRequest> for TaxRequest {
    type Error = RequestError;

    fn try_from(raw: UncheckedTaxRequest) -> Result<Self, Self::Error> {
        TaxRequest::new(raw.salary, raw.bonus)
    }
}

impl TaxRequest {
    /// Creates a request from a salary and a bonus.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] if either amount is negative.
    pub fn new(
        salary: Decimal,
        bonus: Decimal,
    ) -> Result<Self, RequestError> {
        if salary < Decimal::ZERO {
            return Err(RequestError::NegativeSalary(salary));
        }
        if bonus < Decimal::ZERO {
            return Err(RequestError::NegativeBonus(bonus));
        }
        Ok(Self { salary, bonus })
    }

    /// Creates a request with no bonus.
    pub fn with_salary(salary: Decimal) -> Result<Self, RequestError> {
        Self::new(salary, Decimal::ZERO)
    }

    /// Parses textual amounts into a request.
    ///
    /// This is the boundary where untyped input enters: the text is parsed
    /// exactly (no rounding) and then validated. An empty bonus string means
    /// no bonus.
    ///
    /// # Errors
    ///
    /// Returns [`ParseRequestError::MalformedAmount`] if a string is not a
    /// decimal amount, or [`ParseRequestError::Invalid`] if a parsed amount
    /// is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use paye_core::TaxRequest;
    ///
    /// let request = TaxRequest::parse("200100.50", "").unwrap();
    /// assert_eq!(request.salary(), dec!(200100.50));
    /// assert_eq!(request.bonus(), dec!(0));
    ///
    /// assert!(TaxRequest::parse("three hundred", "0").is_err());
    /// ```
    pub fn parse(
        salary: &str,
        bonus: &str,
    ) -> Result<Self, ParseRequestError> {
        let salary = parse_amount("salary", salary)?;
        let bonus = if bonus.trim().is_empty() {
            Decimal::ZERO
        } else {
            parse_amount("bonus", bonus)?
        };
        Ok(Self::new(salary, bonus)?)
    }

    /// The base salary amount.
    pub fn salary(&self) -> Decimal {
        self.salary
    }

    /// The bonus amount. Zero when no bonus was supplied.
    pub fn bonus(&self) -> Decimal {
        self.bonus
    }
}

fn parse_amount(
    field: &'static str,
    value: &str,
) -> Result<Decimal, ParseRequestError> {
    Decimal::from_str_exact(value.trim()).map_err(|source| ParseRequestError::MalformedAmount {
        field,
        value: value.to_owned(),
        source,
    })
}
