//! Payslip calculation modules.
//!
//! The progressive band walk lives in [`paye`]; [`common`] holds the
//! currency quantization shared with the policy layer.

pub mod common;
pub mod paye;

pub use paye::{PayeCalculator, PayeError};
