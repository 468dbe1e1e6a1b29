//! Tax calculation modules for the Simples Nacional regime.

pub mod common;
pub mod simples;

pub use simples::{TaxAssessment, effective_rate, tax_amount};
