//! Simples Nacional tax resolution.
//!
//! Derives the reportable quantities for one (revenue, annex) query from the
//! published bracket schedule:
//!
//! | Quantity       | Formula                                            |
//! |----------------|----------------------------------------------------|
//! | Nominal rate   | published rate for the resolved tier               |
//! | Deduction      | published deduction for the resolved tier          |
//! | Tax amount     | `revenue × rate/100 − deduction`                   |
//! | Effective rate | `(revenue × rate/100 − deduction) / revenue × 100` |
//!
//! Non-positive revenue yields zero tax and a zero effective rate; there is
//! no revenue at which the formulas divide by zero. The tax amount and
//! effective rate are not floored at zero when the deduction exceeds the
//! gross nominal tax, mirroring the published formula; whether a caller
//! floors the display value is a presentation decision.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use simples_core::calculations::simples::{effective_rate, tax_amount};
//!
//! // Second tier of Anexo I: 7.3% nominal, R$ 5.940,00 deduction.
//! assert_eq!(tax_amount(dec!(200000), 1), Ok(dec!(8660.00)));
//! assert_eq!(effective_rate(dec!(200000), 1), Ok(dec!(4.33)));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{round_half_up, round_rate_half_up};
use crate::models::{Annex, BracketRow, UnknownAnnexError};
use crate::schedule;

/// The four reportable quantities for one (revenue, annex) query.
///
/// Request-scoped: recomputed on every query, never cached or persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAssessment {
    /// The annex the assessment was computed under.
    pub annex: Annex,

    /// Published nominal rate for the resolved tier, as a percentage.
    pub nominal_rate: Decimal,

    /// Published deduction for the resolved tier.
    pub deduction: Decimal,

    /// Actual percentage of revenue paid after the deduction. Zero when
    /// revenue is non-positive.
    pub effective_rate: Decimal,

    /// Final tax due. Zero when revenue is non-positive.
    pub tax_amount: Decimal,
}

impl TaxAssessment {
    /// Computes the full assessment for one revenue figure under one annex.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use simples_core::{Annex, TaxAssessment};
    ///
    /// let assessment = TaxAssessment::compute(dec!(200000), Annex::One);
    ///
    /// assert_eq!(assessment.nominal_rate, dec!(7.3));
    /// assert_eq!(assessment.deduction, dec!(5940));
    /// assert_eq!(assessment.effective_rate, dec!(4.33));
    /// assert_eq!(assessment.tax_amount, dec!(8660.00));
    /// ```
    pub fn compute(revenue: Decimal, annex: Annex) -> Self {
        let row = schedule::bracket_for(revenue, annex);
        Self {
            annex,
            nominal_rate: row.nominal_rate,
            deduction: row.deduction,
            effective_rate: effective_rate_for(revenue, row),
            tax_amount: tax_amount_for(revenue, row),
        }
    }
}

/// Final tax due for a revenue figure under the given annex number.
///
/// Returns zero for non-positive revenue. The result is not floored at zero
/// should the deduction exceed the gross nominal tax.
///
/// # Errors
///
/// Returns [`UnknownAnnexError`] if `annex` is not in 1..=5 and `revenue` is
/// positive; non-positive revenue short-circuits to zero before the annex is
/// looked at, matching the published calculation's order of checks.
pub fn tax_amount(revenue: Decimal, annex: u8) -> Result<Decimal, UnknownAnnexError> {
    if revenue <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    let row = schedule::resolve_bracket(revenue, annex)?;
    Ok(tax_amount_for(revenue, row))
}

/// Actual percentage of revenue paid after the deduction, under the given
/// annex number.
///
/// Returns zero for non-positive revenue (no revenue, no tax — and no
/// division by zero). Within the published schedule the result never exceeds
/// the nominal rate.
///
/// # Errors
///
/// Returns [`UnknownAnnexError`] if `annex` is not in 1..=5 and `revenue` is
/// positive.
pub fn effective_rate(revenue: Decimal, annex: u8) -> Result<Decimal, UnknownAnnexError> {
    if revenue <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    let row = schedule::resolve_bracket(revenue, annex)?;
    Ok(effective_rate_for(revenue, row))
}

fn tax_amount_for(revenue: Decimal, row: BracketRow) -> Decimal {
    if revenue <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let amount = gross_minus_deduction(revenue, row);
    if amount < Decimal::ZERO {
        warn!(
            revenue = %revenue,
            nominal_rate = %row.nominal_rate,
            deduction = %row.deduction,
            "deduction exceeds gross nominal tax; negative amount preserved"
        );
    }

    round_half_up(amount)
}

fn effective_rate_for(revenue: Decimal, row: BracketRow) -> Decimal {
    if revenue <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let amount = gross_minus_deduction(revenue, row);
    round_rate_half_up(amount / revenue * Decimal::ONE_HUNDRED)
}

fn gross_minus_deduction(revenue: Decimal, row: BracketRow) -> Decimal {
    revenue * row.nominal_rate / Decimal::ONE_HUNDRED - row.deduction
}
