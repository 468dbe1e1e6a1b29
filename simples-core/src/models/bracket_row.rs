use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of an annex's progressive bracket schedule.
///
/// A row pairs the published nominal rate for a revenue tier with the fixed
/// deduction that makes the schedule progressive rather than flat-bracket:
/// the deduction offsets the nominal rate so the effective rate rises
/// continuously with revenue instead of jumping at tier boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketRow {
    /// Nominal rate as a percentage, e.g. `7.3` for 7.3%.
    pub nominal_rate: Decimal,

    /// Fixed currency amount subtracted after applying the nominal rate
    /// ("parcela a deduzir").
    pub deduction: Decimal,
}
