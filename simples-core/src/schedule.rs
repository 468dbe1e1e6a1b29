//! The government-published Simples Nacional bracket schedule.
//!
//! Five annexes share the same six ascending revenue ceilings; each annex
//! pairs every tier with its own nominal rate and deduction. The table is
//! compile-time constant data transcribed from the published law (Lei
//! Complementar 123/2006, Anexos I–V) and is never rebuilt or mutated.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use simples_core::schedule::resolve_bracket;
//!
//! // R$ 200.000,00 of trailing-twelve-month revenue falls in the second
//! // tier of Anexo I: 7.3% nominal with R$ 5.940,00 to deduct.
//! let row = resolve_bracket(dec!(200000), 1).unwrap();
//!
//! assert_eq!(row.nominal_rate, dec!(7.3));
//! assert_eq!(row.deduction, dec!(5940));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use crate::models::{Annex, BracketRow, UnknownAnnexError};

/// Number of revenue tiers in every annex's schedule.
pub const TIER_COUNT: usize = 6;

/// The six revenue ceilings (RBT12 upper bounds) shared by all annexes,
/// in ascending order. The last entry is the Simples Nacional participation
/// ceiling of R$ 4.800.000,00.
pub const REVENUE_CEILINGS: [Decimal; TIER_COUNT] = [
    dec!(180000),
    dec!(360000),
    dec!(720000),
    dec!(1800000),
    dec!(3600000),
    dec!(4800000),
];

/// Published (nominal rate %, deduction) rows, one sub-array per annex,
/// one entry per tier. Within each annex both columns are non-decreasing
/// across tiers.
const SCHEDULE: [[BracketRow; TIER_COUNT]; 5] = [
    // Anexo I — comércio
    [
        BracketRow { nominal_rate: dec!(4.0), deduction: dec!(0) },
        BracketRow { nominal_rate: dec!(7.3), deduction: dec!(5940) },
        BracketRow { nominal_rate: dec!(9.5), deduction: dec!(13860) },
        BracketRow { nominal_rate: dec!(10.7), deduction: dec!(22500) },
        BracketRow { nominal_rate: dec!(14.3), deduction: dec!(87300) },
        BracketRow { nominal_rate: dec!(19.0), deduction: dec!(378000) },
    ],
    // Anexo II — indústria
    [
        BracketRow { nominal_rate: dec!(4.5), deduction: dec!(0) },
        BracketRow { nominal_rate: dec!(7.8), deduction: dec!(5940) },
        BracketRow { nominal_rate: dec!(10.0), deduction: dec!(13860) },
        BracketRow { nominal_rate: dec!(11.2), deduction: dec!(22500) },
        BracketRow { nominal_rate: dec!(14.7), deduction: dec!(85500) },
        BracketRow { nominal_rate: dec!(30.0), deduction: dec!(720000) },
    ],
    // Anexo III — serviços
    [
        BracketRow { nominal_rate: dec!(6.0), deduction: dec!(0) },
        BracketRow { nominal_rate: dec!(11.2), deduction: dec!(9360) },
        BracketRow { nominal_rate: dec!(13.5), deduction: dec!(17640) },
        BracketRow { nominal_rate: dec!(16.0), deduction: dec!(35640) },
        BracketRow { nominal_rate: dec!(21.0), deduction: dec!(125640) },
        BracketRow { nominal_rate: dec!(33.0), deduction: dec!(648000) },
    ],
    // Anexo IV — serviços
    [
        BracketRow { nominal_rate: dec!(4.5), deduction: dec!(0) },
        BracketRow { nominal_rate: dec!(9.0), deduction: dec!(8100) },
        BracketRow { nominal_rate: dec!(10.2), deduction: dec!(12420) },
        BracketRow { nominal_rate: dec!(14.0), deduction: dec!(39780) },
        BracketRow { nominal_rate: dec!(22.0), deduction: dec!(183780) },
        BracketRow { nominal_rate: dec!(33.0), deduction: dec!(828000) },
    ],
    // Anexo V — serviços
    [
        BracketRow { nominal_rate: dec!(15.5), deduction: dec!(0) },
        BracketRow { nominal_rate: dec!(18.0), deduction: dec!(4500) },
        BracketRow { nominal_rate: dec!(19.5), deduction: dec!(9900) },
        BracketRow { nominal_rate: dec!(20.5), deduction: dec!(17100) },
        BracketRow { nominal_rate: dec!(23.0), deduction: dec!(62100) },
        BracketRow { nominal_rate: dec!(30.5), deduction: dec!(540000) },
    ],
];

/// Looks up the applicable bracket row for a revenue figure under one annex.
///
/// Tier selection is a binary search over the sorted ceilings: the first tier
/// whose ceiling is at least `revenue` applies, so a revenue exactly equal to
/// a ceiling uses that tier, not the next. Revenue above the top ceiling is
/// not rejected; it clamps to the last row (callers wanting strict range
/// validation must add it themselves). Zero and negative revenue resolve to
/// the first tier.
pub fn bracket_for(revenue: Decimal, annex: Annex) -> BracketRow {
    let tier = REVENUE_CEILINGS.partition_point(|ceiling| revenue > *ceiling);
    if tier == TIER_COUNT {
        warn!(
            revenue = %revenue,
            ceiling = %REVENUE_CEILINGS[TIER_COUNT - 1],
            annex = %annex,
            "revenue above the participation ceiling; clamping to the top bracket"
        );
        return SCHEDULE[annex.index()][TIER_COUNT - 1];
    }
    SCHEDULE[annex.index()][tier]
}

/// Looks up the applicable bracket row by statutory annex number.
///
/// Same semantics as [`bracket_for`], with the annex number validated first.
///
/// # Errors
///
/// Returns [`UnknownAnnexError`] if `annex` is not in 1..=5. Revenue is never
/// range-validated here.
pub fn resolve_bracket(revenue: Decimal, annex: u8) -> Result<BracketRow, UnknownAnnexError> {
    let annex = Annex::from_number(annex)?;
    Ok(bracket_for(revenue, annex))
}
