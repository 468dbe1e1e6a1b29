//! Brazilian display formatting and revenue input parsing.
//!
//! Everything here is presentation policy layered on top of the core's
//! numeric contract: money renders as `R$ 1.234,56` (dot for thousands,
//! comma for decimals) and rates as `4,33%`.

use rust_decimal::{Decimal, RoundingStrategy};
use simples_core::REVENUE_CEILINGS;

/// The Simples Nacional participation ceiling, used as the input bound.
pub const REVENUE_CAP: Decimal = REVENUE_CEILINGS[REVENUE_CEILINGS.len() - 1];

/// Formats a monetary amount in Brazilian convention, e.g. `R$ 1.234,56`.
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("R$ {sign}{},{frac_part}", group_thousands(int_part))
}

/// Formats a percentage rate in Brazilian convention, e.g. `4,33%`.
pub fn format_percent(rate: Decimal) -> String {
    let rounded = rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}%", rounded).replace('.', ",")
}

/// Inserts dots as thousands separators into a bare digit string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Parses a revenue argument and enforces the input bound [0, 4 800 000].
///
/// Accepts a comma thousands separator (`1,234.56`). The bound is caller
/// policy: the core itself accepts any revenue and clamps over-limit values
/// to the top bracket, which is not what an interactive user expects.
pub fn parse_revenue(s: &str) -> Result<Decimal, String> {
    let normalized = s.trim().replace(',', "");
    let revenue: Decimal = normalized
        .parse()
        .map_err(|e| format!("invalid revenue '{s}': {e}"))?;
    if revenue < Decimal::ZERO {
        return Err(format!("revenue must not be negative, got {}", format_brl(revenue)));
    }
    if revenue > REVENUE_CAP {
        return Err(format!(
            "revenue exceeds the Simples Nacional ceiling of {}",
            format_brl(REVENUE_CAP),
        ));
    }
    Ok(revenue)
}
