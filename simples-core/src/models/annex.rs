use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when an annex number falls outside the statutory range 1–5.
///
/// Annex numbers only ever originate from the static [`Category`] mapping, so
/// in correct usage this error is unreachable; it surfaces programming or
/// configuration defects, never user input problems.
///
/// [`Category`]: crate::models::Category
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown annex {0}, expected 1 through 5")]
pub struct UnknownAnnexError(pub u8);

/// One of the five progressive bracket schedules ("Anexos") published for the
/// Simples Nacional regime.
///
/// Each annex carries its own six-tier table of nominal rates and deductions;
/// the tiers themselves share the revenue ceilings in
/// [`REVENUE_CEILINGS`](crate::schedule::REVENUE_CEILINGS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Annex {
    /// Anexo I — commerce.
    One,
    /// Anexo II — industry.
    Two,
    /// Anexo III — services (general).
    Three,
    /// Anexo IV — services (construction, advisory and similar).
    Four,
    /// Anexo V — services subject to the "fator R" regime.
    Five,
}

impl Annex {
    /// All five annexes in ascending statutory order.
    pub const ALL: [Annex; 5] = [
        Annex::One,
        Annex::Two,
        Annex::Three,
        Annex::Four,
        Annex::Five,
    ];

    /// The statutory annex number, 1 through 5.
    pub fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// Resolves a statutory annex number.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownAnnexError`] if `number` is not in 1..=5.
    ///
    /// # Example
    ///
    /// ```
    /// use simples_core::{Annex, UnknownAnnexError};
    ///
    /// assert_eq!(Annex::from_number(3), Ok(Annex::Three));
    /// assert_eq!(Annex::from_number(6), Err(UnknownAnnexError(6)));
    /// ```
    pub fn from_number(number: u8) -> Result<Self, UnknownAnnexError> {
        match number {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            other => Err(UnknownAnnexError(other)),
        }
    }

    /// The published Portuguese name, e.g. `"Anexo III"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::One => "Anexo I",
            Self::Two => "Anexo II",
            Self::Three => "Anexo III",
            Self::Four => "Anexo IV",
            Self::Five => "Anexo V",
        }
    }

    /// Zero-based row index into the bracket schedule table.
    pub(crate) fn index(&self) -> usize {
        (self.number() - 1) as usize
    }
}

impl fmt::Display for Annex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_number_accepts_the_statutory_range() {
        for annex in Annex::ALL {
            let result = Annex::from_number(annex.number());

            assert_eq!(result, Ok(annex));
        }
    }

    #[test]
    fn from_number_rejects_zero() {
        let result = Annex::from_number(0);

        assert_eq!(result, Err(UnknownAnnexError(0)));
    }

    #[test]
    fn from_number_rejects_six() {
        let result = Annex::from_number(6);

        assert_eq!(result, Err(UnknownAnnexError(6)));
    }

    #[test]
    fn all_is_in_ascending_order() {
        let numbers: Vec<u8> = Annex::ALL.iter().map(Annex::number).collect();

        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn display_uses_the_published_name() {
        assert_eq!(Annex::One.to_string(), "Anexo I");
        assert_eq!(Annex::Five.to_string(), "Anexo V");
    }

    #[test]
    fn unknown_annex_error_names_the_offending_number() {
        let error = UnknownAnnexError(7);

        assert_eq!(error.to_string(), "unknown annex 7, expected 1 through 5");
    }
}
