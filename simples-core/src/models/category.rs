use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Annex;

/// A business-activity classification that determines which annexes apply.
///
/// The mapping is static configuration taken from the published regime:
/// commerce falls under Anexo I, industry under Anexo II, and everything else
/// under one of Anexos III–V depending on the activity. Because that last
/// determination needs facts this crate does not model (payroll ratio,
/// activity codes), [`Category::Other`] maps to all three service annexes and
/// the caller presents one result per annex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Comércio — Anexo I.
    Commerce,
    /// Indústria — Anexo II.
    Industry,
    /// Outros — Anexos III, IV and V.
    Other,
    /// Todos os Anexos — every schedule, for side-by-side comparison.
    All,
}

impl Category {
    /// All categories in numeric code order (0..=3).
    pub const ALL: [Category; 4] = [
        Category::Commerce,
        Category::Industry,
        Category::Other,
        Category::All,
    ];

    /// Resolves the numeric category code used by callers (0..=3).
    ///
    /// The category domain is closed, so this is the only place a bad code
    /// can appear; it returns `None` rather than an error.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Commerce),
            1 => Some(Self::Industry),
            2 => Some(Self::Other),
            3 => Some(Self::All),
            _ => None,
        }
    }

    /// The numeric category code, 0..=3.
    pub fn code(&self) -> u8 {
        match self {
            Self::Commerce => 0,
            Self::Industry => 1,
            Self::Other => 2,
            Self::All => 3,
        }
    }

    /// The Portuguese display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Commerce => "Comércio",
            Self::Industry => "Indústria",
            Self::Other => "Outros",
            Self::All => "Todos os Anexos",
        }
    }

    /// The annexes this category is assessed under, in ascending order.
    ///
    /// Total over the closed category domain; there is no error path.
    ///
    /// # Example
    ///
    /// ```
    /// use simples_core::{Annex, Category};
    ///
    /// assert_eq!(
    ///     Category::Other.annexes(),
    ///     &[Annex::Three, Annex::Four, Annex::Five],
    /// );
    /// ```
    pub fn annexes(&self) -> &'static [Annex] {
        match self {
            Self::Commerce => &[Annex::One],
            Self::Industry => &[Annex::Two],
            Self::Other => &[Annex::Three, Annex::Four, Annex::Five],
            Self::All => &Annex::ALL,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn commerce_maps_to_anexo_one_only() {
        assert_eq!(Category::Commerce.annexes(), &[Annex::One]);
    }

    #[test]
    fn industry_maps_to_anexo_two_only() {
        assert_eq!(Category::Industry.annexes(), &[Annex::Two]);
    }

    #[test]
    fn other_maps_to_the_three_service_annexes() {
        assert_eq!(
            Category::Other.annexes(),
            &[Annex::Three, Annex::Four, Annex::Five],
        );
    }

    #[test]
    fn all_maps_to_every_annex() {
        assert_eq!(Category::All.annexes(), &Annex::ALL);
    }

    #[test]
    fn from_code_round_trips_every_category() {
        for category in Category::ALL {
            let result = Category::from_code(category.code());

            assert_eq!(result, Some(category));
        }
    }

    #[test]
    fn from_code_rejects_out_of_range_codes() {
        assert_eq!(Category::from_code(4), None);
        assert_eq!(Category::from_code(255), None);
    }

    #[test]
    fn labels_match_the_published_names() {
        assert_eq!(Category::Commerce.label(), "Comércio");
        assert_eq!(Category::Industry.label(), "Indústria");
        assert_eq!(Category::Other.label(), "Outros");
        assert_eq!(Category::All.label(), "Todos os Anexos");
    }
}
