//! Core domain logic for Brazilian Simples Nacional simplified taxation.
//!
//! Given a trailing-twelve-month gross revenue (RBT12) and an annex, this
//! crate resolves the applicable row of the published progressive bracket
//! schedule and derives the nominal rate, deduction, effective rate and tax
//! amount. Everything is pure computation over compile-time constant data;
//! there is no I/O, no persistence and no shared mutable state, so every
//! entry point is safe to call from any number of threads.
//!
//! Presentation concerns (input bounds, currency formatting, rendering) are
//! deliberately left to callers.

pub mod calculations;
pub mod models;
pub mod schedule;

pub use calculations::simples::{TaxAssessment, effective_rate, tax_amount};
pub use models::{Annex, BracketRow, Category, UnknownAnnexError};
pub use schedule::{REVENUE_CEILINGS, bracket_for, resolve_bracket};
