mod annex;
mod bracket_row;
mod category;

pub use annex::{Annex, UnknownAnnexError};
pub use bracket_row::BracketRow;
pub use category::Category;
