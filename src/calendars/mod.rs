//! Non-Gregorian calendar conversions used by holiday rules.
//!
//! All converters cover a fixed range of years and answer `None` (or an empty
//! list) outside it, so a rule can skip the holiday for that year.

pub mod chinese;
pub mod islamic;
pub mod thai;

pub use islamic::Observance;
