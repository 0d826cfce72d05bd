//! Holiday date resolution for a set of countries.
//!
//! A [`Holidays`] container maps dates to holiday names and fills itself a year at
//! a time from a [`HolidayRules`] implementation, either one of the bundled
//! [`countries`] or a custom one.

pub mod calendars;
mod country;
pub mod countries;
mod data;
mod date;
pub mod easter;
mod holidays;
mod key;
pub mod names;
pub mod observed;
mod options;
mod query;
mod rules;
mod weekday;

pub use country::{country_holidays, supported_countries, Country};
pub use date::{days_in_month, is_leap_year, Date};
pub use easter::{easter, EasterMethod};
pub use holidays::{HolidayUpdate, Holidays};
pub use key::{parse_date, DateKey, IntoDate};
pub use names::NameLookup;
pub use observed::{ObservedRule, Shift};
pub use options::{Category, HolidaysOptions};
pub use rules::{observed_name, HolidayRules, Populate};
pub use weekday::{nth_weekday_from, nth_weekday_of_month, Weekday};

/// Whether `key` is a holiday in `country`, with default options.
pub fn contains(country: Country, key: impl IntoDate) -> Result<bool, Error> {
    country.holidays(HolidaysOptions::new())?.contains(key)
}

/// Holiday names at `key` in `country`, with default options.
pub fn get(country: Country, key: impl IntoDate) -> Result<Option<String>, Error> {
    Ok(country
        .holidays(HolidaysOptions::new())?
        .get(key)?
        .map(String::from))
}

/// Error states the holiday crate might encounter.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A key could not be read as a calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// A dynamically typed key has no date meaning.
    #[error("cannot convert a value of type {0} to a date")]
    UnsupportedKeyType(&'static str),
    #[error("{0} is not a holiday")]
    KeyNotFound(Date),
    #[error("no holiday named {0:?}")]
    HolidayNameNotFound(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The rules cannot represent this year at all.
    #[error("holidays are not available for {0}")]
    YearNotAvailable(i32),
    /// Unknown code, or the country's feature is disabled.
    #[error("country {0:?} is not available")]
    CountryNotAvailable(String),
    #[error("subdivision {0:?} is not available")]
    SubdivisionNotAvailable(String),
    #[error("category {0} is not supported")]
    CategoryNotSupported(Category),
    /// Conversion to another date format is not supported.
    #[error("date is too large for conversion")]
    DateTooLarge,
}
