//! Holiday rules of the supported countries.

use crate::{
    date::Date,
    observed::{ObservedRule, SAT_TO_PREV_FRI_SUN_TO_NEXT_MON},
    rules::{observed_name, Populate},
    weekday::Weekday,
    Error,
};

#[cfg(feature = "CA")]
mod canada;
#[cfg(feature = "CN")]
mod china;
#[cfg(feature = "MY")]
mod malaysia;
#[cfg(feature = "MX")]
mod mexico;
#[cfg(feature = "SG")]
mod singapore;
#[cfg(feature = "TH")]
mod thailand;
#[cfg(feature = "UA")]
mod ukraine;
#[cfg(feature = "US")]
mod united_states;

#[cfg(feature = "CA")]
pub use canada::Canada;
#[cfg(feature = "CN")]
pub use china::China;
#[cfg(feature = "MY")]
pub use malaysia::Malaysia;
#[cfg(feature = "MX")]
pub use mexico::Mexico;
#[cfg(feature = "SG")]
pub use singapore::Singapore;
#[cfg(feature = "TH")]
pub use thailand::Thailand;
#[cfg(feature = "UA")]
pub use ukraine::Ukraine;
#[cfg(feature = "US")]
pub use united_states::UnitedStates;

/// Adds `name` on `date` together with its observed entry under `rule`.
#[allow(dead_code)]
pub(crate) fn add_with_observed(
    cx: &mut Populate<'_>,
    date: Date,
    name: &str,
    rule: ObservedRule,
) -> Result<Date, Error> {
    let date = cx.add(date, name)?;
    cx.add_observed_named(date, name, rule);
    Ok(date)
}

/// New Year's Day observed on the closest weekday.
///
/// A Saturday New Year is observed on Friday, December 31 of the previous year,
/// which is added without populating that year. The Friday before next year's
/// Saturday New Year is added to this year as well.
#[allow(dead_code)]
pub(crate) fn new_years_day(cx: &mut Populate<'_>, name: &str) -> Result<Date, Error> {
    let date = cx.add_ymd(1, 1, name)?;
    if cx.observed() {
        cx.add_observed_named(date, name, SAT_TO_PREV_FRI_SUN_TO_NEXT_MON);
        let eve = Date::from_ymd(cx.year(), 12, 31);
        if eve.weekday() == Weekday::Friday {
            cx.add_without_expand(eve, &observed_name(name));
        }
    }
    Ok(date)
}
