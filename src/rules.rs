use std::{collections::BTreeSet, fmt};

use log::trace;

use crate::{
    calendars::islamic::{self, Observance},
    date::Date,
    easter::{easter, EasterMethod},
    names,
    observed::{Observation, ObservedRule},
    options::Category,
    weekday::{nth_weekday_of_month, Weekday},
    Error, Holidays,
};

pub(crate) const SAT_SUN: &[Weekday] = &[Weekday::Saturday, Weekday::Sunday];

const OBSERVED_LABEL: &str = " (Observed)";
const ESTIMATED_LABEL: &str = " (estimated)";
const OBSERVED_ESTIMATED_LABEL: &str = " (Observed, estimated)";

/// Holiday rules of a country, or of any custom calendar.
///
/// Implementors fill one year at a time through [`Populate`]; the container
/// decides when a year needs populating.
pub trait HolidayRules: Send + Sync + fmt::Debug {
    /// ISO 3166-1 alpha-2 code, empty for calendars that are not a country.
    fn code(&self) -> &str {
        ""
    }

    fn populate(&self, cx: &mut Populate<'_>) -> Result<(), Error>;

    fn subdivisions(&self) -> &'static [&'static str] {
        &[]
    }

    /// `(alias, code)` pairs accepted in place of a subdivision code.
    fn subdivision_aliases(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    fn default_subdivision(&self) -> Option<&'static str> {
        None
    }

    fn supported_categories(&self) -> &'static [Category] {
        &[Category::Public]
    }

    /// Non-working weekdays in `year`.
    fn weekend(&self, _subdivision: Option<&str>, _year: i32) -> &'static [Weekday] {
        SAT_SUN
    }
}

/// Resolves a requested subdivision (code or alias) against a rule module.
pub(crate) fn resolve_subdivision(
    rules: &dyn HolidayRules,
    requested: Option<&str>,
) -> Result<Option<String>, Error> {
    let Some(requested) = requested else {
        return Ok(rules.default_subdivision().map(String::from));
    };

    if let Some(code) = rules.subdivisions().iter().find(|it| **it == requested) {
        return Ok(Some(code.to_string()));
    }
    rules
        .subdivision_aliases()
        .iter()
        .find(|(alias, _)| *alias == requested)
        .map(|(_, code)| Some(code.to_string()))
        .ok_or_else(|| Error::SubdivisionNotAvailable(requested.to_string()))
}

/// Write access to a container while one year is being populated.
pub struct Populate<'a> {
    holidays: &'a mut Holidays,
    year: i32,
}

impl<'a> Populate<'a> {
    pub(crate) fn new(holidays: &'a mut Holidays, year: i32) -> Self {
        Populate { holidays, year }
    }

    /// Year being populated.
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub fn observed(&self) -> bool {
        self.holidays.observed
    }

    pub fn subdivision(&self) -> Option<&str> {
        self.holidays.subdivision.first().map(String::as_str)
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.holidays.categories.contains(&category)
    }

    pub fn contains(&self, date: Date) -> bool {
        self.holidays.entries.contains_key(&date)
    }

    /// Names stored at `date`, without triggering expansion.
    pub fn get_list(&self, date: Date) -> Vec<String> {
        self.holidays
            .entries
            .get(&date)
            .map(|it| names::split(it).map(String::from).collect())
            .unwrap_or_default()
    }

    pub fn is_weekend(&self, date: Date) -> bool {
        self.holidays.is_weekend(date)
    }

    /// Adds a holiday; a date in another year is resolved like any lookup key.
    pub fn add(&mut self, date: Date, name: &str) -> Result<Date, Error> {
        self.holidays.insert(date, name)
    }

    pub fn add_ymd(&mut self, month: u32, day: u32, name: &str) -> Result<Date, Error> {
        let date = Date::try_from_ymd(self.year, month, day)?;
        self.add(date, name)
    }

    /// Adds a holiday from a calendar lookup; `None` (year outside the calendar) adds nothing.
    pub fn add_opt(&mut self, date: Option<Date>, name: &str) -> Result<Option<Date>, Error> {
        date.map(|it| self.add(it, name)).transpose()
    }

    /// Adds a holiday without expanding the year it falls in.
    pub fn add_without_expand(&mut self, date: Date, name: &str) -> Date {
        if date.year() != self.year {
            trace!("{name} spills over from {} into {date}", self.year);
        }
        self.holidays.merge_entry(date, name);
        date
    }

    pub fn remove(&mut self, date: Date) -> Option<String> {
        self.holidays.entries.remove(&date)
    }

    /// Applies `rule` to every holiday stored at `date`.
    ///
    /// Does nothing unless observed days are enabled. Returns the observed date
    /// when the holidays moved.
    pub fn add_observed(&mut self, date: Date, rule: ObservedRule) -> Option<Date> {
        let names = self.get_list(date);
        self.observe(date, &names, rule)
    }

    /// Applies `rule` to a single holiday `name` at `date`.
    pub fn add_observed_named(&mut self, date: Date, name: &str, rule: ObservedRule) -> Option<Date> {
        self.observe(date, &[name.to_string()], rule)
    }

    /// Applies `rule` to each date in `dates`, in date order.
    ///
    /// With `per_name`, every holiday sharing a date gets its own observed entry
    /// and workday search.
    pub fn observe_all(&mut self, dates: &BTreeSet<Date>, rule: ObservedRule, per_name: bool) {
        for date in dates {
            if per_name {
                for name in self.get_list(*date) {
                    self.add_observed_named(*date, &name, rule);
                }
            } else {
                self.add_observed(*date, rule);
            }
        }
    }

    fn observe(&mut self, date: Date, names: &[String], rule: ObservedRule) -> Option<Date> {
        if !self.observed() || names.is_empty() {
            return None;
        }

        let outcome = rule.apply(date, |it| self.contains(it) || self.is_weekend(it));
        match outcome {
            Observation::Unchanged => None,
            Observation::Dropped => {
                self.remove(date);
                None
            }
            Observation::Moved(observed) => {
                for name in names {
                    self.add_without_expand(observed, &observed_name(name));
                }
                Some(observed)
            }
        }
    }

    /// Easter Sunday of the year being populated.
    pub fn easter(&self, method: EasterMethod) -> Result<Date, Error> {
        easter(self.year, method).ok_or(Error::YearNotAvailable(self.year))
    }

    /// `n`-th `weekday` of `month` in the year being populated.
    pub fn nth_weekday(&self, n: i32, weekday: Weekday, month: u32) -> Result<Date, Error> {
        nth_weekday_of_month(n, weekday, month, self.year)
    }

    /// Adds an Islamic observance `days_delta` days after each of its dates, keeping
    /// the shifted dates that fall in this year.
    ///
    /// A shift may carry a date of the neighbouring year into this one (a second
    /// day after a December 31 observance). Dates taken from the converter
    /// instead of the static table are labelled as estimated unless the container
    /// turned that off.
    pub fn islamic(&mut self, observance: Observance, name: &str, days_delta: i64) -> Vec<Date> {
        let show_estimated = self.holidays.islamic_show_estimated;
        let year = self.year;
        let neighbour = match days_delta.signum() {
            1 => year.checked_sub(1),
            -1 => year.checked_add(1),
            _ => None,
        };
        neighbour
            .into_iter()
            .chain([year])
            .flat_map(|it| islamic::dates(it, observance))
            .map(|(date, estimated)| (date.add_days(days_delta), estimated))
            .filter(|(date, _)| date.year() == year)
            .map(|(date, estimated)| {
                if estimated && show_estimated {
                    self.add_without_expand(date, &format!("{name}{ESTIMATED_LABEL}"))
                } else {
                    self.add_without_expand(date, name)
                }
            })
            .collect()
    }
}

/// Name of the observed-day entry for `name`.
pub fn observed_name(name: &str) -> String {
    match name.strip_suffix(ESTIMATED_LABEL) {
        Some(base) => format!("{base}{OBSERVED_ESTIMATED_LABEL}"),
        None => format!("{name}{OBSERVED_LABEL}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_labels() {
        assert_eq!(observed_name("Canada Day"), "Canada Day (Observed)");
        assert_eq!(
            observed_name("Hari Raya Haji (estimated)"),
            "Hari Raya Haji (Observed, estimated)"
        );
    }
}
