use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    iter::Sum,
    ops::Add,
    sync::Arc,
};

use log::{debug, trace};

use crate::{
    date::Date,
    key::IntoDate,
    names::{self, NameLookup},
    options::{Category, HolidaysOptions},
    rules::{resolve_subdivision, HolidayRules, Populate, SAT_SUN},
    Error,
};

/// Holidays of one calendar, populated a year at a time.
///
/// Lookups take `&mut self`: referencing a date in a year that was not populated
/// yet populates it first, unless expansion is turned off.
#[derive(Clone)]
pub struct Holidays {
    pub(crate) rules: Option<Arc<dyn HolidayRules>>,
    pub(crate) entries: BTreeMap<Date, String>,
    pub(crate) years: BTreeSet<i32>,
    pub(crate) expand: bool,
    pub(crate) observed: bool,
    pub(crate) country: Vec<String>,
    pub(crate) subdivision: Vec<String>,
    pub(crate) categories: BTreeSet<Category>,
    pub(crate) islamic_show_estimated: bool,
}

/// Argument of [`Holidays::update`].
#[derive(Debug, Clone)]
pub enum HolidayUpdate<K> {
    /// Each date gets its own name.
    Mapping(Vec<(K, String)>),
    /// Each date is named `"Holiday"`.
    Sequence(Vec<K>),
    /// A single date named `"Holiday"`.
    Single(K),
}

const DEFAULT_NAME: &str = "Holiday";

impl Holidays {
    pub fn new<R: HolidayRules + 'static>(rules: R, options: HolidaysOptions) -> Result<Self, Error> {
        Self::from_rules(Arc::new(rules), options)
    }

    pub fn from_rules(rules: Arc<dyn HolidayRules>, options: HolidaysOptions) -> Result<Self, Error> {
        let subdivision = resolve_subdivision(rules.as_ref(), options.subdivision.as_deref())?;

        let categories = options.effective_categories();
        if let Some(category) = categories
            .iter()
            .find(|it| !rules.supported_categories().contains(it))
        {
            return Err(Error::CategoryNotSupported(*category));
        }

        let country = match rules.code() {
            "" => Vec::new(),
            code => vec![code.to_string()],
        };

        let mut holidays = Holidays {
            rules: Some(rules),
            entries: BTreeMap::new(),
            years: BTreeSet::new(),
            expand: options.expand,
            observed: options.observed,
            country,
            subdivision: subdivision.into_iter().collect(),
            categories,
            islamic_show_estimated: options.islamic_show_estimated,
        };
        for year in options.years {
            holidays.populate_year(year)?;
        }
        Ok(holidays)
    }

    /// Container without rules, the neutral element of [`Holidays::combine`].
    pub fn empty() -> Self {
        Holidays {
            rules: None,
            entries: BTreeMap::new(),
            years: BTreeSet::new(),
            expand: false,
            observed: false,
            country: Vec::new(),
            subdivision: Vec::new(),
            categories: BTreeSet::from([Category::Public]),
            islamic_show_estimated: true,
        }
    }

    /// Populates `year` unless it already is.
    ///
    /// A failing rule module leaves the container as it was before the call.
    pub fn populate_year(&mut self, year: i32) -> Result<(), Error> {
        if self.years.contains(&year) {
            return Ok(());
        }
        let Some(rules) = self.rules.clone() else {
            self.years.insert(year);
            return Ok(());
        };

        debug!("populating {} holidays for {year}", self.label());
        let entries = self.entries.clone();
        let years = self.years.clone();
        // Inserted first so lookups made while populating do not recurse into this year.
        self.years.insert(year);

        if let Err(err) = rules.populate(&mut Populate::new(self, year)) {
            debug!("populating {} for {year} failed: {err}", self.label());
            self.entries = entries;
            self.years = years;
            return Err(err);
        }
        Ok(())
    }

    fn label(&self) -> String {
        if self.country.is_empty() {
            "custom".to_string()
        } else {
            self.country.join("+")
        }
    }

    fn resolve(&mut self, key: impl IntoDate) -> Result<Date, Error> {
        let date = key.into_date()?;
        if self.expand && !self.years.contains(&date.year()) {
            self.populate_year(date.year())?;
        }
        Ok(date)
    }

    /// Merges `name` into the entry at `date`, no expansion.
    pub(crate) fn merge_entry(&mut self, date: Date, name: &str) {
        match self.entries.get_mut(&date) {
            None => {
                self.entries.insert(date, name.to_string());
            }
            Some(existing) => {
                if let Some(merged) = names::merge(existing, name) {
                    trace!("merging {name} into {date}: {merged}");
                    *existing = merged;
                }
            }
        }
    }

    pub fn contains(&mut self, key: impl IntoDate) -> Result<bool, Error> {
        let date = self.resolve(key)?;
        Ok(self.entries.contains_key(&date))
    }

    pub fn get(&mut self, key: impl IntoDate) -> Result<Option<&str>, Error> {
        let date = self.resolve(key)?;
        Ok(self.entries.get(&date).map(String::as_str))
    }

    pub fn get_or<'a>(&'a mut self, key: impl IntoDate, default: &'a str) -> Result<&'a str, Error> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Names at `key`, failing with [`Error::KeyNotFound`] when it is not a holiday.
    pub fn name(&mut self, key: impl IntoDate) -> Result<&str, Error> {
        let date = self.resolve(key)?;
        self.entries
            .get(&date)
            .map(String::as_str)
            .ok_or(Error::KeyNotFound(date))
    }

    /// Adds a holiday, merging it with holidays already on that date.
    pub fn insert(&mut self, key: impl IntoDate, name: impl AsRef<str>) -> Result<Date, Error> {
        let date = self.resolve(key)?;
        self.merge_entry(date, name.as_ref());
        Ok(date)
    }

    pub fn update<K: IntoDate>(&mut self, update: HolidayUpdate<K>) -> Result<(), Error> {
        match update {
            HolidayUpdate::Mapping(items) => {
                for (key, name) in items {
                    self.insert(key, name)?;
                }
            }
            HolidayUpdate::Sequence(keys) => {
                for key in keys {
                    self.insert(key, DEFAULT_NAME)?;
                }
            }
            HolidayUpdate::Single(key) => {
                self.insert(key, DEFAULT_NAME)?;
            }
        }
        Ok(())
    }

    pub fn pop(&mut self, key: impl IntoDate) -> Result<String, Error> {
        let date = self.resolve(key)?;
        self.entries.remove(&date).ok_or(Error::KeyNotFound(date))
    }

    pub fn pop_or(&mut self, key: impl IntoDate, default: impl Into<String>) -> Result<String, Error> {
        let date = self.resolve(key)?;
        Ok(self.entries.remove(&date).unwrap_or_else(|| default.into()))
    }

    /// Individual names at `key`; empty when it is not a holiday.
    pub fn get_list(&mut self, key: impl IntoDate) -> Result<Vec<String>, Error> {
        Ok(self
            .get(key)?
            .map(|it| names::split(it).map(String::from).collect())
            .unwrap_or_default())
    }

    /// Dates of the populated years carrying a holiday that matches `name`.
    ///
    /// With `split_multiple_names`, each name of a shared date is compared on its own.
    pub fn get_named(&self, name: &str, lookup: NameLookup, split_multiple_names: bool) -> Vec<Date> {
        self.entries
            .iter()
            .filter(|(_, names)| {
                if split_multiple_names {
                    names::split(names).any(|it| lookup.matches(it, name))
                } else {
                    lookup.matches(names, name)
                }
            })
            .map(|(date, _)| *date)
            .collect()
    }

    /// Removes every holiday matching `name` (case-insensitive containment) and
    /// returns the dates it was found on.
    ///
    /// Other holidays sharing those dates stay. A query containing the name
    /// separator only removes dates whose full name string matches it.
    pub fn pop_named(&mut self, name: &str) -> Result<Vec<Date>, Error> {
        let exact = name.contains(names::SEPARATOR);
        let dates = self.get_named(name, NameLookup::IContains, !exact);
        if dates.is_empty() {
            return Err(Error::HolidayNameNotFound(name.to_string()));
        }

        let query = name.to_lowercase();
        for date in &dates {
            let Some(stored) = self.entries.remove(date) else {
                continue;
            };
            if exact {
                continue;
            }
            let rest: Vec<&str> = names::split(&stored)
                .filter(|it| !it.to_lowercase().contains(&query))
                .collect();
            if !rest.is_empty() {
                self.entries.insert(*date, rest.join(names::SEPARATOR));
            }
        }
        Ok(dates)
    }

    pub(crate) fn weekend(&self, year: i32) -> &'static [crate::weekday::Weekday] {
        match &self.rules {
            Some(rules) => rules.weekend(self.subdivision.first().map(String::as_str), year),
            None => SAT_SUN,
        }
    }

    pub fn is_weekend(&self, date: Date) -> bool {
        self.weekend(date.year()).contains(&date.weekday())
    }

    /// Neither a weekend day nor a holiday.
    pub fn is_workday(&mut self, key: impl IntoDate) -> Result<bool, Error> {
        let date = self.resolve(key)?;
        Ok(!self.is_weekend(date) && !self.entries.contains_key(&date))
    }

    /// The `n`-th workday after `key` (before it when `n` is negative).
    pub fn get_nth_workday(&mut self, key: impl IntoDate, n: i64) -> Result<Date, Error> {
        let mut date = self.resolve(key)?;
        let step = n.signum();
        for _ in 0..n.unsigned_abs() {
            date = date.add_days(step);
            while !self.is_workday(date)? {
                date = date.add_days(step);
            }
        }
        Ok(date)
    }

    /// Workdays in the half-open span after the earlier key up to and including the later one.
    pub fn get_workdays_number(&mut self, from: impl IntoDate, to: impl IntoDate) -> Result<i64, Error> {
        let a = self.resolve(from)?;
        let b = self.resolve(to)?;
        let (start, end) = if a <= b { (a, b) } else { (b, a) };

        let mut count = 0;
        for offset in 1..=(end - start) {
            if self.is_workday(start.add_days(offset))? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Holidays of the populated years, in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &str)> {
        self.entries.iter().map(|(date, name)| (*date, name.as_str()))
    }

    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.entries.keys().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn years(&self) -> &BTreeSet<i32> {
        &self.years
    }

    #[inline]
    pub fn expand(&self) -> bool {
        self.expand
    }

    pub fn set_expand(&mut self, expand: bool) {
        self.expand = expand;
    }

    #[inline]
    pub fn observed(&self) -> bool {
        self.observed
    }

    /// Switches observed-day entries on or off for all populated years.
    ///
    /// Turning them on repopulates every year; turning them off removes the
    /// entries whose name contains `Observed`. If a year fails to repopulate the
    /// container is left as it was before the call.
    pub fn set_observed(&mut self, observed: bool) -> Result<(), Error> {
        if self.observed == observed {
            return Ok(());
        }
        self.observed = observed;
        if self.entries.is_empty() {
            return Ok(());
        }

        if observed {
            debug!("observed days on, repopulating {} years", self.years.len());
            let entries = std::mem::take(&mut self.entries);
            let years = std::mem::take(&mut self.years);
            for year in years.iter().copied() {
                if let Err(err) = self.populate_year(year) {
                    self.entries = entries;
                    self.years = years;
                    self.observed = false;
                    return Err(err);
                }
            }
        } else {
            debug!("observed days off for {}", self.label());
            self.entries.retain(|_, name| !name.contains("Observed"));
        }
        Ok(())
    }

    pub fn country(&self) -> &[String] {
        &self.country
    }

    pub fn subdivision(&self) -> &[String] {
        &self.subdivision
    }

    pub fn categories(&self) -> &BTreeSet<Category> {
        &self.categories
    }
}

impl PartialEq for Holidays {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
            && self.country == other.country
            && self.subdivision == other.subdivision
            && self.years == other.years
            && self.expand == other.expand
            && self.observed == other.observed
            && self.categories == other.categories
    }
}

impl fmt::Debug for Holidays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Holidays")
            .field("country", &self.country)
            .field("subdivision", &self.subdivision)
            .field("years", &self.years)
            .field("expand", &self.expand)
            .field("observed", &self.observed)
            .field("entries", &self.entries)
            .finish()
    }
}

impl<'a> IntoIterator for &'a Holidays {
    type Item = (Date, &'a str);
    type IntoIter = std::iter::Map<
        std::collections::btree_map::Iter<'a, Date, String>,
        fn((&'a Date, &'a String)) -> (Date, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(|(date, name)| (*date, name.as_str()))
    }
}

/// Rules of a combined container: the union of its operands.
#[derive(Debug)]
struct CombinedRules {
    operands: Vec<Holidays>,
}

impl HolidayRules for CombinedRules {
    fn populate(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        let year = cx.year();
        for operand in self.operands.iter().rev() {
            let mut operand = operand.clone();
            if let Err(err) = operand.populate_year(year) {
                debug!("skipping {} for {year} in combination: {err}", operand.label());
                continue;
            }
            for (date, names) in operand.entries.range(Date::from_year(year)..Date::from_year(year + 1)) {
                for name in names::split(names) {
                    cx.add_without_expand(*date, name);
                }
            }
        }
        Ok(())
    }
}

fn join_ids(a: &[String], b: &[String]) -> Vec<String> {
    if a.is_empty() || a == b {
        b.to_vec()
    } else if b.is_empty() {
        a.to_vec()
    } else {
        a.iter().chain(b).cloned().collect()
    }
}

impl Holidays {
    fn is_neutral(&self) -> bool {
        self.rules.is_none() && self.entries.is_empty()
    }

    /// Union of two containers.
    ///
    /// The result covers the years of both operands, expands when either does and
    /// keeps observed days when either does. Its country and subdivision lists are
    /// concatenated when they differ.
    pub fn combine(&self, other: &Holidays) -> Holidays {
        if other.is_neutral() {
            return self.clone();
        }
        if self.is_neutral() {
            return other.clone();
        }
        debug!("combining {} with {}", self.label(), other.label());

        let mut combined = Holidays {
            rules: Some(Arc::new(CombinedRules {
                operands: vec![self.clone(), other.clone()],
            })),
            entries: BTreeMap::new(),
            years: BTreeSet::new(),
            expand: self.expand || other.expand,
            observed: self.observed || other.observed,
            country: join_ids(&self.country, &other.country),
            subdivision: join_ids(&self.subdivision, &other.subdivision),
            categories: self.categories.union(&other.categories).copied().collect(),
            islamic_show_estimated: self.islamic_show_estimated || other.islamic_show_estimated,
        };
        for year in self.years.union(&other.years) {
            if let Err(err) = combined.populate_year(*year) {
                debug!("combined population of {year} failed: {err}");
            }
        }
        combined
    }
}

impl Add for Holidays {
    type Output = Holidays;

    fn add(self, rhs: Holidays) -> Holidays {
        self.combine(&rhs)
    }
}

impl Add<&Holidays> for &Holidays {
    type Output = Holidays;

    fn add(self, rhs: &Holidays) -> Holidays {
        self.combine(rhs)
    }
}

impl Sum for Holidays {
    fn sum<I: Iterator<Item = Holidays>>(iter: I) -> Holidays {
        iter.fold(Holidays::empty(), |acc, it| acc.combine(&it))
    }
}

impl<'a> Sum<&'a Holidays> for Holidays {
    fn sum<I: Iterator<Item = &'a Holidays>>(iter: I) -> Holidays {
        iter.fold(Holidays::empty(), |acc, it| acc.combine(it))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    #[derive(Debug)]
    struct Fixed;

    impl HolidayRules for Fixed {
        fn code(&self) -> &str {
            "XX"
        }

        fn populate(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
            if cx.year() > 2100 {
                cx.add_ymd(1, 1, "Partial")?;
                return Err(Error::YearNotAvailable(cx.year()));
            }
            let date = cx.add_ymd(7, 4, "Independence Day")?;
            cx.add_observed(date, crate::observed::SAT_TO_PREV_FRI_SUN_TO_NEXT_MON);
            cx.add_ymd(12, 25, "Christmas Day")?;
            Ok(())
        }
    }

    fn fixed(options: HolidaysOptions) -> Holidays {
        Holidays::new(Fixed, options).unwrap()
    }

    #[test]
    fn expands_lazily() {
        let mut holidays = fixed(HolidaysOptions::new());
        assert!(holidays.is_empty());
        assert!(holidays.contains(Date::from_ymd(2014, 7, 4)).unwrap());
        assert_eq!(holidays.years(), &BTreeSet::from([2014]));

        let mut fixed_years = fixed(HolidaysOptions::new().year(2014).expand(false));
        assert!(!fixed_years.contains(Date::from_ymd(2015, 7, 4)).unwrap());
        assert_eq!(fixed_years.years(), &BTreeSet::from([2014]));
    }

    #[test]
    fn failed_population_rolls_back() {
        let mut holidays = fixed(HolidaysOptions::new().year(2014));
        let before = holidays.clone();
        assert_eq!(
            holidays.contains(Date::from_ymd(2101, 1, 1)),
            Err(Error::YearNotAvailable(2101))
        );
        assert_eq!(holidays, before);
    }

    /// Fails for 2015 as soon as observed days are asked for.
    #[derive(Debug)]
    struct NoObserved2015;

    impl HolidayRules for NoObserved2015 {
        fn populate(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
            cx.add_ymd(1, 1, "New Year")?;
            if cx.observed() && cx.year() == 2015 {
                return Err(Error::YearNotAvailable(2015));
            }
            Ok(())
        }
    }

    #[test]
    fn failed_observed_toggle_rolls_back() {
        let options = HolidaysOptions::new().years([2014, 2015, 2016]).observed(false);
        let mut holidays = Holidays::new(NoObserved2015, options).unwrap();
        let before = holidays.clone();
        assert_eq!(
            holidays.set_observed(true),
            Err(Error::YearNotAvailable(2015))
        );
        assert_eq!(holidays, before);
        assert!(!holidays.observed());
        assert_eq!(holidays.len(), 3);
    }

    #[test]
    fn merges_names() {
        let mut holidays = fixed(HolidaysOptions::new().year(2014));
        holidays.insert(Date::from_ymd(2014, 12, 25), "Feast").unwrap();
        holidays.insert(Date::from_ymd(2014, 12, 25), "Christmas").unwrap();
        assert_eq!(
            holidays.name(Date::from_ymd(2014, 12, 25)).unwrap(),
            "Christmas Day, Feast"
        );
        assert_eq!(
            holidays.get_list(Date::from_ymd(2014, 12, 25)).unwrap(),
            ["Christmas Day", "Feast"]
        );
    }

    #[test]
    fn observed_toggle() {
        // 2015-07-04 is a Saturday.
        let friday = Date::from_ymd(2015, 7, 3);
        let mut holidays = fixed(HolidaysOptions::new().year(2015).observed(false));
        assert!(!holidays.contains(friday).unwrap());

        holidays.set_observed(true).unwrap();
        assert_eq!(
            holidays.name(friday).unwrap(),
            "Independence Day (Observed)"
        );
        assert_eq!(holidays, fixed(HolidaysOptions::new().year(2015)));

        holidays.set_observed(false).unwrap();
        assert!(!holidays.contains(friday).unwrap());
        assert_eq!(
            holidays,
            fixed(HolidaysOptions::new().year(2015).observed(false))
        );
    }

    #[test]
    fn pop_and_defaults() {
        let mut holidays = fixed(HolidaysOptions::new().year(2014));
        let christmas = Date::from_ymd(2014, 12, 25);
        assert_eq!(holidays.pop(christmas).unwrap(), "Christmas Day");
        assert_eq!(holidays.pop(christmas), Err(Error::KeyNotFound(christmas)));
        assert_eq!(holidays.pop_or(christmas, "none").unwrap(), "none");
        assert_eq!(holidays.get_or(christmas, "none").unwrap(), "none");
    }

    #[test]
    fn updates() {
        let mut holidays = fixed(HolidaysOptions::new().year(2014).expand(false));
        holidays
            .update(HolidayUpdate::Mapping(vec![(
                Date::from_ymd(2014, 3, 1),
                "Founders Day".to_string(),
            )]))
            .unwrap();
        holidays
            .update(HolidayUpdate::Sequence(vec!["2014-03-02", "2014-03-03"]))
            .unwrap();
        holidays.update(HolidayUpdate::Single("2014-03-04")).unwrap();

        assert_eq!(holidays.name("2014-03-01").unwrap(), "Founders Day");
        assert_eq!(holidays.name("2014-03-03").unwrap(), "Holiday");
        assert_eq!(holidays.name("2014-03-04").unwrap(), "Holiday");
    }

    #[test]
    fn named_lookups() {
        let mut holidays = fixed(HolidaysOptions::new().years([2014, 2015]));
        holidays.insert("2014-12-25", "Feast").unwrap();

        let christmas = holidays.get_named("christmas", NameLookup::IContains, true);
        assert_eq!(
            christmas,
            [Date::from_ymd(2014, 12, 25), Date::from_ymd(2015, 12, 25)]
        );
        assert!(holidays
            .get_named("christmas", NameLookup::Contains, true)
            .is_empty());

        assert_eq!(holidays.pop_named("Christmas").unwrap(), christmas);
        assert_eq!(holidays.name("2014-12-25").unwrap(), "Feast");
        assert!(!holidays.contains("2015-12-25").unwrap());
        assert_eq!(
            holidays.pop_named("Christmas"),
            Err(Error::HolidayNameNotFound("Christmas".to_string()))
        );
    }

    #[test]
    fn workdays() {
        let mut holidays = fixed(HolidaysOptions::new());
        // 2014-07-04 is a Friday, 2014-07-03 a Thursday.
        assert!(!holidays.is_workday("2014-07-04").unwrap());
        assert!(!holidays.is_workday("2014-07-05").unwrap());
        assert!(holidays.is_workday("2014-07-03").unwrap());
        assert_eq!(
            holidays.get_nth_workday("2014-07-03", 1).unwrap(),
            Date::from_ymd(2014, 7, 7)
        );
        assert_eq!(
            holidays.get_nth_workday("2014-07-07", -1).unwrap(),
            Date::from_ymd(2014, 7, 3)
        );
        assert_eq!(
            holidays.get_workdays_number("2014-07-03", "2014-07-10").unwrap(),
            4
        );
        assert_eq!(
            holidays.get_workdays_number("2014-07-10", "2014-07-03").unwrap(),
            4
        );
        assert_eq!(holidays.weekend(2014), &[Weekday::Saturday, Weekday::Sunday]);
    }

    #[test]
    fn unknown_subdivision() {
        assert_eq!(
            Holidays::new(Fixed, HolidaysOptions::new().subdivision("ZZ")).unwrap_err(),
            Error::SubdivisionNotAvailable("ZZ".to_string())
        );
        assert_eq!(
            Holidays::new(Fixed, HolidaysOptions::new().category(Category::Bank)).unwrap_err(),
            Error::CategoryNotSupported(Category::Bank)
        );
    }

    #[derive(Debug)]
    struct Founders;

    impl HolidayRules for Founders {
        fn code(&self) -> &str {
            "YY"
        }

        fn populate(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
            cx.add_ymd(3, 1, "Founders Day")?;
            cx.add_ymd(12, 25, "Christmas Day")?;
            cx.add_ymd(12, 26, "Boxing Day")?;
            Ok(())
        }
    }

    #[test]
    fn combination() {
        let a = fixed(HolidaysOptions::new().year(2014));
        let b = Holidays::new(Founders, HolidaysOptions::new().year(2015).observed(false)).unwrap();

        let mut sum = &a + &b;
        assert_eq!(sum.country(), ["XX", "YY"]);
        assert_eq!(sum.years(), &BTreeSet::from([2014, 2015]));
        assert!(sum.observed());
        assert_eq!(sum.name("2014-03-01").unwrap(), "Founders Day");
        assert_eq!(sum.name("2015-07-04").unwrap(), "Independence Day");
        assert_eq!(sum.name("2014-12-25").unwrap(), "Christmas Day");
        assert_eq!(sum.name("2016-12-26").unwrap(), "Boxing Day");

        let mut reversed = &b + &a;
        reversed.populate_year(2016).unwrap();
        assert_eq!(
            sum.iter().map(|(date, _)| date).collect::<Vec<_>>(),
            reversed.iter().map(|(date, _)| date).collect::<Vec<_>>()
        );
    }

    #[test]
    fn empty_is_neutral() {
        let a = fixed(HolidaysOptions::new().year(2014));
        assert_eq!(Holidays::empty() + a.clone(), a);
        assert_eq!(a.clone() + Holidays::empty(), a);

        let all: Holidays = [a.clone(), Holidays::empty()].into_iter().sum();
        assert_eq!(all, a);
    }
}
