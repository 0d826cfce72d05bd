use std::collections::BTreeSet;

use crate::{
    calendars::chinese,
    date::Date,
    observed::SAT_SUN_TO_NEXT_WORKDAY,
    options::Category,
    rules::{HolidayRules, Populate},
    Error,
};

const SPRING_FESTIVAL: &str = "Chinese New Year (Spring Festival)";
const SPRING_FESTIVAL_EVE: &str = "Chinese New Year's Eve";
const LABOR_DAY: &str = "Labor Day";
const NATIONAL_DAY: &str = "National Day";

/// Holidays of the People's Republic of China, from 1950.
///
/// Weekend public holidays are observed on the next workday since 2000, each
/// holiday sharing a date getting its own day. Adjusted working weekends
/// announced yearly are not modelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct China;

impl China {
    fn public(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        let year = cx.year();
        let mut dts_observed = BTreeSet::new();

        dts_observed.insert(cx.add_ymd(1, 1, "New Year's Day")?);

        if let Some(new_year) = chinese::lunar_new_year(year) {
            dts_observed.insert(cx.add(new_year, SPRING_FESTIVAL)?);
            dts_observed.insert(cx.add(new_year.add_days(1), SPRING_FESTIVAL)?);
            if (2008..=2013).contains(&year) {
                dts_observed.insert(cx.add(new_year.add_days(-1), SPRING_FESTIVAL_EVE)?);
            } else {
                dts_observed.insert(cx.add(new_year.add_days(2), SPRING_FESTIVAL)?);
            }
            if year >= 2025 {
                dts_observed.insert(cx.add(new_year.add_days(-1), SPRING_FESTIVAL_EVE)?);
            }
        }

        dts_observed.insert(cx.add_ymd(5, 1, LABOR_DAY)?);
        if (2000..=2007).contains(&year) {
            dts_observed.insert(cx.add_ymd(5, 2, LABOR_DAY)?);
            dts_observed.insert(cx.add_ymd(5, 3, LABOR_DAY)?);
        } else if year >= 2025 {
            dts_observed.insert(cx.add_ymd(5, 2, LABOR_DAY)?);
        }

        dts_observed.insert(cx.add_ymd(10, 1, NATIONAL_DAY)?);
        dts_observed.insert(cx.add_ymd(10, 2, NATIONAL_DAY)?);
        if year >= 1999 {
            dts_observed.insert(cx.add_ymd(10, 3, NATIONAL_DAY)?);
        }

        if year >= 2008 {
            dts_observed.insert(cx.add(qingming(year), "Tomb-Sweeping Day")?);

            let dragon_boat = chinese::lunar_to_gregorian(year, 5, 5, true);
            if let Some(date) = cx.add_opt(dragon_boat, "Dragon Boat Festival")? {
                if year != 2012 {
                    dts_observed.insert(date);
                }
            }

            let mid_autumn = chinese::lunar_to_gregorian(year, 8, 15, true);
            if let Some(date) = cx.add_opt(mid_autumn, "Mid-Autumn Festival")? {
                if year != 2015 {
                    dts_observed.insert(date);
                }
            }
        }

        if year >= 2000 {
            cx.observe_all(&dts_observed, SAT_SUN_TO_NEXT_WORKDAY, true);
        }
        Ok(())
    }

    fn half_day(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        cx.add_ymd(3, 8, "International Women's Day")?;
        cx.add_ymd(5, 4, "Youth Day")?;
        cx.add_ymd(6, 1, "Children's Day")?;
        cx.add_ymd(8, 1, "Army Day")?;
        Ok(())
    }
}

/// Tomb-Sweeping Day, April 4 or 5 depending on the leap-year cycle.
fn qingming(year: i32) -> Date {
    let cycle = year.rem_euclid(4);
    let day = if cycle < 1 || (cycle < 2 && year >= 2009) { 4 } else { 5 };
    Date::from_ymd(year, 4, day)
}

impl HolidayRules for China {
    fn code(&self) -> &str {
        "CN"
    }

    fn supported_categories(&self) -> &'static [Category] {
        &[Category::Public, Category::HalfDay]
    }

    fn populate(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        if cx.year() < 1950 {
            return Ok(());
        }
        if cx.has_category(Category::Public) {
            self.public(cx)?;
        }
        if cx.has_category(Category::HalfDay) {
            self.half_day(cx)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Holidays, HolidaysOptions};

    #[test]
    fn spring_festival_observed_per_name() {
        // Chinese New Year 2010 is Sunday, February 14.
        let mut holidays = Holidays::new(China, HolidaysOptions::new().year(2010)).unwrap();
        assert_eq!(holidays.name("2010-02-13").unwrap(), SPRING_FESTIVAL_EVE);
        assert_eq!(holidays.name("2010-02-14").unwrap(), SPRING_FESTIVAL);
        assert_eq!(
            holidays.name("2010-02-16").unwrap(),
            "Chinese New Year's Eve (Observed)"
        );
        assert_eq!(
            holidays.name("2010-02-17").unwrap(),
            "Chinese New Year (Spring Festival) (Observed)"
        );
    }

    #[test]
    fn qingming_cycle() {
        assert_eq!(qingming(2008), Date::from_ymd(2008, 4, 4));
        assert_eq!(qingming(2009), Date::from_ymd(2009, 4, 4));
        assert_eq!(qingming(2010), Date::from_ymd(2010, 4, 5));
        assert_eq!(qingming(2011), Date::from_ymd(2011, 4, 5));
    }

    #[test]
    fn categories() {
        let half_day =
            Holidays::new(China, HolidaysOptions::new().year(2020).category(Category::HalfDay))
                .unwrap();
        assert_eq!(half_day.len(), 4);

        let before = Holidays::new(China, HolidaysOptions::new().year(1949)).unwrap();
        assert!(before.is_empty());

        assert_eq!(
            Holidays::new(China, HolidaysOptions::new().category(Category::Bank)).unwrap_err(),
            Error::CategoryNotSupported(Category::Bank)
        );
    }
}
