use std::collections::BTreeSet;

use crate::{
    date::Date,
    easter::EasterMethod,
    observed::SAT_SUN_TO_NEXT_WORKDAY,
    options::Category,
    rules::{HolidayRules, Populate},
    Error,
};

/// Holidays of Ukraine since independence.
///
/// Under martial law (from 2022, fully from 2023) the holidays stop being days
/// off and are listed under [`Category::Workday`] instead, without observed days.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ukraine;

/// Weekend holidays moved to the next workday in these periods only.
fn observes(date: Date) -> bool {
    (Date::from_ymd(1995, 1, 27)..=Date::from_ymd(1998, 1, 9)).contains(&date)
        || date >= Date::from_ymd(1999, 4, 23)
}

impl Ukraine {
    fn populate_common(&self, cx: &mut Populate<'_>, martial_law: bool) -> Result<(), Error> {
        let year = cx.year();
        let mut dts_observed = BTreeSet::new();

        if (year >= 2023) == martial_law {
            dts_observed.insert(cx.add_ymd(1, 1, "New Year's Day")?);
            if year <= 2023 {
                // Julian December 25.
                dts_observed.insert(cx.add_ymd(1, 7, "Christmas Day")?);
            }
            dts_observed.insert(cx.add_ymd(3, 8, "International Women's Day")?);
        }

        if (year >= 2022) == martial_law {
            let easter = cx.easter(EasterMethod::Orthodox)?;
            if year >= 1992 {
                dts_observed.insert(cx.add(easter, "Easter Sunday (Pascha)")?);
            }
            dts_observed.insert(cx.add(easter.add_days(49), "Holy Trinity Day")?);

            let name = if year >= 2018 {
                "Labor Day"
            } else {
                "International Workers' Solidarity Day"
            };
            dts_observed.insert(cx.add_ymd(5, 1, name)?);
            if year <= 2017 {
                dts_observed.insert(cx.add_ymd(5, 2, name)?);
            }

            if year >= 2024 {
                let name = "Day of Remembrance and Victory over Nazism in World War II 1939-1945";
                dts_observed.insert(cx.add_ymd(5, 8, name)?);
            } else {
                let name = if year >= 2016 {
                    "Day of Victory over Nazism in World War II (Victory Day)"
                } else {
                    "Victory Day"
                };
                dts_observed.insert(cx.add_ymd(5, 9, name)?);
            }

            if year >= 1997 {
                dts_observed.insert(cx.add_ymd(6, 28, "Day of the Constitution of Ukraine")?);
            }

            if year >= 2022 {
                let (month, day) = if year >= 2024 { (7, 15) } else { (7, 28) };
                dts_observed.insert(cx.add_ymd(month, day, "Ukrainian Statehood Day")?);
            }

            if year >= 1992 {
                dts_observed.insert(cx.add_ymd(8, 24, "Independence Day")?);
            } else {
                cx.add_ymd(7, 16, "Independence Day")?;
            }

            if year >= 2015 {
                let name = if year >= 2021 {
                    "Day of defenders of Ukraine"
                } else {
                    "Defender of Ukraine Day"
                };
                let (month, day) = if year >= 2023 { (10, 1) } else { (10, 14) };
                dts_observed.insert(cx.add_ymd(month, day, name)?);
            }

            if year <= 1999 {
                let name = "Anniversary of the Great October Socialist Revolution";
                dts_observed.insert(cx.add_ymd(11, 7, name)?);
                dts_observed.insert(cx.add_ymd(11, 8, name)?);
            }

            if year >= 2017 {
                dts_observed.insert(cx.add_ymd(12, 25, "Christmas Day")?);
            }
        }

        if !martial_law {
            dts_observed.retain(|it| observes(*it));
            cx.observe_all(&dts_observed, SAT_SUN_TO_NEXT_WORKDAY, false);
        }
        Ok(())
    }
}

impl HolidayRules for Ukraine {
    fn code(&self) -> &str {
        "UA"
    }

    fn supported_categories(&self) -> &'static [Category] {
        &[Category::Public, Category::Workday]
    }

    fn populate(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        // The current set of holidays dates from 1991.
        if cx.year() <= 1990 {
            return Ok(());
        }
        if cx.has_category(Category::Public) {
            self.populate_common(cx, false)?;
        }
        if cx.has_category(Category::Workday) {
            self.populate_common(cx, true)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Holidays, HolidaysOptions};

    #[test]
    fn before_martial_law() {
        let mut holidays = Holidays::new(Ukraine, HolidaysOptions::new().year(2021)).unwrap();
        assert_eq!(holidays.name("2021-01-07").unwrap(), "Christmas Day");
        assert_eq!(holidays.name("2021-05-02").unwrap(), "Easter Sunday (Pascha)");
        assert_eq!(holidays.name("2021-06-20").unwrap(), "Holy Trinity Day");
        // Easter and Trinity fall on Sundays.
        assert_eq!(
            holidays.name("2021-05-04").unwrap(),
            "Easter Sunday (Pascha) (Observed)"
        );
        assert_eq!(holidays.name("2021-06-21").unwrap(), "Holy Trinity Day (Observed)");
    }

    #[test]
    fn martial_law_moves_holidays_to_workdays() {
        let mut public = Holidays::new(Ukraine, HolidaysOptions::new().year(2022)).unwrap();
        assert!(public.contains("2022-01-01").unwrap());
        assert!(!public.contains("2022-08-24").unwrap());

        let options = HolidaysOptions::new().year(2024).category(Category::Workday);
        let mut workday = Holidays::new(Ukraine, options).unwrap();
        assert_eq!(workday.name("2024-07-15").unwrap(), "Ukrainian Statehood Day");
        assert!(!workday.contains("2024-01-07").unwrap());
        // No observed days while under martial law.
        assert!(!workday.iter().any(|(_, name)| name.contains("Observed")));
    }

    #[test]
    fn no_observed_days_in_1998() {
        // 1998-03-08 is a Sunday.
        let mut holidays = Holidays::new(Ukraine, HolidaysOptions::new().year(1998)).unwrap();
        assert!(holidays.contains("1998-03-08").unwrap());
        assert!(!holidays.contains("1998-03-09").unwrap());
        assert!(!holidays.contains("1990-01-01").unwrap());
    }
}
