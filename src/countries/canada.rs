use super::{add_with_observed, new_years_day};
use crate::{
    date::Date,
    easter::EasterMethod,
    observed::{SAT_SUN_TO_NEXT_MON, SAT_TO_PREV_FRI_SUN_TO_NEXT_MON, SUN_TO_NEXT_MON},
    rules::{observed_name, HolidayRules, Populate},
    weekday::Weekday::*,
    Error,
};

const PROVINCES: &[&str] = &[
    "AB", "BC", "MB", "NB", "NL", "NS", "NT", "NU", "ON", "PE", "QC", "SK", "YU",
];

/// Canadian statutory holidays, per province. Ontario unless told otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canada;

impl HolidayRules for Canada {
    fn code(&self) -> &str {
        "CA"
    }

    fn subdivisions(&self) -> &'static [&'static str] {
        PROVINCES
    }

    fn subdivision_aliases(&self) -> &'static [(&'static str, &'static str)] {
        &[("YT", "YU")]
    }

    fn default_subdivision(&self) -> Option<&'static str> {
        Some("ON")
    }

    fn populate(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        let year = cx.year();
        let prov = cx.subdivision().unwrap_or("ON").to_owned();
        let prov = prov.as_str();

        if year >= 1867 {
            new_years_day(cx, "New Year's Day")?;
        }

        if prov == "PE" && year >= 2010 {
            let date = cx.nth_weekday(3, Monday, 2)?;
            cx.add(date, "Islander Day")?;
        } else if prov == "PE" && year == 2009 {
            let date = cx.nth_weekday(2, Monday, 2)?;
            cx.add(date, "Islander Day")?;
        }

        let third_monday_feb = cx.nth_weekday(3, Monday, 2)?;
        if (matches!(prov, "AB" | "SK" | "ON") && year >= 2008)
            || (matches!(prov, "AB" | "SK") && year >= 2007)
            || (prov == "AB" && year >= 1990)
        {
            cx.add(third_monday_feb, "Family Day")?;
        } else if prov == "BC" && year >= 2013 {
            let date = cx.nth_weekday(2, Monday, 2)?;
            cx.add(date, "Family Day")?;
        } else if prov == "MB" && year >= 2008 {
            cx.add(third_monday_feb, "Louis Riel Day")?;
        }

        if prov == "NL" && year >= 1900 {
            cx.add(Date::from_ymd(year, 3, 17).nearest(Monday), "St. Patrick's Day")?;
        }

        if year >= 1867 {
            let easter = cx.easter(EasterMethod::Western)?;
            if prov == "QC" {
                cx.add(easter.add_days(1), "Easter Monday")?;
            } else {
                cx.add(easter.add_days(-2), "Good Friday")?;
            }
        }

        if prov == "NL" && year == 2010 {
            cx.add(Date::from_ymd(2010, 4, 19), "St. George's Day")?;
        } else if prov == "NL" && year >= 1990 {
            cx.add(Date::from_ymd(year, 4, 23).nearest(Monday), "St. George's Day")?;
        }

        if year >= 1953 {
            let monday = Date::from_ymd(year, 5, 24).on_or_before(Monday);
            if prov == "QC" {
                cx.add(monday, "National Patriotes Day")?;
            } else if !matches!(prov, "NB" | "NS" | "PE" | "NL") {
                cx.add(monday, "Victoria Day")?;
            }
        }

        if prov == "NT" && year >= 1996 {
            cx.add_ymd(6, 21, "National Aboriginal Day")?;
        }

        if prov == "QC" && year >= 1925 {
            let date = Date::from_ymd(year, 6, 24);
            add_with_observed(cx, date, "St. Jean Baptiste Day", SUN_TO_NEXT_MON)?;
        }

        if prov == "NL" && year >= 1997 {
            cx.add(Date::from_ymd(year, 6, 24).nearest(Monday), "Discovery Day")?;
        } else if prov == "YU" && year >= 1912 {
            let date = cx.nth_weekday(3, Monday, 8)?;
            cx.add(date, "Discovery Day")?;
        }

        if year >= 1867 {
            let name = if prov == "NL" { "Memorial Day" } else { "Canada Day" };
            add_with_observed(cx, Date::from_ymd(year, 7, 1), name, SAT_SUN_TO_NEXT_MON)?;
        }

        if prov == "NU" && year >= 2001 {
            add_with_observed(cx, Date::from_ymd(year, 7, 9), "Nunavut Day", SUN_TO_NEXT_MON)?;
        } else if prov == "NU" && year == 2000 {
            cx.add(Date::from_ymd(2000, 4, 1), "Nunavut Day")?;
        }

        let first_monday_aug = cx.nth_weekday(1, Monday, 8)?;
        if matches!(prov, "SK" | "ON" | "MB" | "NT") && year >= 1900 {
            cx.add(first_monday_aug, "Civic Holiday")?;
        } else if prov == "BC" && year >= 1974 {
            cx.add(first_monday_aug, "British Columbia Day")?;
        }

        if year >= 1894 {
            let date = cx.nth_weekday(1, Monday, 9)?;
            cx.add(date, "Labour Day")?;
        }

        if !matches!(prov, "NB" | "NS" | "PE" | "NL") && year >= 1931 {
            let date = cx.nth_weekday(2, Monday, 10)?;
            cx.add(date, "Thanksgiving")?;
        }

        if year >= 1931 {
            let date = Date::from_ymd(year, 11, 11);
            if matches!(prov, "NS" | "NL" | "NT" | "PE" | "SK") {
                add_with_observed(cx, date, "Remembrance Day", SUN_TO_NEXT_MON)?;
            } else if !matches!(prov, "ON" | "QC") {
                cx.add(date, "Remembrance Day")?;
            }
        }

        if year >= 1867 {
            let christmas = Date::from_ymd(year, 12, 25);
            add_with_observed(cx, christmas, "Christmas Day", SAT_TO_PREV_FRI_SUN_TO_NEXT_MON)?;

            // Boxing Day only keeps its own date when it is not moved.
            let boxing_day = Date::from_ymd(year, 12, 26);
            let observed = observed_name("Boxing Day");
            match boxing_day.weekday() {
                Saturday | Sunday if cx.observed() => {
                    cx.add(boxing_day.on_or_after(Monday), &observed)?;
                }
                Monday if cx.observed() => {
                    cx.add(boxing_day.add_days(1), &observed)?;
                }
                _ => {
                    cx.add(boxing_day, "Boxing Day")?;
                }
            }
        }

        Ok(())
    }
}
