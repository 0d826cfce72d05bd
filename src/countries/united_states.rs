use super::{add_with_observed, new_years_day};
use crate::{
    date::Date,
    easter::EasterMethod,
    observed::{
        ObservedRule, Shift, SAT_SUN_TO_NEXT_MON, SAT_SUN_TO_PREV_FRI, SAT_TO_PREV_FRI,
        SAT_TO_PREV_FRI_SUN_TO_NEXT_MON, SUN_TO_NEXT_MON,
    },
    rules::{observed_name, HolidayRules, Populate},
    weekday::Weekday::*,
    Error,
};

const STATES: &[&str] = &[
    "AL", "AK", "AS", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "GU", "HI", "ID",
    "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD", "MH", "MA", "MI", "FM", "MN", "MS", "MO",
    "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "MP", "OH", "OK", "OR", "PW", "PA",
    "PR", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "VI", "WA", "WV", "WI", "WY",
];

const GOOD_FRIDAY: &[&str] = &[
    "CT", "DE", "GU", "IN", "KY", "LA", "NJ", "NC", "PR", "TN", "TX", "VI",
];

/// Thursday before a Friday holiday, Friday before a weekend one.
const CHRISTMAS_EVE: ObservedRule = SAT_SUN_TO_PREV_FRI.with(Friday, Shift::Days(-1));

/// Monday after a weekend holiday, Tuesday after a Monday one.
const DAY_AFTER_CHRISTMAS: ObservedRule = SAT_SUN_TO_NEXT_MON.with(Monday, Shift::Days(1));

/// Federal holidays, plus state and territory holidays when a state is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedStates;

impl HolidayRules for UnitedStates {
    fn code(&self) -> &str {
        "US"
    }

    fn subdivisions(&self) -> &'static [&'static str] {
        STATES
    }

    fn populate(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        let year = cx.year();
        let state = cx.subdivision().unwrap_or_default().to_owned();
        let state = state.as_str();
        let ymd = |month, day| Date::from_ymd(year, month, day);

        if year > 1870 {
            new_years_day(cx, "New Year's Day")?;
        }

        match state {
            "PR" => {
                cx.add_ymd(1, 6, "Epiphany")?;
            }
            "VI" => {
                cx.add_ymd(1, 6, "Three King's Day")?;
            }
            _ => {}
        }

        if state == "VA" {
            let name = "Lee Jackson Day";
            if year >= 2000 {
                let monday = cx.nth_weekday(3, Monday, 1)?;
                cx.add(monday.on_or_before(Friday), name)?;
            } else if year >= 1983 {
                let monday = cx.nth_weekday(3, Monday, 1)?;
                cx.add(monday, name)?;
            } else if year >= 1889 {
                cx.add_ymd(1, 19, name)?;
            }
        }

        if matches!(state, "DC" | "LA" | "MD" | "VA") && year >= 1789 && (year - 1789) % 4 == 0 {
            let name = "Inauguration Day";
            let date = if year >= 1937 { ymd(1, 20) } else { ymd(3, 4) };
            cx.add(date, name)?;
            if date.weekday() == Sunday {
                cx.add(date.add_days(1), &observed_name(name))?;
            }
        }

        if year >= 1986 && (state != "GA" || year < 2012) {
            let name = match state {
                "AL" => "Robert E. Lee/Martin Luther King Birthday",
                "AS" | "MS" => "Dr. Martin Luther King Jr. and Robert E. Lee's Birthdays",
                "AZ" | "NH" => "Dr. Martin Luther King Jr./Civil Rights Day",
                "GA" => "Robert E. Lee's Birthday",
                "ID" if year >= 2006 => "Martin Luther King, Jr. - Idaho Human Rights Day",
                _ => "Martin Luther King, Jr. Day",
            };
            let date = cx.nth_weekday(3, Monday, 1)?;
            cx.add(date, name)?;
        }

        if (matches!(state, "CT" | "IL" | "IA" | "NJ" | "NY") && year >= 1971)
            || (state == "CA" && (1971..=2009).contains(&year))
        {
            let rule = SAT_TO_PREV_FRI_SUN_TO_NEXT_MON;
            add_with_observed(cx, ymd(2, 12), "Lincoln's Birthday", rule)?;
        }

        if (state == "CA" && year >= 2014)
            || (state == "FL" && year >= 2011)
            || (state == "NY" && year >= 2004)
            || (state == "WI" && year >= 1976)
        {
            cx.add_ymd(2, 15, "Susan B. Anthony Day")?;
        }

        let name = match state {
            "AL" => "George Washington/Thomas Jefferson Birthday",
            "AS" => "George Washington's Birthday and Daisy Gatson Bates Day",
            "PR" | "VI" => "Presidents' Day",
            _ => "Washington's Birthday",
        };
        match state {
            "DE" | "FL" | "NM" => {}
            "GA" => {
                let eve = ymd(12, 24);
                let date = if eve.weekday() == Wednesday { ymd(12, 26) } else { eve };
                cx.add(date, name)?;
            }
            "PR" => {
                let date = cx.nth_weekday(3, Monday, 2)?;
                cx.add(date, name)?;
            }
            _ if year > 1970 => {
                let date = cx.nth_weekday(3, Monday, 2)?;
                cx.add(date, name)?;
            }
            _ if year >= 1879 => {
                cx.add_ymd(2, 22, name)?;
            }
            _ => {}
        }

        let easter = if state == "LA" || GOOD_FRIDAY.contains(&state) {
            Some(cx.easter(EasterMethod::Western)?)
        } else {
            None
        };

        if state == "LA" && year >= 1857 {
            if let Some(easter) = easter {
                cx.add(easter.add_days(-47), "Mardi Gras")?;
            }
        }

        if state == "GU" && year >= 1970 {
            let date = cx.nth_weekday(1, Monday, 3)?;
            cx.add(date, "Guam Discovery Day")?;
        }

        if state == "IL" && year >= 1978 {
            let date = cx.nth_weekday(1, Monday, 3)?;
            cx.add(date, "Casimir Pulaski Day")?;
        }

        if state == "TX" && year >= 1874 {
            cx.add_ymd(3, 2, "Texas Independence Day")?;
        }

        if state == "VT" && year >= 1800 {
            let date = cx.nth_weekday(1, Tuesday, 3)?;
            cx.add(date, "Town Meeting Day")?;
        }

        if state == "MA" && year >= 1901 {
            let name = "Evacuation Day";
            let date = cx.add_ymd(3, 17, name)?;
            if matches!(date.weekday(), Saturday | Sunday) {
                cx.add(date.on_or_after(Monday), &observed_name(name))?;
            }
        }

        if state == "PR" {
            add_with_observed(cx, ymd(3, 22), "Emancipation Day", SUN_TO_NEXT_MON)?;
        }

        if state == "HI" && year >= 1949 {
            let name = "Prince Jonah Kuhio Kalanianaole Day";
            add_with_observed(cx, ymd(3, 26), name, SAT_TO_PREV_FRI_SUN_TO_NEXT_MON)?;
        }

        if state == "AK" && year >= 1955 {
            cx.add(ymd(3, 31).on_or_before(Monday), "Steward's Day")?;
        } else if state == "AK" && year >= 1918 {
            cx.add_ymd(3, 30, "Steward's Day")?;
        }

        if state == "CA" && year >= 1995 {
            add_with_observed(cx, ymd(3, 31), "César Chávez Day", SUN_TO_NEXT_MON)?;
        } else if state == "TX" && year >= 2000 {
            cx.add_ymd(3, 31, "César Chávez Day")?;
        }

        if state == "VI" {
            cx.add_ymd(3, 31, "Transfer Day")?;
        }

        if state == "DC" && year >= 2005 {
            let rule = SAT_TO_PREV_FRI_SUN_TO_NEXT_MON;
            add_with_observed(cx, ymd(4, 16), "Emancipation Day", rule)?;
        }

        if matches!(state, "ME" | "MA") && year >= 1969 {
            let date = cx.nth_weekday(3, Monday, 4)?;
            cx.add(date, "Patriots' Day")?;
        } else if matches!(state, "ME" | "MA") && year >= 1894 {
            cx.add_ymd(4, 19, "Patriots' Day")?;
        }

        if let Some(easter) = easter {
            if state == "VI" {
                cx.add(easter.add_days(-3), "Holy Thursday")?;
            }
            if GOOD_FRIDAY.contains(&state) {
                cx.add(easter.add_days(-2), "Good Friday")?;
            }
            if state == "VI" {
                cx.add(easter.add_days(1), "Easter Monday")?;
            }
        }

        if matches!(state, "AL" | "GA" | "MS" | "SC") && year >= 1866 {
            let date = cx.nth_weekday(4, Monday, 4)?;
            cx.add(date, "Confederate Memorial Day")?;
        } else if state == "TX" && year >= 1931 {
            cx.add_ymd(1, 19, "Confederate Memorial Day")?;
        }

        if state == "TX" && year >= 1875 {
            cx.add_ymd(4, 21, "San Jacinto Day")?;
        }

        if state == "NE" && year >= 1989 {
            cx.add(ymd(4, 30).on_or_before(Friday), "Arbor Day")?;
        } else if state == "NE" && year >= 1875 {
            cx.add_ymd(4, 22, "Arbor Day")?;
        }

        if state == "IN" && ((year >= 2006 && year % 2 == 0) || year >= 2015) {
            let monday = cx.nth_weekday(1, Monday, 5)?;
            cx.add(monday.add_days(1), "Primary Election Day")?;
        }

        if state == "MO" && year >= 1949 {
            add_with_observed(cx, ymd(5, 8), "Truman Day", SAT_TO_PREV_FRI_SUN_TO_NEXT_MON)?;
        }

        if year > 1970 {
            let date = cx.nth_weekday(-1, Monday, 5)?;
            cx.add(date, "Memorial Day")?;
        } else if year >= 1888 {
            cx.add_ymd(5, 30, "Memorial Day")?;
        }

        if state == "AL" && year >= 1890 {
            let date = cx.nth_weekday(1, Monday, 6)?;
            cx.add(date, "Jefferson Davis Birthday")?;
        }

        if state == "HI" && year >= 1872 {
            let rule = if year >= 2011 {
                SAT_TO_PREV_FRI_SUN_TO_NEXT_MON
            } else {
                ObservedRule::NONE
            };
            add_with_observed(cx, ymd(6, 11), "Kamehameha Day", rule)?;
        }

        if state == "TX" && year >= 1980 {
            cx.add_ymd(6, 19, "Emancipation Day In Texas")?;
        }

        if state == "WV" && year >= 1927 {
            let rule = SAT_TO_PREV_FRI_SUN_TO_NEXT_MON;
            add_with_observed(cx, ymd(6, 20), "West Virginia Day", rule)?;
        }

        if state == "VI" {
            cx.add_ymd(7, 3, "Emancipation Day")?;
        }

        if year > 1870 {
            let rule = SAT_TO_PREV_FRI_SUN_TO_NEXT_MON;
            add_with_observed(cx, ymd(7, 4), "Independence Day", rule)?;
        }

        if state == "GU" && year >= 1945 {
            cx.add_ymd(7, 21, "Liberation Day (Guam)")?;
        }

        if state == "UT" && year >= 1849 {
            add_with_observed(cx, ymd(7, 24), "Pioneer Day", SAT_TO_PREV_FRI_SUN_TO_NEXT_MON)?;
        }

        if state == "PR" {
            add_with_observed(cx, ymd(7, 25), "Constitution Day", SUN_TO_NEXT_MON)?;
        }

        if state == "RI" && year >= 1948 {
            let date = cx.nth_weekday(2, Monday, 8)?;
            cx.add(date, "Victory Day")?;
        }

        if state == "HI" && year >= 1959 {
            let date = cx.nth_weekday(3, Friday, 8)?;
            cx.add(date, "Statehood Day")?;
        }

        if state == "VT" && year >= 1778 {
            let rule = SAT_TO_PREV_FRI_SUN_TO_NEXT_MON;
            add_with_observed(cx, ymd(8, 16), "Bennington Battle Day", rule)?;
        }

        if state == "TX" && year >= 1973 {
            cx.add_ymd(8, 27, "Lyndon Baines Johnson Day")?;
        }

        if year >= 1894 {
            let date = cx.nth_weekday(1, Monday, 9)?;
            cx.add(date, "Labor Day")?;
        }

        if !matches!(state, "AK" | "DE" | "FL" | "HI" | "NV") {
            let name = match state {
                "SD" => "Native American Day",
                "VI" => "Columbus Day and Puerto Rico Friendship Day",
                _ => "Columbus Day",
            };
            if year >= 1970 {
                let date = cx.nth_weekday(2, Monday, 10)?;
                cx.add(date, name)?;
            } else if year >= 1937 {
                cx.add_ymd(10, 12, name)?;
            }
        }

        if state == "AK" && year >= 1867 {
            add_with_observed(cx, ymd(10, 18), "Alaska Day", SAT_TO_PREV_FRI_SUN_TO_NEXT_MON)?;
        }

        if state == "NV" && year >= 1933 {
            let date = if year >= 2000 {
                ymd(10, 31).on_or_before(Friday)
            } else {
                ymd(10, 31)
            };
            add_with_observed(cx, date, "Nevada Day", SAT_TO_PREV_FRI_SUN_TO_NEXT_MON)?;
        }

        if state == "VI" {
            cx.add_ymd(11, 1, "Liberty Day")?;
        }

        if (matches!(state, "DE" | "HI" | "IL" | "IN" | "LA" | "MT" | "NH" | "NJ" | "NY" | "WV")
            && year >= 2008
            && year % 2 == 0)
            || (matches!(state, "IN" | "NY") && year >= 2015)
        {
            let monday = cx.nth_weekday(1, Monday, 11)?;
            cx.add(monday.add_days(1), "Election Day")?;
        }

        if state == "GU" {
            cx.add_ymd(11, 2, "All Souls' Day")?;
        }

        let name = if year > 1953 { "Veterans Day" } else { "Armistice Day" };
        if (1971..=1977).contains(&year) {
            let date = cx.nth_weekday(4, Monday, 10)?;
            cx.add(date, name)?;
        } else if year >= 1938 {
            add_with_observed(cx, ymd(11, 11), name, SAT_TO_PREV_FRI_SUN_TO_NEXT_MON)?;
        }

        if state == "PR" {
            add_with_observed(cx, ymd(11, 19), "Discovery Day", SUN_TO_NEXT_MON)?;
        }

        if year > 1870 {
            let thanksgiving = cx.nth_weekday(4, Thursday, 11)?;
            cx.add(thanksgiving, "Thanksgiving")?;

            let day_after = match state {
                "DE" | "NH" | "NC" | "OK" | "WV" if year >= 1975 => Some("Day After Thanksgiving"),
                "FL" | "TX" if year >= 1975 => Some("Friday After Thanksgiving"),
                "IN" if year >= 2010 => Some("Lincoln's Birthday"),
                "MD" if year >= 2008 => Some("American Indian Heritage Day"),
                "NV" => Some("Family Day"),
                "NM" => Some("Presidents' Day"),
                _ => None,
            };
            if let Some(name) = day_after {
                cx.add(thanksgiving.add_days(1), name)?;
            }
        }

        if state == "GA" && year >= 2012 {
            cx.add(ymd(11, 29).on_or_before(Friday), "Robert E. Lee's Birthday")?;
        }

        if state == "GU" {
            cx.add_ymd(12, 8, "Lady of Camarin Day")?;
        }

        if state == "AS"
            || (matches!(state, "KS" | "MI" | "NC") && year >= 2013)
            || (state == "TX" && year >= 1981)
            || (state == "WI" && year >= 2012)
        {
            add_with_observed(cx, ymd(12, 24), "Christmas Eve", CHRISTMAS_EVE)?;
        }

        if year > 1870 {
            let rule = SAT_TO_PREV_FRI_SUN_TO_NEXT_MON;
            add_with_observed(cx, ymd(12, 25), "Christmas Day", rule)?;
        }

        if state == "NC" && year >= 2013 {
            add_with_observed(cx, ymd(12, 26), "Day After Christmas", DAY_AFTER_CHRISTMAS)?;
        } else if state == "TX" && year >= 1981 {
            cx.add_ymd(12, 26, "Day After Christmas")?;
        } else if state == "VI" {
            cx.add_ymd(12, 26, "Christmas Second Day")?;
        }

        if (matches!(state, "KY" | "MI") && year >= 2013) || (state == "WI" && year >= 2012) {
            add_with_observed(cx, ymd(12, 31), "New Year's Eve", SAT_TO_PREV_FRI)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Holidays, HolidaysOptions};

    fn state(code: &str, year: i32) -> Holidays {
        Holidays::new(UnitedStates, HolidaysOptions::new().year(year).subdivision(code)).unwrap()
    }

    #[test]
    fn federal_names() {
        let holidays = Holidays::new(UnitedStates, HolidaysOptions::new().year(1950)).unwrap();
        let names: Vec<_> = holidays.iter().map(|(_, name)| name).collect();
        assert!(names.contains(&"Armistice Day"));
        assert!(names.contains(&"Washington's Birthday"));
        assert!(!names.contains(&"Martin Luther King, Jr. Day"));
    }

    #[test]
    fn state_holidays() {
        let mut tx = state("TX", 2015);
        assert_eq!(tx.name("2015-03-02").unwrap(), "Texas Independence Day");
        assert_eq!(tx.name("2015-04-03").unwrap(), "Good Friday");
        assert_eq!(tx.name("2015-11-27").unwrap(), "Friday After Thanksgiving");
        assert_eq!(tx.name("2015-12-26").unwrap(), "Day After Christmas");

        let mut ga = state("GA", 2015);
        // Washington's Birthday moves to Christmas Eve in Georgia.
        assert_eq!(ga.name("2015-12-24").unwrap(), "Washington's Birthday");
        assert_eq!(ga.name("2015-11-27").unwrap(), "Robert E. Lee's Birthday");
        assert!(!ga.contains("2015-01-19").unwrap());
    }

    #[test]
    fn inauguration_day() {
        // 2017-01-20 is a Friday, 2013-01-20 a Sunday.
        let mut dc = state("DC", 2017);
        assert_eq!(dc.name("2017-01-20").unwrap(), "Inauguration Day");
        assert_eq!(
            dc.name("2013-01-21").unwrap(),
            "Inauguration Day (Observed), Martin Luther King, Jr. Day"
        );
        assert_eq!(dc.name("2014-01-20").unwrap(), "Martin Luther King, Jr. Day");
    }

    #[test]
    fn christmas_eve_observed() {
        // 2021-12-24 is a Friday.
        let mut nc = state("NC", 2021);
        assert_eq!(nc.name("2021-12-23").unwrap(), "Christmas Eve (Observed)");
        assert_eq!(
            nc.name("2021-12-24").unwrap(),
            "Christmas Eve, Christmas Day (Observed)"
        );
        assert_eq!(nc.name("2021-12-27").unwrap(), "Day After Christmas (Observed)");
        assert_eq!(nc.name("2021-12-31").unwrap(), "New Year's Day (Observed)");
    }
}
