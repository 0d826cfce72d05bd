use super::{add_with_observed, new_years_day};
use crate::{
    date::Date,
    observed::SAT_TO_PREV_FRI_SUN_TO_NEXT_MON,
    rules::{HolidayRules, Populate},
    weekday::Weekday::Monday,
    Error,
};

const CONSTITUTION_DAY: &str = "Día de la Constitución [Constitution Day]";
const BENITO_JUAREZ: &str = "Natalicio de Benito Juárez [Benito Juárez's birthday]";
const REVOLUTION_DAY: &str = "Día de la Revolución [Revolution Day]";
const CHANGE_OF_GOVERNMENT: &str =
    "Transmisión del Poder Ejecutivo Federal [Change of Federal Government]";

#[derive(Debug, Clone, Copy, Default)]
pub struct Mexico;

impl HolidayRules for Mexico {
    fn code(&self) -> &str {
        "MX"
    }

    fn populate(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        let year = cx.year();
        let weekend_shift = SAT_TO_PREV_FRI_SUN_TO_NEXT_MON;

        new_years_day(cx, "Año Nuevo [New Year's Day]")?;

        // Fixed dates until 2006, Mondays since.
        if (1917..=2006).contains(&year) {
            cx.add_ymd(2, 5, CONSTITUTION_DAY)?;
            cx.add_ymd(3, 21, BENITO_JUAREZ)?;
        } else if year >= 2007 {
            let date = cx.nth_weekday(1, Monday, 2)?;
            cx.add(date, CONSTITUTION_DAY)?;
            let date = cx.nth_weekday(3, Monday, 3)?;
            cx.add(date, BENITO_JUAREZ)?;
        }

        if year >= 1923 {
            let date = Date::from_ymd(year, 5, 1);
            add_with_observed(cx, date, "Día del Trabajo [Labour Day]", weekend_shift)?;
        }

        let date = Date::from_ymd(year, 9, 16);
        add_with_observed(cx, date, "Día de la Independencia [Independence Day]", weekend_shift)?;

        if (1917..=2006).contains(&year) {
            cx.add_ymd(11, 20, REVOLUTION_DAY)?;
        } else if year >= 2007 {
            let date = cx.nth_weekday(3, Monday, 11)?;
            cx.add(date, REVOLUTION_DAY)?;
        }

        // Every six years, 2018 being one of them.
        if (2018 - year).rem_euclid(6) == 0 {
            let date = Date::from_ymd(year, 12, 1);
            add_with_observed(cx, date, CHANGE_OF_GOVERNMENT, weekend_shift)?;
        }

        let date = Date::from_ymd(year, 12, 25);
        add_with_observed(cx, date, "Navidad [Christmas]", weekend_shift)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Holidays, HolidaysOptions};

    #[test]
    fn mondays_since_2007() {
        let mut holidays = Holidays::new(Mexico, HolidaysOptions::new()).unwrap();
        assert_eq!(holidays.name("2006-02-05").unwrap(), CONSTITUTION_DAY);
        assert_eq!(holidays.name("2007-02-05").unwrap(), CONSTITUTION_DAY);
        assert_eq!(holidays.name("2007-03-19").unwrap(), BENITO_JUAREZ);
        assert_eq!(holidays.name("2007-11-19").unwrap(), REVOLUTION_DAY);
    }

    #[test]
    fn change_of_government() {
        let mut holidays = Holidays::new(Mexico, HolidaysOptions::new()).unwrap();
        assert_eq!(holidays.name("2018-12-01").unwrap(), CHANGE_OF_GOVERNMENT);
        assert!(holidays.contains("2024-12-01").unwrap());
        assert!(!holidays.contains("2020-12-01").unwrap());
    }

    #[test]
    fn weekend_shifts_keep_their_names() {
        // 2016-05-01 and 2016-12-25 are Sundays.
        let mut holidays = Holidays::new(Mexico, HolidaysOptions::new().year(2016)).unwrap();
        assert_eq!(
            holidays.name("2016-05-02").unwrap(),
            "Día del Trabajo [Labour Day] (Observed)"
        );
        assert_eq!(
            holidays.name("2016-12-26").unwrap(),
            "Navidad [Christmas] (Observed)"
        );
    }
}
