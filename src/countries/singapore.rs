use std::collections::BTreeSet;

use crate::{
    calendars::{chinese, islamic::Observance},
    date::Date,
    easter::EasterMethod,
    rules::{observed_name, HolidayRules, Populate},
    weekday::Weekday::Sunday,
    Error,
};

/// Announced dates, `(year, month, day)`.
type Announced = &'static [(i32, u32, u32)];

const HARI_RAYA_PUASA: Announced = &[
    (2001, 12, 16), (2002, 12, 6), (2003, 11, 25), (2004, 11, 14), (2005, 11, 3),
    (2006, 10, 24), (2007, 10, 13), (2008, 10, 1), (2009, 9, 20), (2010, 9, 10),
    (2011, 8, 30), (2012, 8, 19), (2013, 8, 8), (2014, 7, 28), (2015, 7, 17),
    (2016, 7, 6), (2017, 6, 25), (2018, 6, 15), (2019, 6, 5), (2020, 5, 24),
    (2021, 5, 13), (2022, 5, 3), (2023, 4, 22),
];

const HARI_RAYA_HAJI: Announced = &[
    (2001, 3, 6), (2002, 2, 23), (2003, 2, 12), (2004, 2, 1), (2005, 1, 21),
    (2006, 1, 10), (2006, 12, 31), (2007, 12, 20), (2008, 12, 8), (2009, 11, 27),
    (2010, 11, 17), (2011, 11, 6), (2012, 10, 26), (2013, 10, 15), (2014, 10, 5),
    (2015, 9, 24), (2016, 9, 12), (2017, 9, 1), (2018, 8, 22), (2019, 8, 11),
    (2020, 7, 31), (2021, 7, 20), (2022, 7, 10), (2023, 6, 29),
];

const VESAK_DAY: Announced = &[
    (2001, 5, 7), (2002, 5, 26), (2003, 5, 15), (2004, 6, 2), (2005, 5, 22),
    (2006, 5, 12), (2007, 5, 31), (2008, 5, 19), (2009, 5, 9), (2010, 5, 28),
    (2011, 5, 17), (2012, 5, 5), (2013, 5, 24), (2014, 5, 13), (2015, 6, 1),
    (2016, 5, 21), (2017, 5, 10), (2018, 5, 29), (2019, 5, 19), (2020, 5, 7),
    (2021, 5, 26), (2022, 5, 15), (2023, 6, 2),
];

const DEEPAVALI: Announced = &[
    (2001, 11, 14), (2002, 11, 3), (2003, 10, 23), (2004, 11, 11), (2005, 11, 1),
    (2006, 10, 21), (2007, 11, 8), (2008, 10, 27), (2009, 11, 15), (2010, 11, 5),
    (2011, 10, 26), (2012, 11, 13), (2013, 11, 2), (2014, 10, 22), (2015, 11, 10),
    (2016, 10, 29), (2017, 10, 18), (2018, 11, 6), (2019, 10, 27), (2020, 11, 14),
    (2021, 11, 4), (2022, 10, 24), (2023, 11, 12),
];

const SPECIAL: Announced = &[
    (2001, 11, 3), (2006, 5, 6), (2011, 5, 7), (2015, 9, 11), (2020, 7, 10),
];

fn announced(table: Announced, year: i32) -> Vec<Date> {
    table
        .iter()
        .filter(|(y, _, _)| *y == year)
        .map(|(y, m, d)| Date::from_ymd(*y, *m, *d))
        .collect()
}

/// Singapore public holidays under the Holidays Act.
///
/// Moving holidays use the dates announced for 2001 to 2023 and are computed
/// from the lunar and Hijri calendars otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct Singapore;

impl HolidayRules for Singapore {
    fn code(&self) -> &str {
        "SG"
    }

    fn populate(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        let year = cx.year();
        let mut dts_observed = BTreeSet::new();

        for date in announced(SPECIAL, year) {
            cx.add(date, "Polling Day")?;
        }
        if year == 2015 {
            cx.add_ymd(8, 7, "SG50 Public Holiday")?;
        }

        dts_observed.insert(cx.add_ymd(1, 1, "New Year's Day")?);

        if let Some(new_year) = chinese::lunar_new_year(year) {
            dts_observed.insert(cx.add(new_year, "Chinese New Year")?);
            dts_observed.insert(cx.add(new_year.add_days(1), "Chinese New Year")?);
        }

        let puasa = announced(HARI_RAYA_PUASA, year);
        if puasa.is_empty() {
            dts_observed.extend(cx.islamic(Observance::EidAlFitr, "Hari Raya Puasa", 0));
            if year <= 1968 {
                cx.islamic(Observance::EidAlFitr, "Second day of Hari Raya Puasa", 1);
            }
        } else {
            for date in puasa {
                dts_observed.insert(cx.add(date, "Hari Raya Puasa")?);
            }
        }

        let haji = announced(HARI_RAYA_HAJI, year);
        if haji.is_empty() {
            dts_observed.extend(cx.islamic(Observance::EidAlAdha, "Hari Raya Haji", 0));
        } else {
            for date in haji {
                dts_observed.insert(cx.add(date, "Hari Raya Haji")?);
            }
        }

        let easter = cx.easter(EasterMethod::Western)?;
        cx.add(easter.add_days(-2), "Good Friday")?;
        if year <= 1968 {
            cx.add(easter.add_days(-1), "Holy Saturday")?;
            cx.add(easter.add_days(1), "Easter Monday")?;
        }

        dts_observed.insert(cx.add_ymd(5, 1, "Labour Day")?);

        let vesak = announced(VESAK_DAY, year).first().copied().or_else(|| chinese::vesak(year));
        if let Some(date) = cx.add_opt(vesak, "Vesak Day")? {
            dts_observed.insert(date);
        }

        dts_observed.insert(cx.add_ymd(8, 9, "National Day")?);

        let deepavali = announced(DEEPAVALI, year)
            .first()
            .copied()
            .or_else(|| chinese::southern_diwali(year));
        if let Some(date) = cx.add_opt(deepavali, "Deepavali")? {
            dts_observed.insert(date);
        }

        dts_observed.insert(cx.add_ymd(12, 25, "Christmas Day")?);
        if year <= 1968 {
            cx.add_ymd(12, 26, "Boxing Day")?;
        }

        if !cx.observed() {
            return Ok(());
        }

        // A Sunday holiday is observed on the next day that is not itself one.
        if year >= 1998 {
            for date in dts_observed.iter().filter(|it| it.weekday() == Sunday) {
                let skip = if dts_observed.contains(&date.add_days(1)) { 2 } else { 1 };
                let observed = date.add_days(skip);
                if observed.year() == year {
                    let name = observed_name(&cx.get_list(*date).join(", "));
                    cx.add(observed, &name)?;
                }
            }
        }

        // 2006-12-31 is observed across the year boundary.
        if year == 2007 {
            cx.add_ymd(1, 2, "Hari Raya Haji (Observed)")?;
        }

        Ok(())
    }
}
