use crate::{
    calendars::thai,
    date::Date,
    observed::{
        ObservedRule, Shift, SAT_SUN_TO_NEXT_MON, SAT_SUN_TO_NEXT_MON_TUE, SAT_SUN_TO_NEXT_TUE,
        SAT_SUN_TO_NEXT_WORKDAY, SAT_TO_NEXT_MON,
    },
    options::Category,
    rules::{HolidayRules, Populate},
    weekday::Weekday::*,
    Error,
};

/// Songkran starting on a Thursday or later runs into the weekend.
const SONGKRAN: ObservedRule = SAT_SUN_TO_NEXT_WORKDAY
    .with(Thursday, Shift::NextWorkday)
    .with(Friday, Shift::NextWorkday);

/// Day in May of the Royal Ploughing Ceremony; May 13 when missing.
const ROYAL_PLOUGHING: &[(i32, u32)] = &[
    (1960, 2), (1961, 11), (1962, 7), (1963, 10), (1964, 8), (1965, 13), (1966, 13),
    (1967, 11), (1968, 10), (1969, 9), (1970, 8), (1971, 7), (1972, 8), (1973, 7),
    (1974, 8), (1975, 7), (1976, 10), (1977, 12), (1978, 11), (1979, 7), (1980, 14),
    (1981, 7), (1982, 19), (1983, 11), (1984, 10), (1985, 9), (1986, 9), (1987, 8),
    (1988, 11), (1989, 11), (1990, 11), (1991, 10), (1992, 14), (1993, 17), (1994, 11),
    (1995, 10), (1996, 16), (1997, 9), (1998, 8), (2000, 15), (2001, 16), (2002, 9),
    (2003, 8), (2004, 7), (2005, 11), (2006, 11), (2007, 10), (2008, 9), (2009, 11),
    (2010, 13), (2011, 13), (2012, 9), (2013, 13), (2014, 9), (2015, 13), (2016, 9),
    (2017, 12), (2018, 14), (2019, 9), (2020, 11), (2021, 10), (2022, 13), (2023, 17),
    (2024, 10), (2025, 9),
];

/// Thai holidays: public, armed forces, bank, government, school and workday observances.
#[derive(Debug, Clone, Copy, Default)]
pub struct Thailand;

/// Observed days were only granted in some periods.
fn observes(year: i32) -> bool {
    (1961..=1973).contains(&year) || (1995..=1997).contains(&year) || year >= 2001
}

fn observe(cx: &mut Populate<'_>, date: Date, rule: ObservedRule) {
    if observes(cx.year()) {
        cx.add_observed(date, rule);
    }
}

/// Adds `name` on `date`, observed on Monday when it falls on a weekend.
fn add_observed(cx: &mut Populate<'_>, date: Date, name: &str) -> Result<Date, Error> {
    let date = cx.add(date, name)?;
    observe(cx, date, SAT_SUN_TO_NEXT_MON);
    Ok(date)
}

impl Thailand {
    fn public(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        let year = cx.year();
        let ymd = |month, day| Date::from_ymd(year, month, day);

        add_observed(cx, ymd(1, 1), "New Year's Day")?;

        if year >= 1955 && year != 1964 {
            let date = if year <= 1963 {
                cx.nth_weekday(1, Monday, 10)?
            } else {
                cx.nth_weekday(2, Saturday, 1)?
            };
            cx.add(date, "National Children's Day")?;
        }

        add_observed(cx, ymd(4, 6), "Chakri Memorial Day")?;

        if (1948..=1953).contains(&year) || (year >= 1957 && year != 2020) {
            let name = "Songkran Festival";
            if (1957..=1988).contains(&year) {
                add_observed(cx, ymd(4, 13), name)?;
            } else {
                let first = if (1989..=1997).contains(&year) { 12 } else { 13 };
                for day in first..first + 3 {
                    cx.add_ymd(4, day, name)?;
                }
                if year >= 1995 {
                    observe(cx, ymd(4, first), SONGKRAN);
                }
            }
        }

        if year >= 1974 {
            add_observed(cx, ymd(5, 1), "National Labor Day")?;
        }

        let national_day = if year <= 1959 { ymd(6, 24) } else { ymd(12, 5) };
        add_observed(cx, national_day, "National Day")?;

        if (1958..=2016).contains(&year) {
            add_observed(cx, ymd(5, 5), "Coronation Day")?;
        } else if year >= 2020 {
            add_observed(cx, ymd(5, 4), "Coronation Day")?;
        }

        if year >= 2019 {
            add_observed(cx, ymd(6, 3), "HM Queen Suthida's Birthday")?;
        }

        if year >= 2017 {
            add_observed(cx, ymd(7, 28), "HM King Maha Vajiralongkorn's Birthday")?;
        }

        if year >= 1976 {
            let name = if year >= 2017 {
                "HM Queen Sirikit The Queen Mother's Birthday"
            } else {
                "HM Queen Sirikit's Birthday"
            };
            add_observed(cx, ymd(8, 12), name)?;
        }

        if (1950..=1957).contains(&year) {
            add_observed(cx, ymd(4, 15), "National Mother's Day")?;
        } else if year >= 1976 {
            add_observed(cx, ymd(8, 12), "National Mother's Day")?;
        }

        if year >= 2017 {
            let name = if year >= 2023 {
                "HM King Bhumibol Adulyadej the Great Memorial Day"
            } else if year >= 2019 {
                "Anniversary for the Death of King Bhumibol Adulyadej the Great"
            } else {
                "Anniversary for the Death of King Bhumibol Adulyadej"
            };
            add_observed(cx, ymd(10, 13), name)?;
        }

        add_observed(cx, ymd(10, 23), "Chulalongkorn Day")?;

        if year >= 1960 {
            let name = if year >= 2019 {
                "HM King Bhumibol Adulyadej the Great's Birthday"
            } else if year >= 2016 {
                "HM King Bhumibol Adulyadej's Birthday Anniversary"
            } else {
                "HM King Bhumibol Adulyadej's Birthday"
            };
            add_observed(cx, ymd(12, 5), name)?;
        }

        if year >= 1980 {
            add_observed(cx, ymd(12, 5), "National Father's Day")?;
        }

        add_observed(cx, ymd(12, 10), "Constitution Day")?;

        // Last year's New Year's Eve is observed early in January.
        let name = "New Year's Eve";
        cx.add_ymd(12, 31, name)?;
        if year >= 1995 && year != 2024 && observes(year) {
            cx.add_observed_named(Date::from_ymd(year - 1, 12, 31), name, SAT_SUN_TO_NEXT_TUE);
        }

        if let Some(date) = cx.add_opt(thai::makha_bucha(year), "Makha Bucha")? {
            observe(cx, date, SAT_SUN_TO_NEXT_MON);
        }
        if let Some(date) = cx.add_opt(thai::visakha_bucha(year), "Visakha Bucha")? {
            observe(cx, date, SAT_SUN_TO_NEXT_MON);
        }
        if let Some(date) = cx.add_opt(thai::asarnha_bucha(year), "Asarnha Bucha")? {
            observe(cx, date, SAT_SUN_TO_NEXT_MON_TUE);
        }
        if let Some(date) = cx.add_opt(thai::khao_phansa(year), "Buddhist Lent Day")? {
            observe(cx, date, SAT_TO_NEXT_MON);
        }
        Ok(())
    }

    fn armed_forces(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        let year = cx.year();
        if year >= 1959 {
            let (month, day) = if year >= 2007 {
                (1, 18)
            } else if year >= 1980 {
                (1, 25)
            } else {
                (4, 8)
            };
            cx.add_ymd(month, day, "Royal Thai Armed Forces Day")?;
        }
        Ok(())
    }

    fn bank(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        let year = cx.year();
        if year <= 1942 {
            return Ok(());
        }
        if year <= 2021 {
            cx.add_ymd(4, 1, "Annual Closing Day for the Bank for Agriculture and Agricultural Cooperatives")?;
        }
        if year <= 2018 {
            cx.add_ymd(7, 1, "Mid-Year Closing Day")?;
        }
        Ok(())
    }

    fn government(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        let year = cx.year();
        if (1960..=2025).contains(&year) && year != 1999 {
            let day = ROYAL_PLOUGHING
                .iter()
                .find(|(y, _)| *y == year)
                .map_or(13, |(_, day)| *day);
            add_observed(cx, Date::from_ymd(year, 5, day), "Royal Ploughing Ceremony")?;
        }
        Ok(())
    }

    fn school(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        if cx.year() >= 1957 {
            cx.add_ymd(1, 16, "Teacher's Day")?;
        }
        Ok(())
    }

    fn workday(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        let year = cx.year();
        if year >= 1948 {
            cx.add_ymd(2, 3, "Thai Veterans Day")?;
        }
        if year >= 1982 {
            cx.add_ymd(8, 18, "National Science Day")?;
        }
        if year >= 1985 {
            cx.add_ymd(2, 26, "National Artist Day")?;
        }
        if year >= 1989 {
            cx.add_ymd(3, 8, "International Women's Day")?;
        }
        if year >= 1990 {
            cx.add_ymd(1, 14, "National Forest Conservation Day")?;
            cx.add_ymd(1, 17, "Pho Khun Ramkhamhaeng the Great Day")?;
        }
        if year >= 1995 {
            cx.add_ymd(1, 13, "National Aviation Day")?;
        }
        if year >= 2017 {
            cx.add_ymd(9, 28, "Thai National Flag Day")?;
        }
        cx.add_opt(thai::loy_krathong(year), "Loy Krathong")?;
        Ok(())
    }
}

impl HolidayRules for Thailand {
    fn code(&self) -> &str {
        "TH"
    }

    fn supported_categories(&self) -> &'static [Category] {
        &[
            Category::Public,
            Category::ArmedForces,
            Category::Bank,
            Category::Government,
            Category::School,
            Category::Workday,
        ]
    }

    fn populate(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        if cx.year() <= 1940 {
            return Ok(());
        }
        if cx.has_category(Category::Public) {
            self.public(cx)?;
        }
        if cx.has_category(Category::ArmedForces) {
            self.armed_forces(cx)?;
        }
        if cx.has_category(Category::Bank) {
            self.bank(cx)?;
        }
        if cx.has_category(Category::Government) {
            self.government(cx)?;
        }
        if cx.has_category(Category::School) {
            self.school(cx)?;
        }
        if cx.has_category(Category::Workday) {
            self.workday(cx)?;
        }
        Ok(())
    }
}
