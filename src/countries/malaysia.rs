use std::collections::BTreeSet;

use crate::{
    calendars::{chinese, islamic::Observance},
    date::Date,
    easter::EasterMethod,
    observed::{ObservedRule, FRI_TO_NEXT_WORKDAY, SAT_TO_NEXT_WORKDAY, SUN_TO_NEXT_WORKDAY},
    rules::{HolidayRules, Populate, SAT_SUN},
    weekday::Weekday::{self, *},
    Error,
};

const STATES: &[&str] = &[
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15",
    "16",
];

const STATE_ALIASES: &[(&str, &str)] = &[
    ("Johor", "01"),
    ("JHR", "01"),
    ("Kedah", "02"),
    ("KDH", "02"),
    ("Kelantan", "03"),
    ("KTN", "03"),
    ("Melaka", "04"),
    ("MLK", "04"),
    ("Negeri Sembilan", "05"),
    ("NSN", "05"),
    ("Pahang", "06"),
    ("PHG", "06"),
    ("Pulau Pinang", "07"),
    ("PNG", "07"),
    ("Perak", "08"),
    ("PRK", "08"),
    ("Perlis", "09"),
    ("PLS", "09"),
    ("Selangor", "10"),
    ("SGR", "10"),
    ("Terengganu", "11"),
    ("TRG", "11"),
    ("Sabah", "12"),
    ("SBH", "12"),
    ("Sarawak", "13"),
    ("SWK", "13"),
    ("WP Kuala Lumpur", "14"),
    ("KUL", "14"),
    ("WP Labuan", "15"),
    ("LBN", "15"),
    ("WP Putrajaya", "16"),
    ("PJY", "16"),
];

const FRI_SAT: &[Weekday] = &[Friday, Saturday];

const NEW_YEAR: &str = "New Year's Day";
const THAIPUSAM: &str = "Thaipusam";
const DEEPAVALI: &str = "Deepavali";
const ISRA_MIRAJ: &str = "Isra' and Mi'raj";
const RAMADAN: &str = "Beginning of Ramadan";
const NUZUL_AL_QURAN: &str = "Nuzul Al-Quran Day";
const ARAFAH: &str = "Arafat Day";
const EID_AL_ADHA_TWO: &str = "Eid al-Adha (Second Day)";
const KAAMATAN: &str = "Pesta Kaamatan";
const FEDERAL_TERRITORY_DAY: &str = "Federal Territory Day";

/// Johor and Kedah rest on Friday, Kelantan and Terengganu on Saturday.
fn state_week(state: Option<&str>, year: i32) -> (&'static [Weekday], ObservedRule) {
    match state {
        Some("01") if year <= 1994 || (2014..=2024).contains(&year) => {
            (FRI_SAT, FRI_TO_NEXT_WORKDAY)
        }
        Some("02") => (FRI_SAT, FRI_TO_NEXT_WORKDAY),
        Some("03" | "11") => (FRI_SAT, SAT_TO_NEXT_WORKDAY),
        _ => (SAT_SUN, SUN_TO_NEXT_WORKDAY),
    }
}

/// Federal holidays of Malaysia plus those of the requested state or federal territory.
///
/// Holidays falling on the state's rest day are observed on the next workday.
#[derive(Debug, Clone, Copy, Default)]
pub struct Malaysia;

/// Dates eligible for an observed day.
struct Observed<'a, 'b> {
    cx: &'a mut Populate<'b>,
    dates: BTreeSet<Date>,
}

impl Observed<'_, '_> {
    fn add(&mut self, date: Date, name: &str) -> Result<(), Error> {
        let date = self.cx.add(date, name)?;
        self.dates.insert(date);
        Ok(())
    }

    fn add_ymd(&mut self, month: u32, day: u32, name: &str) -> Result<(), Error> {
        let date = Date::try_from_ymd(self.cx.year(), month, day)?;
        self.add(date, name)
    }

    fn add_opt(&mut self, date: Option<Date>, name: &str) -> Result<(), Error> {
        match date {
            Some(date) => self.add(date, name),
            None => Ok(()),
        }
    }

    fn islamic(&mut self, observance: Observance, name: &str, days_delta: i64) {
        let dates = self.cx.islamic(observance, name, days_delta);
        self.dates.extend(dates);
    }
}

impl Malaysia {
    fn federal(&self, obs: &mut Observed<'_, '_>) -> Result<(), Error> {
        let year = obs.cx.year();

        if let Some(new_year) = chinese::lunar_new_year(year) {
            obs.add(new_year, "Chinese New Year")?;
            obs.add(new_year.add_days(1), "Chinese New Year (Second Day)")?;
        }
        obs.add_opt(chinese::vesak_may(year), "Vesak Day")?;
        if year >= 1973 {
            obs.add_ymd(5, 1, "Labour Day")?;
        }

        let name = "Birthday of SPB Yang di-Pertuan Agong";
        if year <= 2016 {
            let date = obs.cx.nth_weekday(1, Saturday, 6)?;
            obs.add(date, name)?;
        } else if year <= 2019 {
            obs.add_ymd(9, 9, name)?;
        } else if year == 2020 {
            obs.add_ymd(6, 8, name)?;
        } else {
            let date = obs.cx.nth_weekday(1, Monday, 6)?;
            obs.add(date, name)?;
        }

        obs.add_ymd(8, 31, "National Day")?;
        if year >= 2010 {
            obs.add_ymd(9, 16, "Malaysia Day")?;
        }
        obs.add_ymd(12, 25, "Christmas Day")?;

        if year >= 1995 {
            obs.cx.islamic(Observance::IslamicNewYear, "Islamic New Year", 0);
        }
        obs.islamic(Observance::Mawlid, "Prophet Muhammad's Birthday", 0);
        obs.islamic(Observance::EidAlFitr, "Eid al-Fitr", 0);
        obs.islamic(Observance::EidAlFitr, "Eid al-Fitr (Second Day)", 1);
        obs.islamic(Observance::EidAlAdha, "Eid al-Adha", 0);
        Ok(())
    }

    fn state(&self, obs: &mut Observed<'_, '_>, state: &str) -> Result<(), Error> {
        let year = obs.cx.year();

        if !matches!(state, "13" | "15") {
            obs.add_opt(chinese::southern_diwali(year), DEEPAVALI)?;
        }

        match state {
            // Johor
            "01" => {
                obs.add_opt(chinese::thaipusam(year), THAIPUSAM)?;
                if year >= 2015 {
                    obs.cx.add_ymd(3, 23, "Birthday of the Sultan of Johor")?;
                }
                if year >= 2011 {
                    obs.cx.islamic(Observance::HariHolJohor, "The Sultan of Johor Hol", 0);
                }
                obs.islamic(Observance::RamadanBeginning, RAMADAN, 0);
            }
            // Kedah
            "02" => {
                if year >= 2022 {
                    obs.add_opt(chinese::thaipusam(year), THAIPUSAM)?;
                }
                if year >= 2018 {
                    let name = "Birthday of the Sultan of Kedah";
                    if year == 2024 {
                        obs.cx.add_ymd(6, 30, name)?;
                    } else {
                        let date = obs.cx.nth_weekday(3, Sunday, 6)?;
                        obs.cx.add(date, name)?;
                    }
                }
                obs.islamic(Observance::IsraAndMiraj, ISRA_MIRAJ, 0);
                obs.islamic(Observance::RamadanBeginning, RAMADAN, 0);
                obs.islamic(Observance::EidAlAdha, EID_AL_ADHA_TWO, 1);
            }
            // Kelantan
            "03" => {
                if year >= 2010 {
                    let name = "Birthday of the Sultan of Kelantan";
                    let (month, day) = if year >= 2023 {
                        (9, 29)
                    } else if year >= 2012 {
                        (11, 11)
                    } else {
                        (3, 30)
                    };
                    obs.cx.add_ymd(month, day, name)?;
                    obs.cx.add_ymd(month, day + 1, name)?;
                }
                obs.islamic(Observance::NuzulAlQuran, NUZUL_AL_QURAN, 0);
                if year >= 2023 {
                    obs.islamic(Observance::ArafahDay, ARAFAH, 0);
                }
                obs.islamic(Observance::EidAlAdha, EID_AL_ADHA_TWO, 1);
            }
            // Melaka
            "04" => {
                obs.add_ymd(1, 1, NEW_YEAR)?;
                if year >= 2024 {
                    obs.add_ymd(2, 20, "Declaration of Independence Day")?;
                } else if year >= 1989 {
                    obs.add_ymd(4, 15, "Declaration of Malacca as a Historical City")?;
                }
                let name = "Birthday of the Governor of Malacca";
                if year >= 2020 {
                    obs.add_ymd(8, 24, name)?;
                } else {
                    let date = obs.cx.nth_weekday(2, Friday, 10)?;
                    obs.add(date, name)?;
                }
                obs.islamic(Observance::RamadanBeginning, RAMADAN, 0);
            }
            // Negeri Sembilan
            "05" => {
                obs.add_ymd(1, 1, NEW_YEAR)?;
                obs.add_opt(chinese::thaipusam(year), THAIPUSAM)?;
                if year >= 2009 {
                    obs.add_ymd(1, 14, "Birthday of the Sultan of Negeri Sembilan")?;
                }
                obs.islamic(Observance::IsraAndMiraj, ISRA_MIRAJ, 0);
            }
            // Pahang
            "06" => {
                obs.add_ymd(1, 1, NEW_YEAR)?;
                if year >= 1975 {
                    let (month, day) = if year >= 2020 { (5, 22) } else { (5, 7) };
                    obs.add_ymd(month, day, "Hari Hol of Sultan of Pahang")?;
                    let (month, day) = if year >= 2019 { (7, 30) } else { (10, 24) };
                    obs.add_ymd(month, day, "Birthday of the Sultan of Pahang")?;
                }
                obs.islamic(Observance::NuzulAlQuran, NUZUL_AL_QURAN, 0);
            }
            // Pulau Pinang
            "07" => {
                obs.add_ymd(1, 1, NEW_YEAR)?;
                obs.add_opt(chinese::thaipusam(year), THAIPUSAM)?;
                if year >= 2009 {
                    obs.add_ymd(7, 7, "George Town Heritage Day")?;
                }
                let date = obs.cx.nth_weekday(2, Saturday, 7)?;
                obs.add(date, "Birthday of the Governor of Penang")?;
                obs.islamic(Observance::NuzulAlQuran, NUZUL_AL_QURAN, 0);
            }
            // Perak
            "08" => {
                obs.add_ymd(1, 1, NEW_YEAR)?;
                obs.add_opt(chinese::thaipusam(year), THAIPUSAM)?;
                let name = "Birthday of the Sultan of Perak";
                if year >= 2018 {
                    let date = obs.cx.nth_weekday(1, Friday, 11)?;
                    obs.cx.add(date, name)?;
                } else {
                    obs.cx.add_ymd(11, 27, name)?;
                }
                obs.islamic(Observance::NuzulAlQuran, NUZUL_AL_QURAN, 0);
            }
            // Perlis
            "09" => {
                if year >= 2000 {
                    let (month, day) = if (2018..=2021).contains(&year) { (7, 17) } else { (5, 17) };
                    obs.add_ymd(month, day, "Birthday of The Raja of Perlis")?;
                }
                obs.islamic(Observance::IsraAndMiraj, ISRA_MIRAJ, 0);
                obs.islamic(Observance::NuzulAlQuran, NUZUL_AL_QURAN, 0);
                obs.islamic(Observance::EidAlAdha, EID_AL_ADHA_TWO, 1);
            }
            // Selangor
            "10" => {
                obs.add_ymd(1, 1, NEW_YEAR)?;
                obs.add_opt(chinese::thaipusam(year), THAIPUSAM)?;
                obs.add_ymd(12, 11, "Birthday of The Sultan of Selangor")?;
                obs.islamic(Observance::NuzulAlQuran, NUZUL_AL_QURAN, 0);
            }
            // Terengganu
            "11" => {
                if year >= 2000 {
                    obs.add_ymd(3, 4, "Anniversary of the Installation of the Sultan of Terengganu")?;
                    obs.add_ymd(4, 26, "Birthday of the Sultan of Terengganu")?;
                }
                if year >= 2020 {
                    obs.islamic(Observance::IsraAndMiraj, ISRA_MIRAJ, 0);
                }
                obs.islamic(Observance::NuzulAlQuran, NUZUL_AL_QURAN, 0);
                obs.islamic(Observance::ArafahDay, ARAFAH, 0);
                obs.islamic(Observance::EidAlAdha, EID_AL_ADHA_TWO, 1);
            }
            // Sabah
            "12" => {
                obs.add_ymd(1, 1, NEW_YEAR)?;
                let easter = obs.cx.easter(EasterMethod::Western)?;
                obs.cx.add(easter.add_days(-2), "Good Friday")?;
                obs.cx.add_ymd(5, 30, KAAMATAN)?;
                obs.cx.add_ymd(5, 31, KAAMATAN)?;
                let date = obs.cx.nth_weekday(1, Saturday, 10)?;
                obs.cx.add(date, "Birthday of the Governor of Sabah")?;
                if year >= 2019 {
                    obs.cx.add_ymd(12, 24, "Christmas Eve")?;
                }
            }
            // Sarawak
            "13" => {
                obs.add_ymd(1, 1, NEW_YEAR)?;
                let easter = obs.cx.easter(EasterMethod::Western)?;
                obs.cx.add(easter.add_days(-2), "Good Friday")?;
                if year >= 1965 {
                    obs.add_ymd(6, 1, "Dayak Festival Day")?;
                    obs.add_ymd(6, 2, "Dayak Festival Day")?;
                }
                let date = obs.cx.nth_weekday(2, Saturday, 10)?;
                obs.cx.add(date, "Birthday of the Governor of Sarawak")?;
                if year >= 2017 {
                    obs.add_ymd(7, 22, "Sarawak Independence Day")?;
                }
            }
            // Kuala Lumpur and Putrajaya
            "14" | "16" => {
                obs.add_ymd(1, 1, NEW_YEAR)?;
                obs.add_opt(chinese::thaipusam(year), THAIPUSAM)?;
                if year >= 1974 {
                    obs.add_ymd(2, 1, FEDERAL_TERRITORY_DAY)?;
                }
                obs.islamic(Observance::NuzulAlQuran, NUZUL_AL_QURAN, 0);
            }
            // Labuan
            "15" => {
                obs.add_ymd(1, 1, NEW_YEAR)?;
                if year >= 1974 {
                    obs.add_ymd(2, 1, FEDERAL_TERRITORY_DAY)?;
                }
                obs.cx.add_ymd(5, 30, KAAMATAN)?;
                obs.cx.add_ymd(5, 31, KAAMATAN)?;
                if year >= 2014 {
                    obs.add_opt(chinese::southern_diwali(year), DEEPAVALI)?;
                }
                obs.islamic(Observance::NuzulAlQuran, NUZUL_AL_QURAN, 0);
            }
            _ => {}
        }
        Ok(())
    }
}

impl HolidayRules for Malaysia {
    fn code(&self) -> &str {
        "MY"
    }

    fn subdivisions(&self) -> &'static [&'static str] {
        STATES
    }

    fn subdivision_aliases(&self) -> &'static [(&'static str, &'static str)] {
        STATE_ALIASES
    }

    fn weekend(&self, subdivision: Option<&str>, year: i32) -> &'static [Weekday] {
        state_week(subdivision, year).0
    }

    fn populate(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        let year = cx.year();
        if year < 1952 {
            return Ok(());
        }
        let state = cx.subdivision().map(str::to_owned);
        let (_, rule) = state_week(state.as_deref(), year);

        let mut obs = Observed { cx, dates: BTreeSet::new() };
        self.federal(&mut obs)?;
        if let Some(state) = state.as_deref() {
            self.state(&mut obs, state)?;
        }

        let Observed { cx, dates } = obs;
        cx.observe_all(&dates, rule, false);
        Ok(())
    }
}
