//! Thai lunisolar calendar for Buddhist holy days, Gregorian years 1941 to 2057.

use crate::date::Date;

pub const FIRST_YEAR: i32 = 1941;
pub const LAST_YEAR: i32 = 2057;

/// Start of the 1941 lunar year.
const START_DATE: Date = Date::from_ymd(1940, 11, 30);

const ATHIKAWAN_YEARS: &[i32] = &[
    1945, 1949, 1952, 1957, 1963, 1970, 1973, 1979, 1987, 1990, 1997, 2000, 2006, 2009, 2016,
    2020, 2025, 2032, 2035, 2043, 2046, 2052,
];

const ATHIKAMAT_YEARS: &[i32] = &[
    1942, 1944, 1947, 1950, 1953, 1956, 1958, 1961, 1964, 1966, 1969, 1972, 1975, 1977, 1980,
    1983, 1985, 1988, 1991, 1994, 1996, 1999, 2002, 2004, 2007, 2010, 2012, 2015, 2018, 2021,
    2023, 2026, 2029, 2031, 2034, 2037, 2040, 2042, 2045, 2048, 2050, 2053, 2056,
];

/// Intercalation type of a Thai lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearType {
    /// Normal 354-day year.
    Pakatimat,
    /// Extra day in the 7th month, 355 days.
    Athikawan,
    /// Second 8th month, 384 days.
    Athikamat,
}

impl YearType {
    pub fn of(year: i32) -> YearType {
        if ATHIKAMAT_YEARS.binary_search(&year).is_ok() {
            YearType::Athikamat
        } else if ATHIKAWAN_YEARS.binary_search(&year).is_ok() {
            YearType::Athikawan
        } else {
            YearType::Pakatimat
        }
    }

    pub const fn days(self) -> i64 {
        match self {
            YearType::Pakatimat => 354,
            YearType::Athikawan => 355,
            YearType::Athikamat => 384,
        }
    }
}

/// Buddhist holy days derived from the Thai lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Festival {
    /// Full moon of month 3.
    MakhaBucha,
    /// Full moon of month 6.
    VisakhaBucha,
    /// 8th waning day of month 6.
    AtthamiBucha,
    /// Full moon of month 8.
    AsarnhaBucha,
    /// 1st waning day of month 8.
    KhaoPhansa,
    /// Full moon of month 11.
    OkPhansa,
    /// Full moon of month 12.
    LoyKrathong,
}

impl Festival {
    /// Days after the lunar year start, by year type.
    const fn offset(self, year_type: YearType) -> i64 {
        use YearType::*;
        match (self, year_type) {
            (Festival::MakhaBucha, Athikamat) => 102,
            (Festival::MakhaBucha, _) => 73,
            (Festival::VisakhaBucha, Athikamat) => 191,
            (Festival::VisakhaBucha, _) => 161,
            (Festival::AtthamiBucha, Athikamat) => 199,
            (Festival::AtthamiBucha, _) => 169,
            (Festival::AsarnhaBucha, Athikamat) => 250,
            (Festival::AsarnhaBucha, Athikawan) => 221,
            (Festival::AsarnhaBucha, Pakatimat) => 220,
            (Festival::KhaoPhansa, Athikamat) => 251,
            (Festival::KhaoPhansa, Athikawan) => 222,
            (Festival::KhaoPhansa, Pakatimat) => 221,
            (Festival::OkPhansa, Athikamat) => 339,
            (Festival::OkPhansa, Athikawan) => 310,
            (Festival::OkPhansa, Pakatimat) => 309,
            (Festival::LoyKrathong, Athikamat) => 368,
            (Festival::LoyKrathong, Athikawan) => 339,
            (Festival::LoyKrathong, Pakatimat) => 338,
        }
    }
}

/// Lunar year start for every supported year, computed on first use.
fn start_dates() -> &'static [Date] {
    static STARTS: std::sync::OnceLock<Vec<Date>> = std::sync::OnceLock::new();
    STARTS.get_or_init(|| {
        let mut date = START_DATE;
        (FIRST_YEAR..=LAST_YEAR)
            .map(|year| {
                let start = date;
                date = date.add_days(YearType::of(year).days());
                start
            })
            .collect()
    })
}

/// First day of the Thai lunar year that `year`'s festivals belong to.
///
/// Usually late November or December of the previous Gregorian year.
pub fn year_start(year: i32) -> Option<Date> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return None;
    }
    start_dates().get((year - FIRST_YEAR) as usize).copied()
}

pub fn festival_date(festival: Festival, year: i32) -> Option<Date> {
    let start = year_start(year)?;
    Some(start.add_days(festival.offset(YearType::of(year))))
}

#[inline]
pub fn makha_bucha(year: i32) -> Option<Date> {
    festival_date(Festival::MakhaBucha, year)
}

#[inline]
pub fn visakha_bucha(year: i32) -> Option<Date> {
    festival_date(Festival::VisakhaBucha, year)
}

#[inline]
pub fn atthami_bucha(year: i32) -> Option<Date> {
    festival_date(Festival::AtthamiBucha, year)
}

#[inline]
pub fn asarnha_bucha(year: i32) -> Option<Date> {
    festival_date(Festival::AsarnhaBucha, year)
}

#[inline]
pub fn khao_phansa(year: i32) -> Option<Date> {
    festival_date(Festival::KhaoPhansa, year)
}

#[inline]
pub fn ok_phansa(year: i32) -> Option<Date> {
    festival_date(Festival::OkPhansa, year)
}

#[inline]
pub fn loy_krathong(year: i32) -> Option<Date> {
    festival_date(Festival::LoyKrathong, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_starts() {
        assert_eq!(year_start(1941), Some(START_DATE));
        assert_eq!(year_start(2023), Some(Date::from_ymd(2022, 11, 24)));
        assert_eq!(year_start(2057), Some(Date::from_ymd(2056, 12, 7)));
        assert_eq!(year_start(1940), None);
        assert_eq!(year_start(2058), None);
    }

    #[test]
    fn festivals() {
        assert_eq!(makha_bucha(2023), Some(Date::from_ymd(2023, 3, 6)));
        assert_eq!(visakha_bucha(2010), Some(Date::from_ymd(2010, 5, 28)));
        assert_eq!(atthami_bucha(2023), Some(Date::from_ymd(2023, 6, 11)));
        assert_eq!(asarnha_bucha(2023), Some(Date::from_ymd(2023, 8, 1)));
        assert_eq!(khao_phansa(2023), Some(Date::from_ymd(2023, 8, 2)));
        assert_eq!(ok_phansa(2023), Some(Date::from_ymd(2023, 10, 29)));
        assert_eq!(loy_krathong(2023), Some(Date::from_ymd(2023, 11, 27)));
        assert_eq!(makha_bucha(2058), None);
    }

    #[test]
    fn year_types() {
        assert_eq!(YearType::of(2023), YearType::Athikamat);
        assert_eq!(YearType::of(2025), YearType::Athikawan);
        assert_eq!(YearType::of(2024), YearType::Pakatimat);
    }
}
