//! Islamic (Hijri) observances: static Umm al-Qura table plus converter-based estimation.

use hijri_date::HijriDate;
use log::trace;

use crate::{data, date::Date};

/// Gregorian years the Hijri converter can estimate without leaving its range.
pub const ESTIMATION_YEARS: std::ops::RangeInclusive<i32> = 1939..=2076;

/// Named observances with a fixed Hijri month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Observance {
    EidAlFitr = 0,
    EidAlAdha = 1,
    ArafahDay = 2,
    Mawlid = 3,
    IslamicNewYear = 4,
    Ashura = 5,
    IsraAndMiraj = 6,
    RamadanBeginning = 7,
    NuzulAlQuran = 8,
    /// Anniversary of the death of Sultan Iskandar of Johor.
    HariHolJohor = 9,
}

impl Observance {
    pub const ALL: [Observance; 10] = [
        Observance::EidAlFitr,
        Observance::EidAlAdha,
        Observance::ArafahDay,
        Observance::Mawlid,
        Observance::IslamicNewYear,
        Observance::Ashura,
        Observance::IsraAndMiraj,
        Observance::RamadanBeginning,
        Observance::NuzulAlQuran,
        Observance::HariHolJohor,
    ];

    /// Hijri `(month, day)` of the observance.
    pub const fn hijri_month_day(self) -> (u32, u32) {
        match self {
            Observance::EidAlFitr => (10, 1),
            Observance::EidAlAdha => (12, 10),
            Observance::ArafahDay => (12, 9),
            Observance::Mawlid => (3, 12),
            Observance::IslamicNewYear => (1, 1),
            Observance::Ashura => (1, 10),
            Observance::IsraAndMiraj => (7, 27),
            Observance::RamadanBeginning => (9, 1),
            Observance::NuzulAlQuran => (9, 17),
            Observance::HariHolJohor => (2, 6),
        }
    }
}

/// Dates listed in the static table for `observance` in Gregorian `year`.
///
/// Empty when the table has no row for that year.
pub fn lookup(year: i32, observance: Observance) -> &'static [Date] {
    data::islamic_dates(observance, year).unwrap_or(&[])
}

/// Every Gregorian date in `year` on which the observance's Hijri month and day fall,
/// computed with the Umm al-Qura converter.
///
/// Returns an empty list outside [`ESTIMATION_YEARS`].
pub fn estimate(year: i32, observance: Observance) -> Vec<Date> {
    if !ESTIMATION_YEARS.contains(&year) {
        return Vec::new();
    }

    let (month, day) = observance.hijri_month_day();
    let first = Date::from_ymd(year, 1, 1);
    let last = Date::from_ymd(year, 12, 31);
    (0..=last - first)
        .map(|offset| first.add_days(offset))
        .filter(|date| {
            let (y, m, d) = date.ymd();
            HijriDate::from_gr(y as usize, m as usize, d as usize)
                .is_ok_and(|it| it.month() as u32 == month && it.day() as u32 == day)
        })
        .collect()
}

/// Dates of `observance` in `year`, each flagged `true` when it was estimated.
pub fn dates(year: i32, observance: Observance) -> Vec<(Date, bool)> {
    let exact = lookup(year, observance);
    if !exact.is_empty() {
        return exact.iter().map(|it| (*it, false)).collect();
    }

    let estimated = estimate(year, observance);
    if !estimated.is_empty() {
        trace!("estimating {observance:?} for {year}: {estimated:?}");
    }
    estimated.into_iter().map(|it| (it, true)).collect()
}
