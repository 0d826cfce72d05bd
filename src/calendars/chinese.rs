//! Chinese lunisolar calendar for lunar years 1901 to 2099.

use crate::date::Date;

pub const FIRST_YEAR: i32 = 1901;
pub const LAST_YEAR: i32 = 2099;

/// Leap month marker for years without an intercalary month.
pub const NO_LEAP_MONTH: u32 = 15;

/// Gregorian date of lunar 1901-01-01.
const EPOCH: Date = Date::from_ymd(1901, 2, 19);

const YEAR_COUNT: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;

/// Bit `m` (1..=13) is set when month slot `m` has 30 days instead of 29.
/// Bits 16..=19 hold the leap month number, or 15 when there is none.
const MONTH_DAYS: [u32; YEAR_COUNT] = [
    0xF0EA4, 0xF1D4A, 0x52C94, 0xF0C96, 0xF1536, 0x42AAC, 0xF0AD4, 0xF16B2, 0x22EA4, 0xF0EA4, // 1901
    0x6364A, 0xF164A, 0xF1496, 0x52956, 0xF055A, 0xF0AD6, 0x216D2, 0xF1B52, 0x73B24, 0xF1D24, // 1911
    0xF1A4A, 0x5349A, 0xF14AC, 0xF056C, 0x42B6A, 0xF0DA8, 0xF1D52, 0x23D24, 0xF1D24, 0x61A4C, // 1921
    0xF0A56, 0xF14AE, 0x5256C, 0xF16B4, 0xF0DA8, 0x31D92, 0xF0E92, 0x72D26, 0xF1526, 0xF0A56, // 1931
    0x614B6, 0xF155A, 0xF0AD4, 0x436AA, 0xF1748, 0xF1692, 0x23526, 0xF152A, 0x72A5A, 0xF0A6C, // 1941
    0xF155A, 0x52B54, 0xF0B64, 0xF1B4A, 0x33A94, 0xF1A94, 0x8152A, 0xF152E, 0xF0AAC, 0x6156A, // 1951
    0xF15AA, 0xF0DA4, 0x41D4A, 0xF1D4A, 0xF0C94, 0x3192E, 0xF1536, 0x72AB4, 0xF0AD4, 0xF16D2, // 1961
    0x52EA4, 0xF16A4, 0xF164A, 0x42C96, 0xF1496, 0x82956, 0xF055A, 0xF0ADA, 0x616D2, 0xF1B52, // 1971
    0xF1B24, 0x43A4A, 0xF1A4A, 0xA349A, 0xF14AC, 0xF056C, 0x60B6A, 0xF0DAA, 0xF1D92, 0x53D24, // 1981
    0xF1D24, 0xF1A4C, 0x314AC, 0xF14AE, 0x829AC, 0xF06B4, 0xF0DAA, 0x52D92, 0xF0E92, 0xF0D26, // 1991
    0x42A56, 0xF0A56, 0xF14B6, 0x22AB4, 0xF0AD4, 0x736AA, 0xF1748, 0xF1692, 0x53526, 0xF152A, // 2001
    0xF0A5A, 0x4155A, 0xF156A, 0x92B54, 0xF0BA4, 0xF1B4A, 0x63A94, 0xF1A94, 0xF192A, 0x42A5C, // 2011
    0xF0AAC, 0xF156A, 0x22B64, 0xF0DA4, 0x61D52, 0xF0E4A, 0xF0C96, 0x5192E, 0xF1956, 0xF0AB4, // 2021
    0x315AC, 0xF16D2, 0xB2EA4, 0xF16A4, 0xF164A, 0x63496, 0xF1496, 0xF0956, 0x50AB6, 0xF0B5A, // 2031
    0xF16D4, 0x236A4, 0xF1B24, 0x73A4A, 0xF1A4A, 0xF14AA, 0x5295A, 0xF096C, 0xF0B6A, 0x31B54, // 2041
    0xF1D92, 0x83D24, 0xF1D24, 0xF1A4C, 0x614AC, 0xF14AE, 0xF09AC, 0x40DAA, 0xF0EAA, 0xF0E92, // 2051
    0x31D26, 0xF0D26, 0x72A56, 0xF0A56, 0xF14B6, 0x52AB4, 0xF0AD4, 0xF16CA, 0x42E94, 0xF1694, // 2061
    0x8352A, 0xF152A, 0xF0A5A, 0x6155A, 0xF156A, 0xF0B54, 0x4174A, 0xF1B4A, 0xF1A94, 0x3392A, // 2071
    0xF192C, 0x7329C, 0xF0AAC, 0xF156A, 0x52B64, 0xF0DA4, 0xF1D4A, 0x41C94, 0xF0C96, 0x8192E, // 2081
    0xF0956, 0xF0AB6, 0x615AC, 0xF16D4, 0xF0EA4, 0x42E4A, 0xF164A, 0xF1516, 0x22936, // 2091
];

const fn entry_leap_month(entry: u32) -> u32 {
    (entry >> 16) & 0x0F
}

const fn entry_month_length(entry: u32, slot: u32) -> u32 {
    29 + ((entry >> slot) & 0x01)
}

const fn entry_year_length(entry: u32) -> u32 {
    let last_slot = if entry_leap_month(entry) == NO_LEAP_MONTH {
        12
    } else {
        13
    };
    let mut days = 0;
    let mut slot = 1;
    while slot <= last_slot {
        days += entry_month_length(entry, slot);
        slot += 1;
    }
    days
}

/// Days from [`EPOCH`] to the first day of each lunar year.
static SPAN_DAYS: [u32; YEAR_COUNT] = {
    let mut spans = [0; YEAR_COUNT];
    let mut i = 1;
    while i < YEAR_COUNT {
        spans[i] = spans[i - 1] + entry_year_length(MONTH_DAYS[i - 1]);
        i += 1;
    }
    spans
};

#[inline]
fn entry(year: i32) -> Option<u32> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return None;
    }
    Some(MONTH_DAYS[(year - FIRST_YEAR) as usize])
}

/// Leap month of `year`; [`NO_LEAP_MONTH`] when the year has none.
pub fn leap_month(year: i32) -> Option<u32> {
    entry(year).map(entry_leap_month)
}

/// Length of month slot `slot` (1..=13) of `year`.
pub fn month_length(year: i32, slot: u32) -> Option<u32> {
    if !(1..=13).contains(&slot) {
        return None;
    }
    entry(year).map(|it| entry_month_length(it, slot))
}

pub fn year_length(year: i32) -> Option<u32> {
    entry(year).map(entry_year_length)
}

/// Days elapsed between lunar 1901-01-01 and the first day of lunar `year`.
pub fn days_since_epoch(year: i32) -> Option<i64> {
    entry(year)?;
    Some(SPAN_DAYS[(year - FIRST_YEAR) as usize] as i64)
}

/// Sum of the month slots before `before_slot`, starting at the first day of `year`.
fn year_offset(year: i32, before_slot: u32) -> Option<i64> {
    let entry = entry(year)?;
    let mut days = days_since_epoch(year)?;
    for slot in 1..before_slot {
        days += entry_month_length(entry, slot) as i64;
    }
    Some(days)
}

/// Gregorian date of the Chinese New Year that falls in `year`.
pub fn lunar_new_year(year: i32) -> Option<Date> {
    days_since_epoch(year).map(|days| EPOCH.add_days(days))
}

/// Converts a lunar date of `year` to Gregorian.
///
/// With `use_leap`, months after the leap month are shifted by one slot, which
/// is what holiday rules want. Without it the table slots are read as-is.
pub fn lunar_to_gregorian(year: i32, month: u32, day: u32, use_leap: bool) -> Option<Date> {
    if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
        return None;
    }
    let leap = if use_leap {
        leap_month(year)?
    } else {
        NO_LEAP_MONTH
    };
    let days = year_offset(year, month + u32::from(month > leap))?;
    Some(EPOCH.add_days(days + day as i64 - 1))
}

/// Vesak as observed in Singapore, Thailand and Indonesia: day 15 of the 4th lunar month.
pub fn vesak(year: i32) -> Option<Date> {
    let leap = leap_month(year)?;
    let days = year_offset(year, 4 + u32::from(4 > leap))?;
    Some(EPOCH.add_days(days + 14))
}

/// Vesak as observed in Malaysia and Sri Lanka: the first full moon in May.
pub fn vesak_may(year: i32) -> Option<Date> {
    let entry = entry(year)?;
    let mut date = EPOCH.add_days(days_since_epoch(year)? + 14);
    let mut slot = 1;
    while date.month() < 5 {
        date = date.add_days(entry_month_length(entry, slot) as i64);
        slot += 1;
    }
    Some(date)
}

/// Tamil Deepavali: new moon of Karthigai.
pub fn southern_diwali(year: i32) -> Option<Date> {
    let leap = leap_month(year)?;
    let days = year_offset(year, 10 + u32::from(10 > leap))?;
    Some(EPOCH.add_days(days - 2))
}

/// Thaipusam: full moon of the Tamil month of Thai.
pub fn thaipusam(year: i32) -> Option<Date> {
    let leap = leap_month(year)?;
    let days = year_offset(year, 1 + u32::from(leap <= 6))?;
    Some(EPOCH.add_days(days - 15))
}
