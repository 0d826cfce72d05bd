use std::{fmt, str::FromStr, time::Duration};

use crate::{weekday::Weekday, Error};

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Date(
    /// Days since 1st of January, 1970. (UNIX epoch)
    pub(crate) i64,
);

/// Days from 0001-01-01 (CE day 1) to the UNIX epoch, as counted by chrono.
const CE_DAYS_AT_EPOCH: i64 = 719163;
const SECONDS_IN_DAY: i64 = 86400;

impl Date {
    /// The UNIX epoch, 1970-01-01.
    pub const EPOCH: Date = Date(0);

    /// Builds a date without validating the components.
    ///
    /// Out-of-range months or days roll over the way the underlying day count does,
    /// so callers that take input from outside should use [`Date::try_from_ymd`].
    pub const fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        // Source: https://howardhinnant.github.io/date_algorithms.html

        let y = year as i64;
        let m = month as i64;
        let d = day as i64;

        let adjusted_year = y - if m <= 2 { 1 } else { 0 };

        let era = if adjusted_year >= 0 {
            adjusted_year / 400
        } else {
            (adjusted_year - 399) / 400
        };

        let year_of_era = adjusted_year - era * 400;
        let month_part = if m > 2 { m - 3 } else { m + 9 };
        let day_of_year = (153 * month_part + 2) / 5 + d - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

        Self(era * 146097 + day_of_era - 719468)
    }

    /// Builds a date, rejecting months outside `1..=12` and days past the end of the month.
    pub fn try_from_ymd(year: i32, month: u32, day: u32) -> Result<Self, Error> {
        match days_in_month(year, month) {
            Some(len) if (1..=len).contains(&day) => Ok(Self::from_ymd(year, month, day)),
            _ => Err(Error::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02} is not a calendar date"
            ))),
        }
    }

    #[inline]
    pub const fn from_year(year: i32) -> Self {
        Self::from_ymd(year, 1, 1)
    }

    /// First day of the earliest year representable as an `i32`.
    pub const MIN: Date = Date::from_ymd(i32::MIN, 1, 1);
    /// Last day of the latest year representable as an `i32`.
    pub const MAX: Date = Date::from_ymd(i32::MAX, 12, 31);

    /// Date of a UNIX timestamp, taken in UTC.
    pub const fn from_timestamp(seconds: i64) -> Self {
        Self(seconds.div_euclid(SECONDS_IN_DAY))
    }

    /// Like [`Date::from_timestamp`], but fails for instants outside [`Date::MIN`]..=[`Date::MAX`].
    pub fn try_from_timestamp(seconds: i64) -> Result<Self, Error> {
        let date = Self::from_timestamp(seconds);
        if (Self::MIN..=Self::MAX).contains(&date) {
            Ok(date)
        } else {
            Err(Error::InvalidDate(format!("timestamp {seconds} is out of range")))
        }
    }

    pub const fn ymd(&self) -> (i32, u32, u32) {
        // Source: https://howardhinnant.github.io/date_algorithms.html

        let z = self.0 + 719468;
        let era = (if z >= 0 { z } else { z - 146096 }) / 146097;
        let day_of_era = z - era * 146097;
        let year_of_era =
            (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let month_part = (5 * day_of_year + 2) / 153;

        let day = day_of_year - (153 * month_part + 2) / 5 + 1;
        let month = if month_part < 10 {
            month_part + 3
        } else {
            month_part - 9
        };
        let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };

        (year as i32, month as u32, day as u32)
    }

    /// Day of the month
    #[inline]
    pub const fn day(&self) -> u32 {
        self.ymd().2
    }

    /// Month of the year
    #[inline]
    pub const fn month(&self) -> u32 {
        self.ymd().1
    }

    /// Year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.ymd().0
    }

    #[inline]
    pub const fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday.
        Weekday::from_monday_index((self.0 + 3).rem_euclid(7) as u8)
    }

    #[inline]
    pub const fn add_days(self, days: i64) -> Self {
        Self(self.0 + days)
    }

    /// Number of days since the UNIX epoch.
    #[inline]
    pub const fn days_since_epoch(&self) -> i64 {
        self.0
    }

    pub const fn days_since(&self, other: &Self) -> Result<usize, usize> {
        if self.0 > other.0 {
            Ok((self.0 - other.0) as usize)
        } else {
            Err((other.0 - self.0) as usize)
        }
    }

    pub const fn duration_since(&self, other: &Self) -> Result<Duration, Duration> {
        if self.0 > other.0 {
            Ok(Duration::from_secs(
                SECONDS_IN_DAY as u64 * (self.0 - other.0) as u64,
            ))
        } else {
            Err(Duration::from_secs(
                SECONDS_IN_DAY as u64 * (other.0 - self.0) as u64,
            ))
        }
    }

    /// Last day of the date's month.
    pub fn end_of_month(&self) -> Self {
        let (year, month, _) = self.ymd();
        // Month components from `ymd` are always valid.
        Self::from_ymd(year, month, days_in_month(year, month).unwrap_or(31))
    }
}

pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Length of `month` in `year`, `None` when the month is outside `1..=12`.
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

impl std::ops::Add<i64> for Date {
    type Output = Date;

    #[inline]
    fn add(self, days: i64) -> Date {
        self.add_days(days)
    }
}

impl std::ops::Sub<i64> for Date {
    type Output = Date;

    #[inline]
    fn sub(self, days: i64) -> Date {
        self.add_days(-days)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i64;

    #[inline]
    fn sub(self, other: Date) -> i64 {
        self.0 - other.0
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parses the ISO `YYYY-MM-DD` form.
    fn from_str(date: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidDate(date.to_string());
        let mut parts = date.trim().splitn(3, '-');
        let mut next = || parts.next().ok_or_else(invalid);

        let year = next()?.parse().map_err(|_| invalid())?;
        let month = next()?.parse().map_err(|_| invalid())?;
        let day = next()?.parse().map_err(|_| invalid())?;

        Date::try_from_ymd(year, month, day).map_err(|_| invalid())
    }
}

impl TryFrom<Date> for std::time::SystemTime {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        let seconds = value
            .0
            .checked_mul(SECONDS_IN_DAY)
            .ok_or(crate::Error::DateTooLarge)?;
        if seconds >= 0 {
            Ok(std::time::SystemTime::UNIX_EPOCH + Duration::from_secs(seconds as u64))
        } else {
            std::time::SystemTime::UNIX_EPOCH
                .checked_sub(Duration::from_secs(seconds.unsigned_abs()))
                .ok_or(crate::Error::DateTooLarge)
        }
    }
}

impl From<std::time::SystemTime> for Date {
    fn from(value: std::time::SystemTime) -> Self {
        match value.duration_since(std::time::SystemTime::UNIX_EPOCH) {
            Ok(duration) => Date::from_timestamp(duration.as_secs() as i64),
            Err(err) => {
                let before = err.duration();
                // A partial day before the epoch still belongs to the previous date.
                let seconds = before.as_secs() as i64 + i64::from(before.subsec_nanos() > 0);
                Date::from_timestamp(-seconds)
            }
        }
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        let ce_days = i32::try_from(value.0 + CE_DAYS_AT_EPOCH).map_err(|_| Error::DateTooLarge)?;
        chrono::NaiveDate::from_num_days_from_ce_opt(ce_days).ok_or(crate::Error::DateTooLarge)
    }
}
#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::DateTime<chrono::Utc> {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        let naive = chrono::NaiveDate::try_from(value)?
            .and_hms_opt(0, 0, 0)
            .ok_or(crate::Error::DateTooLarge)?;

        Ok(chrono::TimeZone::from_utc_datetime(&chrono::Utc, &naive))
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for Date {
    fn from(value: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Date(value.num_days_from_ce() as i64 - CE_DAYS_AT_EPOCH)
    }
}
#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for Date {
    #[inline]
    fn from(value: chrono::NaiveDateTime) -> Self {
        Date::from(value.date())
    }
}
#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for Date {
    /// Truncates to the calendar date in the value's own time zone.
    #[inline]
    fn from(value: chrono::DateTime<Tz>) -> Self {
        Date::from(value.naive_local().date())
    }
}

/// Julian day number of the UNIX epoch, as counted by the `time` crate.
#[cfg(feature = "time")]
const JULIAN_DAY_AT_EPOCH: i64 = 2440588;

#[cfg(feature = "time")]
impl TryFrom<Date> for time::Date {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        let julian = i32::try_from(value.0 + JULIAN_DAY_AT_EPOCH).map_err(|_| Error::DateTooLarge)?;
        time::Date::from_julian_day(julian).map_err(|_| Error::DateTooLarge)
    }
}
#[cfg(feature = "time")]
impl From<time::Date> for Date {
    fn from(value: time::Date) -> Self {
        Date(value.to_julian_day() as i64 - JULIAN_DAY_AT_EPOCH)
    }
}
#[cfg(feature = "time")]
impl From<time::PrimitiveDateTime> for Date {
    #[inline]
    fn from(value: time::PrimitiveDateTime) -> Self {
        Date::from(value.date())
    }
}
#[cfg(feature = "time")]
impl From<time::OffsetDateTime> for Date {
    #[inline]
    fn from(value: time::OffsetDateTime) -> Self {
        Date::from(value.date())
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_round_trip() {
        assert_eq!(Date::from_ymd(1970, 1, 1), Date::EPOCH);
        assert_eq!(Date::EPOCH.ymd(), (1970, 1, 1));
        assert_eq!(Date::from_ymd(2000, 3, 1).ymd(), (2000, 3, 1));
        assert_eq!(Date::from_ymd(1901, 2, 19).ymd(), (1901, 2, 19));
        assert_eq!(Date::from_ymd(1969, 12, 31).0, -1);
    }

    #[test]
    fn weekdays() {
        assert_eq!(Date::EPOCH.weekday(), Weekday::Thursday);
        assert_eq!(Date::from_ymd(2017, 1, 1).weekday(), Weekday::Sunday);
        assert_eq!(Date::from_ymd(1901, 1, 1).weekday(), Weekday::Tuesday);
        assert_eq!(Date::from_ymd(2024, 2, 29).weekday(), Weekday::Thursday);
    }

    #[test]
    fn validation() {
        assert!(Date::try_from_ymd(2023, 2, 29).is_err());
        assert!(Date::try_from_ymd(2024, 2, 29).is_ok());
        assert!(Date::try_from_ymd(2024, 13, 1).is_err());
        assert!(Date::try_from_ymd(2024, 4, 0).is_err());
    }

    #[test]
    fn parse_and_display() {
        let date: Date = "2014-01-01".parse().unwrap();
        assert_eq!(date, Date::from_ymd(2014, 1, 1));
        assert_eq!(date.to_string(), "2014-01-01");
        assert_eq!(format!("{date:?}"), "Date(2014-01-01)");
        assert!("2014-02-30".parse::<Date>().is_err());
        assert!("abc".parse::<Date>().is_err());
    }

    #[test]
    fn timestamps() {
        assert_eq!(Date::from_timestamp(1388552400), Date::from_ymd(2014, 1, 1));
        assert_eq!(Date::from_timestamp(-1), Date::from_ymd(1969, 12, 31));
    }

    #[test]
    fn end_of_month() {
        assert_eq!(
            Date::from_ymd(2024, 2, 10).end_of_month(),
            Date::from_ymd(2024, 2, 29)
        );
        assert_eq!(
            Date::from_ymd(2023, 12, 1).end_of_month(),
            Date::from_ymd(2023, 12, 31)
        );
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn chrono_conversions() {
        let naive = chrono::NaiveDate::from_ymd_opt(2010, 2, 14).unwrap();
        let date = Date::from(naive);
        assert_eq!(date, Date::from_ymd(2010, 2, 14));
        assert_eq!(chrono::NaiveDate::try_from(date).unwrap(), naive);
    }

    #[cfg(feature = "time")]
    #[test]
    fn time_conversions() {
        let value = time::Date::from_calendar_date(2023, time::Month::March, 6).unwrap();
        let date = Date::from(value);
        assert_eq!(date, Date::from_ymd(2023, 3, 6));
        assert_eq!(time::Date::try_from(date).unwrap(), value);
    }
}
