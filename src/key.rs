//! Resolution of lookup keys to calendar dates.

use std::any::Any;

use crate::{date::Date, Error};

/// A value that can be used to address a [`Holidays`](crate::Holidays) container.
///
/// Date-time values are truncated to their date, numeric values are UNIX timestamps
/// taken in UTC and strings are parsed.
pub trait IntoDate {
    fn into_date(self) -> Result<Date, Error>;
}

impl IntoDate for Date {
    #[inline]
    fn into_date(self) -> Result<Date, Error> {
        Ok(self)
    }
}

impl IntoDate for &Date {
    #[inline]
    fn into_date(self) -> Result<Date, Error> {
        Ok(*self)
    }
}

impl IntoDate for &str {
    fn into_date(self) -> Result<Date, Error> {
        parse_date(self)
    }
}

impl IntoDate for &String {
    fn into_date(self) -> Result<Date, Error> {
        parse_date(self)
    }
}

impl IntoDate for String {
    fn into_date(self) -> Result<Date, Error> {
        parse_date(&self)
    }
}

macro_rules! impl_timestamp_key {
    ($($int: ty),*) => {$(
        impl IntoDate for $int {
            #[inline]
            fn into_date(self) -> Result<Date, Error> {
                Date::try_from_timestamp(self as i64)
            }
        }
    )*};
}
impl_timestamp_key!(i32, i64, u32);

impl IntoDate for u64 {
    fn into_date(self) -> Result<Date, Error> {
        let seconds =
            i64::try_from(self).map_err(|_| Error::InvalidDate(format!("timestamp {self}")))?;
        Date::try_from_timestamp(seconds)
    }
}

impl IntoDate for f64 {
    fn into_date(self) -> Result<Date, Error> {
        if !self.is_finite() || self.abs() >= i64::MAX as f64 {
            return Err(Error::InvalidDate(format!("timestamp {self}")));
        }
        Date::try_from_timestamp(self.floor() as i64)
    }
}

impl IntoDate for f32 {
    #[inline]
    fn into_date(self) -> Result<Date, Error> {
        (self as f64).into_date()
    }
}

impl IntoDate for std::time::SystemTime {
    #[inline]
    fn into_date(self) -> Result<Date, Error> {
        Ok(Date::from(self))
    }
}

#[cfg(feature = "chrono")]
impl IntoDate for chrono::NaiveDate {
    #[inline]
    fn into_date(self) -> Result<Date, Error> {
        Ok(Date::from(self))
    }
}
#[cfg(feature = "chrono")]
impl IntoDate for chrono::NaiveDateTime {
    #[inline]
    fn into_date(self) -> Result<Date, Error> {
        Ok(Date::from(self))
    }
}
#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> IntoDate for chrono::DateTime<Tz> {
    #[inline]
    fn into_date(self) -> Result<Date, Error> {
        Ok(Date::from(self))
    }
}

#[cfg(feature = "time")]
impl IntoDate for time::Date {
    #[inline]
    fn into_date(self) -> Result<Date, Error> {
        Ok(Date::from(self))
    }
}
#[cfg(feature = "time")]
impl IntoDate for time::PrimitiveDateTime {
    #[inline]
    fn into_date(self) -> Result<Date, Error> {
        Ok(Date::from(self))
    }
}
#[cfg(feature = "time")]
impl IntoDate for time::OffsetDateTime {
    #[inline]
    fn into_date(self) -> Result<Date, Error> {
        Ok(Date::from(self))
    }
}

/// Formats accepted for string keys, tried in order.
#[cfg(feature = "chrono")]
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y", "%Y%m%d", "%B %d, %Y", "%b %d, %Y",
    "%B %d %Y", "%b %d %Y", "%d %B %Y", "%d %b %Y",
];

#[cfg(feature = "chrono")]
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parses the usual spellings of a date, with or without a time part.
#[cfg(feature = "chrono")]
pub fn parse_date(value: &str) -> Result<Date, Error> {
    let trimmed = value.trim();

    if let Ok(it) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Date::from(it));
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(it) = chrono::NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Date::from(it));
        }
    }
    for format in DATE_FORMATS {
        if let Ok(it) = chrono::NaiveDate::parse_from_str(trimmed, format) {
            return Ok(Date::from(it));
        }
    }

    Err(Error::InvalidDate(value.to_string()))
}

/// Parses ISO `YYYY-MM-DD` dates, ignoring a trailing time part.
#[cfg(not(feature = "chrono"))]
pub fn parse_date(value: &str) -> Result<Date, Error> {
    let trimmed = value.trim();
    let date_part = trimmed
        .split(|c| c == 'T' || c == ' ')
        .next()
        .unwrap_or(trimmed);
    date_part
        .parse()
        .map_err(|_| Error::InvalidDate(value.to_string()))
}

/// Owned key for callers holding loosely typed values.
#[derive(Debug, Clone, PartialEq)]
pub enum DateKey {
    Date(Date),
    Timestamp(f64),
    Text(String),
}

impl DateKey {
    /// Classifies a dynamically typed value; types without a date meaning are rejected.
    pub fn from_any<T: Any>(value: &T) -> Result<DateKey, Error> {
        let value = value as &dyn Any;
        if let Some(it) = value.downcast_ref::<Date>() {
            return Ok(DateKey::Date(*it));
        }
        if let Some(it) = value.downcast_ref::<String>() {
            return Ok(DateKey::Text(it.clone()));
        }
        if let Some(it) = value.downcast_ref::<&str>() {
            return Ok(DateKey::Text(it.to_string()));
        }
        if let Some(it) = value.downcast_ref::<i64>() {
            return Ok(DateKey::Timestamp(*it as f64));
        }
        if let Some(it) = value.downcast_ref::<i32>() {
            return Ok(DateKey::Timestamp(*it as f64));
        }
        if let Some(it) = value.downcast_ref::<u32>() {
            return Ok(DateKey::Timestamp(*it as f64));
        }
        if let Some(it) = value.downcast_ref::<u64>() {
            return Ok(DateKey::Timestamp(*it as f64));
        }
        if let Some(it) = value.downcast_ref::<f64>() {
            return Ok(DateKey::Timestamp(*it));
        }
        if let Some(it) = value.downcast_ref::<f32>() {
            return Ok(DateKey::Timestamp(*it as f64));
        }
        if let Some(it) = value.downcast_ref::<std::time::SystemTime>() {
            return Ok(DateKey::Date(Date::from(*it)));
        }
        #[cfg(feature = "chrono")]
        if let Some(it) = value.downcast_ref::<chrono::NaiveDate>() {
            return Ok(DateKey::Date(Date::from(*it)));
        }
        #[cfg(feature = "chrono")]
        if let Some(it) = value.downcast_ref::<chrono::NaiveDateTime>() {
            return Ok(DateKey::Date(Date::from(*it)));
        }
        #[cfg(feature = "chrono")]
        if let Some(it) = value.downcast_ref::<chrono::DateTime<chrono::Utc>>() {
            return Ok(DateKey::Date(Date::from(*it)));
        }
        #[cfg(feature = "chrono")]
        if let Some(it) = value.downcast_ref::<chrono::DateTime<chrono::FixedOffset>>() {
            return Ok(DateKey::Date(Date::from(*it)));
        }
        #[cfg(feature = "chrono")]
        if let Some(it) = value.downcast_ref::<chrono::DateTime<chrono::Local>>() {
            return Ok(DateKey::Date(Date::from(*it)));
        }
        #[cfg(feature = "time")]
        if let Some(it) = value.downcast_ref::<time::Date>() {
            return Ok(DateKey::Date(Date::from(*it)));
        }
        #[cfg(feature = "time")]
        if let Some(it) = value.downcast_ref::<time::PrimitiveDateTime>() {
            return Ok(DateKey::Date(Date::from(*it)));
        }
        #[cfg(feature = "time")]
        if let Some(it) = value.downcast_ref::<time::OffsetDateTime>() {
            return Ok(DateKey::Date(Date::from(*it)));
        }

        Err(Error::UnsupportedKeyType(std::any::type_name::<T>()))
    }
}

impl IntoDate for DateKey {
    fn into_date(self) -> Result<Date, Error> {
        match self {
            DateKey::Date(it) => Ok(it),
            DateKey::Timestamp(it) => it.into_date(),
            DateKey::Text(it) => parse_date(&it),
        }
    }
}

impl IntoDate for &DateKey {
    fn into_date(self) -> Result<Date, Error> {
        self.clone().into_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_are_utc() {
        assert_eq!(1388552400_i64.into_date().unwrap(), Date::from_ymd(2014, 1, 1));
        assert_eq!(1388552400.9_f64.into_date().unwrap(), Date::from_ymd(2014, 1, 1));
        assert_eq!((-1.5_f64).into_date().unwrap(), Date::from_ymd(1969, 12, 31));
        assert!(f64::NAN.into_date().is_err());
        assert!(f64::INFINITY.into_date().is_err());
    }

    #[test]
    fn timestamps_outside_i32_years() {
        for key in [i64::MAX, i64::MIN, 67_767_976_233_532_800] {
            assert!(matches!(key.into_date(), Err(Error::InvalidDate(_))), "{key}");
        }
        assert!(matches!(u64::MAX.into_date(), Err(Error::InvalidDate(_))));
        assert!(matches!(1e18_f64.into_date(), Err(Error::InvalidDate(_))));
        assert_eq!(67_767_976_233_446_400_i64.into_date().unwrap(), Date::MAX);
    }

    #[test]
    fn iso_strings() {
        assert_eq!("2014-01-01".into_date().unwrap(), Date::from_ymd(2014, 1, 1));
        assert_eq!(
            "2014-01-01T13:00:00".into_date().unwrap(),
            Date::from_ymd(2014, 1, 1)
        );
        assert!(matches!("abc".into_date(), Err(Error::InvalidDate(_))));
        assert!(matches!("2014-02-30".into_date(), Err(Error::InvalidDate(_))));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn loose_strings() {
        let expected = Date::from_ymd(2014, 1, 1);
        for text in ["1/1/2014", "January 1, 2014", "Jan 1, 2014", "01.01.2014", "20140101"] {
            assert_eq!(text.into_date().unwrap(), expected, "{text}");
        }
        assert_eq!(
            "2014-01-01T23:30:00-05:00".into_date().unwrap(),
            Date::from_ymd(2014, 1, 1)
        );
    }

    #[test]
    fn dynamic_keys() {
        assert_eq!(
            DateKey::from_any(&"2014-07-04").unwrap().into_date().unwrap(),
            Date::from_ymd(2014, 7, 4)
        );
        assert_eq!(
            DateKey::from_any(&1388552400_i64).unwrap(),
            DateKey::Timestamp(1388552400.0)
        );
        let new_year = Date::from_ymd(2014, 1, 1);
        for key in [
            DateKey::from_any(&1388552400_u32).unwrap(),
            DateKey::from_any(&1388552400_u64).unwrap(),
            DateKey::from_any(&1388552400_i32).unwrap(),
            DateKey::from_any(&1388552400.0_f32).unwrap(),
            DateKey::from_any(&1388552400.5_f64).unwrap(),
            DateKey::from_any(&String::from("2014-01-01")).unwrap(),
            DateKey::from_any(&new_year).unwrap(),
        ] {
            assert_eq!(key.into_date().unwrap(), new_year);
        }
        assert!(matches!(
            DateKey::from_any(&vec![1u8]),
            Err(Error::UnsupportedKeyType(_))
        ));
        assert!(matches!(
            DateKey::from_any(&()),
            Err(Error::UnsupportedKeyType("()"))
        ));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn dynamic_chrono_keys() {
        use chrono::TimeZone;

        let expected = Date::from_ymd(2014, 7, 4);
        let utc = chrono::Utc.with_ymd_and_hms(2014, 7, 4, 12, 0, 0).unwrap();
        let fixed = chrono::FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2014, 7, 4, 23, 30, 0)
            .unwrap();
        let naive = chrono::NaiveDate::from_ymd_opt(2014, 7, 4).unwrap();
        for key in [
            DateKey::from_any(&utc).unwrap(),
            DateKey::from_any(&fixed).unwrap(),
            DateKey::from_any(&naive).unwrap(),
            DateKey::from_any(&naive.and_hms_opt(8, 0, 0).unwrap()).unwrap(),
        ] {
            assert_eq!(key.into_date().unwrap(), expected);
        }
    }

    #[cfg(feature = "time")]
    #[test]
    fn dynamic_time_keys() {
        let expected = Date::from_ymd(2014, 7, 4);
        let date = time::Date::from_calendar_date(2014, time::Month::July, 4).unwrap();
        let primitive = date.with_hms(12, 0, 0).unwrap();
        for key in [
            DateKey::from_any(&date).unwrap(),
            DateKey::from_any(&primitive).unwrap(),
            DateKey::from_any(&primitive.assume_utc()).unwrap(),
        ] {
            assert_eq!(key.into_date().unwrap(), expected);
        }
    }
}
