//! "Nth weekday" date arithmetic shared by the country rule modules.

use crate::{
    date::{days_in_month, Date},
    Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Maps `0..=6` (Monday first) to a weekday; larger values wrap.
    #[inline]
    pub const fn from_monday_index(index: u8) -> Self {
        Self::ALL[(index % 7) as usize]
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Signed distance from `from` to the `n`-th `weekday` counted in the direction of `n`.
///
/// `n` must be non-zero.
pub(crate) const fn weekday_offset(n: i32, weekday: Weekday, from: Weekday) -> i64 {
    let target = weekday.index() as i64;
    let current = from.index() as i64;
    if n > 0 {
        (n as i64 - 1) * 7 + (target - current).rem_euclid(7)
    } else {
        (n as i64 + 1) * 7 - (current - target).rem_euclid(7)
    }
}

/// The `n`-th occurrence of `weekday` on or after `from` (`n > 0`) or on or before it (`n < 0`).
///
/// `from` itself counts as the first occurrence when it already is `weekday`.
pub fn nth_weekday_from(n: i32, weekday: Weekday, from: Date) -> Result<Date, Error> {
    if n == 0 {
        return Err(Error::InvalidArgument("weekday occurrence must be non-zero"));
    }
    Ok(from.add_days(weekday_offset(n, weekday, from.weekday())))
}

/// The `n`-th `weekday` of `month`; negative `n` counts back from the end of the month.
pub fn nth_weekday_of_month(n: i32, weekday: Weekday, month: u32, year: i32) -> Result<Date, Error> {
    let last_day = days_in_month(year, month).ok_or(Error::InvalidArgument("month must be 1..=12"))?;
    let anchor = if n < 0 {
        Date::from_ymd(year, month, last_day)
    } else {
        Date::from_ymd(year, month, 1)
    };
    nth_weekday_from(n, weekday, anchor)
}

impl Date {
    /// First `weekday` on or after this date.
    #[inline]
    pub const fn on_or_after(self, weekday: Weekday) -> Date {
        self.add_days(weekday_offset(1, weekday, self.weekday()))
    }

    /// Last `weekday` on or before this date.
    #[inline]
    pub const fn on_or_before(self, weekday: Weekday) -> Date {
        self.add_days(weekday_offset(-1, weekday, self.weekday()))
    }

    /// First `weekday` strictly after this date.
    #[inline]
    pub const fn next(self, weekday: Weekday) -> Date {
        self.add_days(1).on_or_after(weekday)
    }

    /// Last `weekday` strictly before this date.
    #[inline]
    pub const fn previous(self, weekday: Weekday) -> Date {
        self.add_days(-1).on_or_before(weekday)
    }

    /// Whichever `weekday` is closest; ties go to the later one.
    pub const fn nearest(self, weekday: Weekday) -> Date {
        let after = self.on_or_after(weekday);
        let before = self.on_or_before(weekday);
        if after.0 - self.0 <= self.0 - before.0 {
            after
        } else {
            before
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Weekday::*;

    #[test]
    fn counts_from_the_anchor() {
        // 2014-10-01 is a Wednesday.
        let from = Date::from_ymd(2014, 10, 1);
        assert_eq!(nth_weekday_from(1, Wednesday, from).unwrap(), from);
        assert_eq!(nth_weekday_from(-1, Wednesday, from).unwrap(), from);
        assert_eq!(
            nth_weekday_from(2, Monday, from).unwrap(),
            Date::from_ymd(2014, 10, 13)
        );
        assert_eq!(
            nth_weekday_from(-1, Friday, from).unwrap(),
            Date::from_ymd(2014, 9, 26)
        );
        assert_eq!(
            nth_weekday_from(-2, Wednesday, from).unwrap(),
            Date::from_ymd(2014, 9, 24)
        );
    }

    #[test]
    fn month_anchors() {
        assert_eq!(
            nth_weekday_of_month(3, Monday, 1, 2014).unwrap(),
            Date::from_ymd(2014, 1, 20)
        );
        assert_eq!(
            nth_weekday_of_month(-1, Monday, 5, 2014).unwrap(),
            Date::from_ymd(2014, 5, 26)
        );
        assert_eq!(
            nth_weekday_of_month(4, Thursday, 11, 2014).unwrap(),
            Date::from_ymd(2014, 11, 27)
        );
    }

    #[test]
    fn rejects_invalid_arguments() {
        assert!(matches!(
            nth_weekday_from(0, Monday, Date::EPOCH),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            nth_weekday_of_month(1, Monday, 13, 2014),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn relative_helpers() {
        let date = Date::from_ymd(2017, 3, 17); // Friday
        assert_eq!(date.on_or_after(Friday), date);
        assert_eq!(date.next(Friday), Date::from_ymd(2017, 3, 24));
        assert_eq!(date.previous(Monday), Date::from_ymd(2017, 3, 13));
        assert_eq!(date.nearest(Monday), Date::from_ymd(2017, 3, 20));
        assert_eq!(
            Date::from_ymd(2017, 3, 15).nearest(Monday),
            Date::from_ymd(2017, 3, 13)
        );
    }
}
