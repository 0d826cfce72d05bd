//! Date-range slicing over a [`Holidays`] container.

use std::ops::{Bound, RangeBounds};

use crate::{date::Date, key::IntoDate, Error, Holidays};

/// A bound of the range as a date, `None` when unbounded.
fn bound_date<K: IntoDate + Clone>(bound: Bound<&K>) -> Result<Option<(Date, bool)>, Error> {
    Ok(match bound {
        Bound::Included(it) => Some((it.clone().into_date()?, true)),
        Bound::Excluded(it) => Some((it.clone().into_date()?, false)),
        Bound::Unbounded => None,
    })
}

/// First and past-the-end dates of `range` plus the step, its sign flipped to
/// walk from the start towards the end.
fn range_ends<K, R>(range: &R, step: i64) -> Result<(Date, Date, i64), Error>
where
    K: IntoDate + Clone,
    R: RangeBounds<K>,
{
    let (start, start_included) = bound_date(range.start_bound())?
        .ok_or(Error::InvalidArgument("range needs a start date"))?;
    let (end, end_included) = bound_date(range.end_bound())?
        .ok_or(Error::InvalidArgument("range needs an end date"))?;

    let step = if (end < start) == (step > 0) { -step } else { step };
    let direction = step.signum();
    let start = if start_included { start } else { start.add_days(direction) };
    let end = if end_included { end.add_days(direction) } else { end };
    Ok((start, end, step))
}

impl Holidays {
    /// Holiday dates in `range`, in the order the range runs.
    ///
    /// Years the range touches are populated when expansion is on.
    pub fn range<K, R>(&mut self, range: R) -> Result<Vec<Date>, Error>
    where
        K: IntoDate + Clone,
        R: RangeBounds<K>,
    {
        self.range_step(range, 1)
    }

    /// Holiday dates among every `step`-th day from the start of `range` towards its end.
    ///
    /// The walk goes backwards when the range is given from the later date to the
    /// earlier one (`"2024-12-31".."2024-01-01"`), whatever the sign of `step`.
    pub fn range_step<K, R>(&mut self, range: R, step: i64) -> Result<Vec<Date>, Error>
    where
        K: IntoDate + Clone,
        R: RangeBounds<K>,
    {
        if step == 0 {
            return Err(Error::InvalidArgument("step must not be zero"));
        }
        let (start, end, step) = range_ends(&range, step)?;
        let span = end - start;

        let mut result = Vec::new();
        let mut offset = 0;
        while (step > 0 && offset < span) || (step < 0 && offset > span) {
            let date = start.add_days(offset);
            if self.contains(date)? {
                result.push(date);
            }
            offset += step;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        rules::{HolidayRules, Populate},
        HolidaysOptions,
    };

    #[derive(Debug)]
    struct Monthly;

    impl HolidayRules for Monthly {
        fn populate(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
            for month in 1..=12 {
                cx.add_ymd(month, 1, "First")?;
            }
            Ok(())
        }
    }

    fn monthly() -> Holidays {
        Holidays::new(Monthly, HolidaysOptions::new()).unwrap()
    }

    #[test]
    fn forward() {
        let mut holidays = monthly();
        assert_eq!(
            holidays.range("2014-11-15".."2015-02-01").unwrap(),
            [
                Date::from_ymd(2014, 12, 1),
                Date::from_ymd(2015, 1, 1)
            ]
        );
        assert_eq!(holidays.years().len(), 2);
        assert_eq!(
            holidays.range("2014-11-15"..="2015-02-01").unwrap().len(),
            3
        );
    }

    #[test]
    fn backward_and_stepped() {
        let mut holidays = monthly();
        assert_eq!(
            holidays.range_step("2015-02-01".."2014-11-15", -1).unwrap(),
            [
                Date::from_ymd(2015, 2, 1),
                Date::from_ymd(2015, 1, 1),
                Date::from_ymd(2014, 12, 1)
            ]
        );
        // Every other day from 2014-12-03 steps over 2015-01-01.
        assert_eq!(
            holidays.range_step("2014-12-03".."2015-01-05", 2).unwrap(),
            Vec::<Date>::new()
        );
    }

    #[test]
    fn step_follows_the_range_direction() {
        let mut holidays = monthly();
        assert_eq!(
            holidays.range_step("2024-03-01".."2024-01-01", 1).unwrap(),
            [Date::from_ymd(2024, 3, 1), Date::from_ymd(2024, 2, 1)]
        );
        assert_eq!(
            holidays.range_step("2024-01-01"..="2024-03-01", -1).unwrap(),
            [
                Date::from_ymd(2024, 1, 1),
                Date::from_ymd(2024, 2, 1),
                Date::from_ymd(2024, 3, 1)
            ]
        );
        assert_eq!(
            holidays.range("2024-03-01".."2024-03-01").unwrap(),
            Vec::<Date>::new()
        );
    }

    #[test]
    fn invalid_ranges() {
        let mut holidays = monthly();
        assert_eq!(
            holidays.range_step("2014-01-01".."2014-02-01", 0),
            Err(Error::InvalidArgument("step must not be zero"))
        );
        assert!(matches!(
            holidays.range::<&str, _>(.."2014-02-01"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            holidays.range("2014-01-01".."abc"),
            Err(Error::InvalidDate(_))
        ));
    }
}
