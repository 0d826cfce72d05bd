use crate::date::Date;

/// Computus used to place Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EasterMethod {
    /// Gregorian computus used by the Western churches.
    Western,
    /// Julian computus, expressed as a Gregorian date.
    Orthodox,
}

/// Years for which both computus variants are defined.
pub const EASTER_YEARS: std::ops::RangeInclusive<i32> = 1583..=4099;

/// Gregorian date of Easter Sunday, `None` outside [`EASTER_YEARS`].
pub const fn easter(year: i32, method: EasterMethod) -> Option<Date> {
    if year < *EASTER_YEARS.start() || year > *EASTER_YEARS.end() {
        return None;
    }

    let g = year % 19;
    let p = match method {
        EasterMethod::Orthodox => {
            let i = (19 * g + 15) % 30;
            let j = (year + year / 4 + i) % 7;
            let e = if year <= 1600 {
                10
            } else {
                10 + year / 100 - 16 - (year / 100 - 16) / 4
            };
            i - j + e
        }
        EasterMethod::Western => {
            let c = year / 100;
            let c_div_4 = c / 4;
            let h = (c - c_div_4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
            let h_div_28 = h / 28;
            let i = h - h_div_28 * (1 - h_div_28 * (29 / (h + 1)) * ((21 - g) / 11));
            let j = (year + year / 4 + i + 2 - c + c_div_4) % 7;
            i - j
        }
    };

    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;

    Some(Date::from_ymd(year, month as u32, day as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    #[test]
    fn western() {
        assert_eq!(
            easter(2017, EasterMethod::Western),
            Some(Date::from_ymd(2017, 4, 16))
        );
        assert_eq!(
            easter(2024, EasterMethod::Western),
            Some(Date::from_ymd(2024, 3, 31))
        );
        assert_eq!(
            easter(2285, EasterMethod::Western),
            Some(Date::from_ymd(2285, 3, 22))
        );
    }

    #[test]
    fn orthodox() {
        assert_eq!(
            easter(2023, EasterMethod::Orthodox),
            Some(Date::from_ymd(2023, 4, 16))
        );
        assert_eq!(
            easter(2024, EasterMethod::Orthodox),
            Some(Date::from_ymd(2024, 5, 5))
        );
        assert_eq!(
            easter(1992, EasterMethod::Orthodox),
            Some(Date::from_ymd(1992, 4, 26))
        );
    }

    #[test]
    fn out_of_range() {
        assert_eq!(easter(1582, EasterMethod::Western), None);
        assert_eq!(easter(4100, EasterMethod::Orthodox), None);
    }

    #[test]
    fn always_sunday() {
        for year in 1583..=2600 {
            for method in [EasterMethod::Western, EasterMethod::Orthodox] {
                let date = easter(year, method).unwrap();
                assert_eq!(date.weekday(), Weekday::Sunday, "{year} {method:?}");
                assert_eq!(date.year(), year);
            }
        }
    }
}
