use std::collections::BTreeSet;

use holidays_engine::{
    countries::UnitedStates, country_holidays, Country, Date, DateKey, Error, HolidayRules,
    Holidays, HolidaysOptions, NameLookup, Populate, Weekday,
};

fn us(options: HolidaysOptions) -> Holidays {
    Country::US.holidays(options).unwrap()
}

#[test]
fn keys_of_every_kind() {
    let mut holidays = us(HolidaysOptions::new());
    let new_year = Date::from_ymd(2014, 1, 1);

    assert!(holidays.contains(new_year).unwrap());
    assert!(holidays.contains("2014-01-01").unwrap());
    assert!(holidays.contains(String::from("2014-01-01")).unwrap());
    assert!(holidays.contains(1388552400_i64).unwrap());
    assert!(holidays.contains(1388552400.0_f64).unwrap());
    assert!(holidays
        .contains(DateKey::from_any(&"2014-01-01").unwrap())
        .unwrap());

    assert!(matches!(holidays.contains("abc"), Err(Error::InvalidDate(_))));
    assert!(matches!(
        holidays.contains(i64::MAX),
        Err(Error::InvalidDate(_))
    ));
    assert!(holidays.contains(1388552400_u32).unwrap());
    assert!(holidays.contains(1388552400_u64).unwrap());
    assert!(holidays.contains(1388552400.0_f32).unwrap());
    assert!(matches!(
        DateKey::from_any(&Some(1)),
        Err(Error::UnsupportedKeyType(_))
    ));
}

#[cfg(feature = "chrono")]
#[test]
fn chrono_keys() {
    let mut holidays = us(HolidaysOptions::new());
    let date = chrono::NaiveDate::from_ymd_opt(2014, 7, 4).unwrap();
    assert_eq!(holidays.name(date).unwrap(), "Independence Day");
    let noon = date.and_hms_opt(12, 0, 0).unwrap();
    assert_eq!(holidays.name(noon).unwrap(), "Independence Day");
}

#[test]
fn united_states_2014() {
    let holidays = us(HolidaysOptions::new().year(2014));
    let expected = [
        ("2014-01-01", "New Year's Day"),
        ("2014-01-20", "Martin Luther King, Jr. Day"),
        ("2014-02-17", "Washington's Birthday"),
        ("2014-05-26", "Memorial Day"),
        ("2014-07-04", "Independence Day"),
        ("2014-09-01", "Labor Day"),
        ("2014-10-13", "Columbus Day"),
        ("2014-11-11", "Veterans Day"),
        ("2014-11-27", "Thanksgiving"),
        ("2014-12-25", "Christmas Day"),
    ];
    let actual: Vec<(String, &str)> = holidays
        .iter()
        .map(|(date, name)| (date.to_string(), name))
        .collect();
    let expected: Vec<(String, &str)> = expected
        .iter()
        .map(|(date, name)| (date.to_string(), *name))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn canada_2017() {
    let holidays = country_holidays("CA", HolidaysOptions::new().year(2017)).unwrap();
    assert_eq!(holidays.subdivision(), ["ON"]);
    let actual: Vec<String> = holidays
        .iter()
        .map(|(date, name)| format!("{date} {name}"))
        .collect();
    assert_eq!(
        actual,
        [
            "2017-01-01 New Year's Day",
            "2017-01-02 New Year's Day (Observed)",
            "2017-02-20 Family Day",
            "2017-04-14 Good Friday",
            "2017-05-22 Victoria Day",
            "2017-07-01 Canada Day",
            "2017-07-03 Canada Day (Observed)",
            "2017-08-07 Civic Holiday",
            "2017-09-04 Labour Day",
            "2017-10-09 Thanksgiving",
            "2017-12-25 Christmas Day",
            "2017-12-26 Boxing Day",
        ]
    );
}

#[test]
fn observed_toggle() {
    let mut holidays = us(HolidaysOptions::new().observed(false));
    assert!(!holidays.contains("1999-12-31").unwrap());
    assert!(!holidays.contains("2012-01-02").unwrap());

    holidays.set_observed(true).unwrap();
    assert_eq!(
        holidays.name("1999-12-31").unwrap(),
        "New Year's Day (Observed)"
    );
    assert_eq!(
        holidays.name("2012-01-02").unwrap(),
        "New Year's Day (Observed)"
    );

    holidays.set_observed(false).unwrap();
    assert!(!holidays.contains("1999-12-31").unwrap());
    assert!(!holidays.contains("2012-01-02").unwrap());
}

#[test]
fn no_expansion() {
    let mut holidays = us(HolidaysOptions::new().year(2014).expand(false));
    assert!(!holidays.contains("2015-01-01").unwrap());
    assert_eq!(holidays.years(), &BTreeSet::from([2014]));

    holidays.set_expand(true);
    assert!(holidays.contains("2015-01-01").unwrap());
    assert_eq!(holidays.years(), &BTreeSet::from([2014, 2015]));
}

/// United States rules with Columbus Day replaced.
#[derive(Debug)]
struct TurtleStates;

impl HolidayRules for TurtleStates {
    fn code(&self) -> &str {
        "US"
    }

    fn subdivisions(&self) -> &'static [&'static str] {
        UnitedStates.subdivisions()
    }

    fn populate(&self, cx: &mut Populate<'_>) -> Result<(), Error> {
        UnitedStates.populate(cx)?;
        let columbus_day = cx.nth_weekday(2, Weekday::Monday, 10)?;
        cx.remove(columbus_day);
        cx.add_ymd(7, 13, "Ninja Turtle's Day")?;
        Ok(())
    }
}

#[test]
fn custom_rules_inherit() {
    let mut holidays = Holidays::new(TurtleStates, HolidaysOptions::new()).unwrap();
    assert!(!holidays.contains("2014-10-13").unwrap());
    assert_eq!(holidays.name("2014-07-13").unwrap(), "Ninja Turtle's Day");
    assert_eq!(holidays.name("2014-07-04").unwrap(), "Independence Day");

    let mut texas =
        Holidays::new(TurtleStates, HolidaysOptions::new().subdivision("TX")).unwrap();
    assert_eq!(texas.name("2014-03-02").unwrap(), "Texas Independence Day");
}

#[test]
fn combined_countries() {
    let us = us(HolidaysOptions::new().year(2014));
    let ca = Country::CA.holidays(HolidaysOptions::new().year(2014)).unwrap();
    let mut both = &us + &ca;

    assert_eq!(both.country(), ["US", "CA"]);
    assert_eq!(both.subdivision(), ["ON"]);
    assert_eq!(both.name("2014-07-01").unwrap(), "Canada Day");
    assert_eq!(both.name("2014-07-04").unwrap(), "Independence Day");
    assert_eq!(
        both.get_list("2014-12-25").unwrap(),
        ["Christmas Day"]
    );
    // Years outside the operands still expand.
    assert!(both.contains("2015-07-01").unwrap());

    let total: Holidays = [us.clone(), ca.clone()].into_iter().sum();
    assert_eq!(
        total.dates().collect::<Vec<_>>(),
        (&us + &ca).dates().collect::<Vec<_>>()
    );
}

#[test]
fn named_lookups_and_ranges() {
    let mut holidays = us(HolidaysOptions::new().year(2014));
    assert_eq!(
        holidays.get_named("day", NameLookup::IContains, true).len(),
        9
    );
    assert_eq!(
        holidays.get_named("Thanksgiving", NameLookup::Exact, true),
        [Date::from_ymd(2014, 11, 27)]
    );
    assert_eq!(
        holidays.range("2014-11-01".."2014-12-01").unwrap(),
        [Date::from_ymd(2014, 11, 11), Date::from_ymd(2014, 11, 27)]
    );
}

#[test]
fn registry() {
    assert_eq!("USA".parse::<Country>().unwrap(), Country::US);
    assert!(matches!(
        country_holidays("ZZ", HolidaysOptions::new()),
        Err(Error::CountryNotAvailable(_))
    ));
    assert!(matches!(
        country_holidays("US", HolidaysOptions::new().subdivision("XX")),
        Err(Error::SubdivisionNotAvailable(_))
    ));
    assert!(holidays_engine::contains(Country::MX, "2024-09-16").unwrap());
    assert_eq!(
        holidays_engine::get(Country::CN, "2024-10-01").unwrap().as_deref(),
        Some("National Day")
    );
}

#[cfg(feature = "serde")]
#[test]
fn options_from_json() {
    let options = HolidaysOptions::from_json(r#"{"years":[2014],"observed":false}"#).unwrap();
    assert_eq!(options, HolidaysOptions::new().year(2014).observed(false));
    let json = options.to_json().unwrap();
    assert_eq!(HolidaysOptions::from_json(&json).unwrap(), options);
}
