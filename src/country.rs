use std::sync::Arc;

use crate::{options::HolidaysOptions, rules::HolidayRules, Error, Holidays};

macro_rules! declare_countries {
    ($($code: ident: $str_code: literal $alpha3: literal $name: literal $val: literal),* $(,)?) => {
        /// Countries with holiday rules, by ISO 3166-1 alpha-2 code.
        #[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
        pub enum Country {$(
            #[doc = $name]
            $code = $val
        ),*}

        impl Country {
            /// Every country compiled into the crate, sorted by code.
            pub const ALL: &'static [Country] = &[$(Country::$code),*];

            /// ISO 3166-1 alpha-2 code.
            pub const fn code(self) -> &'static str {
                match self {$(Country::$code => $str_code),*}
            }

            /// ISO 3166-1 alpha-3 code.
            pub const fn alpha3(self) -> &'static str {
                match self {$(Country::$code => $alpha3),*}
            }

            /// English short name.
            pub const fn name(self) -> &'static str {
                match self {$(Country::$code => $name),*}
            }
        }
    };
}

include!(concat!(env!("OUT_DIR"), "/decl_countries.rs"));

impl Country {
    /// Rule module of this country.
    pub fn rules(self) -> Arc<dyn HolidayRules> {
        use crate::countries::*;
        match self {
            #[cfg(feature = "CA")]
            Country::CA => Arc::new(Canada),
            #[cfg(feature = "CN")]
            Country::CN => Arc::new(China),
            #[cfg(feature = "MX")]
            Country::MX => Arc::new(Mexico),
            #[cfg(feature = "MY")]
            Country::MY => Arc::new(Malaysia),
            #[cfg(feature = "SG")]
            Country::SG => Arc::new(Singapore),
            #[cfg(feature = "TH")]
            Country::TH => Arc::new(Thailand),
            #[cfg(feature = "UA")]
            Country::UA => Arc::new(Ukraine),
            #[cfg(feature = "US")]
            Country::US => Arc::new(UnitedStates),
        }
    }

    /// Subdivision codes accepted by this country.
    pub fn subdivisions(self) -> &'static [&'static str] {
        self.rules().subdivisions()
    }

    /// A container of this country's holidays.
    pub fn holidays(self, options: HolidaysOptions) -> Result<Holidays, Error> {
        Holidays::from_rules(self.rules(), options)
    }
}

impl std::str::FromStr for Country {
    type Err = Error;

    /// Accepts the alpha-2 code, the alpha-3 code or the English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CODE_TO_COUNTRY
            .get(s)
            .copied()
            .ok_or_else(|| Error::CountryNotAvailable(s.to_string()))
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl AsRef<str> for Country {
    fn as_ref(&self) -> &str {
        self.code()
    }
}

/// A container for the country identified by `code` (alpha-2, alpha-3 or name).
pub fn country_holidays(code: &str, options: HolidaysOptions) -> Result<Holidays, Error> {
    code.parse::<Country>()?.holidays(options)
}

/// Available countries with the subdivisions each one accepts.
pub fn supported_countries() -> Vec<(Country, &'static [&'static str])> {
    Country::ALL
        .iter()
        .map(|country| (*country, country.subdivisions()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "US")]
    #[test]
    fn lookup_aliases() {
        assert_eq!("US".parse::<Country>().unwrap(), Country::US);
        assert_eq!("USA".parse::<Country>().unwrap(), Country::US);
        assert_eq!("United States".parse::<Country>().unwrap(), Country::US);
        assert_eq!(Country::US.alpha3(), "USA");
        assert_eq!(Country::US.to_string(), "US");
    }

    #[test]
    fn unknown_country() {
        assert_eq!(
            "XX".parse::<Country>(),
            Err(Error::CountryNotAvailable("XX".to_string()))
        );
        assert!(matches!(
            country_holidays("Atlantis", HolidaysOptions::new()),
            Err(Error::CountryNotAvailable(_))
        ));
    }

    #[cfg(feature = "MY")]
    #[test]
    fn registry_lists_subdivisions() {
        let countries = supported_countries();
        let (_, malaysia) = countries
            .iter()
            .find(|(country, _)| *country == Country::MY)
            .unwrap();
        assert_eq!(malaysia.len(), 16);
    }
}
