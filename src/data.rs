use std::hash::Hash;

use crate::calendars::islamic::Observance;
use crate::date::Date;

include!(concat!(env!("OUT_DIR"), "/islamic_data.rs"));

/// Key of the generated Islamic observance table.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TableKey(Observance, i32);

impl phf::PhfHash for TableKey {
    fn phf_hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (self.0 as u8).hash(state);
        self.1.hash(state);
    }
}
impl phf_shared::PhfBorrow<TableKey> for TableKey {
    fn borrow(&self) -> &TableKey {
        self
    }
}

pub(crate) fn islamic_dates(observance: Observance, year: i32) -> Option<&'static [Date]> {
    if !(ISLAMIC_MIN_YEAR..=ISLAMIC_MAX_YEAR).contains(&year) {
        return None;
    }
    ISLAMIC_DATES.get(&TableKey(observance, year)).copied()
}
