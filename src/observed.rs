//! Observed-day shift rules.
//!
//! A rule tells, per weekday, where a holiday falling on that weekday is observed.

use crate::{date::Date, weekday::Weekday};

/// What happens to a holiday falling on a particular weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shift {
    /// Observed on the day itself.
    #[default]
    Keep,
    /// Observed a fixed number of days later (or earlier when negative).
    Days(i8),
    /// Observed on the first following day that is neither a holiday nor a weekend day.
    NextWorkday,
    /// Observed on the last preceding day that is neither a holiday nor a weekend day.
    PreviousWorkday,
    /// Not observed at all; the base entry is dropped.
    Drop,
}

/// Result of applying an [`ObservedRule`] to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    Unchanged,
    Moved(Date),
    Dropped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObservedRule([Shift; 7]);

impl Default for ObservedRule {
    fn default() -> Self {
        Self::NONE
    }
}

impl ObservedRule {
    /// Keeps every holiday where it falls.
    pub const NONE: ObservedRule = ObservedRule([Shift::Keep; 7]);

    pub const fn with(mut self, weekday: Weekday, shift: Shift) -> Self {
        self.0[weekday.index() as usize] = shift;
        self
    }

    /// Overlays the non-`Keep` shifts of `other` on top of this rule.
    pub const fn and(mut self, other: ObservedRule) -> Self {
        let mut i = 0;
        while i < 7 {
            if !matches!(other.0[i], Shift::Keep) {
                self.0[i] = other.0[i];
            }
            i += 1;
        }
        self
    }

    #[inline]
    pub const fn shift(&self, weekday: Weekday) -> Shift {
        self.0[weekday.index() as usize]
    }

    /// Where a holiday on `date` is observed.
    ///
    /// `is_day_off` reports dates that are already holidays or weekend days; the
    /// workday search stays inside `date`'s year and falls back to the date itself.
    pub fn apply(&self, date: Date, is_day_off: impl Fn(Date) -> bool) -> Observation {
        let step = match self.shift(date.weekday()) {
            Shift::Keep | Shift::Days(0) => return Observation::Unchanged,
            Shift::Drop => return Observation::Dropped,
            Shift::Days(days) => return Observation::Moved(date.add_days(days as i64)),
            Shift::NextWorkday => 1,
            Shift::PreviousWorkday => -1,
        };

        let mut candidate = date.add_days(step);
        while candidate.year() == date.year() {
            if !is_day_off(candidate) {
                return Observation::Moved(candidate);
            }
            candidate = candidate.add_days(step);
        }
        Observation::Unchanged
    }
}

use Shift::*;
use Weekday::*;

pub const SAT_SUN_TO_NEXT_MON: ObservedRule =
    ObservedRule::NONE.with(Saturday, Days(2)).with(Sunday, Days(1));
pub const SAT_SUN_TO_NEXT_TUE: ObservedRule =
    ObservedRule::NONE.with(Saturday, Days(3)).with(Sunday, Days(2));
pub const SAT_SUN_TO_NEXT_MON_TUE: ObservedRule =
    ObservedRule::NONE.with(Saturday, Days(2)).with(Sunday, Days(2));
pub const SAT_SUN_TO_NEXT_WORKDAY: ObservedRule = ObservedRule::NONE
    .with(Saturday, NextWorkday)
    .with(Sunday, NextWorkday);
pub const SAT_SUN_TO_PREV_FRI: ObservedRule =
    ObservedRule::NONE.with(Saturday, Days(-1)).with(Sunday, Days(-2));
pub const SAT_TO_PREV_FRI: ObservedRule = ObservedRule::NONE.with(Saturday, Days(-1));
pub const SAT_TO_NEXT_MON: ObservedRule = ObservedRule::NONE.with(Saturday, Days(2));
pub const SAT_TO_NEXT_WORKDAY: ObservedRule = ObservedRule::NONE.with(Saturday, NextWorkday);
pub const SUN_TO_NEXT_MON: ObservedRule = ObservedRule::NONE.with(Sunday, Days(1));
pub const SUN_TO_NEXT_WORKDAY: ObservedRule = ObservedRule::NONE.with(Sunday, NextWorkday);
pub const FRI_TO_NEXT_WORKDAY: ObservedRule = ObservedRule::NONE.with(Friday, NextWorkday);
pub const SAT_TO_PREV_FRI_SUN_TO_NEXT_MON: ObservedRule = SAT_TO_PREV_FRI.and(SUN_TO_NEXT_MON);
pub const SAT_SUN_TO_NONE: ObservedRule =
    ObservedRule::NONE.with(Saturday, Drop).with(Sunday, Drop);
