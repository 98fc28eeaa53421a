// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule type definitions.

use std::fmt::{self, Display};
use std::num::NonZeroU32;

use crate::keyword::{
    KW_DAY_FR, KW_DAY_MO, KW_DAY_SA, KW_DAY_SU, KW_DAY_TH, KW_DAY_TU, KW_DAY_WE,
    KW_RRULE_FREQ_DAILY, KW_RRULE_FREQ_HOURLY, KW_RRULE_FREQ_MINUTELY, KW_RRULE_FREQ_MONTHLY,
    KW_RRULE_FREQ_WEEKLY, KW_RRULE_FREQ_YEARLY,
};

/// Recurrence frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
#[expect(missing_docs)]
pub enum Frequency {
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Minutely => write!(f, "{KW_RRULE_FREQ_MINUTELY}"),
            Frequency::Hourly => write!(f, "{KW_RRULE_FREQ_HOURLY}"),
            Frequency::Daily => write!(f, "{KW_RRULE_FREQ_DAILY}"),
            Frequency::Weekly => write!(f, "{KW_RRULE_FREQ_WEEKLY}"),
            Frequency::Monthly => write!(f, "{KW_RRULE_FREQ_MONTHLY}"),
            Frequency::Yearly => write!(f, "{KW_RRULE_FREQ_YEARLY}"),
        }
    }
}

/// Day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
#[expect(missing_docs)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weekday::Monday => write!(f, "{KW_DAY_MO}"),
            Weekday::Tuesday => write!(f, "{KW_DAY_TU}"),
            Weekday::Wednesday => write!(f, "{KW_DAY_WE}"),
            Weekday::Thursday => write!(f, "{KW_DAY_TH}"),
            Weekday::Friday => write!(f, "{KW_DAY_FR}"),
            Weekday::Saturday => write!(f, "{KW_DAY_SA}"),
            Weekday::Sunday => write!(f, "{KW_DAY_SU}"),
        }
    }
}

impl From<Weekday> for jiff::civil::Weekday {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Monday => Self::Monday,
            Weekday::Tuesday => Self::Tuesday,
            Weekday::Wednesday => Self::Wednesday,
            Weekday::Thursday => Self::Thursday,
            Weekday::Friday => Self::Friday,
            Weekday::Saturday => Self::Saturday,
            Weekday::Sunday => Self::Sunday,
        }
    }
}

impl From<jiff::civil::Weekday> for Weekday {
    fn from(value: jiff::civil::Weekday) -> Self {
        match value {
            jiff::civil::Weekday::Monday => Self::Monday,
            jiff::civil::Weekday::Tuesday => Self::Tuesday,
            jiff::civil::Weekday::Wednesday => Self::Wednesday,
            jiff::civil::Weekday::Thursday => Self::Thursday,
            jiff::civil::Weekday::Friday => Self::Friday,
            jiff::civil::Weekday::Saturday => Self::Saturday,
            jiff::civil::Weekday::Sunday => Self::Sunday,
        }
    }
}

/// A validated recurrence rule.
///
/// Values are only produced by [`RuleParser::parse`](crate::RuleParser::parse),
/// so every accessor reflects a rule that satisfied all cross-field checks:
/// the interval and count are positive, `COUNT` and `UNTIL` never appear
/// together, and `UNTIL` names a real calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedRule {
    pub(crate) frequency: Frequency,
    pub(crate) interval: NonZeroU32,
    pub(crate) count: Option<NonZeroU32>,
    pub(crate) until: Option<u32>,
    pub(crate) by_day: Vec<Weekday>,
}

impl ParsedRule {
    /// Frequency of recurrence
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Interval between recurrences, at least 1
    #[must_use]
    pub const fn interval(&self) -> u32 {
        self.interval.get()
    }

    /// Number of occurrences
    #[must_use]
    pub fn count(&self) -> Option<u32> {
        self.count.map(NonZeroU32::get)
    }

    /// End date of the recurrence as an eight digit `YYYYMMDD` number, e.g.
    /// `20250111`. Any time of day given in the rule is not retained.
    #[must_use]
    pub const fn until(&self) -> Option<u32> {
        self.until
    }

    /// Decode [`ParsedRule::until`] into a civil date.
    #[must_use]
    pub fn until_date(&self) -> Option<jiff::civil::Date> {
        let until = self.until?;
        let year = i16::try_from(until / 10_000).ok()?;
        let month = i8::try_from(until / 100 % 100).ok()?;
        let day = i8::try_from(until % 100).ok()?;
        jiff::civil::Date::new(year, month, day).ok()
    }

    /// Weekdays the rule is restricted to, in the order written.
    #[must_use]
    pub fn by_day(&self) -> &[Weekday] {
        &self.by_day
    }
}

/// Pack a date into its `YYYYMMDD` decimal form.
pub(crate) fn encode_until(year: u16, month: u8, day: u8) -> u32 {
    u32::from(year) * 10_000 + u32::from(month) * 100 + u32::from(day)
}
