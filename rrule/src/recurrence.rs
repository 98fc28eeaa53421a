// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Stepping a date forward by one recurrence interval.

use jiff::{Span, Zoned};

use crate::calendar::{Calendar, GregorianCalendar};
use crate::error::RuleError;
use crate::parser::RuleParser;
use crate::value::{Frequency, ParsedRule};

/// Parse `rule` and advance `from` by one interval of its frequency, using a
/// Gregorian calendar in the time zone `from` carries.
///
/// ## Errors
///
/// Any parse error, or [`RuleError::DateOutOfRange`] when the result is not
/// representable.
///
/// ## Examples
///
/// ```
/// # use cadence_rrule::frequency_next_date;
/// use jiff::{civil::date, tz::TimeZone};
///
/// let from = date(2025, 2, 17).at(0, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap();
/// let next = frequency_next_date("FREQ=WEEKLY;INTERVAL=2", &from).unwrap();
/// assert_eq!(next.date(), date(2025, 3, 3));
/// ```
pub fn frequency_next_date(rule: &str, from: &Zoned) -> Result<Zoned, RuleError> {
    let calendar = GregorianCalendar::new(from.time_zone().clone());
    RuleParser::new(calendar).frequency_next_date(rule, from)
}

impl<C: Calendar> RuleParser<C> {
    /// Parse `rule` and advance `from` by `INTERVAL` units of its frequency,
    /// using this parser's calendar.
    ///
    /// `COUNT`, `UNTIL` and `BYDAY` are validated but not applied: the result
    /// is the reference date one interval ahead, not the next occurrence that
    /// matches the whole rule.
    ///
    /// ## Errors
    ///
    /// Any parse error, or [`RuleError::DateOutOfRange`] when the result is not
    /// representable.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn frequency_next_date(&self, rule: &str, from: &Zoned) -> Result<Zoned, RuleError> {
        self.parse(rule)?.next_date(self.calendar(), from)
    }
}

impl ParsedRule {
    /// Advance `from` by `INTERVAL` units of this rule's frequency.
    ///
    /// Weeks are seven days. Months and years are calendar units, so a day of
    /// month that does not exist in the target month is clamped by the
    /// calendar, e.g. January 31 steps to the last day of February.
    ///
    /// ## Errors
    ///
    /// [`RuleError::DateOutOfRange`] when the result is not representable.
    pub fn next_date<C: Calendar + ?Sized>(
        &self,
        calendar: &C,
        from: &Zoned,
    ) -> Result<Zoned, RuleError> {
        let out_of_range = |err: jiff::Error| RuleError::DateOutOfRange {
            reason: err.to_string(),
        };

        let step = self.step().map_err(out_of_range)?;
        calendar.checked_add(from, step).map_err(out_of_range)
    }

    fn step(&self) -> Result<Span, jiff::Error> {
        let n = i64::from(self.interval());
        match self.frequency() {
            Frequency::Minutely => Span::new().try_minutes(n),
            Frequency::Hourly => Span::new().try_hours(n),
            Frequency::Daily => Span::new().try_days(n),
            Frequency::Weekly => Span::new().try_days(n * 7),
            Frequency::Monthly => Span::new().try_months(n),
            Frequency::Yearly => Span::new().try_years(n),
        }
    }
}
