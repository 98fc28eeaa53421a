// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar services used to validate dates and perform date arithmetic.

use std::fmt::Debug;

use jiff::tz::TimeZone;
use jiff::{Span, Zoned};

/// Calendar arithmetic and date validation.
///
/// The parser asks the calendar whether an `UNTIL` date exists, and the
/// recurrence calculator asks it to add spans to a reference date. An
/// implementation must be immutable (or internally synchronized) so that one
/// parser can be shared between threads.
pub trait Calendar: Debug + Send + Sync {
    /// Whether the given year, month (1-12) and day exist in this calendar.
    fn is_valid_date(&self, year: i16, month: i8, day: i8) -> bool;

    /// Add `span` to `from`.
    ///
    /// Calendar units overflow the way the calendar defines, e.g. adding one
    /// month to January 31 lands on the last day of February.
    ///
    /// ## Errors
    ///
    /// If the result is not representable.
    fn checked_add(&self, from: &Zoned, span: Span) -> Result<Zoned, jiff::Error>;
}

/// The proleptic Gregorian calendar in a fixed time zone.
///
/// Arithmetic happens on the wall clock of the calendar's time zone, so day,
/// week, month and year steps keep the time of day across DST transitions,
/// while minute and hour steps are exact elapsed time.
#[derive(Debug, Clone)]
pub struct GregorianCalendar {
    time_zone: TimeZone,
}

impl GregorianCalendar {
    /// Create a calendar operating in `time_zone`.
    #[must_use]
    pub const fn new(time_zone: TimeZone) -> Self {
        Self { time_zone }
    }

    /// The time zone arithmetic is performed in.
    #[must_use]
    pub const fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }
}

impl Default for GregorianCalendar {
    fn default() -> Self {
        Self::new(TimeZone::UTC)
    }
}

impl Calendar for GregorianCalendar {
    fn is_valid_date(&self, year: i16, month: i8, day: i8) -> bool {
        jiff::civil::Date::new(year, month, day).is_ok()
    }

    fn checked_add(&self, from: &Zoned, span: Span) -> Result<Zoned, jiff::Error> {
        from.with_time_zone(self.time_zone.clone()).checked_add(span)
    }
}
