// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule parser.

use std::num::NonZeroU32;

use chumsky::extra::{self, ParserExtra};
use chumsky::input::Input;
use chumsky::prelude::*;
use chumsky::span::SimpleSpan;

use crate::calendar::{Calendar, GregorianCalendar};
use crate::error::RuleError;
use crate::keyword::{
    KW_DAY_FR, KW_DAY_MO, KW_DAY_SA, KW_DAY_SU, KW_DAY_TH, KW_DAY_TU, KW_DAY_WE, KW_RRULE,
    KW_RRULE_BYDAY, KW_RRULE_COUNT, KW_RRULE_FREQ, KW_RRULE_FREQ_DAILY, KW_RRULE_FREQ_HOURLY,
    KW_RRULE_FREQ_MINUTELY, KW_RRULE_FREQ_MONTHLY, KW_RRULE_FREQ_WEEKLY, KW_RRULE_FREQ_YEARLY,
    KW_RRULE_INTERVAL, KW_RRULE_UNTIL,
};
use crate::value::{Frequency, ParsedRule, Weekday, encode_until};

/// Parse a recurrence rule with the default parser, which validates dates
/// against the Gregorian calendar in UTC.
///
/// ## Errors
///
/// Returns the [`RuleError`] describing the first problem found.
///
/// ## Examples
///
/// ```
/// # use cadence_rrule::{RuleError, parse};
/// let rule = parse("FREQ=DAILY;UNTIL=20250111T120000Z").unwrap();
/// assert_eq!(rule.until(), Some(20250111));
///
/// let err = parse("FREQ=DAILY;COUNT=0").unwrap_err();
/// assert!(matches!(err, RuleError::InvalidCount { .. }));
/// ```
pub fn parse(rule: &str) -> Result<ParsedRule, RuleError> {
    RuleParser::<GregorianCalendar>::default().parse(rule)
}

/// Decodes recurrence rule strings into [`ParsedRule`] values.
///
/// A parser only holds configuration: the calendar used to validate `UNTIL`
/// dates and to step dates forward, the `INTERVAL` used when a rule has none,
/// and whether unrecognized rule parts are rejected. It keeps no state
/// between calls, so one parser can serve any number of threads.
#[derive(Debug, Clone)]
pub struct RuleParser<C = GregorianCalendar> {
    calendar: C,
    default_interval: NonZeroU32,
    strict: bool,
}

impl<C: Calendar + Default> Default for RuleParser<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: Calendar> RuleParser<C> {
    /// Create a lenient parser using `calendar`, with a default interval of 1.
    #[must_use]
    pub const fn new(calendar: C) -> Self {
        Self {
            calendar,
            default_interval: NonZeroU32::MIN,
            strict: false,
        }
    }

    /// Set the interval applied to rules without an `INTERVAL` part.
    #[must_use]
    pub const fn with_default_interval(mut self, interval: NonZeroU32) -> Self {
        self.default_interval = interval;
        self
    }

    /// Reject rule parts this parser does not recognize instead of
    /// ignoring them.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The calendar this parser validates and computes dates with.
    #[must_use]
    pub const fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Parse a recurrence rule such as `FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,FR`.
    ///
    /// A leading `RRULE:` and empty parts (such as a trailing `;`) are
    /// accepted. When a part is repeated the last occurrence wins.
    ///
    /// ## Errors
    ///
    /// - [`RuleError::MalformedRulePart`] for a part without `=`, with an
    ///   empty key, or (in strict mode) with an unrecognized key.
    /// - [`RuleError::MissingFrequency`] or [`RuleError::InvalidFrequency`]
    ///   for a missing or malformed `FREQ`.
    /// - [`RuleError::ConflictingCountAndUntil`] whenever both `COUNT` and
    ///   `UNTIL` are present, whatever their values.
    /// - The other `Invalid*` variants for a malformed value.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn parse(&self, rule: &str) -> Result<ParsedRule, RuleError> {
        let parts = split_parts(rule, self.strict)?;

        let frequency = match parts.freq {
            Some(value) => parse_frequency(value)?,
            None => return Err(RuleError::MissingFrequency),
        };

        // Reported whatever the COUNT and UNTIL values are.
        if parts.count.is_some() && parts.until.is_some() {
            return Err(RuleError::ConflictingCountAndUntil);
        }

        let interval = match parts.interval {
            Some(value) => parse_positive(value).ok_or_else(|| RuleError::InvalidInterval {
                value: value.to_owned(),
            })?,
            None => self.default_interval,
        };

        let count = parts
            .count
            .map(|value| {
                parse_positive(value).ok_or_else(|| RuleError::InvalidCount {
                    value: value.to_owned(),
                })
            })
            .transpose()?;

        let until = parts.until.map(|value| self.parse_until(value)).transpose()?;

        let by_day = match parts.by_day {
            Some(value) => parse_by_day(value)?,
            None => Vec::new(),
        };

        let rule = ParsedRule {
            frequency,
            interval,
            count,
            until,
            by_day,
        };
        tracing::trace!(%rule, "parsed recurrence rule");
        Ok(rule)
    }

    fn parse_until(&self, value: &str) -> Result<u32, RuleError> {
        let invalid = || RuleError::InvalidUntil {
            value: value.to_owned(),
        };

        // Anything after the date, such as `T120000Z`, is not retained.
        let date = value.get(..8).ok_or_else(invalid)?;
        let (year, month, day) = until_date::<'_, &str, extra::Default>()
            .then_ignore(end())
            .parse(date)
            .into_result()
            .map_err(|_| invalid())?;

        if !self.calendar.is_valid_date(year, month, day) {
            return Err(invalid());
        }
        Ok(encode_until(year.unsigned_abs(), month.unsigned_abs(), day.unsigned_abs()))
    }
}

/// Raw values of the recognized rule parts, before validation.
#[derive(Debug, Default)]
struct RuleParts<'src> {
    freq: Option<&'src str>,
    interval: Option<&'src str>,
    count: Option<&'src str>,
    until: Option<&'src str>,
    by_day: Option<&'src str>,
}

/// ```txt
/// recur           = recur-rule-part *( ";" recur-rule-part )
/// recur-rule-part = key "=" value
/// ```
fn split_parts(rule: &str, strict: bool) -> Result<RuleParts<'_>, RuleError> {
    let rule = rule
        .strip_prefix(KW_RRULE)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(rule);

    let mut parts = RuleParts::default();
    for token in rule.split(';').filter(|token| !token.is_empty()) {
        let malformed = || RuleError::MalformedRulePart {
            part: token.to_owned(),
        };

        let (key, value) = token.split_once('=').ok_or_else(malformed)?;
        let slot = match key {
            "" => return Err(malformed()),
            KW_RRULE_FREQ => &mut parts.freq,
            KW_RRULE_INTERVAL => &mut parts.interval,
            KW_RRULE_COUNT => &mut parts.count,
            KW_RRULE_UNTIL => &mut parts.until,
            KW_RRULE_BYDAY => &mut parts.by_day,
            _ if strict => return Err(malformed()),
            _ => {
                tracing::debug!(key, value, "ignoring unrecognized rule part");
                continue;
            }
        };

        if let Some(previous) = slot.replace(value) {
            tracing::debug!(key, previous, value, "rule part repeated, last occurrence wins");
        }
    }
    Ok(parts)
}

fn parse_frequency(value: &str) -> Result<Frequency, RuleError> {
    freq::<'_, &str, extra::Default>()
        .then_ignore(end())
        .parse(value)
        .into_result()
        .map_err(|_| RuleError::InvalidFrequency {
            value: value.to_owned(),
        })
}

fn parse_by_day(value: &str) -> Result<Vec<Weekday>, RuleError> {
    bywdaylist::<'_, &str, extra::Default>()
        .then_ignore(end())
        .parse(value)
        .into_result()
        .map_err(|_| RuleError::InvalidByDay {
            value: value.to_owned(),
        })
}

/// Parse `1*DIGIT` into a non-zero `u32`, rejecting anything else.
fn parse_positive(value: &str) -> Option<NonZeroU32> {
    let digits = u32_digits::<'_, &str, extra::Default>()
        .then_ignore(end())
        .parse(value)
        .into_result()
        .ok()?;
    lexical::parse::<u32, _>(&digits)
        .ok()
        .and_then(NonZeroU32::new)
}

/// ```txt
/// freq        = "MINUTELY" / "HOURLY" / "DAILY"
///             / "WEEKLY" / "MONTHLY" / "YEARLY"
/// ```
fn freq<'src, I, E>() -> impl Parser<'src, I, Frequency, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    choice((
        just(KW_RRULE_FREQ_MINUTELY).to(Frequency::Minutely),
        just(KW_RRULE_FREQ_HOURLY).to(Frequency::Hourly),
        just(KW_RRULE_FREQ_DAILY).to(Frequency::Daily),
        just(KW_RRULE_FREQ_WEEKLY).to(Frequency::Weekly),
        just(KW_RRULE_FREQ_MONTHLY).to(Frequency::Monthly),
        just(KW_RRULE_FREQ_YEARLY).to(Frequency::Yearly),
    ))
}

/// ```txt
/// date-value         = date-fullyear date-month date-mday
/// date-fullyear      = 4DIGIT
/// date-month         = 2DIGIT
/// date-mday          = 2DIGIT
/// ```
///
/// Ranges are not checked here, whether the date exists is up to the calendar.
fn until_date<'src, I, E>() -> impl Parser<'src, I, (i16, i8, i8), E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    let year = i16_0_9()
        .then(i16_0_9())
        .then(i16_0_9())
        .then(i16_0_9())
        .map(|(((a, b), c), d)| 1000 * a + 100 * b + 10 * c + d);

    let month = i8_0_9().then(i8_0_9()).map(|(a, b)| 10 * a + b);
    let day = i8_0_9().then(i8_0_9()).map(|(a, b)| 10 * a + b);

    year.then(month)
        .then(day)
        .map(|((year, month), day)| (year, month, day))
}

/// ```txt
/// bywdaylist  = ( weekday *("," weekday) )
/// ```
fn bywdaylist<'src, I, E>() -> impl Parser<'src, I, Vec<Weekday>, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    weekday().separated_by(just(',')).at_least(1).collect()
}

/// ```txt
/// weekday     = "SU" / "MO" / "TU" / "WE" / "TH" / "FR" / "SA"
/// ```
fn weekday<'src, I, E>() -> impl Parser<'src, I, Weekday, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    choice((
        just(KW_DAY_MO).to(Weekday::Monday),
        just(KW_DAY_TU).to(Weekday::Tuesday),
        just(KW_DAY_WE).to(Weekday::Wednesday),
        just(KW_DAY_TH).to(Weekday::Thursday),
        just(KW_DAY_FR).to(Weekday::Friday),
        just(KW_DAY_SA).to(Weekday::Saturday),
        just(KW_DAY_SU).to(Weekday::Sunday),
    ))
}

/// 1 to 10 digits, the most a `u32` can need.
fn u32_digits<'src, I, E>() -> impl Parser<'src, I, String, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    select! { c @ '0'..='9' => c }
        .repeated()
        .at_least(1)
        .at_most(10)
        .collect::<String>()
}

macro_rules! define_digit_select {
    ($fname:ident : $ty:ty => { $($ch:literal),+ $(,)? }) => {
        #[allow(trivial_numeric_casts, clippy::cast_lossless, clippy::char_lit_as_u8, clippy::cast_possible_wrap)]
        const fn $fname<'src, I, E>() -> impl Parser<'src, I, $ty, E> + Copy
        where
            I: Input<'src, Token = char, Span = SimpleSpan>,
            E: ParserExtra<'src, I>,
        {
            select! {
                $(
                    $ch => (($ch as u8 - b'0') as $ty),
                )+
            }
        }
    };
}

define_digit_select!(i8_0_9 : i8 => { '0', '1', '2', '3', '4', '5', '6', '7', '8', '9' });
define_digit_select!(i16_0_9 : i16 => { '0', '1', '2', '3', '4', '5', '6', '7', '8', '9' });
