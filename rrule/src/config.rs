// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parser configuration, loaded from a TOML table.

use std::num::NonZeroU32;

use jiff::tz::TimeZone;

use crate::calendar::GregorianCalendar;
use crate::error::RuleError;
use crate::parser::RuleParser;

/// Recurrence rule parser configuration.
///
/// ```toml
/// time_zone = "Asia/Shanghai"
/// default_interval = 1
/// strict = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ParserConfig {
    /// IANA time zone the calendar computes in, UTC if unset.
    #[serde(default)]
    pub time_zone: Option<String>,

    /// Interval used for rules without an `INTERVAL` part.
    #[serde(default = "default_interval")]
    pub default_interval: NonZeroU32,

    /// If true, unrecognized rule parts are rejected instead of ignored.
    #[serde(default)]
    pub strict: bool,
}

const fn default_interval() -> NonZeroU32 {
    NonZeroU32::MIN
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            time_zone: None,
            default_interval: default_interval(),
            strict: false,
        }
    }
}

impl ParserConfig {
    /// Resolve the configured time zone.
    ///
    /// ## Errors
    ///
    /// [`RuleError::InvalidTimeZone`] if the name is not in the time zone
    /// database.
    pub fn time_zone(&self) -> Result<TimeZone, RuleError> {
        match self.time_zone.as_deref() {
            None => Ok(TimeZone::UTC),
            Some(name) if name.eq_ignore_ascii_case("UTC") => Ok(TimeZone::UTC),
            Some(name) => TimeZone::get(name).map_err(|e| RuleError::InvalidTimeZone {
                name: name.to_owned(),
                reason: e.to_string(),
            }),
        }
    }
}

impl RuleParser<GregorianCalendar> {
    /// Build a parser with a Gregorian calendar from `config`.
    ///
    /// ## Errors
    ///
    /// [`RuleError::InvalidTimeZone`] if the configured time zone is unknown.
    pub fn from_config(config: &ParserConfig) -> Result<Self, RuleError> {
        let time_zone = config.time_zone()?;
        tracing::debug!(
            time_zone = time_zone.iana_name().unwrap_or("UTC"),
            default_interval = config.default_interval.get(),
            strict = config.strict,
            "building recurrence rule parser"
        );
        Ok(Self::new(GregorianCalendar::new(time_zone))
            .with_default_interval(config.default_interval)
            .with_strict(config.strict))
    }
}
