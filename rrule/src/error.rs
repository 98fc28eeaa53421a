// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur when decoding a recurrence rule or stepping it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The rule has no `FREQ` part.
    #[error("Missing required rule part 'FREQ'")]
    MissingFrequency,

    /// `FREQ` is not one of the recognized frequencies.
    #[error("Invalid FREQ value '{value}'")]
    InvalidFrequency {
        /// The rejected value
        value: String,
    },

    /// `INTERVAL` is not a positive integer.
    #[error("Invalid INTERVAL value '{value}', expected a positive integer")]
    InvalidInterval {
        /// The rejected value
        value: String,
    },

    /// `COUNT` is not a positive integer.
    #[error("Invalid COUNT value '{value}', expected a positive integer")]
    InvalidCount {
        /// The rejected value
        value: String,
    },

    /// `UNTIL` does not start with a valid `YYYYMMDD` date.
    #[error("Invalid UNTIL value '{value}', expected a date like 20250111")]
    InvalidUntil {
        /// The rejected value
        value: String,
    },

    /// Both `COUNT` and `UNTIL` were given.
    #[error("Rule parts 'COUNT' and 'UNTIL' must not occur together")]
    ConflictingCountAndUntil,

    /// A `BYDAY` entry is not a two-letter weekday code.
    #[error("Invalid BYDAY value '{value}'")]
    InvalidByDay {
        /// The rejected value
        value: String,
    },

    /// A rule part is not of the form `KEY=VALUE`, or its key is not allowed.
    #[error("Malformed rule part '{part}'")]
    MalformedRulePart {
        /// The offending rule part
        part: String,
    },

    /// Advancing a date left the range the calendar can represent.
    #[error("Next occurrence is out of range: {reason}")]
    DateOutOfRange {
        /// Description from the calendar service
        reason: String,
    },

    /// A configured time zone could not be resolved.
    #[error("Unknown time zone '{name}': {reason}")]
    InvalidTimeZone {
        /// The configured name
        name: String,
        /// Description from the time zone database
        reason: String,
    },
}
