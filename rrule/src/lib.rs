// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Decode iCalendar recurrence rules (the `FREQ`, `INTERVAL`, `COUNT`, `UNTIL`
//! and `BYDAY` subset of RFC 5545) and advance a date by one recurrence step.
//!
//! ```
//! use cadence_rrule::{Frequency, Weekday, parse};
//!
//! let rule = parse("FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,FR").unwrap();
//! assert_eq!(rule.frequency(), Frequency::Weekly);
//! assert_eq!(rule.interval(), 2);
//! assert_eq!(rule.by_day(), &[Weekday::Monday, Weekday::Friday]);
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::single_match_else, clippy::match_bool)]

mod calendar;
mod config;
mod error;
mod formatter;
pub mod keyword;
mod parser;
mod recurrence;
mod value;

pub use crate::calendar::{Calendar, GregorianCalendar};
pub use crate::config::ParserConfig;
pub use crate::error::RuleError;
pub use crate::parser::{RuleParser, parse};
pub use crate::recurrence::frequency_next_date;
pub use crate::value::{Frequency, ParsedRule, Weekday};
