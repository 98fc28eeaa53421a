// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Formatting of recurrence rules back into rule strings.

use std::fmt::{self, Display};

use crate::keyword::{
    KW_RRULE_BYDAY, KW_RRULE_COUNT, KW_RRULE_FREQ, KW_RRULE_INTERVAL, KW_RRULE_UNTIL,
};
use crate::value::ParsedRule;

impl Display for ParsedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_recurrence_rule(f, self)
    }
}

/// Format a recurrence rule, e.g. `FREQ=WEEKLY;COUNT=4;INTERVAL=2;BYDAY=MO,FR`.
fn write_recurrence_rule(f: &mut fmt::Formatter<'_>, rule: &ParsedRule) -> fmt::Result {
    // FREQ is required
    write!(f, "{KW_RRULE_FREQ}={}", rule.frequency())?;

    // UNTIL or COUNT (optional, mutually exclusive)
    if let Some(until) = rule.until() {
        write!(f, ";{KW_RRULE_UNTIL}={until:08}")?;
    } else if let Some(count) = rule.count() {
        write!(f, ";{KW_RRULE_COUNT}={count}")?;
    }

    // INTERVAL (optional, 1 is implied)
    if rule.interval() != 1 {
        write!(f, ";{KW_RRULE_INTERVAL}={}", rule.interval())?;
    }

    // BYDAY (optional)
    if !rule.by_day().is_empty() {
        write!(f, ";{KW_RRULE_BYDAY}=")?;
        for (i, weekday) in rule.by_day().iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{weekday}")?;
        }
    }

    Ok(())
}
