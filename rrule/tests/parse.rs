// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule parsing tests.

use cadence_rrule::{Frequency, RuleError, Weekday, parse};

#[test]
fn parse_freq_only() {
    let freqs = [
        ("FREQ=MINUTELY", Frequency::Minutely),
        ("FREQ=HOURLY", Frequency::Hourly),
        ("FREQ=DAILY", Frequency::Daily),
        ("FREQ=WEEKLY", Frequency::Weekly),
        ("FREQ=MONTHLY", Frequency::Monthly),
        ("FREQ=YEARLY", Frequency::Yearly),
    ];

    for (src, expected) in freqs {
        let rule = parse(src).unwrap();
        assert_eq!(rule.frequency(), expected, "Failed for {src}");
        assert_eq!(rule.interval(), 1);
        assert_eq!(rule.count(), None);
        assert_eq!(rule.until(), None);
        assert!(rule.by_day().is_empty());
    }
}

#[test]
fn parse_rejects_invalid_freq() {
    assert_eq!(
        parse("FREQ=FOOBAR").unwrap_err(),
        RuleError::InvalidFrequency {
            value: "FOOBAR".to_owned()
        }
    );
    assert!(matches!(
        parse("FREQ=SECONDLY"),
        Err(RuleError::InvalidFrequency { .. })
    ));
    assert!(matches!(
        parse("FREQ=daily"),
        Err(RuleError::InvalidFrequency { .. })
    ));
}

#[test]
fn parse_rejects_missing_freq() {
    for src in ["", ";", "INTERVAL=2;COUNT=10", "BYDAY=MO"] {
        assert_eq!(
            parse(src).unwrap_err(),
            RuleError::MissingFrequency,
            "Failed for {src:?}"
        );
    }
}

#[test]
fn parse_interval() {
    for n in [1_u32, 2, 3, 10, 365, 1000, u32::MAX] {
        let rule = parse(&format!("FREQ=DAILY;INTERVAL={n}")).unwrap();
        assert_eq!(rule.interval(), n);
    }
}

#[test]
fn parse_rejects_invalid_interval() {
    for value in ["", "-1", "0", "foo"] {
        assert_eq!(
            parse(&format!("FREQ=DAILY;INTERVAL={value}")).unwrap_err(),
            RuleError::InvalidInterval {
                value: value.to_owned()
            },
            "Failed for {value:?}"
        );
    }
}

#[test]
fn parse_count() {
    for n in [1_u32, 2, 10, 52, 9999] {
        let rule = parse(&format!("FREQ=DAILY;COUNT={n}")).unwrap();
        assert_eq!(rule.count(), Some(n));
        assert_eq!(rule.until(), None);
    }
}

#[test]
fn parse_rejects_invalid_count() {
    for value in ["", "-2", "1- ", "foobar", "0"] {
        assert_eq!(
            parse(&format!("FREQ=DAILY;COUNT={value}")).unwrap_err(),
            RuleError::InvalidCount {
                value: value.to_owned()
            },
            "Failed for {value:?}"
        );
    }
}

#[test]
fn parse_until() {
    let rule = parse("FREQ=DAILY;UNTIL=20250111").unwrap();
    assert_eq!(rule.until(), Some(20_250_111));
    assert_eq!(rule.count(), None);
    assert_eq!(rule.until_date(), Some(jiff::civil::date(2025, 1, 11)));
}

#[test]
fn parse_until_drops_time() {
    for src in [
        "FREQ=DAILY;UNTIL=19971224T000000Z",
        "FREQ=DAILY;UNTIL=19971224T235959",
        "FREQ=DAILY;UNTIL=19971224",
    ] {
        assert_eq!(parse(src).unwrap().until(), Some(19_971_224), "Failed for {src}");
    }
}

#[test]
fn parse_until_leap_days() {
    assert_eq!(
        parse("FREQ=YEARLY;UNTIL=20240229").unwrap().until(),
        Some(20_240_229)
    );
    assert_eq!(
        parse("FREQ=YEARLY;UNTIL=20000229").unwrap().until(),
        Some(20_000_229)
    );
    for src in ["FREQ=YEARLY;UNTIL=20250229", "FREQ=YEARLY;UNTIL=19000229"] {
        assert!(
            matches!(parse(src), Err(RuleError::InvalidUntil { .. })),
            "Failed for {src}"
        );
    }
}

#[test]
fn parse_rejects_invalid_until() {
    for value in ["20251350", "foobar", "1", "", "20250431", "20250001", "2025-01-11"] {
        assert_eq!(
            parse(&format!("FREQ=DAILY;UNTIL={value}")).unwrap_err(),
            RuleError::InvalidUntil {
                value: value.to_owned()
            },
            "Failed for {value:?}"
        );
    }
}

#[test]
fn parse_rejects_count_with_until() {
    let cases = [
        "FREQ=DAILY;UNTIL=20200101T120000Z;COUNT=1",
        "FREQ=DAILY;COUNT=1;UNTIL=20200101",
        // Reported even when one of the values is invalid on its own
        "FREQ=DAILY;UNTIL=foobar;COUNT=1",
        "FREQ=DAILY;UNTIL=20200101;COUNT=-2",
        "FREQ=DAILY;UNTIL=;COUNT=",
    ];
    for src in cases {
        assert_eq!(
            parse(src).unwrap_err(),
            RuleError::ConflictingCountAndUntil,
            "Failed for {src}"
        );
    }
}

#[test]
fn parse_checks_freq_before_count_with_until() {
    assert_eq!(
        parse("COUNT=1;UNTIL=20250101").unwrap_err(),
        RuleError::MissingFrequency
    );
    assert_eq!(
        parse("FREQ=FOOBAR;COUNT=1;UNTIL=20250101").unwrap_err(),
        RuleError::InvalidFrequency {
            value: "FOOBAR".to_owned()
        }
    );
}

#[test]
fn parse_byday_single() {
    let days = [
        ("MO", Weekday::Monday),
        ("TU", Weekday::Tuesday),
        ("WE", Weekday::Wednesday),
        ("TH", Weekday::Thursday),
        ("FR", Weekday::Friday),
        ("SA", Weekday::Saturday),
        ("SU", Weekday::Sunday),
    ];

    for (token, expected) in days {
        let rule = parse(&format!("FREQ=DAILY;BYDAY={token}")).unwrap();
        assert_eq!(rule.by_day(), &[expected], "Failed for {token}");
    }
}

#[test]
fn parse_byday_keeps_order_and_duplicates() {
    let rule = parse("FREQ=WEEKLY;BYDAY=FR,MO,FR,SU").unwrap();
    assert_eq!(
        rule.by_day(),
        &[
            Weekday::Friday,
            Weekday::Monday,
            Weekday::Friday,
            Weekday::Sunday
        ]
    );
}

#[test]
fn parse_rejects_invalid_byday() {
    for value in ["", "XX", "MO,XX", "mo", "1MO", "MO,,TU", "MONDAY"] {
        assert_eq!(
            parse(&format!("FREQ=WEEKLY;BYDAY={value}")).unwrap_err(),
            RuleError::InvalidByDay {
                value: value.to_owned()
            },
            "Failed for {value:?}"
        );
    }
}

#[test]
fn parse_rejects_malformed_parts() {
    for (src, part) in [
        ("FREQ=DAILY;COUNT", "COUNT"),
        ("FREQ", "FREQ"),
        ("FREQ=DAILY;=2", "=2"),
        ("FREQ=DAILY;;INTERVAL", "INTERVAL"),
    ] {
        assert_eq!(
            parse(src).unwrap_err(),
            RuleError::MalformedRulePart {
                part: part.to_owned()
            },
            "Failed for {src}"
        );
    }
}

#[test]
fn parse_ignores_unrecognized_parts() {
    let rule = parse("FREQ=MONTHLY;BYMONTH=1;WKST=SU;X-CUSTOM=1;BYSETPOS=-1").unwrap();
    assert_eq!(rule.frequency(), Frequency::Monthly);
    assert_eq!(rule, parse("FREQ=MONTHLY").unwrap());
}

#[test]
fn parse_repeated_part_last_wins() {
    let rule = parse("FREQ=DAILY;INTERVAL=2;FREQ=WEEKLY;INTERVAL=3").unwrap();
    assert_eq!(rule.frequency(), Frequency::Weekly);
    assert_eq!(rule.interval(), 3);
}

#[test]
fn parse_accepts_rrule_prefix_and_trailing_separator() {
    let rule = parse("RRULE:FREQ=YEARLY;UNTIL=20000131T140000Z;").unwrap();
    assert_eq!(rule.frequency(), Frequency::Yearly);
    assert_eq!(rule.until(), Some(20_000_131));
}

#[test]
fn parse_handles_reordered_parts() {
    let rule = parse("BYDAY=TU,TH;COUNT=10;INTERVAL=2;FREQ=WEEKLY").unwrap();
    assert_eq!(rule.frequency(), Frequency::Weekly);
    assert_eq!(rule.count(), Some(10));
    assert_eq!(rule.interval(), 2);
    assert_eq!(rule.by_day(), &[Weekday::Tuesday, Weekday::Thursday]);
}

#[test]
fn parse_twice_yields_equal_rules() {
    let src = "FREQ=WEEKLY;INTERVAL=2;UNTIL=20251231T235959Z;BYDAY=MO,WE";
    assert_eq!(parse(src).unwrap(), parse(src).unwrap());
}
