use tempora::timer::ClockTime;

#[test]
fn test_parts_are_right_aligned() {
    assert_eq!(ClockTime::parse("45").unwrap().total_seconds(), 45);
    assert_eq!(ClockTime::parse("2:45").unwrap().total_seconds(), 165);
    assert_eq!(ClockTime::parse("1:02:45").unwrap().total_seconds(), 3_765);
    assert_eq!(ClockTime::parse("1:01:02:45").unwrap().total_seconds(), 90_165);
}

#[test]
fn test_parts_may_overflow_their_range() {
    // 90 minutes is accepted and simply counted
    assert_eq!(ClockTime::parse("00:90:00").unwrap().total_seconds(), 5_400);
}

#[test]
fn test_sign_applies_to_whole_value() {
    let negative = ClockTime::parse("-0:30:00").unwrap();
    assert!(negative.is_negative());
    assert_eq!(negative.total_seconds(), -1_800);
}

#[test]
fn test_from_seconds() {
    assert_eq!(ClockTime::from_seconds(0.0).as_str(), "0:00:00:00");
    assert_eq!(ClockTime::from_seconds(59.9).as_str(), "0:00:00:59");
    assert_eq!(ClockTime::from_seconds(-3_661.0).as_str(), "-0:01:01:01");
    assert_eq!(ClockTime::from_seconds(-0.4).as_str(), "0:00:00:00");
    assert_eq!(ClockTime::from_seconds(366.0 * 86_400.0).as_str(), "366:00:00:00");
    assert_eq!(ClockTime::zero(), ClockTime::from_seconds(0.0));
}

#[test]
fn test_part_count_and_zero() {
    let clock = ClockTime::parse("1:00:00:00").unwrap();
    assert_eq!(clock.part_count(), 4);
    assert!(!clock.is_zero());
    assert_eq!(clock.drop_days().part_count(), 3);
    assert!(ClockTime::parse("00:00").unwrap().is_zero());
}

#[test]
fn test_whitespace_is_trimmed() {
    let clock: ClockTime = "  12:00:00 ".parse().unwrap();
    assert_eq!(clock.to_string(), "12:00:00");
}

#[test]
fn test_out_of_range_is_rejected() {
    assert!(ClockTime::parse("99999999999999999999:00").is_err());
    assert!(ClockTime::parse("1:2:3:4:5").is_err());
}

#[test]
fn test_drop_days_keeps_any_sign() {
    let plus = ClockTime::parse("+1:02:03:04").unwrap();
    assert_eq!(plus.drop_days().as_str(), "+26:03:04");
    assert_eq!(plus.drop_seconds().as_str(), "+1:02:03");

    let minus = ClockTime::parse("-1:02:03:04").unwrap();
    assert_eq!(minus.drop_days().as_str(), "-26:03:04");
}
