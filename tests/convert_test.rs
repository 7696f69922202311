use chrono::FixedOffset;
use chrono_tz::Tz;
use tzform::convert::ConvertError;
use tzform::{local_to_utc, utc_to_local};

fn utc_minus_5() -> FixedOffset {
    FixedOffset::west_opt(5 * 3600).unwrap()
}

fn new_york() -> Tz {
    "America/New_York".parse().unwrap()
}

#[test]
fn test_empty_input_is_no_value() {
    assert_eq!(utc_to_local("", &utc_minus_5()).unwrap(), None);
    assert_eq!(local_to_utc("", &utc_minus_5()).unwrap(), None);
    assert_eq!(utc_to_local("", &new_york()).unwrap(), None);
    assert_eq!(local_to_utc("", &new_york()).unwrap(), None);
}

#[test]
fn test_utc_to_local_at_fixed_offset() {
    // UTC-5 viewer: 13:45Z shows as 08:45 wall-clock
    let out = utc_to_local("2024-03-15T13:45:00.000Z", &utc_minus_5()).unwrap().unwrap();
    assert_eq!(out, "2024-03-15T08:45");
}

#[test]
fn test_utc_to_local_output_shape() {
    let out = utc_to_local("2024-03-15T13:45:12.345Z", &utc_minus_5()).unwrap().unwrap();
    // Minute precision, no designator
    assert_eq!(out.len(), 16);
    assert!(!out.ends_with('Z'));
    assert_eq!(&out[10..11], "T");
}

#[test]
fn test_utc_to_local_accepts_offset_designators() {
    let out = utc_to_local("2024-03-15T13:45:00+00:00", &utc_minus_5()).unwrap().unwrap();
    assert_eq!(out, "2024-03-15T08:45");

    // Space-separated variant with an explicit offset
    let out = utc_to_local("2024-03-15 13:45:00+00:00", &utc_minus_5()).unwrap().unwrap();
    assert_eq!(out, "2024-03-15T08:45");
}

#[test]
fn test_local_to_utc_at_fixed_offset() {
    // 08:45 wall-clock at UTC-5 is the instant 13:45Z
    let out = local_to_utc("2024-03-15T08:45", &utc_minus_5()).unwrap().unwrap();
    assert_eq!(out, "2024-03-15T13:45:00.000Z");
}

#[test]
fn test_local_to_utc_output_shape() {
    let out = local_to_utc("2024-03-15T08:45", &utc_minus_5()).unwrap().unwrap();
    assert!(out.ends_with('Z'));
    assert!(out.contains(".000Z"));
}

#[test]
fn test_local_to_utc_drops_seconds() {
    let out = local_to_utc("2024-03-15T08:45:59", &utc_minus_5()).unwrap().unwrap();
    assert_eq!(out, "2024-03-15T13:45:00.000Z");
}

#[test]
fn test_round_trip_recovers_instant_at_minute_precision() {
    let stored = "2024-07-04T16:20:00.000Z";
    let shown = utc_to_local(stored, &new_york()).unwrap().unwrap();
    assert_eq!(shown, "2024-07-04T12:20"); // EDT, UTC-4
    let back = local_to_utc(&shown, &new_york()).unwrap().unwrap();
    assert_eq!(back, stored);
}

#[test]
fn test_unparseable_input_is_a_distinct_error() {
    assert!(matches!(
        utc_to_local("not a timestamp", &utc_minus_5()),
        Err(ConvertError::UnparseableTimestamp(_))
    ));
    assert!(matches!(
        local_to_utc("March 15th, 8:45", &utc_minus_5()),
        Err(ConvertError::UnparseableTimestamp(_))
    ));
}

#[test]
fn test_utc_to_local_is_not_idempotent_over_its_output() {
    // The output carries no designator, so it is not an absolute instant
    let out = utc_to_local("2024-03-15T13:45:00.000Z", &utc_minus_5()).unwrap().unwrap();
    assert!(matches!(
        utc_to_local(&out, &utc_minus_5()),
        Err(ConvertError::UnparseableTimestamp(_))
    ));
}

#[test]
fn test_offset_varies_across_spring_forward() {
    // America/New_York DST starts 2024-03-10 02:00 EST (07:00Z)
    let before = utc_to_local("2024-03-10T06:59:00.000Z", &new_york()).unwrap().unwrap();
    assert_eq!(before, "2024-03-10T01:59"); // EST, UTC-5
    let after = utc_to_local("2024-03-10T07:00:00.000Z", &new_york()).unwrap().unwrap();
    assert_eq!(after, "2024-03-10T03:00"); // EDT, UTC-4
}

#[test]
fn test_spring_forward_gap_does_not_name_an_instant() {
    // 02:30 never happens on 2024-03-10 in America/New_York
    assert!(matches!(
        local_to_utc("2024-03-10T02:30", &new_york()),
        Err(ConvertError::NonexistentLocalTime(_))
    ));
}

#[test]
fn test_fall_back_fold_resolves_to_earlier_instant() {
    // 01:30 happens twice on 2024-11-03 in America/New_York; the first
    // occurrence is still EDT (UTC-4)
    let out = local_to_utc("2024-11-03T01:30", &new_york()).unwrap().unwrap();
    assert_eq!(out, "2024-11-03T05:30:00.000Z");
}

#[test]
fn test_inputs_are_trimmed() {
    let out = utc_to_local(" 2024-03-15T13:45:00.000Z ", &utc_minus_5()).unwrap().unwrap();
    assert_eq!(out, "2024-03-15T08:45");
    let out = local_to_utc(" 2024-03-15T08:45 ", &utc_minus_5()).unwrap().unwrap();
    assert_eq!(out, "2024-03-15T13:45:00.000Z");
}
