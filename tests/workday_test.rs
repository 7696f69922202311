use chrono::NaiveDate;
use chrono_tz::Tz;
use tzform::workday::{WorkdayError, WorkdayService};

#[test]
fn test_window_in_winter() {
    // Berlin in January is UTC+1
    let service = WorkdayService::new(Some("Europe/Berlin"), 10, 18).unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let window = service.window_for(day).unwrap();
    assert_eq!(window.start_time.to_rfc3339(), "2024-01-15T09:00:00+00:00");
    assert_eq!(window.end_time.to_rfc3339(), "2024-01-15T17:00:00+00:00");
}

#[test]
fn test_window_in_summer() {
    // Berlin in July is UTC+2
    let service = WorkdayService::new(Some("Europe/Berlin"), 10, 18).unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
    let window = service.window_for(day).unwrap();
    assert_eq!(window.start_time.to_rfc3339(), "2024-07-15T08:00:00+00:00");
    assert_eq!(window.end_time.to_rfc3339(), "2024-07-15T16:00:00+00:00");
}

#[test]
fn test_default_hours() {
    let service = WorkdayService::with_default_hours(Some("UTC")).unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let window = service.window_for(day).unwrap();
    assert_eq!(window.start_time.to_rfc3339(), "2024-03-15T10:00:00+00:00");
    assert_eq!(window.end_time.to_rfc3339(), "2024-03-15T18:00:00+00:00");
}

#[test]
fn test_unknown_zone_falls_back_to_utc() {
    let service = WorkdayService::new(Some("Atlantis/Lost_City"), 10, 18).unwrap();
    assert_eq!(service.timezone(), Tz::UTC);
}

#[test]
fn test_invalid_hours_are_rejected() {
    assert!(matches!(
        WorkdayService::new(Some("UTC"), 18, 10),
        Err(WorkdayError::InvalidHours(18, 10))
    ));
    assert!(matches!(
        WorkdayService::new(Some("UTC"), 10, 10),
        Err(WorkdayError::InvalidHours(10, 10))
    ));
    assert!(matches!(
        WorkdayService::new(Some("UTC"), 10, 24),
        Err(WorkdayError::InvalidHours(10, 24))
    ));
}

#[test]
fn test_window_ordering_holds() {
    let service = WorkdayService::new(Some("America/New_York"), 9, 17).unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap(); // DST fall-back day
    let window = service.window_for(day).unwrap();
    assert!(window.start_time < window.end_time);
}
