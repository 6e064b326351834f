use std::time::{Duration, SystemTime};
use time::OffsetDateTime;
use timespan::{TimeSpan, MILLISECONDS_PER_DAY};

fn fmt(d: f64, h: f64, m: f64, s: f64, ms: f64) -> String {
    TimeSpan::from_components(d, h, m, s, ms).unwrap().to_string()
}

#[test]
fn display() {
    assert_eq!(fmt(1.0, 2.0, 3.0, 4.0, 5.0), "01:02:03:04.005");
    assert_eq!(fmt(0.0, 0.0, 1.0, 2.0, 3.0), "01:02.003");
    assert_eq!(TimeSpan::from_milliseconds(0.0).unwrap().to_string(), "000");
    assert_eq!(fmt(1.0, 0.0, 0.0, 0.0, 0.0), "01:00:00:00.000");
    assert_eq!(fmt(-1.0, -2.0, -3.0, -4.0, -5.0), "-01:02:03:04.005");
}

#[test]
fn instant_difference() {
    let today = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
    let tomorrow = today + time::Duration::days(1);

    let span = TimeSpan::from_instant_difference(today, tomorrow).unwrap();
    assert_eq!(span.total_milliseconds(), MILLISECONDS_PER_DAY);

    let span = TimeSpan::from_instant_difference(tomorrow, today).unwrap();
    assert_eq!(span.total_milliseconds(), -MILLISECONDS_PER_DAY);

    let span = TimeSpan::from_instant_difference(today, today).unwrap();
    assert_eq!(span, TimeSpan::ZERO);
}

#[test]
fn system_time_difference() {
    let start = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let end = start + Duration::from_millis(1_234);

    let span = TimeSpan::from_system_time_difference(start, end).unwrap();
    assert_eq!(span.total_milliseconds(), 1_234);

    let span = TimeSpan::from_system_time_difference(end, start).unwrap();
    assert_eq!(span.total_milliseconds(), -1_234);
}

#[test]
fn unit_constants_bound_factory_inputs() {
    let max_hours = (timespan::MAX_MILLISECONDS / TimeSpan::MILLISECONDS_PER_HOUR) as f64;
    assert!(TimeSpan::from_hours(max_hours).is_ok());
    assert!(TimeSpan::from_hours(max_hours + 1.0).is_err());

    let max_minutes = (timespan::MAX_MILLISECONDS / TimeSpan::MILLISECONDS_PER_MINUTE) as f64;
    let span = TimeSpan::from_minutes(-max_minutes).unwrap();
    assert_eq!(span.total_minutes(), -max_minutes);
    assert_eq!(span.total_seconds(), -max_minutes * 60.0);
}
