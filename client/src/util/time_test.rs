use super::*;
use chrono::FixedOffset;

#[test]
fn time_label_in_utc() {
    let ts = Utc.with_ymd_and_hms(2025, 3, 4, 9, 5, 0).unwrap();
    assert_eq!(time_label_in(ts, &Utc), "09:05");
}

#[test]
fn time_label_applies_offset() {
    let ts = Utc.with_ymd_and_hms(2025, 3, 4, 23, 30, 0).unwrap();
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    assert_eq!(time_label_in(ts, &plus_two), "01:30");
}

#[test]
fn local_time_label_is_hh_mm() {
    let label = local_time_label(Utc::now());
    assert_eq!(label.len(), 5);
    assert_eq!(label.as_bytes()[2], b':');
}
