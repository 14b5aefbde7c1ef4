//! Tests pinning the JSON wire shape of the records and derived results —
//! the UI layer depends on these exact field names.

use dancebase_engine::{AttendanceRecord, AttendanceStatus, ScheduleEvent};
use serde_json::json;

#[test]
fn attendance_record_uses_camel_case_and_snake_case_status() {
    let record: AttendanceRecord = serde_json::from_value(json!({
        "id": "r1",
        "memberName": "Mina",
        "date": "2026-03-01",
        "status": "early_leave",
        "notes": "left for rehearsal"
    }))
    .expect("record should deserialize");

    assert_eq!(record.member_name, "Mina");
    assert_eq!(record.status, AttendanceStatus::EarlyLeave);
    assert_eq!(record.notes.as_deref(), Some("left for rehearsal"));

    let back = serde_json::to_value(&record).expect("record should serialize");
    assert_eq!(back["memberName"], "Mina");
    assert_eq!(back["status"], "early_leave");
}

#[test]
fn notes_are_optional_and_omitted_when_absent() {
    let record: AttendanceRecord = serde_json::from_value(json!({
        "id": "r1",
        "memberName": "Mina",
        "date": "2026-03-01",
        "status": "present"
    }))
    .expect("record without notes should deserialize");
    assert_eq!(record.notes, None);

    let back = serde_json::to_value(&record).expect("should serialize");
    assert!(back.get("notes").is_none(), "absent notes must not serialize as null");
}

#[test]
fn schedule_event_round_trips_instants_and_series_id() {
    let event: ScheduleEvent = serde_json::from_value(json!({
        "id": "e1",
        "title": "weekly practice",
        "startsAt": "2026-03-01T09:00:00Z",
        "endsAt": "2026-03-01T11:00:00+00:00",
        "recurrenceId": "series-1"
    }))
    .expect("event should deserialize");

    assert_eq!(event.recurrence_id.as_deref(), Some("series-1"));
    assert!(event.starts_at < event.ends_at);

    let back = serde_json::to_value(&event).expect("event should serialize");
    assert_eq!(back["startsAt"], "2026-03-01T09:00:00Z");
}

#[test]
fn offset_instants_normalize_to_utc() {
    // The browser submits local-offset instants; comparison happens in UTC.
    let event: ScheduleEvent = serde_json::from_value(json!({
        "id": "e1",
        "title": "evening practice",
        "startsAt": "2026-03-01T18:00:00+09:00",
        "endsAt": "2026-03-01T20:00:00+09:00"
    }))
    .expect("event with offset should deserialize");

    let start = serde_json::to_value(&event).expect("should serialize")["startsAt"]
        .as_str()
        .map(String::from);
    assert_eq!(start.as_deref(), Some("2026-03-01T09:00:00Z"));
}
