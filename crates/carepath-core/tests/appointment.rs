use carepath_core::error::CoreError;
use carepath_core::models::appointment::{Appointment, AppointmentStatus};
use jiff::civil::date;
use jiff::Timestamp;
use uuid::Uuid;

fn booked_at() -> Timestamp {
    "2026-03-01T09:30:00Z".parse().unwrap()
}

#[test]
fn booking_starts_pending() {
    let facility = Uuid::new_v4();
    let appt = Appointment::book("user_1", facility, "Checkup", date(2026, 3, 10), "10:30 AM", booked_at()).unwrap();
    assert_eq!(appt.status, AppointmentStatus::Pending);
    assert_eq!(appt.facility_id, facility);
    assert_eq!(appt.created_at, appt.updated_at);

    let json = serde_json::to_value(&appt).unwrap();
    assert_eq!(json["status"], "pending");
    assert_eq!(json["date"], "2026-03-10");
    assert_eq!(json["userHandle"], "user_1");
}

#[test]
fn booking_requires_service_and_time() {
    let err = Appointment::book("user_1", Uuid::nil(), " ", date(2026, 3, 10), "10:30", booked_at()).unwrap_err();
    assert!(matches!(err, CoreError::MissingField("service")));

    let err = Appointment::book("user_1", Uuid::nil(), "Checkup", date(2026, 3, 10), "", booked_at()).unwrap_err();
    assert!(matches!(err, CoreError::MissingField("time")));
}

#[test]
fn cancel_is_idempotent() {
    let mut appt = Appointment::book("user_1", Uuid::nil(), "Checkup", date(2026, 3, 10), "10:30", booked_at()).unwrap();
    let later: Timestamp = "2026-03-02T12:00:00Z".parse().unwrap();

    assert!(appt.cancel(later));
    assert_eq!(appt.status, AppointmentStatus::Cancelled);
    assert_eq!(appt.updated_at, later);

    let even_later: Timestamp = "2026-03-03T12:00:00Z".parse().unwrap();
    assert!(!appt.cancel(even_later));
    assert_eq!(appt.updated_at, later);
}
