//! Operation-level tests against a scripted database.

mod common;

use chrono::NaiveDate;
use common::FakeDb;

use hms::db::ResultSet;
use hms::model::{Appointment, AppointmentStatus, Doctor, Gender, Patient, TimeSlot};
use hms::ops::add::{self, AddOutcome};
use hms::ops::book::{self, BookOutcome};
use hms::ops::{list, report};

fn doctor() -> Doctor {
    Doctor {
        doctor_id: 4,
        name: "Rita Brock".to_string(),
        specialty: "Allergist".to_string(),
        department_id: 23,
    }
}

fn patient() -> Patient {
    Patient {
        patient_id: 29,
        name: "Melonie Helmers".to_string(),
        gender: Gender::Female,
        age: 52,
        address: "7584 S. Thatcher Lane".to_string(),
        appointment_count: 1,
    }
}

fn appointment() -> Appointment {
    Appointment {
        appnt_id: 24,
        adate: NaiveDate::from_ymd_opt(2021, 10, 20).unwrap(),
        time_slot: TimeSlot::parse("10:00-17:00").unwrap(),
        status: AppointmentStatus::Active,
    }
}

#[test]
fn test_add_doctor_inserts_when_id_is_free() {
    let mut db = FakeDb::new();
    db.push_empty();

    let outcome = add::add_doctor(&mut db, &doctor()).unwrap();

    assert_eq!(outcome, AddOutcome::Inserted);
    assert_eq!(db.queries.len(), 1);
    assert!(db.queries[0].contains("WHERE doctor_id = $1"));
    assert_eq!(db.executed.len(), 1);
    assert!(db.executed[0].starts_with("INSERT INTO doctor"));
}

#[test]
fn test_add_doctor_rejects_duplicate_id() {
    let mut db = FakeDb::new();
    db.push_scalar("4");

    let outcome = add::add_doctor(&mut db, &doctor()).unwrap();

    assert_eq!(outcome, AddOutcome::DuplicateId);
    assert!(db.executed.is_empty(), "no INSERT may follow a duplicate check hit");
}

#[test]
fn test_add_patient_rejects_duplicate_id() {
    let mut db = FakeDb::new();
    db.push_scalar("29");

    let outcome = add::add_patient(&mut db, &patient()).unwrap();

    assert_eq!(outcome, AddOutcome::DuplicateId);
    assert!(db.executed.is_empty());
}

#[test]
fn test_add_patient_inserts_all_fields() {
    let mut db = FakeDb::new();
    db.push_empty();

    let outcome = add::add_patient(&mut db, &patient()).unwrap();

    assert_eq!(outcome, AddOutcome::Inserted);
    assert!(db.executed[0].contains("appointment_count"));
}

#[test]
fn test_add_appointment_inserts_when_id_is_free() {
    let mut db = FakeDb::new();
    db.push_empty();

    let outcome = add::add_appointment(&mut db, &appointment()).unwrap();

    assert_eq!(outcome, AddOutcome::Inserted);
    assert!(db.executed[0].starts_with("INSERT INTO appointment"));
}

#[test]
fn test_add_appointment_rejects_duplicate_id() {
    let mut db = FakeDb::new();
    db.push_scalar("24");

    let outcome = add::add_appointment(&mut db, &appointment()).unwrap();

    assert_eq!(outcome, AddOutcome::DuplicateId);
    assert!(db.executed.is_empty());
}

#[test]
fn test_make_appointment_books_available_slot() {
    let mut db = FakeDb::new();
    db.push_scalar("29"); // patient exists
    db.push_scalar("AV"); // slot status
    db.push_scalar("24"); // doctor offers the slot

    let outcome = book::make_appointment(&mut db, 29, 4, 24).unwrap();

    assert_eq!(outcome, BookOutcome::Booked);
    assert_eq!(db.executed.len(), 2);
    assert!(db.executed[0].starts_with("UPDATE appointment"));
    assert!(db.executed[1].contains("appointment_count + 1"));
}

#[test]
fn test_make_appointment_waitlists_taken_slot() {
    let mut db = FakeDb::new();
    db.push_scalar("29");
    db.push_scalar("AC");
    db.push_scalar("24");

    let outcome = book::make_appointment(&mut db, 29, 4, 24).unwrap();

    assert_eq!(outcome, BookOutcome::Waitlisted);
    assert_eq!(db.executed.len(), 2);
}

#[test]
fn test_make_appointment_keeps_waitlisted_slot_waitlisted() {
    let mut db = FakeDb::new();
    db.push_scalar("29");
    db.push_scalar("WL");
    db.push_scalar("24");

    let outcome = book::make_appointment(&mut db, 29, 4, 24).unwrap();

    assert_eq!(outcome, BookOutcome::Waitlisted);
}

#[test]
fn test_make_appointment_rejects_missing_patient() {
    let mut db = FakeDb::new();
    db.push_empty();

    let outcome = book::make_appointment(&mut db, 999, 4, 24).unwrap();

    assert_eq!(outcome, BookOutcome::PatientNotFound);
    assert!(db.executed.is_empty());
}

#[test]
fn test_make_appointment_rejects_missing_slot() {
    let mut db = FakeDb::new();
    db.push_scalar("29");
    db.push_empty();

    let outcome = book::make_appointment(&mut db, 29, 4, 999).unwrap();

    assert_eq!(outcome, BookOutcome::AppointmentNotFound);
    assert!(db.executed.is_empty());
}

#[test]
fn test_make_appointment_rejects_wrong_doctor() {
    let mut db = FakeDb::new();
    db.push_scalar("29");
    db.push_scalar("AV");
    db.push_empty();

    let outcome = book::make_appointment(&mut db, 29, 8, 24).unwrap();

    assert_eq!(outcome, BookOutcome::WrongDoctor);
    assert!(db.executed.is_empty());
}

#[test]
fn test_make_appointment_rejects_past_slot() {
    let mut db = FakeDb::new();
    db.push_scalar("29");
    db.push_scalar("PA");
    db.push_scalar("24");

    let outcome = book::make_appointment(&mut db, 29, 4, 24).unwrap();

    assert_eq!(outcome, BookOutcome::PastAppointment);
    assert!(db.executed.is_empty(), "a past slot must not be mutated");
}

#[test]
fn test_doctor_appointments_filters_by_range_and_status() {
    let mut db = FakeDb::new();
    db.push_result(ResultSet::new(
        vec!["appnt_id".into(), "adate".into(), "time_slot".into(), "status".into()],
        vec![
            vec!["24".into(), "2021-10-20".into(), "10:00-17:00".into(), "AC".into()],
            vec!["31".into(), "2021-10-21".into(), "09:00-12:00".into(), "AV".into()],
        ],
    ));

    let from = NaiveDate::from_ymd_opt(2021, 10, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2021, 10, 31).unwrap();
    let rs = list::doctor_appointments(&mut db, 4, from, to).unwrap();

    assert_eq!(rs.len(), 2);
    let sql = &db.queries[0];
    assert!(sql.contains("BETWEEN $2 AND $3"));
    assert!(sql.contains("IN ('AC', 'AV')"));
    assert!(sql.contains("ORDER BY a.adate, a.time_slot"));
}

#[test]
fn test_department_available_filters_open_slots() {
    let mut db = FakeDb::new();
    db.push_empty();

    let on = NaiveDate::from_ymd_opt(2021, 10, 20).unwrap();
    let rs = list::department_available(&mut db, "Cardiology", on).unwrap();

    assert!(rs.is_empty());
    let sql = &db.queries[0];
    assert!(sql.contains("dep.name = $1"));
    assert!(sql.contains("a.status = 'AV'"));
}

#[test]
fn test_status_counts_orders_descending() {
    let mut db = FakeDb::new();
    db.push_empty();

    report::status_counts_per_doctor(&mut db).unwrap();

    let sql = &db.queries[0];
    assert!(sql.contains("GROUP BY d.doctor_id, d.name, a.status"));
    assert!(sql.contains("ORDER BY appointments DESC"));
}

#[test]
fn test_patients_with_status_binds_the_status() {
    let mut db = FakeDb::new();
    db.push_result(ResultSet::new(
        vec!["doctor_id".into(), "name".into(), "patients".into()],
        vec![vec!["4".into(), "Rita Brock".into(), "7".into()]],
    ));

    let rs =
        report::patients_per_doctor_with_status(&mut db, AppointmentStatus::Waitlisted).unwrap();

    assert_eq!(rs.scalar(), Some("4"));
    let sql = &db.queries[0];
    assert!(sql.contains("WHERE a.status = $1"));
    assert!(sql.contains("ORDER BY patients DESC"));
}
