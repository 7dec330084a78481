//! Insert operations guarded by duplicate-key checks.
//!
//! Each insert first probes for the primary key with a SELECT and only then
//! issues the INSERT.

use anyhow::Result;

use crate::db::Database;
use crate::model::{Appointment, Doctor, Patient};

/// Result of an insert attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Inserted,
    /// A row with the same primary key already exists; nothing was inserted.
    DuplicateId,
}

pub fn add_doctor(db: &mut dyn Database, doctor: &Doctor) -> Result<AddOutcome> {
    let existing = db.query(
        "SELECT doctor_id FROM doctor WHERE doctor_id = $1",
        &[&doctor.doctor_id],
    )?;
    if !existing.is_empty() {
        return Ok(AddOutcome::DuplicateId);
    }
    db.execute(
        "INSERT INTO doctor (doctor_id, name, specialty, did) VALUES ($1, $2, $3, $4)",
        &[
            &doctor.doctor_id,
            &doctor.name,
            &doctor.specialty,
            &doctor.department_id,
        ],
    )?;
    Ok(AddOutcome::Inserted)
}

pub fn add_patient(db: &mut dyn Database, patient: &Patient) -> Result<AddOutcome> {
    let existing = db.query(
        "SELECT patient_id FROM patient WHERE patient_id = $1",
        &[&patient.patient_id],
    )?;
    if !existing.is_empty() {
        return Ok(AddOutcome::DuplicateId);
    }
    db.execute(
        "INSERT INTO patient (patient_id, name, gender, age, address, appointment_count) \
         VALUES ($1, $2, $3, $4, $5, $6)",
        &[
            &patient.patient_id,
            &patient.name,
            &patient.gender.as_str(),
            &patient.age,
            &patient.address,
            &patient.appointment_count,
        ],
    )?;
    Ok(AddOutcome::Inserted)
}

pub fn add_appointment(db: &mut dyn Database, appointment: &Appointment) -> Result<AddOutcome> {
    let existing = db.query(
        "SELECT appnt_id FROM appointment WHERE appnt_id = $1",
        &[&appointment.appnt_id],
    )?;
    if !existing.is_empty() {
        return Ok(AddOutcome::DuplicateId);
    }
    let time_slot = appointment.time_slot.to_string();
    db.execute(
        "INSERT INTO appointment (appnt_id, adate, time_slot, status) VALUES ($1, $2, $3, $4)",
        &[
            &appointment.appnt_id,
            &appointment.adate,
            &time_slot,
            &appointment.status.as_str(),
        ],
    )?;
    Ok(AddOutcome::Inserted)
}
