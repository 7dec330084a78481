//! Booking a patient into a doctor's appointment slot.

use anyhow::Result;

use crate::db::Database;
use crate::model::AppointmentStatus;

/// Outcome of a booking attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookOutcome {
    /// The slot was available and is now active.
    Booked,
    /// The slot was already taken; the patient joins the waitlist.
    Waitlisted,
    PatientNotFound,
    AppointmentNotFound,
    /// The slot exists but is not offered by the given doctor.
    WrongDoctor,
    /// The slot's date has passed.
    PastAppointment,
}

/// Book `patient_id` into `appnt_id` offered by `doctor_id`.
///
/// Status moves AV→AC on a fresh booking and AC→WL when the slot is already
/// taken; a waitlisted slot stays WL and a past slot rejects. A successful
/// booking also bumps the patient's appointment count. Each mutation is a
/// single independent statement.
pub fn make_appointment(
    db: &mut dyn Database,
    patient_id: i32,
    doctor_id: i32,
    appnt_id: i32,
) -> Result<BookOutcome> {
    let patient = db.query(
        "SELECT patient_id FROM patient WHERE patient_id = $1",
        &[&patient_id],
    )?;
    if patient.is_empty() {
        return Ok(BookOutcome::PatientNotFound);
    }

    let slot = db.query(
        "SELECT status FROM appointment WHERE appnt_id = $1",
        &[&appnt_id],
    )?;
    let code = match slot.scalar() {
        Some(code) => code.to_string(),
        None => return Ok(BookOutcome::AppointmentNotFound),
    };

    let link = db.query(
        "SELECT appt_id FROM has_appointment WHERE appt_id = $1 AND doctor_id = $2",
        &[&appnt_id, &doctor_id],
    )?;
    if link.is_empty() {
        return Ok(BookOutcome::WrongDoctor);
    }

    let status: AppointmentStatus = code.parse()?;
    let (next, outcome) = match status {
        AppointmentStatus::Past => return Ok(BookOutcome::PastAppointment),
        AppointmentStatus::Available => (AppointmentStatus::Active, BookOutcome::Booked),
        AppointmentStatus::Active | AppointmentStatus::Waitlisted => {
            (AppointmentStatus::Waitlisted, BookOutcome::Waitlisted)
        }
    };

    db.execute(
        "UPDATE appointment SET status = $1 WHERE appnt_id = $2",
        &[&next.as_str(), &appnt_id],
    )?;
    db.execute(
        "UPDATE patient SET appointment_count = appointment_count + 1 WHERE patient_id = $1",
        &[&patient_id],
    )?;
    Ok(outcome)
}
