//! Aggregate reports over doctors and their appointments.

use anyhow::Result;

use crate::db::{Database, ResultSet};
use crate::model::AppointmentStatus;

/// Appointment counts per doctor and status, most loaded first.
pub fn status_counts_per_doctor(db: &mut dyn Database) -> Result<ResultSet> {
    db.query(
        "SELECT d.doctor_id, d.name, a.status, COUNT(*) AS appointments \
         FROM doctor d \
         JOIN has_appointment ha ON ha.doctor_id = d.doctor_id \
         JOIN appointment a ON a.appnt_id = ha.appt_id \
         GROUP BY d.doctor_id, d.name, a.status \
         ORDER BY appointments DESC, d.doctor_id",
        &[],
    )
}

/// Per doctor, the number of slots in the given status, descending.
///
/// Every non-available slot corresponds to one booked patient, so for AC/WL
/// this reads as a patient count per doctor.
pub fn patients_per_doctor_with_status(
    db: &mut dyn Database,
    status: AppointmentStatus,
) -> Result<ResultSet> {
    db.query(
        "SELECT d.doctor_id, d.name, COUNT(*) AS patients \
         FROM doctor d \
         JOIN has_appointment ha ON ha.doctor_id = d.doctor_id \
         JOIN appointment a ON a.appnt_id = ha.appt_id \
         WHERE a.status = $1 \
         GROUP BY d.doctor_id, d.name \
         ORDER BY patients DESC, d.doctor_id",
        &[&status.as_str()],
    )
}
