//! Listing queries over a doctor's or a department's appointments.

use anyhow::Result;
use chrono::NaiveDate;

use crate::db::{Database, ResultSet};

/// Active and available appointments of a doctor within a date range,
/// ordered by date and time slot.
pub fn doctor_appointments(
    db: &mut dyn Database,
    doctor_id: i32,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<ResultSet> {
    db.query(
        "SELECT a.appnt_id, a.adate, a.time_slot, a.status \
         FROM appointment a \
         JOIN has_appointment ha ON ha.appt_id = a.appnt_id \
         WHERE ha.doctor_id = $1 \
           AND a.adate BETWEEN $2 AND $3 \
           AND a.status IN ('AC', 'AV') \
         ORDER BY a.adate, a.time_slot",
        &[&doctor_id, &from, &to],
    )
}

/// Available appointments offered by a department's doctors on a given date.
pub fn department_available(
    db: &mut dyn Database,
    department: &str,
    on: NaiveDate,
) -> Result<ResultSet> {
    db.query(
        "SELECT a.appnt_id, a.time_slot, d.doctor_id, d.name AS doctor \
         FROM appointment a \
         JOIN has_appointment ha ON ha.appt_id = a.appnt_id \
         JOIN doctor d ON d.doctor_id = ha.doctor_id \
         JOIN department dep ON dep.dept_id = d.did \
         WHERE dep.name = $1 \
           AND a.adate = $2 \
           AND a.status = 'AV' \
         ORDER BY a.time_slot, d.name",
        &[&department, &on],
    )
}
