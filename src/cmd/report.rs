//! Report handlers: appointment and patient counts per doctor.

use anyhow::Result;

use hms::db::Database;
use hms::input;
use hms::model::AppointmentStatus;
use hms::ops::report;

pub fn cmd_status_counts(db: &mut dyn Database) -> Result<()> {
    let rs = report::status_counts_per_doctor(db)?;
    super::print_result(&rs);
    Ok(())
}

pub fn cmd_patients_with_status(db: &mut dyn Database) -> Result<()> {
    let status = input::field("Enter appointment status (PA/AV/WL/AC)", |s| {
        s.parse::<AppointmentStatus>()
    })?;
    let rs = report::patients_per_doctor_with_status(db, status)?;
    super::print_result(&rs);
    Ok(())
}
