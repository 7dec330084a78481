//! Listing handlers: a doctor's schedule and a department's open slots.

use anyhow::Result;

use hms::db::Database;
use hms::input;
use hms::model;
use hms::ops::list;
use hms::ui;

pub fn cmd_doctor_appointments(db: &mut dyn Database) -> Result<()> {
    let (doctor_id, from, to) = loop {
        let doctor_id = input::id("Enter doctor ID")?;
        let from = input::field("Enter start date (yyyy-mm-dd or mm/dd/yyyy)", model::parse_date)?;
        let to = input::field("Enter end date (yyyy-mm-dd or mm/dd/yyyy)", model::parse_date)?;
        if to < from {
            println!(
                "{}",
                ui::colors::warning("The end date lies before the start date; try again.")
            );
            continue;
        }
        println!(
            "\nDoctor ID: {}\nDate range: {} to {}\n",
            doctor_id, from, to
        );
        if input::confirm("Is this correct?")? {
            break (doctor_id, from, to);
        }
    };

    let rs = list::doctor_appointments(db, doctor_id, from, to)?;
    super::print_result(&rs);
    Ok(())
}

pub fn cmd_department_available(db: &mut dyn Database) -> Result<()> {
    let (department, on) = loop {
        let department = input::text("Enter department name", model::DEPT_NAME_LIMIT)?;
        let on = input::field("Enter date (yyyy-mm-dd or mm/dd/yyyy)", model::parse_date)?;
        println!("\nDepartment: {}\nDate: {}\n", department, on);
        if input::confirm("Is this correct?")? {
            break (department, on);
        }
    };

    let rs = list::department_available(db, &department, on)?;
    super::print_result(&rs);
    Ok(())
}
