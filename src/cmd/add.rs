//! Add-record handlers: prompt, echo, confirm, duplicate-check, insert.

use anyhow::Result;

use hms::db::Database;
use hms::input;
use hms::model::{self, Appointment, AppointmentStatus, Doctor, Gender, Patient, TimeSlot};
use hms::ops::add::{self, AddOutcome};
use hms::ui;

pub fn cmd_add_doctor(db: &mut dyn Database) -> Result<()> {
    let doctor = loop {
        let doctor = Doctor {
            doctor_id: input::id("Enter doctor ID")?,
            name: input::text("Enter doctor's name", model::NAME_LIMIT)?,
            specialty: input::text("Enter doctor's specialty", model::NAME_LIMIT)?,
            department_id: input::id("Enter department ID")?,
        };
        println!("\n{}\n", doctor);
        if input::confirm("Is this correct?")? {
            break doctor;
        }
    };

    match add::add_doctor(db, &doctor)? {
        AddOutcome::Inserted => println!("{}", ui::colors::success("Doctor added.")),
        AddOutcome::DuplicateId => println!(
            "{}",
            ui::colors::warning(&format!(
                "A doctor with ID {} already exists; nothing was added.",
                doctor.doctor_id
            ))
        ),
    }
    Ok(())
}

pub fn cmd_add_patient(db: &mut dyn Database) -> Result<()> {
    let patient = loop {
        let patient = Patient {
            patient_id: input::id("Enter patient ID")?,
            name: input::text("Enter patient's name", model::NAME_LIMIT)?,
            gender: input::field("Enter patient's gender (M/F)", |s| s.parse::<Gender>())?,
            age: input::id("Enter patient's age")?,
            address: input::text("Enter patient's address", model::ADDRESS_LIMIT)?,
            appointment_count: input::id("Enter number of appointments for patient")?,
        };
        println!("\n{}\n", patient);
        if input::confirm("Is this correct?")? {
            break patient;
        }
    };

    match add::add_patient(db, &patient)? {
        AddOutcome::Inserted => println!("{}", ui::colors::success("Patient added.")),
        AddOutcome::DuplicateId => println!(
            "{}",
            ui::colors::warning(&format!(
                "A patient with ID {} already exists; nothing was added.",
                patient.patient_id
            ))
        ),
    }
    Ok(())
}

pub fn cmd_add_appointment(db: &mut dyn Database) -> Result<()> {
    let appointment = loop {
        let appointment = Appointment {
            appnt_id: input::id("Enter appointment ID")?,
            adate: input::field("Enter date (yyyy-mm-dd or mm/dd/yyyy)", model::parse_date)?,
            time_slot: input::field("Enter time slot (hh:mm-hh:mm)", TimeSlot::parse)?,
            status: input::field("Enter appointment status (PA/AV/WL/AC)", |s| {
                s.parse::<AppointmentStatus>()
            })?,
        };
        println!("\n{}\n", appointment);
        if input::confirm("Is this correct?")? {
            break appointment;
        }
    };

    match add::add_appointment(db, &appointment)? {
        AddOutcome::Inserted => println!("{}", ui::colors::success("Appointment added.")),
        AddOutcome::DuplicateId => println!(
            "{}",
            ui::colors::warning(&format!(
                "An appointment with ID {} already exists; nothing was added.",
                appointment.appnt_id
            ))
        ),
    }
    Ok(())
}
