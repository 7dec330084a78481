//! Make-appointment handler: book a patient into a doctor's slot.

use anyhow::Result;

use hms::db::Database;
use hms::input;
use hms::ops::book::{self, BookOutcome};
use hms::ui;

pub fn cmd_make_appointment(db: &mut dyn Database) -> Result<()> {
    let (patient_id, doctor_id, appnt_id) = loop {
        let patient_id = input::id("Enter patient ID")?;
        let doctor_id = input::id("Enter doctor ID")?;
        let appnt_id = input::id("Enter appointment ID")?;
        println!(
            "\nPatient ID: {}\nDoctor ID: {}\nAppointment ID: {}\n",
            patient_id, doctor_id, appnt_id
        );
        if input::confirm("Is this correct?")? {
            break (patient_id, doctor_id, appnt_id);
        }
    };

    match book::make_appointment(db, patient_id, doctor_id, appnt_id)? {
        BookOutcome::Booked => println!(
            "{}",
            ui::colors::success("Appointment booked; the slot is now active.")
        ),
        BookOutcome::Waitlisted => println!(
            "{}",
            ui::colors::warning("The slot is already taken; the patient joins the waitlist.")
        ),
        BookOutcome::PatientNotFound => println!(
            "{}",
            ui::colors::warning(&format!("No patient with ID {}.", patient_id))
        ),
        BookOutcome::AppointmentNotFound => println!(
            "{}",
            ui::colors::warning(&format!("No appointment with ID {}.", appnt_id))
        ),
        BookOutcome::WrongDoctor => println!(
            "{}",
            ui::colors::warning(&format!(
                "Appointment {} is not offered by doctor {}.",
                appnt_id, doctor_id
            ))
        ),
        BookOutcome::PastAppointment => println!(
            "{}",
            ui::colors::warning("That appointment date has passed; it cannot be booked.")
        ),
    }
    Ok(())
}
