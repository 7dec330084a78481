//! Domain records and field validation for the hospital schema.
//!
//! Every parser here runs before any SQL statement is constructed, so a
//! malformed field can never reach the database layer.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use anyhow::{bail, Result};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

/// Maximum length for doctor and patient names, and specialties.
pub const NAME_LIMIT: usize = 128;
/// Maximum length for patient addresses.
pub const ADDRESS_LIMIT: usize = 256;
/// Maximum length for department names.
pub const DEPT_NAME_LIMIT: usize = 32;

/// Appointment lifecycle codes as stored in `appointment.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    /// `PA` - the slot's date has passed.
    Past,
    /// `AV` - open slot, nobody booked.
    Available,
    /// `WL` - booked slot with an overflow waitlist.
    Waitlisted,
    /// `AC` - booked and confirmed.
    Active,
}

impl AppointmentStatus {
    /// The two-letter code stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Past => "PA",
            AppointmentStatus::Available => "AV",
            AppointmentStatus::Waitlisted => "WL",
            AppointmentStatus::Active => "AC",
        }
    }

    /// Human-readable label for echoing records back to the user.
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Past => "past",
            AppointmentStatus::Available => "available",
            AppointmentStatus::Waitlisted => "waitlisted",
            AppointmentStatus::Active => "active",
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "PA" => Ok(AppointmentStatus::Past),
            "AV" => Ok(AppointmentStatus::Available),
            "WL" => Ok(AppointmentStatus::Waitlisted),
            "AC" => Ok(AppointmentStatus::Active),
            other => bail!(
                "unknown appointment status '{}' (expected PA, AV, WL or AC)",
                other
            ),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Patient gender as stored in `patient.gender`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl FromStr for Gender {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            other => bail!("unknown gender '{}' (expected M or F)", other),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An appointment time window in `hh:mm-hh:mm` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    start: NaiveTime,
    end: NaiveTime,
}

fn time_slot_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{2}:\d{2})-(\d{2}:\d{2})$").unwrap())
}

impl TimeSlot {
    /// Parse a `hh:mm-hh:mm` window. The start must lie before the end.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let caps = match time_slot_re().captures(s) {
            Some(caps) => caps,
            None => bail!("time slot '{}' is not in hh:mm-hh:mm form", s),
        };
        let start = NaiveTime::parse_from_str(&caps[1], "%H:%M")
            .map_err(|_| anyhow::anyhow!("'{}' is not a valid time of day", &caps[1]))?;
        let end = NaiveTime::parse_from_str(&caps[2], "%H:%M")
            .map_err(|_| anyhow::anyhow!("'{}' is not a valid time of day", &caps[2]))?;
        if start >= end {
            bail!("time slot must start before it ends");
        }
        Ok(TimeSlot { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Parse a calendar date, accepting ISO `yyyy-mm-dd` or US `mm/dd/yyyy`.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .map_err(|_| anyhow::anyhow!("'{}' is not a valid date (use yyyy-mm-dd or mm/dd/yyyy)", s))
}

/// Validate a free-text field: non-empty after trimming and within `limit`
/// characters.
pub fn validate_text(s: &str, limit: usize) -> Result<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        bail!("value must not be empty");
    }
    if trimmed.chars().count() > limit {
        bail!("value must be at most {} characters", limit);
    }
    Ok(trimmed.to_string())
}

/// A doctor row. `department_id` references `department.dept_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    pub doctor_id: i32,
    pub name: String,
    pub specialty: String,
    pub department_id: i32,
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Doctor ID: {}\nName: {}\nSpecialty: {}\nDepartment ID: {}",
            self.doctor_id, self.name, self.specialty, self.department_id
        )
    }
}

/// A patient row. `appointment_count` is bumped by make-appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub patient_id: i32,
    pub name: String,
    pub gender: Gender,
    pub age: i32,
    pub address: String,
    pub appointment_count: i32,
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient ID: {}\nName: {}\nGender: {}\nAge: {}\nAddress: {}\nAppointments: {}",
            self.patient_id,
            self.name,
            self.gender,
            self.age,
            self.address,
            self.appointment_count
        )
    }
}

/// An appointment slot row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub appnt_id: i32,
    pub adate: NaiveDate,
    pub time_slot: TimeSlot,
    pub status: AppointmentStatus,
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Appointment ID: {}\nDate: {}\nTime slot: {}\nStatus: {} ({})",
            self.appnt_id,
            self.adate,
            self.time_slot,
            self.status,
            self.status.label()
        )
    }
}
