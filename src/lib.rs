//! # hms - hospital management console
//!
//! An interactive menu over a hospital's PostgreSQL schema: doctors,
//! patients, appointment slots and the doctor-slot association. The binary
//! connects to a local server, reads record fields with validation, and
//! issues single SQL statements whose results print as aligned tables.
//!
//! ## Modules
//!
//! - [`db`] - connection wrapper, execution primitives and result capture
//! - [`model`] - domain records and field validation
//! - [`input`] - read-until-valid prompt primitives
//! - [`ops`] - one function per menu operation
//! - [`config`] - optional connection settings (`hms.yaml`, env overrides)
//! - [`ui`] - color and formatting helpers
//!
//! ## Example
//!
//! ```no_run
//! use hms::config::Config;
//! use hms::db::{Database, HospitalDb};
//! use hms::ops::report;
//!
//! let config = Config::load().expect("config");
//! let mut db = HospitalDb::connect(&config, "hospital", 5432, "postgres")
//!     .expect("connect");
//! let counts = report::status_counts_per_doctor(&mut db).expect("query");
//! println!("{}", counts.render());
//! ```

pub mod config;
pub mod db;
pub mod input;
pub mod model;
pub mod ops;
pub mod ui;
