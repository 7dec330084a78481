//! CLI entry point: argument parsing, the main menu loop, and dispatch.

mod cmd;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io::Write;

use hms::config::Config;
use hms::db::{Database, HospitalDb};
use hms::{input, ui};

#[derive(Parser)]
#[command(name = "hms")]
#[command(version)]
#[command(about = "Interactive hospital management console for PostgreSQL", long_about = None)]
struct Cli {
    /// Name of the database to connect to
    dbname: String,
    /// Port the database server listens on
    port: u16,
    /// Database user (empty password unless configured in hms.yaml)
    user: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {:#}", "Error:".red(), err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    ctrlc::set_handler(|| {
        eprintln!("\nInterrupted.");
        std::process::exit(130);
    })?;

    let config = Config::load()?;
    print!(
        "Connecting to database '{}' at {}:{}... ",
        cli.dbname, config.host, cli.port
    );
    std::io::stdout().flush()?;

    let mut db = match HospitalDb::connect(&config, &cli.dbname, cli.port, &cli.user) {
        Ok(db) => {
            println!("{}", "done".green());
            db
        }
        Err(err) => {
            println!("{}", "failed".red());
            eprintln!(
                "{}",
                ui::colors::warning("Make sure the database server is running on this machine.")
            );
            return Err(err);
        }
    };

    menu_loop(&mut db)?;

    println!("\nDisconnecting from database... done");
    println!("Bye!");
    Ok(())
}

fn menu_loop(db: &mut dyn Database) -> Result<()> {
    loop {
        print_menu();
        match input::menu_choice(9)? {
            1 => cmd::add::cmd_add_doctor(db)?,
            2 => cmd::add::cmd_add_patient(db)?,
            3 => cmd::add::cmd_add_appointment(db)?,
            4 => cmd::book::cmd_make_appointment(db)?,
            5 => cmd::list::cmd_doctor_appointments(db)?,
            6 => cmd::list::cmd_department_available(db)?,
            7 => cmd::report::cmd_status_counts(db)?,
            8 => cmd::report::cmd_patients_with_status(db)?,
            _ => break,
        }
    }
    Ok(())
}

fn print_menu() {
    println!();
    println!("{}", "MAIN MENU".bold());
    println!("{}", ui::colors::secondary(&ui::format::separator(9)));
    println!("1. Add doctor");
    println!("2. Add patient");
    println!("3. Add appointment");
    println!("4. Make an appointment");
    println!("5. List appointments of a doctor");
    println!("6. List available appointments of a department");
    println!("7. Appointment counts per doctor and status");
    println!("8. Patient counts per doctor for a status");
    println!("9. Exit");
}
