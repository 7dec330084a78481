//! Interactive menu handlers for the hospital console.
//!
//! Each handler prompts for its fields, echoes the assembled record, asks for
//! confirmation, then calls the matching operation and reports its outcome.

pub mod add;
pub mod book;
pub mod list;
pub mod report;

use hms::db::ResultSet;
use hms::ui;

/// Print a captured result set with a dimmed row-count trailer.
pub fn print_result(rs: &ResultSet) {
    if rs.is_empty() {
        println!("{}", ui::colors::secondary("(no rows)"));
        return;
    }
    println!("{}", rs.render());
    println!("{}", ui::colors::secondary(&ui::format::row_count(rs.len())));
}
