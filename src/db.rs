//! PostgreSQL connection wrapper and result-set capture.
//!
//! Holds one live synchronous session and exposes two execution primitives:
//! a mutating `execute` and a `query` that captures every value in string
//! form. There is no retry, reconnection, pooling, or statement caching;
//! failures propagate to the caller.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use postgres::types::{ToSql, Type};
use postgres::{Client, NoTls, Row};

use crate::config::Config;
use crate::ui;

/// Statement parameters, bound server-side as `$1`, `$2`, ...
pub type Params<'a> = &'a [&'a (dyn ToSql + Sync)];

/// Execution primitives over a single live database session.
///
/// Implemented by [`HospitalDb`] for a real connection; tests substitute a
/// scripted fake.
pub trait Database {
    /// Run a mutating statement (INSERT/UPDATE/DELETE) and return the
    /// affected row count.
    fn execute(&mut self, sql: &str, params: Params) -> Result<u64>;

    /// Run a SELECT and capture the full result as a [`ResultSet`].
    fn query(&mut self, sql: &str, params: Params) -> Result<ResultSet>;
}

/// Column names plus stringified rows captured from a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultSet {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        ResultSet { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// First cell of the first row, for single-value probes.
    pub fn scalar(&self) -> Option<&str> {
        self.rows.first().and_then(|row| row.first()).map(String::as_str)
    }

    /// Render as an aligned table: bold header, rule, then rows.
    ///
    /// Widths are computed from the plain cell text before coloring is
    /// applied.
    pub fn render(&self) -> String {
        if self.columns.is_empty() {
            return String::new();
        }

        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let header = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:<width$}", c, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        let rule = ui::format::separator(header.chars().count());

        let mut out = vec![
            ui::colors::heading(&header).to_string(),
            ui::colors::secondary(&rule).to_string(),
        ];
        for row in &self.rows {
            let line = row
                .iter()
                .enumerate()
                .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
                .collect::<Vec<_>>()
                .join("  ");
            out.push(line.trim_end().to_string());
        }
        out.join("\n")
    }
}

/// The live connection to the hospital database.
pub struct HospitalDb {
    client: Client,
}

impl HospitalDb {
    /// Connect to `<host>:<port>/<dbname>` as `user`.
    ///
    /// Host, password and connect timeout come from [`Config`]; the password
    /// is empty unless configured.
    pub fn connect(config: &Config, dbname: &str, port: u16, user: &str) -> Result<Self> {
        let client = postgres::Config::new()
            .host(&config.host)
            .port(port)
            .dbname(dbname)
            .user(user)
            .password(&config.password)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect(NoTls)
            .with_context(|| {
                format!(
                    "unable to connect to database '{}' at {}:{} as '{}'",
                    dbname, config.host, port, user
                )
            })?;
        Ok(HospitalDb { client })
    }
}

impl Database for HospitalDb {
    fn execute(&mut self, sql: &str, params: Params) -> Result<u64> {
        self.client
            .execute(sql, params)
            .with_context(|| format!("statement failed: {}", sql))
    }

    fn query(&mut self, sql: &str, params: Params) -> Result<ResultSet> {
        // Prepare first so column metadata is available even for empty results.
        let stmt = self
            .client
            .prepare(sql)
            .with_context(|| format!("could not prepare query: {}", sql))?;
        let columns: Vec<String> = stmt.columns().iter().map(|c| c.name().to_string()).collect();

        let rows = self
            .client
            .query(&stmt, params)
            .with_context(|| format!("query failed: {}", sql))?;

        let mut captured = Vec::with_capacity(rows.len());
        for row in &rows {
            captured.push(stringify_row(row)?);
        }
        Ok(ResultSet::new(columns, captured))
    }
}

fn stringify_row(row: &Row) -> Result<Vec<String>> {
    let mut cells = Vec::with_capacity(row.len());
    for idx in 0..row.len() {
        cells.push(stringify_cell(row, idx)?);
    }
    Ok(cells)
}

/// Convert one column value to its display string; NULL becomes "".
fn stringify_cell(row: &Row, idx: usize) -> Result<String> {
    let column = &row.columns()[idx];
    let ty = column.type_();

    fn show<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    let cell = if *ty == Type::INT2 {
        show(row.try_get::<_, Option<i16>>(idx)?)
    } else if *ty == Type::INT4 {
        show(row.try_get::<_, Option<i32>>(idx)?)
    } else if *ty == Type::INT8 {
        show(row.try_get::<_, Option<i64>>(idx)?)
    } else if *ty == Type::FLOAT4 {
        show(row.try_get::<_, Option<f32>>(idx)?)
    } else if *ty == Type::FLOAT8 {
        show(row.try_get::<_, Option<f64>>(idx)?)
    } else if *ty == Type::BOOL {
        show(row.try_get::<_, Option<bool>>(idx)?)
    } else if *ty == Type::DATE {
        show(row.try_get::<_, Option<NaiveDate>>(idx)?)
    } else if *ty == Type::TIME {
        show(row.try_get::<_, Option<NaiveTime>>(idx)?)
    } else if *ty == Type::TIMESTAMP {
        show(row.try_get::<_, Option<NaiveDateTime>>(idx)?)
    } else if *ty == Type::TIMESTAMPTZ {
        show(row.try_get::<_, Option<DateTime<Utc>>>(idx)?)
    } else if *ty == Type::BPCHAR {
        // CHAR(n) values come back space-padded.
        show(row.try_get::<_, Option<String>>(idx)?)
            .trim_end()
            .to_string()
    } else if *ty == Type::VARCHAR || *ty == Type::TEXT || *ty == Type::NAME {
        show(row.try_get::<_, Option<String>>(idx)?)
    } else {
        bail!(
            "unsupported column type '{}' for column '{}'",
            ty,
            column.name()
        );
    };
    Ok(cell)
}
