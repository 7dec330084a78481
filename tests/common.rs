//! Common test helpers: a scripted in-memory database.

use std::collections::VecDeque;

use anyhow::{bail, Result};
use hms::db::{Database, Params, ResultSet};

/// A scripted [`Database`]: queued query results are handed out in order,
/// and every statement issued is recorded for assertions.
#[derive(Default)]
pub struct FakeDb {
    query_results: VecDeque<ResultSet>,
    pub queries: Vec<String>,
    pub executed: Vec<String>,
}

impl FakeDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result for the next `query` call.
    pub fn push_result(&mut self, rs: ResultSet) {
        self.query_results.push_back(rs);
    }

    /// Queue an empty result (no matching rows).
    pub fn push_empty(&mut self) {
        self.push_result(ResultSet::default());
    }

    /// Queue a single-cell result.
    pub fn push_scalar(&mut self, value: &str) {
        self.push_result(ResultSet::new(
            vec!["value".to_string()],
            vec![vec![value.to_string()]],
        ));
    }
}

impl Database for FakeDb {
    fn execute(&mut self, sql: &str, _params: Params) -> Result<u64> {
        self.executed.push(sql.to_string());
        Ok(1)
    }

    fn query(&mut self, sql: &str, _params: Params) -> Result<ResultSet> {
        self.queries.push(sql.to_string());
        match self.query_results.pop_front() {
            Some(rs) => Ok(rs),
            None => bail!("unexpected query: {}", sql),
        }
    }
}
