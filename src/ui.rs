//! Centralized color and formatting helpers for terminal output.

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success/completion
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings and rejected operations
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (record IDs, column names)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Format a separator line for sections and table rules
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }

    /// Format a row count trailer for query output
    pub fn row_count(rows: usize) -> String {
        match rows {
            0 => "(no rows)".to_string(),
            1 => "(1 row)".to_string(),
            n => format!("({} rows)", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator() {
        assert_eq!(format::separator(5), "─────");
        assert_eq!(format::separator(0), "");
    }

    #[test]
    fn test_row_count() {
        assert_eq!(format::row_count(0), "(no rows)");
        assert_eq!(format::row_count(1), "(1 row)");
        assert_eq!(format::row_count(12), "(12 rows)");
    }
}
