//! # CLI Error Type
//!
//! Everything a command can fail with. The REPL prints these as
//! `Error: <message>` and keeps reading.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Source                         Variant                                 │
//! │  ─────────────────────────────  ──────────────────────────────────────  │
//! │  wrong number of tokens         CliError::Arity                         │
//! │  "abc" where a number is due    CliError::InvalidArgument               │
//! │  profit without history         CliError::Db(DbError::Ledger(..))       │
//! │  SQLite failure                 CliError::Db(..)                        │
//! │  unwritable export path         CliError::Io                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockbook_db::DbError;
use thiserror::Error;

/// Errors raised while parsing or executing a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Wrong number of arguments for a known command.
    #[error("{command} expects {expected} argument(s): {usage}; got {got}")]
    Arity {
        command: &'static str,
        expected: usize,
        got: usize,
        usage: String,
    },

    /// A token could not be coerced to the parameter's type.
    #[error("invalid value '{value}' for {param}: expected {expected}")]
    InvalidArgument {
        param: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Storage or ledger arithmetic failed.
    #[error(transparent)]
    Db(#[from] DbError),

    /// Reading input, writing output or writing the export file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CliError::Arity {
            command: "order_product",
            expected: 2,
            got: 1,
            usage: "order_product <id> <quantity>".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "order_product expects 2 argument(s): order_product <id> <quantity>; got 1"
        );

        let err = CliError::InvalidArgument {
            param: "quantity",
            value: "ten".to_string(),
            expected: "an integer",
        };
        assert_eq!(
            err.to_string(),
            "invalid value 'ten' for quantity: expected an integer"
        );
    }

    #[test]
    fn test_db_error_is_transparent() {
        let err: CliError = DbError::not_found("Product", "A").into();
        assert_eq!(err.to_string(), "Product not found: A");
    }
}
