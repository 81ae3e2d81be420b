//! # Command Loop
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────┐   line   ┌────────────┐  Command  ┌──────────┐          │
//! │   │  "> "    │ ───────► │ parse_line │ ────────► │ execute  │          │
//! │   │  prompt  │          └─────┬──────┘           └────┬─────┘          │
//! │   └────▲─────┘                │ Err                   │ Err            │
//! │        │                      ▼                       ▼                │
//! │        │               "Error: <message>"     "Error: <message>"       │
//! │        │                      │                       │                │
//! │        └──────────────────────┴───────────────────────┘                │
//! │                                                                         │
//! │   `exit` or end of input: close the database, return                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generic over reader and writer so tests can drive it with byte slices.

use std::io::{BufRead, Write};

use stockbook_db::Database;
use tracing::{debug, info};

use crate::command::handlers::{execute, Flow};
use crate::command::{parse_line, Command};
use crate::error::CliResult;

/// Prompt shown before each line.
pub const PROMPT: &str = "> ";

/// Reads and executes commands until `exit` or end of input.
///
/// Command failures are printed and the loop continues. Only failures to
/// read input or write output end the loop early.
pub async fn run_repl<R: BufRead, W: Write>(db: &Database, mut input: R, out: &mut W) -> CliResult<()> {
    let mut line = String::new();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("End of input");
            writeln!(out)?;
            execute(db, Command::Exit, out).await?;
            return Ok(());
        }

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                debug!(error = %err, "Rejected command line");
                writeln!(out, "Error: {err}")?;
                continue;
            }
        };

        match execute(db, command, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(err) => {
                debug!(error = %err, "Command failed");
                writeln!(out, "Error: {err}")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockbook_db::DbConfig;

    async fn session(script: &str) -> (Database, String) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut out = Vec::new();
        run_repl(&db, script.as_bytes(), &mut out).await.unwrap();
        (db, String::from_utf8(out).unwrap())
    }

    /// Output lines with leading prompts removed, empty lines dropped.
    ///
    /// Commands that print nothing leave their prompts stacked in front of
    /// the next output, so every leading prompt is stripped.
    fn printed(output: &str) -> Vec<String> {
        output
            .lines()
            .map(|mut line| {
                while let Some(rest) = line.strip_prefix(PROMPT) {
                    line = rest;
                }
                line
            })
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn test_profit_session() {
        let (_, output) = session(
            "save_product A Apple 20\n\
             purchase_product A 10 5\n\
             order_product A 2\n\
             get_product_profit A\n\
             exit\n",
        )
        .await;

        assert_eq!(printed(&output), vec!["30.0"]);
    }

    #[tokio::test]
    async fn test_weighted_average_session() {
        let (_, output) = session(
            "purchase_product A 1 10\n\
             purchase_product A 3 20\n\
             get_average_price A\n\
             get_average_price B\n\
             exit\n",
        )
        .await;

        assert_eq!(printed(&output), vec!["17.5", "None"]);
    }

    #[tokio::test]
    async fn test_errors_do_not_stop_the_loop() {
        let (_, output) = session(
            "order_product A ten\n\
             save_product A Apple\n\
             get_product_profit A\n\
             get_quantity_of_product A\n\
             exit\n",
        )
        .await;

        let lines = printed(&output);
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Error: invalid value 'ten' for quantity: expected an integer"
        );
        assert_eq!(
            lines[1],
            "Error: save_product expects 3 argument(s): save_product <id> <name> <price>; got 2"
        );
        assert_eq!(
            lines[2],
            "Error: division by zero: product A has no purchase quantity"
        );
        assert_eq!(lines[3], "0");
    }

    #[tokio::test]
    async fn test_profit_with_unpriced_orders_prints_error() {
        let (_, output) = session(
            "purchase_product X 10 5\n\
             order_product X 10\n\
             get_product_profit X\n\
             exit\n",
        )
        .await;

        assert_eq!(
            printed(&output),
            vec!["Error: missing price: product X has order rows without a price"]
        );
    }

    #[tokio::test]
    async fn test_unknown_and_blank_lines_are_silent() {
        let (_, output) = session("\n   \nrestock A 5\nexit\n").await;

        assert!(printed(&output).is_empty());
        assert_eq!(output.matches(PROMPT).count(), 4);
    }

    #[tokio::test]
    async fn test_report_commands_are_reachable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        let script = format!(
            "save_product A Apple 8\n\
             purchase_product A 10 5\n\
             order_product A 2\n\
             get_orders_report\n\
             export_orders_report {}\n\
             exit\n",
            path.display()
        );

        let (_, output) = session(&script).await;

        assert_eq!(
            printed(&output),
            vec![
                "Product ID | Product Name | Quantity | Price | COGS | Selling Price",
                "A | Apple | 2 | 8.0 | 10.0 | 16.0",
            ]
        );
        let csv = std::fs::read_to_string(&path).unwrap();
        assert!(csv.ends_with("A,Apple,2,8.0,10.0,16.0\n"));
    }

    #[tokio::test]
    async fn test_exit_stops_reading() {
        let (db, output) = session("exit\nget_fewest_product\n").await;

        assert!(printed(&output).is_empty());
        assert!(!db.health_check().await);
    }

    #[tokio::test]
    async fn test_end_of_input_closes_database() {
        let (db, output) = session("save_product A Apple 8\n").await;

        assert!(printed(&output).is_empty());
        assert!(!db.health_check().await);
    }
}
