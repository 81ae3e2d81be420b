//! # Command Handlers
//!
//! Runs a validated [`Command`] against the database and writes its output.
//!
//! Mutations print nothing on success. Queries print one value per line.

use std::io::Write;

use stockbook_core::Product;
use stockbook_db::Database;
use tracing::{debug, info};

use super::{Command, COMMANDS};
use crate::error::CliResult;
use crate::export;
use crate::format;

/// What the command loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Executes one command.
///
/// ## Returns
/// * `Ok(Flow::Exit)` - After `exit`, with the database closed
/// * `Ok(Flow::Continue)` - Any other command
/// * `Err(CliError)` - The command failed; nothing was printed
pub async fn execute<W: Write>(db: &Database, command: Command, out: &mut W) -> CliResult<Flow> {
    debug!(?command, "Executing command");

    match command {
        Command::SaveProduct { id, name, price } => {
            db.products().save(&Product::new(id, name, price)).await?;
        }

        Command::PurchaseProduct {
            id,
            quantity,
            price,
        } => {
            db.transactions()
                .record_purchase(&id, quantity, price)
                .await?;
        }

        Command::OrderProduct { id, quantity } => {
            db.transactions().record_order(&id, quantity).await?;
        }

        Command::GetQuantityOfProduct { id } => {
            let quantity = db.reports().quantity_of_product(&id).await?;
            writeln!(out, "{quantity}")?;
        }

        Command::GetAveragePrice { id } => {
            let average = db.reports().average_price(&id).await?;
            writeln!(out, "{}", format::optional_float(average))?;
        }

        Command::GetProductProfit { id } => {
            let profit = db.reports().product_profit(&id).await?;
            writeln!(out, "{}", format::float(profit))?;
        }

        Command::GetFewestProduct => {
            let name = db.reports().fewest_product().await?;
            writeln!(out, "{}", format::optional_text(name.as_deref()))?;
        }

        Command::GetMostPopularProduct => {
            let name = db.reports().most_popular_product().await?;
            writeln!(out, "{}", format::optional_text(name.as_deref()))?;
        }

        Command::GetOrdersReport => {
            let rows = db.reports().orders_report().await?;
            writeln!(out, "{}", format::orders_header())?;
            for row in &rows {
                writeln!(out, "{}", format::orders_row(row))?;
            }
        }

        Command::ExportOrdersReport { path } => {
            let written = export::export_orders_report(db, &path).await?;
            info!(path = %path.display(), rows = written, "Exported orders report");
        }

        Command::Help => {
            for spec in COMMANDS {
                writeln!(out, "{:<40} {}", spec.usage(), spec.summary)?;
            }
        }

        Command::Exit => {
            db.close().await;
            return Ok(Flow::Exit);
        }
    }

    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockbook_db::{DbConfig, DbError};

    use crate::command::parse_line;
    use crate::error::CliError;

    async fn setup_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn run(db: &Database, line: &str) -> CliResult<String> {
        let command = parse_line(line)?.expect("known command");
        let mut out = Vec::new();
        execute(db, command, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_mutations_print_nothing() {
        let db = setup_db().await;

        assert_eq!(run(&db, "save_product A Apple 8").await.unwrap(), "");
        assert_eq!(run(&db, "purchase_product A 10 5").await.unwrap(), "");
        assert_eq!(run(&db, "order_product A 2").await.unwrap(), "");

        assert_eq!(db.transactions().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_queries_print_values() {
        let db = setup_db().await;
        run(&db, "save_product A Apple 20").await.unwrap();
        run(&db, "purchase_product A 1 10").await.unwrap();
        run(&db, "purchase_product A 1 20").await.unwrap();
        run(&db, "order_product A 1").await.unwrap();

        assert_eq!(run(&db, "get_quantity_of_product A").await.unwrap(), "1\n");
        assert_eq!(run(&db, "get_average_price A").await.unwrap(), "15.0\n");
        assert_eq!(run(&db, "get_product_profit A").await.unwrap(), "5.0\n");
        assert_eq!(run(&db, "get_fewest_product").await.unwrap(), "Apple\n");
        assert_eq!(
            run(&db, "get_most_popular_product").await.unwrap(),
            "Apple\n"
        );
    }

    #[tokio::test]
    async fn test_empty_queries_print_none() {
        let db = setup_db().await;

        assert_eq!(run(&db, "get_quantity_of_product X").await.unwrap(), "0\n");
        assert_eq!(run(&db, "get_average_price X").await.unwrap(), "None\n");
        assert_eq!(run(&db, "get_fewest_product").await.unwrap(), "None\n");
        assert_eq!(
            run(&db, "get_most_popular_product").await.unwrap(),
            "None\n"
        );
    }

    #[tokio::test]
    async fn test_profit_without_orders_fails() {
        let db = setup_db().await;
        run(&db, "save_product A Apple 8").await.unwrap();
        run(&db, "purchase_product A 10 5").await.unwrap();

        let err = run(&db, "get_product_profit A").await.unwrap_err();
        assert!(matches!(err, CliError::Db(DbError::Ledger(_))));
    }

    #[tokio::test]
    async fn test_orders_report_table() {
        let db = setup_db().await;
        run(&db, "save_product A Apple 8").await.unwrap();
        run(&db, "purchase_product A 10 5").await.unwrap();
        run(&db, "order_product A 2").await.unwrap();

        let output = run(&db, "get_orders_report").await.unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Product ID | Product Name | Quantity | Price | COGS | Selling Price",
                "A | Apple | 2 | 8.0 | 10.0 | 16.0",
            ]
        );
    }

    #[tokio::test]
    async fn test_help_lists_every_command() {
        let db = setup_db().await;

        let output = run(&db, "help").await.unwrap();

        assert_eq!(output.lines().count(), COMMANDS.len());
        assert!(output.contains("export_orders_report <path>"));
    }

    #[tokio::test]
    async fn test_exit_closes_database() {
        let db = setup_db().await;

        let flow = execute(&db, Command::Exit, &mut Vec::new()).await.unwrap();

        assert_eq!(flow, Flow::Exit);
        assert!(!db.health_check().await);
    }
}
