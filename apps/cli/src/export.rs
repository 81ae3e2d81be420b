//! # Orders Report Export
//!
//! Writes the orders report as CSV.
//!
//! ```text
//! Product ID,Product Name,Quantity,Price,COGS,Selling Price
//! A,Apple,2,8.0,10.0,16.0
//! B,Banana,1,,,          <- absent values are empty fields
//! ```
//!
//! The header is always written, so an empty ledger still produces a
//! one-line file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use stockbook_core::OrderReportRow;
use stockbook_db::Database;
use tracing::debug;

use crate::error::CliResult;

/// Serializes `rows` under the fixed header.
///
/// Returns the number of data rows written.
pub fn write_orders_csv<W: Write>(rows: &[OrderReportRow], out: W) -> CliResult<usize> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);

    writer.write_record(OrderReportRow::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(rows.len())
}

/// Builds the orders report and writes it to `path`, replacing any
/// existing file.
///
/// ## Errors
/// `CliError::Io` when the file cannot be created.
pub async fn export_orders_report(db: &Database, path: &Path) -> CliResult<usize> {
    let rows = db.reports().orders_report().await?;
    debug!(path = %path.display(), rows = rows.len(), "Writing orders CSV");

    let file = File::create(path)?;
    write_orders_csv(&rows, file)
}
