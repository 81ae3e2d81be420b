//! # Stockbook CLI
//!
//! Interactive line protocol over the shop ledger.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Stockbook CLI                                   │
//! │                                                                         │
//! │  main.rs ─────► flags, config, logging, database, then the loop        │
//! │                                                                         │
//! │  repl.rs ─────► prompt, read line, print result or "Error: ..."        │
//! │                                                                         │
//! │  command/ ────► command table, argument validation, handlers           │
//! │                                                                         │
//! │  export.rs ───► orders report as CSV                                    │
//! │                                                                         │
//! │  config.rs ───► defaults, stockbook.toml, STOCKBOOK_* variables         │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                       stockbook-db                               │  │
//! │  │  ecommerce.db (local file, WAL mode, one connection)             │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod repl;

pub use command::handlers::{execute, Flow};
pub use command::{parse_line, Command};
pub use config::AppConfig;
pub use error::{CliError, CliResult};
pub use repl::run_repl;
