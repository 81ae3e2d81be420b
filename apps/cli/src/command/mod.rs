//! # Command Table
//!
//! Every REPL command is described once, in [`COMMANDS`]: its name, its
//! typed parameters, and how to build a [`Command`] from validated values.
//!
//! ## Parse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "purchase_product A 10 5.5"                                            │
//! │       │ split_whitespace                                                │
//! │       ▼                                                                 │
//! │  ["purchase_product", "A", "10", "5.5"]                                 │
//! │       │ lookup first token in COMMANDS                                  │
//! │       ▼                                                                 │
//! │  CommandSpec { params: [id: Text, quantity: Integer, price: Real] }     │
//! │       │ check arity, coerce each token          ──► CliError on failure │
//! │       ▼                                                                 │
//! │  Args [Text("A"), Integer(10), Real(5.5)]                               │
//! │       │ spec.build                                                      │
//! │       ▼                                                                 │
//! │  Command::PurchaseProduct { id: "A", quantity: 10, price: 5.5 }         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing executes until the whole line has been validated.

pub mod handlers;

use std::path::PathBuf;

use tracing::debug;

use crate::error::{CliError, CliResult};

// =============================================================================
// Parameters
// =============================================================================

/// Type a parameter token is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    Integer,
    Real,
    Path,
}

impl ParamKind {
    fn expected(&self) -> &'static str {
        match self {
            ParamKind::Text => "text",
            ParamKind::Integer => "an integer",
            ParamKind::Real => "a number",
            ParamKind::Path => "a file path",
        }
    }
}

/// A named, typed positional parameter.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
}

const fn param(name: &'static str, kind: ParamKind) -> Param {
    Param { name, kind }
}

/// A coerced argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Text(String),
    Integer(i64),
    Real(f64),
    Path(PathBuf),
}

impl Param {
    fn coerce(&self, token: &str) -> CliResult<Arg> {
        let invalid = || CliError::InvalidArgument {
            param: self.name,
            value: token.to_string(),
            expected: self.kind.expected(),
        };

        match self.kind {
            ParamKind::Text => Ok(Arg::Text(token.to_string())),
            ParamKind::Integer => token.parse().map(Arg::Integer).map_err(|_| invalid()),
            ParamKind::Real => token.parse().map(Arg::Real).map_err(|_| invalid()),
            ParamKind::Path => Ok(Arg::Path(PathBuf::from(token))),
        }
    }
}

/// Arguments of one command, already checked against its parameter list.
#[derive(Debug)]
pub struct Args<'a> {
    params: &'static [Param],
    values: &'a [Arg],
}

impl Args<'_> {
    fn get(&self, index: usize) -> CliResult<&Arg> {
        self.values.get(index).ok_or_else(|| CliError::InvalidArgument {
            param: self.params.get(index).map(|p| p.name).unwrap_or("argument"),
            value: String::new(),
            expected: "a value",
        })
    }

    fn mismatch(&self, index: usize, arg: &Arg) -> CliError {
        let param = self.params.get(index);
        CliError::InvalidArgument {
            param: param.map(|p| p.name).unwrap_or("argument"),
            value: format!("{arg:?}"),
            expected: param.map(|p| p.kind.expected()).unwrap_or("a value"),
        }
    }

    pub fn text(&self, index: usize) -> CliResult<String> {
        match self.get(index)? {
            Arg::Text(value) => Ok(value.clone()),
            other => Err(self.mismatch(index, other)),
        }
    }

    pub fn integer(&self, index: usize) -> CliResult<i64> {
        match self.get(index)? {
            Arg::Integer(value) => Ok(*value),
            other => Err(self.mismatch(index, other)),
        }
    }

    pub fn real(&self, index: usize) -> CliResult<f64> {
        match self.get(index)? {
            Arg::Real(value) => Ok(*value),
            other => Err(self.mismatch(index, other)),
        }
    }

    pub fn path(&self, index: usize) -> CliResult<PathBuf> {
        match self.get(index)? {
            Arg::Path(value) => Ok(value.clone()),
            other => Err(self.mismatch(index, other)),
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// A fully validated command, ready to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SaveProduct { id: String, name: String, price: f64 },
    PurchaseProduct { id: String, quantity: i64, price: f64 },
    OrderProduct { id: String, quantity: i64 },
    GetQuantityOfProduct { id: String },
    GetAveragePrice { id: String },
    GetProductProfit { id: String },
    GetFewestProduct,
    GetMostPopularProduct,
    GetOrdersReport,
    ExportOrdersReport { path: PathBuf },
    Help,
    Exit,
}

/// Descriptor of one REPL command.
pub struct CommandSpec {
    pub name: &'static str,
    pub params: &'static [Param],
    pub summary: &'static str,
    build: fn(&Args<'_>) -> CliResult<Command>,
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl CommandSpec {
    /// `name <param> <param>` as shown by `help` and arity errors.
    pub fn usage(&self) -> String {
        let mut usage = self.name.to_string();
        for param in self.params {
            usage.push_str(&format!(" <{}>", param.name));
        }
        usage
    }

    /// Validates `tokens` (everything after the command name) and builds
    /// the command.
    pub fn parse(&self, tokens: &[&str]) -> CliResult<Command> {
        if tokens.len() != self.params.len() {
            return Err(CliError::Arity {
                command: self.name,
                expected: self.params.len(),
                got: tokens.len(),
                usage: self.usage(),
            });
        }

        let values = self
            .params
            .iter()
            .zip(tokens)
            .map(|(param, token)| param.coerce(token))
            .collect::<CliResult<Vec<Arg>>>()?;

        (self.build)(&Args {
            params: self.params,
            values: &values,
        })
    }
}

use ParamKind::{Integer, Path, Real, Text};

/// The command table.
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "save_product",
        params: &[param("id", Text), param("name", Text), param("price", Real)],
        summary: "Create or replace a catalog entry",
        build: |args| {
            Ok(Command::SaveProduct {
                id: args.text(0)?,
                name: args.text(1)?,
                price: args.real(2)?,
            })
        },
    },
    CommandSpec {
        name: "purchase_product",
        params: &[
            param("id", Text),
            param("quantity", Integer),
            param("price", Real),
        ],
        summary: "Record stock bought at a unit price",
        build: |args| {
            Ok(Command::PurchaseProduct {
                id: args.text(0)?,
                quantity: args.integer(1)?,
                price: args.real(2)?,
            })
        },
    },
    CommandSpec {
        name: "order_product",
        params: &[param("id", Text), param("quantity", Integer)],
        summary: "Record a sale at the current catalog price",
        build: |args| {
            Ok(Command::OrderProduct {
                id: args.text(0)?,
                quantity: args.integer(1)?,
            })
        },
    },
    CommandSpec {
        name: "get_quantity_of_product",
        params: &[param("id", Text)],
        summary: "Print units purchased minus units ordered",
        build: |args| Ok(Command::GetQuantityOfProduct { id: args.text(0)? }),
    },
    CommandSpec {
        name: "get_average_price",
        params: &[param("id", Text)],
        summary: "Print the quantity-weighted average purchase price",
        build: |args| Ok(Command::GetAveragePrice { id: args.text(0)? }),
    },
    CommandSpec {
        name: "get_product_profit",
        params: &[param("id", Text)],
        summary: "Print total profit over all orders",
        build: |args| Ok(Command::GetProductProfit { id: args.text(0)? }),
    },
    CommandSpec {
        name: "get_fewest_product",
        params: &[],
        summary: "Print the product with the least stock left (oversold skipped)",
        build: |_| Ok(Command::GetFewestProduct),
    },
    CommandSpec {
        name: "get_most_popular_product",
        params: &[],
        summary: "Print the product ordered most often",
        build: |_| Ok(Command::GetMostPopularProduct),
    },
    CommandSpec {
        name: "get_orders_report",
        params: &[],
        summary: "Print every order with COGS and selling price",
        build: |_| Ok(Command::GetOrdersReport),
    },
    CommandSpec {
        name: "export_orders_report",
        params: &[param("path", Path)],
        summary: "Write the orders report as CSV",
        build: |args| Ok(Command::ExportOrdersReport { path: args.path(0)? }),
    },
    CommandSpec {
        name: "help",
        params: &[],
        summary: "List commands",
        build: |_| Ok(Command::Help),
    },
    CommandSpec {
        name: "exit",
        params: &[],
        summary: "Close the database and quit",
        build: |_| Ok(Command::Exit),
    },
];

/// Looks up a command by name.
pub fn find(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// Parses one input line.
///
/// ## Returns
/// * `Ok(Some(command))` - Known command with valid arguments
/// * `Ok(None)` - Blank line or unknown command (ignored)
/// * `Err(CliError)` - Known command with bad arguments
pub fn parse_line(line: &str) -> CliResult<Option<Command>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((name, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    match find(name) {
        Some(spec) => spec.parse(rest).map(Some),
        None => {
            debug!(command = %name, "Ignoring unknown command");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_save_product() {
        let command = parse_line("save_product A Apple 1.5").unwrap();
        assert_eq!(
            command,
            Some(Command::SaveProduct {
                id: "A".to_string(),
                name: "Apple".to_string(),
                price: 1.5,
            })
        );
    }

    #[test]
    fn test_parse_coerces_integer_price() {
        let command = parse_line("purchase_product A 10 5").unwrap();
        assert_eq!(
            command,
            Some(Command::PurchaseProduct {
                id: "A".to_string(),
                quantity: 10,
                price: 5.0,
            })
        );
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let command = parse_line("   order_product \t A   3  \n").unwrap();
        assert_eq!(
            command,
            Some(Command::OrderProduct {
                id: "A".to_string(),
                quantity: 3,
            })
        );
    }

    #[test]
    fn test_parse_reports_bad_integer() {
        let err = parse_line("order_product A three").unwrap_err();
        assert!(matches!(
            err,
            CliError::InvalidArgument {
                param: "quantity",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_fractional_quantity() {
        assert!(parse_line("purchase_product A 1.5 2").is_err());
    }

    #[test]
    fn test_parse_reports_bad_price() {
        let err = parse_line("save_product A Apple cheap").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value 'cheap' for price: expected a number"
        );
    }

    #[test]
    fn test_parse_checks_arity() {
        let err = parse_line("save_product A Apple").unwrap_err();
        assert!(matches!(
            err,
            CliError::Arity {
                expected: 3,
                got: 2,
                ..
            }
        ));

        assert!(parse_line("get_fewest_product now").is_err());
    }

    #[test]
    fn test_parse_report_commands() {
        assert_eq!(
            parse_line("get_orders_report").unwrap(),
            Some(Command::GetOrdersReport)
        );
        assert_eq!(
            parse_line("export_orders_report out/orders.csv").unwrap(),
            Some(Command::ExportOrdersReport {
                path: PathBuf::from("out/orders.csv"),
            })
        );
    }

    #[test]
    fn test_parse_ignores_blank_and_unknown() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   \n").unwrap(), None);
        assert_eq!(parse_line("restock everything").unwrap(), None);
    }

    #[test]
    fn test_usage() {
        let spec = find("purchase_product").unwrap();
        assert_eq!(spec.usage(), "purchase_product <id> <quantity> <price>");
        assert_eq!(find("exit").unwrap().usage(), "exit");
    }

    #[test]
    fn test_command_names_are_unique() {
        for (i, spec) in COMMANDS.iter().enumerate() {
            assert!(
                COMMANDS[i + 1..].iter().all(|other| other.name != spec.name),
                "duplicate command {}",
                spec.name
            );
        }
    }
}
