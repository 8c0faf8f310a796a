//! # CLI Commands
//!
//! ```text
//! grocery-receipt price [FILE]   order JSON from FILE (or stdin) → receipt
//! grocery-receipt prices         one "name: €price" line per product
//! grocery-receipt rules          one discount rule per line
//! ```
//!
//! Commands return the text to print so they can be tested without a
//! terminal.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use grocery_core::{list_discount_rules, list_prices, price_order, ProductLookup};
use tracing::debug;

use crate::input::parse_order;

/// Usage text printed for `help` and on bad arguments.
pub const USAGE: &str = "\
Usage: grocery-receipt <command>

Commands:
  price [FILE]   Price an order (JSON) read from FILE or stdin
  prices         List unit prices
  rules          List discount rules
  help           Show this message";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Price { input: Option<PathBuf> },
    Prices,
    Rules,
    Help,
}

impl Command {
    /// Parses the arguments after the program name.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> anyhow::Result<Self> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        match args.as_slice() {
            ["price"] | ["price", "-"] => Ok(Command::Price { input: None }),
            ["price", path] => Ok(Command::Price {
                input: Some(PathBuf::from(path)),
            }),
            ["prices"] => Ok(Command::Prices),
            ["rules"] => Ok(Command::Rules),
            [] | ["help"] | ["--help"] | ["-h"] => Ok(Command::Help),
            _ => bail!("unrecognized arguments: {}\n\n{}", args.join(" "), USAGE),
        }
    }
}

/// Runs `command` against `catalog`, reading order input from `stdin`
/// when no file was given.
pub fn execute<C, R>(command: &Command, catalog: &C, stdin: R) -> anyhow::Result<String>
where
    C: ProductLookup + ?Sized,
    R: Read,
{
    debug!(?command, "executing command");
    match command {
        Command::Price { input } => price(input.as_ref(), catalog, stdin),
        Command::Prices => Ok(prices(catalog)),
        Command::Rules => Ok(rules(catalog)),
        Command::Help => Ok(format!("{}\n", USAGE)),
    }
}

fn price<C, R>(input: Option<&PathBuf>, catalog: &C, mut stdin: R) -> anyhow::Result<String>
where
    C: ProductLookup + ?Sized,
    R: Read,
{
    let json = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read order file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read order from stdin")?;
            buf
        }
    };

    let lines = parse_order(&json).context("order is not valid JSON")?;
    let receipt = price_order(&lines, catalog)?;
    Ok(receipt.text)
}

fn prices<C: ProductLookup + ?Sized>(catalog: &C) -> String {
    list_prices(catalog)
        .into_iter()
        .map(|(name, price)| format!("{}: {}\n", name, price))
        .collect()
}

fn rules<C: ProductLookup + ?Sized>(catalog: &C) -> String {
    list_discount_rules(catalog)
        .into_iter()
        .map(|rule| format!("{}\n", rule.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocery_core::{CoreError, InMemoryCatalog};

    fn run(command: Command, stdin: &str) -> anyhow::Result<String> {
        execute(&command, &InMemoryCatalog::with_defaults(), stdin.as_bytes())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse::<&str>(&[]).unwrap(), Command::Help);
        assert_eq!(Command::parse(&["price"]).unwrap(), Command::Price { input: None });
        assert_eq!(
            Command::parse(&["price", "order.json"]).unwrap(),
            Command::Price {
                input: Some(PathBuf::from("order.json"))
            }
        );
        assert_eq!(Command::parse(&["prices"]).unwrap(), Command::Prices);
        assert_eq!(Command::parse(&["rules"]).unwrap(), Command::Rules);
        assert!(Command::parse(&["refund"]).is_err());
        assert!(Command::parse(&["price", "a.json", "b.json"]).is_err());
    }

    #[test]
    fn test_price_from_stdin() {
        let out = run(
            Command::Price { input: None },
            r#"[
                {"name": "bread", "quantity": 6, "age": 6},
                {"name": "Belgium beer", "quantity": 5, "origin": "Belgium"},
                {"name": "vegetable", "weight": 90}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            out,
            "Order details:\n\
             6 x bread (6 days old): €2.00\n\
             5 x Belgium beer: €3.75\n\
             90.0 g x vegetable: €0.86\n\
             Total: €6.61\n"
        );
    }

    #[test]
    fn test_price_surfaces_core_errors() {
        let err = run(Command::Price { input: None }, "[]").unwrap_err();
        assert!(matches!(err.downcast_ref::<CoreError>(), Some(CoreError::EmptyOrder)));

        let milk = r#"[{"name": "milk", "quantity": 1}]"#;
        let err = run(Command::Price { input: None }, milk).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_price_missing_file() {
        let err = run(
            Command::Price {
                input: Some(PathBuf::from("/definitely/not/here.json")),
            },
            "",
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to read order file"));
    }

    #[test]
    fn test_prices_sorted_by_name() {
        let out = run(Command::Prices, "").unwrap();
        assert_eq!(
            out,
            "Belgium beer: €0.75\n\
             Dutch beer: €0.50\n\
             German beer: €1.00\n\
             bread: €1.00\n\
             vegetable: €1.00\n"
        );
    }

    #[test]
    fn test_rules() {
        let out = run(Command::Rules, "").unwrap();
        assert_eq!(out.lines().count(), 5);
        assert!(out.contains("€ 2,00 for each Dutch beer pack."));
    }
}
