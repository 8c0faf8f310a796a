//! # grocery-receipt
//!
//! Prices a grocery order and prints the receipt.
//!
//! ```bash
//! echo '[{"name": "bread", "quantity": 3, "age": 3}]' | grocery-receipt price
//! grocery-receipt price order.json
//! GROCERY_LOG=grocery_core=debug grocery-receipt price order.json
//! ```

use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match grocery_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
