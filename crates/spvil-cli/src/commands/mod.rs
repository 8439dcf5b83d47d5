pub mod dis;
pub mod loader;
pub mod roundtrip;
pub mod table;

#[cfg(test)]
mod table_tests;

use std::fmt::Display;

/// Print `error: {msg}` and exit with status 1.
pub fn fail(msg: impl Display) -> ! {
    eprintln!("error: {msg}");
    std::process::exit(1);
}
