//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Binary module (positional, `-` for stdin).
pub fn module_path_arg() -> Arg {
    Arg::new("module_path")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("SPIR-V binary module, or - for stdin")
}

/// Alternative instruction table (--table).
pub fn table_path_arg() -> Arg {
    Arg::new("table_path")
        .long("table")
        .value_name("JSON")
        .value_parser(value_parser!(PathBuf))
        .help("Instruction table to use instead of the built-in one")
}

/// Instruction name filter (positional).
pub fn op_name_arg() -> Arg {
    Arg::new("op_name")
        .value_name("OP")
        .help("Only show this instruction, e.g. OpLoad")
}

/// Raw text mode (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Print one line per binary instruction, without symbolic names")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as JSON")
}

/// Log verbosity (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log more (-v info, -vv debug, -vvv trace)")
}
