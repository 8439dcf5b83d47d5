//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::dis::DisArgs;
use crate::commands::roundtrip::RoundtripArgs;
use crate::commands::table::TableArgs;

pub struct DisParams {
    pub module_path: PathBuf,
    pub table_path: Option<PathBuf>,
    pub raw: bool,
    pub color: ColorChoice,
}

impl DisParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            module_path: module_path(m),
            table_path: m.get_one::<PathBuf>("table_path").cloned(),
            raw: m.get_flag("raw"),
            color: parse_color(m),
        }
    }
}

impl From<DisParams> for DisArgs {
    fn from(p: DisParams) -> Self {
        Self {
            module_path: p.module_path,
            table_path: p.table_path,
            raw: p.raw,
            color: p.color.should_colorize(),
        }
    }
}

pub struct RoundtripParams {
    pub module_path: PathBuf,
    pub table_path: Option<PathBuf>,
}

impl RoundtripParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            module_path: module_path(m),
            table_path: m.get_one::<PathBuf>("table_path").cloned(),
        }
    }
}

impl From<RoundtripParams> for RoundtripArgs {
    fn from(p: RoundtripParams) -> Self {
        Self {
            module_path: p.module_path,
            table_path: p.table_path,
        }
    }
}

pub struct TableParams {
    pub op_name: Option<String>,
    pub table_path: Option<PathBuf>,
    pub json: bool,
}

impl TableParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            op_name: m.get_one::<String>("op_name").cloned(),
            table_path: m.get_one::<PathBuf>("table_path").cloned(),
            json: m.get_flag("json"),
        }
    }
}

impl From<TableParams> for TableArgs {
    fn from(p: TableParams) -> Self {
        Self {
            op_name: p.op_name,
            table_path: p.table_path,
            json: p.json,
        }
    }
}

/// The positional is `required`, so clap has rejected its absence already.
fn module_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("module_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
