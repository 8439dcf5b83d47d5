mod cli;
mod commands;

use cli::{DisParams, RoundtripParams, TableParams, build_cli, log_level};

fn main() {
    let matches = build_cli().get_matches();

    colog::default_builder()
        .filter_level(log_level(matches.get_count("verbose")))
        .init();

    match matches.subcommand() {
        Some(("dis", m)) => {
            let params = DisParams::from_matches(m);
            commands::dis::run(params.into());
        }
        Some(("roundtrip", m)) => {
            let params = RoundtripParams::from_matches(m);
            commands::roundtrip::run(params.into());
        }
        Some(("table", m)) => {
            let params = TableParams::from_matches(m);
            commands::table::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
