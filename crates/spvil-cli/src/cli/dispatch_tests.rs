//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::commands::{build_cli, dis_command, roundtrip_command, table_command};
use super::*;

#[test]
fn dis_defaults() {
    let m = dis_command()
        .try_get_matches_from(["dis", "shader.spv"])
        .unwrap();
    let params = DisParams::from_matches(&m);

    assert_eq!(params.module_path, PathBuf::from("shader.spv"));
    assert_eq!(params.table_path, None);
    assert!(!params.raw);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn dis_flags() {
    let m = dis_command()
        .try_get_matches_from([
            "dis",
            "-",
            "--raw",
            "--color",
            "never",
            "--table",
            "t.json",
        ])
        .unwrap();
    let params = DisParams::from_matches(&m);

    assert_eq!(params.module_path, PathBuf::from("-"));
    assert_eq!(params.table_path, Some(PathBuf::from("t.json")));
    assert!(params.raw);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn dis_requires_module() {
    let result = dis_command().try_get_matches_from(["dis"]);
    assert!(result.is_err());
}

#[test]
fn dis_rejects_unknown_color() {
    let result = dis_command().try_get_matches_from(["dis", "a.spv", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn roundtrip_params() {
    let m = roundtrip_command()
        .try_get_matches_from(["roundtrip", "a.spv"])
        .unwrap();
    let params = RoundtripParams::from_matches(&m);
    assert_eq!(params.module_path, PathBuf::from("a.spv"));
}

#[test]
fn table_params() {
    let m = table_command()
        .try_get_matches_from(["table", "OpLoad", "--json"])
        .unwrap();
    let params = TableParams::from_matches(&m);
    assert_eq!(params.op_name.as_deref(), Some("OpLoad"));
    assert!(params.json);

    let m = table_command().try_get_matches_from(["table"]).unwrap();
    let params = TableParams::from_matches(&m);
    assert_eq!(params.op_name, None);
    assert!(!params.json);
}

#[test]
fn verbose_is_global() {
    let m = build_cli()
        .try_get_matches_from(["spvil", "dis", "a.spv", "-vv"])
        .unwrap();
    assert_eq!(m.get_count("verbose"), 2);
    assert_eq!(log_level(m.get_count("verbose")), log::LevelFilter::Debug);
}

#[test]
fn subcommand_is_required() {
    assert!(build_cli().try_get_matches_from(["spvil"]).is_err());
}

#[test]
fn color_choice_explicit() {
    assert!(ColorChoice::Always.should_colorize());
    assert!(!ColorChoice::Never.should_colorize());
}
