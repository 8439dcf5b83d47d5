//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("spvil")
        .about("SPIR-V IR binary and text encoder")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(dis_command())
        .subcommand(roundtrip_command())
        .subcommand(table_command())
}

/// Decode a binary module and print it as text.
pub fn dis_command() -> Command {
    Command::new("dis")
        .about("Print a binary module as text")
        .after_help(
            r#"EXAMPLES:
  spvil dis shader.spv                # pretty text
  spvil dis shader.spv --raw          # one line per instruction
  cat shader.spv | spvil dis -        # from stdin"#,
        )
        .arg(module_path_arg())
        .arg(raw_arg())
        .arg(color_arg())
        .arg(table_path_arg())
}

/// Decode, re-encode and compare.
pub fn roundtrip_command() -> Command {
    Command::new("roundtrip")
        .about("Check that a binary module re-encodes to the same words")
        .arg(module_path_arg())
        .arg(table_path_arg())
}

/// Show instruction table entries.
pub fn table_command() -> Command {
    Command::new("table")
        .about("Show instruction table entries")
        .after_help(
            r#"EXAMPLES:
  spvil table                         # every instruction
  spvil table OpLoad                  # one instruction
  spvil table --json                  # machine-readable"#,
        )
        .arg(op_name_arg())
        .arg(json_arg())
        .arg(table_path_arg())
}
