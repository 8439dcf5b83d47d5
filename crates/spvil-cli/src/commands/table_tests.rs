use spvil_core::InstructionTable;

use super::table::{render_json, render_text, select};

fn render(op: &str) -> String {
    render_text(&select(InstructionTable::spirv(), Some(op)).unwrap())
}

#[test]
fn single_entry_text() {
    insta::assert_snapshot!(render("OpLoad"), @"OpLoad (61, Body): %type %result Id, MemoryAccess?");
    insta::assert_snapshot!(render("OpName"), @"OpName (5, Debug): Id, LiteralString");
    insta::assert_snapshot!(render("OpTypeVoid"), @"OpTypeVoid (19, Type): %result");
    insta::assert_snapshot!(render("OpNop"), @"OpNop (0, Body)");
}

#[test]
fn all_entries_by_default() {
    let table = InstructionTable::spirv();
    let entries = select(table, None).unwrap();
    assert_eq!(entries.len(), table.len());
    assert_eq!(render_text(&entries).lines().count(), table.len());
}

#[test]
fn unknown_instruction() {
    let err = select(InstructionTable::spirv(), Some("OpFrobnicate")).unwrap_err();
    assert_eq!(err, "unknown instruction `OpFrobnicate`");
}

#[test]
fn json_entry() {
    let entries = select(InstructionTable::spirv(), Some("OpStore")).unwrap();
    insta::assert_snapshot!(render_json(&entries).unwrap(), @r#"
    [
      {
        "class": "Body",
        "name": "OpStore",
        "opcode": 62,
        "operands": [
          "Id",
          "Id",
          "MemoryAccess?"
        ],
        "result": false,
        "type": false
      }
    ]
    "#);
}

#[test]
fn custom_table() {
    let table = InstructionTable::from_json(
        r#"{
            "version": 65536,
            "instructions": {
                "OpNop": { "opcode": 0 },
                "OpTypeVoid": { "opcode": 19, "result": true, "class": "Type" }
            }
        }"#,
    )
    .unwrap();
    let entries = select(&table, None).unwrap();
    insta::assert_snapshot!(render_text(&entries), @r"
    OpNop (0, Body)
    OpTypeVoid (19, Type): %result
    ");
}
