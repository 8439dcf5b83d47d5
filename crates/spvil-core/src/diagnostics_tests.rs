use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::ids::id;
use crate::Colors;

#[test]
fn builder_pushes_message() {
    let mut diags = Diagnostics::new();
    diags
        .report(DiagnosticKind::TruncatedSymbolName)
        .message("truncated symbol name \"a(b\" to \"a\"")
        .id(id(3))
        .emit();

    assert_eq!(diags.len(), 1);
    let d = diags.iter().next().unwrap();
    assert_eq!(d.id, Some(id(3)));
    assert_eq!(
        d.to_string(),
        "warning: truncated symbol name \"a(b\" to \"a\""
    );
}

#[test]
fn render_plain() {
    let mut diags = Diagnostics::new();
    diags.report(DiagnosticKind::DuplicateSymbolName).emit();
    assert_eq!(diags.render(Colors::OFF), "warning: duplicate symbol name\n");
}

#[test]
fn render_colored_wraps_label() {
    let mut diags = Diagnostics::new();
    diags.report(DiagnosticKind::TruncatedSymbolName).emit();
    let out = diags.render(Colors::ON);
    assert!(out.starts_with("\x1b[33mwarning\x1b[0m: "));
}

#[test]
fn nothing_rendered_when_empty() {
    assert_eq!(Diagnostics::new().render(Colors::ON), "");
}
