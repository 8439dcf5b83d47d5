//! Warnings collected while encoding.
//!
//! Anything that stops an encoding is a hard error returned through `Result`.
//! What lands here is cosmetic, such as a debug name that had to be cut down,
//! and never aborts the pass.

use std::fmt::{self, Write};

use crate::Colors;
use crate::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A debug name was cut down to its longest identifier prefix.
    TruncatedSymbolName,
    /// Two ids asked for the same symbol; the later one got a suffix.
    DuplicateSymbolName,
}

impl DiagnosticKind {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::TruncatedSymbolName => "truncated symbol name",
            Self::DuplicateSymbolName => "duplicate symbol name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// The id whose rendering triggered the diagnostic, when there is one.
    pub id: Option<Id>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: {}", self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<Diagnostic>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    diagnostic: Diagnostic,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a diagnostic of `kind`, using the kind's default message.
    pub fn report(&mut self, kind: DiagnosticKind) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            diagnostic: Diagnostic {
                kind,
                message: kind.fallback_message().to_string(),
                id: None,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter()
    }

    /// One line per diagnostic: `warning: message`.
    pub fn render(&self, colors: Colors) -> String {
        let mut out = String::new();
        let label = colors.paint(colors.warning, "warning");
        for diag in &self.messages {
            writeln!(out, "{label}: {}", diag.message).expect("String write never fails");
        }
        out
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Replace the default message.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.diagnostic.message = msg.into();
        self
    }

    pub fn id(mut self, id: Id) -> Self {
        self.diagnostic.id = Some(id);
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.diagnostic);
    }
}
