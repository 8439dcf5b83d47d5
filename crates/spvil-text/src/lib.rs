#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Text forms of spvil modules.
//!
//! - Raw mode mirrors the binary one instruction per line, ids as `%N`.
//! - Pretty mode names ids after their debug names (`@main`), spells out
//!   self-describing types (`<4 x float>`), drops unused type declarations and
//!   prints decorations inline.
//!
//! Each pretty pass owns a fresh [`Aliases`] context; nothing is shared
//! between passes.

mod alias;
mod error;
mod format;
mod pretty;
mod raw;
mod usage;

#[cfg(test)]
mod pretty_tests;
#[cfg(test)]
mod raw_tests;

use spvil_core::{Colors, Diagnostics, Module};

pub use alias::Aliases;
pub use error::TextError;
pub use format::ORDERED_INITIAL;
pub use pretty::write_pretty;
pub use raw::write_raw;
pub use usage::{NeededTypes, needed_types};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextMode {
    Raw,
    #[default]
    Pretty,
}

/// Text encoder settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextOptions {
    pub mode: TextMode,
    pub colors: Colors,
}

impl TextOptions {
    pub fn raw() -> Self {
        Self {
            mode: TextMode::Raw,
            ..Self::default()
        }
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }
}

/// Rendered text plus the warnings raised while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOutput {
    pub text: String,
    pub diagnostics: Diagnostics,
}

/// Render `module` as text in the configured mode.
pub fn encode_text(module: &Module, options: &TextOptions) -> Result<TextOutput, TextError> {
    let (text, diagnostics) = match options.mode {
        TextMode::Raw => (write_raw(module, options.colors), Diagnostics::new()),
        TextMode::Pretty => write_pretty(module, options.colors)?,
    };
    log::debug!(
        "encoded {} lines of {:?} text",
        text.lines().count(),
        options.mode
    );
    Ok(TextOutput { text, diagnostics })
}
