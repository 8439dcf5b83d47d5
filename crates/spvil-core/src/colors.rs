//! Terminal styling for text output and warnings.

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Escape code per styled role. With color off every code is empty, so
/// painting is a plain copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    /// `@alias` symbols and block labels.
    pub symbol: &'static str,
    /// Quoted literal strings.
    pub string: &'static str,
    /// The `warning` label of a rendered diagnostic.
    pub warning: &'static str,
    /// Decorations inlined after a result id.
    pub decoration: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        symbol: BLUE,
        string: GREEN,
        warning: YELLOW,
        decoration: DIM,
        reset: RESET,
    };

    pub const OFF: Self = Self {
        symbol: "",
        string: "",
        warning: "",
        decoration: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    /// `text` wrapped in the escape code of `role`.
    pub fn paint(&self, role: &'static str, text: &str) -> String {
        if role.is_empty() {
            text.to_string()
        } else {
            format!("{role}{text}{}", self.reset)
        }
    }
}
