use spvil_core::Id;

/// Error while rendering a module as text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    #[error("debug name {name:?} of {id} does not start with an identifier")]
    InvalidSymbolName { id: Id, name: String },

    #[error("{0} is referenced but not defined")]
    DanglingReference(Id),

    #[error("malformed global variable `{var}`: {reason}")]
    MalformedGlobal { var: String, reason: &'static str },
}
