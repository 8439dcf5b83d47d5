//! Result id newtype.

use std::fmt;
use std::num::NonZeroU32;

/// Reference to a declared entity (type, constant, variable, function, label,
/// instruction result) within one module.
///
/// Ids are dense positive integers bounded by [`Module::bound`](crate::Module::bound).
/// Zero is reserved by the binary format and cannot be represented.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[repr(transparent)]
pub struct Id(NonZeroU32);

impl Id {
    /// Wrap a raw id. Returns `None` for zero.
    #[inline]
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// Raw numeric value, as written into the binary stream.
    #[inline]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.0)
    }
}

/// Shorthand for tests and table-driven construction.
///
/// # Panics
/// Panics on zero.
pub fn id(raw: u32) -> Id {
    Id::new(raw).expect("id 0 is reserved")
}
