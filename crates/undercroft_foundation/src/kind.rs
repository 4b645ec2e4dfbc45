//! Stable logical names for component types.

use std::fmt;

/// The logical type of a component (e.g. `Loc`, `Health`).
///
/// The kind set is closed at compile time: every component type declares its
/// kind as an associated constant, and storage resolves kinds to typed
/// buckets via `TypeId`. `Kind` itself is the human-facing tag used in error
/// reports and serialized records.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Kind(&'static str);

impl Kind {
    /// Creates a kind tag from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the kind's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kind({})", self.0)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
