//! Dense identifiers for network entities.

use std::fmt;

macro_rules! dense_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub usize);

        impl $name {
            /// Returns the position of this entity in its owning collection.
            #[inline]
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

dense_id!(
    /// Index of a [`Station`](super::Station) inside its [`Network`](super::Network).
    StationId
);
dense_id!(
    /// Index of a [`Connection`](super::Connection) inside its [`Network`](super::Network).
    ///
    /// Assigned in insertion order, unique within one network.
    ConnectionId
);
dense_id!(
    /// Ordinal of a [`Line`](super::Line), unique per construction run.
    LineId
);

/// Hands out increasing [`LineId`]s.
///
/// Owned by whoever runs a construction, never global, so tests can
/// start from zero again with [`reset`](Self::reset).
#[derive(Debug, Clone, Default)]
pub struct LineIdGenerator {
    next: usize,
}

impl LineIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id.
    pub fn next_id(&mut self) -> LineId {
        let id = LineId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out since the last reset.
    pub fn issued(&self) -> usize {
        self.next
    }

    pub fn reset(&mut self) {
        self.next = 0;
    }
}
