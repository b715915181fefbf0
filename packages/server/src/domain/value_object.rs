//! Value objects.

use std::fmt;

/// Display names of the mold kinds a client can place, indexed by [`MoldType`].
pub const MOLD_PALETTE: [&str; 6] = [
    "abstract mold",
    "double mold",
    "mold",
    "pink mold",
    "speckle mold",
    "yellow mold",
];

/// Identifier assigned to a connection when it registers.
///
/// Ids increase monotonically for the lifetime of the process and are never
/// reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

impl ConnectionId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ConnectionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Index into [`MOLD_PALETTE`].
///
/// The server relays whatever index a client sends; an index outside the
/// palette is kept as-is and simply has no name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoldType(usize);

impl MoldType {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    /// Palette name, or `None` when the index is outside the palette.
    pub fn name(&self) -> Option<&'static str> {
        MOLD_PALETTE.get(self.0).copied()
    }
}
