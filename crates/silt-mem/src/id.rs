//! Opaque region identifiers.

use std::fmt;

/// Identifier assigned to a region by the pool that produced it.
///
/// Carried unchanged through every reinterpretation: a region, the spans
/// viewing it, and any list built on those spans all report the same id.
/// This crate never interprets the value; it is meaningful only to the
/// pool's recycling scheme. The empty views carry `RegionId(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub i32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for RegionId {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

impl From<RegionId> for i32 {
    fn from(id: RegionId) -> Self {
        id.0
    }
}
