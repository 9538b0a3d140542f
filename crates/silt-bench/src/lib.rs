//! Benchmark fixtures for the Silt buffer primitives.
//!
//! Provides [`Backing`], an owned allocation standing in for the buffer
//! pool, so benches can hand out [`TypedSpan`]/[`RawRegion`] views without
//! dragging the real pool into the measurement.

#![deny(rustdoc::broken_intra_doc_links)]

use silt_mem::{RawRegion, RegionId, TypedSpan};

/// An owned, zero-filled `u32` allocation that stands in for the pool.
///
/// The `Backing` must outlive every view taken from it, exactly like a
/// pool-owned region.
pub struct Backing {
    data: Vec<u32>,
    id: RegionId,
}

impl Backing {
    /// Allocate `len` zeroed elements under the given id.
    pub fn new(len: usize, id: i32) -> Self {
        Self {
            data: vec![0; len],
            id: RegionId(id),
        }
    }

    /// A typed span over the whole allocation.
    pub fn span(&mut self) -> TypedSpan<u32> {
        // SAFETY: `self.data` is a live, aligned, initialized allocation of
        // exactly `len` elements, and the span is only used while `self`
        // is borrowed.
        unsafe { TypedSpan::from_raw_parts(self.data.as_mut_ptr(), self.data.len(), self.id) }
    }

    /// An untyped region over the whole allocation.
    pub fn region(&mut self) -> RawRegion {
        // SAFETY: as span(); the byte length matches the allocation.
        unsafe {
            RawRegion::new(
                self.data.as_mut_ptr().cast::<u8>(),
                self.data.len() * std::mem::size_of::<u32>(),
                self.id,
            )
        }
    }
}
