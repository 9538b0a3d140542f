//! Typed element views over raw regions.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::id::RegionId;
use crate::index_check;
use crate::region::RawRegion;

/// `size_of::<T>()`, rejecting zero-sized element types.
///
/// Every conversion between byte and element counts divides or multiplies
/// by this value, so a zero size is a contract violation rather than a
/// divide-by-zero.
pub(crate) fn elem_size<T>() -> usize {
    let size = std::mem::size_of::<T>();
    assert!(size != 0, "span elements must have non-zero size");
    size
}

/// Non-owning view of a contiguous region as `len` elements of `T`.
///
/// The span carries the pool-assigned [`RegionId`] of the region it was
/// built from, uninterpreted. It never owns the memory it points to and
/// becomes invalid the instant the pool reclaims or resizes the backing
/// region, and the crate cannot detect that.
///
/// For every valid index `i < len`, `memory + i` addresses a live `T` slot
/// within the originating region. Access outside that range is a contract
/// violation surfaced per the crate's bounds-checking policy.
pub struct TypedSpan<T> {
    pub(crate) memory: *mut T,
    pub(crate) len: usize,
    pub(crate) id: RegionId,
}

impl<T> TypedSpan<T> {
    /// The empty span: null pointer, zero length, id 0.
    ///
    /// A valid span; indexing it at any position is a contract violation.
    pub fn new() -> Self {
        Self {
            memory: std::ptr::null_mut(),
            len: 0,
            id: RegionId(0),
        }
    }

    /// Create a span over `len` elements of `T` starting at `memory`.
    ///
    /// The fields are stored verbatim; `memory` is not validated against
    /// `len`.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    ///
    /// # Safety
    ///
    /// `memory` must be aligned for `T` and point to `len` initialized
    /// elements that stay live for as long as the span (or any copy of it)
    /// is accessed. A null `memory` is permitted only with `len == 0`.
    pub unsafe fn from_raw_parts(memory: *mut T, len: usize, id: RegionId) -> Self {
        elem_size::<T>();
        Self { memory, len, id }
    }

    /// Reinterpret a raw region as a span of `T`.
    ///
    /// `len` becomes `region.len_bytes() / size_of::<T>()`, flooring; see
    /// [`RawRegion::typed`] for the truncation rule. Lossless exactly when
    /// `region` came from [`TypedSpan::to_region`] with the same `T`.
    ///
    /// # Safety
    ///
    /// As [`RawRegion::typed`].
    pub unsafe fn from_region(region: RawRegion) -> Self {
        // SAFETY: forwarded contract.
        unsafe { region.typed::<T>() }
    }

    /// Reinterpret the span as an untyped byte region.
    ///
    /// The byte length is `len * size_of::<T>()` and the id is copied
    /// unchanged, so converting back with the same `T` reproduces this span
    /// exactly. Safe: the region grants no access the span did not already
    /// have.
    ///
    /// # Panics
    ///
    /// Panics if the byte length overflows `usize`.
    pub fn to_region(self) -> RawRegion {
        let size = elem_size::<T>();
        let len_bytes = self
            .len
            .checked_mul(size)
            .expect("span byte length overflows usize");
        RawRegion {
            memory: self.memory.cast::<u8>(),
            len_bytes,
            id: self.id,
            #[cfg(debug_assertions)]
            elem_size: size,
        }
    }

    /// Pointer to the first element.
    pub fn memory(&self) -> *mut T {
        self.memory
    }

    /// Number of elements in the span.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the span holds zero elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The pool-assigned identifier, carried through uninterpreted.
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Checked element access.
    ///
    /// Returns `None` when `index >= len`, in every build profile.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            // SAFETY: index is in bounds and the construction contract
            // guarantees a live element there.
            Some(unsafe { &*self.memory.add(index) })
        } else {
            None
        }
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            // SAFETY: as get; &mut self gives exclusive access to the view.
            Some(unsafe { &mut *self.memory.add(index) })
        } else {
            None
        }
    }

    /// Element access without a bounds check in any build profile.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds (`index < len`).
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "span index {index} out of bounds (len {})",
            self.len,
        );
        // SAFETY: caller guarantees the index is in bounds.
        unsafe { &*self.memory.add(index) }
    }

    /// Mutable element access without a bounds check in any build profile.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds (`index < len`).
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "span index {index} out of bounds (len {})",
            self.len,
        );
        // SAFETY: caller guarantees the index is in bounds.
        unsafe { &mut *self.memory.add(index) }
    }

    /// View the whole span as a slice.
    pub fn as_slice(&self) -> &[T] {
        if self.len == 0 {
            return &[];
        }
        // SAFETY: the construction contract guarantees len live elements.
        unsafe { std::slice::from_raw_parts(self.memory, self.len) }
    }

    /// View the whole span as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        if self.len == 0 {
            return &mut [];
        }
        // SAFETY: as as_slice; &mut self gives exclusive access to the view.
        unsafe { std::slice::from_raw_parts_mut(self.memory, self.len) }
    }
}

impl<T> Default for TypedSpan<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impls: deriving would demand the bounds of `T`, but copying a view
// copies only the descriptor, never the elements.
impl<T> Clone for TypedSpan<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedSpan<T> {}

impl<T> PartialEq for TypedSpan<T> {
    fn eq(&self, other: &Self) -> bool {
        self.memory == other.memory && self.len == other.len && self.id == other.id
    }
}

impl<T> Eq for TypedSpan<T> {}

impl<T> fmt::Debug for TypedSpan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedSpan")
            .field("memory", &self.memory)
            .field("len", &self.len)
            .field("id", &self.id)
            .finish()
    }
}

impl<T> Index<usize> for TypedSpan<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        index_check!(
            index < self.len,
            "span index {index} out of bounds (len {})",
            self.len,
        );
        // SAFETY: checked builds asserted the bound above; in unchecked
        // builds the caller carries the contract.
        unsafe { &*self.memory.add(index) }
    }
}

impl<T> IndexMut<usize> for TypedSpan<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        index_check!(
            index < self.len,
            "span index {index} out of bounds (len {})",
            self.len,
        );
        // SAFETY: as Index; &mut self gives exclusive access to the view.
        unsafe { &mut *self.memory.add(index) }
    }
}
