//! The slice-clone strategy.
//!
//! Clones a `Vec<E>` into a fresh backing buffer that shares nothing with
//! the source. The element type may be scalar, may expose a clone capability
//! in either binding, and may itself be a pointer — every combination is
//! handled here or routed through the pointer impls in
//! [`super::pointer`].
//!
//! Capacity policy: clones preserve the source's **capacity**, not only its
//! length. This matches the documented reference behavior and is pinned by
//! tests.
//!
//! A note on helper types: a user-defined newtype over a slice that carries
//! its own capability (the "clone the whole slice at once" case) resolves in
//! the dispatcher's capability fast path before this strategy runs, so it
//! bypasses per-element work entirely. Orphan rules preclude attaching a
//! capability to `Vec<E>` itself.

use alloc::vec::Vec;

use crate::error::CloneError;
use crate::probe::Probe;
use crate::shape::Shape;

unsafe impl<E: Probe> Probe for Vec<E> {
    const SHAPE: Shape = Shape::Slice;

    #[inline]
    fn shape_clone(&self) -> Result<Self, CloneError> {
        clone_slice(self)
    }
}

/// Clones a slice element by element, or in bulk when the element shape
/// permits it.
///
/// The per-element ladder covers the four capability bindings:
///
/// - `Vec<E>` with a value-bound `E` — invoke on the element, store the
///   result.
/// - `Vec<E>` with an address-bound `E` — every slice element is addressable
///   through the borrow, so the capability is invoked directly; the returned
///   cell is dereferenced and stored by value.
/// - `Vec<Box<E>>` with an address-bound `E` — the `Box` probe impl invokes
///   the capability on the pointee and the returned cell is stored as-is.
/// - `Vec<Box<E>>` with a value-bound `E` — the `Box` probe impl invokes the
///   capability on the pointee and allocates a new cell for the result.
pub(crate) fn clone_slice<E: Probe>(src: &Vec<E>) -> Result<Vec<E>, CloneError> {
    if E::SHAPE.is_scalar_copyable() {
        return Ok(bulk_copy(src));
    }

    let mut out = Vec::with_capacity(src.capacity());
    for (index, elem) in src.iter().enumerate() {
        if let Some(copy) = elem.value_clone() {
            out.push(copy);
            continue;
        }
        if let Some(cell) = elem.boxed_clone() {
            out.push(*cell);
            continue;
        }
        match E::SHAPE {
            // Strings own their bytes but carry no further structure;
            // duplicate them one element at a time.
            Shape::Str => out.push(elem.shape_clone()?),
            _ => return Err(CloneError::unsupported_element::<E>(index)),
        }
    }

    Ok(out)
}

/// Single bulk copy of the underlying bytes into a freshly allocated
/// backing buffer.
///
/// This is the only raw memory copy in the crate, permitted here because
/// scalar-copyable elements contain no nested ownership.
fn bulk_copy<E: Probe>(src: &Vec<E>) -> Vec<E> {
    debug_assert!(E::SHAPE.is_scalar_copyable());

    let mut out = Vec::with_capacity(src.capacity());
    // SAFETY: `out` has capacity for at least `src.len()` elements, the two
    // buffers are disjoint, and `E` is plain data per the `Probe` contract.
    unsafe {
        core::ptr::copy_nonoverlapping(src.as_ptr(), out.as_mut_ptr(), src.len());
        out.set_len(src.len());
    }
    out
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::clone_slice;

    #[test]
    fn bulk_copy_uses_a_disjoint_buffer() {
        let src = vec![1u64, 2, 3];
        let copy = clone_slice(&src).unwrap();

        assert_eq!(copy, src);
        assert_ne!(src.as_ptr(), copy.as_ptr());
    }

    #[test]
    fn empty_slice_round_trips_to_empty() {
        let src: Vec<u8> = Vec::new();
        let copy = clone_slice(&src).unwrap();

        assert!(copy.is_empty());
    }

    #[test]
    fn capacity_is_preserved() {
        let mut src = Vec::with_capacity(32);
        src.extend_from_slice(&[1i32, 2]);

        let copy = clone_slice(&src).unwrap();
        assert_eq!(copy.len(), 2);
        assert!(copy.capacity() >= 32);
    }
}
