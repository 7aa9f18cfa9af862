//! The deep-clone dispatch engine.
//!
//! [`dispatch`] is the top-level decision procedure: it sequences the
//! capability probe, the shape classification, and the strategy execution.
//! The strategies themselves live in the submodules, next to the probe impls
//! of the container types they serve:
//!
//! - [`slice`] — `Vec<E>`, the dominant-complexity strategy.
//! - [`pointer`] — `Box<E>` and the nilable carriers `Option<E>` /
//!   `Optional<T>`.

pub mod pointer;
pub mod slice;

use crate::error::CloneError;
use crate::probe::Probe;
use crate::shape::Shape;

/// Produces an independent copy of `value`.
///
/// The decision procedure, in order:
///
/// 1. **Scalar fast path.** `T::SHAPE` is an associated constant, so this
///    check folds away per monomorphized `T`; scalar-copyable values are
///    duplicated by a flat copy with no inspection and no allocation.
/// 2. **Capability fast path.** The value-bound binding is consulted first,
///    then the address-bound one. In Rust the receiver of the address-bound
///    form is reached through `&self`, which is already an address, so no
///    temporary copy is needed to invoke it; the returned cell is
///    dereferenced and the copy returned by value.
/// 3. **Shape dispatch.** Strings, slices, and pointers route to their
///    strategies. Structs, arrays, and anything unclassified are refused
///    with [`CloneError::Unsupported`] — deliberately, since a silent
///    shallow copy would alias mutable state between original and copy.
///
/// The copy shares no mutable storage with `value`. On error the original
/// is untouched; there is no partial-clone state.
pub fn dispatch<T: Probe>(value: &T) -> Result<T, CloneError> {
    if T::SHAPE.is_scalar_copyable() {
        // SAFETY: a scalar-copyable `SHAPE` certifies `T` is plain data
        // (`Probe` safety contract).
        return Ok(unsafe { flat_copy(value) });
    }

    if let Some(copy) = value.value_clone() {
        return Ok(copy);
    }
    if let Some(cell) = value.boxed_clone() {
        return Ok(*cell);
    }

    match T::SHAPE {
        Shape::Str | Shape::Slice | Shape::Pointer => value.shape_clone(),
        // Scalar shapes returned above; everything left is terminal.
        _ => Err(CloneError::unsupported::<T>()),
    }
}

/// Duplicates a value by a flat copy of its bytes.
///
/// # Safety
///
/// `T` must contain no nested ownership and no drop glue. The engine only
/// calls this for shapes certified scalar-copyable by the `Probe` contract.
pub(crate) unsafe fn flat_copy<T>(value: &T) -> T {
    debug_assert!(!core::mem::needs_drop::<T>());

    // SAFETY: `T` is plain data per the caller contract, so a bitwise read
    // does not duplicate ownership.
    unsafe { core::ptr::read(value) }
}
