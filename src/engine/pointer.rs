//! The pointer-clone strategy.
//!
//! A source-level nilable pointer maps onto two Rust layers: `Box<E>` is the
//! owning cell (never nil) and `Option<E>` is the nilable layer. Both
//! classify as [`Shape::Pointer`], and the stacked form `Option<Box<E>>`
//! behaves as a single pointer: nilness propagates without allocation, a
//! present pointee gets a fresh cell.
//!
//! The strategy follows exactly one level of indirection. A pointee that is
//! itself an owning cell (`Box<Box<_>>`), a struct, an array, or a slice is
//! refused with [`CloneError::UnsupportedPointee`] — cloning such pointees
//! is the job of a user-supplied capability, never invented here.

use alloc::boxed::Box;

use crate::error::CloneError;
use crate::optional::Optional;
use crate::probe::Probe;
use crate::shape::Shape;

use super::flat_copy;

unsafe impl<E: Probe> Probe for Box<E> {
    const SHAPE: Shape = Shape::Pointer;

    /// Resolves the pointee's capability through the indirection: an
    /// address-bound result is already a fresh cell and is kept as-is, a
    /// value-bound result gets a new cell allocated for it.
    #[inline]
    fn value_clone(&self) -> Option<Self> {
        if let Some(cell) = (**self).boxed_clone() {
            return Some(cell);
        }
        (**self).value_clone().map(Box::new)
    }

    fn shape_clone(&self) -> Result<Self, CloneError> {
        clone_cell_pointee(&**self).map(Box::new)
    }
}

// The two nilable carriers share one impl: `Option<E>` and the crate's own
// `Optional<T>` participate in the engine identically, so optionals nest.
macro_rules! impl_nilable_probe {
    ($container:ident, $absent:ident, $present:ident) => {
        unsafe impl<E: Probe> Probe for $container<E> {
            const SHAPE: Shape = Shape::Pointer;

            /// Nilness propagates without consulting the pointee; a present
            /// pointee resolves its capability through the indirection.
            #[inline]
            fn value_clone(&self) -> Option<Self> {
                match self {
                    Self::$absent => Some(Self::$absent),
                    Self::$present(pointee) => {
                        if let Some(copy) = pointee.value_clone() {
                            return Some(Self::$present(copy));
                        }
                        pointee.boxed_clone().map(|cell| Self::$present(*cell))
                    }
                }
            }

            fn shape_clone(&self) -> Result<Self, CloneError> {
                match self {
                    Self::$absent => Ok(Self::$absent),
                    Self::$present(pointee) => clone_nilable_pointee(pointee).map(Self::$present),
                }
            }
        }
    };
}

impl_nilable_probe!(Option, None, Some);
impl_nilable_probe!(Optional, Absent, Present);

/// Clones the pointee of an owning cell.
///
/// One level of indirection only: scalar pointees are copied into the new
/// cell, string pointees duplicate their bytes, everything else is refused.
fn clone_cell_pointee<E: Probe>(cell: &E) -> Result<E, CloneError> {
    if E::SHAPE.is_scalar_copyable() {
        // SAFETY: scalar-copyable pointee per the `Probe` contract.
        return Ok(unsafe { flat_copy(cell) });
    }
    match E::SHAPE {
        Shape::Str => cell.shape_clone(),
        _ => Err(CloneError::unsupported_pointee::<E>()),
    }
}

/// Pointee rules for the nilable layer.
///
/// An inner `Pointer`-shaped pointee — the owning cell of `Option<Box<E>>`
/// — is delegated one level, so the pair models a single source-level
/// pointer. Beyond that the cell rules apply unchanged.
fn clone_nilable_pointee<E: Probe>(pointee: &E) -> Result<E, CloneError> {
    if E::SHAPE == Shape::Pointer {
        return pointee.shape_clone();
    }
    clone_cell_pointee(pointee)
}
