//! Clone-failure taxonomy.

use core::any::type_name;

use crate::probe::Probe;
use crate::shape::Shape;

/// Reasons the deep-clone engine refuses a value.
///
/// Every failure indicates a missing capability — a programming-time gap the
/// type's author must close, not a transient fault. Failures are therefore
/// never retried, and they leave no partial state: the caller keeps the
/// original value untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CloneError {
    /// Neither a capability nor a built-in strategy applies to the type.
    #[error(
        "`{type_name}` (shape {shape:?}) has no deep-clone strategy; \
         implement `DeepClone` or `DeepCloneBoxed` for it"
    )]
    Unsupported {
        /// The refused type.
        type_name: &'static str,
        /// Its shape classification.
        shape: Shape,
    },

    /// A slice element exposes no usable clone binding.
    #[error(
        "element {index} of a slice of `{type_name}` (shape {shape:?}) \
         has no deep-clone strategy"
    )]
    UnsupportedElement {
        /// The element type.
        type_name: &'static str,
        /// Its shape classification.
        shape: Shape,
        /// Index of the first element the strategy could not clone.
        index: usize,
    },

    /// The pointee class is outside what the pointer strategy supports.
    #[error("cannot clone through a pointer to `{type_name}` (shape {shape:?})")]
    UnsupportedPointee {
        /// The pointee type.
        type_name: &'static str,
        /// Its shape classification.
        shape: Shape,
    },

    /// An address-bound element clone could not obtain an address.
    ///
    /// Unreachable from the built-in probe impls — slice borrows always
    /// provide element addresses — but kept distinct for external impls over
    /// storage without them (packed or bit-level containers).
    #[error("element {index} of `{type_name}` is not addressable for an address-bound clone")]
    UnaddressableElement {
        /// The container type.
        type_name: &'static str,
        /// Index of the unaddressable element.
        index: usize,
    },
}

impl CloneError {
    pub(crate) fn unsupported<T: Probe>() -> Self {
        CloneError::Unsupported {
            type_name: type_name::<T>(),
            shape: T::SHAPE,
        }
    }

    pub(crate) fn unsupported_element<E: Probe>(index: usize) -> Self {
        CloneError::UnsupportedElement {
            type_name: type_name::<E>(),
            shape: E::SHAPE,
            index,
        }
    }

    pub(crate) fn unsupported_pointee<E: Probe>() -> Self {
        CloneError::UnsupportedPointee {
            type_name: type_name::<E>(),
            shape: E::SHAPE,
        }
    }

    /// Constructor for external probe impls whose storage provides no
    /// element addresses.
    pub fn unaddressable_element<T>(index: usize) -> Self {
        CloneError::UnaddressableElement {
            type_name: type_name::<T>(),
            index,
        }
    }
}
