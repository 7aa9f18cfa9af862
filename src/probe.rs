//! The capability probe.
//!
//! [`Probe`] is the single trait the clone engine dispatches on. It carries
//! a type's [`Shape`] classification as a constant and three hooks that
//! resolve, per monomorphized type, to either a capability invocation or a
//! built-in strategy. The default hook bodies inline to constants, so
//! probing a type without capabilities costs nothing and never forces a
//! boxing or type-erasure conversion.
//!
//! This module holds the trait and the leaf impls: scalar primitives,
//! strings, function pointers, raw pointers, and fixed-size arrays. The
//! container impls (`Vec`, `Box`, `Option`, `Optional`) live next to their
//! strategies in [`crate::engine`].

use alloc::boxed::Box;
use alloc::string::String;

use crate::error::CloneError;
use crate::shape::Shape;

/// Per-type facts the clone engine dispatches on.
///
/// Implement this via `#[derive(Probe)]` for user-defined types, or manually
/// for named scalar types (see below). The derive wires the capability hooks
/// to the type's [`DeepClone`](crate::DeepClone) or
/// [`DeepCloneBoxed`](crate::DeepCloneBoxed) impl.
///
/// # Named scalar types
///
/// A newtype over a primitive can claim its underlying shape with a manual
/// impl, which routes it through the scalar fast path:
///
/// ```
/// use opt_caps::{Optional, Probe, Shape};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Meters(f64);
///
/// // SAFETY: `Meters` is a plain `f64`, no drop glue, no indirection.
/// unsafe impl Probe for Meters {
///     const SHAPE: Shape = Shape::Float;
/// }
///
/// let distance = Optional::with_value(Meters(1.5));
/// assert_eq!(distance.deep_clone().unwrap(), distance);
/// ```
///
/// # Safety
///
/// `SHAPE` must classify `Self` accurately. In particular, a shape for which
/// [`Shape::is_scalar_copyable`] returns `true` certifies that `Self` has no
/// drop glue and owns no indirection, and the engine will duplicate such
/// values by a flat copy of their bytes.
pub unsafe trait Probe: Sized {
    /// Static classification of `Self`.
    const SHAPE: Shape;

    /// Resolves the value-bound clone capability, if the type opted in.
    #[inline]
    fn value_clone(&self) -> Option<Self> {
        None
    }

    /// Resolves the address-bound clone capability, if the type opted in.
    #[inline]
    fn boxed_clone(&self) -> Option<Box<Self>> {
        None
    }

    /// Shape-specific strategy used when no capability resolves.
    #[inline]
    fn shape_clone(&self) -> Result<Self, CloneError> {
        Err(CloneError::unsupported::<Self>())
    }
}

// =============================================================================
// Scalar primitives
// =============================================================================

macro_rules! impl_scalar_probe {
    ($($ty:ty => $shape:ident),* $(,)?) => {$(
        unsafe impl Probe for $ty {
            const SHAPE: Shape = Shape::$shape;

            #[inline]
            fn shape_clone(&self) -> Result<Self, CloneError> {
                Ok(*self)
            }
        }
    )*};
}

impl_scalar_probe! {
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    i128 => Int,
    isize => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    u128 => Uint,
    usize => Uint,
    f32 => Float,
    f64 => Float,
    char => Char,
    () => Unit,
}

// =============================================================================
// Opaque handles: function pointers and raw pointers
// =============================================================================

macro_rules! impl_fn_probe {
    ($($arg:ident),*) => {
        unsafe impl<Ret $(, $arg)*> Probe for fn($($arg),*) -> Ret {
            const SHAPE: Shape = Shape::Func;

            #[inline]
            fn shape_clone(&self) -> Result<Self, CloneError> {
                Ok(*self)
            }
        }
    };
}

impl_fn_probe!();
impl_fn_probe!(A1);
impl_fn_probe!(A1, A2);
impl_fn_probe!(A1, A2, A3);
impl_fn_probe!(A1, A2, A3, A4);

// Raw pointers are handles, not owned indirections: the engine copies the
// address and never dereferences it.
unsafe impl<T> Probe for *const T {
    const SHAPE: Shape = Shape::RawPtr;

    #[inline]
    fn shape_clone(&self) -> Result<Self, CloneError> {
        Ok(*self)
    }
}

unsafe impl<T> Probe for *mut T {
    const SHAPE: Shape = Shape::RawPtr;

    #[inline]
    fn shape_clone(&self) -> Result<Self, CloneError> {
        Ok(*self)
    }
}

// =============================================================================
// Strings
// =============================================================================

unsafe impl Probe for String {
    const SHAPE: Shape = Shape::Str;

    // A flat copy of the descriptor would alias the heap buffer, so the
    // strategy duplicates the backing bytes explicitly.
    fn shape_clone(&self) -> Result<Self, CloneError> {
        let mut copy = String::with_capacity(self.len());
        copy.push_str(self);
        Ok(copy)
    }
}

unsafe impl Probe for &'static str {
    const SHAPE: Shape = Shape::Str;

    // An immutable borrow: copying the descriptor cannot alias mutable
    // state, so no byte duplication is needed.
    #[inline]
    fn shape_clone(&self) -> Result<Self, CloneError> {
        Ok(*self)
    }
}

// =============================================================================
// Fixed-size arrays
// =============================================================================

// Classified but terminal: the default `shape_clone` reports the array as
// unsupported, and the dispatcher refuses it even earlier.
unsafe impl<E: Probe, const N: usize> Probe for [E; N] {
    const SHAPE: Shape = Shape::Array;
}
