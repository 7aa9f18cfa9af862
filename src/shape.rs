//! Runtime shape classification.
//!
//! When no clone capability resolves for a type, the engine falls back to a
//! match over its [`Shape`]: a coarse structural category that tells the
//! dispatcher which built-in strategy applies, if any. Every engine-visible
//! type reports its shape through [`Probe::SHAPE`](crate::Probe::SHAPE), so
//! the classification is a constant, not an inspection.

/// Structural category of a value.
///
/// Used when static typing alone is insufficient for generic dispatch: the
/// dispatcher matches on the shape to pick a strategy. [`Shape::Struct`] and
/// [`Shape::Array`] are classified but terminal — they have no generic
/// strategy and require a user-supplied capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `bool`.
    Bool,
    /// The signed integer family, `i8` through `i128` plus `isize`.
    Int,
    /// The unsigned integer family, `u8` through `u128` plus `usize`.
    Uint,
    /// `f32` and `f64`.
    Float,
    /// `char`.
    Char,
    /// `()` and other zero-information values.
    Unit,
    /// Function pointers, copied as opaque handles.
    Func,
    /// Raw pointers, copied as opaque handles and never dereferenced.
    RawPtr,
    /// Owned or borrowed UTF-8 text.
    Str,
    /// A growable slice of elements (`Vec<E>`).
    Slice,
    /// One level of owning or nilable indirection (`Box<E>`, `Option<E>`).
    Pointer,
    /// A user-defined record. Terminal: cloning requires a capability.
    Struct,
    /// A fixed-size array. Terminal: cloning arrays is unsupported.
    Array,
}

impl Shape {
    /// Whether values of this shape contain no nested ownership and may be
    /// duplicated by a flat copy of their bytes.
    ///
    /// Note that [`Shape::Str`] is deliberately *not* scalar-copyable here:
    /// an owned string's descriptor points at a mutable heap buffer, so a
    /// flat copy would alias it. Strings get their own duplication strategy.
    #[inline]
    pub const fn is_scalar_copyable(self) -> bool {
        matches!(
            self,
            Shape::Bool
                | Shape::Int
                | Shape::Uint
                | Shape::Float
                | Shape::Char
                | Shape::Unit
                | Shape::Func
                | Shape::RawPtr
        )
    }

    /// Whether this shape has no generic strategy and always requires a
    /// user-supplied capability.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Shape::Struct | Shape::Array)
    }
}
