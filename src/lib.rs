#![cfg_attr(not(feature = "std"), no_std)]

//! # opt-caps
//!
//! Optional value container with a capability-driven deep-clone engine.
//!
//! ## Architecture
//!
//! [`Optional<T>`] is a plain tagged union: either [`Absent`] or
//! [`Present`]. Its [`deep_clone`](Optional::deep_clone) operation is where
//! the interesting machinery lives — producing an independent copy of a value
//! of statically-unknown shape, without per-type copy code at the call site.
//!
//! ```text
//! Optional::deep_clone
//!        |
//!        v
//! +-------------------------------------------------------------------+
//! |  engine::dispatch                                                 |
//! |  1. scalar fast path      (flat copy, folds away per T)           |
//! |  2. capability fast path  (value-bound, then address-bound)       |
//! |  3. shape dispatch        (string | slice | pointer | fail)       |
//! +-------------------------------------------------------------------+
//!        |                |                 |
//!        v                v                 v
//!   byte duplication  engine::slice   engine::pointer
//! ```
//!
//! Dispatch is two-tiered. Tier 1 is static: every type carries a
//! [`Shape`] constant and capability hooks through the [`Probe`] trait, and
//! because those resolve per monomorphized `T`, the hot paths compile down to
//! straight-line copies. Tier 2 is the shape match, which routes strings,
//! slices, and pointers to their strategies and refuses everything else with
//! a typed [`CloneError`] rather than silently producing an aliasing copy.
//!
//! ## Capabilities
//!
//! Types opt in to cloning through one of two bindings:
//!
//! - [`DeepClone`] — value-bound: `fn deep_clone(&self) -> Self`.
//! - [`DeepCloneBoxed`] — address-bound: `fn deep_clone_boxed(&self) ->
//!   Box<Self>`, the dyn-compatible form that returns a fresh heap cell.
//!
//! The engine discovers either binding through `#[derive(Probe)]`:
//!
//! ```
//! use opt_caps::prelude::*;
//!
//! #[derive(Debug, PartialEq, Probe)]
//! #[probe(clone)]
//! struct Point {
//!     x: f64,
//!     y: f64,
//! }
//!
//! impl DeepClone for Point {
//!     fn deep_clone(&self) -> Self {
//!         Point { x: self.x, y: self.y }
//!     }
//! }
//!
//! let origin = Optional::with_value(Point { x: 0.0, y: 0.0 });
//! let copy = origin.deep_clone()?;
//! assert_eq!(copy, origin);
//! # Ok::<(), opt_caps::CloneError>(())
//! ```
//!
//! Without a capability, structs fail loudly:
//!
//! ```
//! use opt_caps::{CloneError, Optional, Probe};
//!
//! #[derive(Debug, Probe)]
//! struct Opaque {
//!     id: u64,
//! }
//!
//! let value = Optional::with_value(Opaque { id: 7 });
//! assert!(matches!(
//!     value.deep_clone(),
//!     Err(CloneError::Unsupported { .. })
//! ));
//! ```

extern crate alloc;

// =============================================================================
// Layer 0: Classification and capabilities
// =============================================================================
pub mod caps;
pub mod shape;

// =============================================================================
// Layer 1: Capability probe (leaf impls)
// =============================================================================
pub mod probe;

// =============================================================================
// Layer 2: The clone engine
// =============================================================================
pub mod engine;
pub mod error;

// =============================================================================
// Layer 3: The container
// =============================================================================
pub mod optional;

// Re-exports at crate root
pub use caps::{DeepClone, DeepCloneBoxed};
pub use error::CloneError;
pub use optional::{Absent, Optional, Present};
pub use probe::Probe;
pub use shape::Shape;

// Derive macro for `Probe` (lives in the macro namespace, so it coexists
// with the trait of the same name).
pub use macros::Probe;

/// Glob-importable surface.
pub mod prelude {
    pub use crate::caps::{DeepClone, DeepCloneBoxed};
    pub use crate::error::CloneError;
    pub use crate::optional::{Absent, Optional, Present};
    pub use crate::probe::Probe;
    pub use crate::shape::Shape;

    pub use macros::Probe;
}

// Support module for macro-generated code. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use alloc::boxed::Box;
}
