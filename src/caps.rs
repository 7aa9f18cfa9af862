//! User-facing clone capabilities.
//!
//! A type opts in to deep cloning by implementing exactly one of the two
//! traits below and surfacing it through `#[derive(Probe)]` (see the crate
//! docs). The two traits model the two receiver bindings the engine
//! distinguishes: a value-bound capability is callable on any instance and
//! returns by value; an address-bound capability reaches the receiver
//! through its address and hands back an independently owned heap cell.

use alloc::boxed::Box;

/// Value-bound deep-clone capability.
///
/// Ownership contract: the returned value must own all of its mutable
/// sub-storage independently of the receiver. The engine treats the
/// implementation as a black box and trusts it fully — it does not verify
/// that the result is actually independent.
pub trait DeepClone: Sized {
    /// Returns a deep copy of `self`.
    fn deep_clone(&self) -> Self;
}

/// Address-bound deep-clone capability.
///
/// This is the dyn-compatible form: no `Sized` bound, and the copy arrives
/// as a fresh allocation the caller owns outright. Prefer [`DeepClone`]
/// unless the capability must be callable through a trait object or the
/// clones are stored boxed anyway — slices of boxed elements invoke this
/// form directly and keep the returned cell as-is.
///
/// The ownership contract is the same as for [`DeepClone`].
pub trait DeepCloneBoxed {
    /// Returns a deep copy of `self` in a fresh heap cell.
    fn deep_clone_boxed(&self) -> Box<Self>;
}
