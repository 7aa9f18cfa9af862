//! Procedural macros for the opt-caps capability system.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod probe;

/// Derives the `Probe` trait for a user-defined type.
///
/// The bare derive classifies the type as `Shape::Struct` with no clone
/// capability — the terminal case that produces an `Unsupported` error at
/// clone time. A `#[probe(...)]` attribute wires a capability hook instead:
///
/// - `#[probe(clone)]` surfaces the type's `DeepClone` impl (value-bound);
/// - `#[probe(boxed_clone)]` surfaces its `DeepCloneBoxed` impl
///   (address-bound).
///
/// The two bindings are mutually exclusive; the corresponding capability
/// trait must be implemented by hand.
#[proc_macro_derive(Probe, attributes(probe))]
pub fn derive_probe(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    probe::expand_derive_probe(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
