use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Error, Result};

/// Which clone capability the generated probe impl surfaces.
enum Binding {
    NoCapability,
    Value,
    Boxed,
}

pub fn expand_derive_probe(input: DeriveInput) -> Result<TokenStream2> {
    if matches!(input.data, Data::Union(_)) {
        return Err(Error::new_spanned(
            &input.ident,
            "`Probe` cannot be derived for unions",
        ));
    }

    let binding = parse_binding(&input)?;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let hook = match binding {
        Binding::NoCapability => TokenStream2::new(),
        Binding::Value => quote! {
            #[inline]
            fn value_clone(&self) -> ::core::option::Option<Self> {
                ::core::option::Option::Some(::opt_caps::DeepClone::deep_clone(self))
            }
        },
        Binding::Boxed => quote! {
            #[inline]
            fn boxed_clone(&self) -> ::core::option::Option<::opt_caps::__private::Box<Self>> {
                ::core::option::Option::Some(::opt_caps::DeepCloneBoxed::deep_clone_boxed(self))
            }
        },
    };

    // SAFETY of the generated impl: `Shape::Struct` is never flat-copied by
    // the engine, so the derive cannot certify anything unsound.
    Ok(quote! {
        unsafe impl #impl_generics ::opt_caps::Probe for #ident #ty_generics #where_clause {
            const SHAPE: ::opt_caps::Shape = ::opt_caps::Shape::Struct;

            #hook
        }
    })
}

fn parse_binding(input: &DeriveInput) -> Result<Binding> {
    let mut binding = Binding::NoCapability;

    for attr in &input.attrs {
        if !attr.path().is_ident("probe") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            let next = if meta.path.is_ident("clone") {
                Binding::Value
            } else if meta.path.is_ident("boxed_clone") {
                Binding::Boxed
            } else {
                return Err(meta.error("expected `clone` or `boxed_clone`"));
            };
            if !matches!(binding, Binding::NoCapability) {
                return Err(meta.error("conflicting `probe` clone bindings"));
            }
            binding = next;
            Ok(())
        })?;
    }

    Ok(binding)
}
