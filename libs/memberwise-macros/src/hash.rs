use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, parse_quote};

use crate::container::{Body, Container, Member, variant_pattern};
use crate::diagnostics;

pub fn expand_derive_memberwise_hash(input: &DeriveInput) -> TokenStream {
    match Container::from_ast(input, "MemberwiseHash") {
        Ok(container) => expand(&container),
        Err(err) => diagnostics::report(err),
    }
}

/// Generates `impl Hash` feeding every field without the marker.
pub fn expand(container: &Container<'_>) -> TokenStream {
    let ident = container.ident;
    let generics = container.bounded_generics(&[parse_quote!(::core::hash::Hash)]);
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (_, ty_generics, _) = container.generics.split_for_impl();
    let body = body(container);

    quote! {
        #[automatically_derived]
        impl #impl_generics ::core::hash::Hash for #ident #ty_generics #where_clause {
            fn hash<__H: ::core::hash::Hasher>(&self, state: &mut __H) {
                #body
            }
        }
    }
}

/// Statements writing the compared fields of `self` into `state`.
///
/// Enums write their discriminant first so that equal payloads in
/// different variants hash differently.
pub fn body(container: &Container<'_>) -> TokenStream {
    match &container.body {
        Body::Struct(members) => {
            let receiver = format_ident!("self");
            let writes: Vec<TokenStream> = members
                .iter()
                .filter(|m| !m.ignored)
                .map(|m| {
                    let field = container.field_access(&receiver, m);
                    quote! { ::core::hash::Hash::hash(#field, state); }
                })
                .collect();
            if writes.is_empty() {
                quote! { let _ = state; }
            } else {
                quote! { #(#writes)* }
            }
        }
        Body::Enum(variants) if variants.is_empty() => quote! {
            let _ = state;
            match *self {}
        },
        Body::Enum(variants) => {
            let arms = variants.iter().map(|variant| {
                let pattern = variant_pattern(variant, Member::self_binding);
                let writes = variant.members.iter().filter(|m| !m.ignored).map(|m| {
                    let binding = m.self_binding();
                    quote! { ::core::hash::Hash::hash(#binding, state); }
                });
                quote! { #pattern => { #(#writes)* } }
            });
            quote! {
                ::core::hash::Hash::hash(&::core::mem::discriminant(self), state);
                match self {
                    #(#arms)*
                }
            }
        }
    }
}
