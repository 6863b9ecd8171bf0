use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, parse_quote};

use crate::container::{Body, Container, Member, variant_pattern};
use crate::diagnostics;

pub fn expand_derive_memberwise_eq(input: &DeriveInput) -> TokenStream {
    match Container::from_ast(input, "MemberwiseEq") {
        Ok(container) => expand(&container),
        Err(err) => diagnostics::report(err),
    }
}

/// Generates `impl PartialEq` comparing every field without the marker.
pub fn expand(container: &Container<'_>) -> TokenStream {
    let ident = container.ident;
    let generics = container.bounded_generics(&[parse_quote!(::core::cmp::PartialEq)]);
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (_, ty_generics, _) = container.generics.split_for_impl();
    let body = body(container);

    quote! {
        #[automatically_derived]
        impl #impl_generics ::core::cmp::PartialEq for #ident #ty_generics #where_clause {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                #body
            }
        }
    }
}

/// Boolean expression over `self` and `other`.
///
/// Fields are compared in declaration order and the first mismatch
/// short-circuits. Enum values of different variants are never equal.
pub fn body(container: &Container<'_>) -> TokenStream {
    match &container.body {
        Body::Struct(members) => {
            let compared: Vec<&Member> = members.iter().filter(|m| !m.ignored).collect();
            if compared.is_empty() {
                return quote! {
                    let _ = other;
                    true
                };
            }
            let (lhs, rhs) = (format_ident!("self"), format_ident!("other"));
            let checks = compared.iter().map(|m| {
                let a = container.field_access(&lhs, m);
                let b = container.field_access(&rhs, m);
                quote! { ::core::cmp::PartialEq::eq(#a, #b) }
            });
            quote! { true #(&& #checks)* }
        }
        Body::Enum(variants) if variants.is_empty() => quote! {
            let _ = other;
            match *self {}
        },
        Body::Enum(variants) => {
            let arms = variants.iter().map(|variant| {
                let lhs = variant_pattern(variant, Member::self_binding);
                let rhs = variant_pattern(variant, Member::other_binding);
                let checks = variant
                    .members
                    .iter()
                    .filter(|m| !m.ignored)
                    .map(|m| {
                        let a = m.self_binding();
                        let b = m.other_binding();
                        quote! { && ::core::cmp::PartialEq::eq(#a, #b) }
                    });
                quote! { (#lhs, #rhs) => true #(#checks)* }
            });
            quote! {
                match (self, other) {
                    #(#arms,)*
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    }
}
