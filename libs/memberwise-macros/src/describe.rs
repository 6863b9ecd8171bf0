use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_quote};

use crate::container::Container;
use crate::diagnostics;
use crate::{eq, hash};

pub fn expand_derive_memberwise(input: &DeriveInput) -> TokenStream {
    match Container::from_ast(input, "Memberwise") {
        Ok(container) => expand(&container),
        Err(err) => diagnostics::report(err),
    }
}

/// Generates `impl memberwise::Memberwise`.
///
/// The descriptor table and the `is_ignored` match are emitted from the
/// same resolved markers as the comparison bodies, so they cannot disagree.
pub fn expand(container: &Container<'_>) -> TokenStream {
    let ident = container.ident;
    let generics = container.bounded_generics(&[
        parse_quote!(::core::cmp::PartialEq),
        parse_quote!(::core::hash::Hash),
    ]);
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (_, ty_generics, _) = container.generics.split_for_impl();

    let descriptors = container.members().map(|m| {
        let path = &m.path;
        let ignored = m.ignored;
        quote! { ::memberwise::Field::new(#path, #ignored) }
    });

    let ignored_paths: Vec<&str> = container
        .members()
        .filter(|m| m.ignored)
        .map(|m| m.path.as_str())
        .collect();
    let is_ignored = if ignored_paths.is_empty() {
        quote! {
            let _ = path;
            false
        }
    } else {
        quote! { ::core::matches!(path, #(#ignored_paths)|*) }
    };

    let eq_body = eq::body(container);
    let hash_body = hash::body(container);

    quote! {
        #[automatically_derived]
        impl #impl_generics ::memberwise::Memberwise for #ident #ty_generics #where_clause {
            const FIELDS: &'static [::memberwise::Field] = &[#(#descriptors),*];

            #[inline]
            fn is_ignored(path: &str) -> bool {
                #is_ignored
            }

            fn memberwise_eq(&self, other: &Self) -> bool {
                #eq_body
            }

            fn memberwise_hash<__H: ::core::hash::Hasher>(&self, state: &mut __H) {
                #hash_body
            }
        }
    }
}
