//! Input model shared by the memberwise derives.
//!
//! The `DeriveInput` is validated once and reduced to the list of fields
//! with their resolved marker state. Code generators only consume this model.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::{
    Attribute, Data, DeriveInput, Fields, GenericParam, Generics, Meta, Path, Token, parse_quote,
};

use crate::attr;

/// A struct or enum accepted by the memberwise derives.
pub struct Container<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub body: Body,
    /// `#[repr(packed)]`: fields may be unaligned and are read by copy.
    pub packed: bool,
}

pub enum Body {
    Struct(Vec<Member>),
    Enum(Vec<Variant>),
}

pub struct Variant {
    pub ident: Ident,
    pub members: Vec<Member>,
}

/// A single field and whether it carries `#[memberwise(ignore)]`.
pub struct Member {
    /// Accessor used in generated code (`x` or `0`).
    pub member: syn::Member,
    /// Stable path reported through the field descriptors.
    pub path: String,
    /// Position within the struct or variant, used for binding names.
    pub index: usize,
    pub ignored: bool,
}

impl Member {
    pub fn self_binding(&self) -> Ident {
        format_ident!("__self_{}", self.index)
    }

    pub fn other_binding(&self) -> Ident {
        format_ident!("__other_{}", self.index)
    }
}

impl<'a> Container<'a> {
    /// Validates the input and resolves every marker.
    ///
    /// All attachment errors of the container are collected before returning.
    pub fn from_ast(input: &'a DeriveInput, derive: &str) -> syn::Result<Self> {
        let mut errors: Option<syn::Error> = None;

        if let Err(err) = attr::reject_outside_fields(&input.attrs) {
            attr::push_error(&mut errors, err);
        }

        let body = match &input.data {
            Data::Struct(data) => Body::Struct(collect_members(&data.fields, None, &mut errors)),
            Data::Enum(data) => Body::Enum(
                data.variants
                    .iter()
                    .map(|variant| {
                        if let Err(err) = attr::reject_outside_fields(&variant.attrs) {
                            attr::push_error(&mut errors, err);
                        }
                        Variant {
                            ident: variant.ident.clone(),
                            members: collect_members(
                                &variant.fields,
                                Some(&variant.ident),
                                &mut errors,
                            ),
                        }
                    })
                    .collect(),
            ),
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    format!("`#[derive({derive})]` cannot be applied to unions"),
                ));
            }
        };

        match errors {
            Some(err) => Err(err),
            None => Ok(Self {
                ident: &input.ident,
                generics: &input.generics,
                body,
                packed: is_packed(&input.attrs),
            }),
        }
    }

    /// Every field in declaration order, variants included.
    pub fn members(&self) -> Box<dyn Iterator<Item = &Member> + '_> {
        match &self.body {
            Body::Struct(members) => Box::new(members.iter()),
            Body::Enum(variants) => Box::new(variants.iter().flat_map(|v| v.members.iter())),
        }
    }

    /// Place expression reading `member` of `receiver` (`self` or `other`).
    ///
    /// Packed fields are copied out with `{ .. }` so that no reference to an
    /// unaligned field is taken; their types must be `Copy`.
    pub fn field_access(&self, receiver: &Ident, member: &Member) -> TokenStream {
        let member = &member.member;
        if self.packed {
            quote! { &{ #receiver.#member } }
        } else {
            quote! { &#receiver.#member }
        }
    }

    /// Clones the generics, adding `bounds` to every type parameter.
    pub fn bounded_generics(&self, bounds: &[Path]) -> Generics {
        let mut generics = self.generics.clone();
        for param in &mut generics.params {
            if let GenericParam::Type(ty) = param {
                for bound in bounds {
                    ty.bounds.push(parse_quote!(#bound));
                }
            }
        }
        generics
    }
}

fn is_packed(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("repr"))
        .filter_map(|attr| {
            attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
                .ok()
        })
        .flatten()
        .any(|meta| meta.path().is_ident("packed"))
}

fn collect_members(
    fields: &Fields,
    variant: Option<&Ident>,
    errors: &mut Option<syn::Error>,
) -> Vec<Member> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let (member, name) = match &field.ident {
                Some(ident) => (syn::Member::Named(ident.clone()), ident.unraw().to_string()),
                None => (syn::Member::Unnamed(syn::Index::from(index)), index.to_string()),
            };
            let path = match variant {
                Some(variant) => format!("{}.{name}", variant.unraw()),
                None => name,
            };

            let ignored = match attr::parse_field_marker(&field.attrs, &path) {
                Ok(marker) => marker.is_some(),
                Err(err) => {
                    attr::push_error(errors, err);
                    false
                }
            };

            Member {
                member,
                path,
                index,
                ignored,
            }
        })
        .collect()
}

/// Pattern binding the compared fields of `variant` through `Self::Variant { .. }`.
///
/// Braced patterns match named, tuple and unit variants alike.
pub fn variant_pattern(variant: &Variant, binding: fn(&Member) -> Ident) -> TokenStream {
    let ident = &variant.ident;
    let fields = variant
        .members
        .iter()
        .filter(|m| !m.ignored)
        .map(|m| {
            let member = &m.member;
            let name = binding(m);
            quote! { #member: #name }
        });
    quote! { Self::#ident { #(#fields,)* .. } }
}
