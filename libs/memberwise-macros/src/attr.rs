//! Parsing of the `#[memberwise(...)]` helper attribute.
//!
//! The only key is `ignore`, a bare flag that excludes a field from the
//! generated equality and hash code. It is valid on fields only and may be
//! written at most once per field.

use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Meta, Path, Token};

pub const ATTR: &str = "memberwise";
pub const IGNORE: &str = "ignore";

const KNOWN_KEYS: &[&str] = &[IGNORE];

/// Minimum Jaro-Winkler similarity for a "did you mean" hint.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Parses the marker on a single field.
///
/// Returns the span of the `ignore` keyword when the field is marked.
/// `field` is the field path used in diagnostics (`x`, `0`, `Variant.x`).
pub fn parse_field_marker(attrs: &[Attribute], field: &str) -> syn::Result<Option<Span>> {
    let mut marker: Option<Span> = None;
    let mut errors: Option<syn::Error> = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
        let result = reject_empty(attr).and_then(|()| {
            attr.parse_nested_meta(|meta| {
                if !meta.path.is_ident(IGNORE) {
                    return Err(unknown_key(&meta.path));
                }
                reject_arguments(&meta)?;

                let span = meta.path.span();
                if marker.is_some() {
                    return Err(syn::Error::new(
                        span,
                        format!("duplicate `#[memberwise(ignore)]` on field `{field}`"),
                    ));
                }
                marker = Some(span);
                Ok(())
            })
        });

        if let Err(err) = result {
            push_error(&mut errors, err);
        }
    }

    match errors {
        Some(err) => Err(err),
        None => Ok(marker),
    }
}

/// Rejects `#[memberwise(...)]` on anything that is not a field
/// (the container itself or an enum variant).
pub fn reject_outside_fields(attrs: &[Attribute]) -> syn::Result<()> {
    let mut errors: Option<syn::Error> = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
        let result = reject_empty(attr).and_then(|()| {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident(IGNORE) {
                    Err(syn::Error::new(
                        meta.path.span(),
                        "`#[memberwise(ignore)]` can only be applied to fields",
                    ))
                } else {
                    Err(unknown_key(&meta.path))
                }
            })
        });

        if let Err(err) = result {
            push_error(&mut errors, err);
        }
    }

    errors.map_or(Ok(()), Err)
}

/// Appends `err` to the accumulated error, if any.
pub fn push_error(slot: &mut Option<syn::Error>, err: syn::Error) {
    match slot {
        Some(existing) => existing.combine(err),
        None => *slot = Some(err),
    }
}

/// `#[memberwise()]` parses as an empty list and would otherwise be a no-op.
fn reject_empty(attr: &Attribute) -> syn::Result<()> {
    match &attr.meta {
        Meta::List(list) if list.tokens.is_empty() => Err(syn::Error::new(
            list.path.span(),
            format!("expected `{IGNORE}`"),
        )),
        _ => Ok(()),
    }
}

fn reject_arguments(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(Token![=]) || meta.input.peek(syn::token::Paren) {
        return Err(syn::Error::new(
            meta.path.span(),
            "`ignore` does not take any arguments",
        ));
    }
    Ok(())
}

fn unknown_key(path: &Path) -> syn::Error {
    let key = path_to_string(path);
    let message = match suggest(&key) {
        Some(candidate) => {
            format!("unknown memberwise attribute `{key}`; did you mean `{candidate}`?")
        }
        None => format!("unknown memberwise attribute `{key}`; expected `{IGNORE}`"),
    };
    syn::Error::new(path.span(), message)
}

fn suggest(key: &str) -> Option<&'static str> {
    KNOWN_KEYS
        .iter()
        .copied()
        .find(|known| strsim::jaro_winkler(key, known) >= SUGGESTION_THRESHOLD)
}

fn path_to_string(path: &Path) -> String {
    path.segments
        .iter()
        .map(|seg| seg.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}
