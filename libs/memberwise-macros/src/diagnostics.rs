use proc_macro2::TokenStream;
use proc_macro_error2::emit_error;

/// Emits every error collected for a container and expands to nothing.
///
/// Must run inside a `#[proc_macro_error]` entry point.
#[allow(clippy::needless_pass_by_value)] // syn::Error is consumed by iteration
pub fn report(err: syn::Error) -> TokenStream {
    for error in err {
        emit_error!(error.span(), "{}", error);
    }
    TokenStream::new()
}
