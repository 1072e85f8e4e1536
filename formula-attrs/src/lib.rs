mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// The information of the error is provided through the `error` attribute:
/// ```
/// use formula_attrs::ErrorKind;
/// use formula_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(category = Lex, message = "unexpected character", labels = ["here"])]
/// pub struct Foo;
///
/// assert_eq!(Foo.message(), "unexpected character");
/// ```
///
/// The following tags are available:
///
/// | Tag        | Description                                                                  |
/// | ---------- | ---------------------------------------------------------------------------- |
/// | `category` | The stage the error belongs to: `Lex`, `Token`, or `Math`. Required.         |
/// | `message`  | The message displayed at the top of the error when it is displayed.          |
/// | `labels`   | An array of label texts, one per span of the error.                          |
/// | `help`     | Optional help text for the error, describing what the user can do to fix it. |
///
/// `message`, `labels`, and `help` accept expressions evaluating to something that implements
/// [`ToString`]. For structs with named fields, the expressions are evaluated with the fields of
/// the struct in scope (tuple structs are not supported).
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }
    }.into()
}
