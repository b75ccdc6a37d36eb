use proc_macro::TokenStream;
use syn::{Data, DeriveInput, Fields, FieldsNamed};

/// Convert `syn::Error` into a TokenStream that emits a compiler error.
pub fn to_compile_error(err: syn::Error) -> TokenStream {
    err.to_compile_error().into()
}

/// Create a new `syn::Error` with the given span + message.
pub fn error_spanned<T: quote::ToTokens>(tokens: &T, msg: impl Into<String>) -> syn::Error {
    syn::Error::new_spanned(tokens, msg.into())
}

/// Returns the named fields of a struct, or an error naming the restriction.
pub fn require_named_struct(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields),
            Fields::Unnamed(_) => Err(error_spanned(
                &input.ident,
                "Record can only be derived for structs with named fields.\n\
                 \n\
                 Tuple structs are not supported.",
            )),
            Fields::Unit => Err(error_spanned(
                &input.ident,
                "Record cannot be derived for unit structs.\n\
                 \n\
                 Unit structs have no fields to validate.",
            )),
        },
        Data::Enum(_) => Err(error_spanned(
            &input.ident,
            "Record can only be derived for structs, not enums.",
        )),
        Data::Union(_) => Err(error_spanned(
            &input.ident,
            "Record cannot be derived for unions.",
        )),
    }
}
