use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, Field, Visibility, parse_macro_input, parse_quote};

use crate::support::{attrs, diag};

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let descriptors = diag::require_named_struct(&input)?
        .named
        .iter()
        .map(descriptor)
        .collect::<syn::Result<Vec<_>>>()?;

    for param in input.generics.type_params_mut() {
        param.bounds.push(parse_quote!(::fieldcheck::Inspect));
    }

    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::fieldcheck::Record for #struct_name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::fieldcheck::Field<'_>> {
                ::std::vec![#(#descriptors),*]
            }
        }

        impl #impl_generics ::fieldcheck::Inspect for #struct_name #ty_generics #where_clause {
            fn inspect(&self) -> ::fieldcheck::FieldValue<'_> {
                ::fieldcheck::FieldValue::Record(self)
            }
        }
    })
}

/// `Field::new(..)` expression for one struct field.
fn descriptor(field: &Field) -> syn::Result<TokenStream2> {
    let Some(ident) = &field.ident else {
        return Err(diag::error_spanned(field, "expected a named field"));
    };

    let name = ident.unraw().to_string();
    let exported = matches!(field.vis, Visibility::Public(_));
    let annotation = match attrs::annotation(&field.attrs)? {
        Some(lit) => quote!(::std::option::Option::Some(#lit)),
        None => quote!(::std::option::Option::None),
    };

    Ok(quote! {
        ::fieldcheck::Field::new(
            #name,
            #exported,
            #annotation,
            ::fieldcheck::Inspect::inspect(&self.#ident),
        )
    })
}
