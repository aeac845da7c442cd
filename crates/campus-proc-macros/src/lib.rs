// campus-connect/campus-proc-macros
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields};

/// Implements `From<&AppDependencies>` for a service struct.
///
/// Fields marked with `#[inject]` are cloned from the field of the same name in
/// `AppDependencies`, all other fields are initialized with `Default::default()`.
#[proc_macro_derive(InjectDependencies, attributes(inject))]
pub fn inject_dependencies(stream: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);

    match expand_inject_dependencies(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_inject_dependencies(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new(
            input.ident.span(),
            "InjectDependencies can only be derived for structs",
        ));
    };

    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new(
            data.fields.span(),
            "InjectDependencies requires named fields",
        ));
    };

    let initializers = fields
        .named
        .iter()
        .map(field_initializer)
        .collect::<syn::Result<Vec<_>>>()?;

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics From<&crate::app::deps::AppDependencies> for #name #ty_generics #where_clause {
            fn from(deps: &crate::app::deps::AppDependencies) -> Self {
                Self {
                    #(#initializers,)*
                }
            }
        }
    })
}

fn field_initializer(field: &Field) -> syn::Result<TokenStream> {
    let Some(ident) = &field.ident else {
        return Err(syn::Error::new(field.span(), "expected a named field"));
    };

    let mut injected = false;
    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("inject")) {
        // `#[inject]` takes no arguments.
        attr.meta.require_path_only()?;
        injected = true;
    }

    Ok(if injected {
        quote! { #ident: deps.#ident.clone() }
    } else {
        quote! { #ident: ::std::default::Default::default() }
    })
}
