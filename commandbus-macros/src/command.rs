use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, DeriveInput, LitStr, Result, parse_macro_input};

/// #[derive(Command)] 宏实现
pub(crate) fn expand(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_derive(&input) {
        Ok(out) => out.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_derive(input: &DeriveInput) -> Result<TokenStream2> {
    let name = parse_command_name(&input.attrs)?;

    let name_expr = match name {
        Some(lit) => quote! { ::core::option::Option::Some(#lit) },
        None => quote! { ::core::option::Option::None },
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::commandbus::command::Command for #ident #ty_generics #where_clause {
            const NAME: ::core::option::Option<&'static str> = #name_expr;
        }
    })
}

// 解析 #[command(name = "...")]，允许出现多次但 name 只能给一次
fn parse_command_name(attrs: &[Attribute]) -> Result<Option<LitStr>> {
    let mut name: Option<LitStr> = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("command")) {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("name") {
                return Err(meta.error("unsupported #[command] argument, expected `name = \"...\"`"));
            }
            if name.is_some() {
                return Err(meta.error("duplicate `name` in #[command]"));
            }
            let lit: LitStr = meta.value()?.parse()?;
            if lit.value().is_empty() {
                return Err(syn::Error::new(lit.span(), "command name must not be empty"));
            }
            name = Some(lit);
            Ok(())
        })?;
    }

    Ok(name)
}
