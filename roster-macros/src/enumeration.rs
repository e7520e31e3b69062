//! The `enumeration!` macro.
//!
//! Parses a struct-like declaration and generates:
//! - a unit struct carrying the declared attributes,
//! - one associated `const` per member,
//! - an `Enumeration` impl backed by a lazily built static registry that
//!   extends the parent's registry when a parent is named.

use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use std::collections::{HashMap, HashSet};
use syn::{
    Attribute, Ident, LitBool, LitInt, LitStr, Path, Token, Visibility, braced,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
};

/// A member's declared value.
pub(crate) enum MemberValue {
    Str(LitStr),
    Int(i64),
    Bool(LitBool),
    Symbol(Ident),
}

impl MemberValue {
    /// Canonical text used to detect duplicate values at expansion time.
    fn fingerprint(&self) -> String {
        match self {
            MemberValue::Str(lit) => format!("str:{}", lit.value()),
            MemberValue::Int(n) => format!("int:{}", n),
            MemberValue::Bool(lit) => format!("bool:{}", lit.value),
            MemberValue::Symbol(ident) => format!("sym:{}", ident),
        }
    }

    fn to_tokens(&self) -> TokenStream2 {
        match self {
            MemberValue::Str(lit) => quote! { ::roster::Value::from_static_str(#lit) },
            MemberValue::Int(n) => {
                // Emitted as `-` plus an unsigned literal so `i64::MIN` stays in range.
                let magnitude = Literal::u64_unsuffixed(n.unsigned_abs());
                if *n < 0 {
                    quote! { ::roster::Value::Int(-#magnitude) }
                } else {
                    quote! { ::roster::Value::Int(#magnitude) }
                }
            }
            MemberValue::Bool(lit) => quote! { ::roster::Value::Bool(#lit) },
            MemberValue::Symbol(ident) => {
                let name = ident.to_string();
                quote! { ::roster::Value::symbol(#name) }
            }
        }
    }
}

impl Parse for MemberValue {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(LitStr) {
            Ok(MemberValue::Str(input.parse()?))
        } else if lookahead.peek(LitInt) || lookahead.peek(Token![-]) {
            let negative = input.parse::<Option<Token![-]>>()?.is_some();
            parse_int(negative, input.parse()?).map(MemberValue::Int)
        } else if lookahead.peek(LitBool) {
            Ok(MemberValue::Bool(input.parse()?))
        } else if lookahead.peek(Token![:]) {
            input.parse::<Token![:]>()?;
            Ok(MemberValue::Symbol(input.parse()?))
        } else {
            Err(lookahead.error())
        }
    }
}

/// Parse an unsuffixed integer literal, negated as a whole.
fn parse_int(negative: bool, lit: LitInt) -> syn::Result<i64> {
    if !lit.suffix().is_empty() {
        return Err(syn::Error::new(
            lit.span(),
            format!(
                "integer values are stored as i64; drop the `{}` suffix",
                lit.suffix()
            ),
        ));
    }

    let digits = if negative {
        format!("-{}", lit.base10_digits())
    } else {
        lit.base10_digits().to_string()
    };
    digits
        .parse::<i64>()
        .map_err(|_| syn::Error::new(lit.span(), format!("{} does not fit in an i64", digits)))
}

/// One `KEY` or `KEY = value` line.
pub(crate) struct Member {
    attrs: Vec<Attribute>,
    key: Ident,
    value: Option<MemberValue>,
}

impl Parse for Member {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let key: Ident = input.parse()?;
        let value = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            Some(input.parse()?)
        } else {
            None
        };
        Ok(Member { attrs, key, value })
    }
}

/// The whole declaration.
pub(crate) struct EnumerationInput {
    attrs: Vec<Attribute>,
    vis: Visibility,
    name: Ident,
    parent: Option<Path>,
    members: Punctuated<Member, Token![,]>,
}

impl Parse for EnumerationInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let name: Ident = input.parse()?;

        let parent = if input.peek(Token![:]) {
            input.parse::<Token![:]>()?;
            Some(input.parse()?)
        } else {
            None
        };

        let content;
        braced!(content in input);
        let members = content.parse_terminated(Member::parse, Token![,])?;

        Ok(EnumerationInput {
            attrs,
            vis,
            name,
            parent,
            members,
        })
    }
}

/// Reject keys or values repeated within the declaration itself.
///
/// Clashes with a parent's members can only be seen when the registry is
/// built.
fn check_duplicates(input: &EnumerationInput) -> syn::Result<()> {
    let mut keys = HashSet::new();
    let mut values = HashMap::new();

    for member in &input.members {
        let key = member.key.to_string();
        if !keys.insert(key.clone()) {
            return Err(syn::Error::new(
                member.key.span(),
                format!("the constant {}::{} has already been defined", input.name, key),
            ));
        }

        let fingerprint = match &member.value {
            Some(value) => value.fingerprint(),
            None => format!("sym:{}", key),
        };
        if let Some(previous) = values.insert(fingerprint, key.clone()) {
            return Err(syn::Error::new(
                member.key.span(),
                format!(
                    "{}::{} repeats the value of {}::{}",
                    input.name, key, input.name, previous
                ),
            ));
        }
    }

    Ok(())
}

/// Implementation of the `enumeration!` macro.
pub fn enumeration_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as EnumerationInput);

    if let Err(err) = check_duplicates(&input) {
        return err.to_compile_error().into();
    }

    let EnumerationInput {
        attrs,
        vis,
        name,
        parent,
        members,
    } = &input;
    let name_str = name.to_string();

    let consts = members.iter().map(|member| {
        let key = &member.key;
        let member_attrs = &member.attrs;
        let value = match &member.value {
            Some(value) => value.to_tokens(),
            None => {
                let key_str = key.to_string();
                quote! { ::roster::Value::symbol(#key_str) }
            }
        };
        quote! {
            #(#member_attrs)*
            #[allow(non_upper_case_globals)]
            pub const #key: ::roster::Value = #value;
        }
    });

    let defines = members.iter().map(|member| {
        let key = &member.key;
        let key_str = key.to_string();
        quote! {
            builder.define_mut(#key_str, ::core::option::Option::Some(#name::#key))?;
        }
    });

    let builder_init = match parent {
        Some(parent) => quote! {
            ::roster::RegistryBuilder::extending(
                #name_str,
                ::std::sync::Arc::clone(<#parent as ::roster::Enumeration>::registry()),
            )
        },
        None => quote! { ::roster::RegistryBuilder::new(#name_str) },
    };

    let expanded = quote! {
        #(#attrs)*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        #vis struct #name;

        impl #name {
            #(#consts)*

            /// The registry, or the error that stopped it from being built.
            ///
            /// The outcome is computed once; every later call returns the same
            /// registry or the same error.
            #vis fn try_registry() -> ::core::result::Result<
                &'static ::std::sync::Arc<::roster::Registry>,
                ::roster::DefineError,
            > {
                fn build() -> ::core::result::Result<
                    ::std::sync::Arc<::roster::Registry>,
                    ::roster::DefineError,
                > {
                    #[allow(unused_mut)]
                    let mut builder = #builder_init;
                    #(#defines)*
                    ::core::result::Result::Ok(builder.build_shared())
                }

                static REGISTRY: ::std::sync::LazyLock<
                    ::core::result::Result<
                        ::std::sync::Arc<::roster::Registry>,
                        ::roster::DefineError,
                    >,
                > = ::std::sync::LazyLock::new(build);

                REGISTRY.as_ref().map_err(::core::clone::Clone::clone)
            }
        }

        impl ::roster::Enumeration for #name {
            fn registry() -> &'static ::std::sync::Arc<::roster::Registry> {
                match #name::try_registry() {
                    ::core::result::Result::Ok(registry) => registry,
                    ::core::result::Result::Err(err) => ::core::panic!("{}", err),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

#[cfg(test)]
mod tests {
    use super::{EnumerationInput, MemberValue, check_duplicates};

    fn int(src: &str) -> syn::Result<i64> {
        match syn::parse_str::<MemberValue>(src)? {
            MemberValue::Int(n) => Ok(n),
            _ => panic!("`{src}` did not parse as an integer"),
        }
    }

    #[test]
    fn integers_parse_with_sign() {
        assert_eq!(int("42").unwrap(), 42);
        assert_eq!(int("-1").unwrap(), -1);
        assert_eq!(int("-9223372036854775808").unwrap(), i64::MIN);
    }

    #[test]
    fn integers_out_of_range_are_rejected() {
        let err = int("9223372036854775808").unwrap_err();
        assert!(err.to_string().contains("does not fit in an i64"));
    }

    #[test]
    fn integer_suffixes_are_rejected() {
        let err = int("3u8").unwrap_err();
        assert!(err.to_string().contains("drop the `u8` suffix"));
    }

    #[test]
    fn repeated_values_are_rejected() {
        let input: EnumerationInput =
            syn::parse_str("struct Levels { LOW = 1, ALSO_LOW = 1 }").unwrap();
        let err = check_duplicates(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Levels::ALSO_LOW repeats the value of Levels::LOW"
        );
    }

    #[test]
    fn default_values_clash_with_matching_symbols() {
        let input: EnumerationInput =
            syn::parse_str("struct Tags { RED, CRIMSON = :RED }").unwrap();
        assert!(check_duplicates(&input).is_err());
    }
}
