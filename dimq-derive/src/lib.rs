//! Derive macro implementation used by `dimq`.
//!
//! Most users reach this through `dimq::Dimension`, which re-exports the derive next to the trait of the same
//! name.
//!
//! # Generated impls
//!
//! For a marker type `MyDim`, the derive implements `::dimq::Dimension for MyDim`, with every axis exponent spelled
//! as a `typenum` integer. The four reserved axes are always `Z0`.
//!
//! # Attributes
//!
//! The derive reads an optional `#[dimension(...)]` attribute:
//!
//! - `time = -2`, `mass = 1`, `length = 1`, `angle = 0`: axis exponents, each optional and defaulting to `0`
//! - `crate = path`: where the `Dimension` trait lives (default `::dimq`, use `::dimq_core` when depending on the
//!   core crate directly)
//!
//! Without the attribute the marker is dimensionless.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    ext::IdentExt,
    parse::{Parse, ParseStream},
    parse_macro_input, parse_quote, Attribute, DeriveInput, Ident, LitInt, Path, Token,
};

/// Largest exponent magnitude accepted on any axis.
const MAX_EXPONENT: i32 = 64;

/// Derive `Dimension` for a marker type.
///
/// ```ignore
/// use dimq::Dimension;
///
/// #[derive(Dimension)]
/// #[dimension(time = -2, mass = 1, length = 1)]
/// pub enum Thrust {}
/// ```
#[proc_macro_derive(Dimension, attributes(dimension))]
pub fn derive_dimension(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_dimension_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_dimension_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`Dimension` can only be derived for types without generic parameters",
        ));
    }

    let attr = parse_dimension_attribute(&input.attrs)?;
    let krate = &attr.krate;

    let time = exponent_type(krate, attr.time);
    let mass = exponent_type(krate, attr.mass);
    let length = exponent_type(krate, attr.length);
    let angle = exponent_type(krate, attr.angle);
    let zero = exponent_type(krate, 0);

    let expanded = quote! {
        impl #krate::Dimension for #name {
            type Time = #time;
            type Mass = #mass;
            type Length = #length;
            type Angle = #angle;
            type Reserved0 = #zero;
            type Reserved1 = #zero;
            type Reserved2 = #zero;
            type Reserved3 = #zero;
        }
    };

    Ok(expanded)
}

/// `typenum` spelling of an exponent: `Z0`, `P<n>` or `N<n>`.
fn exponent_type(krate: &Path, exponent: i32) -> TokenStream2 {
    let ident = match exponent {
        0 => format_ident!("Z0"),
        n if n > 0 => format_ident!("P{}", n.unsigned_abs()),
        n => format_ident!("N{}", n.unsigned_abs()),
    };
    quote!(#krate::typenum::#ident)
}

/// Parsed contents of the `#[dimension(...)]` attribute.
struct DimensionAttribute {
    time: i32,
    mass: i32,
    length: i32,
    angle: i32,
    krate: Path,
}

impl Default for DimensionAttribute {
    fn default() -> Self {
        DimensionAttribute {
            time: 0,
            mass: 0,
            length: 0,
            angle: 0,
            krate: parse_quote!(::dimq),
        }
    }
}

impl Parse for DimensionAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut time: Option<i32> = None;
        let mut mass: Option<i32> = None;
        let mut length: Option<i32> = None;
        let mut angle: Option<i32> = None;
        let mut krate: Option<Path> = None;

        while !input.is_empty() {
            // `crate` is a keyword, so plain `Ident` parsing would reject it.
            let ident = Ident::parse_any(input)?;
            input.parse::<Token![=]>()?;

            let key = ident.to_string();
            let slot = match key.as_str() {
                "time" => &mut time,
                "mass" => &mut mass,
                "length" => &mut length,
                "angle" => &mut angle,
                "crate" => {
                    if krate.is_some() {
                        return Err(duplicate(&ident));
                    }
                    krate = Some(input.parse()?);
                    consume_comma(input)?;
                    continue;
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!(
                            "unknown attribute `{}`, expected one of `time`, `mass`, `length`, `angle`, `crate`",
                            other
                        ),
                    ));
                }
            };

            if slot.is_some() {
                return Err(duplicate(&ident));
            }
            *slot = Some(parse_exponent(input)?);
            consume_comma(input)?;
        }

        let defaults = DimensionAttribute::default();
        Ok(DimensionAttribute {
            time: time.unwrap_or(defaults.time),
            mass: mass.unwrap_or(defaults.mass),
            length: length.unwrap_or(defaults.length),
            angle: angle.unwrap_or(defaults.angle),
            krate: krate.unwrap_or(defaults.krate),
        })
    }
}

/// Parses an optionally negated integer literal within `±MAX_EXPONENT`.
fn parse_exponent(input: ParseStream) -> syn::Result<i32> {
    let negative = input.peek(Token![-]);
    if negative {
        input.parse::<Token![-]>()?;
    }

    let lit: LitInt = input
        .parse()
        .map_err(|err| syn::Error::new(err.span(), "expected an integer exponent"))?;
    let magnitude: i32 = lit.base10_parse()?;

    if magnitude > MAX_EXPONENT {
        return Err(syn::Error::new(
            lit.span(),
            format!("exponent magnitude must not exceed {}", MAX_EXPONENT),
        ));
    }

    Ok(if negative { -magnitude } else { magnitude })
}

fn consume_comma(input: ParseStream) -> syn::Result<()> {
    if input.peek(Token![,]) {
        input.parse::<Token![,]>()?;
    }
    Ok(())
}

fn duplicate(ident: &Ident) -> syn::Error {
    syn::Error::new(ident.span(), format!("duplicate attribute `{}`", ident))
}

fn parse_dimension_attribute(attrs: &[Attribute]) -> syn::Result<DimensionAttribute> {
    let mut found: Option<DimensionAttribute> = None;

    for attr in attrs {
        if attr.path().is_ident("dimension") {
            if found.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "only one #[dimension(...)] attribute is allowed",
                ));
            }
            found = Some(attr.parse_args::<DimensionAttribute>()?);
        }
    }

    Ok(found.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_dimension_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[dimension(time = -2, mass = 1, length = 1, angle = 0)]
            pub enum Thrust {}
        };

        let attr = parse_dimension_attribute(&input.attrs).unwrap();
        assert_eq!((attr.time, attr.mass, attr.length, attr.angle), (-2, 1, 1, 0));
    }

    #[test]
    fn test_parse_dimension_attribute_missing_is_dimensionless() {
        let input: DeriveInput = parse_quote! {
            pub enum Ratio {}
        };

        let attr = parse_dimension_attribute(&input.attrs).unwrap();
        assert_eq!((attr.time, attr.mass, attr.length, attr.angle), (0, 0, 0, 0));
        let krate = &attr.krate;
        assert_eq!(quote!(#krate).to_string(), ":: dimq");
    }

    #[test]
    fn test_parse_dimension_attribute_partial() {
        let tokens = quote! { length = 2 };
        let attr: DimensionAttribute = syn::parse2(tokens).unwrap();
        assert_eq!((attr.time, attr.mass, attr.length, attr.angle), (0, 0, 2, 0));
    }

    #[test]
    fn test_parse_dimension_attribute_custom_crate() {
        let tokens = quote! { crate = ::dimq_core, time = 1 };
        let attr: DimensionAttribute = syn::parse2(tokens).unwrap();
        let krate = &attr.krate;
        assert_eq!(quote!(#krate).to_string(), ":: dimq_core");
        assert_eq!(attr.time, 1);
    }

    #[test]
    fn test_parse_dimension_attribute_unknown_field() {
        let tokens = quote! { time = 1, charge = 1 };
        let err = syn::parse2::<DimensionAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("unknown attribute `charge`"));
    }

    #[test]
    fn test_parse_dimension_attribute_duplicate_field() {
        let tokens = quote! { mass = 1, mass = 2 };
        let err = syn::parse2::<DimensionAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("duplicate attribute `mass`"));
    }

    #[test]
    fn test_parse_dimension_attribute_duplicate_crate() {
        let tokens = quote! { crate = ::dimq, crate = ::dimq_core };
        let err = syn::parse2::<DimensionAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("duplicate attribute `crate`"));
    }

    #[test]
    fn test_parse_dimension_attribute_non_integer() {
        let tokens = quote! { time = 1.5 };
        let err = syn::parse2::<DimensionAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("expected an integer exponent"));

        let tokens = quote! { time = "s" };
        assert!(syn::parse2::<DimensionAttribute>(tokens).is_err());
    }

    #[test]
    fn test_parse_dimension_attribute_out_of_range() {
        let tokens = quote! { length = 65 };
        let err = syn::parse2::<DimensionAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("must not exceed 64"));

        let tokens = quote! { length = -64 };
        let attr: DimensionAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.length, -64);
    }

    #[test]
    fn test_parse_dimension_attribute_twice() {
        let input: DeriveInput = parse_quote! {
            #[dimension(time = 1)]
            #[dimension(mass = 1)]
            pub enum Twice {}
        };

        let err = parse_dimension_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("only one #[dimension(...)] attribute"));
    }

    #[test]
    fn test_parse_with_trailing_comma() {
        let tokens = quote! { time = -1, length = 1, };
        let attr: DimensionAttribute = syn::parse2(tokens).unwrap();
        assert_eq!((attr.time, attr.length), (-1, 1));
    }

    #[test]
    fn test_derive_dimension_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[dimension(time = -2, mass = 1, length = 1)]
            pub enum Thrust {}
        };

        let code = derive_dimension_impl(input).unwrap().to_string();
        assert!(code.contains("impl :: dimq :: Dimension for Thrust"));
        assert!(code.contains("type Time = :: dimq :: typenum :: N2"));
        assert!(code.contains("type Mass = :: dimq :: typenum :: P1"));
        assert!(code.contains("type Length = :: dimq :: typenum :: P1"));
        assert!(code.contains("type Angle = :: dimq :: typenum :: Z0"));
        assert!(code.contains("type Reserved3 = :: dimq :: typenum :: Z0"));
    }

    #[test]
    fn test_derive_dimension_impl_struct() {
        let input: DeriveInput = parse_quote! {
            #[dimension(crate = crate, angle = 1)]
            pub struct Heading;
        };

        let code = derive_dimension_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Dimension for Heading"));
        assert!(code.contains("type Angle = crate :: typenum :: P1"));
    }

    #[test]
    fn test_derive_dimension_impl_rejects_generics() {
        let input: DeriveInput = parse_quote! {
            pub struct Tagged<T>(T);
        };

        let err = derive_dimension_impl(input).err().unwrap();
        assert!(err.to_string().contains("without generic parameters"));
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }

    #[test]
    fn test_exponent_type_spelling() {
        let krate: Path = parse_quote!(::dimq);
        assert_eq!(exponent_type(&krate, 0).to_string(), ":: dimq :: typenum :: Z0");
        assert_eq!(exponent_type(&krate, 3).to_string(), ":: dimq :: typenum :: P3");
        assert_eq!(exponent_type(&krate, 64).to_string(), ":: dimq :: typenum :: P64");
        assert_eq!(exponent_type(&krate, -64).to_string(), ":: dimq :: typenum :: N64");
    }
}
