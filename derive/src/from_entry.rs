use std::collections::HashMap;

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Error, ExprClosure, Field, Fields, Ident, Result, Token, Type,
    parse::{Parse, ParseStream},
    spanned::Spanned,
};

/// Entry values that can be received, with the primitive each is published as.
const ENTRY_FIELDS: [(&str, &str); 7] = [
    ("catalog_number", "f32"),
    ("right_ascension", "f64"),
    ("declination", "f64"),
    ("spectral_type", "[u8; 2]"),
    ("magnitude", "i16"),
    ("ra_proper_motion", "f32"),
    ("dec_proper_motion", "f32"),
];

pub(crate) fn expand_from_entry(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new(
            input.span(),
            "`FromEntry` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new(
            input.span(),
            "`FromEntry` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .map(Result::transpose)
        .flatten() // Skip fields without an attribute.
        .collect::<Result<Vec<_>>>()?;

    let mut assignments: HashMap<String, FieldMetadata> = HashMap::new();

    for field in fields {
        let identifier = field.identifier.to_string();

        if !ENTRY_FIELDS.iter().any(|(name, _)| *name == identifier) {
            let expected = ENTRY_FIELDS
                .iter()
                .map(|(name, _)| format!("`{name}`"))
                .collect::<Vec<_>>()
                .join(", ");

            Err(Error::new_spanned(
                &field.identifier,
                format!("Field identifier must be one of {expected}."),
            ))?
        }

        let span = field.identifier.span();

        if assignments.insert(identifier, field).is_some() {
            Err(Error::new(span, "Field identifiers must be unique."))?
        }
    }

    let methods = ENTRY_FIELDS.iter().filter_map(|(identifier, primitive)| {
        let FieldMetadata { name, handler, .. } = assignments.remove(*identifier)?;

        let assignment = if let Some((field_type, handler)) = handler {
            let body = handler.body;
            let acc = handler.inputs.iter().nth(0).unwrap();
            let val = handler.inputs.iter().nth(1).unwrap();

            quote! {
                (|#acc: &mut #field_type, #val| {#body})(&mut self.#name, value)
            }
        } else {
            quote! {
                self.#name = Some(value)
            }
        };

        let method = format_ident!("add_{}", identifier);
        let primitive = syn::parse_str::<Type>(primitive).unwrap();

        Some(quote! {
            fn #method(&mut self, value: #primitive) {
                #assignment;
            }
        })
    });

    let name = &input.ident;

    let expanded = quote! {
        impl FromEntry for #name {
            #(#methods)*
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    identifier: Ident,
    handler: Option<(Type, ExprClosure)>,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let name = field.ident.clone().unwrap();

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("field")) else {
            return Ok(None);
        };

        let FieldAttribute {
            identifier,
            handler,
        } = attr.meta.require_list()?.parse_args()?;

        if let Some(handler) = &handler {
            if handler.inputs.len() != 2 {
                Err(Error::new_spanned(
                    handler,
                    "Handler closure must have two parameters.",
                ))?
            }
        } else {
            let Type::Path(path) = &field.ty else {
                Err(Error::new_spanned(
                    &field.ty,
                    "Field must have a type annotation.",
                ))?
            };

            let Some(segment) = path.path.segments.last() else {
                Err(Error::new_spanned(
                    &path.path.segments,
                    "Field must have a type annotation.",
                ))?
            };

            if segment.ident != "Option" {
                Err(Error::new_spanned(
                    &segment.ident,
                    "Field without a handler must have type `Option<T>`.",
                ))?
            }
        }

        let handler = handler.map(|h| (field.ty.clone(), h));

        Ok(Some(Self {
            name,
            identifier,
            handler,
        }))
    }
}

#[derive(Debug)]
struct FieldAttribute {
    identifier: Ident,
    handler: Option<ExprClosure>,
}

impl Parse for FieldAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let identifier = input.parse::<Ident>()?;

        let handler = if !input.is_empty() {
            input.parse::<Token![,]>()?;
            Some(input.parse::<ExprClosure>()?)
        } else {
            None
        };

        Ok(Self {
            identifier,
            handler,
        })
    }
}
