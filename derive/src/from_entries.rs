use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Field, Fields, GenericArgument, Ident, PathArguments, Result, Type,
};

pub(crate) fn expand_from_entries(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            "`FromEntries` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            "`FromEntries` may only be derived on structs with named fields.",
        ))?
    };

    let mut header = None;
    let mut entries = None;

    for field in &fields.named {
        let Some(metadata) = FieldMetadata::parse(field)? else {
            continue; // Skip fields without an attribute.
        };

        let slot = match metadata.role {
            Role::Header => &mut header,
            Role::Entries => &mut entries,
        };

        if slot.replace(metadata).is_some() {
            Err(Error::new_spanned(
                field,
                "Only one field may receive each of `header` and `entries`.",
            ))?
        }
    }

    let header_method = header.map(|FieldMetadata { name, inner, .. }| {
        quote! {
            fn add_header(&mut self, header: &#inner) {
                self.#name = Some(header.clone());
            }
        }
    });

    let entry_assignment = match entries {
        Some(FieldMetadata { name, .. }) => quote! {
            self.#name.push(Default::default());
            self.#name.last_mut().map(|e| e as _)
        },
        None => quote! { None },
    };

    let name = &input.ident;

    let expanded = quote! {
        impl FromEntries for #name {
            #header_method

            fn add_entry(&mut self) -> Option<&mut dyn FromEntry> {
                #entry_assignment
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
enum Role {
    Header,
    Entries,
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    role: Role,
    inner: Type,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let name = field.ident.clone().unwrap();

        let role = if field.attrs.iter().any(|a| a.path().is_ident("header")) {
            Role::Header
        } else if field.attrs.iter().any(|a| a.path().is_ident("entries")) {
            Role::Entries
        } else {
            return Ok(None);
        };

        let expected = match role {
            Role::Header => "Option",
            Role::Entries => "Vec",
        };

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

        if segment.ident != expected {
            Err(Error::new_spanned(
                &segment.ident,
                format!("Field must have type `{expected}<T>`."),
            ))?
        }

        let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
            Err(Error::new_spanned(
                &segment.arguments,
                format!("Field of type `{expected}<T>` must have a generic parameter."),
            ))?
        };

        let Some(GenericArgument::Type(inner)) = arguments.args.first() else {
            Err(Error::new_spanned(
                &arguments.args,
                format!("Field of type `{expected}<T>` must have a generic parameter."),
            ))?
        };

        Ok(Some(Self {
            name,
            role,
            inner: inner.clone(),
        }))
    }
}
