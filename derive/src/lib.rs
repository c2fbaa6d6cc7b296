use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod from_entries;
mod from_entry;

#[proc_macro_derive(FromEntry, attributes(field))]
pub fn derive_from_entry(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match from_entry::expand_from_entry(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}

#[proc_macro_derive(FromEntries, attributes(header, entries))]
pub fn derive_from_entries(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match from_entries::expand_from_entries(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}
