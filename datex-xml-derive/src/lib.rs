//! Derive `datex-xml` trait implementations
//!
//! Deriving supports the following attributes on the struct:
//! - `#[datex(ns = <expr>)]`: namespace of child elements; required unless every child element
//!   field has its own `ns`
//! - `#[datex(crate = "...")]`: Name of `datex-xml` crate in local scope; defaults to `datex_xml`
//!
//! And the following attributes on struct fields:
//! - `#[datex(attr)]`: Mark field as attribute of the containing XML element; attributes are
//!   unqualified unless `ns` is given.  `Option<T>` fields are optional attributes.
//! - `#[datex(flatten)]`: Field is a `Group` whose attributes and child elements are part of the
//!   containing XML element
//! - `#[datex(rename = "...")]`: XML name; defaults to the field name in `lowerCamelCase`
//! - `#[datex(ns = <expr>)]`: namespace of the attribute or child element
//!
//! Other fields are child elements; `T`, `Option<T>` and `Vec<T>` map to required, optional and
//! repeated elements.
//!
//! Multiple attributes can be combined like `#[datex(attr, rename = "lang")]`.
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/datex-xml-derive/0.1.0")]

extern crate proc_macro;

mod attributes;
mod element;
mod parser;
mod serialize;

use proc_macro::TokenStream;
use syn::{
	parse_macro_input,
	DeriveInput,
};

use crate::element::ElementInput;

/// Derive `datex-xml::{parser,serializer}::Element`
#[proc_macro_derive(Element, attributes(datex))]
pub fn derive_element(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	TokenStream::from(match ElementInput::from_derive_input(&input) {
		Ok(input) => {
			let mut output = serialize::derive_element(&input);
			output.extend(parser::build_parser(&input, true));
			output
		},
		Err(e) => e.to_compile_error(),
	})
}

/// Derive `datex-xml::{parser,serializer}::Group`
#[proc_macro_derive(Group, attributes(datex))]
pub fn derive_group(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	TokenStream::from(match ElementInput::from_derive_input(&input) {
		Ok(input) => {
			let mut output = serialize::derive_group(&input);
			output.extend(parser::build_parser(&input, false));
			output
		},
		Err(e) => e.to_compile_error(),
	})
}
