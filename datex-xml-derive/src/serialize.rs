use proc_macro2::TokenStream;
use quote::{
	quote,
	quote_spanned,
	ToTokens,
	TokenStreamExt,
};
use syn::Path;

use crate::element::{
	ElementInput,
	Field,
	FieldAttribute,
	FieldChild,
	FieldFlatten,
};

struct ElementChild<'a> {
	data: &'a FieldChild,
	datex_xml_crate: &'a Path,
	serializer: &'a TokenStream,
}

impl ToTokens for ElementChild<'_> {
	fn to_tokens(&self, tokens: &mut TokenStream) {
		let Self {
			data,
			datex_xml_crate,
			serializer,
		} = self;
		let FieldChild {
			ident, name, ns, span, ..
		} = data;

		tokens.append_all(quote_spanned! {*span=>
			#datex_xml_crate::serializer::Inner::serialize_inner(
				&self.#ident,
				&#datex_xml_crate::name::QName::new(#ns, #name),
				#serializer,
			)?;
		});
	}
}

struct ElementAttribute<'a> {
	data: &'a FieldAttribute,
	datex_xml_crate: &'a Path,
	serializer: &'a TokenStream,
}

impl ToTokens for ElementAttribute<'_> {
	fn to_tokens(&self, tokens: &mut TokenStream) {
		let Self {
			data,
			datex_xml_crate,
			serializer,
		} = self;
		let FieldAttribute {
			ident, name, ns, span, ..
		} = data;

		if data.optional {
			tokens.append_all(quote_spanned! {*span=>
				if let Some(#ident) = &self.#ident {
					#datex_xml_crate::serializer::Serializer::serialize_attribute(
						#serializer,
						&#datex_xml_crate::name::QName::new(#ns, #name),
						#datex_xml_crate::scalar::Scalar::format(#ident),
					)?;
				}
			});
		} else {
			tokens.append_all(quote_spanned! {*span=>
				#datex_xml_crate::serializer::Serializer::serialize_attribute(
					#serializer,
					&#datex_xml_crate::name::QName::new(#ns, #name),
					#datex_xml_crate::scalar::Scalar::format(&self.#ident),
				)?;
			});
		}
	}
}

struct ElementGroup<'a> {
	data: &'a FieldFlatten,
	datex_xml_crate: &'a Path,
	serializer: &'a TokenStream,
}

impl ToTokens for ElementGroup<'_> {
	fn to_tokens(&self, tokens: &mut TokenStream) {
		let Self {
			data,
			datex_xml_crate,
			serializer,
		} = self;
		let FieldFlatten { ident, span, .. } = data;

		tokens.append_all(quote_spanned! {*span=>
			#datex_xml_crate::serializer::Group::serialize_group(&self.#ident, #serializer)?;
		});
	}
}

/// Own attributes first, then child elements and flattened groups in declaration order.
fn serialize_body(el: &ElementInput, serializer: &TokenStream) -> TokenStream {
	let datex_xml_crate = &el.datex_xml_crate;
	let mut tokens = TokenStream::new();
	for data in el.attrs() {
		ElementAttribute {
			data,
			datex_xml_crate,
			serializer,
		}
		.to_tokens(&mut tokens);
	}
	for field in &el.fields {
		match field {
			Field::Attribute(_) => (),
			Field::Child(data) => ElementChild {
				data,
				datex_xml_crate,
				serializer,
			}
			.to_tokens(&mut tokens),
			Field::Flatten(data) => ElementGroup {
				data,
				datex_xml_crate,
				serializer,
			}
			.to_tokens(&mut tokens),
		}
	}
	tokens
}

pub fn derive_element(el: &ElementInput) -> TokenStream {
	let serializer = quote!(&mut serializer);
	let body = serialize_body(el, &serializer);
	let ElementInput {
		datex_xml_crate,
		ident,
		..
	} = el;

	quote! {
		impl #datex_xml_crate::serializer::Element for #ident {
			#[allow(unused_mut)]
			fn serialize<S: #datex_xml_crate::serializer::Serializer>(&self, mut serializer: S) -> #datex_xml_crate::Result<()> {
				#body
				Ok(())
			}
		}
	}
}

pub fn derive_group(el: &ElementInput) -> TokenStream {
	let serializer = quote!(&mut *serializer);
	let body = serialize_body(el, &serializer);
	let ElementInput {
		datex_xml_crate,
		ident,
		..
	} = el;

	quote! {
		impl #datex_xml_crate::serializer::Group for #ident {
			fn serialize_group<S: #datex_xml_crate::serializer::Serializer>(&self, serializer: &mut S) -> #datex_xml_crate::Result<()> {
				#body
				let _ = serializer;
				Ok(())
			}
		}
	}
}
