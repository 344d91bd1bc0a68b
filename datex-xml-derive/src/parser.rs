use crate::element::{
	ElementInput,
	Field,
	FieldAttribute,
	FieldChild,
	FieldFlatten,
};
use proc_macro2::TokenStream;
use quote::{
	quote,
	quote_spanned,
};

/// Build the parse state for `#[derive(Element)]` (`impl_element`) or `#[derive(Group)]`
pub fn build_parser(input: &ElementInput, impl_element: bool) -> TokenStream {
	let ElementInput {
		ident,
		datex_xml_crate,
		..
	} = input;

	let state_fields: TokenStream = input
		.fields
		.iter()
		.map(|field| match field {
			Field::Attribute(FieldAttribute {
				ident, value_ty, span, ..
			}) => quote_spanned! {*span=>
				#ident: Option<#value_ty>,
			},
			Field::Child(FieldChild { ident, ty, span, .. }) => quote_spanned! {*span=>
				#ident: <#ty as Inner>::ParseState,
			},
			Field::Flatten(FieldFlatten { ident, ty, span }) => quote_spanned! {*span=>
				#ident: <#ty as Group>::ParseState,
			},
		})
		.collect();

	let state_default: TokenStream = input
		.fields
		.iter()
		.map(|field| match field {
			Field::Attribute(FieldAttribute { ident, span, .. }) => quote_spanned! {*span=>
				#ident: None,
			},
			Field::Child(FieldChild {
				ident, ty, name, ns, span,
			}) => quote_spanned! {*span=>
				#ident: <#ty as Inner>::parse_state(QName::new(#ns, #name)),
			},
			Field::Flatten(FieldFlatten { ident, ty, span }) => quote_spanned! {*span=>
				#ident: <<#ty as Group>::ParseState as Default>::default(),
			},
		})
		.collect();

	let finish: TokenStream = input
		.fields
		.iter()
		.map(|field| match field {
			Field::Attribute(FieldAttribute {
				ident,
				optional: true,
				span,
				..
			}) => quote_spanned! {*span=>
				#ident: self.#ident,
			},
			Field::Attribute(FieldAttribute {
				ident, name, ns, span, ..
			}) => quote_spanned! {*span=>
				#ident: match self.#ident {
					Some(v) => v,
					None => return Err(errors::missing_field(&QName::new(#ns, #name))),
				},
			},
			Field::Child(FieldChild { ident, span, .. }) | Field::Flatten(FieldFlatten { ident, span, .. }) => {
				quote_spanned! {*span=>
					#ident: self.#ident.parse_inner_finish()?,
				}
			},
		})
		.collect();

	let inner_attrs: TokenStream = input
		.attrs()
		.map(|attr| {
			let FieldAttribute {
				ident,
				value_ty,
				name,
				ns,
				span,
				..
			} = attr;
			quote_spanned! {*span=>
				if name.is(#ns, #name) {
					self.#ident = Some(<#value_ty as Scalar>::parse(value)?);
					return Ok(InnerParseResult::Success);
				}
			}
		})
		.collect();
	let group_attrs: TokenStream = input
		.groups()
		.map(|FieldFlatten { ident, span, .. }| {
			quote_spanned! {*span=>
				let value = match self.#ident.parse_inner_attribute(name, value)? {
					InnerParseResult::Next(v) => v,
					InnerParseResult::Success => return Ok(InnerParseResult::Success),
				};
			}
		})
		.collect();
	// children and groups get their chance in declaration order
	let inner_nodes: TokenStream = input
		.fields
		.iter()
		.filter(|field| !matches!(field, Field::Attribute(_)))
		.map(|field| {
			let ident = field.ident();
			quote! {
				let parser = match self.#ident.parse_inner_node(parser)? {
					InnerParseResult::Next(p) => p,
					InnerParseResult::Success => return Ok(InnerParseResult::Success),
				};
			}
		})
		.collect();

	let actual_impl = if impl_element {
		quote! {
			impl ElementState for State {
				type Output = #ident;

				fn parse_element_start(_parser: &ElementParser<'_>) -> Result<Self> {
					Ok(Self::default())
				}

				fn parse_element_attribute(&mut self, name: &QName, value: &str) -> Result<()> {
					if let InnerParseResult::Next(_) = self.parse_attribute(name, value)? {
						ignore_attribute(name);
					}
					Ok(())
				}

				fn parse_element_inner_node(&mut self, parser: ElementParser<'_>) -> Result<()> {
					match self.parse_node(parser)? {
						InnerParseResult::Success => Ok(()),
						InnerParseResult::Next(parser) => parser.parse_element::<IgnoreElement>(),
					}
				}

				fn parse_element_finish(self) -> Result<Self::Output> {
					self.finish()
				}
			}

			impl Element for #ident {
				type ParseState = State;
			}
		}
	} else {
		quote! {
			impl InnerState for State {
				type Output = #ident;

				fn parse_inner_attribute<'v>(&mut self, name: &QName, value: &'v str) -> Result<InnerParseResult<&'v str>> {
					self.parse_attribute(name, value)
				}

				fn parse_inner_node<'a>(&mut self, parser: ElementParser<'a>) -> Result<InnerParseResult<ElementParser<'a>>> {
					self.parse_node(parser)
				}

				fn parse_inner_finish(self) -> Result<Self::Output> {
					self.finish()
				}
			}

			impl Group for #ident {
				type ParseState = State;
			}
		}
	};

	quote! {
		const _: () = {
			#[allow(unused_imports)]
			use #datex_xml_crate::{
				errors,
				name::QName,
				parser::{
					ignore_attribute,
					Element,
					ElementParser,
					ElementState,
					Group,
					IgnoreElement,
					Inner,
					InnerParseResult,
					InnerState,
				},
				scalar::Scalar,
				Result,
			};

			pub struct State {
				#state_fields
			}

			impl Default for State {
				fn default() -> Self {
					Self {
						#state_default
					}
				}
			}

			impl State {
				fn parse_attribute<'v>(&mut self, name: &QName, value: &'v str) -> Result<InnerParseResult<&'v str>> {
					#inner_attrs
					#group_attrs
					let _ = name;
					Ok(InnerParseResult::Next(value))
				}

				fn parse_node<'a>(&mut self, parser: ElementParser<'a>) -> Result<InnerParseResult<ElementParser<'a>>> {
					#inner_nodes
					Ok(InnerParseResult::Next(parser))
				}

				fn finish(self) -> Result<#ident> {
					Ok(#ident {
						#finish
					})
				}
			}

			#actual_impl
		};
	}
}
