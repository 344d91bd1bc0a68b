use crate::attributes::{
	for_each_datex_item,
	lower_camel_case,
};
use proc_macro2::{
	Span,
	TokenStream,
};
use quote::quote;
use syn::{
	parse_quote,
	spanned::Spanned,
	Data,
	DeriveInput,
	Expr,
	Fields,
	Ident,
	LitStr,
	Path,
	Type,
};

mod infer_type;

/// Parsed representation of a field that should be expressed as an XML attribute.
pub struct FieldAttribute {
	pub ident: Ident,
	/// Value type (`T` for `Option<T>` fields)
	pub value_ty: Type,
	pub optional: bool,
	pub name: String,
	/// Namespace expression; empty string for unqualified attributes
	pub ns: TokenStream,
	pub span: Span,
}

/// Field expressed as child element(s); cardinality follows from the type (`T`, `Option<T>`,
/// `Vec<T>`).
pub struct FieldChild {
	pub ident: Ident,
	pub ty: Type,
	pub name: String,
	pub ns: TokenStream,
	pub span: Span,
}

/// Field of a `Group` type, flattened into the element
pub struct FieldFlatten {
	pub ident: Ident,
	pub ty: Type,
	pub span: Span,
}

/// A field on the deriving struct, in declaration order.
pub enum Field {
	Attribute(FieldAttribute),
	Child(FieldChild),
	Flatten(FieldFlatten),
}

impl Field {
	pub fn ident(&self) -> &Ident {
		match self {
			Field::Attribute(f) => &f.ident,
			Field::Child(f) => &f.ident,
			Field::Flatten(f) => &f.ident,
		}
	}
}

#[derive(Default)]
struct RawField {
	attr: bool,
	flatten: bool,
	rename: Option<String>,
	ns: Option<Expr>,
}

fn default_crate_path() -> Path {
	parse_quote!(datex_xml)
}

pub struct ElementInput {
	pub ident: Ident,
	pub datex_xml_crate: Path,
	pub fields: Vec<Field>,
}

impl ElementInput {
	pub fn from_derive_input(input: &DeriveInput) -> syn::Result<Self> {
		if !input.generics.params.is_empty() {
			return Err(syn::Error::new(input.generics.span(), "generic types are not supported"));
		}

		let mut datex_xml_crate = default_crate_path();
		let mut container_ns: Option<Expr> = None;
		for_each_datex_item(&input.attrs, |meta| {
			if meta.path.is_ident("ns") {
				container_ns = Some(meta.value()?.parse()?);
				Ok(())
			} else if meta.path.is_ident("crate") {
				let path: LitStr = meta.value()?.parse()?;
				datex_xml_crate = path.parse()?;
				Ok(())
			} else {
				Err(meta.error("unsupported container attribute; expected `ns` or `crate`"))
			}
		})?;

		let named = match &input.data {
			Data::Struct(data) => match &data.fields {
				Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
				Fields::Unit => Vec::new(),
				Fields::Unnamed(f) => return Err(syn::Error::new(f.span(), "only named fields are supported")),
			},
			_ => return Err(syn::Error::new(input.ident.span(), "only structs are supported")),
		};

		let mut fields = Vec::with_capacity(named.len());
		for field in named {
			let Some(ident) = field.ident.clone() else {
				return Err(syn::Error::new(field.span(), "only named fields are supported"));
			};
			let mut raw = RawField::default();
			for_each_datex_item(&field.attrs, |meta| {
				if meta.path.is_ident("attr") {
					raw.attr = true;
				} else if meta.path.is_ident("flatten") {
					raw.flatten = true;
				} else if meta.path.is_ident("rename") {
					let name: LitStr = meta.value()?.parse()?;
					raw.rename = Some(name.value());
				} else if meta.path.is_ident("ns") {
					raw.ns = Some(meta.value()?.parse()?);
				} else {
					return Err(meta.error("unsupported field attribute; expected `attr`, `flatten`, `rename` or `ns`"));
				}
				Ok(())
			})?;

			let span = field.span();
			let name = raw.rename.unwrap_or_else(|| lower_camel_case(&ident.to_string()));
			if raw.flatten {
				if raw.attr || raw.ns.is_some() {
					return Err(syn::Error::new(span, "`flatten` can't be combined with `attr` or `ns`"));
				}
				fields.push(Field::Flatten(FieldFlatten {
					ident,
					ty: field.ty.clone(),
					span,
				}));
			} else if raw.attr {
				let (value_ty, optional) = match infer_type::option(&field.ty) {
					Some(inner) => (inner.clone(), true),
					None => (field.ty.clone(), false),
				};
				let ns = match &raw.ns {
					Some(ns) => quote!(#ns),
					None => quote!(""),
				};
				fields.push(Field::Attribute(FieldAttribute {
					ident,
					value_ty,
					optional,
					name,
					ns,
					span,
				}));
			} else {
				let ns = match raw.ns.as_ref().or(container_ns.as_ref()) {
					Some(ns) => quote!(#ns),
					None => {
						return Err(syn::Error::new(
							span,
							"missing namespace for child element; add #[datex(ns = ...)] to the struct or field",
						))
					},
				};
				fields.push(Field::Child(FieldChild {
					ident,
					ty: field.ty.clone(),
					name,
					ns,
					span,
				}));
			}
		}

		Ok(Self {
			ident: input.ident.clone(),
			datex_xml_crate,
			fields,
		})
	}

	/// Fields of the input struct that are represented as attributes.
	pub fn attrs(&self) -> impl Iterator<Item = &FieldAttribute> {
		self.fields.iter().filter_map(|field| {
			if let Field::Attribute(attr) = field {
				Some(attr)
			} else {
				None
			}
		})
	}

	/// Flattened groups
	pub fn groups(&self) -> impl Iterator<Item = &FieldFlatten> {
		self.fields.iter().filter_map(|field| {
			if let Field::Flatten(group) = field {
				Some(group)
			} else {
				None
			}
		})
	}
}
