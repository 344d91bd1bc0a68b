//! Traits and helper structs to encode elements into an XML tree
//!
//! To implement serializing for your data types (mapping to XML elements) you need to implement
//! `Element`.
//!
//! If your data type represents multiple elements with the same name you need to implement
//! `Inner`; `E`, `Option<E>` and `Vec<E>` do so for every `Element` `E`.  Base types flattened into
//! other elements implement `Group`.
//!
//! `ElementBuilder` is the `Serializer` producing an [`XmlElement`](crate::tree::XmlElement).

mod core;
mod inner;
mod tree;

pub use self::{
	core::{
		Element,
		Serializer,
	},
	inner::{
		Group,
		Inner,
	},
	tree::ElementBuilder,
};

use crate::{
	name::QName,
	tree::XmlElement,
	Result,
};

/// Encode `element` as element named `name`
pub fn to_element<E: Element + ?Sized>(name: &QName, element: &E) -> Result<XmlElement> {
	ElementBuilder::build(name, element)
}
