use crate::{
	name::QName,
	tree::XmlElement,
	Result,
};
use std::borrow::Cow;

/// Element that can be serialized.
///
/// The name of the element is chosen by the surrounding type; the element only contributes its
/// type discriminator (if it is one of several concrete types for an abstract slot), attributes
/// and content.
pub trait Element {
	/// Value for `xsi:type`; only types used in place of an abstract type need it.
	fn xsi_type(&self) -> Option<QName> {
		None
	}

	/// Called by serializer to let an element serialize its attributes and inner data (text and
	/// further elements).
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<()>;
}

/// Interface to serialize an element.
pub trait Serializer {
	/// Add an attribute to the serialized element
	fn serialize_attribute(&mut self, name: &QName, value: Cow<'_, str>) -> Result<()>;

	/// Add inner text to the element.
	///
	/// Must be escaped automatically by the serializer.
	fn serialize_text(&mut self, text: Cow<'_, str>) -> Result<()>;

	/// Add an inner element
	///
	/// The serializer will need to determine the `Element::xsi_type` of the element and call its
	/// `Element::serialize` function.
	fn serialize_element<E: Element + ?Sized>(&mut self, name: &QName, element: &E) -> Result<()>;

	/// Add an already built subtree as inner element
	fn serialize_node(&mut self, node: &XmlElement) -> Result<()>;
}
