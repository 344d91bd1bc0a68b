//! Extension slots (`_…Extension` elements)
//!
//! The schema allows arbitrary content in these; it is captured as subtree and written back
//! unchanged, without any interpretation.

use crate::{
	name::QName,
	parser::{
		self,
		ElementParser,
		ElementState,
	},
	serializer::{
		self,
		Serializer,
	},
	tree::{
		XmlElement,
		XmlNode,
	},
	Result,
};
use std::borrow::Cow;

/// Captured content of an extension element
///
/// Equality compares attributes, `xsi:type` and children; the element name is given by the slot.
#[derive(Clone, Debug)]
pub struct ExtensionBlob {
	element: XmlElement,
}

impl ExtensionBlob {
	/// Store the subtree
	pub fn capture(element: &XmlElement) -> Self {
		Self {
			element: element.clone(),
		}
	}

	/// Reproduce the captured subtree
	pub fn replay(&self) -> XmlElement {
		self.element.clone()
	}

	/// Build from content for an extension element named `name`
	pub fn from_content(name: QName, children: impl IntoIterator<Item = XmlElement>) -> Self {
		let mut element = XmlElement::new(name);
		for child in children {
			element.push_element(child);
		}
		Self { element }
	}

	/// The captured element
	pub fn content(&self) -> &XmlElement {
		&self.element
	}
}

impl PartialEq for ExtensionBlob {
	fn eq(&self, other: &Self) -> bool {
		let (a, b) = (&self.element, &other.element);
		a.xsi_type == b.xsi_type
			&& a.attributes.len() == b.attributes.len()
			&& a.attributes.iter().all(|attr| b.attribute(&attr.name) == Some(attr.value.as_str()))
			&& a.children == b.children
	}
}

#[doc(hidden)]
pub struct ExtensionState {
	blob: ExtensionBlob,
}

impl ElementState for ExtensionState {
	type Output = ExtensionBlob;

	fn parse_element_start(parser: &ElementParser<'_>) -> Result<Self> {
		Ok(Self {
			blob: ExtensionBlob::capture(parser.element()),
		})
	}

	// everything was captured in `parse_element_start`

	fn parse_element_attribute(&mut self, _name: &QName, _value: &str) -> Result<()> {
		Ok(())
	}

	fn parse_element_inner_text(&mut self, _text: &str) -> Result<()> {
		Ok(())
	}

	fn parse_element_inner_node(&mut self, _parser: ElementParser<'_>) -> Result<()> {
		Ok(())
	}

	fn parse_element_finish(self) -> Result<Self::Output> {
		Ok(self.blob)
	}
}

impl parser::Element for ExtensionBlob {
	type ParseState = ExtensionState;
}

impl serializer::Element for ExtensionBlob {
	fn xsi_type(&self) -> Option<QName> {
		self.element.xsi_type.clone()
	}

	fn serialize<S: Serializer>(&self, mut serializer: S) -> Result<()> {
		for attr in &self.element.attributes {
			serializer.serialize_attribute(&attr.name, Cow::Borrowed(&attr.value))?;
		}
		for node in &self.element.children {
			match node {
				XmlNode::Text(text) => serializer.serialize_text(Cow::Borrowed(text))?,
				XmlNode::Element(child) => serializer.serialize_node(child)?,
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::name::ns;

	const SLOT: QName = QName::new(ns::COMMON, "_periodExtension");

	fn vendor_content() -> XmlElement {
		XmlElement::new(SLOT)
			.with_attribute(QName::unqualified("origin"), "vendor")
			.with_child(
				XmlElement::new(QName::new("urn:vendor", "note"))
					.with_attribute(QName::new("urn:vendor", "level"), "2")
					.with_text("keep <me>"),
			)
			.with_child(XmlElement::new(QName::new(ns::COMMON_EXTENSION, "flag")).with_xsi_type(QName::new("urn:vendor", "Flag")))
	}

	#[test]
	fn replay_is_identical() {
		let blob = parser::from_element::<ExtensionBlob>(&vendor_content()).unwrap();
		assert_eq!(blob.replay(), vendor_content());
		let written = serializer::to_element(&SLOT, &blob).unwrap();
		assert_eq!(written, vendor_content());
		assert_eq!(ExtensionBlob::capture(&written), blob);
	}

	#[test]
	fn from_content() {
		let blob = ExtensionBlob::from_content(SLOT, [XmlElement::new(QName::new("urn:vendor", "x"))]);
		assert_eq!(blob.content().elements().count(), 1);
		assert_ne!(blob, ExtensionBlob::capture(&vendor_content()));
	}
}
