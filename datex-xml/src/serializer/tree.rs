use crate::{
	name::QName,
	serializer::{
		Element,
		Serializer,
	},
	tree::XmlElement,
	Result,
};
use std::borrow::Cow;

/// `Serializer` building an [`XmlElement`]
#[derive(Debug)]
pub struct ElementBuilder {
	element: XmlElement,
}

impl ElementBuilder {
	/// Start building an element named `name`
	pub fn new(name: QName) -> Self {
		Self {
			element: XmlElement::new(name),
		}
	}

	/// Serialize `element` into a new builder named `name`
	pub fn build<E: Element + ?Sized>(name: &QName, element: &E) -> Result<XmlElement> {
		let mut builder = Self::new(name.clone());
		builder.element.xsi_type = element.xsi_type();
		element.serialize(&mut builder)?;
		Ok(builder.finish())
	}

	/// Built element
	pub fn finish(self) -> XmlElement {
		self.element
	}
}

impl Serializer for &mut ElementBuilder {
	fn serialize_attribute(&mut self, name: &QName, value: Cow<'_, str>) -> Result<()> {
		self.element.set_attribute(name.clone(), value);
		Ok(())
	}

	fn serialize_text(&mut self, text: Cow<'_, str>) -> Result<()> {
		self.element.push_text(text);
		Ok(())
	}

	fn serialize_element<E: Element + ?Sized>(&mut self, name: &QName, element: &E) -> Result<()> {
		let child = ElementBuilder::build(name, element)?;
		self.element.push_element(child);
		Ok(())
	}

	fn serialize_node(&mut self, node: &XmlElement) -> Result<()> {
		self.element.push_element(node.clone());
		Ok(())
	}
}
