use crate::{
	errors,
	name::QName,
	parser::{
		ignore_attribute,
		Element,
		IgnoreElement,
	},
	tree::{
		XmlElement,
		XmlNode,
	},
	Result,
};

/// A state to parse exactly one element
///
/// States work like "builders": they receive the various parts of an element incrementally until
/// they can "build" the result.
///
/// The element name was already matched by whoever decided to parse the element with this state;
/// `parse_element_start` might still inspect the element (e.g. its `xsi:type`).
///
/// After a successful `parse_element_start` the parser calls `parse_element_attribute` for all
/// attributes on the element, then `parse_element_inner_text` and `parse_element_inner_node` in
/// document order, and finally `parse_element_finish`.
pub trait ElementState: Sized {
	/// Once fully parsed this is the resulting output type.
	type Output: Sized;

	/// Whether an element without attributes and content is treated as if it wasn't there at all.
	///
	/// Simple values (text content) use this: `<x/>` carries no value.
	const EMPTY_MEANS_ABSENT: bool = false;

	/// Create state to parse the element `parser` points at.
	fn parse_element_start(parser: &ElementParser<'_>) -> Result<Self>;

	/// Parse attribute into state
	///
	/// The default implementation ignores the attribute.
	fn parse_element_attribute(&mut self, name: &QName, value: &str) -> Result<()> {
		let _ = value;
		ignore_attribute(name);
		Ok(())
	}

	/// Parse text or CDATA into state.
	///
	/// The default implementation will ignore whitespace and fail otherwise.
	fn parse_element_inner_text(&mut self, text: &str) -> Result<()> {
		if !text.trim().is_empty() {
			return Err(errors::unexpected_text(text));
		}
		Ok(())
	}

	/// Parse inner elements.
	///
	/// The default implementation ignores the element.
	fn parse_element_inner_node(&mut self, parser: ElementParser<'_>) -> Result<()> {
		parser.parse_element::<IgnoreElement>()
	}

	/// Finish parsing an element.
	///
	/// This is where you make sure you got all required data (unpacking their types) and can
	/// optionally check data for consistency.
	fn parse_element_finish(self) -> Result<Self::Output>;
}

/// A parser that is ready to parse exactly one element (and nested data).
#[derive(Clone, Copy, Debug)]
pub struct ElementParser<'a> {
	element: &'a XmlElement,
}

impl<'a> ElementParser<'a> {
	/// Parser for the given element
	pub fn new(element: &'a XmlElement) -> Self {
		Self { element }
	}

	/// Name of the element
	pub fn name(&self) -> &'a QName {
		&self.element.name
	}

	/// `xsi:type` of the element
	pub fn xsi_type(&self) -> Option<&'a QName> {
		self.element.xsi_type.as_ref()
	}

	/// Whether the element has a direct child with the given name
	pub fn has_child(&self, name: &QName) -> bool {
		self.element.has_child(name)
	}

	/// See [`XmlElement::is_empty`]
	pub fn is_empty(&self) -> bool {
		self.element.is_empty()
	}

	/// The full element
	pub fn element(&self) -> &'a XmlElement {
		self.element
	}

	/// Feed attributes and children of the element into the prepared state
	///
	/// Users of this method will create the state using `ElementState::parse_element_start` and
	/// produce the final result using `ElementState::parse_element_finish` after calling this
	/// method.
	pub fn parse_element_state<S: ElementState>(self, state: &mut S) -> Result<()> {
		for attr in &self.element.attributes {
			state.parse_element_attribute(&attr.name, &attr.value)?;
		}
		for node in &self.element.children {
			match node {
				XmlNode::Text(text) => state.parse_element_inner_text(text)?,
				XmlNode::Element(child) => state.parse_element_inner_node(ElementParser::new(child))?,
			}
		}
		Ok(())
	}

	/// Full parsing of the element with the given state type
	pub fn parse_element<S: ElementState>(self) -> Result<S::Output> {
		let mut state = S::parse_element_start(&self)?;
		self.parse_element_state(&mut state)?;
		state.parse_element_finish()
	}

	/// Full parsing of the element with its default state
	pub fn parse<E: Element>(self) -> Result<E> {
		self.parse_element::<E::ParseState>()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::name::ns;

	struct CountState {
		attributes: usize,
		elements: usize,
	}

	impl ElementState for CountState {
		type Output = (usize, usize);

		fn parse_element_start(_parser: &ElementParser<'_>) -> Result<Self> {
			Ok(Self { attributes: 0, elements: 0 })
		}

		fn parse_element_attribute(&mut self, _name: &QName, _value: &str) -> Result<()> {
			self.attributes += 1;
			Ok(())
		}

		fn parse_element_inner_node(&mut self, _parser: ElementParser<'_>) -> Result<()> {
			self.elements += 1;
			Ok(())
		}

		fn parse_element_finish(self) -> Result<Self::Output> {
			Ok((self.attributes, self.elements))
		}
	}

	#[test]
	fn feeds_everything() {
		let name = QName::new(ns::COMMON, "x");
		let element = XmlElement::new(name.clone())
			.with_attribute(QName::unqualified("a"), "1")
			.with_text("  ")
			.with_child(XmlElement::new(name.clone()))
			.with_child(XmlElement::new(name));
		assert_eq!(ElementParser::new(&element).parse_element::<CountState>().unwrap(), (1, 2));
	}

	#[test]
	fn rejects_text() {
		let element = XmlElement::new(QName::new(ns::COMMON, "x")).with_text("oops");
		let err = ElementParser::new(&element).parse_element::<CountState>().unwrap_err();
		assert!(matches!(err, crate::Error::UnexpectedText(t) if t == "oops"));
	}
}
