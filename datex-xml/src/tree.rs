//! In-memory XML tree the element mapper works on
//!
//! Names are fully resolved ([`QName`]); prefixes only exist in the text form. The `xsi:type`
//! attribute is kept apart from the other attributes as it is the type discriminator.

use crate::name::QName;

/// Attribute with resolved name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlAttribute {
	/// Attribute name; unqualified for almost all DATEX II attributes
	pub name: QName,
	/// Unescaped value
	pub value: String,
}

/// Namespace declaration found on an element (`xmlns:prefix="uri"`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceDecl {
	/// Empty for the default namespace
	pub prefix: String,
	/// Bound namespace URI
	pub uri: String,
}

/// Child of an element
#[derive(Clone, Debug, PartialEq)]
pub enum XmlNode {
	/// Nested element
	Element(XmlElement),
	/// Unescaped text (CDATA included)
	Text(String),
}

/// An element with attributes and children.
///
/// Equality is structural: attribute order and namespace declarations don't matter.
#[derive(Clone, Debug)]
pub struct XmlElement {
	/// Element name
	pub name: QName,
	/// Resolved `xsi:type` attribute
	pub xsi_type: Option<QName>,
	/// Attributes apart from namespace declarations and `xsi:type`
	pub attributes: Vec<XmlAttribute>,
	/// Namespace declarations (only informative; the writer declares what it needs)
	pub namespaces: Vec<NamespaceDecl>,
	/// Children in document order
	pub children: Vec<XmlNode>,
}

impl XmlElement {
	/// Empty element
	pub fn new(name: QName) -> Self {
		Self {
			name,
			xsi_type: None,
			attributes: Vec::new(),
			namespaces: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Builder: set `xsi:type`
	pub fn with_xsi_type(mut self, xsi_type: QName) -> Self {
		self.xsi_type = Some(xsi_type);
		self
	}

	/// Builder: set attribute
	pub fn with_attribute(mut self, name: QName, value: impl Into<String>) -> Self {
		self.set_attribute(name, value);
		self
	}

	/// Builder: append text
	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.push_text(text);
		self
	}

	/// Builder: append child element
	pub fn with_child(mut self, child: XmlElement) -> Self {
		self.push_element(child);
		self
	}

	/// Value of the attribute with the given name
	pub fn attribute(&self, name: &QName) -> Option<&str> {
		self.attributes.iter().find(|a| a.name == *name).map(|a| a.value.as_str())
	}

	/// Set (or replace) an attribute
	pub fn set_attribute(&mut self, name: QName, value: impl Into<String>) {
		let value = value.into();
		match self.attributes.iter_mut().find(|a| a.name == name) {
			Some(attr) => attr.value = value,
			None => self.attributes.push(XmlAttribute { name, value }),
		}
	}

	/// Append child element
	pub fn push_element(&mut self, child: XmlElement) {
		self.children.push(XmlNode::Element(child));
	}

	/// Append text; merges with a directly preceding text node
	pub fn push_text(&mut self, text: impl Into<String>) {
		let text = text.into();
		if text.is_empty() {
			return;
		}
		if let Some(XmlNode::Text(last)) = self.children.last_mut() {
			last.push_str(&text);
		} else {
			self.children.push(XmlNode::Text(text));
		}
	}

	/// Child elements in document order
	pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
		self.children.iter().filter_map(|node| match node {
			XmlNode::Element(e) => Some(e),
			XmlNode::Text(_) => None,
		})
	}

	/// First child element with the given name
	pub fn child(&self, name: &QName) -> Option<&XmlElement> {
		self.elements().find(|e| e.name == *name)
	}

	/// Whether a child element with the given name exists
	pub fn has_child(&self, name: &QName) -> bool {
		self.child(name).is_some()
	}

	/// Concatenated direct text content
	pub fn text(&self) -> String {
		let mut result = String::new();
		for node in &self.children {
			if let XmlNode::Text(t) = node {
				result.push_str(t);
			}
		}
		result
	}

	/// No attributes and no (non-whitespace) content
	pub fn is_empty(&self) -> bool {
		self.attributes.is_empty()
			&& self.children.iter().all(|node| match node {
				XmlNode::Text(t) => t.trim().is_empty(),
				XmlNode::Element(_) => false,
			})
	}

	/// Drop whitespace-only text if the element has element children (layout whitespace)
	pub(crate) fn strip_layout_whitespace(&mut self) {
		if self.children.iter().any(|node| matches!(node, XmlNode::Element(_))) {
			self.children.retain(|node| match node {
				XmlNode::Text(t) => !t.trim().is_empty(),
				XmlNode::Element(_) => true,
			});
		}
	}
}

impl PartialEq for XmlElement {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
			&& self.xsi_type == other.xsi_type
			&& self.attributes.len() == other.attributes.len()
			&& self.attributes.iter().all(|a| other.attribute(&a.name) == Some(a.value.as_str()))
			&& self.children == other.children
	}
}
