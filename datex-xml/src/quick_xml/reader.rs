use crate::{
	errors,
	name::{
		ns,
		QName,
	},
	tree::{
		NamespaceDecl,
		XmlElement,
	},
	Result,
};
use quick_xml::events::{
	BytesStart,
	Event,
};
use std::borrow::Cow;

fn utf8(bytes: &[u8]) -> Result<&str> {
	std::str::from_utf8(bytes).map_err(errors::malformed)
}

/// Split `prefix:local`
fn split_name(name: &str) -> (Option<&str>, &str) {
	match name.split_once(':') {
		Some((prefix, local)) => (Some(prefix), local),
		None => (None, name),
	}
}

/// Resolve `&name;` (predefined entities and character references)
fn resolve_reference(name: &str) -> Result<char> {
	let resolved = match name {
		"lt" => Some('<'),
		"gt" => Some('>'),
		"amp" => Some('&'),
		"apos" => Some('\''),
		"quot" => Some('"'),
		_ => {
			let code = if let Some(hex) = name.strip_prefix("#x") {
				u32::from_str_radix(hex, 16).ok()
			} else if let Some(dec) = name.strip_prefix('#') {
				dec.parse::<u32>().ok()
			} else {
				None
			};
			code.and_then(char::from_u32)
		},
	};
	resolved.ok_or_else(|| errors::malformed(format_args!("unknown entity reference &{};", name)))
}

/// Open elements with their namespace scope
struct Stack {
	elements: Vec<XmlElement>,
	scopes: Vec<NamespaceDecl>,
	/// Length of `scopes` when each open element started
	marks: Vec<usize>,
}

impl Stack {
	fn uri_for(&self, prefix: &str) -> Result<&str> {
		if prefix == "xml" {
			return Ok(ns::XML);
		}
		if let Some(decl) = self.scopes.iter().rev().find(|decl| decl.prefix == prefix) {
			return Ok(decl.uri.as_str());
		}
		if prefix.is_empty() {
			// no default namespace declared
			return Ok("");
		}
		Err(errors::malformed(format_args!("undeclared namespace prefix {:?}", prefix)))
	}

	fn resolve_element_name(&self, name: &str) -> Result<QName> {
		let (prefix, local) = split_name(name);
		let uri = self.uri_for(prefix.unwrap_or(""))?;
		Ok(QName::owned(uri, local))
	}

	/// Unprefixed attributes have no namespace
	fn resolve_attribute_name(&self, name: &str) -> Result<QName> {
		match split_name(name) {
			(Some(prefix), local) => Ok(QName::owned(self.uri_for(prefix)?, local)),
			(None, local) => Ok(QName::owned("", local)),
		}
	}

	fn open(&mut self, start: &BytesStart<'_>) -> Result<XmlElement> {
		self.marks.push(self.scopes.len());

		let mut namespaces = Vec::new();
		let mut attributes = Vec::new();
		for attr in start.attributes() {
			let attr = attr.map_err(errors::malformed)?;
			let key = utf8(attr.key.as_ref())?;
			let value = quick_xml::escape::unescape(utf8(&attr.value)?).map_err(errors::malformed)?;
			if key == "xmlns" {
				namespaces.push(NamespaceDecl {
					prefix: String::new(),
					uri: value.into_owned(),
				});
			} else if let Some(prefix) = key.strip_prefix("xmlns:") {
				namespaces.push(NamespaceDecl {
					prefix: prefix.to_string(),
					uri: value.into_owned(),
				});
			} else {
				attributes.push((key.to_string(), value.into_owned()));
			}
		}
		self.scopes.extend(namespaces.iter().cloned());

		let mut element = XmlElement::new(self.resolve_element_name(utf8(start.name().as_ref())?)?);
		element.namespaces = namespaces;
		for (key, value) in attributes {
			let name = self.resolve_attribute_name(&key)?;
			if name.is(ns::XSI, "type") {
				// the value is a prefixed name itself, resolved in the scope of this element
				element.xsi_type = Some(self.resolve_element_name(value.trim())?);
			} else {
				element.set_attribute(name, value);
			}
		}
		Ok(element)
	}

	fn close(&mut self) -> Option<XmlElement> {
		let mut element = self.elements.pop()?;
		if let Some(mark) = self.marks.pop() {
			self.scopes.truncate(mark);
		}
		element.strip_layout_whitespace();
		Some(element)
	}

	fn push_text(&mut self, text: Cow<'_, str>) -> Result<()> {
		match self.elements.last_mut() {
			Some(element) => {
				element.push_text(text);
				Ok(())
			},
			None if text.trim().is_empty() => Ok(()),
			None => Err(errors::malformed("text outside of the root element")),
		}
	}
}

/// Parse a complete document into its root element
///
/// Comments, processing instructions and the document type are skipped.  Prefixes are resolved,
/// `xsi:type` values included.
pub fn read_document(text: &str) -> Result<XmlElement> {
	let mut reader = quick_xml::Reader::from_str(text);
	reader.config_mut().trim_text(false);

	let mut stack = Stack {
		elements: Vec::new(),
		scopes: Vec::new(),
		marks: Vec::new(),
	};
	let mut root: Option<XmlElement> = None;

	// after a finished element either attach it to its parent or make it the root
	let mut finish = |stack: &mut Stack, element: XmlElement| -> Result<()> {
		match stack.elements.last_mut() {
			Some(parent) => parent.push_element(element),
			None if root.is_some() => return Err(errors::malformed("multiple root elements")),
			None => root = Some(element),
		}
		Ok(())
	};

	loop {
		match reader.read_event()? {
			Event::Start(start) => {
				let element = stack.open(&start)?;
				stack.elements.push(element);
			},
			Event::Empty(start) => {
				let element = stack.open(&start)?;
				stack.elements.push(element);
				if let Some(element) = stack.close() {
					finish(&mut stack, element)?;
				}
			},
			Event::End(_) => {
				// quick-xml already checks that end tags match
				let element = stack.close().ok_or_else(|| errors::malformed("unexpected end tag"))?;
				finish(&mut stack, element)?;
			},
			Event::Text(text) => stack.push_text(Cow::Borrowed(utf8(&text)?))?,
			Event::CData(data) => stack.push_text(Cow::Borrowed(utf8(&data)?))?,
			Event::GeneralRef(reference) => {
				let c = resolve_reference(utf8(&reference)?)?;
				stack.push_text(Cow::Owned(c.to_string()))?;
			},
			Event::Eof => break,
			// declaration, comments, processing instructions, doctype
			_ => (),
		}
	}

	if !stack.elements.is_empty() {
		return Err(errors::malformed("unclosed element at end of document"));
	}
	root.ok_or_else(|| errors::malformed("empty document"))
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::tree::XmlNode;

	#[test]
	fn resolves_prefixes() {
		let doc = r#"<?xml version="1.0" encoding="UTF-8"?>
<d2:payload xmlns:d2="http://datex2.eu/schema/3/d2Payload" xmlns:com="http://datex2.eu/schema/3/common"
	xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:type="com:GenericPublication" lang="en">
	<com:publicationTime>2024-01-01T00:00:00Z</com:publicationTime>
</d2:payload>"#;
		let root = read_document(doc).unwrap();
		assert_eq!(root.name, QName::new(ns::D2_PAYLOAD, "payload"));
		assert_eq!(root.xsi_type, Some(QName::new(ns::COMMON, "GenericPublication")));
		assert_eq!(root.attribute(&QName::unqualified("lang")), Some("en"));
		assert_eq!(root.namespaces.len(), 3);
		let time = root.child(&QName::new(ns::COMMON, "publicationTime")).unwrap();
		assert_eq!(time.text(), "2024-01-01T00:00:00Z");
		// layout whitespace is gone
		assert_eq!(root.children.len(), 1);
	}

	#[test]
	fn default_namespace_and_entities() {
		let doc = r#"<values xmlns="http://datex2.eu/schema/3/common"><value lang="en">a &lt; b &amp; c&#x21;<![CDATA[<raw>]]></value></values>"#;
		let root = read_document(doc).unwrap();
		let value = root.child(&QName::new(ns::COMMON, "value")).unwrap();
		assert_eq!(value.children, vec![XmlNode::Text("a < b & c!<raw>".into())]);
		// unprefixed attributes stay unqualified
		assert_eq!(value.attribute(&QName::unqualified("lang")), Some("en"));
	}

	#[test]
	fn scopes_end_with_element() {
		let doc = r#"<root><a xmlns:v="urn:vendor"><v:x/></a><v:y/></root>"#;
		assert!(matches!(read_document(doc), Err(crate::Error::MalformedXml(_))));
	}

	#[test]
	fn broken_documents() {
		for doc in ["", "   ", "<a></b>", "<a>", "<a/><b/>", "text<a/>", "<a>&bogus;</a>"] {
			assert!(matches!(read_document(doc), Err(crate::Error::MalformedXml(_))), "{:?}", doc);
		}
	}
}
