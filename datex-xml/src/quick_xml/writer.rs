use crate::{
	errors,
	name::{
		ns,
		NamespaceContext,
		QName,
	},
	tree::{
		XmlElement,
		XmlNode,
	},
	Result,
};
use quick_xml::events::{
	BytesDecl,
	BytesEnd,
	BytesStart,
	BytesText,
	Event,
};

/// Options for [`write_document`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOptions {
	/// Write `<?xml version="1.0" encoding="UTF-8"?>` first
	pub declaration: bool,
	/// Indent nested elements by this many spaces; `None` writes everything on one line
	pub indent: Option<usize>,
	/// Prefixes declared on the root element
	pub namespaces: NamespaceContext,
}

impl Default for WriteOptions {
	fn default() -> Self {
		Self {
			declaration: true,
			indent: Some(2),
			namespaces: NamespaceContext::datex(),
		}
	}
}

impl WriteOptions {
	/// Single line without declaration
	pub fn compact() -> Self {
		Self {
			declaration: false,
			indent: None,
			..Self::default()
		}
	}
}

struct DocumentWriter<'o> {
	writer: quick_xml::Writer<Vec<u8>>,
	options: &'o WriteOptions,
	/// Declarations in scope, outermost first
	scopes: Vec<(String, String)>,
	/// Length of `scopes` when each open element started
	marks: Vec<usize>,
	/// Counter for generated prefixes
	generated: usize,
}

impl DocumentWriter<'_> {
	fn uri_in_scope(&self, prefix: &str) -> Option<&str> {
		self.scopes.iter().rev().find(|(p, _)| p == prefix).map(|(_, u)| u.as_str())
	}

	/// A prefix currently bound to `uri` (and not shadowed)
	fn prefix_in_scope(&self, uri: &str, allow_default: bool) -> Option<String> {
		self.scopes
			.iter()
			.rev()
			.filter(|(p, u)| u == uri && (allow_default || !p.is_empty()))
			.find(|(p, _)| self.uri_in_scope(p) == Some(uri))
			.map(|(p, _)| p.clone())
	}

	/// Make sure `uri` has a prefix; new declarations are collected in `declare`
	fn ensure_prefix(&mut self, uri: &str, allow_default: bool, declare: &mut Vec<(String, String)>) -> String {
		if uri == ns::XML {
			// bound by definition; must not be declared with any other prefix
			return "xml".to_string();
		}
		if let Some(prefix) = self.prefix_in_scope(uri, allow_default) {
			return prefix;
		}
		let configured = self
			.options
			.namespaces
			.iter()
			.find(|(p, u)| *u == uri && (allow_default || !p.is_empty()) && self.uri_in_scope(p).is_none())
			.map(|(p, _)| p.to_string());
		let prefix = match configured {
			Some(prefix) => prefix,
			None => loop {
				self.generated += 1;
				let candidate = format!("ns{}", self.generated);
				if self.uri_in_scope(&candidate).is_none() && self.options.namespaces.uri_for(&candidate).is_none() {
					break candidate;
				}
			},
		};
		tracing::trace!(prefix = %prefix, uri, "declaring namespace");
		self.scopes.push((prefix.clone(), uri.to_string()));
		declare.push((prefix.clone(), uri.to_string()));
		prefix
	}

	fn qualified(prefix: &str, local: &str) -> String {
		if prefix.is_empty() {
			local.to_string()
		} else {
			format!("{}:{}", prefix, local)
		}
	}

	fn write_element(&mut self, element: &XmlElement, root: bool) -> Result<()> {
		self.marks.push(self.scopes.len());
		let mut declare = Vec::new();

		if root {
			for (prefix, uri) in self.options.namespaces.iter() {
				self.scopes.push((prefix.to_string(), uri.to_string()));
				declare.push((prefix.to_string(), uri.to_string()));
			}
		}

		// unprefixed names (element or `xsi:type` value) need "no namespace" as default
		let unqualified_type = element.xsi_type.as_ref().is_some_and(|t| t.namespace().is_empty());
		if element.name.namespace().is_empty() || unqualified_type {
			// a default declared on this very element (root) is dropped, not overridden
			if let Some(pos) = declare.iter().position(|(p, _)| p.is_empty()) {
				declare.remove(pos);
				let mark = self.marks.last().copied().unwrap_or(0);
				if let Some(pos) = self.scopes[mark..].iter().position(|(p, _)| p.is_empty()) {
					self.scopes.remove(mark + pos);
				}
			}
			if self.uri_in_scope("").is_some_and(|uri| !uri.is_empty()) {
				// undeclare the default namespace
				self.scopes.push((String::new(), String::new()));
				declare.push((String::new(), String::new()));
			}
		}

		let name = if element.name.namespace().is_empty() {
			element.name.local().to_string()
		} else {
			let prefix = self.ensure_prefix(element.name.namespace(), !unqualified_type, &mut declare);
			Self::qualified(&prefix, element.name.local())
		};

		let xsi_type = match &element.xsi_type {
			Some(xsi_type) => {
				let xsi = self.ensure_prefix(ns::XSI, false, &mut declare);
				let value = if xsi_type.namespace().is_empty() {
					xsi_type.local().to_string()
				} else {
					let prefix = self.ensure_prefix(xsi_type.namespace(), true, &mut declare);
					Self::qualified(&prefix, xsi_type.local())
				};
				Some((Self::qualified(&xsi, "type"), value))
			},
			None => None,
		};

		let mut attributes = Vec::with_capacity(element.attributes.len());
		for attr in &element.attributes {
			let key = if attr.name.namespace().is_empty() {
				attr.name.local().to_string()
			} else {
				let prefix = self.ensure_prefix(attr.name.namespace(), false, &mut declare);
				Self::qualified(&prefix, attr.name.local())
			};
			attributes.push((key, attr.value.as_str()));
		}

		let mut start = BytesStart::new(name.as_str());
		for (prefix, uri) in &declare {
			let key = if prefix.is_empty() {
				"xmlns".to_string()
			} else {
				format!("xmlns:{}", prefix)
			};
			start.push_attribute((key.as_str(), uri.as_str()));
		}
		if let Some((key, value)) = &xsi_type {
			start.push_attribute((key.as_str(), value.as_str()));
		}
		for (key, value) in &attributes {
			start.push_attribute((key.as_str(), *value));
		}

		if element.children.is_empty() {
			self.writer.write_event(Event::Empty(start))?;
		} else {
			self.writer.write_event(Event::Start(start))?;
			for node in &element.children {
				match node {
					XmlNode::Element(child) => self.write_element(child, false)?,
					XmlNode::Text(text) => self.writer.write_event(Event::Text(BytesText::new(text)))?,
				}
			}
			self.writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
		}

		if let Some(mark) = self.marks.pop() {
			self.scopes.truncate(mark);
		}
		Ok(())
	}
}

/// Serialize the tree into a document
///
/// The root element declares all prefixes from [`WriteOptions::namespaces`]; other namespaces
/// are declared where they are first needed with generated prefixes (`ns1`, `ns2`, ...).
pub fn write_document(root: &XmlElement, options: &WriteOptions) -> Result<String> {
	let writer = match options.indent {
		Some(indent) => quick_xml::Writer::new_with_indent(Vec::new(), b' ', indent),
		None => quick_xml::Writer::new(Vec::new()),
	};
	let mut document = DocumentWriter {
		writer,
		options,
		scopes: Vec::new(),
		marks: Vec::new(),
		generated: 0,
	};
	if options.declaration {
		document.writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
	}
	document.write_element(root, true)?;
	String::from_utf8(document.writer.into_inner()).map_err(errors::malformed)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::quick_xml::read_document;
	use pretty_assertions::assert_eq;

	fn payload() -> XmlElement {
		XmlElement::new(QName::new(ns::D2_PAYLOAD, "payload"))
			.with_xsi_type(QName::new(ns::COMMON, "GenericPublication"))
			.with_attribute(QName::unqualified("lang"), "en")
			.with_child(XmlElement::new(QName::new(ns::COMMON, "publicationTime")).with_text("2024-01-01T00:00:00Z"))
	}

	#[test]
	fn compact_with_minimal_context() {
		let options = WriteOptions {
			namespaces: NamespaceContext::new().with("d2", ns::D2_PAYLOAD).with("xsi", ns::XSI),
			..WriteOptions::compact()
		};
		let text = write_document(&payload(), &options).unwrap();
		assert_eq!(
			text,
			concat!(
				r#"<d2:payload xmlns:d2="http://datex2.eu/schema/3/d2Payload" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
				r#"xmlns:ns1="http://datex2.eu/schema/3/common" xsi:type="ns1:GenericPublication" lang="en">"#,
				r#"<ns1:publicationTime>2024-01-01T00:00:00Z</ns1:publicationTime></d2:payload>"#,
			)
		);
		assert_eq!(read_document(&text).unwrap(), payload());
	}

	#[test]
	fn default_options_round_trip() {
		let text = write_document(&payload(), &WriteOptions::default()).unwrap();
		assert!(text.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
		assert!(text.contains("\n  <com:publicationTime>"));
		assert_eq!(read_document(&text).unwrap(), payload());
	}

	#[test]
	fn escapes_and_unqualified_children() {
		let options = WriteOptions {
			namespaces: NamespaceContext::new().with("", "urn:default"),
			..WriteOptions::compact()
		};
		let tree = XmlElement::new(QName::new("urn:default", "a"))
			.with_attribute(QName::unqualified("note"), "\"1\" & <2>")
			.with_child(XmlElement::new(QName::unqualified("b")).with_text("x < y"));
		let text = write_document(&tree, &options).unwrap();
		assert_eq!(
			text,
			r#"<a xmlns="urn:default" note="&quot;1&quot; &amp; &lt;2&gt;"><b xmlns="">x &lt; y</b></a>"#
		);
		assert_eq!(read_document(&text).unwrap(), tree);
	}

	#[test]
	fn xml_namespace_is_never_declared() {
		let tree = XmlElement::new(QName::new("urn:v", "n"))
			.with_attribute(QName::new(ns::XML, "lang"), "de")
			.with_child(XmlElement::new(QName::new("urn:v", "m")).with_attribute(QName::new(ns::XML, "space"), "preserve"));
		let options = WriteOptions {
			namespaces: NamespaceContext::new(),
			..WriteOptions::compact()
		};
		let text = write_document(&tree, &options).unwrap();
		assert_eq!(
			text,
			r#"<ns1:n xmlns:ns1="urn:v" xml:lang="de"><ns1:m xml:space="preserve"/></ns1:n>"#
		);
		assert_eq!(read_document(&text).unwrap(), tree);
	}

	#[test]
	fn unqualified_type_under_default_namespace() {
		let options = WriteOptions {
			namespaces: NamespaceContext::new().with("", "urn:default").with("xsi", ns::XSI),
			..WriteOptions::compact()
		};
		let tree = XmlElement::new(QName::new("urn:default", "a"))
			.with_child(XmlElement::new(QName::new("urn:default", "b")).with_xsi_type(QName::unqualified("Local")));
		let text = write_document(&tree, &options).unwrap();
		assert_eq!(
			text,
			concat!(
				r#"<a xmlns="urn:default" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
				r#"<ns1:b xmlns="" xmlns:ns1="urn:default" xsi:type="Local"/></a>"#,
			)
		);
		let decoded = read_document(&text).unwrap();
		assert_eq!(decoded, tree);
		assert_eq!(decoded.elements().next().and_then(|b| b.xsi_type.clone()), Some(QName::unqualified("Local")));
	}

	#[test]
	fn unqualified_root_drops_configured_default() {
		let options = WriteOptions {
			namespaces: NamespaceContext::new().with("", "urn:default"),
			..WriteOptions::compact()
		};
		let tree = XmlElement::new(QName::unqualified("root")).with_child(XmlElement::new(QName::new("urn:default", "a")));
		let text = write_document(&tree, &options).unwrap();
		assert_eq!(text, r#"<root><a xmlns="urn:default"/></root>"#);
		assert_eq!(read_document(&text).unwrap(), tree);
	}
}
