//! Namespace-qualified names and the prefix bindings used when writing documents

use std::{
	borrow::Cow,
	fmt,
};

/// Namespace URIs of the DATEX II v3 schemas (and the XML infrastructure namespaces)
pub mod ns {
	/// `com`
	pub const COMMON: &str = "http://datex2.eu/schema/3/common";
	/// `comx`
	pub const COMMON_EXTENSION: &str = "http://datex2.eu/schema/3/commonExtension";
	/// `fac`
	pub const FACILITIES: &str = "http://datex2.eu/schema/3/facilities";
	/// `egi`
	pub const ENERGY_INFRASTRUCTURE: &str = "http://datex2.eu/schema/3/energyInfrastructure";
	/// `loc`
	pub const LOCATION_REFERENCING: &str = "http://datex2.eu/schema/3/locationReferencing";
	/// `locx`
	pub const LOCATION_EXTENSION: &str = "http://datex2.eu/schema/3/locationExtension";
	/// `d2`
	pub const D2_PAYLOAD: &str = "http://datex2.eu/schema/3/d2Payload";
	/// `xsi`
	pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
	/// The implicitly bound `xml` prefix
	pub const XML: &str = "http://www.w3.org/XML/1998/namespace";
}

/// An expanded XML name: namespace URI plus local name.
///
/// An empty namespace means "no namespace" (unqualified attributes use it).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QName {
	namespace: Cow<'static, str>,
	local: Cow<'static, str>,
}

impl QName {
	/// Name from static strings; usable in constants
	pub const fn new(namespace: &'static str, local: &'static str) -> Self {
		Self {
			namespace: Cow::Borrowed(namespace),
			local: Cow::Borrowed(local),
		}
	}

	/// Name from runtime strings (e.g. read from a document)
	pub fn owned(namespace: impl Into<String>, local: impl Into<String>) -> Self {
		Self {
			namespace: Cow::Owned(namespace.into()),
			local: Cow::Owned(local.into()),
		}
	}

	/// Unqualified name (no namespace)
	pub const fn unqualified(local: &'static str) -> Self {
		Self::new("", local)
	}

	/// Namespace URI; empty if unqualified
	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	/// Local part
	pub fn local(&self) -> &str {
		&self.local
	}

	/// Compare against namespace and local part
	pub fn is(&self, namespace: &str, local: &str) -> bool {
		*self.namespace == *namespace && *self.local == *local
	}
}

impl fmt::Display for QName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.namespace.is_empty() {
			f.write_str(&self.local)
		} else {
			write!(f, "{{{}}}{}", self.namespace, self.local)
		}
	}
}

impl fmt::Debug for QName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

/// Ordered prefix bindings.
///
/// The document writer declares all of them on the root element; namespaces not listed here get
/// generated prefixes where they are first used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceContext {
	bindings: Vec<(String, String)>,
}

impl NamespaceContext {
	/// Context without any binding
	pub fn new() -> Self {
		Self { bindings: Vec::new() }
	}

	/// The prefixes conventionally used for DATEX II v3 documents
	pub fn datex() -> Self {
		Self::new()
			.with("com", ns::COMMON)
			.with("comx", ns::COMMON_EXTENSION)
			.with("fac", ns::FACILITIES)
			.with("egi", ns::ENERGY_INFRASTRUCTURE)
			.with("loc", ns::LOCATION_REFERENCING)
			.with("locx", ns::LOCATION_EXTENSION)
			.with("d2", ns::D2_PAYLOAD)
			.with("xsi", ns::XSI)
	}

	/// Builder variant of [`bind`](Self::bind)
	pub fn with(mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
		self.bind(prefix, uri);
		self
	}

	/// Bind `prefix` (empty for the default namespace); replaces an existing binding of the
	/// same prefix
	pub fn bind(&mut self, prefix: impl Into<String>, uri: impl Into<String>) {
		let prefix = prefix.into();
		let uri = uri.into();
		if let Some(binding) = self.bindings.iter_mut().find(|(p, _)| *p == prefix) {
			binding.1 = uri;
		} else {
			self.bindings.push((prefix, uri));
		}
	}

	/// First prefix bound to `uri`
	pub fn prefix_for(&self, uri: &str) -> Option<&str> {
		self.bindings.iter().find(|(_, u)| u == uri).map(|(p, _)| p.as_str())
	}

	/// URI bound to `prefix`
	pub fn uri_for(&self, prefix: &str) -> Option<&str> {
		self.bindings.iter().find(|(p, _)| p == prefix).map(|(_, u)| u.as_str())
	}

	/// All bindings in declaration order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.bindings.iter().map(|(p, u)| (p.as_str(), u.as_str()))
	}
}

impl Default for NamespaceContext {
	fn default() -> Self {
		Self::datex()
	}
}
