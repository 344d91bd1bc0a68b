#![allow(missing_docs)] // names should be good enough
//! Error type and helper functions to generate common errors

use crate::name::QName;
use std::fmt;

/// Everything that can go wrong while reading, decoding or encoding DATEX II data.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// A scalar value violates the constraint of its type.
	#[error("invalid {kind} value {value:?}: {reason}")]
	InvalidFormat {
		/// Name of the scalar or enumeration type
		kind: &'static str,
		/// Rejected input
		value: String,
		/// Which constraint was violated
		reason: String,
	},

	/// A required element or attribute was not present.
	#[error("missing required field {0}")]
	MissingRequiredField(QName),

	/// The type discriminator of a polymorphic element is not registered.
	#[error("unknown payload type {0}")]
	UnknownPayloadType(String),

	/// An element showed up where a different one was required (e.g. the document root).
	#[error("unexpected element {found}, expected {expected}")]
	UnexpectedElement {
		/// Name of the element found
		found: QName,
		/// Name of the element required at this place
		expected: QName,
	},

	/// Non-whitespace text inside an element with element-only content.
	#[error("unexpected text {0:?}")]
	UnexpectedText(String),

	/// The document is not well-formed (or uses undeclared prefixes).
	#[error("malformed XML: {0}")]
	MalformedXml(String),

	/// Writing the serialized document failed.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result alias with our error type included
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(feature = "quick-xml")]
impl From<quick_xml::Error> for Error {
	fn from(e: quick_xml::Error) -> Self {
		Error::MalformedXml(e.to_string())
	}
}

pub fn invalid_format(kind: &'static str, value: &str, reason: impl fmt::Display) -> Error {
	Error::InvalidFormat {
		kind,
		value: value.into(),
		reason: reason.to_string(),
	}
}

pub fn missing_field(name: &QName) -> Error {
	Error::MissingRequiredField(name.clone())
}

pub fn unknown_payload_type(discriminator: impl fmt::Display) -> Error {
	Error::UnknownPayloadType(discriminator.to_string())
}

pub fn unexpected_element(found: &QName, expected: &QName) -> Error {
	Error::UnexpectedElement {
		found: found.clone(),
		expected: expected.clone(),
	}
}

pub fn unexpected_text(text: &str) -> Error {
	Error::UnexpectedText(text.into())
}

pub fn malformed(msg: impl fmt::Display) -> Error {
	Error::MalformedXml(msg.to_string())
}
