use crate::{
	parser,
	serializer,
};

pub use datex_xml_derive::{
	Element,
	Group,
};

/// Combining `parser::Element` and `serializer::Element`.
///
/// Can be derived.
pub trait Element: parser::Element + serializer::Element {}

impl<E: parser::Element + serializer::Element> Element for E {}

/// Combining `parser::Group` and `serializer::Group`.
///
/// Can be derived.
pub trait Group: parser::Group + serializer::Group {}

impl<G: parser::Group + serializer::Group> Group for G {}
