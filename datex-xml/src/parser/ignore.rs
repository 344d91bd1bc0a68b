use crate::{
	name::QName,
	parser::{
		ElementParser,
		ElementState,
	},
	Result,
};

/// Log and drop an attribute nobody claimed
pub fn ignore_attribute(name: &QName) {
	tracing::trace!(attribute = %name, "ignoring unknown attribute");
}

/// Can be used as `ElementState` to ignore an element with all content (attributes and sub
/// elements and text)
///
/// Unknown children are skipped this way, which keeps decoding working for documents from newer
/// schema versions.
pub struct IgnoreElement;

impl ElementState for IgnoreElement {
	type Output = ();

	fn parse_element_start(parser: &ElementParser<'_>) -> Result<Self> {
		tracing::trace!(element = %parser.name(), "skipping unknown element");
		Ok(Self)
	}

	fn parse_element_attribute(&mut self, _name: &QName, _value: &str) -> Result<()> {
		Ok(())
	}

	fn parse_element_inner_text(&mut self, _text: &str) -> Result<()> {
		Ok(())
	}

	fn parse_element_inner_node(&mut self, _parser: ElementParser<'_>) -> Result<()> {
		// the subtree is already in memory; nothing to consume
		Ok(())
	}

	fn parse_element_finish(self) -> Result<Self::Output> {
		Ok(())
	}
}
