use crate::{
	errors,
	name::QName,
	parser::{
		Element,
		ElementParser,
		ElementState,
		Inner,
	},
	Result,
};

/// Result of `InnerState` parse methods to signal whether they successfully parsed the input or
/// another `InnerState` needs to take a shot.
#[derive(Debug)]
pub enum InnerParseResult<Input> {
	/// Parsed successfully
	Success,
	/// Need something else to take the input
	Next(Input),
}

/// State to parse multiple elements (on the same level)
pub trait InnerState: Sized {
	/// Once fully parsed this is the resulting output type.
	type Output: Sized;

	/// Try parsing an attribute of the surrounding element
	///
	/// Should not fail if it doesn't recognize the name; instead it needs to return the value.
	fn parse_inner_attribute<'v>(&mut self, name: &QName, value: &'v str) -> Result<InnerParseResult<&'v str>> {
		let _ = name;
		Ok(InnerParseResult::Next(value))
	}

	/// Try parsing an element
	///
	/// Should not fail if it doesn't recognize the name; instead it needs to return the parser.
	fn parse_inner_node<'a>(&mut self, parser: ElementParser<'a>) -> Result<InnerParseResult<ElementParser<'a>>> {
		Ok(InnerParseResult::Next(parser))
	}

	/// Try parsing inner text
	///
	/// Should not fail if it doesn't take text (but may fail if it does but can't parse it).
	fn parse_inner_text<'t>(&mut self, text: &'t str) -> Result<InnerParseResult<&'t str>> {
		Ok(InnerParseResult::Next(text))
	}

	/// Finish parsing.
	fn parse_inner_finish(self) -> Result<Self::Output>;
}

/// Parse `parser` with `E` unless it is empty and `E` treats empty elements as absent.
fn parse_present<E: ElementState>(parser: ElementParser<'_>) -> Result<Option<E::Output>> {
	if E::EMPTY_MEANS_ABSENT && parser.is_empty() {
		return Ok(None);
	}
	parser.parse_element::<E>().map(Some)
}

/// `InnerState` to parse a single required element
pub struct ParseElementOnce<E: ElementState> {
	name: QName,
	seen: bool,
	element: Option<E::Output>,
}

impl<E: ElementState> ParseElementOnce<E> {
	/// Match elements named `name`
	pub fn new(name: QName) -> Self {
		Self {
			name,
			seen: false,
			element: None,
		}
	}
}

impl<E: ElementState> InnerState for ParseElementOnce<E> {
	type Output = E::Output;

	fn parse_inner_node<'a>(&mut self, parser: ElementParser<'a>) -> Result<InnerParseResult<ElementParser<'a>>> {
		if self.seen || *parser.name() != self.name {
			return Ok(InnerParseResult::Next(parser));
		}
		self.seen = true;
		self.element = parse_present::<E>(parser)?;
		Ok(InnerParseResult::Success)
	}

	fn parse_inner_finish(self) -> Result<Self::Output> {
		match self.element {
			Some(o) => Ok(o),
			None => Err(errors::missing_field(&self.name)),
		}
	}
}

impl<E: Element> Inner for E {
	type ParseState = ParseElementOnce<E::ParseState>;

	fn parse_state(name: QName) -> Self::ParseState {
		ParseElementOnce::new(name)
	}
}

/// `InnerState` to parse a single optional element
pub struct ParseElementOptional<E: ElementState> {
	name: QName,
	seen: bool,
	element: Option<E::Output>,
}

impl<E: ElementState> ParseElementOptional<E> {
	/// Match elements named `name`
	pub fn new(name: QName) -> Self {
		Self {
			name,
			seen: false,
			element: None,
		}
	}
}

impl<E: ElementState> InnerState for ParseElementOptional<E> {
	type Output = Option<E::Output>;

	fn parse_inner_node<'a>(&mut self, parser: ElementParser<'a>) -> Result<InnerParseResult<ElementParser<'a>>> {
		if self.seen || *parser.name() != self.name {
			return Ok(InnerParseResult::Next(parser));
		}
		self.seen = true;
		self.element = parse_present::<E>(parser)?;
		Ok(InnerParseResult::Success)
	}

	fn parse_inner_finish(self) -> Result<Self::Output> {
		Ok(self.element)
	}
}

impl<E: Element> Inner for Option<E> {
	type ParseState = ParseElementOptional<E::ParseState>;

	fn parse_state(name: QName) -> Self::ParseState {
		ParseElementOptional::new(name)
	}
}

/// `InnerState` to parse multiple occurences of a single element
pub struct ParseElementList<E: ElementState> {
	name: QName,
	elements: Vec<E::Output>,
}

impl<E: ElementState> ParseElementList<E> {
	/// Match elements named `name`
	pub fn new(name: QName) -> Self {
		Self {
			name,
			elements: Vec::new(),
		}
	}
}

impl<E: ElementState> InnerState for ParseElementList<E> {
	type Output = Vec<E::Output>;

	fn parse_inner_node<'a>(&mut self, parser: ElementParser<'a>) -> Result<InnerParseResult<ElementParser<'a>>> {
		if *parser.name() != self.name {
			return Ok(InnerParseResult::Next(parser));
		}
		if let Some(element) = parse_present::<E>(parser)? {
			self.elements.push(element);
		}
		Ok(InnerParseResult::Success)
	}

	fn parse_inner_finish(self) -> Result<Self::Output> {
		Ok(self.elements)
	}
}

impl<E: Element> Inner for Vec<E> {
	type ParseState = ParseElementList<E::ParseState>;

	fn parse_state(name: QName) -> Self::ParseState {
		ParseElementList::new(name)
	}
}
