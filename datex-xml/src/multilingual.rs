//! `com:MultilingualString`: text in one or more languages
//!
//! ```xml
//! <com:periodName>
//!   <com:values>
//!     <com:value lang="de">Hallo Welt!</com:value>
//!     <com:value lang="en">Hello World!</com:value>
//!   </com:values>
//! </com:periodName>
//! ```
//!
//! The order of the values is kept as is; languages may repeat.

use crate::{
	errors,
	name::{
		ns,
		QName,
	},
	parser::{
		self,
		ElementParser,
		ElementState,
		IgnoreElement,
		InnerParseResult,
		InnerState,
		ParseElementList,
	},
	scalar::{
		DatexString,
		LanguageCode,
		Scalar,
	},
	serializer::{
		self,
		Serializer,
	},
	Result,
};
use std::borrow::Cow;

const VALUES: QName = QName::new(ns::COMMON, "values");
const VALUE: QName = QName::new(ns::COMMON, "value");
const LANG: QName = QName::unqualified("lang");

/// Text in one language
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocalizedText {
	/// Language of the text
	pub lang: LanguageCode,
	/// The text
	pub value: DatexString,
}

impl LocalizedText {
	/// Validate language code and text
	pub fn new(lang: &str, value: &str) -> Result<Self> {
		Ok(Self {
			lang: LanguageCode::new(lang)?,
			value: DatexString::new(value)?,
		})
	}
}

/// Non-empty, ordered list of localized texts
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MultilingualString {
	values: Vec<LocalizedText>,
}

impl MultilingualString {
	/// At least one value is required
	pub fn new(values: impl IntoIterator<Item = LocalizedText>) -> Result<Self> {
		let values: Vec<LocalizedText> = values.into_iter().collect();
		if values.is_empty() {
			return Err(errors::missing_field(&VALUE));
		}
		Ok(Self { values })
	}

	/// Build from `(language, text)` pairs
	pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
		let values = pairs
			.into_iter()
			.map(|(lang, value)| LocalizedText::new(lang, value))
			.collect::<Result<Vec<_>>>()?;
		Self::new(values)
	}

	/// Text in a single language
	pub fn single(lang: &str, value: &str) -> Result<Self> {
		Self::new([LocalizedText::new(lang, value)?])
	}

	/// Append another text
	pub fn push(&mut self, value: LocalizedText) {
		self.values.push(value);
	}

	/// All texts in construction (document) order
	pub fn values(&self) -> &[LocalizedText] {
		&self.values
	}

	/// First text in the given language
	pub fn get(&self, lang: &str) -> Option<&str> {
		self.values
			.iter()
			.find(|v| v.lang.as_str().eq_ignore_ascii_case(lang))
			.map(|v| v.value.as_str())
	}
}

#[doc(hidden)]
pub struct LocalizedTextState {
	lang: Option<LanguageCode>,
	text: String,
}

impl ElementState for LocalizedTextState {
	type Output = LocalizedText;

	fn parse_element_start(_parser: &ElementParser<'_>) -> Result<Self> {
		Ok(Self {
			lang: None,
			text: String::new(),
		})
	}

	fn parse_element_attribute(&mut self, name: &QName, value: &str) -> Result<()> {
		if *name == LANG {
			self.lang = Some(LanguageCode::parse(value)?);
		}
		Ok(())
	}

	fn parse_element_inner_text(&mut self, text: &str) -> Result<()> {
		self.text += text;
		Ok(())
	}

	fn parse_element_finish(self) -> Result<Self::Output> {
		Ok(LocalizedText {
			lang: self.lang.ok_or_else(|| errors::missing_field(&LANG))?,
			value: DatexString::new(self.text)?,
		})
	}
}

impl parser::Element for LocalizedText {
	type ParseState = LocalizedTextState;
}

impl serializer::Element for LocalizedText {
	fn serialize<S: Serializer>(&self, mut serializer: S) -> Result<()> {
		serializer.serialize_attribute(&LANG, self.lang.format())?;
		serializer.serialize_text(Cow::Borrowed(self.value.as_str()))
	}
}

/// `com:values`
struct ValuesState {
	values: ParseElementList<LocalizedTextState>,
}

impl ElementState for ValuesState {
	type Output = Vec<LocalizedText>;

	fn parse_element_start(_parser: &ElementParser<'_>) -> Result<Self> {
		Ok(Self {
			values: ParseElementList::new(VALUE),
		})
	}

	fn parse_element_inner_node(&mut self, parser: ElementParser<'_>) -> Result<()> {
		match self.values.parse_inner_node(parser)? {
			InnerParseResult::Success => Ok(()),
			InnerParseResult::Next(parser) => parser.parse_element::<IgnoreElement>(),
		}
	}

	fn parse_element_finish(self) -> Result<Self::Output> {
		self.values.parse_inner_finish()
	}
}

#[doc(hidden)]
pub struct MultilingualStringState {
	values: Vec<LocalizedText>,
}

impl ElementState for MultilingualStringState {
	type Output = MultilingualString;

	fn parse_element_start(_parser: &ElementParser<'_>) -> Result<Self> {
		Ok(Self { values: Vec::new() })
	}

	fn parse_element_inner_node(&mut self, parser: ElementParser<'_>) -> Result<()> {
		if *parser.name() == VALUES {
			self.values.extend(parser.parse_element::<ValuesState>()?);
			Ok(())
		} else {
			parser.parse_element::<IgnoreElement>()
		}
	}

	fn parse_element_finish(self) -> Result<Self::Output> {
		MultilingualString::new(self.values)
	}
}

impl parser::Element for MultilingualString {
	type ParseState = MultilingualStringState;
}

struct Values<'a>(&'a [LocalizedText]);

impl serializer::Element for Values<'_> {
	fn serialize<S: Serializer>(&self, mut serializer: S) -> Result<()> {
		for value in self.0 {
			serializer.serialize_element(&VALUE, value)?;
		}
		Ok(())
	}
}

impl serializer::Element for MultilingualString {
	fn serialize<S: Serializer>(&self, mut serializer: S) -> Result<()> {
		serializer.serialize_element(&VALUES, &Values(&self.values))
	}
}
