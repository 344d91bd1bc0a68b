use crate::{
	errors,
	parser,
	scalar::Scalar,
	serializer,
	Result,
};
use std::{
	borrow::Cow,
	fmt,
	ops::Deref,
	str::FromStr,
};

/// Non-blank string with at most `N` characters
///
/// Blank text can't be told apart from an absent value in XML (`<x/>`, `<x>  </x>`), so it is
/// rejected.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoundedString<const N: usize>(String);

/// `com:String`: up to 1024 characters
pub type DatexString = BoundedString<1024>;

/// Short strings (names, identifiers): up to 256 characters
pub type ShortString = BoundedString<256>;

impl<const N: usize> BoundedString<N> {
	/// Maximum number of characters
	pub const MAX_LENGTH: usize = N;

	/// Validate length and content
	pub fn new(value: impl Into<String>) -> Result<Self> {
		let value = value.into();
		if value.trim().is_empty() {
			return Err(errors::invalid_format(Self::KIND, &value, "blank string"));
		}
		let len = value.chars().count();
		if len > N {
			return Err(errors::invalid_format(
				Self::KIND,
				&value,
				format_args!("{} characters exceed the maximum of {}", len, N),
			));
		}
		Ok(Self(value))
	}

	/// Contained text
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Unwrap
	pub fn into_inner(self) -> String {
		self.0
	}
}

impl<const N: usize> Deref for BoundedString<N> {
	type Target = str;

	fn deref(&self) -> &str {
		&self.0
	}
}

impl<const N: usize> fmt::Display for BoundedString<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl<const N: usize> FromStr for BoundedString<N> {
	type Err = crate::Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::new(s)
	}
}

impl<const N: usize> TryFrom<&str> for BoundedString<N> {
	type Error = crate::Error;

	fn try_from(s: &str) -> Result<Self> {
		Self::new(s)
	}
}

impl<const N: usize> TryFrom<String> for BoundedString<N> {
	type Error = crate::Error;

	fn try_from(s: String) -> Result<Self> {
		Self::new(s)
	}
}

impl<const N: usize> Scalar for BoundedString<N> {
	const KIND: &'static str = "String";

	fn parse(text: &str) -> Result<Self> {
		Self::new(text)
	}

	fn format(&self) -> Cow<'_, str> {
		Cow::Borrowed(&self.0)
	}
}

impl<const N: usize> parser::Element for BoundedString<N> {
	type ParseState = parser::ValueState<Self>;
}

impl<const N: usize> serializer::Element for BoundedString<N> {
	fn serialize<S: serializer::Serializer>(&self, mut serializer: S) -> Result<()> {
		serializer.serialize_text(Cow::Borrowed(&self.0))
	}
}
