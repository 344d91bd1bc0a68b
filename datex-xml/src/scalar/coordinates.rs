use crate::{
	errors,
	scalar::Scalar,
	Result,
};
use regex::Regex;
use rust_decimal::Decimal;
use std::{
	borrow::Cow,
	fmt,
	str::FromStr,
	sync::LazyLock,
};

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SIGNED_DECIMAL: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)$").expect("valid regex"));

/// `gml:posList`: whitespace separated list of at least four signed decimals (two positions)
///
/// Whitespace is normalized to single spaces; the numbers are kept as written.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GmlPosList(String);

impl GmlPosList {
	/// Minimum count of numbers
	pub const MIN_VALUES: usize = 4;

	/// Validate and normalize whitespace
	pub fn new(text: &str) -> Result<Self> {
		let parts: Vec<&str> = text.split_whitespace().collect();
		if parts.len() < Self::MIN_VALUES {
			return Err(errors::invalid_format(
				Self::KIND,
				text,
				format_args!("expected at least {} numbers, found {}", Self::MIN_VALUES, parts.len()),
			));
		}
		if let Some(bad) = parts.iter().find(|p| !SIGNED_DECIMAL.is_match(p)) {
			return Err(errors::invalid_format(Self::KIND, text, format_args!("{:?} is not a decimal", bad)));
		}
		Ok(Self(parts.join(" ")))
	}

	/// Build from numbers
	pub fn from_values(values: &[Decimal]) -> Result<Self> {
		let text = values.iter().map(Decimal::to_string).collect::<Vec<_>>().join(" ");
		Self::new(&text)
	}

	/// The numbers of the list
	pub fn values(&self) -> Result<Vec<Decimal>> {
		self.0
			.split(' ')
			.map(|v| Decimal::from_str(v).map_err(|e| errors::invalid_format(Self::KIND, v, e)))
			.collect()
	}

	/// Normalized text
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for GmlPosList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for GmlPosList {
	type Err = crate::Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::new(s)
	}
}

impl Scalar for GmlPosList {
	const KIND: &'static str = "GmlPosList";

	fn parse(text: &str) -> Result<Self> {
		Self::new(text)
	}

	fn format(&self) -> Cow<'_, str> {
		Cow::Borrowed(&self.0)
	}
}

scalar_element!(GmlPosList);
