//! Simple values: element text content and attribute values
//!
//! Every simple type implements [`Scalar`]: a validating parser and the inverse formatter.
//! Constructors of the constrained wrappers validate the same way and never clamp or truncate.

use crate::{
	errors,
	Result,
};
use rust_decimal::Decimal;
use std::{
	borrow::Cow,
	str::FromStr,
};

/// Implement `parser::Element` and `serializer::Element` for scalar types: the value is the text
/// content of the element.
macro_rules! scalar_element {
	($($t:ty),* $(,)?) => {$(
		impl $crate::parser::Element for $t {
			type ParseState = $crate::parser::ValueState<$t>;
		}

		impl $crate::serializer::Element for $t {
			fn serialize<S: $crate::serializer::Serializer>(&self, mut serializer: S) -> $crate::Result<()> {
				serializer.serialize_text($crate::scalar::Scalar::format(self))
			}
		}
	)*};
}

mod codes;
mod coordinates;
mod decimal;
mod numeric;
mod strings;
mod time;

pub use self::{
	codes::{
		CountryCode,
		CurrencyCode,
		LanguageCode,
	},
	coordinates::GmlPosList,
	decimal::MonetaryValue,
	numeric::{
		Latitude,
		Longitude,
		Percentage,
	},
	strings::{
		BoundedString,
		DatexString,
		ShortString,
	},
	time::{
		DateTime,
		Time,
	},
};

/// Text form of a simple value
pub trait Scalar: Sized {
	/// Type name used in error messages
	const KIND: &'static str;

	/// Parse (and validate) text
	fn parse(text: &str) -> Result<Self>;

	/// Text form; `parse(format(v)) == v`
	fn format(&self) -> Cow<'_, str>;

	/// Like `parse`, but empty or whitespace-only text means "no value"
	fn try_parse(text: &str) -> Result<Option<Self>> {
		if text.trim().is_empty() {
			Ok(None)
		} else {
			Self::parse(text).map(Some)
		}
	}
}

/// `xs:boolean`: `true`, `false`, `1`, `0`
impl Scalar for bool {
	const KIND: &'static str = "boolean";

	fn parse(text: &str) -> Result<Self> {
		match text.trim() {
			"true" | "1" => Ok(true),
			"false" | "0" => Ok(false),
			_ => Err(errors::invalid_format(Self::KIND, text, "expected true, false, 1 or 0")),
		}
	}

	fn format(&self) -> Cow<'_, str> {
		Cow::Borrowed(if *self { "true" } else { "false" })
	}
}

macro_rules! integer_scalar {
	($($t:ty),*) => {$(
		impl Scalar for $t {
			const KIND: &'static str = stringify!($t);

			fn parse(text: &str) -> Result<Self> {
				text.trim().parse().map_err(|e| errors::invalid_format(Self::KIND, text, e))
			}

			fn format(&self) -> Cow<'_, str> {
				Cow::Owned(self.to_string())
			}
		}
	)*};
}

integer_scalar!(u8, u16, u32, u64, i8, i16, i32, i64);

macro_rules! float_scalar {
	($($t:ident),*) => {$(
		/// `xs:float` / `xs:double`, including `INF`, `-INF` and `NaN`
		impl Scalar for $t {
			const KIND: &'static str = stringify!($t);

			fn parse(text: &str) -> Result<Self> {
				match text.trim() {
					"INF" | "+INF" => Ok($t::INFINITY),
					"-INF" => Ok($t::NEG_INFINITY),
					"NaN" => Ok($t::NAN),
					s => s.parse().map_err(|e| errors::invalid_format(Self::KIND, text, e)),
				}
			}

			fn format(&self) -> Cow<'_, str> {
				if self.is_nan() {
					Cow::Borrowed("NaN")
				} else if self.is_infinite() {
					Cow::Borrowed(if *self > 0.0 { "INF" } else { "-INF" })
				} else {
					Cow::Owned(self.to_string())
				}
			}
		}
	)*};
}

float_scalar!(f32, f64);

/// `xs:decimal`
impl Scalar for Decimal {
	const KIND: &'static str = "decimal";

	fn parse(text: &str) -> Result<Self> {
		Decimal::from_str(text.trim()).map_err(|e| errors::invalid_format(Self::KIND, text, e))
	}

	fn format(&self) -> Cow<'_, str> {
		Cow::Owned(self.to_string())
	}
}

scalar_element!(bool, u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, Decimal);

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn boolean() {
		assert!(bool::parse(" 1 ").unwrap());
		assert!(!bool::parse("false").unwrap());
		assert!(bool::parse("yes").is_err());
		assert_eq!(true.format(), "true");
	}

	#[test]
	fn float_special_values() {
		assert_eq!(f64::parse("INF").unwrap(), f64::INFINITY);
		assert!(f64::parse("NaN").unwrap().is_nan());
		assert_eq!(f64::NEG_INFINITY.format(), "-INF");
		assert_eq!(f32::parse("1.5").unwrap().format(), "1.5");
	}

	#[test]
	fn try_parse_blank() {
		assert_eq!(u32::try_parse("  ").unwrap(), None);
		assert_eq!(u32::try_parse("12").unwrap(), Some(12));
		assert!(matches!(u32::try_parse("x"), Err(crate::Error::InvalidFormat { kind: "u32", .. })));
	}

	#[test]
	fn decimal() {
		assert_eq!(Decimal::parse("12.50").unwrap().format(), "12.50");
	}
}
