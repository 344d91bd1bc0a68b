use crate::{
	errors,
	scalar::Scalar,
	Result,
};
use regex::Regex;
use std::{
	borrow::Cow,
	fmt,
	str::FromStr,
	sync::LazyLock,
};

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TWO_LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}$").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static THREE_LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]{3}$").expect("valid regex"));

macro_rules! code_scalar {
	($(#[$meta:meta])* $name:ident, $kind:literal, $pattern:ident, $normalize:ident, $expected:literal) => {
		$(#[$meta])*
		#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
		pub struct $name(String);

		impl $name {
			/// Validate and normalize the case
			pub fn new(code: &str) -> Result<Self> {
				let trimmed = code.trim();
				if !$pattern.is_match(trimmed) {
					return Err(errors::invalid_format($kind, code, $expected));
				}
				Ok(Self(trimmed.$normalize()))
			}

			/// Normalized code
			pub fn as_str(&self) -> &str {
				&self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(&self.0)
			}
		}

		impl FromStr for $name {
			type Err = crate::Error;

			fn from_str(s: &str) -> Result<Self> {
				Self::new(s)
			}
		}

		impl Scalar for $name {
			const KIND: &'static str = $kind;

			fn parse(text: &str) -> Result<Self> {
				Self::new(text)
			}

			fn format(&self) -> Cow<'_, str> {
				Cow::Borrowed(&self.0)
			}
		}

		scalar_element!($name);
	};
}

code_scalar!(
	/// ISO 3166-1 alpha-2 country code (stored lower case)
	CountryCode,
	"CountryCode",
	TWO_LETTERS,
	to_ascii_lowercase,
	"expected two letters"
);

code_scalar!(
	/// ISO 639-1 language code (stored lower case)
	LanguageCode,
	"LanguageCode",
	TWO_LETTERS,
	to_ascii_lowercase,
	"expected two letters"
);

code_scalar!(
	/// ISO 4217 currency code (stored upper case)
	CurrencyCode,
	"CurrencyCode",
	THREE_LETTERS,
	to_ascii_uppercase,
	"expected three letters"
);

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn normalizes_case() {
		assert_eq!(CountryCode::new("DE").unwrap().as_str(), "de");
		assert_eq!(LanguageCode::parse(" En ").unwrap().to_string(), "en");
		assert_eq!(CurrencyCode::new("eur").unwrap().format(), "EUR");
	}

	#[test]
	fn rejects_other_shapes() {
		assert!(CountryCode::new("DEU").is_err());
		assert!(CountryCode::new("d1").is_err());
		assert!(CurrencyCode::new("EU").is_err());
		assert!(LanguageCode::new("").is_err());
		let err = CurrencyCode::new("€").unwrap_err();
		assert!(matches!(err, crate::Error::InvalidFormat { kind: "CurrencyCode", .. }));
	}
}
