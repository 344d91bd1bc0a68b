use crate::{
	errors,
	scalar::Scalar,
	Result,
};
use rust_decimal::Decimal;
use std::{
	borrow::Cow,
	fmt,
	str::FromStr,
};

/// `com:MonetaryValue`: decimal with at most 2 fraction digits and 8 digits in total
///
/// Trailing zeros don't count (`12.50` is fine) and are kept for formatting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonetaryValue(Decimal);

impl MonetaryValue {
	/// Maximum count of fraction digits
	pub const FRACTION_DIGITS: u32 = 2;
	/// Maximum count of digits
	pub const TOTAL_DIGITS: usize = 8;

	/// Validate precision; never rounds
	pub fn new(value: Decimal) -> Result<Self> {
		let normalized = value.normalize();
		if normalized.scale() > Self::FRACTION_DIGITS {
			return Err(errors::invalid_format(
				Self::KIND,
				&value.to_string(),
				format_args!("more than {} fraction digits", Self::FRACTION_DIGITS),
			));
		}
		let digits = normalized.mantissa().unsigned_abs().to_string().len();
		if digits > Self::TOTAL_DIGITS {
			return Err(errors::invalid_format(
				Self::KIND,
				&value.to_string(),
				format_args!("more than {} digits", Self::TOTAL_DIGITS),
			));
		}
		Ok(Self(value))
	}

	/// The amount
	pub fn value(&self) -> Decimal {
		self.0
	}
}

impl TryFrom<Decimal> for MonetaryValue {
	type Error = crate::Error;

	fn try_from(value: Decimal) -> Result<Self> {
		Self::new(value)
	}
}

impl fmt::Display for MonetaryValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

impl FromStr for MonetaryValue {
	type Err = crate::Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

impl Scalar for MonetaryValue {
	const KIND: &'static str = "MonetaryValue";

	fn parse(text: &str) -> Result<Self> {
		let value = Decimal::from_str(text.trim()).map_err(|e| errors::invalid_format(Self::KIND, text, e))?;
		Self::new(value)
	}

	fn format(&self) -> Cow<'_, str> {
		Cow::Owned(self.0.to_string())
	}
}

scalar_element!(MonetaryValue);

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn precision() {
		assert_eq!(MonetaryValue::parse("0.39").unwrap().format(), "0.39");
		assert_eq!(MonetaryValue::parse("12.50").unwrap().format(), "12.50");
		assert_eq!(MonetaryValue::parse("12.500").unwrap().value(), Decimal::new(125, 1));
		assert!(MonetaryValue::parse("123456.78").is_ok());
		assert!(MonetaryValue::parse("1.234").is_err());
		assert!(MonetaryValue::parse("1234567.89").is_err());
		assert!(MonetaryValue::parse("100000000").is_err());
		assert!(MonetaryValue::parse("abc").is_err());
	}
}
