use crate::{
	errors,
	scalar::Scalar,
	Result,
};
use std::{
	borrow::Cow,
	cmp::Ordering,
	fmt,
	str::FromStr,
};

macro_rules! ranged_float {
	($(#[$meta:meta])* $name:ident, $kind:literal, $min:expr, $max:expr) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug)]
		pub struct $name(f64);

		impl $name {
			/// Smallest valid value
			pub const MIN: f64 = $min;
			/// Largest valid value
			pub const MAX: f64 = $max;

			/// Validate range; never clamps
			pub fn new(value: f64) -> Result<Self> {
				if value.is_nan() || value < Self::MIN || value > Self::MAX {
					return Err(errors::invalid_format(
						$kind,
						&value.to_string(),
						format_args!("outside of [{}, {}]", Self::MIN, Self::MAX),
					));
				}
				Ok(Self(value))
			}

			/// The number
			pub fn value(self) -> f64 {
				self.0
			}
		}

		// NaN is rejected on construction, so the order is total.
		impl PartialEq for $name {
			fn eq(&self, other: &Self) -> bool {
				self.0.total_cmp(&other.0) == Ordering::Equal
			}
		}

		impl Eq for $name {}

		impl PartialOrd for $name {
			fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
				Some(self.cmp(other))
			}
		}

		impl Ord for $name {
			fn cmp(&self, other: &Self) -> Ordering {
				self.0.total_cmp(&other.0)
			}
		}

		impl TryFrom<f64> for $name {
			type Error = crate::Error;

			fn try_from(value: f64) -> Result<Self> {
				Self::new(value)
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				fmt::Display::fmt(&self.0, f)
			}
		}

		impl FromStr for $name {
			type Err = crate::Error;

			fn from_str(s: &str) -> Result<Self> {
				<Self as Scalar>::parse(s)
			}
		}

		impl Scalar for $name {
			const KIND: &'static str = $kind;

			fn parse(text: &str) -> Result<Self> {
				let value: f64 = text.trim().parse().map_err(|e| errors::invalid_format($kind, text, e))?;
				Self::new(value)
			}

			fn format(&self) -> Cow<'_, str> {
				Cow::Owned(self.0.to_string())
			}
		}

		scalar_element!($name);
	};
}

ranged_float!(
	/// Latitude in degrees (WGS 84)
	Latitude,
	"Latitude",
	-90.0,
	90.0
);

ranged_float!(
	/// Longitude in degrees (WGS 84)
	Longitude,
	"Longitude",
	-180.0,
	180.0
);

ranged_float!(
	/// `com:Percentage`
	Percentage,
	"Percentage",
	0.0,
	100.0
);
