use crate::{
	errors,
	scalar::Scalar,
	Result,
};
use chrono::{
	FixedOffset,
	NaiveDateTime,
	NaiveTime,
	SecondsFormat,
	Timelike,
};
use std::{
	borrow::Cow,
	fmt,
	str::FromStr,
};

/// `xs:dateTime`; always written with an explicit UTC offset
///
/// Input without offset is taken as UTC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(chrono::DateTime<FixedOffset>);

impl DateTime {
	/// Wrap a timestamp (keeps the offset)
	pub fn new(value: chrono::DateTime<FixedOffset>) -> Self {
		Self(value)
	}

	/// Timestamp with offset
	pub fn value(&self) -> chrono::DateTime<FixedOffset> {
		self.0
	}
}

impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for DateTime {
	fn from(value: chrono::DateTime<Tz>) -> Self {
		Self(value.fixed_offset())
	}
}

impl fmt::Display for DateTime {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.format())
	}
}

impl FromStr for DateTime {
	type Err = crate::Error;

	fn from_str(s: &str) -> Result<Self> {
		<Self as Scalar>::parse(s)
	}
}

impl Scalar for DateTime {
	const KIND: &'static str = "DateTime";

	fn parse(text: &str) -> Result<Self> {
		let trimmed = text.trim();
		if let Ok(value) = chrono::DateTime::parse_from_rfc3339(trimmed) {
			return Ok(Self(value));
		}
		let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
			.map_err(|e| errors::invalid_format(Self::KIND, text, e))?;
		Ok(Self(naive.and_utc().fixed_offset()))
	}

	fn format(&self) -> Cow<'_, str> {
		Cow::Owned(self.0.to_rfc3339_opts(SecondsFormat::AutoSi, false))
	}
}

/// `xs:time` (without offset)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(NaiveTime);

impl Time {
	/// Wrap a time of day
	pub fn new(value: NaiveTime) -> Self {
		Self(value)
	}

	/// Time from hours, minutes and seconds
	pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self> {
		NaiveTime::from_hms_opt(hour, minute, second)
			.map(Self)
			.ok_or_else(|| errors::invalid_format(Self::KIND, &format!("{}:{}:{}", hour, minute, second), "no valid time of day"))
	}

	/// Time of day
	pub fn value(&self) -> NaiveTime {
		self.0
	}
}

impl From<NaiveTime> for Time {
	fn from(value: NaiveTime) -> Self {
		Self(value)
	}
}

impl fmt::Display for Time {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.format())
	}
}

impl FromStr for Time {
	type Err = crate::Error;

	fn from_str(s: &str) -> Result<Self> {
		<Self as Scalar>::parse(s)
	}
}

impl Scalar for Time {
	const KIND: &'static str = "Time";

	fn parse(text: &str) -> Result<Self> {
		NaiveTime::parse_from_str(text.trim(), "%H:%M:%S%.f")
			.map(Self)
			.map_err(|e| errors::invalid_format(Self::KIND, text, e))
	}

	fn format(&self) -> Cow<'_, str> {
		let base = self.0.format("%H:%M:%S").to_string();
		let nanos = self.0.nanosecond();
		if nanos == 0 {
			return Cow::Owned(base);
		}
		let fraction = format!("{:09}", nanos);
		Cow::Owned(format!("{}.{}", base, fraction.trim_end_matches('0')))
	}
}

scalar_element!(DateTime, Time);
