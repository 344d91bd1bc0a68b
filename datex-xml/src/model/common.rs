//! Types from the `common` namespace (`com`)

use crate::{
	extension::ExtensionBlob,
	multilingual::MultilingualString,
	name::ns,
	scalar::{
		CountryCode,
		DatexString,
		DateTime,
		Time,
	},
	Element,
};

crate::open_enum! {
	/// Days of the week
	pub struct Day in "Day" {
		MONDAY = "monday",
		TUESDAY = "tuesday",
		WEDNESDAY = "wednesday",
		THURSDAY = "thursday",
		FRIDAY = "friday",
		SATURDAY = "saturday",
		SUNDAY = "sunday",
	}
}

crate::open_enum! {
	/// Months of the year
	pub struct MonthOfYear in "MonthOfYear" {
		JANUARY = "january",
		FEBRUARY = "february",
		MARCH = "march",
		APRIL = "april",
		MAY = "may",
		JUNE = "june",
		JULY = "july",
		AUGUST = "august",
		SEPTEMBER = "september",
		OCTOBER = "october",
		NOVEMBER = "november",
		DECEMBER = "december",
	}
}

crate::open_enum! {
	/// Which occurrence of a weekday within a month (`first` monday, `last` friday, ...)
	pub struct InstanceOfDayWithinMonth in "InstanceOfDayWithinMonth" {
		FIRST = "first",
		SECOND = "second",
		THIRD = "third",
		FOURTH = "fourth",
		FIFTH = "fifth",
		SIXTH = "sixth",
		LAST = "last",
	}
}

crate::open_enum! {
	/// Kinds of special days
	pub struct SpecialDayType in "SpecialDayType" {
		DAY_BEFORE_PUBLIC_HOLIDAY = "dayBeforePublicHoliday",
		PUBLIC_HOLIDAY = "publicHoliday",
		DAY_FOLLOWING_PUBLIC_HOLIDAY = "dayFollowingPublicHoliday",
		LONG_WEEKEND_DAY = "longWeekendDay",
		IN_LIEU_OF_PUBLIC_HOLIDAY = "inLieuOfPublicHoliday",
		SCHOOL_DAY = "schoolDay",
		SCHOOL_HOLIDAYS = "schoolHolidays",
		PUBLIC_EVENT_DAY = "publicEventDay",
		OTHER_SPECIAL_DAY = "otherSpecialDay",
	}
}

/// Identifier of an organisation issuing publications
#[derive(Clone, Debug, PartialEq, Element)]
#[datex(ns = ns::COMMON)]
pub struct InternationalIdentifier {
	/// Country of the national identifier
	pub country: CountryCode,
	/// Identifier within the country
	pub national_identifier: DatexString,
	pub _international_identifier_extension: Option<ExtensionBlob>,
}

/// Time window within a day
#[derive(Clone, Debug, PartialEq, Element)]
#[datex(ns = ns::COMMON)]
pub struct TimePeriodByHour {
	/// Start of the window
	pub start_time_of_period: Time,
	/// End of the window
	pub end_time_of_period: Time,
	pub _time_period_by_hour_extension: Option<ExtensionBlob>,
}

crate::xsi_type_union! {
	/// Abstract `com:TimePeriodOfDay`
	pub enum TimePeriodOfDay in "TimePeriodOfDay" {
		/// Start and end time
		ByHour(TimePeriodByHour) = [ns::COMMON, "TimePeriodByHour"] marker [ns::COMMON, "startTimeOfPeriod"],
	}
}

/// Selection of days by weekday, occurrence within the month and month
///
/// Empty lists don't restrict the selection.
#[derive(Clone, Debug, Default, PartialEq, Element)]
#[datex(ns = ns::COMMON)]
pub struct DayWeekMonth {
	pub applicable_day: Vec<Day>,
	pub applicable_instance_of_day_within_month: Vec<InstanceOfDayWithinMonth>,
	pub applicable_month: Vec<MonthOfYear>,
	pub _day_week_month_extension: Option<ExtensionBlob>,
}

/// Special day (holiday, school day, ...)
#[derive(Clone, Debug, PartialEq, Element)]
#[datex(ns = ns::COMMON)]
pub struct SpecialDay {
	/// Whether the special day only applies when it also matches the other selected days
	pub intersect_with_applicable_days: bool,
	pub special_day_type: SpecialDayType,
	pub _special_day_extension: Option<ExtensionBlob>,
}

/// Period of time, optionally with recurring sub periods
#[derive(Clone, Debug, Default, PartialEq, Element)]
#[datex(ns = ns::COMMON)]
pub struct Period {
	pub start_of_period: Option<DateTime>,
	pub end_of_period: Option<DateTime>,
	pub period_name: Option<MultilingualString>,
	/// Time windows within each selected day
	pub recurring_time_period_of_day: Vec<TimePeriodOfDay>,
	pub recurring_day_week_month_period: Vec<DayWeekMonth>,
	pub recurring_special_day: Vec<SpecialDay>,
	pub _period_extension: Option<ExtensionBlob>,
}

/// Reference to a versioned object: `<... targetClass="..." id="..." version="..."/>`
#[derive(Clone, Debug, PartialEq, Element)]
pub struct VersionedReference {
	/// Class of the referenced object (e.g. `fac:Site`)
	#[datex(attr)]
	pub target_class: Option<DatexString>,
	#[datex(attr)]
	pub id: DatexString,
	#[datex(attr)]
	pub version: DatexString,
}

/// Publication of content not covered by other publication types
#[derive(Clone, Debug, PartialEq, Element)]
#[datex(ns = ns::COMMON)]
pub struct GenericPublication {
	#[datex(flatten)]
	pub header: crate::payload::PayloadHeader,
	/// Name identifying the kind of content
	pub generic_publication_name: DatexString,
	pub _generic_publication_extension: Option<ExtensionBlob>,
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		enumeration::OpenEnum,
		name::QName,
		parser,
		serializer,
		tree::XmlElement,
		Error,
	};
	use pretty_assertions::assert_eq;

	const SPECIAL_DAY: QName = QName::new(ns::COMMON, "recurringSpecialDay");

	#[test]
	fn instance_of_day_members() {
		let members: Vec<_> = InstanceOfDayWithinMonth::WELL_KNOWN.iter().map(|m| m.as_str()).collect();
		assert_eq!(members, ["first", "second", "third", "fourth", "fifth", "sixth", "last", "_extended"]);
	}

	#[test]
	fn required_child() {
		let element = XmlElement::new(SPECIAL_DAY)
			.with_child(XmlElement::new(QName::new(ns::COMMON, "intersectWithApplicableDays")).with_text("true"));
		let err = parser::from_element::<SpecialDay>(&element).unwrap_err();
		assert!(matches!(err, Error::MissingRequiredField(n) if n == QName::new(ns::COMMON, "specialDayType")));
	}

	#[test]
	fn unknown_child_ignored() {
		let element = XmlElement::new(SPECIAL_DAY)
			.with_child(XmlElement::new(QName::new(ns::COMMON, "publicEvent")).with_text("carnival"))
			.with_child(XmlElement::new(QName::new(ns::COMMON, "intersectWithApplicableDays")).with_text("false"))
			.with_child(
				XmlElement::new(QName::new(ns::COMMON, "specialDayType"))
					.with_attribute(QName::unqualified("extendedValue"), "bridgeDay")
					.with_text("_extended"),
			);
		let day = parser::from_element::<SpecialDay>(&element).unwrap();
		assert!(!day.intersect_with_applicable_days);
		assert_eq!(day.special_day_type.as_str(), "bridgeDay");
	}

	#[test]
	fn reference_attributes() {
		let reference = VersionedReference {
			target_class: None,
			id: DatexString::new("site-1").unwrap(),
			version: DatexString::new("3").unwrap(),
		};
		let name = QName::new(ns::FACILITIES, "reference");
		let element = serializer::to_element(&name, &reference).unwrap();
		assert_eq!(element.attribute(&QName::unqualified("id")), Some("site-1"));
		assert!(element.children.is_empty());
		assert_eq!(parser::from_element::<VersionedReference>(&element).unwrap(), reference);

		let no_version = XmlElement::new(name).with_attribute(QName::unqualified("id"), "x");
		assert!(matches!(
			parser::from_element::<VersionedReference>(&no_version),
			Err(Error::MissingRequiredField(n)) if n == QName::unqualified("version")
		));
	}
}
