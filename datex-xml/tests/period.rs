#![cfg(feature = "quick-xml")]

use chrono::{
	TimeZone,
	Utc,
};
use datex_xml::{
	model::common::{
		Day,
		DayWeekMonth,
		MonthOfYear,
		Period,
		SpecialDay,
		SpecialDayType,
		TimePeriodByHour,
		TimePeriodOfDay,
	},
	multilingual::MultilingualString,
	name::{
		ns,
		NamespaceContext,
		QName,
	},
	parser,
	quick_xml::{
		read_document,
		write_document,
		WriteOptions,
	},
	scalar::{
		DateTime,
		Time,
	},
	serializer,
	tree::XmlElement,
	Error,
};
use pretty_assertions::assert_eq;

const PERIOD: QName = QName::new(ns::COMMON, "period");

fn by_hour(start: (u32, u32), end: (u32, u32)) -> TimePeriodOfDay {
	TimePeriodOfDay::ByHour(TimePeriodByHour {
		start_time_of_period: Time::from_hms(start.0, start.1, 0).unwrap(),
		end_time_of_period: Time::from_hms(end.0, end.1, 0).unwrap(),
		_time_period_by_hour_extension: None,
	})
}

fn period() -> Period {
	Period {
		start_of_period: Some(DateTime::from(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())),
		end_of_period: Some(DateTime::from(Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap())),
		period_name: Some(MultilingualString::from_pairs([("de", "Hallo Welt!"), ("en", "Hello World!")]).unwrap()),
		recurring_time_period_of_day: vec![by_hour((8, 0), (12, 0)), by_hour((13, 0), (17, 30))],
		recurring_day_week_month_period: vec![DayWeekMonth {
			applicable_day: vec![Day::MONDAY, Day::FRIDAY],
			applicable_month: vec![MonthOfYear::DECEMBER],
			..DayWeekMonth::default()
		}],
		recurring_special_day: vec![SpecialDay {
			intersect_with_applicable_days: false,
			special_day_type: SpecialDayType::PUBLIC_HOLIDAY,
			_special_day_extension: None,
		}],
		_period_extension: None,
	}
}

const REFERENCE: &str = concat!(
	r#"<com:period xmlns:com="http://datex2.eu/schema/3/common" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
	r#"<com:startOfPeriod>2024-01-01T00:00:00+00:00</com:startOfPeriod>"#,
	r#"<com:endOfPeriod>2024-12-31T23:59:59+00:00</com:endOfPeriod>"#,
	r#"<com:periodName><com:values>"#,
	r#"<com:value lang="de">Hallo Welt!</com:value>"#,
	r#"<com:value lang="en">Hello World!</com:value>"#,
	r#"</com:values></com:periodName>"#,
	r#"<com:recurringTimePeriodOfDay xsi:type="com:TimePeriodByHour">"#,
	r#"<com:startTimeOfPeriod>08:00:00</com:startTimeOfPeriod>"#,
	r#"<com:endTimeOfPeriod>12:00:00</com:endTimeOfPeriod>"#,
	r#"</com:recurringTimePeriodOfDay>"#,
	r#"<com:recurringTimePeriodOfDay xsi:type="com:TimePeriodByHour">"#,
	r#"<com:startTimeOfPeriod>13:00:00</com:startTimeOfPeriod>"#,
	r#"<com:endTimeOfPeriod>17:30:00</com:endTimeOfPeriod>"#,
	r#"</com:recurringTimePeriodOfDay>"#,
	r#"<com:recurringDayWeekMonthPeriod>"#,
	r#"<com:applicableDay>monday</com:applicableDay>"#,
	r#"<com:applicableDay>friday</com:applicableDay>"#,
	r#"<com:applicableMonth>december</com:applicableMonth>"#,
	r#"</com:recurringDayWeekMonthPeriod>"#,
	r#"<com:recurringSpecialDay>"#,
	r#"<com:intersectWithApplicableDays>false</com:intersectWithApplicableDays>"#,
	r#"<com:specialDayType>publicHoliday</com:specialDayType>"#,
	r#"</com:recurringSpecialDay>"#,
	r#"</com:period>"#,
);

fn options() -> WriteOptions {
	WriteOptions {
		namespaces: NamespaceContext::new().with("com", ns::COMMON).with("xsi", ns::XSI),
		..WriteOptions::compact()
	}
}

#[test]
fn reference_document() {
	let element = serializer::to_element(&PERIOD, &period()).unwrap();
	assert_eq!(write_document(&element, &options()).unwrap(), REFERENCE);
}

#[test]
fn reference_document_decodes() {
	let element = read_document(REFERENCE).unwrap();
	assert_eq!(parser::from_element::<Period>(&element).unwrap(), period());
}

#[test]
fn pretty_printed_input() {
	let pretty = WriteOptions {
		indent: Some(4),
		..WriteOptions::default()
	};
	let element = serializer::to_element(&PERIOD, &period()).unwrap();
	let text = write_document(&element, &pretty).unwrap();
	assert_eq!(parser::from_element::<Period>(&read_document(&text).unwrap()).unwrap(), period());
}

#[test]
fn other_offsets_are_kept() {
	let text = concat!(
		r#"<com:period xmlns:com="http://datex2.eu/schema/3/common">"#,
		r#"<com:startOfPeriod>2024-06-01T08:00:00+02:00</com:startOfPeriod>"#,
		r#"<com:endOfPeriod>2024-06-01T18:00:00</com:endOfPeriod>"#,
		r#"</com:period>"#,
	);
	let decoded = parser::from_element::<Period>(&read_document(text).unwrap()).unwrap();
	let start = decoded.start_of_period.unwrap();
	assert_eq!(start.to_string(), "2024-06-01T08:00:00+02:00");
	// no offset: UTC
	assert_eq!(decoded.end_of_period.unwrap().to_string(), "2024-06-01T18:00:00+00:00");
}

#[test]
fn missing_time_of_period() {
	let element = XmlElement::new(PERIOD).with_child(
		XmlElement::new(QName::new(ns::COMMON, "recurringTimePeriodOfDay"))
			.with_xsi_type(QName::new(ns::COMMON, "TimePeriodByHour"))
			.with_child(XmlElement::new(QName::new(ns::COMMON, "startTimeOfPeriod")).with_text("08:00:00")),
	);
	let err = parser::from_element::<Period>(&element).unwrap_err();
	assert!(matches!(err, Error::MissingRequiredField(n) if n == QName::new(ns::COMMON, "endTimeOfPeriod")));
}

#[test]
fn text_in_complex_element() {
	let element = XmlElement::new(PERIOD).with_text("stray");
	assert!(matches!(parser::from_element::<Period>(&element), Err(Error::UnexpectedText(_))));
}
