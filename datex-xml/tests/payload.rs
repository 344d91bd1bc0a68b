#![cfg(feature = "quick-xml")]

use datex_xml::{
	enumeration::OpenEnum,
	extension::ExtensionBlob,
	model::{
		common::{
			GenericPublication,
			InternationalIdentifier,
			VersionedReference,
		},
		energy_infrastructure::{
			EnergyInfrastructureSite,
			EnergyInfrastructureSiteStatus,
			EnergyInfrastructureStation,
			EnergyInfrastructureStatusPublication,
			EnergyInfrastructureTable,
			EnergyInfrastructureTablePublication,
			SiteType,
		},
		facilities::{
			Facility,
			FacilityStatus,
			OpeningStatus,
		},
		location::{
			LocationReference,
			PointByCoordinates,
			PointCoordinates,
			PointLocation,
		},
	},
	multilingual::MultilingualString,
	name::{
		ns,
		QName,
	},
	payload::{
		self,
		PayloadHeader,
		PayloadPublication,
	},
	quick_xml::{
		read_document,
		write_document,
		WriteOptions,
	},
	scalar::{
		CountryCode,
		DatexString,
		DateTime,
		LanguageCode,
	},
	tree::XmlElement,
	Error,
};
use pretty_assertions::assert_eq;
use std::str::FromStr;

fn s(value: &str) -> DatexString {
	DatexString::new(value).unwrap()
}

fn header() -> PayloadHeader {
	PayloadHeader::new(
		LanguageCode::new("de").unwrap(),
		DateTime::from_str("2024-03-01T12:00:00+01:00").unwrap(),
		InternationalIdentifier {
			country: CountryCode::new("de").unwrap(),
			national_identifier: s("MDM"),
			_international_identifier_extension: None,
		},
	)
	.unwrap()
}

fn table_publication() -> PayloadPublication {
	let mut site = Facility::new(s("site-1"), s("4"));
	site.name = Some(MultilingualString::from_pairs([("de", "Ladepark"), ("en", "Charging park")]).unwrap());
	site.location_reference = Some(LocationReference::Point(PointLocation {
		point_by_coordinates: Some(PointByCoordinates {
			bearing: Some(90),
			point_coordinates: PointCoordinates::new(48.137, 11.575).unwrap(),
			_point_by_coordinates_extension: None,
		}),
		_point_location_extension: None,
	}));
	PayloadPublication::EnergyInfrastructureTable(EnergyInfrastructureTablePublication {
		header: header(),
		energy_infrastructure_table: vec![EnergyInfrastructureTable {
			id: s("table-1"),
			version: s("7"),
			energy_infrastructure_site: vec![EnergyInfrastructureSite {
				facility: site,
				type_of_site: Some(SiteType::intern("truckStop").unwrap()),
				energy_infrastructure_station: vec![EnergyInfrastructureStation {
					facility: Facility::new(s("station-1"), s("1")),
					total_maximum_power: Some(300.0),
					number_of_refill_points: Some(4),
					energy_rate: Vec::new(),
					_energy_infrastructure_station_extension: None,
				}],
				_energy_infrastructure_site_extension: None,
			}],
			_energy_infrastructure_table_extension: None,
		}],
		_energy_infrastructure_table_publication_extension: None,
	})
}

fn status_publication() -> PayloadPublication {
	PayloadPublication::EnergyInfrastructureStatus(EnergyInfrastructureStatusPublication {
		header: header(),
		energy_infrastructure_table_reference: Some(VersionedReference {
			target_class: Some(s("egi:EnergyInfrastructureTable")),
			id: s("table-1"),
			version: s("7"),
		}),
		energy_infrastructure_site_status: vec![EnergyInfrastructureSiteStatus {
			status: FacilityStatus {
				reference: VersionedReference {
					target_class: None,
					id: s("site-1"),
					version: s("4"),
				},
				opening_status: Some(OpeningStatus::OPEN),
				last_updated: None,
				_facility_status_extension: None,
			},
			number_of_available_refill_points: Some(3),
			_energy_infrastructure_site_status_extension: None,
		}],
		_energy_infrastructure_status_publication_extension: None,
	})
}

#[test]
fn round_trip_all_publication_types() {
	for publication in [table_publication(), status_publication()] {
		let root = payload::to_xml(&publication).unwrap();
		assert_eq!(payload::decode_root(&root).unwrap(), publication);

		let text = payload::to_xml_string(&publication, &WriteOptions::default()).unwrap();
		assert_eq!(payload::from_xml_str(&text).unwrap(), publication);
	}
}

#[test]
fn document_prefixes() {
	let text = payload::to_xml_string(&status_publication(), &WriteOptions::compact()).unwrap();
	assert!(text.starts_with(r#"<d2:payload xmlns:com="http://datex2.eu/schema/3/common""#));
	assert!(text.contains(r#" xsi:type="egi:EnergyInfrastructureStatusPublication" lang="de" modelBaseVersion="3">"#));
	assert!(text.contains(r#"<fac:reference id="site-1" version="4"/>"#));
	assert!(text.contains("<fac:openingStatus>open</fac:openingStatus>"));
}

#[test]
fn extended_enum_value_in_document() {
	let text = payload::to_xml_string(&table_publication(), &WriteOptions::compact()).unwrap();
	assert!(text.contains(r#"<egi:typeOfSite extendedValue="truckStop">_extended</egi:typeOfSite>"#));
}

#[test]
fn unknown_discriminator() {
	let text = concat!(
		r#"<d2:payload xmlns:d2="http://datex2.eu/schema/3/d2Payload" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
		r#"xmlns:sit="http://datex2.eu/schema/3/situation" xsi:type="sit:SituationPublication" lang="en" modelBaseVersion="3"/>"#,
	);
	let err = payload::from_xml_str(text).unwrap_err();
	assert!(matches!(err, Error::UnknownPayloadType(t) if t == "{http://datex2.eu/schema/3/situation}SituationPublication"));
}

#[test]
fn missing_discriminator_uses_marker() {
	let mut root = payload::to_xml(&status_publication()).unwrap();
	root.xsi_type = None;
	assert_eq!(payload::decode_root(&root).unwrap(), status_publication());

	let mut bare = XmlElement::new(payload::PAYLOAD);
	bare.attributes = root.attributes.clone();
	assert!(matches!(payload::decode_root(&bare), Err(Error::UnknownPayloadType(_))));
}

#[test]
fn wrong_root_element() {
	let mut root = payload::to_xml(&status_publication()).unwrap();
	root.name = QName::new(ns::ENERGY_INFRASTRUCTURE, "payload");
	let outcome = payload::try_parse_root(&root);
	assert!(!outcome.success);
	assert!(outcome.error_message.unwrap().contains("expected {http://datex2.eu/schema/3/d2Payload}payload"));
}

#[test]
fn unknown_children_are_ignored() {
	let mut root = payload::to_xml(&status_publication()).unwrap();
	root.push_element(XmlElement::new(QName::new(ns::ENERGY_INFRASTRUCTURE, "futureElement")).with_text("x"));
	root.set_attribute(QName::unqualified("futureAttribute"), "y");
	assert_eq!(payload::decode_root(&root).unwrap(), status_publication());
}

#[test]
fn missing_required_child() {
	let text = concat!(
		r#"<d2:payload xmlns:d2="http://datex2.eu/schema/3/d2Payload" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
		r#"xmlns:com="http://datex2.eu/schema/3/common" xsi:type="com:GenericPublication" lang="en" modelBaseVersion="3">"#,
		r#"<com:publicationTime>2024-03-01T12:00:00Z</com:publicationTime>"#,
		r#"<com:genericPublicationName>test</com:genericPublicationName>"#,
		r#"</d2:payload>"#,
	);
	let err = payload::from_xml_str(text).unwrap_err();
	assert!(matches!(err, Error::MissingRequiredField(n) if n == QName::new(ns::COMMON, "publicationCreator")));
}

#[test]
fn extension_slot_survives_text_round_trip() {
	let vendor = "urn:example:vendor";
	let mut publication = status_publication();
	if let PayloadPublication::EnergyInfrastructureStatus(p) = &mut publication {
		p._energy_infrastructure_status_publication_extension = Some(ExtensionBlob::from_content(
			QName::new(ns::ENERGY_INFRASTRUCTURE, "_energyInfrastructureStatusPublicationExtension"),
			[XmlElement::new(QName::owned(vendor, "queueLength"))
				.with_attribute(QName::owned(vendor, "unit"), "vehicles")
				.with_text("5")],
		));
	}
	let text = payload::to_xml_string(&publication, &WriteOptions::compact()).unwrap();
	assert!(text.contains(r#"<ns1:queueLength xmlns:ns1="urn:example:vendor" ns1:unit="vehicles">5</ns1:queueLength>"#));
	let decoded = payload::from_xml_str(&text).unwrap();
	assert_eq!(decoded, publication);
	// and the same document again
	let again = payload::to_xml_string(&decoded, &WriteOptions::compact()).unwrap();
	assert_eq!(again, text);
}

#[test]
fn documents_from_tree() {
	let root = payload::to_xml(&table_publication()).unwrap();
	let text = write_document(&root, &WriteOptions::default()).unwrap();
	assert_eq!(read_document(&text).unwrap(), root);
}

#[test]
fn blank_strings_are_not_values() {
	// `<x/>` and `<x>  </x>` decode as absent, so blank strings can't be built either
	assert!(matches!(DatexString::new(""), Err(Error::InvalidFormat { .. })));
	assert!(matches!(DatexString::new("   "), Err(Error::InvalidFormat { .. })));

	let mut header = header();
	header.feed_type = Some(s("  padded  "));
	let publication = PayloadPublication::Generic(GenericPublication {
		header,
		generic_publication_name: s(" x"),
		_generic_publication_extension: None,
	});
	let root = payload::to_xml(&publication).unwrap();
	assert_eq!(payload::decode_root(&root).unwrap(), publication);
	let text = payload::to_xml_string(&publication, &WriteOptions::compact()).unwrap();
	assert!(text.contains("<com:feedType>  padded  </com:feedType>"));
	assert_eq!(payload::from_xml_str(&text).unwrap(), publication);
}
