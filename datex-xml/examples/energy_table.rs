// use `cargo run -p datex-xml --example energy_table` to run from git repository base directory

use datex_xml::{
	model::{
		common::InternationalIdentifier,
		energy_infrastructure::{
			EnergyInfrastructureSite,
			EnergyInfrastructureTable,
			EnergyInfrastructureTablePublication,
			SiteType,
		},
		facilities::Facility,
	},
	multilingual::MultilingualString,
	payload::{
		self,
		PayloadHeader,
		PayloadPublication,
	},
	quick_xml::WriteOptions,
	scalar::{
		CountryCode,
		DatexString,
		DateTime,
		LanguageCode,
	},
};

fn main() -> datex_xml::Result<()> {
	let mut facility = Facility::new(DatexString::new("site-1")?, DatexString::new("1")?);
	facility.name = Some(MultilingualString::from_pairs([("de", "Ladepark Mitte"), ("en", "Central charging park")])?);

	let publication = PayloadPublication::from(EnergyInfrastructureTablePublication {
		header: PayloadHeader::new(
			LanguageCode::new("de")?,
			DateTime::from(chrono::Utc::now()),
			InternationalIdentifier {
				country: CountryCode::new("de")?,
				national_identifier: DatexString::new("example")?,
				_international_identifier_extension: None,
			},
		)?,
		energy_infrastructure_table: vec![EnergyInfrastructureTable {
			id: DatexString::new("table-1")?,
			version: DatexString::new("1")?,
			energy_infrastructure_site: vec![EnergyInfrastructureSite {
				facility,
				type_of_site: Some(SiteType::PARKING),
				energy_infrastructure_station: Vec::new(),
				_energy_infrastructure_site_extension: None,
			}],
			_energy_infrastructure_table_extension: None,
		}],
		_energy_infrastructure_table_publication_extension: None,
	});

	eprintln!("Generating XML output...");

	let text = payload::to_xml_string(&publication, &WriteOptions::default())?;
	println!("{}", text);

	// and back
	let decoded = payload::from_xml_str(&text)?;
	assert_eq!(decoded, publication);
	Ok(())
}
