//! Types from the `energyInfrastructure` namespace (`egi`): charging and refuelling sites
//!
//! The table publication describes the (mostly static) sites with their stations and rates, the
//! status publication carries the dynamic state of those sites.

use crate::{
	extension::ExtensionBlob,
	model::{
		common::VersionedReference,
		facilities::{
			Facility,
			FacilityStatus,
			RateLineType,
		},
	},
	name::ns,
	payload::PayloadHeader,
	scalar::{
		CurrencyCode,
		DatexString,
		DateTime,
		MonetaryValue,
	},
	Element,
};

crate::open_enum! {
	/// Kind of energy infrastructure site
	pub struct SiteType in "SiteType" {
		ON_STREET = "onstreet",
		PARKING = "parking",
		RESTING_AREA = "restingArea",
		SERVICE_AREA = "serviceArea",
		FUEL_STATION = "fuelStation",
		OTHER = "other",
	}
}

crate::open_enum! {
	/// What a price is charged for
	pub struct PriceType in "PriceType" {
		PRICE_PER_KWH = "pricePerKWh",
		PRICE_PER_MINUTE = "pricePerMinute",
		FLAT_RATE = "flatRate",
		PRICE_PER_LITRE = "pricePerLitre",
		PRICE_PER_KG = "pricePerKg",
		OTHER = "other",
	}
}

/// Single price component of a rate
#[derive(Clone, Debug, PartialEq, Element)]
#[datex(ns = ns::ENERGY_INFRASTRUCTURE)]
pub struct EnergyPrice {
	pub price_type: PriceType,
	/// Amount in the currency of the rate
	pub value: MonetaryValue,
	pub tax_included: Option<bool>,
	pub _energy_price_extension: Option<ExtensionBlob>,
}

/// Pricing of a station
#[derive(Clone, Debug, PartialEq, Element)]
#[datex(ns = ns::ENERGY_INFRASTRUCTURE)]
pub struct EnergyRate {
	pub rate_line_type: Option<RateLineType>,
	pub applicable_currency: Vec<CurrencyCode>,
	pub energy_price: Vec<EnergyPrice>,
	pub last_updated: Option<DateTime>,
	pub _energy_rate_extension: Option<ExtensionBlob>,
}

/// Group of refill points (e.g. a charging pole)
#[derive(Clone, Debug, PartialEq, Element)]
#[datex(ns = ns::ENERGY_INFRASTRUCTURE)]
pub struct EnergyInfrastructureStation {
	#[datex(flatten)]
	pub facility: Facility,
	/// Maximum power output in kW
	pub total_maximum_power: Option<f64>,
	pub number_of_refill_points: Option<u32>,
	pub energy_rate: Vec<EnergyRate>,
	pub _energy_infrastructure_station_extension: Option<ExtensionBlob>,
}

/// Site with one or more stations
#[derive(Clone, Debug, PartialEq, Element)]
#[datex(ns = ns::ENERGY_INFRASTRUCTURE)]
pub struct EnergyInfrastructureSite {
	#[datex(flatten)]
	pub facility: Facility,
	pub type_of_site: Option<SiteType>,
	pub energy_infrastructure_station: Vec<EnergyInfrastructureStation>,
	pub _energy_infrastructure_site_extension: Option<ExtensionBlob>,
}

/// Versioned collection of sites
#[derive(Clone, Debug, PartialEq, Element)]
#[datex(ns = ns::ENERGY_INFRASTRUCTURE)]
pub struct EnergyInfrastructureTable {
	#[datex(attr)]
	pub id: DatexString,
	#[datex(attr)]
	pub version: DatexString,
	pub energy_infrastructure_site: Vec<EnergyInfrastructureSite>,
	pub _energy_infrastructure_table_extension: Option<ExtensionBlob>,
}

/// Publication of energy infrastructure tables
#[derive(Clone, Debug, PartialEq, Element)]
#[datex(ns = ns::ENERGY_INFRASTRUCTURE)]
pub struct EnergyInfrastructureTablePublication {
	#[datex(flatten)]
	pub header: PayloadHeader,
	pub energy_infrastructure_table: Vec<EnergyInfrastructureTable>,
	pub _energy_infrastructure_table_publication_extension: Option<ExtensionBlob>,
}

/// Dynamic state of a site
#[derive(Clone, Debug, PartialEq, Element)]
#[datex(ns = ns::ENERGY_INFRASTRUCTURE)]
pub struct EnergyInfrastructureSiteStatus {
	#[datex(flatten)]
	pub status: FacilityStatus,
	pub number_of_available_refill_points: Option<u32>,
	pub _energy_infrastructure_site_status_extension: Option<ExtensionBlob>,
}

/// Publication of site states
#[derive(Clone, Debug, PartialEq, Element)]
#[datex(ns = ns::ENERGY_INFRASTRUCTURE)]
pub struct EnergyInfrastructureStatusPublication {
	#[datex(flatten)]
	pub header: PayloadHeader,
	/// Table the statuses refer to
	pub energy_infrastructure_table_reference: Option<VersionedReference>,
	pub energy_infrastructure_site_status: Vec<EnergyInfrastructureSiteStatus>,
	pub _energy_infrastructure_status_publication_extension: Option<ExtensionBlob>,
}
