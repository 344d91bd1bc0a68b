//! Types from the `facilities` namespace (`fac`)

use crate::{
	extension::ExtensionBlob,
	model::{
		common::VersionedReference,
		location::LocationReference,
	},
	multilingual::MultilingualString,
	name::ns,
	scalar::{
		DatexString,
		DateTime,
	},
	Group,
};

crate::open_enum! {
	/// Whether a facility is open
	pub struct OpeningStatus in "OpeningStatus" {
		OPEN = "open",
		CLOSED = "closed",
		OPENING_SOON = "openingSoon",
		CLOSING_SOON = "closingSoon",
		STATUS_UNKNOWN = "statusUnknown",
	}
}

crate::open_enum! {
	/// How a rate line is applied
	pub struct RateLineType in "RateLineType" {
		FLAT_RATE = "flatRate",
		INCREMENT_PAYMENT = "incrementPayment",
		FREE_PERIOD = "freePeriod",
		MINIMUM_PAYMENT = "minimumPayment",
		MAXIMUM_PAYMENT = "maximumPayment",
		FLAT_RATE_TIER = "flatRateTier",
	}
}

/// Common part of all facilities (sites, stations, ...)
#[derive(Clone, Debug, PartialEq, Group)]
#[datex(ns = ns::FACILITIES)]
pub struct Facility {
	#[datex(attr)]
	pub id: DatexString,
	#[datex(attr)]
	pub version: DatexString,
	pub name: Option<MultilingualString>,
	pub description: Option<MultilingualString>,
	pub last_updated: Option<DateTime>,
	/// Where the facility is
	pub location_reference: Option<LocationReference>,
	pub _facility_extension: Option<ExtensionBlob>,
}

impl Facility {
	/// Facility with identification only
	pub fn new(id: DatexString, version: DatexString) -> Self {
		Self {
			id,
			version,
			name: None,
			description: None,
			last_updated: None,
			location_reference: None,
			_facility_extension: None,
		}
	}
}

/// Common part of all facility status records
#[derive(Clone, Debug, PartialEq, Group)]
#[datex(ns = ns::FACILITIES)]
pub struct FacilityStatus {
	/// The facility this status is about
	pub reference: VersionedReference,
	pub opening_status: Option<OpeningStatus>,
	pub last_updated: Option<DateTime>,
	pub _facility_status_extension: Option<ExtensionBlob>,
}
