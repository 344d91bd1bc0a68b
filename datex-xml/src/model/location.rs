//! Types from the `locationReferencing` namespace (`loc`)

use crate::{
	extension::ExtensionBlob,
	name::ns,
	scalar::{
		GmlPosList,
		Latitude,
		Longitude,
	},
	Element,
};

/// WGS 84 coordinates
#[derive(Clone, Debug, PartialEq, Element)]
#[datex(ns = ns::LOCATION_REFERENCING)]
pub struct PointCoordinates {
	pub latitude: Latitude,
	pub longitude: Longitude,
	pub _point_coordinates_extension: Option<ExtensionBlob>,
}

impl PointCoordinates {
	/// Validated coordinates
	pub fn new(latitude: f64, longitude: f64) -> crate::Result<Self> {
		Ok(Self {
			latitude: Latitude::new(latitude)?,
			longitude: Longitude::new(longitude)?,
			_point_coordinates_extension: None,
		})
	}
}

/// Point given by coordinates
#[derive(Clone, Debug, PartialEq, Element)]
#[datex(ns = ns::LOCATION_REFERENCING)]
pub struct PointByCoordinates {
	/// Direction in degrees (0 = north)
	pub bearing: Option<u16>,
	pub point_coordinates: PointCoordinates,
	pub _point_by_coordinates_extension: Option<ExtensionBlob>,
}

/// Single point
#[derive(Clone, Debug, PartialEq, Element)]
#[datex(ns = ns::LOCATION_REFERENCING)]
pub struct PointLocation {
	pub point_by_coordinates: Option<PointByCoordinates>,
	pub _point_location_extension: Option<ExtensionBlob>,
}

/// GML line string: `<loc:posList>lat lon lat lon ...</loc:posList>`
#[derive(Clone, Debug, PartialEq, Element)]
#[datex(ns = ns::LOCATION_REFERENCING)]
pub struct GmlLineString {
	/// Number of values per position
	#[datex(attr)]
	pub srs_dimension: Option<u8>,
	pub pos_list: GmlPosList,
	pub _gml_line_string_extension: Option<ExtensionBlob>,
}

/// Line (road section, path)
#[derive(Clone, Debug, PartialEq, Element)]
#[datex(ns = ns::LOCATION_REFERENCING)]
pub struct LinearLocation {
	pub gml_line_string: Option<GmlLineString>,
	pub _linear_location_extension: Option<ExtensionBlob>,
}

crate::xsi_type_union! {
	/// Abstract `loc:LocationReference`
	pub enum LocationReference in "LocationReference" {
		Point(PointLocation) = [ns::LOCATION_REFERENCING, "PointLocation"] marker [ns::LOCATION_REFERENCING, "pointByCoordinates"],
		Linear(LinearLocation) = [ns::LOCATION_REFERENCING, "LinearLocation"] marker [ns::LOCATION_REFERENCING, "gmlLineString"],
	}
}
