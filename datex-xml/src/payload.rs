//! Payload root (`d2:payload`): the entry point for complete DATEX II documents
//!
//! The root element is declared with the abstract type `PayloadPublication`; its `xsi:type`
//! selects the concrete publication:
//!
//! ```xml
//! <d2:payload xsi:type="egi:EnergyInfrastructureTablePublication" lang="de" modelBaseVersion="3">
//!   <com:publicationTime>2024-03-01T12:00:00+01:00</com:publicationTime>
//!   ...
//! </d2:payload>
//! ```

use crate::{
	errors,
	extension::ExtensionBlob,
	model::{
		common::{
			GenericPublication,
			InternationalIdentifier,
		},
		energy_infrastructure::{
			EnergyInfrastructureStatusPublication,
			EnergyInfrastructureTablePublication,
		},
	},
	multilingual::MultilingualString,
	name::{
		ns,
		QName,
	},
	parser,
	scalar::{
		DatexString,
		DateTime,
		LanguageCode,
		ShortString,
	},
	serializer,
	tree::XmlElement,
	Group,
	Result,
};

/// Name of the root element
pub const PAYLOAD: QName = QName::new(ns::D2_PAYLOAD, "payload");

/// Fields every publication carries (`com:PayloadPublication`)
#[derive(Clone, Debug, PartialEq, Group)]
#[datex(ns = ns::COMMON)]
pub struct PayloadHeader {
	/// Default language of the publication
	#[datex(attr)]
	pub lang: LanguageCode,
	/// Version of the DATEX II model (`3`)
	#[datex(attr)]
	pub model_base_version: ShortString,
	/// Name of the model extension the publication uses
	#[datex(attr)]
	pub extension_name: Option<ShortString>,
	/// Version of the model extension
	#[datex(attr)]
	pub extension_version: Option<ShortString>,
	/// Name of the profile the publication conforms to
	#[datex(attr)]
	pub profile_name: Option<ShortString>,
	/// Version of the profile
	#[datex(attr)]
	pub profile_version: Option<ShortString>,
	/// Human readable description of the feed
	pub feed_description: Option<MultilingualString>,
	/// Machine readable feed classification
	pub feed_type: Option<DatexString>,
	/// When the publication was created
	pub publication_time: DateTime,
	/// Who created the publication
	pub publication_creator: InternationalIdentifier,
	/// Extension slot
	pub _payload_publication_extension: Option<ExtensionBlob>,
}

impl PayloadHeader {
	/// Header for model version 3 without optional parts
	pub fn new(lang: LanguageCode, publication_time: DateTime, publication_creator: InternationalIdentifier) -> Result<Self> {
		Ok(Self {
			lang,
			model_base_version: ShortString::new("3")?,
			extension_name: None,
			extension_version: None,
			profile_name: None,
			profile_version: None,
			feed_description: None,
			feed_type: None,
			publication_time,
			publication_creator,
			_payload_publication_extension: None,
		})
	}
}

crate::xsi_type_union! {
	/// Concrete publications a payload can carry
	pub enum PayloadPublication in "PayloadPublication" {
		/// Static energy infrastructure data
		EnergyInfrastructureTable(EnergyInfrastructureTablePublication) =
			[ns::ENERGY_INFRASTRUCTURE, "EnergyInfrastructureTablePublication"]
			marker [ns::ENERGY_INFRASTRUCTURE, "energyInfrastructureTable"],
		/// Dynamic energy infrastructure data
		EnergyInfrastructureStatus(EnergyInfrastructureStatusPublication) =
			[ns::ENERGY_INFRASTRUCTURE, "EnergyInfrastructureStatusPublication"]
			marker [ns::ENERGY_INFRASTRUCTURE, "energyInfrastructureSiteStatus"],
		/// Anything else
		Generic(GenericPublication) =
			[ns::COMMON, "GenericPublication"]
			marker [ns::COMMON, "genericPublicationName"],
	}
}

impl PayloadPublication {
	/// The common fields
	pub fn header(&self) -> &PayloadHeader {
		match self {
			PayloadPublication::EnergyInfrastructureTable(p) => &p.header,
			PayloadPublication::EnergyInfrastructureStatus(p) => &p.header,
			PayloadPublication::Generic(p) => &p.header,
		}
	}
}

/// Decode a payload root element
///
/// Fails with `UnexpectedElement` if the root isn't `d2:payload` and with `UnknownPayloadType` if
/// the concrete type can't be determined.
pub fn decode_root(root: &XmlElement) -> Result<PayloadPublication> {
	if root.name != PAYLOAD {
		return Err(errors::unexpected_element(&root.name, &PAYLOAD));
	}
	parser::from_element(root)
}

/// Encode a publication as `d2:payload` element (with `xsi:type`)
pub fn to_xml(publication: &PayloadPublication) -> Result<XmlElement> {
	serializer::to_element(&PAYLOAD, publication)
}

/// Result of [`try_parse_root`]
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutcome {
	/// Whether decoding succeeded
	pub success: bool,
	/// Decoded publication (on success)
	pub payload: Option<PayloadPublication>,
	/// Description of the failure
	pub error_message: Option<String>,
}

impl From<Result<PayloadPublication>> for ParseOutcome {
	fn from(result: Result<PayloadPublication>) -> Self {
		match result {
			Ok(payload) => Self {
				success: true,
				payload: Some(payload),
				error_message: None,
			},
			Err(e) => Self {
				success: false,
				payload: None,
				error_message: Some(e.to_string()),
			},
		}
	}
}

/// Like [`decode_root`], but reports failures in the outcome
pub fn try_parse_root(root: &XmlElement) -> ParseOutcome {
	let result = decode_root(root);
	if let Err(e) = &result {
		tracing::debug!(error = %e, "payload decoding failed");
	}
	result.into()
}

/// Read a document and decode its root
#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub fn from_xml_str(text: &str) -> Result<PayloadPublication> {
	decode_root(&crate::quick_xml::read_document(text)?)
}

/// Encode a publication as document
#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub fn to_xml_string(publication: &PayloadPublication, options: &crate::quick_xml::WriteOptions) -> Result<String> {
	crate::quick_xml::write_document(&to_xml(publication)?, options)
}
