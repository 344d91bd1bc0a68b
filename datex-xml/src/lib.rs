#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/datex-xml/0.1.0")]
//! Typed XML binding for DATEX II v3 payloads.
//!
//! DATEX II documents are mapped to strongly typed Rust structures: complex types become structs
//! (derived with [`Element`] and [`Group`]), enumerations become open enumerations (see
//! [`open_enum!`]) which accept values outside of the published list, abstract types become
//! enums dispatching on `xsi:type` (see [`xsi_type_union!`]), and simple types become validated
//! scalars.
//!
//! Decoding and encoding work on an in-memory XML tree ([`tree::XmlElement`]) with resolved
//! namespace names; the text form is handled by the [`quick_xml`](mod@quick_xml) adaptor (enabled
//! through the equally named feature).
//!
//! ```
//! use datex_xml::{
//!     model::common::{Period, TimePeriodByHour, TimePeriodOfDay},
//!     name::{ns, QName},
//!     parser, serializer,
//!     scalar::Time,
//! };
//!
//! let period = Period {
//!     recurring_time_period_of_day: vec![TimePeriodOfDay::ByHour(TimePeriodByHour {
//!         start_time_of_period: Time::from_hms(8, 0, 0).unwrap(),
//!         end_time_of_period: Time::from_hms(12, 0, 0).unwrap(),
//!         _time_period_by_hour_extension: None,
//!     })],
//!     ..Period::default()
//! };
//! let name = QName::new(ns::COMMON, "period");
//! let element = serializer::to_element(&name, &period).unwrap();
//! assert_eq!(parser::from_element::<Period>(&element).unwrap(), period);
//! ```
//!
//! The following traits can be derived:
//! - `Element`
//! - `Group`

extern crate self as datex_xml;

pub mod enumeration;
pub mod errors;
pub mod extension;
pub mod model;
pub mod multilingual;
pub mod name;
pub mod parser;
pub mod payload;
pub mod polymorphic;
pub mod scalar;
pub mod serializer;
mod traits;
pub mod tree;

pub use self::errors::{
	Error,
	Result,
};

#[cfg(feature = "quick-xml")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "quick-xml")))]
pub mod quick_xml;

pub use self::traits::{
	Element,
	Group,
};
