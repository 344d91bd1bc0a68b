//! Traits and helper structs to decode elements from an XML tree
//!
//! To implement parsing for your data types (mapping to XML elements) you need intermediate
//! "state" types (implementing `ElementState`), which work like "builders": they will receive the
//! various parts incrementally until they can "build" the result.
//!
//! To define a default state for your type (so it can be easily found in certain places) you need
//! to implement `Element`.
//!
//! The name of an element is decided by the surrounding type, not by the element type itself:
//! the same DATEX II type shows up under many element names. Child elements are collected by
//! `InnerState` types which know the name to match; the default state is defined by implementing
//! `Inner`.  If `E` implements `Element`, `E`, `Option<E>`, and `Vec<E>` automatically implement
//! `Inner`.
//!
//! Base types shared by several elements implement `Group` and are flattened into the embedding
//! element.
//!
//! Unknown attributes and elements are skipped; text in elements with element-only content is an
//! error.

mod core;
mod default;
mod ignore;
mod inner;
mod value;

pub use self::{
	core::{
		ElementParser,
		ElementState,
	},
	default::{
		Element,
		ElementDefaultParseState,
		Group,
		Inner,
		InnerDefaultParseState,
	},
	ignore::{
		ignore_attribute,
		IgnoreElement,
	},
	inner::{
		InnerParseResult,
		InnerState,
		ParseElementList,
		ParseElementOnce,
		ParseElementOptional,
	},
	value::ValueState,
};

use crate::{
	tree::XmlElement,
	Result,
};

/// Decode `element` (whatever its name) with the default state of `E`
pub fn from_element<E: Element>(element: &XmlElement) -> Result<E> {
	ElementParser::new(element).parse::<E>()
}
