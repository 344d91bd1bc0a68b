//! Dispatch on the concrete type of elements declared with an abstract type
//!
//! An element of abstract type (e.g. the payload root or `com:recurringTimePeriodOfDay`) carries
//! its concrete type in `xsi:type`.  A type family is a Rust `enum` with one variant per concrete
//! type and a static registration table, declared with
//! [`xsi_type_union!`](crate::xsi_type_union).
//!
//! Decoding looks up `xsi:type` in the table; if the attribute is missing, the first type whose
//! marker child element is present wins.  Unknown types are an error, there is no fallback.

use crate::{
	errors,
	name::QName,
	parser::{
		ElementParser,
		ElementState,
	},
	Result,
};

/// Registration of one concrete type of a family
pub struct TypeEntry<T: 'static> {
	/// Schema type name (`xsi:type` value)
	pub type_name: QName,
	/// Child element only this type has; used if `xsi:type` is missing
	pub marker: Option<QName>,
	/// Decode the element as this type
	pub decode: fn(ElementParser<'_>) -> Result<T>,
}

/// Closed family of concrete types for an abstract type
pub trait Polymorphic: Sized + 'static {
	/// Name of the abstract type (for logging)
	const FAMILY: &'static str;

	/// Registration table; discriminators are unique
	fn types() -> &'static [TypeEntry<Self>];

	/// Discriminator of the concrete type of `self`
	fn type_name(&self) -> QName;
}

/// Find the registration matching the element
pub fn resolve<T: Polymorphic>(parser: &ElementParser<'_>) -> Result<&'static TypeEntry<T>> {
	let types = T::types();
	if let Some(xsi_type) = parser.xsi_type() {
		let entry = types
			.iter()
			.find(|entry| entry.type_name == *xsi_type)
			.ok_or_else(|| errors::unknown_payload_type(xsi_type))?;
		tracing::debug!(family = T::FAMILY, xsi_type = %entry.type_name, "resolved type");
		return Ok(entry);
	}
	let entry = types
		.iter()
		.find(|entry| entry.marker.as_ref().is_some_and(|marker| parser.has_child(marker)))
		.ok_or_else(|| errors::unknown_payload_type(format_args!("<no xsi:type on {}>", parser.name())))?;
	tracing::warn!(
		family = T::FAMILY,
		element = %parser.name(),
		xsi_type = %entry.type_name,
		"missing xsi:type, resolved type by marker element"
	);
	Ok(entry)
}

/// Resolve and decode
pub fn decode<T: Polymorphic>(parser: ElementParser<'_>) -> Result<T> {
	let entry = resolve::<T>(&parser)?;
	(entry.decode)(parser)
}

/// `ElementState` dispatching to the resolved concrete type
pub struct PolymorphicState<T> {
	value: T,
}

impl<T: Polymorphic> ElementState for PolymorphicState<T> {
	type Output = T;

	fn parse_element_start(parser: &ElementParser<'_>) -> Result<Self> {
		Ok(Self { value: decode(*parser)? })
	}

	// the concrete decoder already consumed the element

	fn parse_element_attribute(&mut self, _name: &QName, _value: &str) -> Result<()> {
		Ok(())
	}

	fn parse_element_inner_text(&mut self, _text: &str) -> Result<()> {
		Ok(())
	}

	fn parse_element_inner_node(&mut self, _parser: ElementParser<'_>) -> Result<()> {
		Ok(())
	}

	fn parse_element_finish(self) -> Result<Self::Output> {
		Ok(self.value)
	}
}

/// Declare a type family: an `enum` with one variant per concrete type.
///
/// ```
/// # use datex_xml::{Element, name::ns};
/// #[derive(Clone, Debug, PartialEq, Element)]
/// #[datex(ns = ns::COMMON)]
/// pub struct Circle {
///     radius: u32,
/// }
///
/// #[derive(Clone, Debug, PartialEq, Element)]
/// #[datex(ns = ns::COMMON)]
/// pub struct Square {
///     side: u32,
/// }
///
/// datex_xml::xsi_type_union! {
///     /// Any shape
///     pub enum Shape in "Shape" {
///         Circle(Circle) = [ns::COMMON, "Circle"] marker [ns::COMMON, "radius"],
///         Square(Square) = [ns::COMMON, "Square"],
///     }
/// }
///
/// use datex_xml::{name::QName, parser, serializer};
/// let name = QName::new(ns::COMMON, "shape");
/// let element = serializer::to_element(&name, &Shape::from(Square { side: 2 })).unwrap();
/// assert_eq!(element.xsi_type, Some(QName::new(ns::COMMON, "Square")));
/// assert_eq!(parser::from_element::<Shape>(&element).unwrap(), Shape::Square(Square { side: 2 }));
/// ```
#[macro_export]
macro_rules! xsi_type_union {
	(@marker) => {
		::std::option::Option::None
	};
	(@marker $ns:expr, $local:literal) => {
		::std::option::Option::Some($crate::name::QName::new($ns, $local))
	};
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident in $family:literal {
			$(
				$(#[$vmeta:meta])*
				$variant:ident($ty:ty) = [$type_ns:expr, $type_local:literal] $(marker [$marker_ns:expr, $marker_local:literal])?
			),* $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, Debug, PartialEq)]
		$vis enum $name {
			$(
				$(#[$vmeta])*
				$variant($ty),
			)*
		}

		$(
			impl ::std::convert::From<$ty> for $name {
				fn from(value: $ty) -> Self {
					$name::$variant(value)
				}
			}
		)*

		impl $crate::polymorphic::Polymorphic for $name {
			const FAMILY: &'static str = $family;

			fn types() -> &'static [$crate::polymorphic::TypeEntry<Self>] {
				static TYPES: &[$crate::polymorphic::TypeEntry<$name>] = &[
					$(
						$crate::polymorphic::TypeEntry {
							type_name: $crate::name::QName::new($type_ns, $type_local),
							marker: $crate::xsi_type_union!(@marker $($marker_ns, $marker_local)?),
							decode: |parser| parser.parse::<$ty>().map($name::$variant),
						},
					)*
				];
				TYPES
			}

			fn type_name(&self) -> $crate::name::QName {
				match self {
					$(
						$name::$variant(_) => $crate::name::QName::new($type_ns, $type_local),
					)*
				}
			}
		}

		impl $crate::parser::Element for $name {
			type ParseState = $crate::polymorphic::PolymorphicState<Self>;
		}

		impl $crate::serializer::Element for $name {
			fn xsi_type(&self) -> ::std::option::Option<$crate::name::QName> {
				::std::option::Option::Some($crate::polymorphic::Polymorphic::type_name(self))
			}

			fn serialize<S: $crate::serializer::Serializer>(&self, serializer: S) -> $crate::Result<()> {
				match self {
					$(
						$name::$variant(value) => $crate::serializer::Element::serialize(value, serializer),
					)*
				}
			}
		}
	};
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		name::ns,
		parser,
		serializer,
		tree::XmlElement,
		Error,
	};

	const SLOT: QName = QName::new(ns::COMMON, "slot");

	crate::xsi_type_union! {
		enum Number in "Number" {
			Small(u8) = [ns::COMMON, "Small"],
			Large(u64) = [ns::COMMON, "Large"],
		}
	}

	#[test]
	fn dispatch_on_xsi_type() {
		let element = XmlElement::new(SLOT).with_xsi_type(QName::new(ns::COMMON, "Large")).with_text("300");
		assert_eq!(parser::from_element::<Number>(&element).unwrap(), Number::Large(300));
		let small = XmlElement::new(SLOT).with_xsi_type(QName::new(ns::COMMON, "Small")).with_text("300");
		assert!(matches!(parser::from_element::<Number>(&small), Err(Error::InvalidFormat { .. })));
	}

	#[test]
	fn unknown_type() {
		let element = XmlElement::new(SLOT).with_xsi_type(QName::new(ns::COMMON, "Huge")).with_text("1");
		let err = parser::from_element::<Number>(&element).unwrap_err();
		assert!(matches!(err, Error::UnknownPayloadType(t) if t == "{http://datex2.eu/schema/3/common}Huge"));
		let untyped = XmlElement::new(SLOT).with_text("1");
		assert!(matches!(parser::from_element::<Number>(&untyped), Err(Error::UnknownPayloadType(_))));
	}

	fn assert_unique_discriminators<T: Polymorphic>() {
		let types = T::types();
		for (i, a) in types.iter().enumerate() {
			for b in &types[i + 1..] {
				assert_ne!(a.type_name, b.type_name, "duplicate discriminator in {}", T::FAMILY);
			}
		}
	}

	#[test]
	fn discriminators_are_unique() {
		assert_unique_discriminators::<Number>();
		assert_unique_discriminators::<crate::payload::PayloadPublication>();
		assert_unique_discriminators::<crate::model::common::TimePeriodOfDay>();
		assert_unique_discriminators::<crate::model::location::LocationReference>();
	}

	#[test]
	fn encode_sets_xsi_type() {
		let element = serializer::to_element(&SLOT, &Number::from(7u8)).unwrap();
		assert_eq!(element, XmlElement::new(SLOT).with_xsi_type(QName::new(ns::COMMON, "Small")).with_text("7"));
		assert_eq!(Number::Large(1).type_name(), QName::new(ns::COMMON, "Large"));
	}
}
