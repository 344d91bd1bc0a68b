//! Open (extensible) enumerations
//!
//! DATEX II enumerations have a published list of values, but exchange partners may send values
//! outside of it: those are marked with the reserved `_extended` value and carry the real value in
//! the `extendedValue` attribute:
//!
//! ```xml
//! <com:specialDayType>publicHoliday</com:specialDayType>
//! <com:specialDayType extendedValue="schoolHoliday">_extended</com:specialDayType>
//! ```
//!
//! Enumeration types are declared with [`open_enum!`](crate::open_enum).  Published values are
//! constants; parsing any other non-blank text registers it in the per-type [`Registry`] (for the
//! lifetime of the process) so equal strings share one instance.

use crate::{
	errors,
	name::QName,
	parser::{
		ElementParser,
		ElementState,
	},
	Result,
};
use parking_lot::RwLock;
use std::{
	cmp::Ordering,
	collections::BTreeSet,
	fmt,
	hash::{
		Hash,
		Hasher,
	},
	marker::PhantomData,
	sync::Arc,
};

/// Reserved value announcing an extension value in `extendedValue`
pub const EXTENDED: &str = "_extended";

/// Attribute carrying values outside of the published list
pub const EXTENDED_VALUE: QName = QName::unqualified("extendedValue");

#[derive(Clone)]
enum Repr {
	WellKnown(&'static str),
	Extended(Arc<str>),
}

/// Interned canonical value of an open enumeration
///
/// Equality, ordering and hashing use the canonical string.
#[derive(Clone)]
pub struct EnumValue(Repr);

impl EnumValue {
	#[doc(hidden)]
	pub const fn well_known(value: &'static str) -> Self {
		Self(Repr::WellKnown(value))
	}

	/// Canonical string
	pub fn as_str(&self) -> &str {
		match &self.0 {
			Repr::WellKnown(s) => s,
			Repr::Extended(s) => s,
		}
	}

	/// Whether this is a published member (constant)
	pub fn is_well_known(&self) -> bool {
		matches!(self.0, Repr::WellKnown(_))
	}

	/// Whether both values share the same storage
	pub fn same_instance(&self, other: &Self) -> bool {
		match (&self.0, &other.0) {
			(Repr::WellKnown(a), Repr::WellKnown(b)) => a == b,
			(Repr::Extended(a), Repr::Extended(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

impl PartialEq for EnumValue {
	fn eq(&self, other: &Self) -> bool {
		self.as_str() == other.as_str()
	}
}

impl Eq for EnumValue {}

impl PartialOrd for EnumValue {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for EnumValue {
	fn cmp(&self, other: &Self) -> Ordering {
		self.as_str().cmp(other.as_str())
	}
}

impl Hash for EnumValue {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_str().hash(state)
	}
}

impl fmt::Debug for EnumValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self.as_str(), f)
	}
}

impl fmt::Display for EnumValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Append-only set of the extension values of one enumeration
pub struct Registry {
	domain: &'static str,
	values: RwLock<BTreeSet<Arc<str>>>,
}

impl Registry {
	/// Empty registry (usable in statics)
	pub const fn new(domain: &'static str) -> Self {
		Self {
			domain,
			values: parking_lot::const_rwlock(BTreeSet::new()),
		}
	}

	/// Return the registered instance for `canonical`, registering it first if needed.
	pub fn intern(&self, canonical: &str) -> EnumValue {
		if let Some(value) = self.values.read().get(canonical) {
			return EnumValue(Repr::Extended(value.clone()));
		}
		let mut values = self.values.write();
		// someone else might have been faster
		if let Some(value) = values.get(canonical) {
			return EnumValue(Repr::Extended(value.clone()));
		}
		let value: Arc<str> = Arc::from(canonical);
		values.insert(value.clone());
		tracing::debug!(domain = self.domain, value = canonical, "registered extended enumeration value");
		EnumValue(Repr::Extended(value))
	}

	/// All registered extension values (ordered)
	pub fn registered(&self) -> Vec<EnumValue> {
		self.values.read().iter().map(|v| EnumValue(Repr::Extended(v.clone()))).collect()
	}
}

impl fmt::Debug for Registry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registry")
			.field("domain", &self.domain)
			.field("values", &*self.values.read())
			.finish()
	}
}

/// Implemented by [`open_enum!`](crate::open_enum) types
pub trait OpenEnum: Sized + Clone + 'static {
	/// Name of the enumeration
	const DOMAIN: &'static str;

	/// Published members (including `_extended`)
	const WELL_KNOWN: &'static [Self];

	/// Extension values of this enumeration
	fn registry() -> &'static Registry;

	/// Wrap a canonical value
	fn from_value(value: EnumValue) -> Self;

	/// Canonical value
	fn value(&self) -> &EnumValue;

	/// Canonicalize `text` and return the matching member, registering unknown values.
	///
	/// Surrounding whitespace is removed; published members match case-insensitively.  Only blank
	/// text is rejected.
	fn intern(text: &str) -> Result<Self> {
		let trimmed = text.trim();
		if trimmed.is_empty() {
			return Err(errors::invalid_format(Self::DOMAIN, text, "blank enumeration value"));
		}
		if let Some(known) = Self::WELL_KNOWN.iter().find(|k| k.value().as_str().eq_ignore_ascii_case(trimmed)) {
			return Ok(known.clone());
		}
		Ok(Self::from_value(Self::registry().intern(trimmed)))
	}

	/// Decode the XML form: element text plus optional `extendedValue` attribute
	fn from_xml(text: &str, extended_value: Option<&str>) -> Result<Self> {
		let text = text.trim();
		match extended_value {
			Some(ext) if text.is_empty() || text == EXTENDED => Self::intern(ext),
			_ => Self::intern(text),
		}
	}

	/// Encode to the XML form: element text plus optional `extendedValue` attribute
	fn to_xml(&self) -> (&str, Option<&str>) {
		let value = self.value();
		if value.is_well_known() {
			(value.as_str(), None)
		} else {
			(EXTENDED, Some(value.as_str()))
		}
	}
}

/// `ElementState` for open enumerations
pub struct EnumState<T> {
	text: String,
	extended_value: Option<String>,
	_marker: PhantomData<fn() -> T>,
}

impl<T: OpenEnum> ElementState for EnumState<T> {
	type Output = T;

	const EMPTY_MEANS_ABSENT: bool = true;

	fn parse_element_start(_parser: &ElementParser<'_>) -> Result<Self> {
		Ok(Self {
			text: String::new(),
			extended_value: None,
			_marker: PhantomData,
		})
	}

	fn parse_element_attribute(&mut self, name: &QName, value: &str) -> Result<()> {
		if *name == EXTENDED_VALUE {
			self.extended_value = Some(value.to_owned());
		}
		Ok(())
	}

	fn parse_element_inner_text(&mut self, text: &str) -> Result<()> {
		self.text += text;
		Ok(())
	}

	fn parse_element_finish(self) -> Result<Self::Output> {
		T::from_xml(&self.text, self.extended_value.as_deref())
	}
}

/// Declare an open enumeration.
///
/// ```
/// datex_xml::open_enum! {
///     /// Weekdays
///     pub struct Weekday in "Weekday" {
///         MONDAY = "monday",
///         TUESDAY = "tuesday",
///     }
/// }
///
/// use datex_xml::enumeration::OpenEnum;
/// assert_eq!(Weekday::intern(" Monday ").unwrap(), Weekday::MONDAY);
/// assert!(!Weekday::intern("someday").unwrap().is_well_known());
/// ```
///
/// Besides the listed members every enumeration has the `EXTENDED` (`_extended`) member.
#[macro_export]
macro_rules! open_enum {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident in $domain:literal {
			$( $(#[$vmeta:meta])* $member:ident = $value:literal ),* $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
		$vis struct $name($crate::enumeration::EnumValue);

		#[allow(dead_code)]
		impl $name {
			$(
				$(#[$vmeta])*
				pub const $member: Self = Self($crate::enumeration::EnumValue::well_known($value));
			)*

			/// Marker for values outside of the published list
			pub const EXTENDED: Self = Self($crate::enumeration::EnumValue::well_known($crate::enumeration::EXTENDED));

			/// Canonical string
			pub fn as_str(&self) -> &str {
				self.0.as_str()
			}

			/// Whether this is a published member
			pub fn is_well_known(&self) -> bool {
				self.0.is_well_known()
			}
		}

		impl $crate::enumeration::OpenEnum for $name {
			const DOMAIN: &'static str = $domain;

			const WELL_KNOWN: &'static [Self] = &[$(Self::$member,)* Self::EXTENDED];

			fn registry() -> &'static $crate::enumeration::Registry {
				static REGISTRY: $crate::enumeration::Registry = $crate::enumeration::Registry::new($domain);
				&REGISTRY
			}

			fn from_value(value: $crate::enumeration::EnumValue) -> Self {
				Self(value)
			}

			fn value(&self) -> &$crate::enumeration::EnumValue {
				&self.0
			}
		}

		impl ::std::str::FromStr for $name {
			type Err = $crate::Error;

			fn from_str(s: &str) -> $crate::Result<Self> {
				<Self as $crate::enumeration::OpenEnum>::intern(s)
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl ::std::fmt::Debug for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				write!(f, "{}({:?})", stringify!($name), self.as_str())
			}
		}

		impl $crate::scalar::Scalar for $name {
			const KIND: &'static str = $domain;

			fn parse(text: &str) -> $crate::Result<Self> {
				<Self as $crate::enumeration::OpenEnum>::intern(text)
			}

			fn format(&self) -> ::std::borrow::Cow<'_, str> {
				::std::borrow::Cow::Borrowed(self.as_str())
			}
		}

		impl $crate::parser::Element for $name {
			type ParseState = $crate::enumeration::EnumState<Self>;
		}

		impl $crate::serializer::Element for $name {
			fn serialize<S: $crate::serializer::Serializer>(&self, mut serializer: S) -> $crate::Result<()> {
				let (text, extended_value) = <Self as $crate::enumeration::OpenEnum>::to_xml(self);
				if let Some(extended_value) = extended_value {
					serializer.serialize_attribute(&$crate::enumeration::EXTENDED_VALUE, extended_value.into())?;
				}
				serializer.serialize_text(text.into())
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
	};

	crate::open_enum! {
		/// Test domain
		pub struct Colour in "Colour" {
			RED = "red",
			GREEN = "green",
		}
	}

	const COLOUR: QName = QName::new(ns::COMMON, "colour");

	#[test]
	fn well_known_members() {
		assert_eq!(Colour::intern("RED").unwrap(), Colour::RED);
		assert!(Colour::intern(" green ").unwrap().value().same_instance(Colour::GREEN.value()));
		assert_eq!(
			Colour::WELL_KNOWN.iter().map(Colour::as_str).collect::<Vec<_>>(),
			["red", "green", "_extended"],
		);
	}

	#[test]
	fn openness() {
		let a = Colour::intern("  turquoise ").unwrap();
		let b: Colour = "turquoise".parse().unwrap();
		assert_eq!(a, b);
		assert!(a.value().same_instance(b.value()));
		assert!(!a.is_well_known());
		assert_eq!(a.to_string(), "turquoise");
		assert!(Colour::registry().registered().iter().any(|v| v.as_str() == "turquoise"));
		assert!(Colour::intern("   ").is_err());
		assert!(Colour::GREEN < Colour::intern("red").unwrap());
	}

	#[test]
	fn concurrent_registration_converges() {
		let handles: Vec<_> = (0..8).map(|_| std::thread::spawn(|| Colour::intern("magenta").unwrap())).collect();
		let values: Vec<Colour> = handles.into_iter().map(|h| h.join().unwrap()).collect();
		for v in &values[1..] {
			assert!(v.value().same_instance(values[0].value()));
		}
	}

	#[test]
	fn xml_form() {
		let holiday = Colour::intern("ochre").unwrap();
		let element = serializer::to_element(&COLOUR, &holiday).unwrap();
		assert_eq!(element.attribute(&EXTENDED_VALUE), Some("ochre"));
		assert_eq!(element.text(), "_extended");
		assert_eq!(parser::from_element::<Colour>(&element).unwrap(), holiday);

		let plain = serializer::to_element(&COLOUR, &Colour::RED).unwrap();
		assert_eq!(plain, XmlElement::new(COLOUR).with_text("red"));
		assert_eq!(parser::from_element::<Colour>(&plain).unwrap(), Colour::RED);

		let unmarked = XmlElement::new(COLOUR).with_text("violet");
		assert_eq!(parser::from_element::<Colour>(&unmarked).unwrap().as_str(), "violet");
	}
}
