use crate::{
	name::QName,
	parser::{
		ElementState,
		InnerState,
	},
};

/// Parsable element
///
/// This links the (default) state type used to parse this element.
pub trait Element: Sized {
	/// Parse state to use for this element
	type ParseState: ElementState<Output = Self>;
}

/// Type alias to find the default parse state for an `Element`
pub type ElementDefaultParseState<E> = <E as Element>::ParseState;

/// Parsable inner data: zero or more child elements with the same name
///
/// If `E` implements `Element`, `E`, `Option<E>` and `Vec<E>` implement `Inner` (required,
/// optional and repeated).
pub trait Inner: Sized {
	/// Parse state to use for this inner data
	type ParseState: InnerState<Output = Self>;

	/// Create state matching child elements named `name`
	fn parse_state(name: QName) -> Self::ParseState;
}

/// Type alias to find the default parse state for an `Inner`
pub type InnerDefaultParseState<I> = <I as Inner>::ParseState;

/// Parsable group of fields (attributes and child elements) shared by several elements
///
/// Groups are flattened into the element embedding them; they model the base types of the
/// schema.
pub trait Group: Sized {
	/// Parse state to use for this group
	type ParseState: InnerState<Output = Self> + Default;
}
