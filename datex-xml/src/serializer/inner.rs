use crate::{
	name::QName,
	serializer::{
		Element,
		Serializer,
	},
	Result,
};

/// Convenience interface to serialize zero or more child elements with the same name
pub trait Inner {
	/// Serialize all contained elements
	fn serialize_inner<S: Serializer>(&self, name: &QName, serializer: &mut S) -> Result<()>;
}

/// Simply serialize the element
impl<E: Element> Inner for E {
	fn serialize_inner<S: Serializer>(&self, name: &QName, serializer: &mut S) -> Result<()> {
		serializer.serialize_element(name, self)
	}
}

/// Serialize element if present
impl<E: Element> Inner for Option<E> {
	fn serialize_inner<S: Serializer>(&self, name: &QName, serializer: &mut S) -> Result<()> {
		if let Some(e) = self {
			serializer.serialize_element(name, e)?;
		}
		Ok(())
	}
}

/// Serialize all elements (one element per item)
impl<E: Element> Inner for Vec<E> {
	fn serialize_inner<S: Serializer>(&self, name: &QName, serializer: &mut S) -> Result<()> {
		for e in self {
			serializer.serialize_element(name, e)?;
		}
		Ok(())
	}
}

/// Group of fields flattened into the embedding element
pub trait Group {
	/// Serialize the attributes and child elements of the group
	fn serialize_group<S: Serializer>(&self, serializer: &mut S) -> Result<()>;
}
