//! Text form of the XML tree using `quick-xml`
//!
//! [`read_document`] resolves namespace prefixes (including those in `xsi:type` values) into
//! [`QName`](crate::name::QName)s; [`write_document`] declares the configured prefixes on the
//! root element and generates prefixes for any other namespace.

mod reader;
mod writer;

/// Re-export `quick-xml` crate
pub use quick_xml;

pub use self::{
	reader::read_document,
	writer::{
		write_document,
		WriteOptions,
	},
};
