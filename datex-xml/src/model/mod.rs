//! Slice of the DATEX II v3 model: periods, facilities, energy infrastructure and locations
//!
//! Field names follow the schema (`start_of_period` is `com:startOfPeriod`); `_…_extension`
//! fields are the extension slots of the types.
#![allow(missing_docs)]

pub mod common;
pub mod energy_infrastructure;
pub mod facilities;
pub mod location;
