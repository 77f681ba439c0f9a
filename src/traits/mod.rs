pub mod processing_unit;

pub use processing_unit::{FromConfigDict, ProcessingUnitConfig};
pub(crate) use processing_unit::same_dict;
