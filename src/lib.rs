#![doc = include_str!("../README.md")]

mod attribute;
pub mod catalog;
mod document;
mod error;
mod markup;
pub mod options;
mod payload;
pub mod prelude;
mod traits;
mod utils;

pub use catalog::{Catalog, ElementKind, NumberType, Precision};
pub use document::XdmfDocument;
pub use error::{InvalidType, StructureError, UsageWarning};
pub use options::{Indent, NewLine, Options};
pub use traits::Numeric;

pub use ndarray;

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An io error occured: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    InvalidType(#[from] InvalidType),
    #[error("Malformed element structure: {0}")]
    Structure(#[from] StructureError),
}
