//! Common traits and types that are useful for working with `xdmf`

pub use crate::catalog::{Catalog, ElementKind, NumberType, Precision};
pub use crate::document::XdmfDocument;
pub use crate::error::{InvalidType, StructureError, UsageWarning};
pub use crate::options::{Indent, NewLine, Options};
pub use crate::traits::Numeric;
pub use crate::Error;
