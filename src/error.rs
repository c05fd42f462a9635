use crate::catalog::{Catalog, ElementKind};
use derive_more::{Constructor, Display};

#[derive(Debug, Clone, PartialEq, Eq, Display, Constructor)]
#[display(fmt = "Invalid {catalog} type = {value}")]
/// a validated attribute received a value that is not in its catalog
pub struct InvalidType {
    catalog: Catalog,
    value: String,
}

impl InvalidType {
    /// the catalog the value was checked against
    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    /// the rejected value
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::error::Error for InvalidType {}

/// The sequence of begin / end / attribute calls does not describe a valid tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("cannot close `{found}`: the innermost open element is `{expected}`")]
    MismatchedClose {
        expected: ElementKind,
        found: ElementKind,
    },
    #[error("cannot close `{found}`: no element is open")]
    NothingOpen { found: ElementKind },
    #[error("cannot set `{attribute}`: no opening tag is pending")]
    NoPendingElement { attribute: &'static str },
    #[error("cannot finish the document: {open} element(s) still open, innermost is `{innermost}`")]
    Unclosed { open: usize, innermost: ElementKind },
}

/// Misuse that is reported but does not stop the document from being built.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum UsageWarning {
    /// `Center` only applies to `Attribute` elements
    #[display(fmt = "Center is only valid inside an Attribute element, not {current}")]
    CenterOutsideAttribute { current: ElementKind },
    #[display(fmt = "Center is only valid inside an Attribute element, no element is open")]
    CenterWithoutElement,
}
