//! # Catalogs
//!
//! XDMF only accepts a fixed set of values for a handful of attributes. The legal
//! values for the `Type` attribute depend on the element it is attached to, while
//! `Format`, `Precision`, `NumberType` and `Center` each have a single table that
//! is independent of the element.
//!
//! The tables are static and never change at runtime. `Domain` and `Information`
//! elements have no table: any `Type` value is accepted for them.

use crate::error::InvalidType;
use derive_more::Display;

const GRID_TYPES: &[&str] = &["Uniform", "Collection", "Tree", "Subset"];

const TOPOLOGY_TYPES: &[&str] = &[
    "2DSMesh",
    "2DRectMesh",
    "2DCoRectMesh",
    "3DSMesh",
    "3DRectMesh",
    "3DCoRectMesh",
];

const GEOMETRY_TYPES: &[&str] = &["XYZ", "XY", "X_Y_Z", "VXVYVZ", "ORIGIN_DXDYDZ", "ORIGIN_DXDY"];

const ATTRIBUTE_TYPES: &[&str] = &["Scalar", "Vector", "Tensor", "Tensor6", "Matrix"];

const DATA_ITEM_TYPES: &[&str] = &[
    "Uniform",
    "Collection",
    "Tree",
    "HyperSlab",
    "Coordinates",
    "Function",
];

const SET_TYPES: &[&str] = &["Node", "Edge", "Face", "Cell"];

const TIME_TYPES: &[&str] = &["Single", "HyperSlab", "List", "Range"];

/// `GridType` used by [`XdmfDocument::begin_default`](crate::XdmfDocument::begin_default)
pub const DEFAULT_GRID_TYPE: &str = "Uniform";

/// `TopologyType` used by [`XdmfDocument::begin_default`](crate::XdmfDocument::begin_default)
pub const DEFAULT_TOPOLOGY_TYPE: &str = "2DCoRectMesh";

/// `GeometryType` used by [`XdmfDocument::begin_default`](crate::XdmfDocument::begin_default)
pub const DEFAULT_GEOMETRY_TYPE: &str = "XYZ";

/// `DataItemType` used by [`XdmfDocument::begin_default`](crate::XdmfDocument::begin_default)
pub const DEFAULT_DATA_ITEM_TYPE: &str = "Uniform";

const FORMATS: &[&str] = &["XML", "HDF", "Binary"];

const PRECISIONS: &[&str] = &["1", "2", "4", "8"];

const NUMBER_TYPES: &[&str] = &["Float", "Int", "UInt", "Char", "UChar"];

const CENTERS: &[&str] = &["Node", "Edge", "Face", "Cell", "Grid"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
/// The structural elements that can be nested inside the `Xdmf` root
pub enum ElementKind {
    Domain,
    Grid,
    Topology,
    Geometry,
    Attribute,
    DataItem,
    Set,
    Time,
    Information,
}

impl ElementKind {
    pub const ALL: [ElementKind; 9] = [
        ElementKind::Domain,
        ElementKind::Grid,
        ElementKind::Topology,
        ElementKind::Geometry,
        ElementKind::Attribute,
        ElementKind::DataItem,
        ElementKind::Set,
        ElementKind::Time,
        ElementKind::Information,
    ];

    /// the tag name written in the opening line of the element
    pub fn tag(self) -> &'static str {
        match self {
            Self::Domain => "Domain",
            Self::Grid => "Grid",
            Self::Topology => "Topology",
            Self::Geometry => "Geometry",
            Self::Attribute => "Attribute",
            Self::DataItem => "DataItem",
            Self::Set => "Set",
            Self::Time => "Time",
            Self::Information => "Information",
        }
    }

    /// the tag name written in the closing line of the element.
    ///
    /// Geometry elements have historically been closed with `</Geomerry>`. That literal
    /// is kept unless `corrected` is set, in which case the opening tag is reused.
    pub(crate) fn closing_tag(self, corrected: bool) -> &'static str {
        match self {
            Self::Geometry if !corrected => "Geomerry",
            _ => self.tag(),
        }
    }

    /// name of the `Type` attribute for this element, e.g. `GridType`
    pub fn type_attribute(self) -> &'static str {
        match self {
            Self::Domain => "DomainType",
            Self::Grid => "GridType",
            Self::Topology => "TopologyType",
            Self::Geometry => "GeometryType",
            Self::Attribute => "AttributeType",
            Self::DataItem => "DataItemType",
            Self::Set => "SetType",
            Self::Time => "TimeType",
            Self::Information => "InformationType",
        }
    }

    /// `Type` stamped when the element is opened without one. Only grids,
    /// topologies, geometries and data items have a default.
    pub fn default_type(self) -> Option<&'static str> {
        match self {
            Self::Grid => Some(DEFAULT_GRID_TYPE),
            Self::Topology => Some(DEFAULT_TOPOLOGY_TYPE),
            Self::Geometry => Some(DEFAULT_GEOMETRY_TYPE),
            Self::DataItem => Some(DEFAULT_DATA_ITEM_TYPE),
            _ => None,
        }
    }

    /// legal values of the `Type` attribute. `None` means any value is accepted.
    pub fn legal_types(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Domain | Self::Information => None,
            Self::Grid => Some(GRID_TYPES),
            Self::Topology => Some(TOPOLOGY_TYPES),
            Self::Geometry => Some(GEOMETRY_TYPES),
            Self::Attribute => Some(ATTRIBUTE_TYPES),
            Self::DataItem => Some(DATA_ITEM_TYPES),
            Self::Set => Some(SET_TYPES),
            Self::Time => Some(TIME_TYPES),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
/// A validated attribute and the table its values are checked against
pub enum Catalog {
    /// the `Type` attribute of the given element
    #[display(fmt = "{}", _0)]
    Type(ElementKind),
    Format,
    Precision,
    NumberType,
    Center,
}

impl Catalog {
    /// the attribute name as it appears in the markup
    pub fn attribute_name(self) -> &'static str {
        match self {
            Self::Type(kind) => kind.type_attribute(),
            Self::Format => "Format",
            Self::Precision => "Precision",
            Self::NumberType => "NumberType",
            Self::Center => "Center",
        }
    }

    pub fn legal_values(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Type(kind) => kind.legal_types(),
            Self::Format => Some(FORMATS),
            Self::Precision => Some(PRECISIONS),
            Self::NumberType => Some(NUMBER_TYPES),
            Self::Center => Some(CENTERS),
        }
    }

    /// check that `value` is a member of this catalog
    pub fn validate(self, value: &str) -> Result<(), InvalidType> {
        match self.legal_values() {
            Some(legal) if !legal.contains(&value) => Err(InvalidType::new(self, value.to_string())),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
/// Type of the numbers stored in a `DataItem`
pub enum NumberType {
    Float,
    Int,
    UInt,
    Char,
    UChar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
/// Width in bytes of a single number stored in a `DataItem`
pub enum Precision {
    #[display(fmt = "1")]
    Bytes1,
    #[display(fmt = "2")]
    Bytes2,
    #[display(fmt = "4")]
    Bytes4,
    #[display(fmt = "8")]
    Bytes8,
}

impl Precision {
    pub fn bytes(self) -> usize {
        match self {
            Self::Bytes1 => 1,
            Self::Bytes2 => 2,
            Self::Bytes4 => 4,
            Self::Bytes8 => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_type_is_accepted() {
        for kind in ElementKind::ALL {
            if let Some(legal) = kind.legal_types() {
                for value in legal {
                    assert!(Catalog::Type(kind).validate(value).is_ok(), "{kind} {value}");
                }
            }
        }
    }

    #[test]
    fn unlisted_type_is_rejected() {
        let err = Catalog::Type(ElementKind::Grid)
            .validate("InvalidKind")
            .unwrap_err();
        assert_eq!(err.catalog(), Catalog::Type(ElementKind::Grid));
        assert_eq!(err.value(), "InvalidKind");
        assert_eq!(err.to_string(), "Invalid Grid type = InvalidKind");
    }

    #[test]
    fn catalogs_are_case_sensitive() {
        assert!(Catalog::Format.validate("xml").is_err());
        assert!(Catalog::Type(ElementKind::Topology).validate("3dsmesh").is_err());
    }

    #[test]
    fn domain_and_information_accept_anything() {
        for value in ["", "Anything", "3DSMesh", "with spaces"] {
            assert!(Catalog::Type(ElementKind::Domain).validate(value).is_ok());
            assert!(Catalog::Type(ElementKind::Information).validate(value).is_ok());
        }
    }

    #[test]
    fn typed_enums_are_catalog_members() {
        for number_type in [
            NumberType::Float,
            NumberType::Int,
            NumberType::UInt,
            NumberType::Char,
            NumberType::UChar,
        ] {
            assert!(Catalog::NumberType.validate(&number_type.to_string()).is_ok());
        }

        for precision in [
            Precision::Bytes1,
            Precision::Bytes2,
            Precision::Bytes4,
            Precision::Bytes8,
        ] {
            assert!(Catalog::Precision.validate(&precision.to_string()).is_ok());
            assert_eq!(precision.to_string(), precision.bytes().to_string());
        }
    }

    #[test]
    fn defaults_are_legal_types() {
        for kind in ElementKind::ALL {
            if let Some(default) = kind.default_type() {
                assert!(Catalog::Type(kind).validate(default).is_ok(), "{kind}");
            }
        }
        assert_eq!(ElementKind::Topology.default_type(), Some("2DCoRectMesh"));
        assert_eq!(ElementKind::Attribute.default_type(), None);
        assert_eq!(ElementKind::Domain.default_type(), None);
    }

    #[test]
    fn geometry_closing_literal() {
        assert_eq!(ElementKind::Geometry.closing_tag(false), "Geomerry");
        assert_eq!(ElementKind::Geometry.closing_tag(true), "Geometry");
        assert_eq!(ElementKind::Grid.closing_tag(false), "Grid");
    }

    #[test]
    fn type_attribute_names() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.type_attribute(), format!("{}Type", kind.tag()));
            assert_eq!(kind.to_string(), kind.tag());
        }
    }
}
