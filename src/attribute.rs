//! attribute setters for the element whose opening tag is pending

use crate::catalog::{Catalog, ElementKind};
use crate::document::XdmfDocument;
use crate::error::{StructureError, UsageWarning};
use crate::utils;
use crate::Error;

use std::fmt::Display;

impl XdmfDocument {
    /// check `value` against `catalog` and append it to the pending opening tag.
    /// Nothing is written if either check fails.
    pub(crate) fn set_validated(&mut self, catalog: Catalog, value: &str) -> Result<(), Error> {
        self.markup.ensure_pending(catalog.attribute_name())?;
        catalog.validate(value)?;
        self.markup.push_attribute(catalog.attribute_name(), value)?;
        Ok(())
    }

    /// write `<Kind>Type="value"` for the current element, e.g. `GridType="Uniform"`.
    ///
    /// `Domain` and `Information` accept any value, every other element only the
    /// values listed by [`ElementKind::legal_types`].
    pub fn set_type(&mut self, value: &str) -> Result<(), Error> {
        let kind = self
            .markup
            .current_kind()
            .ok_or(StructureError::NoPendingElement { attribute: "Type" })?;

        self.set_validated(Catalog::Type(kind), value)
    }

    /// one of `XML`, `HDF` or `Binary`
    pub fn set_format(&mut self, value: &str) -> Result<(), Error> {
        self.set_validated(Catalog::Format, value)
    }

    /// byte width of a number: `1`, `2`, `4` or `8`
    pub fn set_precision<T: Display>(&mut self, value: T) -> Result<(), Error> {
        self.set_validated(Catalog::Precision, &value.to_string())
    }

    /// one of `Float`, `Int`, `UInt`, `Char` or `UChar`
    pub fn set_number_type<T: Display>(&mut self, value: T) -> Result<(), Error> {
        self.set_validated(Catalog::NumberType, &value.to_string())
    }

    /// Set where the values of an `Attribute` element live: `Node`, `Edge`, `Face`,
    /// `Cell` or `Grid`.
    ///
    /// Outside of an `Attribute` element this is not an error: a warning is logged
    /// and recorded in [`warnings`](XdmfDocument::warnings) and nothing is written.
    pub fn set_center(&mut self, value: &str) -> Result<(), Error> {
        let warning = match self.markup.current_kind() {
            Some(ElementKind::Attribute) => None,
            Some(current) => Some(UsageWarning::CenterOutsideAttribute { current }),
            None => Some(UsageWarning::CenterWithoutElement),
        };

        if let Some(warning) = warning {
            tracing::warn!(center = value, "{warning}");
            self.warnings.push(warning);
            return Ok(());
        }

        self.set_validated(Catalog::Center, value)
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), Error> {
        let name = utils::escape_attribute(name);
        self.markup.push_attribute("Name", &name)?;
        Ok(())
    }

    /// free-form `Value` attribute, used by `Information` and `Time` elements
    pub fn set_value<T: Display>(&mut self, value: T) -> Result<(), Error> {
        let value = value.to_string();
        let value = utils::escape_attribute(&value);
        self.markup.push_attribute("Value", &value)?;
        Ok(())
    }

    /// sizes of the dimensions of the data, slowest varying first
    pub fn set_dimensions<I>(&mut self, dimensions: I) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.markup
            .push_attribute("Dimensions", &utils::join_spaced(dimensions))?;
        Ok(())
    }

    pub fn set_number_of_elements<I>(&mut self, counts: I) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.markup
            .push_attribute("NumberOfElements", &utils::join_spaced(counts))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, ElementKind, NumberType, Precision};
    use crate::error::{StructureError, UsageWarning};
    use crate::{Error, XdmfDocument};
    use pretty_assertions::assert_eq;

    #[test]
    fn type_attribute_uses_element_prefix() {
        let mut doc = XdmfDocument::new();
        doc.begin(ElementKind::Topology);
        doc.set_type("3DSMesh").unwrap();
        assert_eq!(doc.pending_line(), "    <Topology TopologyType=\"3DSMesh\"");
    }

    #[test]
    fn invalid_type_leaves_pending_line() {
        let mut doc = XdmfDocument::new();
        doc.begin(ElementKind::Grid);
        doc.set_name("block").unwrap();
        let before = doc.pending_line().to_string();

        let err = doc.set_type("InvalidKind").unwrap_err();
        match err {
            Error::InvalidType(err) => {
                assert_eq!(err.catalog(), Catalog::Type(ElementKind::Grid));
                assert_eq!(err.value(), "InvalidKind");
            }
            other => panic!("unexpected error {other}"),
        }

        assert_eq!(doc.pending_line(), before);
    }

    #[test]
    fn format_precision_number_type() {
        let mut doc = XdmfDocument::new();
        doc.begin(ElementKind::DataItem);
        doc.set_format("HDF").unwrap();
        doc.set_precision(8).unwrap();
        doc.set_number_type(NumberType::Float).unwrap();

        assert!(doc.set_format("hdf5").is_err());
        assert!(doc.set_precision(3).is_err());
        assert!(doc.set_precision(Precision::Bytes4).is_ok());
        assert!(doc.set_number_type("Double").is_err());

        assert_eq!(
            doc.pending_line(),
            "    <DataItem Format=\"HDF\" Precision=\"8\" NumberType=\"Float\" Precision=\"4\""
        );
    }

    #[test]
    fn center_inside_attribute() {
        let mut doc = XdmfDocument::new();
        doc.begin_attribute("Scalar").unwrap();
        doc.set_center("Cell").unwrap();
        assert!(doc.set_center("Volume").is_err());

        assert_eq!(
            doc.pending_line(),
            "    <Attribute AttributeType=\"Scalar\" Center=\"Cell\""
        );
        assert!(doc.warnings().is_empty());
    }

    #[test]
    fn center_outside_attribute_is_a_warning() {
        let mut doc = XdmfDocument::new();
        doc.begin(ElementKind::DataItem);
        let before = doc.pending_line().to_string();

        doc.set_center("Node").unwrap();

        assert_eq!(doc.pending_line(), before);
        assert_eq!(
            doc.warnings(),
            &[UsageWarning::CenterOutsideAttribute {
                current: ElementKind::DataItem
            }]
        );
        assert_eq!(
            doc.warnings()[0].to_string(),
            "Center is only valid inside an Attribute element, not DataItem"
        );

        // the builder keeps working afterwards
        doc.set_name("values").unwrap();
        doc.end_data_item().unwrap();
        assert_eq!(doc.depth(), 0);
    }

    #[test]
    fn center_without_open_element() {
        let mut doc = XdmfDocument::new();
        doc.set_center("Cell").unwrap();

        assert_eq!(doc.warnings(), &[UsageWarning::CenterWithoutElement]);
        assert_eq!(
            doc.warnings()[0].to_string(),
            "Center is only valid inside an Attribute element, no element is open"
        );
        assert_eq!(doc.pending_line(), "");
    }

    #[test]
    fn variadic_attributes() {
        let mut doc = XdmfDocument::new();
        doc.begin(ElementKind::Topology);
        doc.set_dimensions([1, 1, 2]).unwrap();
        doc.set_number_of_elements(vec![10_usize, 20]).unwrap();

        assert_eq!(
            doc.pending_line(),
            "    <Topology Dimensions=\"1 1 2\" NumberOfElements=\"10 20\""
        );
    }

    #[test]
    fn name_and_value_are_unvalidated_but_escaped() {
        let mut doc = XdmfDocument::new();
        doc.begin_information();
        doc.set_name("a & b").unwrap();
        doc.set_value(1.5).unwrap();
        assert_eq!(
            doc.pending_line(),
            "    <Information Name=\"a &amp; b\" Value=\"1.5\""
        );
    }

    #[test]
    fn attributes_need_a_pending_tag() {
        let mut doc = XdmfDocument::new();
        let err = doc.set_type("Uniform").unwrap_err();
        assert!(matches!(
            err,
            Error::Structure(StructureError::NoPendingElement { attribute: "Type" })
        ));

        doc.begin_domain();
        doc.begin_grid("Uniform").unwrap();
        doc.end_grid().unwrap();

        // the Domain line was committed when the Grid opened
        let err = doc.set_name("late").unwrap_err();
        assert!(matches!(
            err,
            Error::Structure(StructureError::NoPendingElement { attribute: "Name" })
        ));
    }

    #[test]
    fn any_type_for_domain_and_information() {
        let mut doc = XdmfDocument::new();
        doc.begin_domain();
        doc.set_type("Whatever").unwrap();
        assert_eq!(doc.pending_line(), "    <Domain DomainType=\"Whatever\"");
    }
}
