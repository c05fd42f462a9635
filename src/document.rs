use crate::catalog::{Catalog, ElementKind};
use crate::error::{StructureError, UsageWarning};
use crate::markup::Markup;
use crate::options::{Indent, Options};
use crate::utils;
use crate::Error;

use std::io::Write;
use std::path::Path;

const XML_DECLARATION: &str = r#"<?xml version="1.0" ?>"#;
const DOCTYPE: &str = r#"<!DOCTYPE Xdmf SYSTEM "Xdmf.dtd" []>"#;

#[derive(Debug, Clone)]
/// Incrementally built XDMF descriptor.
///
/// Elements are opened and closed in document order. Attributes may only be added
/// to the element that was opened last, and only until something else (a child
/// element, a payload, or its closing tag) is written.
///
/// ```
/// let mut doc = xdmf::XdmfDocument::new();
///
/// doc.begin_domain();
/// doc.begin_grid("Uniform")?;
/// doc.set_name("mesh")?;
/// doc.begin_topology("3DCoRectMesh")?;
/// doc.set_dimensions([4, 4, 4])?;
/// doc.end_topology()?;
/// doc.end_grid()?;
/// doc.end_domain()?;
///
/// let text = doc.render()?;
/// assert!(text.contains(r#"<Topology TopologyType="3DCoRectMesh" Dimensions="4 4 4">"#));
/// # Ok::<(), xdmf::Error>(())
/// ```
pub struct XdmfDocument {
    pub(crate) options: Options,
    pub(crate) markup: Markup,
    pub(crate) warnings: Vec<UsageWarning>,
    /// offset of the closing `</Xdmf>` in the content while the document is finalized
    root_close: Option<usize>,
}

impl Default for XdmfDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl XdmfDocument {
    /// start a document with the default [`Options`]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// start a document stamped with a specific format version
    pub fn with_version<T: Into<String>>(version: T) -> Self {
        Self::with_options(Options::default().with_version(version))
    }

    pub fn with_options(options: Options) -> Self {
        let markup = Markup::new(
            options.indent,
            options.newline,
            options.correct_geometry_close,
        );

        let mut document = Self {
            options,
            markup,
            warnings: Vec::new(),
            root_close: None,
        };

        document.begin_xdmf();
        document
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// change the indentation of lines written from now on. A width of zero
    /// indents with tabs.
    pub fn set_indent(&mut self, width: usize) {
        let indent = Indent::from_width(width);
        self.options.indent = indent;
        self.markup.set_indent(indent);
    }

    /// change the wrap count of inline payloads written from now on
    pub fn set_values_per_line(&mut self, values_per_line: usize) {
        self.options.values_per_line = values_per_line;
    }

    /// (re)start the document: discard everything written so far and emit the
    /// preamble and the opening `Xdmf` tag
    pub fn begin_xdmf(&mut self) {
        self.root_close = None;
        self.warnings.clear();
        self.markup.reset();

        let newline = self.markup.newline();
        let version = utils::escape_attribute(&self.options.version).into_owned();

        self.markup.push_raw(XML_DECLARATION);
        self.markup.push_raw(newline);
        self.markup.push_raw(DOCTYPE);
        self.markup.push_raw(newline);
        self.markup.push_raw("<Xdmf Version=\"");
        self.markup.push_raw(&version);
        self.markup.push_raw("\">");
        self.markup.push_raw(newline);
    }

    /// close the root element. Calling this on a finalized document does nothing.
    ///
    /// Writing to a finalized document reopens it: the closing `</Xdmf>` is removed
    /// again and the next call re-checks that every element was closed.
    pub fn end_xdmf(&mut self) -> Result<(), Error> {
        if self.root_close.is_some() {
            return Ok(());
        }

        let open = self.markup.open_elements();
        if let Some(innermost) = open.last() {
            return Err(StructureError::Unclosed {
                open: open.len(),
                innermost: innermost.kind,
            }
            .into());
        }

        self.markup.commit();
        self.root_close = Some(self.markup.content().len());
        self.markup.push_raw("</Xdmf>");

        Ok(())
    }

    pub fn is_finalized(&self) -> bool {
        self.root_close.is_some()
    }

    /// take back the closing root tag before more content is written
    pub(crate) fn reopen(&mut self) {
        if let Some(len) = self.root_close.take() {
            self.markup.truncate(len);
            tracing::debug!("reopened finalized document");
        }
    }

    /// open an element of any kind without attributes
    pub fn begin(&mut self, kind: ElementKind) {
        self.reopen();
        self.markup.open(kind);
    }

    /// close the innermost element, which must be of the given kind
    pub fn end(&mut self, kind: ElementKind) -> Result<(), Error> {
        self.markup.close(kind)?;
        Ok(())
    }

    /// open an element and stamp its `Type` attribute.
    ///
    /// The element stays open if the type is rejected.
    pub fn begin_typed(&mut self, kind: ElementKind, element_type: &str) -> Result<(), Error> {
        self.begin(kind);
        self.set_validated(Catalog::Type(kind), element_type)
    }

    /// Open an element with its default `Type`, see [`ElementKind::default_type`].
    /// Elements without a default are opened without attributes.
    ///
    /// ```
    /// use xdmf::ElementKind;
    ///
    /// let mut doc = xdmf::XdmfDocument::new();
    /// doc.begin_default(ElementKind::Topology)?;
    /// assert_eq!(doc.pending_line(), r#"    <Topology TopologyType="2DCoRectMesh""#);
    /// # Ok::<(), xdmf::Error>(())
    /// ```
    pub fn begin_default(&mut self, kind: ElementKind) -> Result<(), Error> {
        match kind.default_type() {
            Some(element_type) => self.begin_typed(kind, element_type),
            None => {
                self.begin(kind);
                Ok(())
            }
        }
    }

    pub fn begin_domain(&mut self) {
        self.begin(ElementKind::Domain);
    }

    pub fn end_domain(&mut self) -> Result<(), Error> {
        self.end(ElementKind::Domain)
    }

    pub fn begin_grid(&mut self, grid_type: &str) -> Result<(), Error> {
        self.begin_typed(ElementKind::Grid, grid_type)
    }

    pub fn end_grid(&mut self) -> Result<(), Error> {
        self.end(ElementKind::Grid)
    }

    pub fn begin_topology(&mut self, topology_type: &str) -> Result<(), Error> {
        self.begin_typed(ElementKind::Topology, topology_type)
    }

    pub fn end_topology(&mut self) -> Result<(), Error> {
        self.end(ElementKind::Topology)
    }

    pub fn begin_geometry(&mut self, geometry_type: &str) -> Result<(), Error> {
        self.begin_typed(ElementKind::Geometry, geometry_type)
    }

    /// see [`Options::correct_geometry_close`] for the spelling of the closing tag
    pub fn end_geometry(&mut self) -> Result<(), Error> {
        self.end(ElementKind::Geometry)
    }

    pub fn begin_attribute(&mut self, attribute_type: &str) -> Result<(), Error> {
        self.begin_typed(ElementKind::Attribute, attribute_type)
    }

    pub fn end_attribute(&mut self) -> Result<(), Error> {
        self.end(ElementKind::Attribute)
    }

    pub fn begin_data_item(&mut self, data_item_type: &str) -> Result<(), Error> {
        self.begin_typed(ElementKind::DataItem, data_item_type)
    }

    pub fn end_data_item(&mut self) -> Result<(), Error> {
        self.end(ElementKind::DataItem)
    }

    pub fn begin_set(&mut self, set_type: &str) -> Result<(), Error> {
        self.begin_typed(ElementKind::Set, set_type)
    }

    pub fn end_set(&mut self) -> Result<(), Error> {
        self.end(ElementKind::Set)
    }

    pub fn begin_time(&mut self, time_type: &str) -> Result<(), Error> {
        self.begin_typed(ElementKind::Time, time_type)
    }

    pub fn end_time(&mut self) -> Result<(), Error> {
        self.end(ElementKind::Time)
    }

    pub fn begin_information(&mut self) {
        self.begin(ElementKind::Information);
    }

    pub fn end_information(&mut self) -> Result<(), Error> {
        self.end(ElementKind::Information)
    }

    /// number of currently open elements below the root
    pub fn depth(&self) -> usize {
        self.markup.depth()
    }

    /// kind of the innermost open element
    pub fn current_kind(&self) -> Option<ElementKind> {
        self.markup.current_kind()
    }

    /// the opening tag that is still accepting attributes, empty if there is none
    pub fn pending_line(&self) -> &str {
        self.markup.pending()
    }

    /// usage warnings raised since the document was (re)started
    pub fn warnings(&self) -> &[UsageWarning] {
        &self.warnings
    }

    /// finalize the document if needed and return its text
    pub fn render(&mut self) -> Result<&str, Error> {
        self.end_xdmf()?;
        Ok(self.markup.content())
    }

    /// write the finalized document followed by a newline
    pub fn write_to<W: Write>(&mut self, mut writer: W) -> Result<(), Error> {
        let newline = self.markup.newline();
        let text = self.render()?;

        writer.write_all(text.as_bytes())?;
        writer.write_all(newline.as_bytes())?;
        writer.flush()?;

        Ok(())
    }

    /// write the finalized document to a file, replacing it if it exists
    pub fn generate<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);

        self.write_to(writer)?;

        tracing::debug!(path = %path.display(), bytes = self.markup.content().len(), "wrote xdmf file");

        Ok(())
    }
}
