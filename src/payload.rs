//! inline numeric payloads, the text body of a `DataItem`

use crate::document::XdmfDocument;
use crate::markup::Markup;
use crate::traits::Numeric;
use crate::Error;

use ndarray::{ArrayBase, Data, Dimension};

/// Write `values` one level below the current element, `values_per_line` to a line.
///
/// Each value except the last is followed by a space. A `values_per_line` of zero
/// never wraps. Nothing is written for an empty sequence.
pub(crate) fn write_inline<I>(markup: &mut Markup, values: I, values_per_line: usize)
where
    I: IntoIterator,
    I::Item: Numeric,
{
    let mut values = values.into_iter().peekable();

    if values.peek().is_none() {
        return;
    }

    markup.commit();

    let depth = markup.depth() + 1;
    markup.push_indent(depth);

    let mut text = String::new();
    let mut written = 0;

    while let Some(value) = values.next() {
        value.write_text(&mut text);
        written += 1;

        let is_last = values.peek().is_none();
        if is_last {
            break;
        }

        text.push(' ');

        if values_per_line != 0 && written % values_per_line == 0 {
            markup.push_text(&text);
            markup.flush_line();
            markup.push_indent(depth);
            text.clear();
        }
    }

    markup.push_text(&text);
    markup.flush_line();
}

impl XdmfDocument {
    /// Write numbers as the body of the current element.
    ///
    /// The opening tag is terminated first, so no attributes can be added to the
    /// element afterwards. Its closing tag is written by the matching `end_*` call.
    pub fn write_values<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Numeric,
    {
        let mut values = values.into_iter().peekable();
        if values.peek().is_none() {
            return;
        }

        self.reopen();

        let values_per_line = self.options.values_per_line;
        write_inline(&mut self.markup, values, values_per_line);
    }

    /// Write a complete `DataItem` holding the contents of `array`.
    ///
    /// `Dimensions` is taken from the shape of the array and `NumberType` /
    /// `Precision` from its element type. Values are written in logical
    /// (row-major) order.
    ///
    /// ```
    /// use xdmf::ndarray::array;
    ///
    /// let mut doc = xdmf::XdmfDocument::new();
    /// doc.begin_geometry("XY")?;
    /// doc.write_data_item(&array![[0.0, 0.0], [1.0, 0.5]])?;
    /// doc.end_geometry()?;
    ///
    /// let text = doc.render()?;
    /// assert!(text.contains(
    ///     r#"<DataItem DataItemType="Uniform" Dimensions="2 2" NumberType="Float" Precision="8" Format="XML">"#
    /// ));
    /// assert!(text.contains("0.0 0.0 1.0 0.5\n"));
    /// # Ok::<(), xdmf::Error>(())
    /// ```
    pub fn write_data_item<N, S, D>(&mut self, array: &ArrayBase<S, D>) -> Result<(), Error>
    where
        N: Numeric,
        S: Data<Elem = N>,
        D: Dimension,
    {
        self.begin_data_item("Uniform")?;
        self.set_dimensions(array.shape())?;
        self.set_number_type(N::NUMBER_TYPE)?;
        self.set_precision(N::PRECISION)?;
        self.set_format("XML")?;

        self.write_values(array.iter().copied());

        self.end_data_item()
    }
}
