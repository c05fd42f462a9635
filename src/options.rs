//! configuration of the text layout of a document

/// version stamped on the root element when none is given
pub const DEFAULT_VERSION: &str = "3.0";

/// number of payload values written on a single line
pub const DEFAULT_VALUES_PER_LINE: usize = 10;

/// width of the default indentation unit in spaces
pub const DEFAULT_INDENT_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// unit of indentation written once per nesting level
///
/// `Spaces(0)` indents with a tab, the same as [`Indent::from_width`] with a width
/// of zero.
pub enum Indent {
    Spaces(usize),
    Tab,
}

impl Indent {
    /// a width of zero selects a tab, anything else that many spaces
    pub fn from_width(width: usize) -> Self {
        if width == 0 {
            Self::Tab
        } else {
            Self::Spaces(width)
        }
    }

    pub(crate) fn unit(self) -> String {
        match self {
            Self::Spaces(0) | Self::Tab => "\t".to_string(),
            Self::Spaces(width) => " ".repeat(width),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::Spaces(DEFAULT_INDENT_WIDTH)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewLine {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl NewLine {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Layout settings for an [`XdmfDocument`](crate::XdmfDocument).
///
/// ```
/// use xdmf::{Indent, NewLine, Options};
///
/// let options = Options::default()
///     .with_version("2.0")
///     .with_indent(Indent::Tab)
///     .with_newline(NewLine::CrLf)
///     .with_values_per_line(6);
///
/// assert_eq!(options.version, "2.0");
/// ```
pub struct Options {
    /// written to the `Version` attribute of the root element
    pub version: String,
    pub indent: Indent,
    /// line terminator. This can only be chosen when the document is created
    pub newline: NewLine,
    /// inline payload wrap count, `0` keeps every payload on a single line
    pub values_per_line: usize,
    /// close geometry elements with `</Geometry>` instead of the legacy `</Geomerry>`
    pub correct_geometry_close: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            indent: Indent::default(),
            newline: NewLine::default(),
            values_per_line: DEFAULT_VALUES_PER_LINE,
            correct_geometry_close: false,
        }
    }
}

impl Options {
    pub fn with_version<T: Into<String>>(mut self, version: T) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_newline(mut self, newline: NewLine) -> Self {
        self.newline = newline;
        self
    }

    pub fn with_values_per_line(mut self, values_per_line: usize) -> Self {
        self.values_per_line = values_per_line;
        self
    }

    pub fn with_correct_geometry_close(mut self, correct: bool) -> Self {
        self.correct_geometry_close = correct;
        self
    }
}
