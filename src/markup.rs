//! Element / indentation state machine.
//!
//! Text is accumulated in two stages. The opening tag of the most recently opened
//! element stays in `pending` until something else happens to the document, so that
//! attributes can still be appended to it. Every other line goes straight to
//! `content`. Open elements are tracked on an explicit stack, which is where both
//! the indentation depth and the "current element" come from.

use crate::catalog::ElementKind;
use crate::error::StructureError;
use crate::options::{Indent, NewLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenElement {
    pub(crate) kind: ElementKind,
    /// nesting level of the element, the root `Xdmf` element is level 0
    pub(crate) depth: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct Markup {
    content: String,
    pending: String,
    stack: Vec<OpenElement>,
    indent: String,
    newline: NewLine,
    correct_geometry_close: bool,
}

impl Markup {
    pub(crate) fn new(indent: Indent, newline: NewLine, correct_geometry_close: bool) -> Self {
        Self {
            content: String::new(),
            pending: String::new(),
            stack: Vec::new(),
            indent: indent.unit(),
            newline,
            correct_geometry_close,
        }
    }

    /// drop all text and open elements
    pub(crate) fn reset(&mut self) {
        self.content.clear();
        self.pending.clear();
        self.stack.clear();
    }

    pub(crate) fn set_indent(&mut self, indent: Indent) {
        self.indent = indent.unit();
    }

    pub(crate) fn newline(&self) -> &'static str {
        self.newline.as_str()
    }

    pub(crate) fn content(&self) -> &str {
        &self.content
    }

    pub(crate) fn pending(&self) -> &str {
        &self.pending
    }

    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }

    pub(crate) fn current_kind(&self) -> Option<ElementKind> {
        self.stack.last().map(|element| element.kind)
    }

    pub(crate) fn open_elements(&self) -> &[OpenElement] {
        &self.stack
    }

    /// drop committed content past `len` bytes
    pub(crate) fn truncate(&mut self, len: usize) {
        self.content.truncate(len);
    }

    /// append text to the committed content as is
    pub(crate) fn push_raw(&mut self, text: &str) {
        self.content.push_str(text);
    }

    /// terminate the pending opening tag and move it to the committed content
    pub(crate) fn commit(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        self.content.push_str(&self.pending);
        self.content.push('>');
        self.content.push_str(self.newline.as_str());
        self.pending.clear();
    }

    /// move the pending text to the committed content as a plain line (no `>`)
    pub(crate) fn flush_line(&mut self) {
        self.content.push_str(&self.pending);
        self.content.push_str(self.newline.as_str());
        self.pending.clear();
    }

    pub(crate) fn push_indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.pending.push_str(&self.indent);
        }
    }

    /// append text to the pending line
    pub(crate) fn push_text(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    pub(crate) fn open(&mut self, kind: ElementKind) {
        self.commit();

        let depth = self.stack.len() + 1;
        self.stack.push(OpenElement { kind, depth });

        self.push_indent(depth);
        self.pending.push('<');
        self.pending.push_str(kind.tag());

        tracing::trace!(element = %kind, depth, "opened element");
    }

    pub(crate) fn close(&mut self, kind: ElementKind) -> Result<(), StructureError> {
        let top = match self.stack.last() {
            Some(top) if top.kind == kind => *top,
            Some(top) => {
                return Err(StructureError::MismatchedClose {
                    expected: top.kind,
                    found: kind,
                })
            }
            None => return Err(StructureError::NothingOpen { found: kind }),
        };

        self.commit();

        self.push_indent(top.depth);
        self.pending.push_str("</");
        self.pending
            .push_str(kind.closing_tag(self.correct_geometry_close));
        self.commit();

        self.stack.pop();

        tracing::trace!(element = %kind, depth = top.depth, "closed element");

        Ok(())
    }

    /// fails unless an opening tag is waiting for attributes
    pub(crate) fn ensure_pending(&self, attribute: &'static str) -> Result<(), StructureError> {
        if self.pending.is_empty() {
            Err(StructureError::NoPendingElement { attribute })
        } else {
            Ok(())
        }
    }

    /// append ` name="value"` to the pending opening tag
    pub(crate) fn push_attribute(
        &mut self,
        name: &'static str,
        value: &str,
    ) -> Result<(), StructureError> {
        self.ensure_pending(name)?;

        self.pending.push(' ');
        self.pending.push_str(name);
        self.pending.push_str("=\"");
        self.pending.push_str(value);
        self.pending.push('"');

        Ok(())
    }
}
