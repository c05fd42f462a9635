use std::borrow::Cow;
use std::fmt::Display;

/// join the values with single spaces, keeping their order
pub(crate) fn join_spaced<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();

    for (idx, value) in values.into_iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        out.push_str(&value.to_string());
    }

    out
}

/// escape free-form text so it can sit inside a quoted attribute
pub(crate) fn escape_attribute(value: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(value)
}
