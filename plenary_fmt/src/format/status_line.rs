use std::sync::LazyLock;

use regex::Regex;

use crate::format::wrap::{char_len, wrap_with_indent};

static STATUS_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(✓|✗|[0-9]+\)|•|\*)\s+(.*)$").unwrap());

/// A result line such as `    ✗ handles empty buffers` or `  2) boom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine<'a> {
    pub indent: &'a str,
    pub marker: &'a str,
    pub description: &'a str,
}

impl<'a> StatusLine<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = STATUS_LINE_RE.captures(line)?;
        Some(Self {
            indent: caps.get(1)?.as_str(),
            marker: caps.get(2)?.as_str(),
            description: caps.get(3)?.as_str(),
        })
    }

    /// Column where the description starts: indent, marker, one space.
    pub fn indent_width(&self) -> usize {
        char_len(self.indent) + char_len(self.marker) + 1
    }

    /// The line with exactly one space between marker and description.
    pub fn reconstructed(&self) -> String {
        format!("{}{} {}", self.indent, self.marker, self.description)
    }

    /// Lines to print for a terminal `columns` wide, or `None` when the
    /// reconstructed line already fits and the input should pass through.
    pub fn wrap_to(&self, columns: usize) -> Option<Vec<String>> {
        if char_len(&self.reconstructed()) <= columns {
            return None;
        }
        let indent_width = self.indent_width();
        let mut wrapped = wrap_with_indent(
            self.description,
            indent_width,
            columns.saturating_sub(indent_width),
        )
        .into_iter();
        let first = wrapped.next().unwrap_or_default();
        let mut out = vec![format!("{}{} {}", self.indent, self.marker, first)];
        out.extend(wrapped);
        Some(out)
    }
}
