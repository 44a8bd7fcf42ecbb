use crate::element::Element;
use std::fmt::{self, Write};

/// Deterministic element serialization for fixture comparisons.
/// Not a public stable format.
///
/// Layout:
/// - `<tag name="value" ...>` with attributes in insertion order; namespaced
///   attributes carry their namespace as `name{ns}`.
/// - `.name = value` per property, sorted by name, one level deeper.
/// - the element's own text as a quoted line, one level deeper.
/// - children, one level deeper.
#[derive(Clone, Copy, Debug)]
pub struct SnapshotOptions {
    pub include_properties: bool,
    pub include_namespaces: bool,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            include_properties: true,
            include_namespaces: true,
        }
    }
}

#[derive(Debug)]
pub struct Snapshot {
    lines: Vec<String>,
}

impl Snapshot {
    pub fn new(root: &Element, options: SnapshotOptions) -> Self {
        let mut lines = Vec::new();
        walk_snapshot(root, &options, 0, &mut lines);
        Self { lines }
    }

    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

const INDENT_STEP: usize = 2;

fn indented(level: usize) -> String {
    " ".repeat(level.saturating_mul(INDENT_STEP))
}

fn walk_snapshot(el: &Element, options: &SnapshotOptions, level: usize, out: &mut Vec<String>) {
    let mut line = indented(level);
    write_element_line(&mut line, el, options);
    out.push(line);

    if options.include_properties {
        for (name, value) in el.properties() {
            let mut line = indented(level + 1);
            let _ = write!(line, ".{name} = {value}");
            out.push(line);
        }
    }
    if !el.text().is_empty() {
        let mut line = indented(level + 1);
        line.push('"');
        write_escaped(&mut line, el.text());
        line.push('"');
        out.push(line);
    }
    for child in el.children() {
        walk_snapshot(child, options, level + 1, out);
    }
}

fn write_element_line(out: &mut String, el: &Element, options: &SnapshotOptions) {
    out.push('<');
    out.push_str(el.tag());
    for attr in el.attributes() {
        out.push(' ');
        out.push_str(&attr.name);
        if options.include_namespaces
            && let Some(ns) = &attr.namespace
        {
            let _ = write!(out, "{{{ns}}}");
        }
        out.push_str("=\"");
        write_escaped(out, &attr.value);
        out.push('"');
    }
    out.push('>');
}

fn write_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ if ch.is_ascii() => out.push(ch),
            _ => {
                let _ = write!(out, "\\u{{{:X}}}", ch as u32);
            }
        }
    }
}
