//! Style-object setter.

use crate::host::{HostElement, VirtualNode, WriteMode};
use crate::value::Value;
use css::{
    Declaration, format_number_value, hyphenate_style_name, parse_declarations,
    serialize_declarations,
};

pub trait StyleSetter {
    fn apply(
        &self,
        vnode: &VirtualNode,
        element: &mut dyn HostElement,
        value: &Value,
        mode: WriteMode,
    );
}

/// Writes a style object through the element's inline style.
///
/// Property mode diffs declaration by declaration; attribute mode rewrites the
/// whole `style` attribute when its text changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineStyleSetter;

impl InlineStyleSetter {
    /// Declarations requested by `value`, in order, last write per name wins.
    pub fn declarations(value: &Value) -> Vec<Declaration> {
        match value {
            Value::String(text) => parse_declarations(text),
            Value::Object(entries) => {
                let mut out: Vec<Declaration> = Vec::with_capacity(entries.len());
                for (key, raw) in entries {
                    let name = hyphenate_style_name(key);
                    let Some(text) = style_value_text(&name, raw) else {
                        continue;
                    };
                    match out.iter_mut().find(|d| d.name == name) {
                        Some(existing) => existing.value = text,
                        None => out.push(Declaration { name, value: text }),
                    }
                }
                out
            }
            other => {
                log::debug!(target: "props.style", "ignoring non-object style value {other}");
                Vec::new()
            }
        }
    }
}

// Nullish, boolean and empty values mean "no declaration".
fn style_value_text(name: &str, raw: &Value) -> Option<String> {
    match raw {
        Value::Undefined | Value::Null | Value::Bool(_) | Value::Object(_) => None,
        Value::Number(n) if !n.is_finite() => None,
        Value::Number(_) => Some(format_number_value(name, &raw.to_dom_string())),
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Array(_) => {
            let text = raw.to_dom_string();
            (!text.is_empty()).then_some(text)
        }
    }
}

impl StyleSetter for InlineStyleSetter {
    fn apply(
        &self,
        _vnode: &VirtualNode,
        element: &mut dyn HostElement,
        value: &Value,
        mode: WriteMode,
    ) {
        let wanted = Self::declarations(value);
        match mode {
            WriteMode::Properties => {
                for name in element.style_names() {
                    if !wanted.iter().any(|d| d.name == name) {
                        element.remove_style_property(&name);
                    }
                }
                for d in &wanted {
                    if element.style_property(&d.name).as_deref() != Some(d.value.as_str()) {
                        element.set_style_property(&d.name, &d.value);
                    }
                }
            }
            WriteMode::Attributes => {
                let text = serialize_declarations(
                    wanted.iter().map(|d| (d.name.as_str(), d.value.as_str())),
                );
                let current = element.attribute("style");
                if text.is_empty() {
                    if current.is_some() {
                        element.remove_attribute("style");
                    }
                } else if current.as_deref() != Some(text.as_str()) {
                    element.set_attribute("style", &text);
                }
            }
        }
        log::trace!(
            target: "props.style",
            "<{}> style -> {} declarations ({mode:?})",
            element.tag_name(),
            wanted.len()
        );
    }
}
