//! `value` of `<select>` elements, applied through option selection.

use crate::host::{HostElement, VirtualNode, WriteMode};
use crate::value::Value;

pub trait SelectValueSetter {
    fn apply(
        &self,
        vnode: &VirtualNode,
        element: &mut dyn HostElement,
        value: &Value,
        mode: WriteMode,
    );
}

/// Marks matching `<option>` children (including those inside `<optgroup>`)
/// as selected and clears the rest.
///
/// Arrays are only honoured for `multiple` selects; a single select selects
/// the first option whose value matches.
#[derive(Clone, Copy, Debug, Default)]
pub struct OptionSelectSetter;

impl SelectValueSetter for OptionSelectSetter {
    fn apply(
        &self,
        _vnode: &VirtualNode,
        element: &mut dyn HostElement,
        value: &Value,
        mode: WriteMode,
    ) {
        let multiple = is_multiple(element);
        let wanted: Vec<String> = match value {
            Value::Array(items) if multiple => items
                .iter()
                .filter(|v| !v.is_nullish())
                .map(Value::to_dom_string)
                .collect(),
            other => vec![other.to_dom_string()],
        };

        let mut matched = 0usize;
        visit_options(element, &mut |option| {
            let option_value = option_value(option);
            let selected = if multiple {
                wanted.contains(&option_value)
            } else {
                matched == 0 && wanted.first() == Some(&option_value)
            };
            if selected {
                matched += 1;
            }
            write_selected(option, selected, mode);
        });

        log::trace!(
            target: "props.select",
            "<{}> value {value} matched {matched} option(s) ({mode:?})",
            element.tag_name()
        );
    }
}

fn is_multiple(element: &dyn HostElement) -> bool {
    element.property("multiple").is_truthy() || element.attribute("multiple").is_some()
}

fn visit_options(element: &mut dyn HostElement, f: &mut dyn FnMut(&mut dyn HostElement)) {
    element.for_each_child_mut(&mut |child| {
        if child.tag_name().eq_ignore_ascii_case("option") {
            f(child);
        } else if child.tag_name().eq_ignore_ascii_case("optgroup") {
            visit_options(child, &mut *f);
        }
    });
}

// An option without a value attribute uses its collapsed text.
fn option_value(option: &dyn HostElement) -> String {
    if let Some(value) = option.attribute("value") {
        return value;
    }
    if let Value::String(value) = option.property("value") {
        return value;
    }
    option
        .text_content()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_selected(option: &mut dyn HostElement, selected: bool, mode: WriteMode) {
    match mode {
        WriteMode::Properties => {
            if option.property("selected").is_truthy() != selected {
                option.set_property("selected", Value::Bool(selected));
            }
        }
        WriteMode::Attributes => {
            let current = option.attribute("selected");
            if selected {
                if current.as_deref() != Some("selected") {
                    option.set_attribute("selected", "selected");
                }
            } else if current.is_some() {
                option.remove_attribute("selected");
            }
        }
    }
}
