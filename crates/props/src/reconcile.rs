//! Property reconciliation: one virtual property write becomes the matching
//! host mutation.
//!
//! Decision order for `set_property`:
//! - registry hit, absent value (nullish, falsy boolean, NaN numeric,
//!   positive numeric below 1, zero `length`) -> `remove_property`;
//! - registry hit, must-use-property -> style setter, select setter, or a
//!   gated property/attribute write;
//! - registry hit, attribute-backed -> (namespaced) attribute write;
//! - registry miss, name longer than 2 -> free-form attribute, data-/aria-
//!   names lower-cased; shorter names are ignored.
//!
//! The reconciler is stateless; collaborators are only read.

use crate::descriptor::{PropertyDescriptor, ValueKind, WritePath};
use crate::gate::{SanitizationGate, UrlSchemeGate};
use crate::host::{HostElement, VirtualNode, WriteMode};
use crate::names::{NameClassifier, StandardNames};
use crate::registry::{HtmlRegistry, PropertyRegistry};
use crate::select::{OptionSelectSetter, SelectValueSetter};
use crate::style::{InlineStyleSetter, StyleSetter};
use crate::value::{Value, utf16_len};

/// Unknown names of this length or shorter are never written.
pub const MAX_IGNORED_NAME_LEN: usize = 2;

pub struct PropertyReconciler {
    registry: Box<dyn PropertyRegistry>,
    styles: Box<dyn StyleSetter>,
    select: Box<dyn SelectValueSetter>,
    gate: Box<dyn SanitizationGate>,
    names: Box<dyn NameClassifier>,
}

impl PropertyReconciler {
    /// Reconciler wired to the standard collaborators.
    pub fn new() -> Self {
        Self {
            registry: Box::new(HtmlRegistry),
            styles: Box::new(InlineStyleSetter),
            select: Box::new(OptionSelectSetter),
            gate: Box::new(UrlSchemeGate::default()),
            names: Box::new(StandardNames),
        }
    }

    pub fn with_registry(mut self, registry: impl PropertyRegistry + 'static) -> Self {
        self.registry = Box::new(registry);
        self
    }

    pub fn with_style_setter(mut self, styles: impl StyleSetter + 'static) -> Self {
        self.styles = Box::new(styles);
        self
    }

    pub fn with_select_setter(mut self, select: impl SelectValueSetter + 'static) -> Self {
        self.select = Box::new(select);
        self
    }

    pub fn with_gate(mut self, gate: impl SanitizationGate + 'static) -> Self {
        self.gate = Box::new(gate);
        self
    }

    pub fn with_name_classifier(mut self, names: impl NameClassifier + 'static) -> Self {
        self.names = Box::new(names);
        self
    }

    pub fn registry(&self) -> &dyn PropertyRegistry {
        self.registry.as_ref()
    }

    pub fn set_property(
        &self,
        vnode: &VirtualNode,
        element: &mut dyn HostElement,
        name: &str,
        value: &Value,
        mode: WriteMode,
    ) {
        let Some(descriptor) = self.registry.lookup(name) else {
            self.set_custom_attribute(element, name, value);
            return;
        };

        if is_absent(descriptor, value) {
            log::trace!(target: "props.reconcile", "{name}: absent value {value}, removing");
            self.remove_property(vnode, element, name, mode);
            return;
        }

        match descriptor.path {
            WritePath::Object if descriptor.property_name == "style" => {
                self.styles.apply(vnode, element, value, mode);
            }
            WritePath::Property | WritePath::Object
                if descriptor.property_name == "value" && vnode.is_select() =>
            {
                self.select.apply(vnode, element, value, mode);
            }
            WritePath::Property | WritePath::Object => {
                self.write_gated_property(element, descriptor, value, mode);
            }
            WritePath::Attribute => {
                let attribute_name = descriptor.attribute_name;
                let text = attribute_text(descriptor, attribute_name, value);
                match descriptor.attribute_namespace {
                    Some(namespace) => {
                        element.set_attribute_ns(namespace, attribute_name, &text);
                    }
                    None => element.set_attribute(attribute_name, &text),
                }
            }
        }
    }

    pub fn remove_property(
        &self,
        _vnode: &VirtualNode,
        element: &mut dyn HostElement,
        name: &str,
        mode: WriteMode,
    ) {
        let Some(descriptor) = self.registry.lookup(name) else {
            element.remove_attribute(name);
            return;
        };

        let property_name = descriptor.property_name;
        match (descriptor.path, descriptor.kind, mode) {
            (WritePath::Attribute, _, _) => element.remove_attribute(descriptor.attribute_name),
            (WritePath::Property, ValueKind::Boolean, WriteMode::Properties) => {
                element.set_property(property_name, Value::Bool(false));
            }
            // Composite values cannot be reset through the property.
            (WritePath::Object, _, _) => element.remove_attribute(property_name),
            (WritePath::Property, _, WriteMode::Properties) => {
                if !element.property(property_name).to_dom_string().is_empty() {
                    element.set_property(property_name, Value::String(String::new()));
                }
            }
            (WritePath::Property, _, WriteMode::Attributes) => {
                element.remove_attribute(property_name);
            }
        }
    }

    fn write_gated_property(
        &self,
        element: &mut dyn HostElement,
        descriptor: &PropertyDescriptor,
        value: &Value,
        mode: WriteMode,
    ) {
        let property_name = descriptor.property_name;
        if !self.gate.check(&*element, descriptor, property_name, value) {
            log::debug!(
                target: "props.reconcile",
                "<{}>.{property_name}: write vetoed by sanitization gate",
                element.tag_name()
            );
            return;
        }
        match mode {
            WriteMode::Properties => element.set_property(property_name, value.clone()),
            WriteMode::Attributes => {
                let text = attribute_text(descriptor, property_name, value);
                element.set_attribute(property_name, &text);
            }
        }
    }

    fn set_custom_attribute(&self, element: &mut dyn HostElement, name: &str, value: &Value) {
        if utf16_len(name) <= MAX_IGNORED_NAME_LEN {
            log::trace!(target: "props.reconcile", "ignoring short unknown name {name:?}");
            return;
        }
        if value.is_nullish() {
            element.remove_attribute(name);
            return;
        }
        let text = value.to_dom_string();
        if self.names.is_data_attribute(name) || self.names.is_aria_attribute(name) {
            element.set_attribute(&name.to_lowercase(), &text);
        } else {
            element.set_attribute(name, &text);
        }
    }
}

impl Default for PropertyReconciler {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `value` means "remove" for a registered property.
///
/// The `length` rule applies to any value: empty arrays and array-likes with
/// a zero `length` count as absent, not just empty strings.
pub fn is_absent(descriptor: &PropertyDescriptor, value: &Value) -> bool {
    value.is_nullish()
        || (descriptor.has_boolean_value() && !value.is_truthy())
        || (descriptor.has_numeric_value() && value.is_nan())
        || (descriptor.has_positive_numeric_value() && value.to_number() < 1.0)
        || value.length() == Some(0)
}

// Boolean attributes carry their own name as value.
fn attribute_text(descriptor: &PropertyDescriptor, name: &str, value: &Value) -> String {
    if descriptor.has_boolean_value() && matches!(value, Value::Bool(true)) {
        name.to_string()
    } else {
        value.to_dom_string()
    }
}

#[cfg(test)]
mod tests;
