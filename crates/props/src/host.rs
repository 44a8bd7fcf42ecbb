//! The host boundary: the real element being mutated, and what the virtual
//! tree tells us about it.

use crate::value::Value;

/// Operations the host environment provides on a real element.
///
/// Attribute values are always strings; properties carry a [`Value`].
pub trait HostElement {
    fn tag_name(&self) -> &str;

    /// Current value of an object property, `Value::Undefined` when unset.
    fn property(&self, name: &str) -> Value;
    fn set_property(&mut self, name: &str, value: Value);

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&mut self, name: &str, value: &str);
    fn set_attribute_ns(&mut self, namespace: &str, name: &str, value: &str);
    /// Removal by qualified name; removing an absent attribute is a no-op.
    fn remove_attribute(&mut self, name: &str);

    // Inline style declarations, keyed by hyphenated CSS property name.
    fn style_property(&self, name: &str) -> Option<String>;
    fn style_names(&self) -> Vec<String>;
    fn set_style_property(&mut self, name: &str, value: &str);
    fn remove_style_property(&mut self, name: &str);

    fn text_content(&self) -> String {
        String::new()
    }

    fn for_each_child_mut(&mut self, f: &mut dyn FnMut(&mut dyn HostElement));
}

/// The virtual counterpart of a host element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualNode {
    tag: String,
}

impl VirtualNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_select(&self) -> bool {
        self.tag == "select"
    }
}

/// Write style for descriptors that support both surfaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WriteMode {
    /// Object-property assignment (`useProperties = true`).
    Properties,
    /// Markup attribute assignment.
    #[default]
    Attributes,
}

impl WriteMode {
    pub fn uses_properties(self) -> bool {
        self == WriteMode::Properties
    }
}

impl From<bool> for WriteMode {
    fn from(use_properties: bool) -> Self {
        if use_properties {
            WriteMode::Properties
        } else {
            WriteMode::Attributes
        }
    }
}
