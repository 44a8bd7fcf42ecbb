use crate::journal::Mutation;
use css::{Declaration, parse_declarations, serialize_declarations};
use props::{HostElement, Value};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub namespace: Option<String>,
    /// Qualified name, prefix included (`xlink:href`).
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }
}

/// An element with attributes, properties, inline style and children.
///
/// Attribute names are stored verbatim (no case folding) and keep insertion
/// order. The `style` attribute and the style declarations mirror each other.
#[derive(Clone, Debug, Default)]
pub struct Element {
    tag: String,
    attributes: Vec<Attribute>,
    properties: BTreeMap<String, Value>,
    style: Vec<Declaration>,
    text: String,
    children: Vec<Element>,
    journal: Vec<Mutation>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    // Builders describe initial state and are not journaled.

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.put_attribute(name, value);
        self
    }

    pub fn with_attribute_ns(mut self, namespace: &str, name: &str, value: &str) -> Self {
        self.put_attribute_ns(namespace, name, value);
        self
    }

    pub fn with_property(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(name.to_string(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn attribute_value_ns(&self, namespace: &str, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.namespace.as_deref() == Some(namespace) && a.local_name() == local_name)
            .map(|a| a.value.as_str())
    }

    pub fn properties(&self) -> &BTreeMap<String, Value> {
        &self.properties
    }

    pub fn property_value(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn style(&self) -> &[Declaration] {
        &self.style
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    pub fn journal(&self) -> &[Mutation] {
        &self.journal
    }

    pub fn take_journal(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.journal)
    }

    fn put_attribute(&mut self, name: &str, value: &str) {
        let existing = self
            .attributes
            .iter_mut()
            .find(|a| a.namespace.is_none() && a.name == name);
        match existing {
            Some(existing) => existing.value = value.to_string(),
            None => self.attributes.push(Attribute {
                namespace: None,
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
        if name == "style" {
            self.style = parse_declarations(value);
        }
    }

    fn put_attribute_ns(&mut self, namespace: &str, name: &str, value: &str) {
        let local = name.split_once(':').map_or(name, |(_, local)| local);
        let existing = self
            .attributes
            .iter_mut()
            .find(|a| a.namespace.as_deref() == Some(namespace) && a.local_name() == local);
        match existing {
            Some(attr) => {
                attr.name = name.to_string();
                attr.value = value.to_string();
            }
            None => self.attributes.push(Attribute {
                namespace: Some(namespace.to_string()),
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    fn drop_attribute(&mut self, name: &str) {
        if let Some(index) = self.attributes.iter().position(|a| a.name == name) {
            let removed = self.attributes.remove(index);
            if removed.namespace.is_none() && name == "style" {
                self.style.clear();
            }
        }
    }

    // Style declarations changed: mirror them into the `style` attribute.
    fn reflect_style(&mut self) {
        if self.style.is_empty() {
            self.attributes
                .retain(|a| !(a.namespace.is_none() && a.name == "style"));
            return;
        }
        let text = serialize_declarations(
            self.style
                .iter()
                .map(|d| (d.name.as_str(), d.value.as_str())),
        );
        let existing = self
            .attributes
            .iter_mut()
            .find(|a| a.namespace.is_none() && a.name == "style");
        match existing {
            Some(existing) => existing.value = text,
            None => self.attributes.push(Attribute {
                namespace: None,
                name: "style".to_string(),
                value: text,
            }),
        }
    }
}

impl HostElement for Element {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn property(&self, name: &str) -> Value {
        self.properties.get(name).cloned().unwrap_or_default()
    }

    fn set_property(&mut self, name: &str, value: Value) {
        self.journal.push(Mutation::SetProperty {
            name: name.to_string(),
            value: value.clone(),
        });
        self.properties.insert(name.to_string(), value);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attribute_value(name).map(str::to_string)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.journal.push(Mutation::SetAttribute {
            name: name.to_string(),
            value: value.to_string(),
        });
        self.put_attribute(name, value);
    }

    fn set_attribute_ns(&mut self, namespace: &str, name: &str, value: &str) {
        self.journal.push(Mutation::SetAttributeNs {
            namespace: namespace.to_string(),
            name: name.to_string(),
            value: value.to_string(),
        });
        self.put_attribute_ns(namespace, name, value);
    }

    fn remove_attribute(&mut self, name: &str) {
        self.journal.push(Mutation::RemoveAttribute {
            name: name.to_string(),
        });
        self.drop_attribute(name);
    }

    fn style_property(&self, name: &str) -> Option<String> {
        self.style
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.value.clone())
    }

    fn style_names(&self) -> Vec<String> {
        self.style.iter().map(|d| d.name.clone()).collect()
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        self.journal.push(Mutation::SetStyle {
            name: name.to_string(),
            value: value.to_string(),
        });
        match self.style.iter_mut().find(|d| d.name == name) {
            Some(existing) => existing.value = value.to_string(),
            None => self.style.push(Declaration::new(name, value)),
        }
        self.reflect_style();
    }

    fn remove_style_property(&mut self, name: &str) {
        self.journal.push(Mutation::RemoveStyle {
            name: name.to_string(),
        });
        let before = self.style.len();
        self.style.retain(|d| d.name != name);
        if self.style.len() != before {
            self.reflect_style();
        }
    }

    fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    fn for_each_child_mut(&mut self, f: &mut dyn FnMut(&mut dyn HostElement)) {
        for child in &mut self.children {
            f(child);
        }
    }
}
