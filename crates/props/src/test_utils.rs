use crate::host::HostElement;
use crate::value::Value;

/// Minimal host element for unit tests: flat attribute/property/style lists
/// and a call log, no children reflection or style/attribute sync.
#[derive(Debug, Default)]
pub struct FlatElement {
    pub tag: String,
    pub attributes: Vec<(Option<String>, String, String)>,
    pub properties: Vec<(String, Value)>,
    pub style: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<FlatElement>,
    pub calls: Vec<String>,
}

impl FlatElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(_, n, _)| n == name)
            .map(|(_, _, v)| v.as_str())
    }

    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.properties.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

impl HostElement for FlatElement {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn property(&self, name: &str) -> Value {
        self.prop(name).cloned().unwrap_or_default()
    }

    fn set_property(&mut self, name: &str, value: Value) {
        self.calls.push(format!("prop {name}={value}"));
        match self.properties.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.properties.push((name.to_string(), value)),
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attr(name).map(str::to_string)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.calls.push(format!("attr {name}={value}"));
        match self.attributes.iter_mut().find(|(ns, n, _)| ns.is_none() && n == name) {
            Some((_, _, v)) => *v = value.to_string(),
            None => self
                .attributes
                .push((None, name.to_string(), value.to_string())),
        }
    }

    fn set_attribute_ns(&mut self, namespace: &str, name: &str, value: &str) {
        self.calls.push(format!("attr-ns {namespace} {name}={value}"));
        self.attributes
            .retain(|(ns, n, _)| !(ns.as_deref() == Some(namespace) && n == name));
        self.attributes.push((
            Some(namespace.to_string()),
            name.to_string(),
            value.to_string(),
        ));
    }

    fn remove_attribute(&mut self, name: &str) {
        self.calls.push(format!("remove {name}"));
        self.attributes.retain(|(_, n, _)| n != name);
    }

    fn style_property(&self, name: &str) -> Option<String> {
        self.style
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn style_names(&self) -> Vec<String> {
        self.style.iter().map(|(n, _)| n.clone()).collect()
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        self.calls.push(format!("style {name}={value}"));
        match self.style.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.style.push((name.to_string(), value.to_string())),
        }
    }

    fn remove_style_property(&mut self, name: &str) {
        self.calls.push(format!("unstyle {name}"));
        self.style.retain(|(n, _)| n != name);
    }

    fn text_content(&self) -> String {
        self.text.clone()
    }

    fn for_each_child_mut(&mut self, f: &mut dyn FnMut(&mut dyn HostElement)) {
        for child in &mut self.children {
            f(child);
        }
    }
}
