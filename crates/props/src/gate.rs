//! Sanitization gate consulted before scalar must-use-property writes.

use crate::descriptor::PropertyDescriptor;
use crate::host::HostElement;
use crate::value::Value;
use url::Url;

pub trait SanitizationGate {
    /// Returns `false` to veto the write.
    fn check(
        &self,
        element: &dyn HostElement,
        descriptor: &PropertyDescriptor,
        property_name: &str,
        value: &Value,
    ) -> bool;
}

impl<F> SanitizationGate for F
where
    F: Fn(&dyn HostElement, &PropertyDescriptor, &str, &Value) -> bool,
{
    fn check(
        &self,
        element: &dyn HostElement,
        descriptor: &PropertyDescriptor,
        property_name: &str,
        value: &Value,
    ) -> bool {
        self(element, descriptor, property_name, value)
    }
}

/// Pins a closure to the gate signature so its argument types are inferred.
pub fn gate_fn<F>(f: F) -> F
where
    F: Fn(&dyn HostElement, &PropertyDescriptor, &str, &Value) -> bool,
{
    f
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    /// URL schemes (lower-case) that are never written.
    pub blocked_schemes: Vec<String>,
    /// Property names whose values are URLs.
    pub url_properties: Vec<String>,
    /// Veto arrays and objects assigned to scalar properties.
    pub reject_composite: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            blocked_schemes: vec!["javascript".to_string(), "vbscript".to_string()],
            url_properties: ["action", "formAction", "href", "poster", "src", "xlinkHref"]
                .into_iter()
                .map(String::from)
                .collect(),
            reject_composite: true,
        }
    }
}

/// Default gate: blocks script-bearing URL schemes and composite values.
#[derive(Clone, Debug, Default)]
pub struct UrlSchemeGate {
    config: GateConfig,
}

impl UrlSchemeGate {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    fn is_blocked_url(&self, text: &str) -> bool {
        // Relative URLs fail to parse without a base and carry no scheme.
        let Ok(url) = Url::parse(text) else {
            return false;
        };
        self.config
            .blocked_schemes
            .iter()
            .any(|scheme| scheme.eq_ignore_ascii_case(url.scheme()))
    }
}

impl SanitizationGate for UrlSchemeGate {
    fn check(
        &self,
        element: &dyn HostElement,
        _descriptor: &PropertyDescriptor,
        property_name: &str,
        value: &Value,
    ) -> bool {
        if self.config.reject_composite && value.is_composite() {
            log::debug!(
                target: "props.gate",
                "veto composite value for <{}>.{property_name}",
                element.tag_name()
            );
            return false;
        }
        if self.config.url_properties.iter().any(|p| p == property_name) {
            let text = value.to_dom_string();
            if self.is_blocked_url(&text) {
                log::debug!(
                    target: "props.gate",
                    "veto blocked url scheme for <{}>.{property_name}",
                    element.tag_name()
                );
                return false;
            }
        }
        true
    }
}
