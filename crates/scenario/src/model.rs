//! Serde model of a scenario document.

use crate::error::ScenarioError;
use dom::Element;
use props::{GateConfig, Value, WriteMode};
use serde::Deserialize;

pub const SCENARIO_FORMAT_V1: &str = "propsync-scenario-v1";

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub format: Option<String>,
    /// `attributes` (default) or `properties`.
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub gate: Option<GateDef>,
    pub element: ElementDef,
    #[serde(default)]
    pub steps: Vec<StepDef>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementDef {
    pub tag: String,
    #[serde(default)]
    pub attributes: Vec<AttributeDef>,
    #[serde(default)]
    pub properties: toml::Table,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub children: Vec<ElementDef>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeDef {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub namespace: Option<String>,
}

/// Gate settings; unset fields keep the [`GateConfig`] defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateDef {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub blocked_schemes: Option<Vec<String>>,
    #[serde(default)]
    pub url_properties: Option<Vec<String>>,
    #[serde(default)]
    pub reject_composite: Option<bool>,
}

fn enabled_by_default() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepDef {
    pub op: String,
    pub name: String,
    #[serde(default)]
    pub value: Option<toml::Value>,
    /// Raw JSON for values TOML cannot spell (`null`).
    #[serde(default)]
    pub json: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub vnode_tag: Option<String>,
}

impl GateDef {
    pub fn config(&self) -> GateConfig {
        let defaults = GateConfig::default();
        GateConfig {
            blocked_schemes: self
                .blocked_schemes
                .as_ref()
                .map(|schemes| schemes.iter().map(|s| s.to_ascii_lowercase()).collect())
                .unwrap_or(defaults.blocked_schemes),
            url_properties: self
                .url_properties
                .clone()
                .unwrap_or(defaults.url_properties),
            reject_composite: self.reject_composite.unwrap_or(defaults.reject_composite),
        }
    }
}

impl ElementDef {
    pub fn build(&self) -> Element {
        let mut el = Element::new(self.tag.as_str());
        for attr in &self.attributes {
            el = match &attr.namespace {
                Some(ns) => el.with_attribute_ns(ns, &attr.name, &attr.value),
                None => el.with_attribute(&attr.name, &attr.value),
            };
        }
        for (name, value) in &self.properties {
            el = el.with_property(name, from_toml(value));
        }
        if let Some(text) = &self.text {
            el = el.with_text(text.as_str());
        }
        for child in &self.children {
            el = el.with_child(child.build());
        }
        el
    }
}

pub fn parse_mode(raw: &str) -> Result<WriteMode, ScenarioError> {
    match raw {
        "attributes" => Ok(WriteMode::Attributes),
        "properties" => Ok(WriteMode::Properties),
        other => Err(ScenarioError::UnknownMode {
            mode: other.to_string(),
        }),
    }
}

/// Integers become host Numbers, so magnitudes above 2^53 round to the nearest
/// representable double exactly as they would in the host.
pub fn from_toml(value: &toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s.clone()),
        toml::Value::Integer(i) => Value::Number(*i as f64),
        toml::Value::Float(f) => Value::Number(*f),
        toml::Value::Boolean(b) => Value::Bool(*b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.iter().map(from_toml).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .iter()
                .map(|(k, v)| (k.clone(), from_toml(v)))
                .collect(),
        ),
    }
}

pub fn from_json(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => Value::Array(items.iter().map(from_json).collect()),
        serde_json::Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), from_json(v)))
                .collect(),
        ),
    }
}
