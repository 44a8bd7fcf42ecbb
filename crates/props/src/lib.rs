//! Property/attribute reconciliation for DOM-like elements.
//!
//! [`PropertyReconciler`] turns `(name, value)` pairs from a virtual tree into
//! host mutations: object-property assignment, (namespaced) attribute writes,
//! boolean attribute presence, or delegation to the style/select setters. The
//! [`PropertyRegistry`] decides which path a name takes.
//!
//! Notes:
//! - The reconciler keeps no state; the same inputs always produce the same
//!   mutation.
//! - Invalid values never fail: they are removed, ignored, or vetoed by the
//!   [`SanitizationGate`].

pub mod descriptor;
pub mod gate;
pub mod host;
pub mod names;
pub mod reconcile;
pub mod registry;
pub mod select;
pub mod style;
pub mod value;

mod error;
#[cfg(test)]
mod test_utils;

pub use crate::descriptor::{PropertyDescriptor, ValueKind, WritePath};
pub use crate::error::RegistryError;
pub use crate::gate::{GateConfig, SanitizationGate, UrlSchemeGate, gate_fn};
pub use crate::host::{HostElement, VirtualNode, WriteMode};
pub use crate::names::{NameClassifier, StandardNames};
pub use crate::reconcile::{PropertyReconciler, is_absent};
pub use crate::registry::{HtmlRegistry, PropertyRegistry, TableRegistry};
pub use crate::select::{OptionSelectSetter, SelectValueSetter};
pub use crate::style::{InlineStyleSetter, StyleSetter};
pub use crate::value::Value;
