//! Host mutation journal.
//!
//! Invariants:
//! - One entry per boundary call, in call order, including calls that turn
//!   out to be no-ops (removing an absent attribute).
//! - Reflection between the `style` attribute and the style declarations is
//!   internal to the element and is not journaled.
//! - Mutations of child elements are journaled on the child.

use props::Value;
use std::fmt;

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    SetProperty {
        name: String,
        value: Value,
    },
    SetAttribute {
        name: String,
        value: String,
    },
    SetAttributeNs {
        namespace: String,
        name: String,
        value: String,
    },
    RemoveAttribute {
        name: String,
    },
    SetStyle {
        name: String,
        value: String,
    },
    RemoveStyle {
        name: String,
    },
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::SetProperty { name, value } => write!(f, "set-property {name} = {value}"),
            Mutation::SetAttribute { name, value } => write!(f, "set-attribute {name}={value:?}"),
            Mutation::SetAttributeNs {
                namespace,
                name,
                value,
            } => write!(f, "set-attribute-ns {{{namespace}}} {name}={value:?}"),
            Mutation::RemoveAttribute { name } => write!(f, "remove-attribute {name}"),
            Mutation::SetStyle { name, value } => write!(f, "set-style {name}: {value}"),
            Mutation::RemoveStyle { name } => write!(f, "remove-style {name}"),
        }
    }
}
