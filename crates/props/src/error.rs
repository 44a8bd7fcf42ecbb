use std::fmt;

/// Rejected registry entry. Descriptor consistency is checked once, when a
/// registry is built, so the reconciler never has to defend against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    EmptyName,
    EmptyAttributeName(&'static str),
    DuplicateName(&'static str),
    /// Namespaces only apply to the attribute write path.
    NamespaceOnProperty(&'static str),
    /// Object-valued properties carry no boolean/numeric semantics.
    ObjectWithValueKind(&'static str),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "registry entry has an empty name"),
            Self::EmptyAttributeName(name) => {
                write!(f, "property `{name}` has an empty attribute name")
            }
            Self::DuplicateName(name) => write!(f, "property `{name}` is registered twice"),
            Self::NamespaceOnProperty(name) => {
                write!(f, "property `{name}` has a namespace but is not attribute-backed")
            }
            Self::ObjectWithValueKind(name) => {
                write!(f, "object property `{name}` cannot have boolean or numeric semantics")
            }
        }
    }
}

impl std::error::Error for RegistryError {}
