//! Static metadata describing how a logical property maps onto host writes.

/// Value semantics of a property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Plain,
    /// Presence of the attribute means `true`, absence means `false`.
    Boolean,
    /// NaN means "absent".
    Numeric,
    /// Numeric, and anything below 1 means "absent".
    PositiveNumeric,
}

/// Which host surface a property is written through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WritePath {
    /// Markup attribute named by `attribute_name`.
    Attribute,
    /// Object property named by `property_name` (attribute of the same name in
    /// attribute mode).
    Property,
    /// Composite value handled by a dedicated setter. Implies `Property`.
    Object,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub property_name: &'static str,
    pub attribute_name: &'static str,
    pub attribute_namespace: Option<&'static str>,
    pub kind: ValueKind,
    pub path: WritePath,
}

impl PropertyDescriptor {
    /// A plain attribute whose property and attribute names coincide.
    pub const fn attribute(name: &'static str) -> Self {
        Self {
            property_name: name,
            attribute_name: name,
            attribute_namespace: None,
            kind: ValueKind::Plain,
            path: WritePath::Attribute,
        }
    }

    pub const fn property(name: &'static str) -> Self {
        Self {
            path: WritePath::Property,
            ..Self::attribute(name)
        }
    }

    pub const fn object(name: &'static str) -> Self {
        Self {
            path: WritePath::Object,
            ..Self::attribute(name)
        }
    }

    pub const fn named(self, attribute_name: &'static str) -> Self {
        Self {
            attribute_name,
            ..self
        }
    }

    pub const fn namespaced(self, namespace: &'static str) -> Self {
        Self {
            attribute_namespace: Some(namespace),
            ..self
        }
    }

    pub const fn boolean(self) -> Self {
        Self {
            kind: ValueKind::Boolean,
            ..self
        }
    }

    pub const fn numeric(self) -> Self {
        Self {
            kind: ValueKind::Numeric,
            ..self
        }
    }

    pub const fn positive_numeric(self) -> Self {
        Self {
            kind: ValueKind::PositiveNumeric,
            ..self
        }
    }

    pub fn has_boolean_value(&self) -> bool {
        self.kind == ValueKind::Boolean
    }

    pub fn has_numeric_value(&self) -> bool {
        matches!(self.kind, ValueKind::Numeric | ValueKind::PositiveNumeric)
    }

    pub fn has_positive_numeric_value(&self) -> bool {
        self.kind == ValueKind::PositiveNumeric
    }

    pub fn must_use_property(&self) -> bool {
        matches!(self.path, WritePath::Property | WritePath::Object)
    }

    pub fn must_use_object(&self) -> bool {
        self.path == WritePath::Object
    }
}
