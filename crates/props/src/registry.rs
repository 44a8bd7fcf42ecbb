//! Property registries: logical property name -> [`PropertyDescriptor`].

use crate::descriptor::{PropertyDescriptor as D, ValueKind, WritePath};
use crate::error::RegistryError;
use std::collections::HashMap;
use std::sync::OnceLock;

pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

pub trait PropertyRegistry {
    fn lookup(&self, name: &str) -> Option<&D>;
}

/// Registry built from caller-provided entries, validated on construction.
#[derive(Clone, Debug, Default)]
pub struct TableRegistry {
    entries: HashMap<&'static str, D>,
}

impl TableRegistry {
    pub fn new<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (&'static str, D)>,
    {
        let iter = entries.into_iter();
        let mut map = HashMap::with_capacity(iter.size_hint().0);
        for (name, descriptor) in iter {
            validate(name, &descriptor)?;
            if map.insert(name, descriptor).is_some() {
                return Err(RegistryError::DuplicateName(name));
            }
        }
        Ok(Self { entries: map })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

impl PropertyRegistry for TableRegistry {
    fn lookup(&self, name: &str) -> Option<&D> {
        self.entries.get(name)
    }
}

fn validate(name: &'static str, d: &D) -> Result<(), RegistryError> {
    if name.is_empty() {
        return Err(RegistryError::EmptyName);
    }
    if d.attribute_name.is_empty() || d.property_name.is_empty() {
        return Err(RegistryError::EmptyAttributeName(name));
    }
    if d.attribute_namespace.is_some() && d.path != WritePath::Attribute {
        return Err(RegistryError::NamespaceOnProperty(name));
    }
    if d.path == WritePath::Object && d.kind != ValueKind::Plain {
        return Err(RegistryError::ObjectWithValueKind(name));
    }
    Ok(())
}

/// The standard HTML/SVG property table.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlRegistry;

impl HtmlRegistry {
    pub fn table() -> &'static TableRegistry {
        static TABLE: OnceLock<TableRegistry> = OnceLock::new();
        TABLE.get_or_init(|| {
            let mut entries = HashMap::with_capacity(HTML_PROPERTIES.len());
            for &(name, descriptor) in HTML_PROPERTIES {
                debug_assert!(validate(name, &descriptor).is_ok(), "bad entry {name}");
                let prev = entries.insert(name, descriptor);
                debug_assert!(prev.is_none(), "duplicate entry {name}");
            }
            TableRegistry { entries }
        })
    }

    pub fn entries() -> &'static [(&'static str, D)] {
        HTML_PROPERTIES
    }
}

impl PropertyRegistry for HtmlRegistry {
    fn lookup(&self, name: &str) -> Option<&D> {
        Self::table().lookup(name)
    }
}

// Form-control state (`checked`, `value`, ...) and URL-bearing properties go
// through the property path; everything else is attribute-backed.
const HTML_PROPERTIES: &[(&str, D)] = &[
    // Global and document attributes.
    ("accessKey", D::attribute("accessKey").named("accesskey")),
    ("className", D::attribute("className").named("class")),
    ("contentEditable", D::attribute("contentEditable").named("contenteditable")),
    ("contextMenu", D::attribute("contextMenu").named("contextmenu")),
    ("dir", D::attribute("dir")),
    ("draggable", D::attribute("draggable")),
    ("hidden", D::attribute("hidden").boolean()),
    ("id", D::attribute("id")),
    ("lang", D::attribute("lang")),
    ("role", D::attribute("role")),
    ("spellCheck", D::attribute("spellCheck").named("spellcheck")),
    ("style", D::object("style")),
    ("tabIndex", D::attribute("tabIndex").named("tabindex")),
    ("title", D::attribute("title")),
    ("translate", D::attribute("translate")),
    // Links and embedded content.
    ("charSet", D::attribute("charSet").named("charset")),
    ("content", D::attribute("content")),
    ("crossOrigin", D::attribute("crossOrigin").named("crossorigin")),
    ("download", D::attribute("download")),
    ("href", D::property("href")),
    ("hrefLang", D::attribute("hrefLang").named("hreflang")),
    ("httpEquiv", D::attribute("httpEquiv").named("http-equiv")),
    ("integrity", D::attribute("integrity")),
    ("media", D::attribute("media")),
    ("rel", D::attribute("rel")),
    ("sizes", D::attribute("sizes")),
    ("src", D::property("src")),
    ("srcDoc", D::attribute("srcDoc").named("srcdoc")),
    ("srcSet", D::attribute("srcSet").named("srcset")),
    ("target", D::attribute("target")),
    ("type", D::attribute("type")),
    ("useMap", D::attribute("useMap").named("usemap")),
    // Media.
    ("allowFullScreen", D::attribute("allowFullScreen").named("allowfullscreen").boolean()),
    ("alt", D::attribute("alt")),
    ("async", D::attribute("async").boolean()),
    ("autoPlay", D::attribute("autoPlay").named("autoplay").boolean()),
    ("controls", D::property("controls").boolean()),
    ("defer", D::attribute("defer").boolean()),
    ("height", D::attribute("height")),
    ("loop", D::property("loop").boolean()),
    ("muted", D::property("muted").boolean()),
    ("poster", D::attribute("poster")),
    ("preload", D::attribute("preload")),
    ("width", D::attribute("width")),
    // Forms.
    ("accept", D::attribute("accept")),
    ("acceptCharset", D::attribute("acceptCharset").named("accept-charset")),
    ("action", D::property("action")),
    ("autoComplete", D::attribute("autoComplete").named("autocomplete")),
    ("autoFocus", D::attribute("autoFocus").named("autofocus").boolean()),
    ("checked", D::property("checked").boolean()),
    ("cols", D::attribute("cols").positive_numeric()),
    ("disabled", D::attribute("disabled").boolean()),
    ("encType", D::attribute("encType").named("enctype")),
    ("form", D::attribute("form")),
    ("formAction", D::attribute("formAction").named("formaction")),
    ("formNoValidate", D::attribute("formNoValidate").named("formnovalidate").boolean()),
    ("htmlFor", D::attribute("htmlFor").named("for")),
    ("label", D::attribute("label")),
    ("list", D::attribute("list")),
    ("max", D::attribute("max")),
    ("maxLength", D::attribute("maxLength").named("maxlength")),
    ("method", D::attribute("method")),
    ("min", D::attribute("min")),
    ("minLength", D::attribute("minLength").named("minlength")),
    ("multiple", D::property("multiple").boolean()),
    ("name", D::attribute("name")),
    ("noValidate", D::attribute("noValidate").named("novalidate").boolean()),
    ("open", D::attribute("open").boolean()),
    ("pattern", D::attribute("pattern")),
    ("placeholder", D::attribute("placeholder")),
    ("readOnly", D::property("readOnly").boolean()),
    ("required", D::attribute("required").boolean()),
    ("rows", D::attribute("rows").positive_numeric()),
    ("selected", D::property("selected").boolean()),
    ("size", D::attribute("size").positive_numeric()),
    ("start", D::attribute("start").numeric()),
    ("step", D::attribute("step")),
    ("value", D::property("value")),
    ("wrap", D::attribute("wrap")),
    // Tables.
    ("cellPadding", D::attribute("cellPadding").named("cellpadding")),
    ("cellSpacing", D::attribute("cellSpacing").named("cellspacing")),
    ("colSpan", D::attribute("colSpan").named("colspan")),
    ("headers", D::attribute("headers")),
    ("rowSpan", D::attribute("rowSpan").named("rowspan")),
    ("scope", D::attribute("scope")),
    ("span", D::attribute("span").positive_numeric()),
    ("summary", D::attribute("summary")),
    // SVG presentation attributes.
    ("clipPath", D::attribute("clipPath").named("clip-path")),
    ("fillOpacity", D::attribute("fillOpacity").named("fill-opacity")),
    ("fontFamily", D::attribute("fontFamily").named("font-family")),
    ("fontSize", D::attribute("fontSize").named("font-size")),
    ("markerEnd", D::attribute("markerEnd").named("marker-end")),
    ("markerStart", D::attribute("markerStart").named("marker-start")),
    ("preserveAspectRatio", D::attribute("preserveAspectRatio")),
    ("stopColor", D::attribute("stopColor").named("stop-color")),
    ("stopOpacity", D::attribute("stopOpacity").named("stop-opacity")),
    ("strokeDasharray", D::attribute("strokeDasharray").named("stroke-dasharray")),
    ("strokeLinecap", D::attribute("strokeLinecap").named("stroke-linecap")),
    ("strokeOpacity", D::attribute("strokeOpacity").named("stroke-opacity")),
    ("strokeWidth", D::attribute("strokeWidth").named("stroke-width")),
    ("textAnchor", D::attribute("textAnchor").named("text-anchor")),
    ("viewBox", D::attribute("viewBox")),
    // Namespaced SVG attributes.
    ("xlinkActuate", D::attribute("xlinkActuate").named("xlink:actuate").namespaced(XLINK_NAMESPACE)),
    ("xlinkArcrole", D::attribute("xlinkArcrole").named("xlink:arcrole").namespaced(XLINK_NAMESPACE)),
    ("xlinkHref", D::attribute("xlinkHref").named("xlink:href").namespaced(XLINK_NAMESPACE)),
    ("xlinkRole", D::attribute("xlinkRole").named("xlink:role").namespaced(XLINK_NAMESPACE)),
    ("xlinkShow", D::attribute("xlinkShow").named("xlink:show").namespaced(XLINK_NAMESPACE)),
    ("xlinkTitle", D::attribute("xlinkTitle").named("xlink:title").namespaced(XLINK_NAMESPACE)),
    ("xlinkType", D::attribute("xlinkType").named("xlink:type").namespaced(XLINK_NAMESPACE)),
    ("xmlBase", D::attribute("xmlBase").named("xml:base").namespaced(XML_NAMESPACE)),
    ("xmlLang", D::attribute("xmlLang").named("xml:lang").namespaced(XML_NAMESPACE)),
    ("xmlSpace", D::attribute("xmlSpace").named("xml:space").namespaced(XML_NAMESPACE)),
];
