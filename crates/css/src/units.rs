/// Properties that accept a bare number, keyed by their hyphenated name.
/// Everything else gets a `px` suffix when a number is assigned.
const UNITLESS_PROPERTIES: &[&str] = &[
    "animation-iteration-count",
    "aspect-ratio",
    "border-image-outset",
    "border-image-slice",
    "border-image-width",
    "box-flex",
    "box-flex-group",
    "box-ordinal-group",
    "column-count",
    "columns",
    "fill-opacity",
    "flex",
    "flex-grow",
    "flex-negative",
    "flex-order",
    "flex-positive",
    "flex-shrink",
    "flood-opacity",
    "font-weight",
    "grid-area",
    "grid-column",
    "grid-column-end",
    "grid-column-start",
    "grid-row",
    "grid-row-end",
    "grid-row-start",
    "line-clamp",
    "line-height",
    "opacity",
    "order",
    "orphans",
    "stop-opacity",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-miterlimit",
    "stroke-opacity",
    "stroke-width",
    "tab-size",
    "widows",
    "z-index",
    "zoom",
];

/// Whether `name` (hyphenated, vendor prefix allowed) takes unitless numbers.
pub fn is_unitless_number(name: &str) -> bool {
    if name.starts_with("--") {
        return true;
    }
    let unprefixed = strip_vendor_prefix(name);
    UNITLESS_PROPERTIES.contains(&unprefixed)
}

// input: ("width", "10"), ("opacity", "0.5"), ("margin", "0")
// output: "10px", "0.5", "0"
pub fn format_number_value(name: &str, number: &str) -> String {
    if number == "0" || is_unitless_number(name) {
        number.to_string()
    } else {
        format!("{number}px")
    }
}

fn strip_vendor_prefix(name: &str) -> &str {
    for prefix in ["-webkit-", "-moz-", "-ms-", "-o-"] {
        if let Some(rest) = name.strip_prefix(prefix) {
            return rest;
        }
    }
    name
}
