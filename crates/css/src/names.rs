/// Convert a style-object key into its CSS property name.
///
/// `fontSize` becomes `font-size`, vendor prefixes gain a leading dash
/// (`WebkitTransition` / `msTransition` become `-webkit-transition` /
/// `-ms-transition`). Names that already contain a dash and custom properties
/// (`--x`) are returned unchanged apart from ASCII lower-casing of non-custom
/// names.
pub fn hyphenate_style_name(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }
    if name.contains('-') {
        return name.to_ascii_lowercase();
    }

    let mut out = String::with_capacity(name.len() + 4);
    if name.starts_with("ms") && name[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        out.push('-');
    }
    // A leading capital is a vendor prefix ("Webkit", "Moz", "O") and gets the same dash.
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
