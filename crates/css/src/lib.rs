pub mod names;
pub mod syntax;
pub mod units;

// Re-exports so other crates can just use `css::...` nicely.
pub use names::hyphenate_style_name;
pub use syntax::{Declaration, parse_declarations, serialize_declarations};
pub use units::{is_unitless_number, format_number_value};
