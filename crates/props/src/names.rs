//! Attribute-name classifiers for the data-/aria- families.

pub trait NameClassifier {
    fn is_data_attribute(&self, name: &str) -> bool;
    fn is_aria_attribute(&self, name: &str) -> bool;
}

/// Pattern-based classifier.
///
/// `data-` (any case) followed by a letter or `_`, then letters, digits,
/// `_`, `.`, `-` or `:`. `aria-` followed by letters only.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardNames;

impl NameClassifier for StandardNames {
    fn is_data_attribute(&self, name: &str) -> bool {
        let Some(rest) = strip_prefix_ignore_ascii_case(name, "data-") else {
            return false;
        };
        let mut bytes = rest.bytes();
        match bytes.next() {
            Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
            _ => return false,
        }
        bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-' | b':'))
    }

    fn is_aria_attribute(&self, name: &str) -> bool {
        let Some(rest) = strip_prefix_ignore_ascii_case(name, "aria-") else {
            return false;
        };
        !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_alphabetic())
    }
}

fn strip_prefix_ignore_ascii_case<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    let head = name.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&name[prefix.len()..])
    } else {
        None
    }
}
