// A single CSS property: "color: red"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

// input: "color: red; font-size: 12px;"
// output: vec![Declaration { name: "color", value: "red" }, Declaration { name: "font-size", value: "12px" }]
//
// Later declarations of the same property replace earlier ones in place, the
// way an inline style attribute is read into a declaration block.
pub fn parse_declarations(input: &str) -> Vec<Declaration> {
    let mut out: Vec<Declaration> = Vec::new();
    for pair in input.split(';') {
        let Some((n, v)) = pair.split_once(':') else {
            continue;
        };
        let name = normalize_property_name(n.trim());
        if name.is_empty() {
            continue;
        }
        let value = v.trim();
        if value.is_empty() {
            continue;
        }
        match out.iter_mut().find(|d| d.name == name) {
            Some(existing) => existing.value = value.to_string(),
            None => out.push(Declaration {
                name,
                value: value.to_string(),
            }),
        }
    }
    out
}

// input: [("color", "red"), ("font-size", "12px")]
// output: "color: red; font-size: 12px;"
pub fn serialize_declarations<'a, I>(declarations: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::new();
    for (name, value) in declarations {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(name);
        out.push_str(": ");
        out.push_str(value);
        out.push(';');
    }
    out
}

// Custom properties ("--brand-color") are case-sensitive; everything else is not.
fn normalize_property_name(name: &str) -> String {
    if name.starts_with("--") {
        name.to_string()
    } else {
        name.to_ascii_lowercase()
    }
}
