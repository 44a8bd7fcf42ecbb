#![no_main]

use dom::{Element, Snapshot, SnapshotOptions};
use libfuzzer_sys::fuzz_target;
use props::{PropertyReconciler, Value, VirtualNode, WriteMode};

const NAMES: &[&str] = &[
    "className", "title", "disabled", "hidden", "checked", "value", "style", "rows", "start",
    "href", "src", "xlinkHref", "xmlLang", "data-Flag", "aria-Label", "fooBar", "ab", "x",
];
const TAGS: &[&str] = &["div", "input", "select", "a", "svg"];
const STRINGS: &[&str] = &["", "a", "0", "javascript:x", " /rel ", "color: red; width: 1px"];

struct Bytes<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Bytes<'_> {
    fn next(&mut self) -> Option<u8> {
        let b = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    fn pick<'t>(&mut self, items: &'t [&'t str]) -> Option<&'t str> {
        let b = self.next()?;
        Some(items[b as usize % items.len()])
    }

    fn value(&mut self, depth: u8) -> Option<Value> {
        let kind = self.next()?;
        Some(match kind % 9 {
            0 => Value::Undefined,
            1 => Value::Null,
            2 => Value::Bool(kind & 0x10 != 0),
            3 => Value::Number(f64::from(self.next()?) / 4.0 - 8.0),
            4 => Value::Number(f64::NAN),
            5 => Value::from(self.pick(STRINGS)?),
            6 if depth < 2 => {
                let len = self.next()? % 4;
                let mut items = Vec::new();
                for _ in 0..len {
                    items.push(self.value(depth + 1)?);
                }
                Value::Array(items)
            }
            7 if depth < 2 => {
                let key = self.pick(&["color", "fontSize", "zIndex", "--gap", "WebkitFlex"])?;
                Value::Object(vec![(key.to_string(), self.value(depth + 1)?)])
            }
            _ => Value::from(self.pick(NAMES)?),
        })
    }
}

fn snapshot(el: &Element) -> Vec<String> {
    Snapshot::new(el, SnapshotOptions::default()).into_lines()
}

fuzz_target!(|data: &[u8]| {
    let mut bytes = Bytes { data, pos: 0 };
    let Some(tag) = bytes.pick(TAGS) else {
        return;
    };
    let reconciler = PropertyReconciler::new();
    let vnode = VirtualNode::new(tag);
    let mut el = Element::new(tag)
        .with_child(Element::new("option").with_attribute("value", "a"))
        .with_child(Element::new("option").with_text("b"));

    while let (Some(op), Some(name)) = (bytes.next(), bytes.pick(NAMES)) {
        let mode = WriteMode::from(op & 1 == 1);
        if op & 2 == 0 {
            let Some(value) = bytes.value(0) else {
                break;
            };
            reconciler.set_property(&vnode, &mut el, name, &value, mode);
        } else {
            reconciler.remove_property(&vnode, &mut el, name, mode);
            let once = snapshot(&el);
            reconciler.remove_property(&vnode, &mut el, name, mode);
            assert_eq!(once, snapshot(&el), "removal of {name} is not idempotent");
        }
    }
});
