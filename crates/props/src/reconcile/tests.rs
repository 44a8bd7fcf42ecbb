use super::*;
use crate::descriptor::PropertyDescriptor as D;
use crate::gate::gate_fn;
use crate::registry::{TableRegistry, XLINK_NAMESPACE};
use crate::test_utils::FlatElement;
use std::cell::RefCell;
use std::rc::Rc;

type CallLog = Rc<RefCell<Vec<(String, Value, WriteMode)>>>;

struct RecordingSetter {
    log: CallLog,
}

impl StyleSetter for RecordingSetter {
    fn apply(&self, vnode: &VirtualNode, _: &mut dyn HostElement, value: &Value, mode: WriteMode) {
        self.log
            .borrow_mut()
            .push((vnode.tag().to_string(), value.clone(), mode));
    }
}

impl SelectValueSetter for RecordingSetter {
    fn apply(&self, vnode: &VirtualNode, _: &mut dyn HostElement, value: &Value, mode: WriteMode) {
        self.log
            .borrow_mut()
            .push((vnode.tag().to_string(), value.clone(), mode));
    }
}

fn div() -> VirtualNode {
    VirtualNode::new("div")
}

const ATTR: WriteMode = WriteMode::Attributes;
const PROP: WriteMode = WriteMode::Properties;

#[test]
fn plain_attribute_round_trip() {
    let r = PropertyReconciler::new();
    let mut el = FlatElement::new("div");
    r.set_property(&div(), &mut el, "title", &Value::from("hello"), ATTR);
    assert_eq!(el.attr("title"), Some("hello"));
    r.remove_property(&div(), &mut el, "title", ATTR);
    assert_eq!(el.attr("title"), None);
}

#[test]
fn renamed_attribute_uses_attribute_name() {
    let r = PropertyReconciler::new();
    let mut el = FlatElement::new("label");
    r.set_property(&div(), &mut el, "htmlFor", &Value::from("x"), PROP);
    r.set_property(&div(), &mut el, "className", &Value::from("a b"), PROP);
    assert_eq!(el.attr("for"), Some("x"));
    assert_eq!(el.attr("class"), Some("a b"));
    r.remove_property(&div(), &mut el, "className", PROP);
    assert_eq!(el.attr("class"), None);
}

#[test]
fn boolean_attribute_true_uses_own_name() {
    let r = PropertyReconciler::new();
    let mut el = FlatElement::new("input");
    r.set_property(&div(), &mut el, "disabled", &Value::Bool(true), ATTR);
    assert_eq!(el.attr("disabled"), Some("disabled"));
    r.set_property(&div(), &mut el, "disabled", &Value::Bool(false), ATTR);
    assert_eq!(el.attr("disabled"), None);
}

#[test]
fn boolean_attribute_keeps_truthy_non_true_values() {
    let r = PropertyReconciler::new();
    let mut el = FlatElement::new("input");
    r.set_property(&div(), &mut el, "allowFullScreen", &Value::from("yes"), ATTR);
    assert_eq!(el.attr("allowfullscreen"), Some("yes"));
    r.set_property(&div(), &mut el, "hidden", &Value::from(0), ATTR);
    assert_eq!(el.attr("hidden"), None);
    assert_eq!(el.calls.last().map(String::as_str), Some("remove hidden"));
}

#[test]
fn boolean_property_modes() {
    let r = PropertyReconciler::new();
    let mut el = FlatElement::new("input");
    r.set_property(&div(), &mut el, "checked", &Value::Bool(true), PROP);
    assert_eq!(el.prop("checked"), Some(&Value::Bool(true)));
    r.set_property(&div(), &mut el, "checked", &Value::Bool(false), PROP);
    assert_eq!(el.prop("checked"), Some(&Value::Bool(false)));

    r.set_property(&div(), &mut el, "checked", &Value::Bool(true), ATTR);
    assert_eq!(el.attr("checked"), Some("checked"));
    r.remove_property(&div(), &mut el, "checked", ATTR);
    assert_eq!(el.attr("checked"), None);
}

#[test]
fn must_use_property_attribute_mode_writes_property_name() {
    let r = PropertyReconciler::new();
    let mut el = FlatElement::new("input");
    r.set_property(&div(), &mut el, "readOnly", &Value::Bool(true), ATTR);
    assert_eq!(el.attr("readOnly"), Some("readOnly"));
    r.set_property(&div(), &mut el, "value", &Value::from(5), ATTR);
    assert_eq!(el.attr("value"), Some("5"));
}

#[test]
fn namespaced_attribute_uses_ns_form() {
    let r = PropertyReconciler::new();
    let mut el = FlatElement::new("use");
    r.set_property(&div(), &mut el, "xlinkHref", &Value::from("#icon"), ATTR);
    assert_eq!(
        el.calls,
        vec![format!("attr-ns {XLINK_NAMESPACE} xlink:href=#icon")]
    );
    r.remove_property(&div(), &mut el, "xlinkHref", ATTR);
    assert_eq!(el.calls.last().map(String::as_str), Some("remove xlink:href"));
    assert!(el.attributes.is_empty());
}

#[test]
fn positive_numeric_floor_removes() {
    let r = PropertyReconciler::new();
    let mut el = FlatElement::new("input");
    r.set_property(&div(), &mut el, "size", &Value::from(3), ATTR);
    assert_eq!(el.attr("size"), Some("3"));
    r.set_property(&div(), &mut el, "size", &Value::from(0), ATTR);
    assert_eq!(el.attr("size"), None);
    r.set_property(&div(), &mut el, "size", &Value::from("0.5"), ATTR);
    assert_eq!(el.attr("size"), None);
    assert_eq!(el.calls.last().map(String::as_str), Some("remove size"));
}

#[test]
fn numeric_nan_removes() {
    let r = PropertyReconciler::new();
    let mut el = FlatElement::new("ol");
    r.set_property(&div(), &mut el, "start", &Value::from(-2), ATTR);
    assert_eq!(el.attr("start"), Some("-2"));
    r.set_property(&div(), &mut el, "start", &Value::Number(f64::NAN), ATTR);
    assert_eq!(el.attr("start"), None);
}

#[test]
fn empty_string_and_empty_array_are_absent() {
    let r = PropertyReconciler::new();
    let mut el = FlatElement::new("div");
    r.set_property(&div(), &mut el, "title", &Value::from("x"), ATTR);
    r.set_property(&div(), &mut el, "title", &Value::from(""), ATTR);
    assert_eq!(el.attr("title"), None);

    r.set_property(&div(), &mut el, "title", &Value::from("x"), ATTR);
    r.set_property(&div(), &mut el, "title", &Value::Array(Vec::new()), ATTR);
    assert_eq!(el.attr("title"), None);
}

#[test]
fn array_like_with_zero_length_is_absent() {
    let r = PropertyReconciler::new();
    let mut el = FlatElement::new("div");
    let empty_like = Value::Object(vec![("length".to_string(), Value::from(0))]);
    r.set_property(&div(), &mut el, "title", &Value::from("x"), ATTR);
    r.set_property(&div(), &mut el, "title", &empty_like, ATTR);
    assert_eq!(el.attr("title"), None);

    let sized_like = Value::Object(vec![("length".to_string(), Value::from(2))]);
    r.set_property(&div(), &mut el, "title", &sized_like, ATTR);
    assert_eq!(el.attr("title"), Some("[object Object]"));
}

#[test]
fn is_absent_rules() {
    let plain = D::attribute("title");
    let boolean = D::attribute("hidden").boolean();
    let positive = D::attribute("size").positive_numeric();
    assert!(is_absent(&plain, &Value::Null));
    assert!(is_absent(&plain, &Value::Undefined));
    assert!(!is_absent(&plain, &Value::Bool(false)));
    assert!(!is_absent(&plain, &Value::from(0)));
    assert!(is_absent(&boolean, &Value::from("")));
    assert!(!is_absent(&boolean, &Value::from("false")));
    assert!(is_absent(&positive, &Value::Bool(false)));
    assert!(!is_absent(&positive, &Value::from("abc")));
    assert!(is_absent(&positive, &Value::Number(f64::NAN)));
}

#[test]
fn plain_property_reset_skips_empty_values() {
    let r = PropertyReconciler::new();
    let mut el = FlatElement::new("input");
    r.set_property(&div(), &mut el, "value", &Value::from("abc"), PROP);
    r.remove_property(&div(), &mut el, "value", PROP);
    assert_eq!(el.prop("value"), Some(&Value::from("")));
    let writes = el.calls.len();
    r.remove_property(&div(), &mut el, "value", PROP);
    assert_eq!(el.calls.len(), writes);
}

#[test]
fn unset_plain_property_reads_as_undefined_and_is_reset() {
    let r = PropertyReconciler::new();
    let mut el = FlatElement::new("input");
    r.remove_property(&div(), &mut el, "value", PROP);
    assert_eq!(el.calls, vec![r#"prop value="""#]);
}

#[test]
fn style_is_delegated_once() {
    let log = CallLog::default();
    let r = PropertyReconciler::new().with_style_setter(RecordingSetter { log: log.clone() });
    let mut el = FlatElement::new("div");
    let style = Value::Object(vec![("color".to_string(), Value::from("red"))]);
    r.set_property(&div(), &mut el, "style", &style, PROP);
    assert_eq!(*log.borrow(), vec![("div".to_string(), style, PROP)]);
    assert!(el.calls.is_empty());
}

#[test]
fn style_removal_removes_attribute_in_both_modes() {
    let r = PropertyReconciler::new();
    for mode in [ATTR, PROP] {
        let mut el = FlatElement::new("div");
        el.set_attribute("style", "color: red;");
        r.set_property(&div(), &mut el, "style", &Value::Null, mode);
        assert_eq!(el.attr("style"), None, "{mode:?}");
    }
}

#[test]
fn select_value_is_delegated() {
    let log = CallLog::default();
    let r = PropertyReconciler::new().with_select_setter(RecordingSetter { log: log.clone() });
    let mut el = FlatElement::new("select");
    let vnode = VirtualNode::new("select");
    r.set_property(&vnode, &mut el, "value", &Value::from("opt2"), PROP);
    assert_eq!(
        *log.borrow(),
        vec![("select".to_string(), Value::from("opt2"), PROP)]
    );
    assert!(el.calls.is_empty());

    // Only the vnode tag decides.
    let mut input = FlatElement::new("select");
    r.set_property(&div(), &mut input, "value", &Value::from("x"), PROP);
    assert_eq!(log.borrow().len(), 1);
    assert_eq!(input.prop("value"), Some(&Value::from("x")));
}

#[test]
fn gate_veto_is_silent() {
    let r = PropertyReconciler::new().with_gate(gate_fn(|_, _, _, _| false));
    let mut el = FlatElement::new("input");
    r.set_property(&div(), &mut el, "value", &Value::from("x"), PROP);
    r.set_property(&div(), &mut el, "value", &Value::from("x"), ATTR);
    assert!(el.calls.is_empty());
}

#[test]
fn gate_sees_descriptor_and_property_name() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_in_gate = seen.clone();
    let r = PropertyReconciler::new().with_gate(gate_fn(move |el, d, name, value| {
        seen_in_gate.borrow_mut().push(format!(
            "{} {} {name} {value}",
            el.tag_name(),
            d.attribute_name
        ));
        true
    }));
    let mut el = FlatElement::new("a");
    r.set_property(&div(), &mut el, "href", &Value::from("/x"), PROP);
    // Attribute-backed properties never reach the gate.
    r.set_property(&div(), &mut el, "title", &Value::from("t"), PROP);
    assert_eq!(*seen.borrow(), vec![r#"a href href "/x""#.to_string()]);
}

#[test]
fn default_gate_blocks_javascript_urls() {
    let r = PropertyReconciler::new();
    let mut el = FlatElement::new("a");
    r.set_property(&div(), &mut el, "href", &Value::from("javascript:alert(1)"), PROP);
    r.set_property(&div(), &mut el, "href", &Value::from("javascript:alert(1)"), ATTR);
    assert!(el.calls.is_empty());
    r.set_property(&div(), &mut el, "href", &Value::from("/ok"), ATTR);
    assert_eq!(el.attr("href"), Some("/ok"));
}

#[test]
fn custom_attributes() {
    let r = PropertyReconciler::new();
    let mut el = FlatElement::new("div");
    r.set_property(&div(), &mut el, "data-MyFlag", &Value::from("1"), ATTR);
    r.set_property(&div(), &mut el, "aria-Label", &Value::from("x"), ATTR);
    r.set_property(&div(), &mut el, "customThing", &Value::Bool(false), ATTR);
    assert_eq!(el.attr("data-myflag"), Some("1"));
    assert_eq!(el.attr("aria-label"), Some("x"));
    assert_eq!(el.attr("customThing"), Some("false"));

    r.set_property(&div(), &mut el, "customThing", &Value::Null, ATTR);
    assert_eq!(el.attr("customThing"), None);
}

#[test]
fn short_unknown_names_are_ignored_on_set_only() {
    let r = PropertyReconciler::new();
    let mut el = FlatElement::new("div");
    r.set_property(&div(), &mut el, "ab", &Value::from("x"), ATTR);
    r.set_property(&div(), &mut el, "ab", &Value::Null, ATTR);
    assert!(el.calls.is_empty());
    r.remove_property(&div(), &mut el, "ab", ATTR);
    assert_eq!(el.calls, vec!["remove ab"]);
}

#[test]
fn unknown_removal_keeps_case() {
    let r = PropertyReconciler::new();
    let mut el = FlatElement::new("div");
    r.remove_property(&div(), &mut el, "data-MyFlag", PROP);
    assert_eq!(el.calls, vec!["remove data-MyFlag"]);
}

#[test]
fn removal_is_idempotent() {
    let r = PropertyReconciler::new();
    for (name, mode) in [
        ("title", ATTR),
        ("checked", PROP),
        ("checked", ATTR),
        ("value", PROP),
        ("style", PROP),
        ("custom-x", ATTR),
    ] {
        let mut once = FlatElement::new("input");
        once.set_attribute("title", "t");
        let mut twice = FlatElement::new("input");
        twice.set_attribute("title", "t");
        r.remove_property(&div(), &mut once, name, mode);
        r.remove_property(&div(), &mut twice, name, mode);
        r.remove_property(&div(), &mut twice, name, mode);
        assert_eq!(once.attributes, twice.attributes, "{name} {mode:?}");
        assert_eq!(once.properties, twice.properties, "{name} {mode:?}");
    }
}

#[test]
fn custom_registry_replaces_the_standard_table() {
    let registry = TableRegistry::new([("label", D::attribute("label").named("aria-label"))]).unwrap();
    let r = PropertyReconciler::new().with_registry(registry);
    let mut el = FlatElement::new("button");
    r.set_property(&div(), &mut el, "label", &Value::from("Go"), ATTR);
    r.set_property(&div(), &mut el, "title", &Value::from("t"), ATTR);
    assert_eq!(el.attr("aria-label"), Some("Go"));
    // "title" is now an unknown, free-form name.
    assert_eq!(el.attr("title"), Some("t"));
    assert!(r.registry().lookup("className").is_none());
}

#[test]
fn write_mode_from_flag() {
    assert_eq!(WriteMode::from(true), PROP);
    assert_eq!(WriteMode::from(false), ATTR);
    assert!(PROP.uses_properties());
}
