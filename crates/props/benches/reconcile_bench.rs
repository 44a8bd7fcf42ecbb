use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use dom::Element;
use props::{PropertyReconciler, Value, VirtualNode, WriteMode};

const OPTION_COUNT: usize = 512;

fn mixed_props() -> Vec<(&'static str, Value)> {
    vec![
        ("className", Value::from("card active")),
        ("title", Value::from("Details")),
        ("disabled", Value::Bool(true)),
        ("rows", Value::Number(4.0)),
        ("data-TrackId", Value::from("x-42")),
        ("xlinkHref", Value::from("#icon")),
        ("href", Value::from("/docs")),
        ("value", Value::from("typed")),
        ("checked", Value::Bool(false)),
        ("hidden", Value::Null),
    ]
}

fn make_select(options: usize) -> Element {
    (0..options).fold(Element::new("select"), |select, i| {
        select.with_child(Element::new("option").with_attribute("value", &i.to_string()))
    })
}

fn bench_set_mixed_attributes(c: &mut Criterion) {
    let reconciler = PropertyReconciler::new();
    let props = mixed_props();
    let vnode = VirtualNode::new("input");
    c.bench_function("bench_set_mixed_attributes", |b| {
        b.iter_batched(
            || Element::new("input"),
            |mut el| {
                for (name, value) in &props {
                    reconciler.set_property(&vnode, &mut el, name, value, WriteMode::Attributes);
                }
                black_box(el.journal().len());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_set_mixed_properties(c: &mut Criterion) {
    let reconciler = PropertyReconciler::new();
    let props = mixed_props();
    let vnode = VirtualNode::new("input");
    c.bench_function("bench_set_mixed_properties", |b| {
        b.iter_batched(
            || Element::new("input"),
            |mut el| {
                for (name, value) in &props {
                    reconciler.set_property(&vnode, &mut el, name, value, WriteMode::Properties);
                }
                black_box(el.journal().len());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_style_object(c: &mut Criterion) {
    let reconciler = PropertyReconciler::new();
    let vnode = VirtualNode::new("div");
    let style = Value::Object(vec![
        ("color".to_string(), Value::from("red")),
        ("fontSize".to_string(), Value::Number(12.0)),
        ("lineHeight".to_string(), Value::Number(1.5)),
        ("marginTop".to_string(), Value::Number(0.0)),
        ("WebkitTransform".to_string(), Value::from("none")),
    ]);
    c.bench_function("bench_style_object", |b| {
        b.iter_batched(
            || Element::new("div").with_attribute("style", "color: blue; width: 10px"),
            |mut el| {
                reconciler.set_property(
                    &vnode,
                    &mut el,
                    "style",
                    black_box(&style),
                    WriteMode::Properties,
                );
                black_box(el);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_select_large(c: &mut Criterion) {
    let reconciler = PropertyReconciler::new();
    let vnode = VirtualNode::new("select");
    let select = make_select(OPTION_COUNT);
    let wanted = Value::from((OPTION_COUNT - 1).to_string());
    c.bench_function("bench_select_large", |b| {
        b.iter_batched(
            || select.clone(),
            |mut el| {
                reconciler.set_property(
                    &vnode,
                    &mut el,
                    "value",
                    black_box(&wanted),
                    WriteMode::Properties,
                );
                black_box(el);
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_set_mixed_attributes,
    bench_set_mixed_properties,
    bench_style_object,
    bench_select_large
);
criterion_main!(benches);
