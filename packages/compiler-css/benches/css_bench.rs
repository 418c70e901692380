use bemforge_compiler_css::compile_to_css;
use bemforge_model::{Element, ElementId, Forest};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn styled(id: u64, depth: u64) -> Element {
    let mut element = Element::new(ElementId(id), "Item")
        .with_element_name(format!("level-{}", depth))
        .with_modifiers(["active", "wide"])
        .with_property("backgroundColor", "#3498db")
        .with_property("fontSize", "16px")
        .with_property("padding", "10px")
        .with_property("borderRadius", "4px");
    if depth < 6 {
        element = element.with_child(styled(id * 10, depth + 1));
        element = element.with_child(styled(id * 10 + 1, depth + 1));
    }
    element
}

fn compile_deep_forest(c: &mut Criterion) {
    let forest = Forest::from_roots([styled(1, 0)]);

    c.bench_function("compile_css_deep", |b| {
        b.iter(|| compile_to_css(black_box(&forest), "tree"))
    });
}

criterion_group!(benches, compile_deep_forest);
criterion_main!(benches);
