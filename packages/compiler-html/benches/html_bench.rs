use bemforge_compiler_html::compile_to_html;
use bemforge_model::{Element, ElementId, Forest};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn wide_forest(roots: u64, children: u64) -> Forest {
    let mut next = 0;
    let mut id = || {
        next += 1;
        ElementId(next)
    };
    Forest::from_roots((0..roots).map(|r| {
        let mut root = Element::new(id(), format!("Root {}", r))
            .with_element_name("row")
            .with_modifiers(["primary"]);
        for c in 0..children {
            root = root.with_child(
                Element::new(id(), format!("Cell {}", c))
                    .with_element_name("cell")
                    .with_tag("span"),
            );
        }
        root
    }))
}

fn compile_small_forest(c: &mut Criterion) {
    let forest = wide_forest(1, 3);

    c.bench_function("compile_html_small", |b| {
        b.iter(|| compile_to_html(black_box(&forest), "card"))
    });
}

fn compile_large_forest(c: &mut Criterion) {
    let forest = wide_forest(50, 20);

    c.bench_function("compile_html_large", |b| {
        b.iter(|| compile_to_html(black_box(&forest), "table"))
    });
}

criterion_group!(benches, compile_small_forest, compile_large_forest);
criterion_main!(benches);
