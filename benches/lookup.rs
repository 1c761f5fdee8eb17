use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crop_guide::{CropStore, DetailsGenerator};

fn bench_lookup(c: &mut Criterion) {
    let store = CropStore::builtin().expect("built-in store");

    c.bench_function("lookup_hit", |b| b.iter(|| store.lookup(black_box("Pigeon Peas"))));
    c.bench_function("lookup_miss", |b| b.iter(|| store.lookup(black_box("Kale"))));
}

fn bench_details(c: &mut Criterion) {
    let store = CropStore::builtin().expect("built-in store");
    let generator = DetailsGenerator::new();
    let record = store.lookup("Sugarcane").expect("Sugarcane in catalog");

    c.bench_function("details_markdown", |b| {
        b.iter(|| generator.generate(black_box("Sugarcane"), record, Some(&store)))
    });
}

criterion_group!(benches, bench_lookup, bench_details);
criterion_main!(benches);
