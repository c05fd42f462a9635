use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array3;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

use xdmf::XdmfDocument;

fn write_scalar_field(field: &Array3<f64>) -> usize {
    let mut doc = XdmfDocument::new();

    doc.begin_domain();
    doc.begin_grid("Uniform").unwrap();
    doc.begin_attribute("Scalar").unwrap();
    doc.set_center("Node").unwrap();
    doc.write_data_item(field).unwrap();
    doc.end_attribute().unwrap();
    doc.end_grid().unwrap();
    doc.end_domain().unwrap();

    doc.render().unwrap().len()
}

fn inline_payload_bench(c: &mut Criterion) {
    let small: Array3<f64> = Array3::random((20, 20, 20), Uniform::new(0., 10.));
    let large: Array3<f64> = Array3::random((50, 50, 50), Uniform::new(0., 10.));

    c.bench_function("inline payload 20^3", |b| {
        b.iter(|| write_scalar_field(black_box(&small)))
    });

    c.bench_function("inline payload 50^3", |b| {
        b.iter(|| write_scalar_field(black_box(&large)))
    });
}

criterion_group!(benches, inline_payload_bench);
criterion_main!(benches);
