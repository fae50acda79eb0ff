use criterion::{criterion_group, criterion_main, Criterion};
use qcinp::{
    geom::{Atom, Molecule},
    program::qchem::{render, QChemOptions},
};

fn benzene() -> Molecule {
    #[rustfmt::skip]
    let coords = [
        ("C", 0.0000, 1.3970, 0.0), ("C", 1.2098, 0.6985, 0.0),
        ("C", 1.2098, -0.6985, 0.0), ("C", 0.0000, -1.3970, 0.0),
        ("C", -1.2098, -0.6985, 0.0), ("C", -1.2098, 0.6985, 0.0),
        ("H", 0.0000, 2.4810, 0.0), ("H", 2.1486, 1.2405, 0.0),
        ("H", 2.1486, -1.2405, 0.0), ("H", 0.0000, -2.4810, 0.0),
        ("H", -2.1486, -1.2405, 0.0), ("H", -2.1486, 1.2405, 0.0),
    ];
    Molecule::new(
        0,
        1,
        coords
            .iter()
            .map(|&(l, x, y, z)| Atom::new(l, x, y, z))
            .collect(),
    )
}

pub fn write_input(c: &mut Criterion) {
    let mol = benzene();
    let opts = QChemOptions::default();
    c.bench_function("render benzene", |b| {
        b.iter(|| render(&mol, &opts, None))
    });
}

criterion_group!(benches, write_input);
criterion_main!(benches);
