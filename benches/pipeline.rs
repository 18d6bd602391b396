//! Benchmarks for the spritegen pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use spritegen::{catalog, compose_sheet, encode, find, Canvas, Colour, NoiseRng, Region, DEFAULT_SEED};

// -- Drawing benchmarks --

fn bench_drawing(c: &mut Criterion) {
    let mut group = c.benchmark_group("drawing");

    group.bench_function("noise_fill_tile", |b| {
        let mut rng = NoiseRng::new(DEFAULT_SEED);
        b.iter(|| {
            let mut canvas = Canvas::new(64, 32).unwrap();
            canvas.noise_fill(Region::iso_tile(64, 32), Colour::new(55, 80, 40, 210), 8, &mut rng);
            black_box(canvas)
        })
    });

    group.bench_function("blend_arcs", |b| {
        let slash = find("slash_effect").unwrap();
        b.iter(|| slash.render_seeded(black_box(DEFAULT_SEED)).unwrap())
    });

    group.bench_function("compose_sheet_4x32", |b| {
        let frames: Vec<Canvas> = (0..4)
            .map(|i| Canvas::filled(32, 32, Colour::rgb(i * 60, 0, 0)).unwrap())
            .collect();
        b.iter(|| compose_sheet(black_box(&frames)).unwrap())
    });

    group.finish();
}

// -- Encoding benchmarks --

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    let tile = find("tile_grass_1").unwrap().render_seeded(DEFAULT_SEED).unwrap();
    let sheet = find("fireball_explode").unwrap().render_seeded(DEFAULT_SEED).unwrap();
    let large = sheet.upscale(4).unwrap();

    group.bench_function("encode_tile", |b| b.iter(|| encode(black_box(&tile)).unwrap()));
    group.bench_function("encode_sheet", |b| b.iter(|| encode(black_box(&sheet)).unwrap()));
    group.bench_function("encode_sheet_x4", |b| b.iter(|| encode(black_box(&large)).unwrap()));

    group.finish();
}

// -- Full catalog --

fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    group.sample_size(20);

    group.bench_function("render_and_encode_all", |b| {
        b.iter(|| {
            for asset in catalog() {
                let canvas = asset.render_seeded(DEFAULT_SEED).unwrap();
                black_box(encode(&canvas).unwrap());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_drawing, bench_encoding, bench_catalog);
criterion_main!(benches);
