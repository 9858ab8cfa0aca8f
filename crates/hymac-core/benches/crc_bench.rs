use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hymac_core::crc::crc16_ccitt;

fn bench_crc(c: &mut Criterion) {
    let msdu_small: Vec<u8> = (0..64u16).map(|i| i as u8).collect();
    let msdu_large: Vec<u8> = (0..400u16).map(|i| (i * 7) as u8).collect();

    c.bench_function("crc16_ccitt/64B", |b| {
        b.iter(|| crc16_ccitt(black_box(&msdu_small)))
    });
    c.bench_function("crc16_ccitt/400B", |b| {
        b.iter(|| crc16_ccitt(black_box(&msdu_large)))
    });
}

criterion_group!(benches, bench_crc);
criterion_main!(benches);
