use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use curve::{CurveId, EcGroup};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_scalar(group: &EcGroup, rng: &mut StdRng) -> BigUint {
    group.random_scalar(rng).expect("random scalar").expose().clone()
}

fn bench_add(c: &mut Criterion) {
    let group = EcGroup::load(CurveId::Secp256r1).expect("load");
    let g = group.generator().clone();
    let h = group.mul_generator(&BigUint::from(2u32)).expect("2G");
    c.bench_function("p256_add", |bencher| {
        bencher.iter(|| black_box(group.add(black_box(&g), black_box(&h)).expect("add")))
    });
}

fn bench_scalar_mul(c: &mut Criterion) {
    let mut bench_group = c.benchmark_group("scalar_mul");

    for id in CurveId::SUPPORTED {
        let group = EcGroup::load(id).expect("load");
        let mut rng = StdRng::seed_from_u64(42);
        let scalar = random_scalar(&group, &mut rng);

        bench_group.bench_with_input(BenchmarkId::from_parameter(id), &id, |bencher, _| {
            bencher.iter(|| black_box(group.mul_generator(black_box(&scalar)).expect("mul")))
        });
    }
    bench_group.finish();
}

fn bench_muladd(c: &mut Criterion) {
    let mut bench_group = c.benchmark_group("muladd");

    for id in CurveId::SUPPORTED {
        let group = EcGroup::load(id).expect("load");
        let mut rng = StdRng::seed_from_u64(12345);
        let (_, q) = group.generate_keypair(&mut rng).expect("keypair");
        let u1 = random_scalar(&group, &mut rng);
        let u2 = random_scalar(&group, &mut rng);

        bench_group.bench_with_input(BenchmarkId::from_parameter(id), &id, |bencher, _| {
            bencher.iter(|| {
                black_box(
                    group
                        .muladd(black_box(&u1), group.generator(), black_box(&u2), &q)
                        .expect("muladd"),
                )
            })
        });
    }
    bench_group.finish();
}

criterion_group!(benches, bench_add, bench_scalar_mul, bench_muladd);
criterion_main!(benches);
