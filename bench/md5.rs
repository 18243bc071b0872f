use criterion::*;
use md5_engine::md5::LengthPolicy;
use md5_engine::utils::human_readable_size;

fn bench_md5(c: &mut Criterion) {

    fn bench_md5_hash(c: &mut Criterion, size: usize) {
        let data = vec![0u8; size];

        let test_name = format!("md5 hash {}", human_readable_size(size));
        c.bench_function(&test_name, |b| b.iter(|| {
            black_box(md5_engine::md5::compute(&data).unwrap());
        }));
    }

    fn bench_md5_hash_truncate32(c: &mut Criterion, size: usize) {
        let data = vec![0u8; size];

        let test_name = format!("md5 hash truncate32 {}", human_readable_size(size));
        c.bench_function(&test_name, |b| b.iter(|| {
            black_box(md5_engine::md5::compute_with(&data, LengthPolicy::Truncate32).unwrap());
        }));
    }

    fn bench_crate_md5_hash(c: &mut Criterion, size: usize) {
        let data = vec![0u8; size];

        let test_name = format!("crate md5 hash {}", human_readable_size(size));
        c.bench_function(&test_name, |b| b.iter(|| {
            black_box(md5::compute(&data));
        }));
    }

    for size in [16, 64, 256, 1024, 8192, 65536] {
        bench_md5_hash(c, size);
        bench_crate_md5_hash(c, size);
    }
    bench_md5_hash_truncate32(c, 65536);
}

criterion_group!(benches, bench_md5);
criterion_main!(benches);
