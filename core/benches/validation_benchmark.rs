use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use s3key::api::{sanitize, validate};
use s3key::options::{Language, ValidationOptions};
use s3key::validation::KeyValidator;
use std::hint::black_box;
use std::time::Duration;

fn benchmark_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    group.measurement_time(Duration::from_secs(10));

    let options = ValidationOptions::new().allow_language(Language::Cjk, true);

    // Key length sweep
    for segments in [1, 10, 50, 100].iter() {
        let key = vec!["photos"; *segments].join("/") + "/image.jpg";

        group.bench_with_input(BenchmarkId::new("ascii_key", segments), &key, |b, key| {
            b.iter(|| {
                let result = validate(black_box(key), black_box(&options));
                black_box(result)
            });
        });
    }

    let cjk_key = "写真/ファイル/사진/".repeat(20) + "image.jpg";
    group.bench_function("cjk_key", |b| {
        b.iter(|| black_box(validate(black_box(&cjk_key), &options)));
    });

    let noisy_key = "./a//b\u{7}<c>/../d e:f@g/".repeat(30);
    group.bench_function("many_errors", |b| {
        b.iter(|| black_box(validate(black_box(&noisy_key), &options)));
    });

    // Reuse of pre-resolved options
    let validator = KeyValidator::from_options(&options);
    group.bench_function("prebuilt_validator", |b| {
        b.iter(|| black_box(validator.validate_str(black_box("folder/sub/file.txt"))));
    });

    group.finish();
}

fn benchmark_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize");
    let options = ValidationOptions::default();

    let clean_key = "folder/sub/file.txt";
    group.bench_function("clean_key", |b| {
        b.iter(|| black_box(sanitize(black_box(clean_key), &options)));
    });

    let dirty_key = "./photos//summer trip@beach:2024<1>/../".repeat(25);
    group.bench_function("dirty_key", |b| {
        b.iter(|| black_box(sanitize(black_box(&dirty_key), &options)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_validation, benchmark_sanitize);
criterion_main!(benches);
