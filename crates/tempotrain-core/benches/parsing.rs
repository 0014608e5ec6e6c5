use criterion::{black_box, criterion_group, criterion_main, Criterion};

use std::fmt::Write as _;
use std::path::PathBuf;

use tempotrain_core::parser::{parse_catalog_str, validate_catalog};

fn make_catalog_toml(questions: usize) -> String {
    let mut toml = String::from(
        r#"[catalog]
id = "bench"
title = "Bench Catalog"
description = "Generated for benchmarking"
"#,
    );

    for i in 0..questions {
        write!(
            toml,
            r#"
[[questions]]
id = "q{i}"
kind = "mcq"
prompt = "Question numéro {i} sur les compteurs de temps"
choices = ["Réponse A", "Réponse B", "Réponse C", "Réponse D"]
correct_choice = {correct}
explanation = "La bonne réponse est l'option {correct}."
"#,
            i = i,
            correct = i % 4
        )
        .unwrap();
    }

    toml
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_catalog");
    let path = PathBuf::from("bench.toml");

    for size in [10usize, 100] {
        let toml = make_catalog_toml(size);
        group.bench_function(format!("questions={size}"), |b| {
            b.iter(|| parse_catalog_str(black_box(&toml), &path).unwrap())
        });
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_catalog");
    let path = PathBuf::from("bench.toml");

    for size in [10usize, 100] {
        let catalog = parse_catalog_str(&make_catalog_toml(size), &path).unwrap();
        group.bench_function(format!("questions={size}"), |b| {
            b.iter(|| validate_catalog(black_box(&catalog)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_validate);
criterion_main!(benches);
