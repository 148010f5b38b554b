use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use xini::{parse_str, split_unquoted, typecast, QUOTES};

fn synthetic_config(sections: usize, keys_per_section: usize) -> String {
    let mut text = String::new();
    for s in 0..sections {
        text.push_str(&format!("[section_{}]\n", s));
        for k in 0..keys_per_section {
            match k % 4 {
                0 => text.push_str(&format!("key_{} = {}\n", k, k * 7)),
                1 => text.push_str(&format!("key_{} = \"value {}\"\n", k, k)),
                2 => text.push_str(&format!("key_{} = [1, 2.5, \"x\", null]\n", k)),
                _ => text.push_str(&format!("key_{} = true\n", k)),
            }
        }
        text.push('\n');
    }
    text
}

fn benchmark_split(c: &mut Criterion) {
    let line = "alpha, \"beta, gamma\", delta, 'epsilon, zeta', eta";

    c.bench_function("split_quoted_line", |b| {
        b.iter(|| split_unquoted(black_box(line), ',', 0, &QUOTES))
    });
}

fn benchmark_typecast(c: &mut Criterion) {
    let mut group = c.benchmark_group("typecast");

    for (name, raw) in [
        ("int", "42"),
        ("float", "42.5"),
        ("quoted_string", "\"example.com\""),
        ("list", "[80, 443, \"https, quic\", null]"),
        ("nested_list", "[[1, 2], [3, 4], [5, 6]]"),
    ] {
        group.bench_function(name, |b| b.iter(|| typecast(black_box(raw))));
    }

    group.finish();
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_str");

    for size in [10, 50, 100].iter() {
        let text = synthetic_config(*size, 8);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse_str("bench.ini", black_box(text)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_split, benchmark_typecast, benchmark_parse);
criterion_main!(benches);
