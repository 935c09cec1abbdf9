//! Criterion benchmarks for URI construction, rendering and generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use external_uri::{
    DynamicUri, ExternalUriGenerator, GeneratorConfig, Parameters, Uri, UriConfig, UriParts,
};

fn sample_parts() -> [(&'static str, UriParts); 4] {
    let mut full = UriParts::new("api.example.com", "https", "/v1/users/{id}/posts");
    full.port = Some(88);
    full.query = "page=2&sort=desc".to_string();
    full.fragment = "latest".to_string();
    full.user = "me".to_string();
    full.password = Some("secret".to_string());

    [
        ("host_only", UriParts::new("example.com", "", "")),
        ("typical", UriParts::new("www.example.com", "https", "/search")),
        (
            "deep_path",
            UriParts::new("www.example.com", "http", "/a/b/c/d/e/f/g/h/i/j"),
        ),
        ("full", full),
    ]
}

/// Benchmark: Uri::new with varying components
fn bench_new(c: &mut Criterion) {
    let mut group = c.benchmark_group("new");

    for (name, parts) in sample_parts() {
        group.bench_with_input(BenchmarkId::new("uri", name), &parts, |b, parts| {
            b.iter(|| Uri::new(black_box(parts.clone())));
        });
    }

    group.finish();
}

/// Benchmark: copy-on-write component replacement
fn bench_with(c: &mut Criterion) {
    let mut group = c.benchmark_group("with");
    let uri = Uri::new(UriParts::new("www.example.com", "http", "/path")).expect("valid");

    group.bench_function("scheme", |b| {
        b.iter(|| uri.with_scheme(black_box("https")));
    });
    group.bench_function("host", |b| {
        b.iter(|| uri.with_host(black_box("api.example.com")));
    });
    group.bench_function("port", |b| {
        b.iter(|| uri.with_port(black_box(Some(88))));
    });

    group.finish();
}

/// Benchmark: placeholder substitution with growing parameter counts
fn bench_render_with(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_with");

    for count in [1usize, 4, 16] {
        let path: String = (0..count).map(|i| format!("/{{p{i}}}")).collect();
        let template = DynamicUri::new(
            UriParts::new("www.example.com", "https", path),
            Parameters::new(),
        )
        .expect("valid");
        let params: Parameters = (0..count)
            .map(|i| (format!("p{i}"), format!("value{i}")))
            .collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("params", count), &params, |b, params| {
            b.iter(|| template.render_with(black_box(params)));
        });
    }

    group.finish();
}

/// Benchmark: lookup plus rendering through the generator
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    let config: GeneratorConfig = (0..64)
        .map(|i| {
            (
                format!("service{i}"),
                UriConfig::new(format!("s{i}.example.com"), "https", "/users/{id}"),
            )
        })
        .collect();
    let generator = ExternalUriGenerator::new(config).expect("valid config");
    let params = Parameters::from([("id".to_string(), "42".to_string())]);

    for name in ["service0", "service63"] {
        group.bench_with_input(BenchmarkId::new("name", name), &name, |b, name| {
            b.iter(|| generator.generate(black_box(name), &params));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_new, bench_with, bench_render_with, bench_generate);
criterion_main!(benches);
