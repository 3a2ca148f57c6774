use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathkit::path::{normalize, segments};
use pathkit::{Operation, PathResolver, ResolverOptions, SeparatorStyle};
use std::path::Path;

fn bench_collapse(c: &mut Criterion) {
    let mut group = c.benchmark_group("collapse");

    for (name, input) in [
        ("plain", "/absolute/path/to/file.txt"),
        ("with_dots", "/a/b/../c/./d"),
        ("many_dots", "/a/b/c/d/../../e/f/../g"),
        ("windows_drive", "C:\\Users\\me\\..\\you\\file.txt"),
        ("unc", "\\\\server\\share\\dir\\..\\file"),
    ] {
        group.bench_with_input(BenchmarkId::new("unix", name), &input, |b, &input| {
            b.iter(|| normalize::collapse(black_box(input), SeparatorStyle::Unix));
        });
        group.bench_with_input(BenchmarkId::new("windows", name), &input, |b, &input| {
            b.iter(|| normalize::collapse(black_box(input), SeparatorStyle::Windows));
        });
    }

    group.finish();
}

fn bench_absolutize(c: &mut Criterion) {
    let mut group = c.benchmark_group("absolutize");
    let working_dir = Path::new("/home/user/project");

    group.bench_function("relative", |b| {
        b.iter(|| normalize::absolutize(black_box(Path::new("src/lib.rs")), working_dir, false));
    });

    group.bench_function("absolute", |b| {
        b.iter(|| normalize::absolutize(black_box(Path::new("/etc/hosts")), working_dir, false));
    });

    group.bench_function("tilde", |b| {
        b.iter(|| normalize::absolutize(black_box(Path::new("~/notes.md")), working_dir, true));
    });

    group.finish();
}

fn bench_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("segments");

    group.bench_function("split_extension", |b| {
        b.iter(|| segments::split_extension(black_box("archive.tar.gz")));
    });

    group.bench_function("file_name", |b| {
        b.iter(|| segments::file_name(black_box(Path::new("/a/b/c/notes.md"))));
    });

    group.finish();
}

fn bench_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver");

    // Nothing exists under this directory, so no filesystem access except
    // for parent_path.
    let resolver = PathResolver::with_working_dir(ResolverOptions::default(), "/bench/project");

    for operation in Operation::ALL {
        group.bench_with_input(
            BenchmarkId::new("unchecked", operation.label()),
            &operation,
            |b, &operation| {
                b.iter(|| operation.apply(&resolver, black_box("src/../file.txt")));
            },
        );
    }

    group.bench_function("report", |b| {
        b.iter(|| resolver.report(black_box("file.txt")));
    });

    group.finish();
}

fn bench_resolver_with_existence_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver_with_existence");

    // Use a directory that actually exists to exercise the filesystem
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("file.txt"), "bench").unwrap();
    let resolver = PathResolver::with_working_dir(
        ResolverOptions::default().with_check_existence(true),
        temp_dir.path(),
    );

    group.bench_function("name_existing", |b| {
        b.iter(|| resolver.name(black_box("file.txt")));
    });

    group.bench_function("name_missing", |b| {
        b.iter(|| resolver.name(black_box("missing.txt")));
    });

    group.bench_function("parent_path_existing", |b| {
        b.iter(|| resolver.parent_path(black_box("file.txt")));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_collapse,
    bench_absolutize,
    bench_segments,
    bench_resolver,
    bench_resolver_with_existence_check
);
criterion_main!(benches);
