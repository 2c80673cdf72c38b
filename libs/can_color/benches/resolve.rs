#![allow(unused_crate_dependencies)]
use std::hint::black_box;

use can_color::{Platform, Resolver, Snapshot};
use criterion::{Bencher, Criterion, criterion_group, criterion_main};

fn snapshot(env: &[(&str, &str)], args: &[&str]) -> Snapshot {
    Snapshot::new(
        env.iter().map(|&(k, v)| (k.to_owned(), v.to_owned())),
        args.iter().map(|&a| a.to_owned()).collect(),
        Platform::Other,
    )
}

fn bench_resolve(c: &mut Criterion) {
    fn bench(env: &[(&str, &str)], args: &[&str]) -> impl Fn(&mut Bencher<'_>) {
        let resolver = Resolver::new(snapshot(env, args));
        move |b| b.iter(|| black_box(&resolver).streamless())
    }

    c.bench_function("resolve_forced_off", bench(&[("FORCE_COLOR", "0")], &[]));
    c.bench_function(
        "resolve_term_regex",
        bench(&[("TERM", "xterm-256color")], &[]),
    );
    c.bench_function(
        "resolve_ci",
        bench(&[("CI", "true"), ("GITHUB_ACTIONS", "true")], &[]),
    );
    c.bench_function(
        "resolve_fallthrough",
        bench(&[("TERM", "unknown")], &["--verbose", "--", "--color"]),
    );
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
