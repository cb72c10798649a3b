use constant_resolver::{ReturnType, TypeRegistry, constants, resolve_static};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

pub struct HttpStatus;

constants! {
    HttpStatus {
        CONTINUE: u16 = 100,
        OK: u16 = 200,
        CREATED: u16 = 201,
        ACCEPTED: u16 = 202,
        NO_CONTENT: u16 = 204,
        MOVED_PERMANENTLY: u16 = 301,
        FOUND: u16 = 302,
        NOT_MODIFIED: u16 = 304,
        BAD_REQUEST: u16 = 400,
        UNAUTHORIZED: u16 = 401,
        FORBIDDEN: u16 = 403,
        NOT_FOUND: u16 = 404,
        GONE: u16 = 410,
        TEAPOT: u16 = 418,
        INTERNAL_SERVER_ERROR: u16 = 500,
        BAD_GATEWAY: u16 = 502,
        SERVICE_UNAVAILABLE: u16 = 503,
        MISSING: u16 = 404,
    }
}

fn bench_resolve(c: &mut Criterion) {
    let registry = TypeRegistry::new().with::<HttpStatus>();

    c.bench_function("resolve_joined_single", |b| {
        b.iter(|| {
            resolve_static(
                &registry,
                "HttpStatus",
                black_box(HttpStatus::TEAPOT),
                &ReturnType::JOINED,
                " or ",
            )
        })
    });

    c.bench_function("resolve_joined_duplicate", |b| {
        b.iter(|| {
            resolve_static(
                &registry,
                "HttpStatus",
                black_box(HttpStatus::NOT_FOUND),
                &ReturnType::JOINED,
                " or ",
            )
        })
    });

    c.bench_function("resolve_mapping_duplicate", |b| {
        b.iter(|| {
            resolve_static(
                &registry,
                "HttpStatus",
                black_box(HttpStatus::NOT_FOUND),
                &ReturnType::MAPPING,
                " or ",
            )
        })
    });

    c.bench_function("resolve_no_match", |b| {
        b.iter(|| {
            resolve_static(
                &registry,
                "HttpStatus",
                black_box(599u16),
                &ReturnType::JOINED,
                " or ",
            )
        })
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
