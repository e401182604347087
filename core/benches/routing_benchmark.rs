use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lightroute::api::*;
use serde_json::json;
use std::collections::HashMap;
use std::hint::black_box;
use std::time::Duration;

fn router_with_routes(count: usize) -> Router {
    let mut router = Router::new();
    for i in 0..count {
        router
            .add_route("GET", &format!("/api/segment{i}/items/:id"), |params| {
                Ok(json_response(200, json!({ "id": params.get("id") })))
            })
            .unwrap();
    }
    router
}

fn benchmark_pattern_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_parsing");

    group.bench_function("parse_static", |b| {
        b.iter(|| {
            let result = parse_route_pattern(black_box("/api/v1/health"));
            black_box(result)
        });
    });

    group.bench_function("parse_params", |b| {
        b.iter(|| {
            let result = parse_route_pattern(black_box("/api/v1/users/:user_id/posts/:post_id"));
            black_box(result)
        });
    });

    group.finish();
}

fn benchmark_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");
    group.measurement_time(Duration::from_secs(10));

    // Worst case: the matching route was registered last.
    for size in [1, 10, 100].iter() {
        let router = router_with_routes(*size);
        let request = HttpRequest::new(
            HttpMethod::GET,
            format!("/api/segment{}/items/42", size - 1),
        );

        group.bench_with_input(
            BenchmarkId::new("resolve_last_route", size),
            &request,
            |b, request| {
                b.iter(|| {
                    let result = router.resolve(black_box(request));
                    black_box(result)
                });
            },
        );
    }

    let router = router_with_routes(100);
    let miss = HttpRequest::new(HttpMethod::GET, "/api/unknown/items/42");
    group.bench_function("resolve_miss_100_routes", |b| {
        b.iter(|| {
            let result = router.resolve(black_box(&miss));
            black_box(result)
        });
    });

    group.finish();
}

fn benchmark_reverse_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse_lookup");

    let mut router = Router::new();
    router
        .add_route_named("GET", "/users/:id/posts/:post_id", "showPost", |_params| {
            Ok(HttpResponse::new(200, ResponseBody::Empty))
        })
        .unwrap();

    let mut params = HashMap::new();
    params.insert("id".to_string(), "42".to_string());
    params.insert("post_id".to_string(), "7".to_string());

    group.bench_function("redirect", |b| {
        b.iter(|| {
            let result = router.redirect(black_box("showPost"), black_box(&params));
            black_box(result)
        });
    });

    group.finish();
}

fn benchmark_query_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_parsing");

    let query = "tab=posts&page=2&sort=created&order=desc&q=hello%20world";
    group.bench_function("parse_query_string", |b| {
        b.iter(|| {
            let result = parse_query_string(black_box(query));
            black_box(result)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_pattern_parsing,
    benchmark_resolution,
    benchmark_reverse_lookup,
    benchmark_query_parsing
);
criterion_main!(benches);
