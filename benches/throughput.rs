use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use http::Method;
use std::hint::black_box;
use trierouter::{router::Router, runtime_config::RuntimeConfig, RouteTable};

fn example_table() -> &'static str {
    r#"
[[route]]
method = "GET"
pattern = "/"
handlers = ["root_handler"]

[[route]]
method = "GET"
pattern = "/zoo/animals"
handlers = ["get_animals"]

[[route]]
method = "POST"
pattern = "/zoo/animals"
handlers = ["create_animal"]

[[route]]
method = "GET"
pattern = "/zoo/animals/:id"
handlers = ["get_animal"]

[[route]]
method = "GET"
pattern = "/zoo/animals/:id/toys/:toy_id"
handlers = ["animal_toy"]

[[route]]
method = "GET"
pattern = "/park/:category/animals/:id/habitats/:habitat_id/sections/:section_id"
handlers = ["habitat_section"]

[[route]]
method = "POST"
pattern = "/inventory/:warehouse_id/feeds/:feed_id/items/:item_id/batches/:batch_id"
handlers = ["post_item_batch"]

[[route]]
method = "GET"
pattern = "/complex/:a/:b/:c/:d/:e/:f/:g/:h/:i"
handlers = ["complex_many_params"]

[[route]]
method = "GET"
pattern = "/static/*path"
handlers = ["static_file"]

[[route]]
method = "GET"
pattern = "/static/*.png"
handlers = ["static_png"]
"#
}

fn example_router() -> Router<String> {
    RouteTable::from_toml_str(example_table())
        .expect("failed to parse route table")
        .build_router_with_config(RuntimeConfig::default())
        .expect("failed to build router")
}

fn bench_route_throughput(c: &mut Criterion) {
    let router = example_router();
    c.bench_function("route_match", |b| {
        let test_paths = [
            (Method::GET, "/zoo/animals/123"),
            (Method::GET, "/zoo/animals/123/toys/456"),
            (Method::GET, "/park/cats/animals/123/habitats/88/sections/5"),
            (Method::POST, "/inventory/1/feeds/2/items/3/batches/4"),
            (Method::GET, "/complex/1/2/3/4/5/6/7/8/9"),
            (Method::GET, "/static/css/site/main.css"),
            (Method::GET, "/static/logo.png"),
        ];
        b.iter(|| {
            for (method, path) in test_paths.iter() {
                let res = router.route(method.clone(), path);
                black_box(&res);
            }
        })
    });
}

fn bench_route_miss(c: &mut Criterion) {
    let router = example_router();
    c.bench_function("route_miss", |b| {
        b.iter(|| {
            let res = router.route(Method::GET, black_box("/zoo/animals/123/unknown"));
            black_box(&res);
        })
    });
}

fn bench_route_table_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_match_by_table_size");
    for count in [10usize, 100, 1000] {
        let mut router = Router::with_config(RuntimeConfig::default());
        for i in 0..count {
            router
                .get(&format!("/api/v1/resource{i}/:id"), vec![format!("handler_{i}")])
                .expect("failed to register route");
        }
        group.bench_with_input(BenchmarkId::from_parameter(count), &router, |b, router| {
            b.iter(|| {
                let res = router.route(Method::GET, black_box("/api/v1/resource5/77"));
                black_box(&res);
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_route_throughput,
    bench_route_miss,
    bench_route_table_size
);
criterion_main!(benches);
