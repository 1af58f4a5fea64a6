use criterion::{criterion_group, criterion_main, Criterion};
use campusnav_lib::{
    load_campus, nearest_node, plan_route, AccessibilityFilter, Campus, Coordinate, RouteRequest,
};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/campus")
}

static CAMPUS: Lazy<Campus> = Lazy::new(|| load_campus(&fixture_path()).expect("fixture loads"));
static NODE_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::between("CH-MG", "BH-BG"));
static GATE_REQUEST: Lazy<RouteRequest> = Lazy::new(|| {
    RouteRequest::from_position(Coordinate::new(37.61921, 127.05951), "BimaHall")
        .with_filter(AccessibilityFilter::new(true, true))
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let campus = &*CAMPUS;

    c.bench_function("dijkstra_chmg_bhbg", |b| {
        let request = &*NODE_REQUEST;
        b.iter(|| {
            let plan = plan_route(campus, request).expect("route plans");
            black_box(plan.outcome.route().map(|route| route.cost))
        });
    });

    c.bench_function("gps_to_bimahall_step_free", |b| {
        let request = &*GATE_REQUEST;
        b.iter(|| {
            let plan = plan_route(campus, request).expect("route plans");
            black_box(plan.outcome.route().map(|route| route.hop_count()))
        });
    });

    c.bench_function("nearest_node_scan", |b| {
        b.iter(|| {
            let node = nearest_node(&campus.graph, Coordinate::new(37.6195, 127.0594))
                .expect("located nodes");
            black_box(node.id.len())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
