use criterion::{black_box, criterion_group, criterion_main, Criterion};
use metro_graph::data::{sample_graph, sample_stations};
use metro_graph::{nearest, plan_journey, shortest_path, Vertices};

fn benchmark_routing(c: &mut Criterion) {
    let graph = sample_graph().expect("sample network should parse");
    let stations = sample_stations().expect("sample stations should parse");
    let names: Vec<String> = graph.vertex_names().cloned().collect();

    // Benchmark a single cross-network route
    c.bench_function("shortest_path", |b| {
        b.iter(|| shortest_path(black_box(&graph), black_box("LIONEL-GROULX"), black_box("LONGUEUIL")));
    });

    // Benchmark every station pair
    c.bench_function("shortest_path_all_pairs", |b| {
        b.iter(|| {
            names
                .iter()
                .flat_map(|source| names.iter().map(move |target| (source, target)))
                .map(|(source, target)| shortest_path(black_box(&graph), source, target))
                .collect::<Vec<_>>()
        });
    });

    c.bench_function("nearest", |b| {
        b.iter(|| nearest(black_box(&stations), black_box((-35.0, -40.0))));
    });

    // Benchmark the full click-to-route pipeline
    c.bench_function("plan_journey", |b| {
        b.iter(|| {
            plan_journey(
                black_box(&graph),
                black_box(&stations),
                black_box((-255.0, -115.0)),
                black_box("PAPINEAU"),
            )
        });
    });
}

criterion_group!(benches, benchmark_routing);
criterion_main!(benches);
