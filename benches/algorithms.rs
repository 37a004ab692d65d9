//! 图算法性能基准

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use edugraph::{bfs, dfs, dijkstra, prim, Graph, Weight};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 随机连通图：先连一条链，再加随机边
fn random_graph(n: u32, extra_edges: usize) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(n as u64);
    let mut graph = Graph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for v in 1..n {
        graph.add_weighted_edge(v - 1, v, Weight::from(rng.gen_range(1..100u32)));
    }
    for _ in 0..extra_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        graph.add_weighted_edge(u, v, Weight::from(rng.gen_range(1..100u32)));
    }
    graph
}

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms");

    for &n in &[1_000u32, 10_000] {
        let graph = random_graph(n, n as usize * 4);

        group.bench_with_input(BenchmarkId::new("bfs", n), &graph, |b, g| {
            b.iter(|| bfs(g, black_box(&0)))
        });
        group.bench_with_input(BenchmarkId::new("dfs", n), &graph, |b, g| {
            b.iter(|| dfs(g, black_box(&0)))
        });
        group.bench_with_input(BenchmarkId::new("dijkstra", n), &graph, |b, g| {
            b.iter(|| dijkstra(g, black_box(&0)))
        });
        group.bench_with_input(BenchmarkId::new("prim", n), &graph, |b, g| {
            b.iter(|| prim(g, black_box(&0)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);
