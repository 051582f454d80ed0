//! Concurrency benchmarks for the two-tier graph lock.
//!
//! Measures scaling and contention when many threads share one graph.
//! Run with: cargo bench --bench concurrency_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graphq_core::{Graph, NodeIndex};
use std::sync::Arc;
use std::thread;

const OPS_PER_THREAD: usize = 1_000;

fn seeded_graph(num_nodes: usize) -> Arc<Graph<usize>> {
    let graph = Arc::new(Graph::with_capacity(num_nodes));
    for i in 0..num_nodes {
        graph.add_node(i);
    }
    for i in 0..num_nodes {
        graph.add_edge(NodeIndex::new(i), NodeIndex::new((i + 1) % num_nodes), 1);
    }
    graph
}

// ========== Edge writes on disjoint vs shared sources ==========

fn bench_concurrent_add_edge(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent-AddEdge");

    for threads in [2, 4, 8] {
        group.throughput(Throughput::Elements((threads * OPS_PER_THREAD) as u64));

        group.bench_with_input(
            BenchmarkId::new("disjoint_sources", threads),
            &threads,
            |b, &threads| {
                let graph = seeded_graph(1024);
                b.iter(|| {
                    let handles: Vec<_> = (0..threads)
                        .map(|t| {
                            let g = Arc::clone(&graph);
                            thread::spawn(move || {
                                for i in 0..OPS_PER_THREAD {
                                    let s = NodeIndex::new(t * 128 + i % 128);
                                    g.add_edge(s, NodeIndex::new(i % 1024), 1);
                                }
                            })
                        })
                        .collect();
                    for h in handles {
                        h.join().unwrap();
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("shared_source", threads),
            &threads,
            |b, &threads| {
                let graph = seeded_graph(1024);
                b.iter(|| {
                    let handles: Vec<_> = (0..threads)
                        .map(|_| {
                            let g = Arc::clone(&graph);
                            thread::spawn(move || {
                                for i in 0..OPS_PER_THREAD {
                                    g.add_edge(NodeIndex::new(0), NodeIndex::new(i % 1024), 1);
                                }
                            })
                        })
                        .collect();
                    for h in handles {
                        h.join().unwrap();
                    }
                });
            },
        );
    }
    group.finish();
}

// ========== Readers against a growing graph ==========

fn bench_mixed_read_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent-Mixed");

    for readers in [1, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("readers_plus_1_grower", readers),
            &readers,
            |b, &readers| {
                b.iter(|| {
                    let graph = seeded_graph(256);
                    let mut handles = Vec::new();
                    {
                        let g = Arc::clone(&graph);
                        handles.push(thread::spawn(move || {
                            for i in 0..OPS_PER_THREAD {
                                let node = g.add_node(i);
                                g.add_edge(NodeIndex::new(i % 256), node, 1);
                            }
                        }));
                    }
                    for r in 0..readers {
                        let g = Arc::clone(&graph);
                        handles.push(thread::spawn(move || {
                            for i in 0..OPS_PER_THREAD / 10 {
                                let mut count = 0usize;
                                g.bfs(NodeIndex::new((r + i) % 256), |_| count += 1);
                                black_box(count);
                            }
                        }));
                    }
                    for h in handles {
                        h.join().unwrap();
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_concurrent_add_edge, bench_mixed_read_write);
criterion_main!(benches);
