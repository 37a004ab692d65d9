//! 最小支撑树算法（Prim 算法）
//!
//! 从起点所在的连通分量生长最小支撑树。候选边集合用二叉堆维护，
//! 以 (权重, 入队序号) 排序：权重相同时先加入候选集的边优先。

use crate::error::Result;
use crate::graph::{Edge, Graph, Vertex};
use crate::types::Weight;
use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

/// 最小支撑树结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree<V> {
    /// 起点
    root: V,
    /// 按接受顺序排列的树边
    edges: Vec<Edge<V>>,
}

impl<V: Vertex> SpanningTree<V> {
    pub fn root(&self) -> &V {
        &self.root
    }

    /// 按接受顺序排列的树边
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// 树边总权重
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// 树覆盖的顶点：起点加上每条树边新加入的端点
    pub fn vertices(&self) -> Vec<&V> {
        std::iter::once(&self.root)
            .chain(self.edges.iter().map(|e| &e.to))
            .collect()
    }

    pub fn into_edges(self) -> Vec<Edge<V>> {
        self.edges
    }
}

/// 候选边
struct Candidate<'g, V> {
    weight: Weight,
    seq: u64,
    inside: &'g V,
    outside: &'g V,
}

impl<V> PartialEq for Candidate<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for Candidate<'_, V> {}

impl<V> PartialOrd for Candidate<'_, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for Candidate<'_, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight, self.seq).cmp(&(other.weight, other.seq))
    }
}

/// 候选边集合（最小堆）
struct Frontier<'g, V> {
    heap: BinaryHeap<Reverse<Candidate<'g, V>>>,
    next_seq: u64,
}

impl<'g, V: Vertex> Frontier<'g, V> {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// 把 `inside` 通向未访问顶点的所有边加入候选集
    fn extend(&mut self, graph: &'g Graph<V>, inside: &'g V, visited: &HashSet<&'g V>) {
        for (outside, weight) in graph.adjacency(inside) {
            if visited.contains(outside) {
                continue;
            }
            self.heap.push(Reverse(Candidate {
                weight: *weight,
                seq: self.next_seq,
                inside,
                outside,
            }));
            self.next_seq += 1;
        }
    }

    fn pop(&mut self) -> Option<Candidate<'g, V>> {
        self.heap.pop().map(|Reverse(candidate)| candidate)
    }
}

/// Prim 最小支撑树
///
/// 只覆盖从 `start` 可达的顶点，不可达顶点被静默排除。
/// 可达顶点数为 n 时恰好返回 n - 1 条边。
pub fn prim<V: Vertex>(graph: &Graph<V>, start: &V) -> Result<SpanningTree<V>> {
    graph.require(start)?;

    let mut visited: HashSet<&V> = HashSet::new();
    visited.insert(start);

    let mut frontier = Frontier::new();
    frontier.extend(graph, start, &visited);

    let mut edges = Vec::new();
    while let Some(candidate) = frontier.pop() {
        // 过期条目：另一端已经在树中
        if !visited.insert(candidate.outside) {
            continue;
        }
        edges.push(Edge::new(
            candidate.inside.clone(),
            candidate.outside.clone(),
            candidate.weight,
        ));
        frontier.extend(graph, candidate.outside, &visited);
    }

    let tree = SpanningTree {
        root: start.clone(),
        edges,
    };
    tracing::debug!(
        ?start,
        edges = tree.len(),
        total_weight = %tree.total_weight(),
        "Prim 完成"
    );
    Ok(tree)
}
