//! 最短路径算法（Dijkstra 算法）
//!
//! 基于二叉堆的单源最短路径。边权重由 [`Weight`] 保证非负，
//! 这是算法正确性的前提。

use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use crate::types::Weight;
use indexmap::IndexMap;
use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// 单源最短路径结果
///
/// 覆盖图中所有已注册顶点，按顶点注册顺序排列；
/// 不可达顶点的距离为 [`Weight::INFINITY`]（JSON 中序列化为 `null`）。
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths<V> {
    /// 源点
    source: V,
    /// 顶点 -> 到源点的最短距离
    distances: IndexMap<V, Weight>,
}

impl<V: Vertex> ShortestPaths<V> {
    pub fn source(&self) -> &V {
        &self.source
    }

    /// 获取到某顶点的最短距离，顶点未注册时返回 `None`
    pub fn distance(&self, vertex: &V) -> Option<Weight> {
        self.distances.get(vertex).copied()
    }

    /// 顶点是否从源点可达
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some_and(|d| !d.is_infinite())
    }

    /// 可达顶点数量（包括源点）
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| !d.is_infinite()).count()
    }

    /// 按顶点注册顺序迭代 (顶点, 距离)
    pub fn iter(&self) -> impl Iterator<Item = (&V, Weight)> + '_ {
        self.distances.iter().map(|(v, d)| (v, *d))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// 取出距离表
    pub fn into_map(self) -> IndexMap<V, Weight> {
        self.distances
    }
}

impl<V: Vertex> PartialEq for ShortestPaths<V> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.distances == other.distances
    }
}

/// 优先队列条目：按 (距离, 入队序号) 取最小
struct QueueEntry<'g, V> {
    distance: Weight,
    seq: u64,
    vertex: &'g V,
}

impl<V> PartialEq for QueueEntry<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for QueueEntry<'_, V> {}

impl<V> PartialOrd for QueueEntry<'_, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for QueueEntry<'_, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.distance, self.seq).cmp(&(other.distance, other.seq))
    }
}

/// Dijkstra 单源最短路径
///
/// 过期条目（弹出时距离大于已记录的最优距离）直接丢弃，不做原地删除。
/// 可达顶点的距离之和溢出 `f64` 时返回 [`Error::DistanceOverflow`]，
/// 保证 [`Weight::INFINITY`] 只表示不可达。
pub fn dijkstra<V: Vertex>(graph: &Graph<V>, start: &V) -> Result<ShortestPaths<V>> {
    graph.require(start)?;

    let mut distances: IndexMap<V, Weight> = graph
        .vertices()
        .map(|v| (v.clone(), Weight::INFINITY))
        .collect();
    distances.insert(start.clone(), Weight::ZERO);

    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;
    heap.push(Reverse(QueueEntry {
        distance: Weight::ZERO,
        seq,
        vertex: start,
    }));

    let mut stale = 0usize;
    let mut overflowed: Vec<&V> = Vec::new();
    while let Some(Reverse(QueueEntry {
        distance, vertex, ..
    })) = heap.pop()
    {
        let best = distances.get(vertex).copied().unwrap_or(Weight::INFINITY);
        if distance > best {
            stale += 1;
            continue;
        }

        for (neighbor, weight) in graph.adjacency(vertex) {
            let Some(recorded) = distances.get_mut(neighbor) else {
                continue;
            };
            match distance.checked_add(*weight) {
                Some(candidate) if candidate < *recorded => {
                    *recorded = candidate;
                    seq += 1;
                    heap.push(Reverse(QueueEntry {
                        distance: candidate,
                        seq,
                        vertex: neighbor,
                    }));
                }
                Some(_) => {}
                None => overflowed.push(neighbor),
            }
        }
    }

    // 溢出的候选值若未被其他有限路径取代，该顶点可达却无法表示距离
    if let Some(vertex) = overflowed
        .into_iter()
        .find(|v| distances.get(*v).is_some_and(|d| d.is_infinite()))
    {
        return Err(Error::DistanceOverflow(format!("{:?}", vertex)));
    }

    let result = ShortestPaths {
        source: start.clone(),
        distances,
    };
    tracing::debug!(
        ?start,
        reachable = result.reachable_count(),
        pushes = seq + 1,
        stale,
        "Dijkstra 完成"
    );
    Ok(result)
}
