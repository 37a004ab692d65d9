//! 图遍历算法
//!
//! 广度优先与深度优先遍历，邻居按邻接表的加边顺序访问

use crate::error::Result;
use crate::graph::{Graph, Vertex};
use std::collections::{HashSet, VecDeque};

/// 广度优先搜索
///
/// 返回从 `start` 可达的所有顶点，按跳数非递减的顺序排列，每个顶点恰好出现一次。
pub fn bfs<V: Vertex>(graph: &Graph<V>, start: &V) -> Result<Vec<V>> {
    graph.require(start)?;

    let mut visited: HashSet<&V> = HashSet::new();
    let mut queue: VecDeque<&V> = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());

        for (neighbor, _) in graph.adjacency(current) {
            // 入队时标记，避免重复入队
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(?start, visited = order.len(), "BFS 完成");
    Ok(order)
}

/// 深度优先搜索（先序）
///
/// 顶点在第一次到达时输出。使用显式栈保存每一层的邻居游标，
/// 输出与递归版本完全一致，但不受调用栈深度限制。
pub fn dfs<V: Vertex>(graph: &Graph<V>, start: &V) -> Result<Vec<V>> {
    let start_neighbors = graph.require(start)?;

    let mut visited: HashSet<&V> = HashSet::new();
    let mut order = vec![start.clone()];
    let mut stack = vec![start_neighbors.iter()];

    visited.insert(start);

    while let Some(neighbors) = stack.last_mut() {
        match neighbors.next() {
            Some((neighbor, _)) => {
                if visited.insert(neighbor) {
                    order.push(neighbor.clone());
                    stack.push(graph.adjacency(neighbor).iter());
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    tracing::debug!(?start, visited = order.len(), "DFS 完成");
    Ok(order)
}
