//! 图算法模块
//!
//! 包含遍历（BFS / DFS）、最短路径（Dijkstra）和最小支撑树（Prim）。
//! 所有算法只读借用图，每次调用都使用独立的工作状态。

mod dijkstra;
mod prim;
mod traversal;

pub use dijkstra::{dijkstra, ShortestPaths};
pub use prim::{prim, SpanningTree};
pub use traversal::{bfs, dfs};
