//! 命令行支持模块
//!
//! 运行配置、示例图和结果打印

mod printer;

pub use printer::Printer;

use crate::algorithm::{bfs, dfs, dijkstra, prim, ShortestPaths, SpanningTree};
use crate::error::Result;
use crate::graph::{Graph, Vertex};
use crate::types::Weight;
use clap::ValueEnum;
use serde::Serialize;

/// 可运行的算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// 广度优先搜索
    Bfs,
    /// 深度优先搜索
    Dfs,
    /// Dijkstra 最短路径
    Dijkstra,
    /// Prim 最小支撑树
    Prim,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Prim,
    ];
}

/// 输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// 表格
    #[default]
    Table,
    /// JSON
    Json,
}

/// 运行配置
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 算法起点
    pub start: String,
    /// 要运行的算法（按给定顺序输出）
    pub algorithms: Vec<Algorithm>,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start: "A".to_string(),
            algorithms: Algorithm::ALL.to_vec(),
            format: OutputFormat::Table,
        }
    }
}

/// 一次运行的全部结果
#[derive(Debug, Clone, Serialize)]
pub struct Report<V> {
    pub start: V,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfs: Option<Vec<V>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dfs: Option<Vec<V>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dijkstra: Option<ShortestPaths<V>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prim: Option<SpanningTree<V>>,
}

/// 在同一张图上依次运行选定的算法
pub fn run<V: Vertex>(graph: &Graph<V>, start: &V, algorithms: &[Algorithm]) -> Result<Report<V>> {
    let mut report = Report {
        start: start.clone(),
        bfs: None,
        dfs: None,
        dijkstra: None,
        prim: None,
    };

    for algorithm in algorithms {
        match algorithm {
            Algorithm::Bfs => report.bfs = Some(bfs(graph, start)?),
            Algorithm::Dfs => report.dfs = Some(dfs(graph, start)?),
            Algorithm::Dijkstra => report.dijkstra = Some(dijkstra(graph, start)?),
            Algorithm::Prim => report.prim = Some(prim(graph, start)?),
        }
    }

    Ok(report)
}

/// 按运行配置在字符串顶点图上运行算法
pub fn run_with_config(graph: &Graph<String>, config: &RunConfig) -> Result<Report<String>> {
    run(graph, &config.start, &config.algorithms)
}

/// 示例图：顶点 A..F，七条带权边
pub fn demo_graph() -> Graph<String> {
    let mut graph = Graph::new();
    for v in ["A", "B", "C", "D", "E", "F"] {
        graph.add_vertex(v.to_string());
    }

    let edges: [(&str, &str, u32); 7] = [
        ("A", "B", 2),
        ("A", "C", 3),
        ("B", "D", 4),
        ("C", "E", 5),
        ("C", "F", 6),
        ("D", "E", 7),
        ("E", "F", 8),
    ];
    for (u, v, w) in edges {
        graph.add_weighted_edge(u.to_string(), v.to_string(), Weight::from(w));
    }

    graph
}
