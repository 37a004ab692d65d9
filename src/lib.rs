//! EduGraph - 内存带权无向图与经典图算法
//!
//! 面向教学演示的小型图库，支持：
//! - 邻接表存储的带权无向图
//! - 广度优先 / 深度优先遍历
//! - Dijkstra 单源最短路径
//! - Prim 最小支撑树
//! - CSV 边表导入与命令行演示

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod types;

// 重导出常用类型
pub use algorithm::{bfs, dfs, dijkstra, prim, ShortestPaths, SpanningTree};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex};
pub use import::{EdgeListImporter, ImportStats};
pub use types::Weight;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
