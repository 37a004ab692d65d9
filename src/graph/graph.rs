//! 图数据结构
//!
//! 基于邻接表的内存带权无向图

use super::vertex::Vertex;
use crate::error::{Error, Result};
use crate::types::Weight;
use indexmap::IndexMap;
use smallvec::SmallVec;

/// 单个顶点的邻接表：按加边顺序排列的 (邻居, 权重)
pub type Adjacency<V> = SmallVec<[(V, Weight); 4]>;

/// 带权无向图
///
/// 每条边 (u, v, w) 同时存储在 u 和 v 的邻接表中。
/// 顶点按注册顺序迭代，邻居按加边顺序迭代，算法输出因此是确定的。
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// 顶点 -> 邻接表
    vertices: IndexMap<V, Adjacency<V>>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            vertices: IndexMap::new(),
        }
    }
}

impl<V: Vertex> Graph<V> {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 幂等：顶点已存在时不做任何修改。返回是否新插入。
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.vertices.contains_key(&vertex) {
            return false;
        }
        self.vertices.insert(vertex, Adjacency::new());
        true
    }

    /// 顶点是否已注册
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    /// 按注册顺序迭代所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.keys()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ==================== 边操作 ====================

    /// 添加权重为 1 的边
    pub fn add_edge(&mut self, u: V, v: V) -> bool {
        self.add_weighted_edge(u, v, Weight::ONE)
    }

    /// 添加带权边
    ///
    /// 两个端点都必须已注册，否则静默忽略并返回 `false`。
    /// 不拒绝重边和自环：重边产生并列的邻接项，自环在邻接表中出现两次。
    pub fn add_weighted_edge(&mut self, u: V, v: V, weight: Weight) -> bool {
        if !self.vertices.contains_key(&u) || !self.vertices.contains_key(&v) {
            tracing::trace!(?u, ?v, %weight, "端点未注册，忽略该边");
            return false;
        }

        if let Some(adjacency) = self.vertices.get_mut(&u) {
            adjacency.push((v.clone(), weight));
        }
        if let Some(adjacency) = self.vertices.get_mut(&v) {
            adjacency.push((u, weight));
        }
        true
    }

    /// 获取边数量（无向边，每条只计一次）
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.vertices.values().map(|adjacency| adjacency.len()).sum();
        entries / 2
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻接表
    pub fn neighbors(&self, vertex: &V) -> Option<&[(V, Weight)]> {
        self.vertices.get(vertex).map(|adjacency| adjacency.as_slice())
    }

    /// 获取顶点的度（自环计两次）
    pub fn degree(&self, vertex: &V) -> Option<usize> {
        self.vertices.get(vertex).map(|adjacency| adjacency.len())
    }

    /// 获取算法起点的邻接表，起点未注册时报错
    pub(crate) fn require(&self, start: &V) -> Result<&[(V, Weight)]> {
        self.neighbors(start)
            .ok_or_else(|| Error::InvalidStart(format!("{:?}", start)))
    }

    /// 获取已注册顶点的邻接表
    ///
    /// 邻接表中的顶点一定已注册，未注册时返回空切片。
    pub(crate) fn adjacency(&self, vertex: &V) -> &[(V, Weight)] {
        self.neighbors(vertex).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_basic() {
        let mut graph = Graph::new();
        assert!(graph.is_empty());

        assert!(graph.add_vertex("A"));
        assert!(graph.add_vertex("B"));
        assert!(graph.add_vertex("C"));
        assert_eq!(graph.vertex_count(), 3);

        assert!(graph.add_weighted_edge("A", "B", Weight::from(2)));
        assert!(graph.add_edge("A", "C"));
        assert_eq!(graph.edge_count(), 2);

        // 对称存储
        assert_eq!(
            graph.neighbors(&"A").unwrap(),
            &[("B", Weight::from(2)), ("C", Weight::ONE)]
        );
        assert_eq!(graph.neighbors(&"B").unwrap(), &[("A", Weight::from(2))]);
        assert_eq!(graph.neighbors(&"C").unwrap(), &[("A", Weight::ONE)]);

        assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut graph = Graph::new();
        graph.add_vertex(1u32);
        graph.add_vertex(2u32);
        graph.add_edge(1, 2);

        assert!(!graph.add_vertex(1));
        assert_eq!(graph.vertex_count(), 2);
        // 已有邻接表不被清空
        assert_eq!(graph.degree(&1), Some(1));
    }

    #[test]
    fn test_edge_with_unregistered_endpoint_is_ignored() {
        let mut graph = Graph::new();
        graph.add_vertex("A");
        graph.add_vertex("B");

        assert!(!graph.add_edge("A", "X"));
        assert!(!graph.add_weighted_edge("Y", "B", Weight::from(5)));
        assert!(!graph.add_edge("X", "Y"));

        assert!(graph.neighbors(&"A").unwrap().is_empty());
        assert!(graph.neighbors(&"B").unwrap().is_empty());
        assert!(!graph.contains_vertex(&"X"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_parallel_edges_and_self_loops() {
        let mut graph = Graph::new();
        graph.add_vertex("A");
        graph.add_vertex("B");

        graph.add_weighted_edge("A", "B", Weight::from(1));
        graph.add_weighted_edge("A", "B", Weight::from(4));
        graph.add_weighted_edge("A", "A", Weight::from(7));

        assert_eq!(
            graph.neighbors(&"A").unwrap(),
            &[
                ("B", Weight::from(1)),
                ("B", Weight::from(4)),
                ("A", Weight::from(7)),
                ("A", Weight::from(7)),
            ]
        );
        assert_eq!(graph.degree(&"A"), Some(4));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_require_start() {
        let mut graph = Graph::new();
        graph.add_vertex("A");

        assert!(graph.require(&"A").is_ok());
        assert!(matches!(graph.require(&"Z"), Err(Error::InvalidStart(v)) if v == "\"Z\""));
        assert!(graph.adjacency(&"Z").is_empty());
    }
}
