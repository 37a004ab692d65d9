//! 边定义
//!
//! 生成树算法输出的带权边三元组

use crate::types::Weight;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 带权无向边 (from, to, weight)
///
/// 在生成树结果中 `from` 是树内端点，`to` 是新加入树的端点。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
    pub weight: Weight,
}

impl<V> Edge<V> {
    /// 创建新边
    pub fn new(from: V, to: V, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// 转为 (from, to, weight) 三元组
    pub fn into_tuple(self) -> (V, V, Weight) {
        (self.from, self.to, self.weight)
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.from, self.to, self.weight)
    }
}
