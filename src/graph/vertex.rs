//! 顶点定义
//!
//! 顶点是不透明的标识符，只要求可比较相等和可哈希

use std::fmt::Debug;
use std::hash::Hash;

/// 顶点标识符
///
/// 任何满足 `Clone + Eq + Hash + Debug` 的类型（如 `&str`、`String`、`u64`）
/// 都可以直接作为顶点使用，不要求有序。
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}
