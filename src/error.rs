//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// 算法的起始顶点未注册
    #[error("起始顶点不存在: {0}")]
    InvalidStart(String),

    /// 权重为负数、NaN 或无穷大
    #[error("无效的边权重: {0}（权重必须是非负有限数）")]
    InvalidWeight(f64),

    /// 最短距离之和超出可表示范围
    #[error("距离溢出: 到顶点 {0} 的路径长度超出可表示范围")]
    DistanceOverflow(String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
