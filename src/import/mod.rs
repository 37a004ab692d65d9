//! 数据导入模块
//!
//! 从 CSV 边表构建图。每行一条记录，无表头，`#` 开头的行为注释：
//!
//! ```text
//! # 顶点
//! A
//! # 边，权重默认为 1
//! A,B
//! # 带权边
//! A,C,3.5
//! ```

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::Weight;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// 解析后的单行记录
enum Record {
    Vertex(String),
    Edge(String, String, Weight),
}

/// 边表导入器
#[derive(Debug, Clone, Default)]
pub struct EdgeListImporter {
    strict: bool,
}

impl EdgeListImporter {
    /// 创建导入器（宽松模式：跳过并统计错误行）
    pub fn new() -> Self {
        Self::default()
    }

    /// 严格模式：遇到第一条错误记录即中止
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// 从文件导入
    pub fn import_path<P: AsRef<Path>>(&self, path: P) -> Result<(Graph<String>, ImportStats)> {
        let file = File::open(path)?;
        self.import_reader(file)
    }

    /// 从任意输入流导入
    pub fn import_reader<R: Read>(&self, reader: R) -> Result<(Graph<String>, ImportStats)> {
        let start = Instant::now();
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .trim(Trim::All)
            .from_reader(reader);

        let mut graph = Graph::new();
        let mut stats = ImportStats::default();

        for row in reader.records() {
            // 行号包含注释行和空行，与源文件一致
            let (line, parsed) = match row {
                Ok(record) => (
                    record.position().map(|p| p.line()),
                    Self::parse_record(&record),
                ),
                Err(e) => (
                    e.position().map(|p| p.line()),
                    Err(Error::ImportError(e.to_string())),
                ),
            };
            let line = line.unwrap_or_default();

            match parsed {
                Ok(Record::Vertex(v)) => {
                    if graph.add_vertex(v) {
                        stats.vertices_imported += 1;
                    }
                }
                Ok(Record::Edge(u, v, weight)) => {
                    if graph.add_vertex(u.clone()) {
                        stats.vertices_imported += 1;
                    }
                    if graph.add_vertex(v.clone()) {
                        stats.vertices_imported += 1;
                    }
                    if graph.add_weighted_edge(u, v, weight) {
                        stats.edges_imported += 1;
                    }
                }
                Err(e) if self.strict => {
                    return Err(Error::ImportError(format!("第 {} 行: {}", line, e)));
                }
                Err(e) => {
                    tracing::warn!(line, error = %e, "跳过无效记录");
                    stats.errors += 1;
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(?stats, "边表导入完成");
        Ok((graph, stats))
    }

    /// 解析单条记录
    fn parse_record(record: &StringRecord) -> Result<Record> {
        let fields: Vec<&str> = record.iter().collect();
        if fields.iter().any(|f| f.is_empty()) {
            return Err(Error::ParseError("顶点名不能为空".to_string()));
        }

        match fields.as_slice() {
            [v] => Ok(Record::Vertex(v.to_string())),
            [u, v] => Ok(Record::Edge(u.to_string(), v.to_string(), Weight::ONE)),
            [u, v, w] => {
                let value = w
                    .parse::<f64>()
                    .map_err(|_| Error::ParseError(format!("无效的权重: {}", w)))?;
                Ok(Record::Edge(u.to_string(), v.to_string(), Weight::new(value)?))
            }
            _ => Err(Error::ParseError(format!(
                "字段数量应为 1 到 3 个, 实际为 {} 个",
                fields.len()
            ))),
        }
    }
}
