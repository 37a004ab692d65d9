//! 结果打印器
//!
//! 提供表格和 JSON 格式的结果输出

use super::{OutputFormat, Report};
use crate::error::Result;
use crate::graph::Vertex;
use crate::import::ImportStats;
use colored::Colorize;
use prettytable::{format, row, Cell, Row, Table};
use serde::Serialize;
use std::fmt::Display;

/// 结果打印器
pub struct Printer {
    format: OutputFormat,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// 打印一次运行的结果
    pub fn print_report<V>(&self, report: &Report<V>) -> Result<String>
    where
        V: Vertex + Display + Serialize,
    {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_report(report)),
        }
    }

    fn format_report<V: Vertex + Display>(&self, report: &Report<V>) -> String {
        let mut output = String::new();

        if let Some(order) = &report.bfs {
            output.push_str(&section("广度优先搜索（BFS）遍历结果"));
            output.push_str(&join(order));
            output.push('\n');
        }

        if let Some(order) = &report.dfs {
            output.push_str(&section("深度优先搜索（DFS）遍历结果"));
            output.push_str(&join(order));
            output.push('\n');
        }

        if let Some(paths) = &report.dijkstra {
            output.push_str(&section(&format!(
                "从顶点 {} 出发的最短路径",
                paths.source()
            )));
            let rows: Vec<Vec<String>> = paths
                .iter()
                .map(|(v, d)| {
                    let distance = if d.is_infinite() {
                        "不可达".to_string()
                    } else {
                        d.to_string()
                    };
                    vec![v.to_string(), distance]
                })
                .collect();
            output.push_str(&format_table(&["顶点", "最短距离"], &rows));
        }

        if let Some(tree) = &report.prim {
            output.push_str(&section(&format!(
                "以顶点 {} 为起点的最小支撑树",
                tree.root()
            )));
            let rows: Vec<Vec<String>> = tree
                .edges()
                .iter()
                .map(|e| vec![format!("{} - {}", e.from, e.to), e.weight.to_string()])
                .collect();
            if rows.is_empty() {
                output.push_str("Empty set\n");
            } else {
                output.push_str(&format_table(&["边", "权重"], &rows));
            }
            output.push_str(&format!(
                "{} 条边, 总权重 {}\n",
                tree.len(),
                tree.total_weight()
            ));
        }

        output
    }

    /// 打印图和导入统计信息
    pub fn print_stats(
        &self,
        vertex_count: usize,
        edge_count: usize,
        import: Option<&ImportStats>,
    ) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        if let Some(stats) = import {
            table.add_row(row!["Rejected Records", stats.errors.to_string()]);
            table.add_row(row!["Import Time (ms)", stats.duration_ms.to_string()]);
        }
        table.to_string()
    }
}

fn section(title: &str) -> String {
    format!("{}\n", title.bold().green())
}

fn join<V: Display>(vertices: &[V]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// 表格格式
fn format_table(columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);

    let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
    table.set_titles(Row::new(header));

    for row_data in rows {
        let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
        table.add_row(Row::new(cells));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{demo_graph, run, Algorithm};

    #[test]
    fn test_table_report() {
        let mut graph = demo_graph();
        graph.add_vertex("G".to_string());
        let report = run(&graph, &"A".to_string(), &Algorithm::ALL).unwrap();

        let output = Printer::default().print_report(&report).unwrap();
        assert!(output.contains("A B C D E F"));
        assert!(output.contains("A B D E C F"));
        assert!(output.contains("不可达"));
        assert!(output.contains("C - F"));
        assert!(output.contains("5 条边, 总权重 20"));
    }

    #[test]
    fn test_json_report() {
        let graph = demo_graph();
        let report = run(&graph, &"A".to_string(), &[Algorithm::Dijkstra, Algorithm::Prim]).unwrap();

        let output = Printer::new(OutputFormat::Json).print_report(&report).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["dijkstra"]["distances"]["E"], 8.0);
        assert_eq!(json["prim"]["edges"][0]["from"], "A");
        assert_eq!(json["prim"]["edges"][0]["to"], "B");
        assert_eq!(json["prim"]["edges"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_empty_tree() {
        let mut graph = demo_graph();
        graph.add_vertex("Z".to_string());
        let report = run(&graph, &"Z".to_string(), &[Algorithm::Prim]).unwrap();

        let output = Printer::default().print_report(&report).unwrap();
        assert!(output.contains("Empty set"));
        assert!(output.contains("0 条边, 总权重 0"));
    }

    #[test]
    fn test_print_stats() {
        let output = Printer::default().print_stats(6, 7, None);
        assert!(output.contains("Vertex Count"));
        assert!(output.contains('7'));
        assert!(!output.contains("Rejected Records"));
    }
}
