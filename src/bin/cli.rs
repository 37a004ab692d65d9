//! EduGraph CLI 工具
//!
//! 在示例图或 CSV 边表上运行图算法并打印结果

use anyhow::Context;
use clap::Parser;
use edugraph::cli::{run_with_config, Algorithm, OutputFormat, Printer, RunConfig};
use edugraph::import::EdgeListImporter;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "edugraph-cli")]
#[command(about = "EduGraph 命令行工具", version)]
struct Args {
    /// CSV 边表文件（缺省时使用内置示例图）
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 算法起点
    #[arg(short, long, default_value = "A")]
    start: String,

    /// 要运行的算法，可重复指定（缺省时运行全部）
    #[arg(short, long, value_enum)]
    algorithm: Vec<Algorithm>,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// 遇到无效记录时中止导入
    #[arg(long)]
    strict: bool,

    /// 打印图统计信息
    #[arg(long)]
    stats: bool,
}

impl From<&Args> for RunConfig {
    fn from(args: &Args) -> Self {
        let algorithms = if args.algorithm.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            args.algorithm.clone()
        };
        Self {
            start: args.start.clone(),
            algorithms,
            format: args.format,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = RunConfig::from(&args);

    let (graph, import_stats) = match &args.input {
        Some(path) => {
            let (graph, stats) = EdgeListImporter::new()
                .strict(args.strict)
                .import_path(path)
                .with_context(|| format!("无法导入边表 {}", path.display()))?;
            (graph, Some(stats))
        }
        None => (edugraph::cli::demo_graph(), None),
    };

    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "图已加载"
    );

    let printer = Printer::new(config.format);
    if args.stats {
        println!(
            "{}",
            printer.print_stats(graph.vertex_count(), graph.edge_count(), import_stats.as_ref())
        );
    }

    let report = run_with_config(&graph, &config)?;
    print!("{}", printer.print_report(&report)?);
    if config.format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
