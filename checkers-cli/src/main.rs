//! 叠子跳棋命令行工具
//!
//! - `checkers-cli` - 读取 `input.txt`，写出 `output.txt`
//! - `checkers-cli --input game.json --json` - 读取 JSON 输入并在标准输出打印决策

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 叠子跳棋最佳走法计算
#[derive(Parser)]
#[command(name = "checkers-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 输入文件（文本格式，或 .json）
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,

    /// 输出文件
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// 同时以 JSON 打印决策
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("checkers_cli=debug".parse()?))
        .init();

    let cli = Cli::parse();
    info!("读取 {:?}", cli.input);

    let decision = checkers_cli::run(&cli.input, &cli.output)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    }

    Ok(())
}
