//! 叠子跳棋命令行工具
//!
//! 读取输入文件、调用 AI 引擎、写出结果文件。
//! 输出共四行：最佳走法、直接评估值、搜索值、节点数。

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use checkers_ai::{AiEngine, Decision};
use checkers_protocol::{GameInput, Notation};
use tracing::{debug, info};

/// 读取输入文件，`.json` 结尾按 JSON 解析，否则按文本格式解析
pub fn load_input(path: &Path) -> Result<GameInput> {
    let input = GameInput::load(path)
        .with_context(|| format!("加载输入文件失败: {:?}", path))?;

    debug!("初始棋盘:\n{}", input.board);
    Ok(input)
}

/// 格式化输出文件内容
pub fn format_output(decision: &Decision) -> String {
    format!(
        "{}\n{}\n{}\n{}\n",
        Notation::move_to_string(&decision.best_move),
        decision.myopic_utility,
        decision.value,
        decision.nodes_searched
    )
}

/// 写出结果文件
pub fn write_output(path: &Path, decision: &Decision) -> Result<()> {
    fs::write(path, format_output(decision))
        .with_context(|| format!("写入输出文件失败: {:?}", path))
}

/// 完整流程：读取、搜索、写出
pub fn run(input_path: &Path, output_path: &Path) -> Result<Decision> {
    let input = load_input(input_path)?;
    info!(
        "{} 走子，算法 {}，深度 {}",
        input.to_move, input.algorithm, input.max_depth
    );

    let (mut engine, state) = AiEngine::from_input(&input);
    let decision = engine.decide(&state);

    write_output(output_path, &decision)?;
    info!("结果已写入 {:?}", output_path);
    Ok(decision)
}
