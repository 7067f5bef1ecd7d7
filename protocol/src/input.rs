//! 输入格式
//!
//! 文本输入共 12 行：
//! 1. 走子方（`Star` / `Circle`）
//! 2. 算法（`ALPHABETA` 为 Alpha-Beta，其余均为 Minimax）
//! 3. 最大搜索深度
//! 4. 第 4-11 行为棋盘，每行 8 个格子
//! 5. 第 12 行为 8 个行权重

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::cells::Cells;
use crate::constants::{ALPHABETA_TOKEN, BOARD_SIZE, INPUT_LINES};
use crate::error::{ConfigError, ProtocolError};
use crate::piece::Side;
use crate::score::ScoreTable;

/// 搜索算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// 不剪枝的 Minimax
    #[default]
    Minimax,
    /// Alpha-Beta 剪枝
    AlphaBeta,
}

impl Algorithm {
    /// 从算法标记解析：只有 `ALPHABETA` 选择剪枝
    pub fn from_token(token: &str) -> Self {
        if token.trim() == ALPHABETA_TOKEN {
            Algorithm::AlphaBeta
        } else {
            Algorithm::Minimax
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => f.write_str("MINIMAX"),
            Algorithm::AlphaBeta => f.write_str(ALPHABETA_TOKEN),
        }
    }
}

/// 一次决策的完整输入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInput {
    /// 走子方
    pub to_move: Side,
    /// 搜索算法
    pub algorithm: Algorithm,
    /// 最大搜索深度
    pub max_depth: u32,
    /// 初始棋盘
    pub board: Board,
    /// 行权重表
    pub score_table: ScoreTable,
}

impl GameInput {
    /// 解析文本输入
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let line = |index: usize, what: &'static str| {
            lines
                .get(index)
                .copied()
                .ok_or(ConfigError::MissingLine { line: index + 1, what })
        };

        let to_move: Side = line(0, "side to move")?.parse()?;
        let algorithm = Algorithm::from_token(line(1, "algorithm")?);

        let depth = line(2, "max depth")?.trim();
        let max_depth = depth.parse().map_err(|_| ConfigError::InvalidDepth {
            value: depth.to_string(),
        })?;

        let rows = (0..BOARD_SIZE)
            .map(|i| line(3 + i, "board row"))
            .collect::<Result<Vec<_>, _>>()?;
        let board = Cells::parse_board(&rows)?;

        let score_table = ScoreTable::parse(line(INPUT_LINES - 1, "score table")?)?;

        debug!(
            "Parsed input: {} to move, {}, depth {}",
            to_move, algorithm, max_depth
        );

        Ok(Self {
            to_move,
            algorithm,
            max_depth,
            board,
            score_table,
        })
    }

    /// 从文件加载：`.json` 结尾按 JSON 解析，否则按文本格式解析
    pub fn load(path: &Path) -> Result<Self, ProtocolError> {
        let content = fs::read_to_string(path)?;
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            Ok(Self::from_json(&content)?)
        } else {
            Ok(Self::parse(&content)?)
        }
    }

    /// 转换回文本输入格式
    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(INPUT_LINES);
        lines.push(self.to_move.to_string());
        lines.push(self.algorithm.to_string());
        lines.push(self.max_depth.to_string());
        lines.extend(Cells::board_to_lines(&self.board));
        lines.push(
            self.score_table
                .weights()
                .iter()
                .map(|w| w.to_string())
                .collect::<Vec<_>>()
                .join(","),
        );
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
