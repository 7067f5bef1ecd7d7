//! 错误类型定义

use thiserror::Error;

use crate::piece::Side;

/// 配置错误
///
/// 核心逻辑（走法生成、状态转移、评估、搜索）都是全函数，
/// 唯一需要快速失败的是配置误用。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 无法识别的走子方
    #[error("Unknown side to move: {token:?} (expected \"Star\" or \"Circle\")")]
    UnknownSide { token: String },

    /// 权重表长度不是 8
    #[error("Score table must have exactly {expected} weights, got {actual}")]
    ScoreTableLength { expected: usize, actual: usize },

    /// 无效的权重
    #[error("Invalid score weight: {value:?}")]
    InvalidWeight { value: String },

    /// 无效的格子编码
    #[error("Invalid cell {value:?} at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, value: String },

    /// 棋盘形状不对
    #[error("Invalid board shape: {reason}")]
    BoardShape { reason: String },

    /// 单方棋子过多
    #[error("{side} has {total} pieces, at most {max} allowed")]
    TooManyPieces { side: Side, total: usize, max: usize },

    /// 无效的搜索深度
    #[error("Invalid max depth: {value:?}")]
    InvalidDepth { value: String },

    /// 输入缺少行
    #[error("Input is missing line {line} ({what})")]
    MissingLine { line: usize, what: &'static str },

    /// 无效的棋盘记号
    #[error("Invalid notation: {value:?}")]
    InvalidNotation { value: String },
}

/// 协议错误类型
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 序列化错误
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
