//! 叠子跳棋共享协议库
//!
//! 包含:
//! - 阵营、格子、位置、棋盘等核心数据结构
//! - 走法定义与走法生成
//! - 行权重表
//! - 格子字符串编码与棋盘记号
//! - 输入格式 (文本, JSON)

mod board;
mod cells;
mod constants;
mod error;
mod input;
mod moves;
mod notation;
mod piece;
mod score;

pub use board::Board;
pub use cells::Cells;
pub use constants::*;
pub use error::{ConfigError, ProtocolError};
pub use input::{Algorithm, GameInput};
pub use moves::{Move, MoveGenerator};
pub use notation::Notation;
pub use piece::{Position, Side, Square};
pub use score::ScoreTable;
