//! 格子字符串编码
//!
//! 每个格子编码为：
//! - `0`：空格
//! - `S<n>`：n 枚星方棋子
//! - `C<n>`：n 枚圆方棋子
//!
//! 一行为逗号分隔的 8 个格子，例如 `0,S1,0,0,C2,0,0,0`。

use crate::board::Board;
use crate::constants::{BOARD_SIZE, EMPTY_CELL};
use crate::error::ConfigError;
use crate::piece::{Position, Side, Square};

/// 格子字符串编码处理
pub struct Cells;

impl Cells {
    /// 解析单个格子，`row`/`col` 仅用于错误信息
    ///
    /// 叠子数量最多 `u16::MAX`；单方总数由 [`Cells::parse_board`] 检查。
    pub fn parse_cell(value: &str, row: usize, col: usize) -> Result<Square, ConfigError> {
        let value = value.trim();
        let invalid = || ConfigError::InvalidCell {
            row,
            col,
            value: value.to_string(),
        };

        if value == EMPTY_CELL {
            return Ok(Square::Empty);
        }

        let mut chars = value.chars();
        let side = chars.next().and_then(Side::from_cell_char).ok_or_else(invalid)?;
        let count: u16 = chars.as_str().parse().map_err(|_| invalid())?;
        Square::stack(side, count).ok_or_else(invalid)
    }

    /// 编码单个格子
    pub fn encode_cell(square: Square) -> String {
        match square {
            Square::Empty => EMPTY_CELL.to_string(),
            Square::Stack { side, count } => format!("{}{}", side.cell_char(), count),
        }
    }

    /// 解析逗号分隔的一行
    pub fn parse_row(line: &str, row: usize) -> Result<Vec<Square>, ConfigError> {
        let cells: Vec<&str> = line.trim().split(',').collect();
        if cells.len() != BOARD_SIZE {
            return Err(ConfigError::BoardShape {
                reason: format!("Row {} has {} cells, expected {}", row, cells.len(), BOARD_SIZE),
            });
        }

        cells
            .iter()
            .enumerate()
            .map(|(col, cell)| Self::parse_cell(cell, row, col))
            .collect()
    }

    /// 解析 8 行文本为棋盘
    pub fn parse_board<S: AsRef<str>>(lines: &[S]) -> Result<Board, ConfigError> {
        if lines.len() != BOARD_SIZE {
            return Err(ConfigError::BoardShape {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, lines.len()),
            });
        }

        let mut squares = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, line) in lines.iter().enumerate() {
            squares.extend(Self::parse_row(line.as_ref(), row)?);
        }
        Board::try_from(squares)
    }

    /// 将棋盘转换为逐行的格子编码
    pub fn board_to_rows(board: &Board) -> Vec<Vec<String>> {
        (0..BOARD_SIZE as u8)
            .map(|row| {
                (0..BOARD_SIZE as u8)
                    .map(|col| Self::encode_cell(board.get(Position::new_unchecked(row, col))))
                    .collect()
            })
            .collect()
    }

    /// 将棋盘转换为逗号分隔的 8 行文本
    pub fn board_to_lines(board: &Board) -> Vec<String> {
        Self::board_to_rows(board)
            .into_iter()
            .map(|row| row.join(","))
            .collect()
    }
}
