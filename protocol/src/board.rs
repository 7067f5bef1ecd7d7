//! 棋盘状态

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cells::Cells;
use crate::constants::{BOARD_SIZE, BOARD_SQUARES, MAX_SIDE_PIECES};
use crate::error::ConfigError;
use crate::moves::Move;
use crate::piece::{Position, Side, Square};

/// 棋盘
///
/// 反序列化与文本解析走同一个校验：64 格、叠子数量 >= 1、单方总数不超过上限。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Square>", into = "Vec<Square>")]
pub struct Board {
    /// 8x8 棋盘，索引为 row * 8 + col，使用 Vec 以支持 serde
    squares: Vec<Square>,
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: vec![Square::Empty; BOARD_SQUARES],
        }
    }

    /// 获取指定位置的格子
    pub fn get(&self, pos: Position) -> Square {
        if pos.is_valid() {
            self.squares[pos.to_index()]
        } else {
            Square::Empty
        }
    }

    /// 设置指定位置的格子
    pub fn set(&mut self, pos: Position, square: Square) {
        if pos.is_valid() {
            self.squares[pos.to_index()] = square;
        }
    }

    /// 在指定位置放入一个棋子：空格变为 1 枚，己方叠子 +1
    ///
    /// 落在对方棋子上时直接覆盖为 1 枚己方棋子；走法生成器不会产生这种走法。
    /// 经过校验的棋盘单方总数不超过 `u16::MAX`，叠子不会饱和。
    pub fn add_piece(&mut self, pos: Position, side: Side) {
        let count = self.get(pos).count_for(side).saturating_add(1);
        self.set(pos, Square::Stack { side, count });
    }

    /// 清空指定位置
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Square::Empty);
    }

    /// 执行走法（不检查规则）
    ///
    /// 起点整格清空，终点加一枚棋子；跳吃时中点无条件清空。
    pub fn apply_move(&mut self, side: Side, mv: Move) {
        if let Move::Play { from, to } = mv {
            self.clear(from);
            self.add_piece(to, side);
            if let Some(captured) = mv.captured() {
                self.clear(captured);
            }
        }
    }

    /// 双方棋子位置（星方, 圆方），按行优先顺序，叠子按数量重复展开
    pub fn piece_positions(&self) -> (Vec<Position>, Vec<Position>) {
        let mut stars = Vec::new();
        let mut circles = Vec::new();
        for (index, square) in self.squares.iter().enumerate() {
            if let Square::Stack { side, count } = *square {
                // index 来自 squares，必然有效
                let pos = Position::new_unchecked((index / BOARD_SIZE) as u8, (index % BOARD_SIZE) as u8);
                let list = match side {
                    Side::Star => &mut stars,
                    Side::Circle => &mut circles,
                };
                list.extend(std::iter::repeat(pos).take(count as usize));
            }
        }
        (stars, circles)
    }

    /// 指定阵营的棋子总数
    pub fn count(&self, side: Side) -> usize {
        self.squares
            .iter()
            .map(|sq| sq.count_for(side) as usize)
            .sum()
    }
}

impl TryFrom<Vec<Square>> for Board {
    type Error = ConfigError;

    fn try_from(squares: Vec<Square>) -> Result<Self, Self::Error> {
        if squares.len() != BOARD_SQUARES {
            return Err(ConfigError::BoardShape {
                reason: format!("Expected {} squares, got {}", BOARD_SQUARES, squares.len()),
            });
        }

        if let Some((index, square)) = squares
            .iter()
            .enumerate()
            .find(|(_, sq)| matches!(sq, Square::Stack { count: 0, .. }))
        {
            return Err(ConfigError::InvalidCell {
                row: index / BOARD_SIZE,
                col: index % BOARD_SIZE,
                value: Cells::encode_cell(*square),
            });
        }

        let board = Self { squares };
        for side in [Side::Star, Side::Circle] {
            let total = board.count(side);
            if total > MAX_SIDE_PIECES {
                return Err(ConfigError::TooManyPieces {
                    side,
                    total,
                    max: MAX_SIDE_PIECES,
                });
            }
        }
        Ok(board)
    }
}

impl From<Board> for Vec<Square> {
    fn from(board: Board) -> Self {
        board.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in Cells::board_to_rows(self) {
            writeln!(f, "{}", row.join("\t"))?;
        }
        Ok(())
    }
}
