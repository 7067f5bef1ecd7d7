//! 走法生成

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::notation::Notation;
use crate::piece::{Position, Side, Square};

/// 走法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// 停一手（无子可动时唯一的合法走法）
    Pass,
    /// 从 `from` 走到 `to`：斜前一格为普通走法，斜前两格为跳吃
    Play { from: Position, to: Position },
}

impl Move {
    /// 创建普通走法或跳吃
    pub fn play(from: Position, to: Position) -> Self {
        Move::Play { from, to }
    }

    /// 是否为跳吃
    pub fn is_jump(&self) -> bool {
        match self {
            Move::Pass => false,
            Move::Play { from, to } => from.row.abs_diff(to.row) == 2,
        }
    }

    /// 跳吃时被吃棋子所在的位置（起点与落点之间的格子）
    pub fn captured(&self) -> Option<Position> {
        match self {
            Move::Play { from, to } if self.is_jump() => Some(from.midpoint(*to)),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Notation::move_to_string(self))
    }
}

/// 走法生成器
///
/// 不实现强制吃子和连跳：普通走法与跳吃优先级相同。
pub struct MoveGenerator;

impl MoveGenerator {
    /// 根据棋盘计算棋子列表后生成走法
    pub fn generate_for(board: &Board, side: Side) -> Vec<Move> {
        let (stars, circles) = board.piece_positions();
        Self::generate(board, side, &stars, &circles)
    }

    /// 生成指定阵营的所有走法
    ///
    /// 顺序：己方棋子按列表顺序（叠子重复出现），每枚棋子先左斜后右斜。
    /// 没有任何走法时返回 `[Pass]`，因此结果永远非空。
    pub fn generate(board: &Board, side: Side, stars: &[Position], circles: &[Position]) -> Vec<Move> {
        let own = match side {
            Side::Star => stars,
            Side::Circle => circles,
        };

        let mut moves = Vec::with_capacity(own.len() * 2);
        for &from in own.iter().filter(|p| p.row != side.goal_row()) {
            for dc in [-1i8, 1i8] {
                Self::generate_direction(board, side, from, dc, &mut moves);
            }
        }

        if moves.is_empty() {
            moves.push(Move::Pass);
        }
        moves
    }

    /// 生成单个斜方向上的走法
    fn generate_direction(board: &Board, side: Side, from: Position, dc: i8, moves: &mut Vec<Move>) {
        let dr = side.forward();
        let Some(target) = from.offset(dr, dc) else {
            return;
        };

        match board.get(target) {
            square if Self::is_open(square, side, target) => {
                moves.push(Move::play(from, target));
            }
            Square::Stack { side: occupant, .. } if occupant == side => {}
            _ => {
                // 对方棋子：沿同一方向再走一格尝试跳吃
                let Some(landing) = target.offset(dr, dc) else {
                    return;
                };
                if Self::is_open(board.get(landing), side, landing) {
                    moves.push(Move::play(from, landing));
                }
            }
        }
    }

    /// 格子是否可以落子：空格，或已到达目标边的己方棋子（落上去叠子）
    fn is_open(square: Square, side: Side, pos: Position) -> bool {
        match square {
            Square::Empty => true,
            Square::Stack { side: occupant, .. } => occupant == side && pos.row == side.goal_row(),
        }
    }
}
