//! 棋子、格子与位置定义

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, BOARD_SQUARES};
use crate::error::ConfigError;

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 星方，朝行号减小的方向前进（目标边为第 0 行）
    Star,
    /// 圆方，朝行号增大的方向前进（目标边为第 7 行）
    Circle,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::Star => Side::Circle,
            Side::Circle => Side::Star,
        }
    }

    /// 前进方向的行偏移
    pub fn forward(&self) -> i8 {
        match self {
            Side::Star => -1,
            Side::Circle => 1,
        }
    }

    /// 目标边所在的行，到达后的棋子不再移动
    pub fn goal_row(&self) -> u8 {
        match self {
            Side::Star => 0,
            Side::Circle => (BOARD_SIZE - 1) as u8,
        }
    }

    /// 获取格子编码用的前缀字符
    pub fn cell_char(&self) -> char {
        match self {
            Side::Star => 'S',
            Side::Circle => 'C',
        }
    }

    /// 从格子编码前缀解析
    pub fn from_cell_char(c: char) -> Option<Side> {
        match c {
            'S' => Some(Side::Star),
            'C' => Some(Side::Circle),
            _ => None,
        }
    }

    /// 输入文件中的名称
    pub fn name(&self) -> &'static str {
        match self {
            Side::Star => "Star",
            Side::Circle => "Circle",
        }
    }
}

impl FromStr for Side {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Star" => Ok(Side::Star),
            "Circle" => Ok(Side::Circle),
            other => Err(ConfigError::UnknownSide {
                token: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 格子内容
///
/// 同一格只会有一方的棋子；`count` 表示叠在一起的棋子数，始终 >= 1。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    #[default]
    Empty,
    Stack { side: Side, count: u16 },
}

impl Square {
    /// 创建一叠棋子，数量为 0 时返回 `None`
    pub fn stack(side: Side, count: u16) -> Option<Self> {
        if count == 0 {
            None
        } else {
            Some(Square::Stack { side, count })
        }
    }

    /// 单个棋子
    pub fn single(side: Side) -> Self {
        Square::Stack { side, count: 1 }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }

    /// 占据此格的阵营
    pub fn side(&self) -> Option<Side> {
        match self {
            Square::Empty => None,
            Square::Stack { side, .. } => Some(*side),
        }
    }

    /// 指定阵营在此格的棋子数
    pub fn count_for(&self, side: Side) -> u16 {
        match self {
            Square::Stack { side: s, count } if *s == side => *count,
            _ => 0,
        }
    }
}

/// 棋盘位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// 行 (0-7)
    pub row: u8,
    /// 列 (0-7)
    pub col: u8,
}

impl Position {
    /// 创建新位置
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// 创建新位置（不检查边界，内部使用）
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查位置是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// 获取偏移后的位置
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Position> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row >= 0 && (row as usize) < BOARD_SIZE && col >= 0 && (col as usize) < BOARD_SIZE {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// 与另一位置的中点（仅当两者位于同一斜线且相隔两格时有意义）
    pub fn midpoint(&self, other: Position) -> Position {
        Position {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }

    /// 转换为数组索引
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_SQUARES {
            Some(Position {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_parse() {
        assert_eq!("Star".parse::<Side>(), Ok(Side::Star));
        assert_eq!("Circle".parse::<Side>(), Ok(Side::Circle));
        assert_eq!(
            "star".parse::<Side>(),
            Err(ConfigError::UnknownSide {
                token: "star".to_string()
            })
        );
    }

    #[test]
    fn test_side_geometry() {
        assert_eq!(Side::Star.forward(), -1);
        assert_eq!(Side::Circle.forward(), 1);
        assert_eq!(Side::Star.goal_row(), 0);
        assert_eq!(Side::Circle.goal_row(), 7);
        assert_eq!(Side::Star.opponent(), Side::Circle);
        assert_eq!(Side::Circle.opponent(), Side::Star);
    }

    #[test]
    fn test_square_stack() {
        assert_eq!(Square::stack(Side::Star, 0), None);
        let sq = Square::stack(Side::Circle, 3).unwrap();
        assert_eq!(sq.side(), Some(Side::Circle));
        assert_eq!(sq.count_for(Side::Circle), 3);
        assert_eq!(sq.count_for(Side::Star), 0);
        assert!(Square::Empty.is_empty());
    }

    #[test]
    fn test_position_valid() {
        assert!(Position::new(0, 0).is_some());
        assert!(Position::new(7, 7).is_some());
        assert!(Position::new(8, 0).is_none());
        assert!(Position::new(0, 8).is_none());
    }

    #[test]
    fn test_position_offset() {
        let pos = Position::new_unchecked(0, 7);
        assert_eq!(pos.offset(-1, 1), None);
        assert_eq!(pos.offset(1, -1), Some(Position::new_unchecked(1, 6)));
    }

    #[test]
    fn test_position_midpoint_and_index() {
        let a = Position::new_unchecked(4, 4);
        let b = Position::new_unchecked(2, 6);
        assert_eq!(a.midpoint(b), Position::new_unchecked(3, 5));
        assert_eq!(Position::from_index(a.to_index()), Some(a));
        assert_eq!(Position::from_index(64), None);
    }
}
