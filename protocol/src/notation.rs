//! 棋盘记号
//!
//! 位置记为 `<字母><数字>`：
//! - 字母：`'A' + (7 - row)`，第 7 行为 A，第 0 行为 H
//! - 数字：`col + 1`
//!
//! 走法记为 `<起点>-<终点>`，停一手记为 `pass`。

use crate::constants::{BOARD_SIZE, PASS_TOKEN};
use crate::error::ConfigError;
use crate::moves::Move;
use crate::piece::Position;

/// 棋盘记号
pub struct Notation;

impl Notation {
    /// 位置转换为记号
    pub fn position_to_string(pos: Position) -> String {
        let letter = (b'A' + (BOARD_SIZE as u8 - 1 - pos.row)) as char;
        format!("{}{}", letter, pos.col + 1)
    }

    /// 走法转换为记号
    pub fn move_to_string(mv: &Move) -> String {
        match mv {
            Move::Pass => PASS_TOKEN.to_string(),
            Move::Play { from, to } => format!(
                "{}-{}",
                Self::position_to_string(*from),
                Self::position_to_string(*to)
            ),
        }
    }

    /// 解析位置记号
    pub fn parse_position(text: &str) -> Result<Position, ConfigError> {
        let invalid = || ConfigError::InvalidNotation {
            value: text.to_string(),
        };

        let mut chars = text.trim().chars();
        let letter = chars.next().filter(|c| c.is_ascii_uppercase()).ok_or_else(invalid)?;
        let number: u8 = chars.as_str().parse().map_err(|_| invalid())?;

        let letter_index = letter as u8 - b'A';
        if letter_index as usize >= BOARD_SIZE || number == 0 {
            return Err(invalid());
        }
        Position::new(BOARD_SIZE as u8 - 1 - letter_index, number - 1).ok_or_else(invalid)
    }

    /// 解析走法记号
    pub fn parse_move(text: &str) -> Result<Move, ConfigError> {
        let text = text.trim();
        if text == PASS_TOKEN {
            return Ok(Move::Pass);
        }

        let (from, to) = text.split_once('-').ok_or_else(|| ConfigError::InvalidNotation {
            value: text.to_string(),
        })?;
        Ok(Move::play(Self::parse_position(from)?, Self::parse_position(to)?))
    }
}
