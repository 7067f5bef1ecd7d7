//! 行权重表

use serde::{Deserialize, Serialize};

use crate::constants::SCORE_TABLE_LEN;
use crate::error::ConfigError;
use crate::piece::Side;

/// 行权重表，每行一个整数权重
///
/// 圆方按原顺序读取，星方朝行号减小的方向前进，读取镜像后的表。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct ScoreTable {
    weights: [i32; SCORE_TABLE_LEN],
}

impl ScoreTable {
    /// 创建权重表，长度必须为 8
    pub fn new(weights: Vec<i32>) -> Result<Self, ConfigError> {
        let actual = weights.len();
        let weights: [i32; SCORE_TABLE_LEN] = weights.try_into().map_err(|_| ConfigError::ScoreTableLength {
            expected: SCORE_TABLE_LEN,
            actual,
        })?;
        Ok(Self { weights })
    }

    /// 解析逗号分隔的权重
    pub fn parse(line: &str) -> Result<Self, ConfigError> {
        let weights = line
            .trim()
            .split(',')
            .map(|w| {
                w.trim().parse::<i32>().map_err(|_| ConfigError::InvalidWeight {
                    value: w.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(weights)
    }

    /// 指定阵营在某一行的权重
    pub fn weight(&self, side: Side, row: u8) -> i32 {
        let row = row as usize;
        match side {
            Side::Circle => self.weights[row],
            Side::Star => self.weights[SCORE_TABLE_LEN - 1 - row],
        }
    }

    /// 原始权重（圆方视角）
    pub fn weights(&self) -> &[i32; SCORE_TABLE_LEN] {
        &self.weights
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            weights: [1; SCORE_TABLE_LEN],
        }
    }
}

impl TryFrom<Vec<i32>> for ScoreTable {
    type Error = ConfigError;

    fn try_from(weights: Vec<i32>) -> Result<Self, Self::Error> {
        Self::new(weights)
    }
}

impl From<ScoreTable> for Vec<i32> {
    fn from(table: ScoreTable) -> Self {
        table.weights.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_checked() {
        assert!(ScoreTable::new(vec![1; 8]).is_ok());
        assert_eq!(
            ScoreTable::new(vec![1; 7]),
            Err(ConfigError::ScoreTableLength { expected: 8, actual: 7 })
        );
        assert!(ScoreTable::new(vec![1; 9]).is_err());
    }

    #[test]
    fn test_weight_orientation() {
        let table = ScoreTable::new(vec![10, 20, 30, 40, 50, 60, 70, 80]).unwrap();
        assert_eq!(table.weight(Side::Circle, 0), 10);
        assert_eq!(table.weight(Side::Circle, 7), 80);
        assert_eq!(table.weight(Side::Star, 0), 80);
        assert_eq!(table.weight(Side::Star, 7), 10);
    }

    #[test]
    fn test_parse() {
        let table = ScoreTable::parse("1, 2,3,4,5,6,7,8\r").unwrap();
        assert_eq!(table.weights(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(ScoreTable::parse("1,2,x,4,5,6,7,8").is_err());
        assert!(ScoreTable::parse("1,2,3").is_err());
    }

    #[test]
    fn test_serde_rejects_wrong_length() {
        let table: ScoreTable = serde_json::from_str("[0,1,2,3,4,5,6,7]").unwrap();
        assert_eq!(table.weight(Side::Circle, 3), 3);
        assert!(serde_json::from_str::<ScoreTable>("[1,2]").is_err());
    }
}
