//! 棋局评估函数

use checkers_protocol::{Board, ScoreTable, Side};

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 评估棋局（`player` 视角，正值对 `player` 有利）
    ///
    /// 己方每枚棋子按所在行取权重求和，减去对方的同样求和；
    /// 星方读取镜像后的权重表，圆方读取原表。
    ///
    /// 权重为 `i32`，求和用 `i64`：单方最多 65535 枚棋子，任何权重都不会溢出。
    pub fn utility(board: &Board, player: Side, table: &ScoreTable) -> i64 {
        let (stars, circles) = board.piece_positions();
        let star_score: i64 = stars.iter().map(|p| i64::from(table.weight(Side::Star, p.row))).sum();
        let circle_score: i64 = circles
            .iter()
            .map(|p| i64::from(table.weight(Side::Circle, p.row)))
            .sum();

        match player {
            Side::Star => star_score - circle_score,
            Side::Circle => circle_score - star_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_protocol::{Position, Square};

    fn table() -> ScoreTable {
        ScoreTable::new(vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap()
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(Evaluator::utility(&board, Side::Star, &table()), 0);
    }

    #[test]
    fn test_star_reads_mirrored_table() {
        let mut board = Board::empty();
        // 星方在第 1 行，镜像后权重为 7
        board.set(Position::new_unchecked(1, 0), Square::single(Side::Star));
        assert_eq!(Evaluator::utility(&board, Side::Star, &table()), 7);
        assert_eq!(Evaluator::utility(&board, Side::Circle, &table()), -7);
    }

    #[test]
    fn test_circle_reads_table_as_given() {
        let mut board = Board::empty();
        board.set(Position::new_unchecked(6, 3), Square::single(Side::Circle));
        board.set(Position::new_unchecked(6, 4), Square::single(Side::Star));
        // 圆方 7，星方 2
        assert_eq!(Evaluator::utility(&board, Side::Circle, &table()), 5);
        assert_eq!(Evaluator::utility(&board, Side::Star, &table()), -5);
    }

    #[test]
    fn test_stacks_count_each_piece() {
        let mut board = Board::empty();
        board.set(Position::new_unchecked(0, 0), Square::stack(Side::Star, 3).unwrap());
        assert_eq!(Evaluator::utility(&board, Side::Star, &table()), 24);
        assert_eq!(Evaluator::utility(&board, Side::Circle, &table()), -24);
    }

    #[test]
    fn test_extreme_weights_do_not_overflow() {
        let mut board = Board::empty();
        board.set(Position::new_unchecked(3, 3), Square::stack(Side::Star, 2).unwrap());
        board.set(Position::new_unchecked(4, 4), Square::single(Side::Circle));

        let high = ScoreTable::new(vec![1_500_000_000; 8]).unwrap();
        assert_eq!(Evaluator::utility(&board, Side::Star, &high), 1_500_000_000);

        let max = ScoreTable::new(vec![i32::MAX; 8]).unwrap();
        board.set(Position::new_unchecked(4, 4), Square::Empty);
        assert_eq!(Evaluator::utility(&board, Side::Star, &max), 2 * i64::from(i32::MAX));

        let min = ScoreTable::new(vec![i32::MIN; 8]).unwrap();
        assert_eq!(Evaluator::utility(&board, Side::Circle, &min), -2 * i64::from(i32::MIN));
    }

    #[test]
    fn test_symmetric_position() {
        // 星方在第 5 行与圆方在第 2 行前进距离相同
        let mut board = Board::empty();
        board.set(Position::new_unchecked(5, 1), Square::single(Side::Star));
        board.set(Position::new_unchecked(2, 6), Square::single(Side::Circle));
        assert_eq!(Evaluator::utility(&board, Side::Star, &table()), 0);
    }
}
