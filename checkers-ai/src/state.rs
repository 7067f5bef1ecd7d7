//! 局面快照与叠子跳棋规则

use checkers_protocol::{Board, Move, MoveGenerator, ScoreTable, Side};
use serde::{Deserialize, Serialize};

use crate::evaluate::Evaluator;
use crate::game::Game;

/// 局面快照
///
/// 构造后不再修改；走子总是生成新的快照，棋盘先复制再改动。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    to_move: Side,
    /// 以 `to_move` 视角缓存的评估值
    utility: i64,
    board: Board,
    moves: Vec<Move>,
    prev_move: Option<Move>,
}

impl GameState {
    /// 当前走子方
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// 走子方视角的评估值
    pub fn utility(&self) -> i64 {
        self.utility
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 合法走法，永远非空
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// 产生该局面的走法，初始局面为 `None`
    pub fn prev_move(&self) -> Option<Move> {
        self.prev_move
    }

    /// 是否只能停一手
    pub fn must_pass(&self) -> bool {
        self.moves.first() == Some(&Move::Pass)
    }
}

/// 叠子跳棋
#[derive(Debug, Clone)]
pub struct Checkers {
    score_table: ScoreTable,
}

impl Checkers {
    pub fn new(score_table: ScoreTable) -> Self {
        Self { score_table }
    }

    pub fn score_table(&self) -> &ScoreTable {
        &self.score_table
    }

    /// 创建初始局面
    pub fn initial_state(&self, board: Board, to_move: Side) -> GameState {
        self.snapshot(board, to_move, None)
    }

    /// 为走子方重新计算评估值和走法
    fn snapshot(&self, board: Board, to_move: Side, prev_move: Option<Move>) -> GameState {
        let (stars, circles) = board.piece_positions();
        let moves = MoveGenerator::generate(&board, to_move, &stars, &circles);
        let utility = Evaluator::utility(&board, to_move, &self.score_table);
        GameState {
            to_move,
            utility,
            board,
            moves,
            prev_move,
        }
    }
}

impl Default for Checkers {
    fn default() -> Self {
        Self::new(ScoreTable::default())
    }
}

impl Game for Checkers {
    type State = GameState;
    type Action = Move;
    type Player = Side;

    fn actions(&self, state: &GameState) -> Vec<Move> {
        state.moves.clone()
    }

    /// 执行走法
    ///
    /// 不在合法走法列表中的走法不生效，原样返回当前局面。
    fn result(&self, state: &GameState, action: Move) -> GameState {
        if !state.moves.contains(&action) {
            return state.clone();
        }

        let mut board = state.board.clone();
        board.apply_move(state.to_move, action);
        self.snapshot(board, state.to_move.opponent(), Some(action))
    }

    fn utility(&self, state: &GameState, player: Side) -> i64 {
        if player == state.to_move {
            state.utility
        } else {
            -state.utility
        }
    }

    /// 终局判定
    ///
    /// 1. 任意一方没有棋子；
    /// 2. 连续两手停一手：本局面只能停，产生它的走法是停，再之前一手也是停。
    fn terminal_test(&self, state: &GameState, history: &[Move]) -> bool {
        if state.board.count(Side::Star) == 0 || state.board.count(Side::Circle) == 0 {
            return true;
        }

        state.must_pass()
            && state.prev_move == Some(Move::Pass)
            && history.iter().rev().nth(1) == Some(&Move::Pass)
    }

    fn to_move(&self, state: &GameState) -> Side {
        state.to_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_protocol::{Position, Square};

    fn pos(row: u8, col: u8) -> Position {
        Position::new_unchecked(row, col)
    }

    fn game() -> Checkers {
        Checkers::new(ScoreTable::new(vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap())
    }

    fn sample_state(game: &Checkers) -> GameState {
        let mut board = Board::empty();
        board.set(pos(4, 4), Square::single(Side::Star));
        board.set(pos(3, 5), Square::single(Side::Circle));
        board.set(pos(6, 1), Square::stack(Side::Star, 2).unwrap());
        game.initial_state(board, Side::Star)
    }

    #[test]
    fn test_initial_state() {
        let game = game();
        let state = sample_state(&game);
        assert_eq!(state.to_move(), Side::Star);
        assert_eq!(state.prev_move(), None);
        assert_eq!(state.utility(), Evaluator::utility(state.board(), Side::Star, game.score_table()));
        assert!(!state.moves().is_empty());
    }

    #[test]
    fn test_result_flips_side() {
        let game = game();
        let state = sample_state(&game);
        let mv = state.moves()[0];
        let next = game.result(&state, mv);
        assert_eq!(next.to_move(), Side::Circle);
        assert_eq!(next.prev_move(), Some(mv));
        assert_eq!(next.moves(), MoveGenerator::generate_for(next.board(), Side::Circle).as_slice());
    }

    #[test]
    fn test_illegal_move_is_noop() {
        let game = game();
        let state = sample_state(&game);
        let illegal = Move::play(pos(0, 0), pos(1, 1));
        assert_eq!(game.result(&state, illegal), state);
        assert_eq!(game.result(&state, Move::Pass), state);
    }

    #[test]
    fn test_pass_keeps_board() {
        let game = game();
        let mut board = Board::empty();
        board.set(pos(0, 3), Square::single(Side::Star));
        board.set(pos(5, 5), Square::single(Side::Circle));
        let state = game.initial_state(board.clone(), Side::Star);
        assert_eq!(state.moves(), &[Move::Pass]);

        let next = game.result(&state, Move::Pass);
        assert_eq!(next.board(), &board);
        assert_eq!(next.to_move(), Side::Circle);
        assert_eq!(next.prev_move(), Some(Move::Pass));
        assert_eq!(next.utility(), -state.utility());
    }

    #[test]
    fn test_jump_touches_only_three_squares() {
        let game = game();
        let state = sample_state(&game);
        let jump = Move::play(pos(4, 4), pos(2, 6));
        assert!(state.moves().contains(&jump));

        let next = game.result(&state, jump);
        let before = state.board();
        let after = next.board();
        for index in 0..64 {
            let p = Position::from_index(index).unwrap();
            if p == pos(4, 4) || p == pos(3, 5) || p == pos(2, 6) {
                continue;
            }
            assert_eq!(before.get(p), after.get(p), "square {} changed", p);
        }
        assert!(after.get(pos(4, 4)).is_empty());
        assert!(after.get(pos(3, 5)).is_empty());
        assert_eq!(after.get(pos(2, 6)), Square::single(Side::Star));
        assert_eq!(after.count(Side::Circle), before.count(Side::Circle) - 1);
    }

    #[test]
    fn test_utility_is_player_relative() {
        let game = game();
        let state = sample_state(&game);
        assert_eq!(game.utility(&state, Side::Star), -game.utility(&state, Side::Circle));
    }

    #[test]
    fn test_terminal_when_side_empty() {
        let game = game();
        let mut board = Board::empty();
        board.set(pos(4, 4), Square::single(Side::Star));
        let state = game.initial_state(board, Side::Circle);
        assert!(game.terminal_test(&state, &[]));
    }

    #[test]
    fn test_terminal_after_two_passes() {
        let game = game();
        let mut board = Board::empty();
        board.set(pos(0, 0), Square::single(Side::Star));
        board.set(pos(7, 7), Square::single(Side::Circle));

        let first = game.initial_state(board, Side::Star);
        assert_eq!(first.moves(), &[Move::Pass]);
        assert!(!game.terminal_test(&first, &[]));

        let second = game.result(&first, Move::Pass);
        assert_eq!(second.moves(), &[Move::Pass]);
        assert!(!game.terminal_test(&second, &[Move::Pass]));

        let third = game.result(&second, Move::Pass);
        assert!(game.terminal_test(&third, &[Move::Pass, Move::Pass]));
    }

    #[test]
    fn test_pass_after_real_move_not_terminal() {
        let game = game();
        let mut board = Board::empty();
        board.set(pos(0, 0), Square::single(Side::Star));
        board.set(pos(7, 7), Square::single(Side::Circle));
        let state = game.initial_state(board, Side::Star);
        let next = game.result(&state, Move::Pass);
        let history = [Move::play(pos(1, 1), pos(0, 0)), Move::Pass];
        assert!(!game.terminal_test(&next, &history));
    }
}
