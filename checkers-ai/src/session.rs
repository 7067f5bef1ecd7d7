//! 对局会话
//!
//! 持有当前局面与实际走过的走法历史，终局判定和搜索都从这里取历史。

use checkers_protocol::Move;
use tracing::warn;

use crate::engine::{AiEngine, Decision};
use crate::game::Game;
use crate::state::{Checkers, GameState};

/// 单局对局会话
#[derive(Debug, Clone)]
pub struct GameSession {
    game: Checkers,
    state: GameState,
    history: Vec<Move>,
}

impl GameSession {
    pub fn new(game: Checkers, state: GameState) -> Self {
        Self {
            game,
            state,
            history: Vec::new(),
        }
    }

    /// 当前局面
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// 已走过的走法，最近的在末尾
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn game(&self) -> &Checkers {
        &self.game
    }

    /// 走一步，返回走法是否被接受
    ///
    /// 不合法的走法不改变局面，也不记入历史。
    pub fn play(&mut self, mv: Move) -> bool {
        if !self.state.moves().contains(&mv) {
            warn!("Ignoring illegal move {} for {}", mv, self.state.to_move());
            return false;
        }

        self.state = self.game.result(&self.state, mv);
        self.history.push(mv);
        true
    }

    /// 是否已经终局
    pub fn is_over(&self) -> bool {
        self.game.terminal_test(&self.state, &self.history)
    }

    /// 让引擎为当前局面做决策
    pub fn decide(&self, engine: &mut AiEngine) -> Decision {
        engine.decide_with_history(&self.state, &self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_protocol::{Board, Position, ScoreTable, Side, Square};

    fn blocked_session() -> GameSession {
        let game = Checkers::new(ScoreTable::new(vec![1; 8]).unwrap());
        let mut board = Board::empty();
        board.set(Position::new_unchecked(0, 2), Square::single(Side::Star));
        board.set(Position::new_unchecked(7, 5), Square::single(Side::Circle));
        let state = game.initial_state(board, Side::Star);
        GameSession::new(game, state)
    }

    #[test]
    fn test_consecutive_passes_end_game() {
        let mut session = blocked_session();
        assert_eq!(session.state().moves(), &[Move::Pass]);
        assert!(!session.is_over());

        assert!(session.play(Move::Pass));
        assert_eq!(session.state().moves(), &[Move::Pass]);
        assert!(!session.is_over());

        assert!(session.play(Move::Pass));
        assert_eq!(session.state().to_move(), Side::Star);
        assert_eq!(session.history(), &[Move::Pass, Move::Pass]);
        assert!(session.is_over());
    }

    #[test]
    fn test_illegal_move_rejected() {
        let mut session = blocked_session();
        let before = session.state().clone();
        let illegal = Move::play(Position::new_unchecked(0, 2), Position::new_unchecked(1, 1));
        assert!(!session.play(illegal));
        assert_eq!(session.state(), &before);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_decide_uses_history() {
        let mut session = blocked_session();
        session.play(Move::Pass);
        session.play(Move::Pass);

        let mut engine = AiEngine::default();
        let decision = session.decide(&mut engine);
        assert_eq!(decision.best_move, Move::Pass);
        assert_eq!(decision.value, decision.myopic_utility);
    }
}
