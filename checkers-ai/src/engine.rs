//! AI 引擎
//!
//! 按配置选择 Minimax 或 Alpha-Beta，给出最佳走法及诊断信息。

use checkers_protocol::{GameInput, Move, ScoreTable, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::game::Game;
use crate::search::{alpha_beta_search, minimax_decision};
use crate::state::{Checkers, GameState};

// 重导出 Algorithm 以便外部使用
pub use checkers_protocol::Algorithm;

/// AI 配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub algorithm: Algorithm,
    pub max_depth: u32,
}

impl AiConfig {
    pub fn new(algorithm: Algorithm, max_depth: u32) -> Self {
        Self {
            algorithm,
            max_depth,
        }
    }

    /// 从输入中读取算法与深度
    pub fn from_input(input: &GameInput) -> Self {
        Self::new(input.algorithm, input.max_depth)
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::new(Algorithm::Minimax, DEFAULT_MAX_DEPTH)
    }
}

/// 一次决策的输出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// 最佳走法（可能是停一手）
    pub best_move: Move,
    /// 走完最佳走法后局面的直接评估值（根走子方视角）
    pub myopic_utility: i64,
    /// 搜索值（根走子方视角）
    pub value: i64,
    /// 访问的节点数
    pub nodes_searched: u64,
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    game: Checkers,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig, score_table: ScoreTable) -> Self {
        Self {
            config,
            game: Checkers::new(score_table),
            nodes_searched: 0,
        }
    }

    /// 从输入创建引擎和初始局面
    pub fn from_input(input: &GameInput) -> (Self, GameState) {
        let engine = Self::new(AiConfig::from_input(input), input.score_table);
        let state = engine.game.initial_state(input.board.clone(), input.to_move);
        (engine, state)
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn game(&self) -> &Checkers {
        &self.game
    }

    /// 为局面做决策（没有对局历史）
    pub fn decide(&mut self, state: &GameState) -> Decision {
        self.decide_with_history(state, &[])
    }

    /// 为局面做决策，`history` 为到达该局面前的走法
    pub fn decide_with_history(&mut self, state: &GameState, history: &[Move]) -> Decision {
        self.nodes_searched = 0;
        debug!(
            "Searching {} moves for {} with {} to depth {}",
            state.moves().len(),
            state.to_move(),
            self.config.algorithm,
            self.config.max_depth
        );

        let outcome = match self.config.algorithm {
            Algorithm::Minimax => minimax_decision(&self.game, state, history, self.config.max_depth),
            Algorithm::AlphaBeta => alpha_beta_search(&self.game, state, history, self.config.max_depth),
        };
        self.nodes_searched = outcome.nodes;

        // 走法列表永远非空，这里只是兜底
        let best_move = outcome.best_action.unwrap_or(Move::Pass);
        let myopic_state = self.game.result(state, best_move);
        let myopic_utility = self.game.utility(&myopic_state, state.to_move());

        info!(
            "Best move {} (value {}, myopic {}, {} nodes)",
            best_move, outcome.value, myopic_utility, outcome.nodes
        );

        Decision {
            best_move,
            myopic_utility,
            value: outcome.value,
            nodes_searched: outcome.nodes,
        }
    }

    /// 获取上次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new(AiConfig::default(), ScoreTable::default())
    }
}

/// 解析后的输入直接得到决策
pub fn decide(input: &GameInput) -> Decision {
    let (mut engine, state) = AiEngine::from_input(input);
    engine.decide(&state)
}
