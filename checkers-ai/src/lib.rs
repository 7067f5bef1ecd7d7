//! 叠子跳棋 AI 引擎
//!
//! 包含:
//! - 通用博弈接口
//! - 局面快照与状态转移
//! - 行权重评估函数
//! - Minimax / Alpha-Beta 搜索（深度截断）
//! - 对局会话（走法历史）

mod engine;
mod evaluate;
mod game;
mod search;
mod session;
mod state;

pub use engine::{decide, AiConfig, AiEngine, Algorithm, Decision};
pub use evaluate::Evaluator;
pub use game::Game;
pub use search::{alpha_beta_search, minimax_decision, SearchOutcome};
pub use session::GameSession;
pub use state::{Checkers, GameState};
