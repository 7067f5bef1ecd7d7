//! 搜索引擎
//!
//! 实现带深度截断的 Minimax 与 Alpha-Beta 剪枝，对任意实现 [`Game`] 的博弈通用。

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::game::Game;

/// 负无穷，真实分值（i32 权重之和）远小于 i64 的范围
const MIN_SCORE: i64 = i64::MIN;
/// 正无穷
const MAX_SCORE: i64 = i64::MAX;

/// 一次搜索的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome<A> {
    /// 最佳走法，根局面没有走法时为 `None`
    pub best_action: Option<A>,
    /// 根走子方视角的搜索值
    pub value: i64,
    /// 访问的节点数
    pub nodes: u64,
}

/// 单次搜索的上下文
///
/// 节点计数与当前路径只在一次顶层调用内有效。
struct Searcher<'a, G: Game> {
    game: &'a G,
    /// 根局面的走子方，所有叶子都以它的视角评估
    player: G::Player,
    max_depth: u32,
    /// 到达当前节点之前走过的走法（会话历史 + 搜索路径）
    line: Vec<G::Action>,
    nodes: u64,
}

impl<'a, G: Game> Searcher<'a, G> {
    fn new(game: &'a G, state: &G::State, history: &[G::Action], max_depth: u32) -> Self {
        Self {
            game,
            player: game.to_move(state),
            max_depth,
            line: history.to_vec(),
            // 根节点
            nodes: 1,
        }
    }

    /// 深度达到上限或终局时停止展开
    fn cutoff(&self, state: &G::State, depth: u32) -> bool {
        depth >= self.max_depth || self.game.terminal_test(state, &self.line)
    }

    /// 评估叶子
    fn leaf(&mut self, state: &G::State) -> i64 {
        self.nodes += 1;
        self.game.utility(state, self.player)
    }

    /// 走一步并在子局面上求值，结束后恢复路径
    fn descend<F>(&mut self, state: &G::State, action: G::Action, eval: F) -> i64
    where
        F: FnOnce(&mut Self, &G::State) -> i64,
    {
        let child = self.game.result(state, action);
        self.line.push(action);
        let value = eval(self, &child);
        self.line.pop();
        value
    }

    fn max_value(&mut self, state: &G::State, depth: u32) -> i64 {
        if self.cutoff(state, depth) {
            return self.leaf(state);
        }

        let mut v = MIN_SCORE;
        for (i, action) in self.game.actions(state).into_iter().enumerate() {
            if i == 0 {
                self.nodes += 1;
            }
            let value = self.descend(state, action, |s, child| s.min_value(child, depth + 1));
            v = v.max(value);
        }
        v
    }

    fn min_value(&mut self, state: &G::State, depth: u32) -> i64 {
        if self.cutoff(state, depth) {
            return self.leaf(state);
        }

        let mut v = MAX_SCORE;
        for (i, action) in self.game.actions(state).into_iter().enumerate() {
            if i == 0 {
                self.nodes += 1;
            }
            let value = self.descend(state, action, |s, child| s.max_value(child, depth + 1));
            v = v.min(value);
        }
        v
    }

    fn max_value_ab(&mut self, state: &G::State, mut alpha: i64, beta: i64, depth: u32) -> i64 {
        if self.cutoff(state, depth) {
            return self.leaf(state);
        }

        let mut v = MIN_SCORE;
        for (i, action) in self.game.actions(state).into_iter().enumerate() {
            if i == 0 {
                self.nodes += 1;
            }
            let value = self.descend(state, action, |s, child| {
                s.min_value_ab(child, alpha, beta, depth + 1)
            });
            v = v.max(value);
            if v >= beta {
                return v; // Beta 剪枝
            }
            alpha = alpha.max(v);
        }
        v
    }

    fn min_value_ab(&mut self, state: &G::State, alpha: i64, mut beta: i64, depth: u32) -> i64 {
        if self.cutoff(state, depth) {
            return self.leaf(state);
        }

        let mut v = MAX_SCORE;
        for (i, action) in self.game.actions(state).into_iter().enumerate() {
            if i == 0 {
                self.nodes += 1;
            }
            let value = self.descend(state, action, |s, child| {
                s.max_value_ab(child, alpha, beta, depth + 1)
            });
            v = v.min(value);
            if v <= alpha {
                return v; // Alpha 剪枝
            }
            beta = beta.min(v);
        }
        v
    }

    /// 根节点：逐个尝试走法，严格更优才替换（平局保留先出现的）
    fn root<F>(&mut self, state: &G::State, mut score: F) -> SearchOutcome<G::Action>
    where
        F: FnMut(&mut Self, &G::State, i64) -> i64,
    {
        let mut best_action = None;
        let mut best_score = MIN_SCORE;

        for action in self.game.actions(state) {
            let value = self.descend(state, action, |s, child| score(s, child, best_score));
            trace!("Root action {:?} scored {}", action, value);
            if best_action.is_none() || value > best_score {
                best_score = value;
                best_action = Some(action);
            }
        }

        SearchOutcome {
            best_action,
            value: best_score,
            nodes: self.nodes,
        }
    }
}

/// Minimax 搜索（不剪枝）
///
/// `history` 为到达 `state` 之前的走法，供终局判定使用。
pub fn minimax_decision<G: Game>(
    game: &G,
    state: &G::State,
    history: &[G::Action],
    max_depth: u32,
) -> SearchOutcome<G::Action> {
    let mut searcher = Searcher::new(game, state, history, max_depth);
    searcher.root(state, |s, child, _| s.min_value(child, 1))
}

/// Alpha-Beta 搜索
///
/// 根节点的 alpha 取目前为止最好的根走法分值，兄弟走法也会被剪枝。
/// 结果（走法与分值）与 [`minimax_decision`] 相同，只是访问的节点更少。
pub fn alpha_beta_search<G: Game>(
    game: &G,
    state: &G::State,
    history: &[G::Action],
    max_depth: u32,
) -> SearchOutcome<G::Action> {
    let mut searcher = Searcher::new(game, state, history, max_depth);
    searcher.root(state, |s, child, best| s.min_value_ab(child, best, MAX_SCORE, 1))
}
