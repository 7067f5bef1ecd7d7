//! 博弈接口
//!
//! 搜索引擎只依赖这里的几个操作，任何满足接口的双人博弈都可以复用同一套搜索。

/// 双人零和博弈
pub trait Game {
    /// 局面
    type State;
    /// 走法
    type Action: Copy + PartialEq + std::fmt::Debug;
    /// 玩家
    type Player: Copy + PartialEq;

    /// 当前局面的合法走法
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// 执行走法后得到的新局面
    fn result(&self, state: &Self::State, action: Self::Action) -> Self::State;

    /// 局面对 `player` 的价值
    fn utility(&self, state: &Self::State, player: Self::Player) -> i64;

    /// 是否为终局
    ///
    /// `history` 为到达该局面之前走过的所有走法，最近的在末尾；
    /// 默认实现只看是否还有走法。
    fn terminal_test(&self, state: &Self::State, _history: &[Self::Action]) -> bool {
        self.actions(state).is_empty()
    }

    /// 当前走子方
    fn to_move(&self, state: &Self::State) -> Self::Player;
}
